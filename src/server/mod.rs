//! HTTP server exposing the translation forwarder

pub mod api;
