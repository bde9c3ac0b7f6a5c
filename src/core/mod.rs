//! Core translation forwarding module

pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
