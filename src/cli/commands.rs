//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::PipelineClient;
use crate::core::config::TranslatorConfig;
use crate::core::models::TranslationRequest;
use crate::server::api;

/// Commands for the Bhashini translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server (default)
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: 5001)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Translate a single text and print the JSON response
    Translate {
        /// Text to translate
        #[arg(long)]
        text: String,

        /// Target language code
        #[arg(short, long)]
        target_lang: String,

        /// Source language code (default: en)
        #[arg(short, long)]
        source_lang: Option<String>,
    },
}

/// Handle server command
pub async fn handle_serve(
    mut config: TranslatorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Pipeline endpoint: {}", config.pipeline_endpoint);
    api::run_server(config).await
}

/// Handle one-shot translation command
pub async fn handle_translate(
    config: TranslatorConfig,
    text: String,
    target_lang: String,
    source_lang: Option<String>,
) -> anyhow::Result<()> {
    let client = PipelineClient::new(config)?;

    let mut request = TranslationRequest::new(text, target_lang);
    if let Some(lang) = source_lang {
        request = request.with_source_lang(lang);
    }

    let response = client.translate(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
