//! Main entry point for the Bhashini translator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bhashini_translator::cli::commands::{self, Commands};
use bhashini_translator::TranslatorConfig;

/// Bhashini Translator - forwards translation requests to the Bhashini pipeline
#[derive(Parser, Debug)]
#[command(name = "bhashini-translator", version, about, long_about = None)]
struct Args {
    /// Settings file (default: translator.* in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key for Bhashini (optional, defaults to TRANSLATION_BHASHINI_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("bhashini_translator={0},tower_http={0}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = TranslatorConfig::load_from(args.config.as_deref())?;
    if let Some(api_key) = args.api_key {
        config.bhashini_api_key = Some(api_key);
    }

    match args.command {
        Some(Commands::Serve { host, port }) => {
            commands::handle_serve(config, host, port).await?;
        }
        Some(Commands::Translate {
            text,
            target_lang,
            source_lang,
        }) => {
            commands::handle_translate(config, text, target_lang, source_lang).await?;
        }
        None => {
            commands::handle_serve(config, None, None).await?;
        }
    }

    Ok(())
}
