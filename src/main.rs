//! Boli - English, Hindi and Gadhwali sentence translation
//!
//! Entry point: runs the HTTP translation server or translates a single
//! sentence from the command line.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use boli::cli::{Args, Commands};
use boli::config::Config;
use boli::server::{self, state::AppState};
use boli::translate::TranslationOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Serve { host, port, data } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(data) = data {
                config.dictionary.csv_path = data;
            }

            info!("Starting translation server...");
            let translator = TranslationOrchestrator::from_config(&config)?;
            let state = AppState::new(translator);
            server::serve(state, &config.server.bind_address()).await?;
        }
        Commands::Translate { text, source, target, data, offline } => {
            if let Some(data) = data {
                config.dictionary.csv_path = data;
            }
            if offline {
                config.online.enabled = false;
            }

            let translator = TranslationOrchestrator::from_config(&config)?;
            let translation = translator.translate_codes(&text, &source, &target).await?;
            println!("{}", translation);
        }
        Commands::InitConfig { output } => {
            config.save_to_file(&output)?;
            info!("Configuration written to {}", output.display());
        }
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = std::env::current_dir()?.join(".boli").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotation; the guard must outlive the program
    let file_appender = rolling::daily(&log_dir, "boli.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("boli.log").display());

    Ok(())
}
