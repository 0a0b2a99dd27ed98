//! Switchyard CLI

mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use switchyard_config::{load_config, Config};
use table::{build_trie, LookupReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "switchyard")]
#[command(about = "Switchyard route table tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "SWITCHYARD_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a route table and build its trie
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,
    },

    /// Match a request against a route table
    Match {
        /// Path to configuration file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,

        /// Request method
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request path
        path: String,
    },

    /// Print the compiled trie
    Dump {
        /// Path to configuration file
        #[arg(short, long, default_value = "routes.yaml")]
        config: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = cli.log_level;

    match cli.command {
        Commands::Validate { config } => {
            let config = load(&config, log_level.as_deref())?;

            match build_trie(&config) {
                Ok(trie) => {
                    tracing::info!("✓ Route table is valid");
                    tracing::info!("  Routes: {}", trie.len());
                    tracing::info!("  Nodes: {}", trie.node_count());
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = e.kind_name(), "✗ Route table rejected: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Match {
            config,
            method,
            path,
        } => {
            let config = load(&config, log_level.as_deref())?;
            let trie = build_trie(&config)?;

            let report = LookupReport::from(trie.resolve(&method, &path));
            println!("{}", serde_json::to_string_pretty(&report)?);

            if report.status != 200 {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Dump { config } => {
            let config = load(&config, log_level.as_deref())?;
            let trie = build_trie(&config)?;

            print!("{trie}");
            Ok(())
        }

        Commands::Version => {
            println!("Switchyard");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
            Ok(())
        }
    }
}

/// Load a route table, then set up logging from its `logging` section
fn load(path: &Path, level_override: Option<&str>) -> Result<Config> {
    let config = load_config(path)?;

    let level = level_override.unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format);

    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

fn init_tracing(level: &str, format: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout is reserved for command output
    if format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
