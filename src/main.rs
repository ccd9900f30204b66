//! ainotes: Command-line interface for the notes MCP server

use ainotes::config::{path_resolver, run_init, AppConfig};
use ainotes::mcp::NotesMcpServer;
use ainotes::store::NotesStore;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use std::path::PathBuf;
use tokio::io::{stdin, stdout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ainotes: Rust-based MCP server for a flat-file note log
#[derive(Parser)]
#[command(name = "ainotes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (default: ~/.config/ainotes/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the notes file (overrides config and environment)
    #[arg(short, long, global = true)]
    notes_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize ainotes configuration and the notes file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Start the MCP server on stdio
    Serve,
    /// Append a note
    Add {
        /// Note text (one line)
        message: String,
    },
    /// Print every note
    Read,
    /// Print the latest note
    Latest,
    /// Print the summarization prompt
    Prompt,
}

/// Build the effective config: file < environment < CLI flags
fn load_config(cli: &Cli) -> Result<AppConfig> {
    // init may be asked to create the explicit config file
    let config_path = cli
        .config
        .as_deref()
        .filter(|path| path.exists() || !matches!(cli.command, Commands::Init { .. }));
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = &cli.notes_file {
        config = config.with_notes_file_path(path);
    }
    config.validate()?;
    Ok(config)
}

fn open_store(config: &AppConfig) -> Result<NotesStore> {
    let path = config.resolve_notes_path()?;
    tracing::debug!("Using notes file {}", path.display());
    NotesStore::open(&path).with_context(|| format!("Failed to open notes file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (to stderr to not interfere with MCP stdio)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Init { force } => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(path_resolver::get_default_config_path);

            eprintln!("Initializing ainotes configuration...");
            eprintln!("Config file: {}", config_path.display());

            let outcome = run_init(&config_path, &config, force)?;
            if outcome.config_written {
                eprintln!("Created configuration file: {}", config_path.display());
            } else {
                eprintln!("Configuration file already exists: {}", config_path.display());
                eprintln!("Use --force to overwrite");
            }

            eprintln!("Notes file: {}", outcome.notes_path.display());
            eprintln!("\nInitialization complete!");
            Ok(())
        }
        Commands::Serve => {
            let store = open_store(&config)?;
            tracing::info!("Starting MCP server with notes file: {}", store.path().display());
            eprintln!("ainotes MCP server starting... (notes: {})", store.path().display());

            let server = NotesMcpServer::new(store, config.server_name());

            // Serve via stdio transport
            let transport = (stdin(), stdout());
            let service = server.serve(transport).await?;

            // Wait for service to complete
            let _quit_reason = service.waiting().await?;
            tracing::info!("MCP server stopped");
            Ok(())
        }
        Commands::Add { message } => {
            let store = open_store(&config)?;
            println!("{}", store.append_note(&message)?);
            Ok(())
        }
        Commands::Read => {
            let store = open_store(&config)?;
            println!("{}", store.read_all()?);
            Ok(())
        }
        Commands::Latest => {
            let store = open_store(&config)?;
            println!("{}", store.read_latest()?);
            Ok(())
        }
        Commands::Prompt => {
            let store = open_store(&config)?;
            println!("{}", store.build_summary_prompt()?);
            Ok(())
        }
    }
}
