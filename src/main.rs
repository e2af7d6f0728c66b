//! xano-developer-mcp: MCP server for AI-assisted Xano development
//!
//! This tool serves XanoScript documentation and validates XanoScript code
//! so AI assistants can develop against Xano without guessing at syntax.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use xano_developer_mcp::config;
use xano_developer_mcp::docs::DocsContext;
use xano_developer_mcp::mcp::server::McpServer;

/// MCP server for AI-assisted Xano development.
///
/// Serves XanoScript language documentation, Meta/Run API references, and
/// CLI documentation, and validates XanoScript code over stdio.
#[derive(Parser, Debug)]
#[command(name = "xano-developer-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Path to the XanoScript documentation directory
    #[arg(long, value_name = "DIR")]
    docs_path: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the xano-developer-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if config_path.is_some() {
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("\nDefault config location: {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Banner goes to stderr; stdout is reserved for MCP messages.
    eprintln!(
        "xano-developer-mcp {} (XanoScript docs and validation over MCP)",
        env!("CARGO_PKG_VERSION")
    );

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting xano-developer-mcp server"
    );

    // CLI flag wins over the config file for the docs root.
    let docs_override = args.docs_path.or(cfg.docs_path);
    let docs = DocsContext::discover(docs_override);

    info!(docs_root = %docs.root().display(), "Documentation root resolved");

    // Create MCP server
    let mut server = McpServer::new(docs);

    info!("MCP server ready, waiting for client connection...");

    // Run the server
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(server.run());

    match result {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
