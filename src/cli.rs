//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use receipt_points::output::OutputMode;

/// receipt-points - Store purchase receipts and score them
#[derive(Parser, Debug)]
#[command(
    name = "receipt-points",
    version,
    about = "Store purchase receipts and score them",
    long_about = "Accepts purchase receipts over HTTP, stores them in memory, and scores them.\n\n\
                  Points are the sum of a fixed set of rules over the retailer, total,\n\
                  items, and purchase date and time."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long, env = "RECEIPT_POINTS_HOST")]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long, env = "RECEIPT_POINTS_PORT")]
        port: Option<u16>,

        /// Number of request worker threads (overrides config)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Score a receipt JSON file without starting the service
    Score {
        /// Receipt file, or `-` for stdin
        file: String,

        /// Show the contribution of each rule
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Check a receipt JSON file against the parsing and validation rules
    Validate {
        /// Receipt file, or `-` for stdin
        file: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            workers,
            config,
        }) => commands::serve(config.as_deref(), host, port, workers),
        Some(Command::Score { file, breakdown }) => commands::score(&file, breakdown, output_mode),
        Some(Command::Validate { file }) => commands::validate(&file, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": receipt_points::VERSION
                    })
                );
            } else {
                println!("receipt-points v{}", receipt_points::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": receipt_points::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("receipt-points v{}", receipt_points::VERSION);
                println!("\nRun 'receipt-points --help' for usage");
                println!("Run 'receipt-points serve' to start the service");
            }
            Ok(())
        },
    }
}
