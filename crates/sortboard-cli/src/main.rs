//! sortboard CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "sortboard",
    version,
    about = "Drag-and-drop sorting board with placement scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a saved board arrangement against the catalog
    Score {
        /// Path to the JSON task catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Path to the JSON layout (zone name -> ordered task ids)
        #[arg(long)]
        layout: PathBuf,

        /// Show pending cards whose label contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Output directory for report files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Replay a drag-and-drop event script against a fresh board
    Replay {
        /// Path to the JSON task catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Path to the JSON event script
        #[arg(long)]
        events: PathBuf,

        /// Seed for the initial shuffle (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for report files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Shuffle the full catalog into a fresh pending pool and print it
    Shuffle {
        /// Path to the JSON task catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Seed for the shuffle (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate a catalog file
    Validate {
        /// Path to the JSON task catalog
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create a starter catalog, layout, and event script
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sortboard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            catalog,
            layout,
            filter,
            output,
            format,
        } => commands::score::execute(catalog, layout, filter, output, format).await,
        Commands::Replay {
            catalog,
            events,
            seed,
            output,
            format,
        } => commands::replay::execute(catalog, events, seed, output, format).await,
        Commands::Shuffle { catalog, seed } => commands::shuffle::execute(catalog, seed).await,
        Commands::Validate { catalog } => commands::validate::execute(catalog).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
