//! Strata CLI - strata command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

/// Strata - versioned file store
#[derive(Parser)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a storage root
    Init {
        /// Storage root directory
        #[arg(long, default_value = "./storage", env = "STRATA_ROOT")]
        root: PathBuf,
    },
    /// Run the HTTP server
    Serve {
        /// Storage root directory
        #[arg(long, default_value = "./storage", env = "STRATA_ROOT")]
        root: PathBuf,

        /// Listen address
        #[arg(long, default_value = "127.0.0.1", env = "STRATA_HOST")]
        host: String,

        /// Listen port
        #[arg(long, default_value_t = 4000, env = "STRATA_PORT")]
        port: u16,
    },
    /// Duplicate the current revision into a new one
    Snapshot {
        /// Storage root directory
        #[arg(long, default_value = "./storage", env = "STRATA_ROOT")]
        root: PathBuf,
    },
    /// Show HEAD and the revision list
    Revisions {
        /// Storage root directory
        #[arg(long, default_value = "./storage", env = "STRATA_ROOT")]
        root: PathBuf,
    },
    /// Import a ZIP archive as a new revision
    Import {
        /// Path to the ZIP file
        archive: PathBuf,

        /// Storage root directory
        #[arg(long, default_value = "./storage", env = "STRATA_ROOT")]
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "strata_core=info,strata_server=info,tower_http=info".into()
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { root } => cmd::init::run(&root),
        Commands::Serve { root, host, port } => cmd::serve::run(&root, &host, port).await,
        Commands::Snapshot { root } => cmd::snapshot::run(&root),
        Commands::Revisions { root } => cmd::revisions::run(&root),
        Commands::Import { archive, root } => cmd::import::run(&archive, &root),
    }
}
