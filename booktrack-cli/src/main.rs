//! Booktrack CLI - Command-line interface for the reading tracker

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "booktrack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory for the book store
    /// (defaults to $BOOKTRACK_DATA_PATH, then ./booktrack_data)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the book catalog
    Search {
        /// Free-text query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a catalog volume to a user's library
    Add {
        /// Catalog volume identifier
        volume_id: String,

        /// Owning user
        #[arg(short, long)]
        user: String,
    },

    /// List a user's saved books by shelf
    List {
        /// Owning user
        #[arg(short, long)]
        user: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show reading statistics for a user
    Stats {
        /// Owning user
        #[arg(short, long)]
        user: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a saved book as started
    Start {
        /// Saved record identifier
        id: String,
    },

    /// Mark a saved book as finished
    Finish {
        /// Saved record identifier
        id: String,
    },
}

impl Cli {
    fn data_dir(&self) -> String {
        self.data_dir
            .clone()
            .or_else(|| std::env::var("BOOKTRACK_DATA_PATH").ok())
            .unwrap_or_else(|| "./booktrack_data".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "booktrack_cli=debug,booktrack_core=debug"
    } else {
        "booktrack_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = cli.data_dir();

    match cli.command {
        Commands::Search { query, json } => commands::search(&query, json).await,

        Commands::Add { volume_id, user } => commands::add(&data_dir, &volume_id, &user).await,

        Commands::List { user, json } => commands::list(&data_dir, &user, json).await,

        Commands::Stats { user, json } => commands::stats(&data_dir, &user, json).await,

        Commands::Start { id } => commands::start(&data_dir, &id).await,

        Commands::Finish { id } => commands::finish(&data_dir, &id).await,
    }
}
