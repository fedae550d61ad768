//! # cardbox-cli
//!
//! Thin command-line collaborator over the cardbox core.  All business
//! logic lives in `cardbox-scan`, `cardbox-store`, and `cardbox-shared`;
//! this binary only acquires input, calls the public entry points, and
//! prints results.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardbox_store::CardStore;

#[derive(Parser)]
#[command(name = "cardbox", version, about = "Offline store loyalty card wallet")]
struct Cli {
    /// Use an explicit database file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a QR code or barcode from an image file
    Scan {
        /// Path to the image
        image: PathBuf,
        /// Save the decoded code as a new card with this store name
        #[arg(long, value_name = "STORE_NAME")]
        save_as: Option<String>,
    },
    /// Add a card from manually entered code text
    Add {
        store_name: String,
        payload: String,
    },
    /// List all cards, most recently touched first
    List,
    /// Search cards by store name
    Search { query: String },
    /// Show a single card
    Show { id: String },
    /// Edit a card's store name or payload
    Edit {
        id: String,
        #[arg(long)]
        store_name: Option<String>,
        #[arg(long)]
        payload: Option<String>,
    },
    /// Delete a card
    Rm { id: String },
    /// Delete every card
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let store = match &cli.db {
        Some(path) => CardStore::open_at(path)?,
        None => CardStore::open()?,
    };

    match cli.command {
        Command::Scan { image, save_as } => commands::scan(&store, &image, save_as).await,
        Command::Add {
            store_name,
            payload,
        } => commands::add(&store, store_name, payload).await,
        Command::List => commands::list(&store).await,
        Command::Search { query } => commands::search(&store, &query).await,
        Command::Show { id } => commands::show(&store, &id).await,
        Command::Edit {
            id,
            store_name,
            payload,
        } => commands::edit(&store, &id, store_name, payload).await,
        Command::Rm { id } => commands::rm(&store, &id).await,
        Command::Clear { yes } => commands::clear(&store, yes).await,
    }
}
