//! Cafe Central CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (DATABASE_URL, default sqlite:cafe_central.db)
//! cafe-cli migrate
//!
//! # Load a small sample menu and customer
//! cafe-cli seed
//!
//! # Manage the menu
//! cafe-cli menu add --name "Latte" --price 4.50
//! cafe-cli menu list
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with sample data
//! - `menu` - Add and list menu items

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cafe-cli")]
#[command(author, version, about = "Cafe Central CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with sample data
    Seed,
    /// Manage menu items
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Add a menu item
    Add {
        /// Item display name
        #[arg(short, long)]
        name: String,

        /// Item price, e.g. 4.50
        #[arg(short, long)]
        price: String,
    },
    /// List all menu items
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Menu { action } => match action {
            MenuAction::Add { name, price } => commands::menu::add(&name, &price).await?,
            MenuAction::List => commands::menu::list().await?,
        },
    }
    Ok(())
}
