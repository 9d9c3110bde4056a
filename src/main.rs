use clap::{Parser, Subcommand};
use listing_presenter::commands::*;
use listing_presenter::core::{error::Result, locale::Locale, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listing-presenter")]
#[command(about = "Localized listing presentation for classified marketplaces")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Display locale (en or ar)
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render listing cards from a JSON file
    Present {
        /// Path to a JSON array of raw listing records
        file: PathBuf,
    },
    /// Print the URL-safe slug for the given text
    Slug {
        /// Text to slugify (e.g., "Toyota Corolla 2019")
        words: Vec<String>,
    },
    /// Format a price for the active locale
    Price {
        /// Amount in whole currency units (e.g., 1500)
        amount: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Present { file } => execute_present(&file, cli.locale),
        Commands::Slug { words } => execute_slug(&words),
        Commands::Price { amount } => execute_price(amount, cli.locale),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
