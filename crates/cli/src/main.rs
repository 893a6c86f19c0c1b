//! Elegance CLI - Terminal front end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop, filtered and sorted
//! elegance products --category evening --sort price-high
//! elegance product 1
//!
//! # Fill the bag
//! elegance cart add 1 --size M
//! elegance cart update 1 M 3
//! elegance cart
//!
//! # Sign in and place the order
//! elegance login -e jane@example.com -p secret
//! elegance checkout
//! elegance orders
//! ```
//!
//! State persists between invocations in `ELEGANCE_STORAGE_DIR`
//! (default `.elegance`). Logs go to stderr, filtered by `RUST_LOG`; set
//! `ELEGANCE_LOG_FORMAT=json` for JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use elegance_core::{Category, Price};
use elegance_storefront::catalog::SortBy;
use elegance_storefront::config::StorefrontConfig;
use elegance_storefront::state::AppState;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "elegance")]
#[command(author, version, about = "Elegance storefront in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    Products {
        /// Only show these categories (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<Category>,

        /// Lowest price to include
        #[arg(long)]
        min: Option<Price>,

        /// Highest price to include
        #[arg(long)]
        max: Option<Price>,

        /// Sort order (`name`, `price-low`, `price-high`)
        #[arg(short, long, default_value = "name")]
        sort: SortBy,
    },
    /// Show the featured collection
    Featured,
    /// Show a product with its related products
    Product {
        /// Product id
        id: String,
    },
    /// List categories with product counts
    Categories,
    /// Show or change the shopping bag
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Sign in (any non-empty email and password)
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// Show order history
    Orders,
    /// Place an order for everything in the bag
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the bag
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,

        /// Size to add
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: String,
        /// Size of the line
        size: String,
    },
    /// Set the quantity of a line (0 or less removes it)
    Update {
        /// Product id
        id: String,
        /// Size of the line
        size: String,
        /// New quantity
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the bag
    Clear,
    /// Show the bag panel
    Open,
    /// Hide the bag panel
    Close,
    /// Flip the bag panel
    Toggle,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli, &mut out).await {
        tracing::error!("Command failed: {e}");
        let _ = writeln!(out, "{}", e.user_message());
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays clean for the views.
fn init_tracing() {
    // Defaults to warn level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "elegance_storefront=warn,elegance=warn".into());

    // JSON lines for log collectors, text otherwise
    let is_json =
        std::env::var("ELEGANCE_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::open(config)?;

    match cli.command {
        Commands::Products {
            categories,
            min,
            max,
            sort,
        } => commands::shop::list(&commands::shop::filter(categories, min, max, sort), out)?,
        Commands::Featured => commands::shop::featured(out)?,
        Commands::Product { id } => commands::shop::show(&id, out)?,
        Commands::Categories => commands::shop::categories(out)?,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&state, out)?,
            CartAction::Add { id, size } => {
                commands::cart::add(&mut state, &id, size.as_deref(), out)?;
            }
            CartAction::Remove { id, size } => commands::cart::remove(&mut state, &id, &size, out)?,
            CartAction::Update { id, size, quantity } => {
                commands::cart::update(&mut state, &id, &size, quantity, out)?;
            }
            CartAction::Clear => commands::cart::clear(&mut state, out)?,
            CartAction::Open => commands::cart::set_panel(&mut state, Some(true), out)?,
            CartAction::Close => commands::cart::set_panel(&mut state, Some(false), out)?,
            CartAction::Toggle => commands::cart::set_panel(&mut state, None, out)?,
        },
        Commands::Login { email, password } => {
            commands::account::login(&mut state, &email, &SecretString::from(password), out)
                .await?;
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            commands::account::signup(
                &mut state,
                &name,
                &email,
                &SecretString::from(password),
                out,
            )
            .await?;
        }
        Commands::Logout => commands::account::logout(&mut state, out)?,
        Commands::Whoami => commands::account::whoami(&state, out)?,
        Commands::Orders => commands::account::orders(&state, out)?,
        Commands::Checkout => commands::account::checkout(&mut state, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_products_filters() {
        let cli = Cli::try_parse_from([
            "elegance",
            "products",
            "-c",
            "evening",
            "-c",
            "formal",
            "--max",
            "250",
            "--sort",
            "price-low",
        ])
        .map_err(|e| e.to_string());
        assert!(matches!(
            cli,
            Ok(Cli {
                command: Commands::Products { ref categories, max: Some(_), sort: SortBy::PriceLow, .. }
            }) if categories == &[Category::Evening, Category::Formal]
        ));
    }

    #[test]
    fn test_parse_negative_quantity() {
        let cli = Cli::try_parse_from(["elegance", "cart", "update", "1", "M", "-1"]);
        assert!(matches!(
            cli,
            Ok(Cli {
                command: Commands::Cart {
                    action: Some(CartAction::Update { quantity: -1, .. })
                }
            })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["elegance", "products", "-c", "bridal"]).is_err());
    }
}
