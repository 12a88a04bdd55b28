//! `labeldesk`: the inventory label terminal client.
//!
//! Lists, adds and deletes inventory items on the label server, and
//! prints QR labels for them.

mod commands;
mod config;
mod host;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labeldesk::request::FormField;
use labeldesk_catalog::import::DEFAULT_DELIMITER;

use crate::commands::Session;
use crate::config::DeskConfig;

/// Inventory label client.
#[derive(Parser, Debug)]
#[command(name = "labeldesk", about = "Inventory label client")]
struct Cli {
    /// Path to config file (default: ~/.labeldesk/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Server base URL (overrides the config file).
    #[arg(long = "server", global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List products.
    List {
        /// Only show products matching this text.
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Output format: table or json.
        #[arg(long = "output", short = 'o', default_value = "table")]
        output: String,
    },

    /// Add a product.
    Add {
        /// Inventory number (unique key).
        #[arg(long = "inventory", short = 'i')]
        inventory_number: String,
        /// Product name.
        #[arg(long = "name", short = 'n')]
        product_name: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long = "type")]
        equipment_type: Option<String>,
        #[arg(long = "serial")]
        serial_number: Option<String>,
    },

    /// Delete a product.
    Delete {
        /// Inventory number.
        key: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the label of a product.
    Label {
        /// Inventory number.
        key: String,
        /// Label size id (see `labeldesk sizes`).
        #[arg(long)]
        size: Option<String>,
        /// Write the label HTML to this file instead of stdout.
        #[arg(long, short = 'f')]
        output: Option<PathBuf>,
    },

    /// Show the configured label sizes.
    Sizes,

    /// Import products from a delimited inventory export.
    Import {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },

    /// Interactive session.
    Shell {
        /// Write printed labels to this file instead of stdout.
        #[arg(long, short = 'f')]
        output: Option<PathBuf>,
    },

    /// Configuration file management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(DeskConfig::default_path);
    let mut config = DeskConfig::load(&config_path)?;
    if let Some(server) = cli.server {
        config.server = server;
    }
    let session = Session { config };

    match cli.command {
        Commands::List { search, output } => {
            commands::catalog::list(&session, search.as_deref(), output == "json").await?;
        }

        Commands::Add {
            inventory_number,
            product_name,
            brand,
            model,
            equipment_type,
            serial_number,
        } => {
            let fields = [
                (FormField::InventoryNumber, Some(inventory_number)),
                (FormField::ProductName, Some(product_name)),
                (FormField::Brand, brand),
                (FormField::Model, model),
                (FormField::EquipmentType, equipment_type),
                (FormField::SerialNumber, serial_number),
            ];
            commands::catalog::add(&session, &fields).await?;
        }

        Commands::Delete { key, yes } => {
            commands::catalog::delete(&session, &key, yes).await?;
        }

        Commands::Label { key, size, output } => {
            commands::label::print(&session, &key, size.as_deref(), output).await?;
        }

        Commands::Sizes => commands::label::sizes(&session),

        Commands::Import { file, delimiter } => {
            commands::import::run(&session, &file, delimiter).await?;
        }

        Commands::Shell { output } => {
            commands::shell::run(&session, output).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", toml::to_string_pretty(&session.config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    anyhow::bail!(
                        "{} already exists. Use --force to overwrite.",
                        config_path.display()
                    );
                }
                DeskConfig::default().save(&config_path)?;
                println!("Wrote {}", config_path.display());
            }
        },

        Commands::Version => {
            println!("labeldesk v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
