//! Print the catalog hierarchy from the command line.
//!
//! Reads the API base URLs from the environment (see
//! `matcat_client::config` for the variable names), lists every
//! library with its banks and sub-banks, and prints them as an
//! indented tree.

use matcat_client::{ApiConfig, CatalogClient};
use matcat_core::hierarchy::filter_children;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matcat_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Catalog API is not configured");
            std::process::exit(1);
        }
    };
    let client = CatalogClient::new(config);

    let libraries = match client.list_libraries().await {
        Ok(libraries) => libraries,
        Err(err) => {
            tracing::error!(error = %err, "Failed to list libraries");
            std::process::exit(1);
        }
    };
    let banks = match client.list_banks(None).await {
        Ok(banks) => banks,
        Err(err) => {
            tracing::error!(error = %err, "Failed to list banks");
            std::process::exit(1);
        }
    };
    let sub_banks = match client.list_sub_banks(None).await {
        Ok(sub_banks) => sub_banks,
        Err(err) => {
            tracing::error!(error = %err, "Failed to list sub-banks");
            std::process::exit(1);
        }
    };

    for library in &libraries {
        println!("{} ({})", library.name, library.id);
        for bank in filter_children(&banks, library.id) {
            println!("  {} ({})", bank.name, bank.id);
            for sub_bank in filter_children(&sub_banks, bank.id) {
                println!("    {} ({})", sub_bank.name, sub_bank.id);
            }
        }
    }
}
