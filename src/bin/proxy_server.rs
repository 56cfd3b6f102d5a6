// Phonebook - proxied variant
// Serves a person directory sourced from an external REST provider
// Run with: cargo run --bin proxy-server

//! # Proxied Directory Server Binary
//!
//! Starts the phonebook variant whose data comes from an external REST
//! endpoint (a json-server style provider returning the person list).
//!
//! ## Consistency note
//!
//! Every `allPersons` query re-fetches the full provider list and replaces
//! the local cache with it. Mutations (`addPerson`, `editNumber`) touch only
//! the local cache and are **not** written back to the provider, so they
//! survive exactly until the next list read refreshes the cache.
//!
//! ## Configuration
//!
//! Read from the environment (a `.env` file is honored when present):
//! - `SERVER_PORT` - listen port (default 4000)
//! - `PERSONS_API_URL` - provider endpoint
//!   (default `http://localhost:3000/persons`)

use dotenv::dotenv;
use phonebook::{GraphQLServerBuilder, RestStoreConfig};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; only warn when it cannot be loaded
    if let Err(e) = dotenv() {
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    tracing_subscriber::fmt::init();

    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    let rest_config = match env::var("PERSONS_API_URL") {
        Ok(endpoint) => RestStoreConfig {
            endpoint,
            ..RestStoreConfig::default()
        },
        Err(_) => RestStoreConfig::default(),
    };

    info!("📞 Starting phonebook server (REST-proxied directory)...");
    info!("Provider endpoint: {}", rest_config.endpoint);

    GraphQLServerBuilder::new()
        .with_port(server_port)
        .with_proxy(rest_config)
        .build_and_run()
        .await?;

    Ok(())
}
