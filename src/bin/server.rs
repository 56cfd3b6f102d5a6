// Phonebook - static variant
// Serves the hardcoded in-memory person directory over GraphQL
// Run with: cargo run --bin server

//! # Static Directory Server Binary
//!
//! Starts the phonebook variant backed by the built-in sample directory.
//! Everything lives in process memory: mutations push onto the seeded list
//! and are gone on restart.
//!
//! ## What This Server Provides
//!
//! - **GraphQL API**: `personCount`, `allPersons(phone)`, `findPerson`,
//!   `addPerson`
//! - **GraphiQL Interface**: interactive explorer at the root path
//! - **Sample Data**: three pre-loaded persons, queryable immediately
//!
//! ## Configuration
//!
//! Read from the environment (a `.env` file is honored when present):
//! - `SERVER_PORT` - listen port (default 4000)

use dotenv::dotenv;
use phonebook::GraphQLServerBuilder;
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

    info!("📞 Starting phonebook server (static directory)...");

    GraphQLServerBuilder::new()
        .with_port(server_port)
        .build_and_run()
        .await?;

    Ok(())
}
