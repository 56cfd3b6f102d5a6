// Phonebook - a Person directory exposed over GraphQL
// Two deployable variants share this library: a static in-memory directory
// and a proxied directory backed by an external REST person provider.

//! # Phonebook Library
//!
//! This is the library root for the phonebook services. It wires together
//! three layers:
//!
//! ```text
//! Client (any GraphQL client)
//!        ↓ HTTP/GraphQL
//! Server Layer (`server/`)  ← Axum host, GraphiQL, CORS
//!        ↓ function calls
//! Engine Layer (`engine/`)  ← GraphQL schema + resolvers, store adapters
//!        ↓ function calls
//! Domain Layer (`models/`)  ← Person record, derived fields, id generation
//! ```
//!
//! ## Core Components
//!
//! - [`Person`]: one directory entry (`name` unique, `id` immutable)
//! - [`PersonStore`]: async storage abstraction with two implementations:
//!   [`StaticStore`] (seeded in-process list) and [`RestStore`] (cache
//!   refreshed from a REST provider on every list read)
//! - [`Query`] / [`Mutation`] / [`ProxyMutation`]: GraphQL roots
//! - [`GraphQLServerBuilder`]: HTTP host setup for either variant
//!
//! ## The two variants
//!
//! Both expose `personCount`, `allPersons(phone: YES|NO)`, `findPerson` and
//! `addPerson`. The proxied variant additionally exposes `editNumber` and
//! sources its data from an external HTTP endpoint; see
//! [`RestStore`] for the refresh-then-read consistency contract.

// Core domain models
pub mod models;

// Engine implementations (GraphQL schema, resolvers, store adapters)
pub mod engine;

// Server implementations (Axum HTTP host)
pub mod server;

// Re-export core domain types for easy access
pub use models::{seed_persons, IdGenerator, Person, UuidGenerator};

// Re-export engine types for convenience
pub use engine::{
    graphql::{
        build_proxy_schema, build_static_schema, AddressGQL, Mutation, PersonGQL, ProxyMutation,
        ProxySchema, Query, StaticSchema, YesNo,
    },
    store::{PersonStore, RestStore, RestStoreConfig, StaticStore},
};

// Re-export server types for convenience
pub use server::graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};

// Core error types
use thiserror::Error;

/// Custom error types for phonebook operations
///
/// The only business-rule failure in the system is a duplicate name on
/// create. Everything else is either an infrastructure failure (the proxied
/// variant's provider fetch) or is deliberately *not* an error: lookup
/// misses in `findPerson`/`editNumber` surface as `Ok(None)`.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A person with this name already exists in the store
    #[error("Name must be unique")]
    DuplicateName { name: String },

    /// The proxied variant's upstream provider fetch failed
    #[error("Person provider fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        DirectoryError::Internal(err.to_string())
    }
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, DirectoryError>;
