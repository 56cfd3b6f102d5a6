// Phonebook server implementations
// HTTP hosting for the GraphQL engine

//! # Server Module
//!
//! The server layer exposes the engine to network clients:
//!
//! ```text
//! Client (any language)
//!        ↓ HTTP/GraphQL
//! Server Layer (this module) ← Axum host, GraphiQL, CORS, health
//!        ↓ function calls
//! Engine Layer ← GraphQL schema, store adapters
//! ```
//!
//! One server type hosts both variants; the backing store (static seed or
//! REST proxy) is chosen through the builder at startup, never per request.

/// Axum-based GraphQL HTTP server
pub mod graphql;

// Re-export main server types for easy access
pub use graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};
