// Phonebook engine
// The layer between the domain model and the HTTP host

//! # Engine Module
//!
//! The engine sits between the domain models and the server layer:
//!
//! - **Domain Models**: pure data and derived-field logic (in `models/`)
//! - **Engine Layer**: GraphQL schema, resolvers and store adapters (this
//!   module)
//! - **Server Layer**: Axum HTTP host (in `server/`)
//!
//! ## Engine Components
//!
//! ### GraphQL Engine (`graphql` module)
//! - Schema and resolvers for both service variants
//! - Owns the one piece of business logic in the system: the uniqueness
//!   check on `addPerson`, the phone-presence filter predicate and the
//!   derived-field resolution (`address`, `canDrink`)
//! - Translates store misses to GraphQL nulls and the duplicate-name
//!   conflict to a user-input error with extensions
//!
//! ### Store Adapters (`store` module)
//! - `PersonStore` trait plus the two interchangeable backends
//! - `StaticStore`: fixed in-memory list, seeded once
//! - `RestStore`: refresh-then-read cache over an external REST provider

/// GraphQL schema, resolvers and schema builders
pub mod graphql;

/// Storage abstraction and the two store backends
pub mod store;

#[cfg(test)]
mod store_tests;

// Re-export the engine surface for convenience
pub use graphql::{
    build_proxy_schema, build_static_schema, Mutation, ProxyMutation, ProxySchema, Query,
    StaticSchema, YesNo,
};
pub use store::{PersonStore, RestStore, RestStoreConfig, StaticStore};
