// Core domain models for the phonebook
// These are plain data structures with no GraphQL or storage knowledge

//! # Domain Models Module
//!
//! The domain layer of the phonebook. It knows nothing about GraphQL,
//! HTTP or storage backends; it defines what a [`Person`] *is* and the two
//! derived projections ([`Person::address`], [`Person::can_drink`]) that the
//! resolver layer recomputes on every read.
//!
//! Identifier generation lives here as well, abstracted behind
//! [`IdGenerator`] so the resolver layer receives it as an injected
//! capability instead of reaching for a global.

// Declares the `person` submodule from `person.rs`
// Contains Person, Address, id generation and the static seed data
pub mod person;

// Re-export main types for convenience
pub use person::{seed_persons, Address, IdGenerator, Person, UuidGenerator};
