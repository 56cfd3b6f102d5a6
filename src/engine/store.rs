// Storage abstraction for the person directory
// This defines the interface the resolver layer talks to, plus the two
// interchangeable backends: a seeded in-memory list and a REST-proxied cache

//! # Store Adapter Layer
//!
//! This module provides the storage abstraction behind the GraphQL
//! resolvers. The abstraction separates the one piece of business logic
//! (which lives in the resolvers) from where the person records actually
//! come from.
//!
//! ## Store Architecture
//!
//! The layer follows the **Repository Pattern**:
//! - **PersonStore trait**: the operation surface the resolvers use
//! - **StaticStore**: a fixed ordered list, initialized once at build time
//! - **RestStore**: a pass-through cache over an external REST provider
//!
//! Both backends preserve insertion order, which is the iteration order for
//! listing.
//!
//! ## Consistency contract of the proxied backend
//!
//! [`RestStore`] re-fetches the *entire* provider list on every
//! [`PersonStore::list`] call and replaces its cache wholesale
//! (refresh-then-read). Local writes mutate only the cache, are never pushed
//! upstream, and are therefore lost to the next refresh. Name lookups and
//! counts read the cache as last populated and never trigger a fetch. This
//! is a caller-visible contract, not an implementation detail.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::models::Person;
use crate::Result;

/// Storage trait for person records
///
/// All operations are async so network-backed implementations fit the same
/// surface as the in-memory one. `Send + Sync` bounds allow the store to be
/// shared across request handlers as a trait object.
#[async_trait::async_trait]
pub trait PersonStore: Send + Sync {
    /// Number of entries currently held
    ///
    /// Reads the local state only; the proxied backend does **not** refresh
    /// for a count.
    async fn count(&self) -> Result<usize>;

    /// All entries in insertion order
    ///
    /// The proxied backend refreshes from the provider first
    /// (refresh-then-read), so this call can fail with a fetch error and
    /// discards any local writes made since the previous refresh.
    async fn list(&self) -> Result<Vec<Person>>;

    /// Look up an entry by its unique name
    ///
    /// Returns `Ok(None)` on a miss - a miss is not an error. Reads the
    /// local state only; the proxied backend serves this from the cache as
    /// last populated by a prior `list`.
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>>;

    /// Append a new entry at the tail
    ///
    /// Uniqueness of `name` is the resolver layer's responsibility; the
    /// store is a dumb adapter and appends unconditionally.
    async fn append(&self, person: Person) -> Result<Person>;

    /// Replace only the `phone` field of the entry with the given name
    ///
    /// All other fields, `id` included, are preserved. Returns the updated
    /// entry, or `Ok(None)` if no entry matches (store left unchanged).
    async fn replace_phone(&self, name: &str, phone: String) -> Result<Option<Person>>;
}

/// In-memory store seeded once at build time
///
/// The backend of the static variant: a fixed ordered sequence of person
/// records, mutated in place by writes, never re-read from any external
/// source. Data lives for the life of the process.
pub struct StaticStore {
    // RwLock poisoning only happens if a writer panics; treated as fatal
    persons: RwLock<Vec<Person>>,
}

impl StaticStore {
    /// Create a store holding the given records, preserving their order
    pub fn with_seed(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }
}

impl Default for StaticStore {
    fn default() -> Self {
        Self::with_seed(crate::models::seed_persons())
    }
}

#[async_trait::async_trait]
impl PersonStore for StaticStore {
    async fn count(&self) -> Result<usize> {
        let persons = self.persons.read().unwrap();
        Ok(persons.len())
    }

    async fn list(&self) -> Result<Vec<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons.iter().find(|p| p.name == name).cloned())
    }

    async fn append(&self, person: Person) -> Result<Person> {
        let mut persons = self.persons.write().unwrap();
        persons.push(person.clone());
        Ok(person)
    }

    async fn replace_phone(&self, name: &str, phone: String) -> Result<Option<Person>> {
        let mut persons = self.persons.write().unwrap();
        match persons.iter_mut().find(|p| p.name == name) {
            Some(person) => {
                person.phone = Some(phone);
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Configuration for the REST-proxied store
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Endpoint returning the full person list as a JSON array
    /// (same field shape as [`Person`])
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/persons".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Store proxied over an external REST person provider
///
/// Holds a process-wide cache, initially empty. [`RestStore::refresh`]
/// replaces the whole cache with the provider's latest list; `list` always
/// refreshes first, even when the caller will filter afterwards. Writes
/// mutate only the cache and are never sent to the provider, so the provider
/// and the local copy diverge on every write until the next refresh
/// overwrites the local state.
pub struct RestStore {
    client: Client,
    config: RestStoreConfig,
    cache: RwLock<Vec<Person>>,
}

impl RestStore {
    /// Create a proxied store with the given configuration
    pub fn new(config: RestStoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Create a proxied store against the given endpoint with default timeouts
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(RestStoreConfig {
            endpoint: endpoint.into(),
            ..RestStoreConfig::default()
        })
    }

    /// Fetch the provider's full list and replace the cache with it
    ///
    /// The replacement is unconditional: any local writes made since the
    /// previous refresh are discarded. A fetch failure propagates as an
    /// error and leaves the cache as it was; no retries are attempted.
    pub async fn refresh(&self) -> Result<()> {
        let fetched: Vec<Person> = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(
            count = fetched.len(),
            endpoint = %self.config.endpoint,
            "refreshed person cache from provider"
        );

        let mut cache = self.cache.write().unwrap();
        *cache = fetched;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersonStore for RestStore {
    /// Cache size as of the last refresh; does not fetch
    async fn count(&self) -> Result<usize> {
        let cache = self.cache.read().unwrap();
        Ok(cache.len())
    }

    /// Refresh-then-read: always re-fetches before returning
    async fn list(&self) -> Result<Vec<Person>> {
        self.refresh().await?;
        let cache = self.cache.read().unwrap();
        Ok(cache.clone())
    }

    /// Reads the cache as last populated by `list`; empty before the first
    /// successful refresh
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        let cache = self.cache.read().unwrap();
        Ok(cache.iter().find(|p| p.name == name).cloned())
    }

    /// Appends to the local cache only; never sent to the provider
    async fn append(&self, person: Person) -> Result<Person> {
        let mut cache = self.cache.write().unwrap();
        cache.push(person.clone());
        Ok(person)
    }

    /// Mutates the local cache only; never sent to the provider
    async fn replace_phone(&self, name: &str, phone: String) -> Result<Option<Person>> {
        let mut cache = self.cache.write().unwrap();
        match cache.iter_mut().find(|p| p.name == name) {
            Some(person) => {
                person.phone = Some(phone);
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }
}
