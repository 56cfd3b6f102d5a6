// GraphQL API for the person directory
// This provides the schema and resolvers shared by both service variants

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Enum, Error, ErrorExtensions, MergedObject, Object, Schema,
    SimpleObject, ID,
};

use crate::engine::store::PersonStore;
use crate::models::{IdGenerator, Person};
use crate::DirectoryError;

/// Schema of the static variant (no `editNumber`)
pub type StaticSchema = Schema<Query, Mutation, EmptySubscription>;

/// Schema of the proxied variant (adds `editNumber`)
pub type ProxySchema = Schema<Query, ProxyMutation, EmptySubscription>;

// GraphQL types - these are the API representations of our domain model

/// Filter argument for `allPersons`: restrict to entries with (`YES`) or
/// without (`NO`) a phone number
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

/// Read-only projection of a person's street and city
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Address")]
pub struct AddressGQL {
    pub street: String,
    pub city: String,
}

/// GraphQL view over a domain [`Person`]
///
/// `address` and `canDrink` are derived fields, recomputed from the entry's
/// own stored fields on every resolution; `age` itself is not exposed.
#[derive(Debug, Clone)]
pub struct PersonGQL(Person);

impl From<Person> for PersonGQL {
    fn from(person: Person) -> Self {
        Self(person)
    }
}

#[Object(name = "Person")]
impl PersonGQL {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    /// The person's address, assembled from their own street/city fields
    async fn address(&self) -> AddressGQL {
        let address = self.0.address();
        AddressGQL {
            street: address.street,
            city: address.city,
        }
    }

    /// True iff the numeric value of the stored age exceeds 18
    /// (unknown age resolves to false)
    async fn can_drink(&self) -> bool {
        self.0.can_drink()
    }

    async fn id(&self) -> ID {
        ID::from(self.0.id.clone())
    }
}

impl ErrorExtensions for DirectoryError {
    // Duplicate names carry the Apollo UserInputError shape so clients can
    // display the offending value
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            if let DirectoryError::DuplicateName { name } = self {
                e.set("code", "BAD_USER_INPUT");
                e.set("invalidArgs", name.as_str());
            }
        })
    }
}

// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// Number of persons currently in the store
    async fn person_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.count().await {
            Ok(count) => Ok(count as i32),
            Err(e) => Err(Error::new(format!("Failed to count persons: {}", e))),
        }
    }

    /// List all persons in insertion order, optionally filtered by phone
    /// presence
    ///
    /// In the proxied variant this refreshes the cache from the provider
    /// first - unconditionally, even when a filter is supplied.
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        phone: Option<YesNo>,
    ) -> async_graphql::Result<Vec<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        let persons = store
            .list()
            .await
            .map_err(|e| Error::new(format!("Failed to list persons: {}", e)))?;

        let filtered = persons
            .into_iter()
            .filter(|person| match phone {
                None => true,
                Some(YesNo::Yes) => person.has_phone(),
                Some(YesNo::No) => !person.has_phone(),
            })
            .map(PersonGQL::from)
            .collect();

        Ok(filtered)
    }

    /// Find a person by their unique name
    ///
    /// A miss is not an error: returns null. The proxied variant serves
    /// this from the cache as last populated by `allPersons`.
    async fn find_person(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.find_by_name(&name).await {
            Ok(Some(person)) => Ok(Some(PersonGQL::from(person))),
            Ok(None) => Ok(None),
            Err(e) => Err(Error::new(format!("Failed to find person: {}", e))),
        }
    }
}

// GraphQL Mutation root shared by both variants
#[derive(Default)]
pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a new person to the directory
    ///
    /// Fails with a user-input error (extensions carry the offending name)
    /// when the name is already taken. Validation precedes mutation, so a
    /// rejected call never changes the store.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
        street: String,
        city: String,
    ) -> async_graphql::Result<PersonGQL> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        let ids = ctx.data::<Arc<dyn IdGenerator>>()?;

        let existing = store
            .find_by_name(&name)
            .await
            .map_err(|e| Error::new(format!("Failed to check name uniqueness: {}", e)))?;
        if existing.is_some() {
            return Err(DirectoryError::DuplicateName { name }.extend());
        }

        let person = Person {
            name,
            age: None,
            phone: Some(phone),
            street,
            city,
            id: ids.generate(),
        };

        let created = store
            .append(person)
            .await
            .map_err(|e| Error::new(format!("Failed to store person: {}", e)))?;

        Ok(PersonGQL::from(created))
    }
}

// The proxied variant's extra mutation
#[derive(Default)]
pub struct EditMutation;

#[Object]
impl EditMutation {
    /// Replace a person's phone number
    ///
    /// Returns the updated person, or null when no entry matches the name -
    /// deliberately *not* an error, in contrast with `addPerson`'s
    /// error-on-conflict policy. Only `phone` changes; `id` and all other
    /// fields are preserved.
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> async_graphql::Result<Option<PersonGQL>> {
        let store = ctx.data::<Arc<dyn PersonStore>>()?;
        match store.replace_phone(&name, phone).await {
            Ok(Some(person)) => Ok(Some(PersonGQL::from(person))),
            Ok(None) => Ok(None),
            Err(e) => Err(Error::new(format!("Failed to edit number: {}", e))),
        }
    }
}

/// Mutation root of the proxied variant: `addPerson` plus `editNumber`
#[derive(MergedObject, Default)]
pub struct ProxyMutation(Mutation, EditMutation);

/// Build the static variant's schema over the given store and id generator
pub fn build_static_schema(
    store: Arc<dyn PersonStore>,
    ids: Arc<dyn IdGenerator>,
) -> StaticSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(ids)
        .finish()
}

/// Build the proxied variant's schema over the given store and id generator
pub fn build_proxy_schema(store: Arc<dyn PersonStore>, ids: Arc<dyn IdGenerator>) -> ProxySchema {
    Schema::build(Query, ProxyMutation::default(), EmptySubscription)
        .data(store)
        .data(ids)
        .finish()
}
