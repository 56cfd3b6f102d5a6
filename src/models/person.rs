// Person directory entries - the single domain entity of the phonebook
//
// ## Directory Model Overview
//
// A `Person` is one entry in the directory. Entries are held in an ordered
// store (insertion order is listing order) and are keyed by `name`:
//
// - **name**: required, unique across the store at any point in time
// - **age**: optional, string-typed numeric ("23"); some records omit it
// - **phone**: optional; the listing filter partitions entries on its presence
// - **street** / **city**: required location fields
// - **id**: opaque unique identifier, assigned at creation, never mutated
//
// Two attributes are *derived*, computed at read time and never stored:
//
// - **address**: a projection of the entry's own `street`/`city`
// - **canDrink**: whether the numeric value of `age` exceeds 18
//
// The struct round-trips through serde because the proxied variant
// deserializes this exact shape from the REST person provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One directory entry
///
/// `name` is the store-wide unique key; `id` is an opaque identifier that is
/// never reused and never changes after creation. `age` keeps the provider's
/// string typing (e.g. `"23"`); numeric interpretation happens only in
/// [`Person::can_drink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
    pub id: String,
}

/// A read-only projection of a person's location
///
/// Has no identity or storage of its own; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Person {
    /// Assemble the derived address projection from this entry's own fields
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }

    /// Whether this person is of drinking age
    ///
    /// True iff `age` parses as a number strictly greater than 18.
    /// An absent or non-numeric `age` is treated as unknown and yields
    /// `false` - the documented resolution of the source's implicit
    /// `undefined > 18` comparison.
    pub fn can_drink(&self) -> bool {
        self.age
            .as_deref()
            .and_then(|age| age.trim().parse::<i64>().ok())
            .map_or(false, |age| age > 18)
    }

    /// Whether this entry has a phone number on file
    ///
    /// An empty string counts as "no phone", mirroring the truthiness test
    /// the listing filter applies.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().map_or(false, |p| !p.is_empty())
    }
}

/// Generator of opaque, globally-unique, never-reused identifier strings
///
/// Injected into the resolver layer as a capability rather than called as a
/// free function, so tests can substitute a deterministic generator. No
/// time-ordering semantics are promised.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default id generator backed by random (v4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// The sample directory the static variant ships with
///
/// Three fixed records, ids included, so a fresh server is immediately
/// queryable. Cookie has no phone number and exercises the `phone: NO`
/// filter branch out of the box.
pub fn seed_persons() -> Vec<Person> {
    vec![
        Person {
            name: "Rocky".to_string(),
            age: Some("11".to_string()),
            phone: Some("034-1234567".to_string()),
            street: "Calle Frontend".to_string(),
            city: "Guarari".to_string(),
            id: "3d594650-3436-11e9-bc57-8b80ba54c431".to_string(),
        },
        Person {
            name: "James".to_string(),
            age: Some("23".to_string()),
            phone: Some("044-123456".to_string()),
            street: "Avenida Fullstack".to_string(),
            city: "Heredia".to_string(),
            id: "3d599470-3436-11e9-bc57-8b80ba54c431".to_string(),
        },
        Person {
            name: "Cookie".to_string(),
            age: Some("19".to_string()),
            phone: None,
            street: "Pasaje Testing".to_string(),
            city: "Los lagos".to_string(),
            id: "3d599471-3436-11e9-bc57-8b80ba54c431".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(age: Option<&str>) -> Person {
        Person {
            name: "Test".to_string(),
            age: age.map(str::to_string),
            phone: None,
            street: "Street".to_string(),
            city: "City".to_string(),
            id: "id-1".to_string(),
        }
    }

    #[test]
    fn can_drink_is_strictly_over_18() {
        assert!(!person(Some("11")).can_drink());
        assert!(!person(Some("18")).can_drink());
        assert!(person(Some("19")).can_drink());
        assert!(person(Some("23")).can_drink());
    }

    #[test]
    fn unknown_age_cannot_drink() {
        assert!(!person(None).can_drink());
        assert!(!person(Some("veintitres")).can_drink());
        assert!(!person(Some("")).can_drink());
    }

    #[test]
    fn address_projects_own_fields() {
        let p = person(None);
        let address = p.address();
        assert_eq!(address.street, "Street");
        assert_eq!(address.city, "City");
    }

    #[test]
    fn empty_phone_counts_as_absent() {
        let mut p = person(None);
        assert!(!p.has_phone());
        p.phone = Some(String::new());
        assert!(!p.has_phone());
        p.phone = Some("040-1".to_string());
        assert!(p.has_phone());
    }

    #[test]
    fn person_deserializes_from_provider_shape() {
        // The REST provider omits optional fields entirely
        let raw = r#"{"name":"Cookie","street":"Pasaje Testing","city":"Los lagos","id":"p-3"}"#;
        let p: Person = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, "Cookie");
        assert!(p.age.is_none());
        assert!(p.phone.is_none());
    }

    #[test]
    fn uuid_generator_produces_distinct_ids() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
