// Tests for the store adapters
use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::engine::store::{PersonStore, RestStore, StaticStore};
use crate::models::{seed_persons, Person};

// Test helpers

fn person(name: &str, phone: Option<&str>) -> Person {
    Person {
        name: name.to_string(),
        age: None,
        phone: phone.map(str::to_string),
        street: format!("{} Street", name),
        city: "Testville".to_string(),
        id: format!("id-{}", name.to_lowercase()),
    }
}

// Spin up a local stand-in for the REST person provider and return the
// endpoint URL it serves the list on
async fn spawn_provider(persons: Vec<Person>) -> String {
    let app = Router::new().route(
        "/persons",
        get(move || {
            let persons = persons.clone();
            async move { Json(persons) }
        }),
    );

    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);

    format!("http://{}/persons", addr)
}

// StaticStore

#[tokio::test]
async fn static_store_serves_seed_in_insertion_order() {
    let store = StaticStore::with_seed(seed_persons());

    assert_eq!(store.count().await.unwrap(), 3);
    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Rocky", "James", "Cookie"]);
}

#[tokio::test]
async fn static_store_find_miss_is_none() {
    let store = StaticStore::with_seed(seed_persons());
    assert!(store.find_by_name("Nadie").await.unwrap().is_none());
}

#[tokio::test]
async fn static_store_append_goes_to_the_tail() {
    let store = StaticStore::with_seed(vec![person("Ana", None)]);
    store.append(person("Zoe", Some("1"))).await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].name, "Zoe");
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn static_store_replace_phone_changes_only_phone() {
    let store = StaticStore::with_seed(seed_persons());
    let before = store.find_by_name("Rocky").await.unwrap().unwrap();

    let updated = store
        .replace_phone("Rocky", "099-999".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("099-999"));
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.street, before.street);
    assert_eq!(updated.city, before.city);
    assert_eq!(updated.age, before.age);
}

#[tokio::test]
async fn static_store_replace_phone_miss_leaves_store_unchanged() {
    let store = StaticStore::with_seed(seed_persons());
    let before = store.list().await.unwrap();

    let result = store
        .replace_phone("Nadie", "1".to_string())
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.list().await.unwrap(), before);
}

// RestStore

#[tokio::test]
async fn rest_store_is_empty_before_the_first_list() {
    let endpoint = spawn_provider(seed_persons()).await;
    let store = RestStore::with_endpoint(endpoint);

    // find and count never trigger a fetch
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(store.find_by_name("Rocky").await.unwrap().is_none());

    // the first list populates the cache for subsequent lookups
    assert_eq!(store.list().await.unwrap().len(), 3);
    assert!(store.find_by_name("Rocky").await.unwrap().is_some());
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn rest_store_refresh_discards_local_writes() {
    let endpoint = spawn_provider(vec![person("Ana", None), person("Luis", Some("2"))]).await;
    let store = RestStore::with_endpoint(endpoint);

    store.list().await.unwrap();
    store.append(person("Zoe", Some("1"))).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 3);
    assert!(store.find_by_name("Zoe").await.unwrap().is_some());

    // the next list re-fetches and the local write is gone
    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Ana", "Luis"]);
    assert!(store.find_by_name("Zoe").await.unwrap().is_none());
}

#[tokio::test]
async fn rest_store_phone_edit_survives_until_the_next_refresh() {
    let endpoint = spawn_provider(vec![person("Ana", Some("old"))]).await;
    let store = RestStore::with_endpoint(endpoint);
    store.list().await.unwrap();

    let updated = store
        .replace_phone("Ana", "new".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("new"));
    assert_eq!(
        store
            .find_by_name("Ana")
            .await
            .unwrap()
            .unwrap()
            .phone
            .as_deref(),
        Some("new")
    );

    // refresh overwrites the edit with the provider's copy
    store.refresh().await.unwrap();
    assert_eq!(
        store
            .find_by_name("Ana")
            .await
            .unwrap()
            .unwrap()
            .phone
            .as_deref(),
        Some("old")
    );
}

#[tokio::test]
async fn rest_store_fetch_failure_fails_the_list() {
    // nothing listens here; the fetch error propagates unhandled
    let store = RestStore::with_endpoint("http://127.0.0.1:1/persons");
    assert!(store.list().await.is_err());

    // the cache is left as it was
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn stores_are_interchangeable_behind_the_trait() {
    let endpoint = spawn_provider(seed_persons()).await;
    let stores: Vec<Arc<dyn PersonStore>> = vec![
        Arc::new(StaticStore::with_seed(seed_persons())),
        Arc::new(RestStore::with_endpoint(endpoint)),
    ];

    for store in stores {
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
