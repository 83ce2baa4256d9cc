// Integration tests for the flat-file submission store
// Each test gets its own temporary data directory.
use std::sync::Arc;

use bank_portal_api::models::{InterestStatus, NewAccountInterest, NewContact};
use bank_portal_api::store::{Category, StoreError, SubmissionStore};
use tempfile::TempDir;

fn interest(name: &str) -> NewAccountInterest {
    NewAccountInterest {
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "9876543210".to_string(),
        primary_doc: "Aadhaar".to_string(),
        timestamp: Some("2026-08-27T10:00:00Z".to_string()),
    }
}

fn contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "9876543210".to_string(),
        query_type: "loans".to_string(),
        message: "What are the current home loan rates?".to_string(),
        timestamp: None,
    }
}

async fn open_store() -> (SubmissionStore, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let store = SubmissionStore::open(dir.path()).await.expect("open store");
    (store, dir)
}

#[tokio::test]
async fn missing_collection_reads_as_empty() {
    let (store, _dir) = open_store().await;

    assert!(store.account_interests().await.unwrap().is_empty());
    assert!(store.contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn append_assigns_id_and_fixed_status() {
    let (store, dir) = open_store().await;

    let record = store
        .append_account_interest(interest("Asha Rao"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.status, InterestStatus::Pending);
    assert_eq!(record.full_name, "Asha Rao");
    assert_eq!(record.timestamp, "2026-08-27T10:00:00Z");

    // Collection file was created lazily and holds exactly this record.
    assert!(dir
        .path()
        .join(Category::AccountInterest.file_name())
        .exists());
    let all = store.account_interests().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, record.id);
}

#[tokio::test]
async fn missing_timestamp_is_server_filled() {
    let (store, _dir) = open_store().await;

    let record = store.append_contact(contact("Vikram Shah")).await.unwrap();
    assert!(!record.timestamp.is_empty());
}

#[tokio::test]
async fn sequential_ids_strictly_increase() {
    let (store, _dir) = open_store().await;

    let mut last = 0;
    for i in 0..5 {
        let record = store
            .append_account_interest(interest(&format!("Person {}", i)))
            .await
            .unwrap();
        assert!(record.id > last, "id {} not above {}", record.id, last);
        last = record.id;
    }
}

#[tokio::test]
async fn reopened_store_continues_above_persisted_ids() {
    let dir = TempDir::new().unwrap();

    let first_id = {
        let store = SubmissionStore::open(dir.path()).await.unwrap();
        store
            .append_account_interest(interest("First Session"))
            .await
            .unwrap()
            .id
    };

    let store = SubmissionStore::open(dir.path()).await.unwrap();
    let second = store
        .append_account_interest(interest("Second Session"))
        .await
        .unwrap();

    assert!(second.id > first_id);
    assert_eq!(store.account_interests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn corrupt_collection_surfaces_as_error() {
    let (store, dir) = open_store().await;

    std::fs::write(
        dir.path().join(Category::AccountInterest.file_name()),
        "not json at all",
    )
    .unwrap();

    let err = store.account_interests().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Corrupt {
            category: Category::AccountInterest,
            ..
        }
    ));
}

#[tokio::test]
async fn categories_are_independent() {
    let (store, _dir) = open_store().await;

    store
        .append_account_interest(interest("Only Interest"))
        .await
        .unwrap();

    assert_eq!(store.account_interests().await.unwrap().len(), 1);
    assert!(store.contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn reads_racing_appends_never_see_a_partial_file() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(SubmissionStore::open(dir.path()).await.unwrap());

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..20 {
                store
                    .append_contact(contact(&format!("Writer {}", i)))
                    .await
                    .unwrap();
            }
        })
    };

    // Hammer reads while the writer is appending; every read must parse.
    for _ in 0..50 {
        store.contacts().await.expect("read during append");
        tokio::task::yield_now().await;
    }
    writer.await.unwrap();

    assert_eq!(store.contacts().await.unwrap().len(), 20);
    // The staging file is renamed away once the append lands.
    assert!(!dir.path().join("contacts.json.tmp").exists());
}

#[tokio::test]
async fn concurrent_appends_lose_no_records() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(SubmissionStore::open(dir.path()).await.unwrap());

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append_contact(contact(&format!("Caller {}", i)))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    let stored = store.contacts().await.unwrap();
    assert_eq!(stored.len(), 10);

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "ids must be unique under concurrency");
}
