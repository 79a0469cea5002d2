use domain::DeviceId;
use domain::ids::sequence_number;
use serde_json::json;
use shop_storage::{
    DeviceStore, EmailRegistration, EmailStore, InMemoryDeviceStore, InMemoryEmailStore,
    InMemoryUserStore, UserStore,
};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn device_ids_increase() {
    let store = InMemoryDeviceStore::new();
    let first = store.add_device(json!({"deviceType": "android"})).await.expect("add");
    let second = store.add_device(json!({"deviceType": "android"})).await.expect("add");
    assert_eq!(first.device_id.as_str(), "device_1");
    assert_eq!(second.device_id.as_str(), "device_2");
    assert_eq!(store.count_devices().await.expect("count"), 2);
}

#[tokio::test]
async fn device_payload_stored_verbatim() {
    let store = InMemoryDeviceStore::new();
    let payload = json!({"unexpected": [1, 2, {"nested": null}]});
    let record = store.add_device(payload.clone()).await.expect("add");
    let found = store
        .find_device(&record.device_id)
        .await
        .expect("find")
        .expect("device");
    assert_eq!(found.payload, payload);
    let missing = store
        .find_device(&DeviceId::new("device_99"))
        .await
        .expect("find");
    assert!(missing.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_device_ids_unique() {
    let store = Arc::new(InMemoryDeviceStore::new());
    let mut handles = Vec::new();
    for i in 0..200 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_device(json!({ "n": i })).await.expect("add").device_id
        }));
    }
    let mut seen = HashSet::new();
    for handle in handles {
        let id = handle.await.expect("join");
        assert!(seen.insert(id));
    }
    let numbers: HashSet<u64> = seen
        .iter()
        .filter_map(|id| sequence_number(id.as_str()))
        .collect();
    assert_eq!(numbers, (1..=200).collect());
}

#[tokio::test]
async fn user_lookup_is_idempotent() {
    let store = InMemoryUserStore::new();
    let first = store.find_or_create_user("9999999999").await.expect("create");
    let again = store.find_or_create_user("9999999999").await.expect("lookup");
    let other = store.find_or_create_user("8888888888").await.expect("create");
    assert!(first.created);
    assert!(!again.created);
    assert_eq!(first.user.user_id, again.user.user_id);
    assert_eq!(first.user.user_id.as_str(), "user_1");
    assert_eq!(other.user.user_id.as_str(), "user_2");
}

#[tokio::test]
async fn find_user_does_not_create() {
    let store = InMemoryUserStore::new();
    assert!(store.find_user("7777777777").await.expect("find").is_none());
    let created = store.find_or_create_user("7777777777").await.expect("create");
    // 查询未推进计数器
    assert_eq!(created.user.user_id.as_str(), "user_1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_same_mobile_creates_one_user() {
    let store = Arc::new(InMemoryUserStore::new());
    let mut handles = Vec::new();
    for _ in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.find_or_create_user("9999999999").await.expect("lookup")
        }));
    }
    let mut created = 0;
    let mut ids = HashSet::new();
    for handle in handles {
        let lookup = handle.await.expect("join");
        if lookup.created {
            created += 1;
        }
        ids.insert(lookup.user.user_id);
    }
    assert_eq!(created, 1);
    assert_eq!(ids.len(), 1);
}

#[tokio::test]
async fn email_rejects_duplicates() {
    let store = InMemoryEmailStore::new();
    assert_eq!(
        store.register_email("a@b.com").await.expect("register"),
        EmailRegistration::Registered
    );
    for _ in 0..3 {
        assert_eq!(
            store.register_email("a@b.com").await.expect("register"),
            EmailRegistration::AlreadyExists
        );
    }
    assert!(store.contains_email("a@b.com").await.expect("contains"));
    // 按原始字符串比较
    assert!(!store.contains_email("A@B.com").await.expect("contains"));
}
