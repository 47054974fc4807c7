//! Overlay 播种与读穿/写穿行为测试。

use std::sync::Arc;

use domain::{CardholderStatus, collections};
use pacs_storage::{
    CardholderRecord, CardholderStore, CardholderUpdate, InMemoryCardholderStore, MemoryOverlay,
    Overlay,
};

fn sample_cardholder(id: &str) -> CardholderRecord {
    CardholderRecord {
        cardholder_id: id.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Anderson".to_string(),
        email: Some("alice@example.com".to_string()),
        phone: None,
        department: Some("Engineering".to_string()),
        job_title: Some("Engineer".to_string()),
        card_number: Some("10001".to_string()),
        status: CardholderStatus::Active,
        access_groups: vec!["All Staff".to_string()],
        created_ms: 1_754_000_000_000,
        modified_ms: 1_754_000_000_000,
    }
}

#[tokio::test]
async fn first_read_seeds_overlay_from_fixture() {
    let overlay: Arc<MemoryOverlay> = Arc::new(MemoryOverlay::new());
    assert!(overlay.read(collections::CARDHOLDERS).is_none());

    let store = InMemoryCardholderStore::new(overlay.clone(), vec![sample_cardholder("CH-0001")]);
    let records = store.list_cardholders().await.expect("list");
    assert_eq!(records.len(), 1);
    // 播种后 Overlay 持有序列化数组
    let payload = overlay.read(collections::CARDHOLDERS).expect("seeded");
    assert!(payload.contains("CH-0001"));
}

#[tokio::test]
async fn update_merges_and_stamps_modified() {
    let overlay: Arc<MemoryOverlay> = Arc::new(MemoryOverlay::new());
    let store = InMemoryCardholderStore::new(overlay, vec![sample_cardholder("CH-0001")]);

    let update = CardholderUpdate {
        phone: Some("555-0100".to_string()),
        status: Some(CardholderStatus::Suspended),
        modified_ms: 1_754_100_000_000,
        ..CardholderUpdate::default()
    };
    let updated = store
        .update_cardholder("CH-0001", update)
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.status, CardholderStatus::Suspended);
    assert_eq!(updated.modified_ms, 1_754_100_000_000);
    // 未出现在更新体中的字段保持原值
    assert_eq!(updated.first_name, "Alice");
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
    let overlay: Arc<MemoryOverlay> = Arc::new(MemoryOverlay::new());
    let store = InMemoryCardholderStore::new(overlay, vec![sample_cardholder("CH-0001")]);
    let result = store
        .update_cardholder("CH-9999", CardholderUpdate::default())
        .await
        .expect("update");
    assert!(result.is_none());
}

#[tokio::test]
async fn clear_discards_edits_and_reseeds() {
    let overlay: Arc<MemoryOverlay> = Arc::new(MemoryOverlay::new());
    let store = InMemoryCardholderStore::new(overlay.clone(), vec![sample_cardholder("CH-0001")]);

    let update = CardholderUpdate {
        first_name: Some("Renamed".to_string()),
        modified_ms: 1,
        ..CardholderUpdate::default()
    };
    store
        .update_cardholder("CH-0001", update)
        .await
        .expect("update");

    // Refresh Data：清空 Overlay 后下一次读取重新播种，丢弃改动
    overlay.clear();
    let records = store.list_cardholders().await.expect("list");
    assert_eq!(records[0].first_name, "Alice");
}

#[tokio::test]
async fn duplicate_create_is_rejected() {
    let overlay: Arc<MemoryOverlay> = Arc::new(MemoryOverlay::new());
    let store = InMemoryCardholderStore::new(overlay, vec![sample_cardholder("CH-0001")]);
    let result = store.create_cardholder(sample_cardholder("CH-0001")).await;
    assert!(result.is_err());
}
