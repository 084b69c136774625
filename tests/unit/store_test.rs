//! Tests for the in-memory receipt store

use std::sync::Arc;
use std::thread;

use receipt_points::adapters::InMemoryReceiptStore;
use receipt_points::core::models::{Receipt, ReceiptId};
use receipt_points::core::ports::ReceiptStore;

use crate::common::{morning_receipt, with_retailer};

#[test]
fn test_get_absent() {
    let store = InMemoryReceiptStore::new();
    assert!(store.get(&ReceiptId::generate()).is_none());
}

#[test]
fn test_set_then_get() {
    let store = InMemoryReceiptStore::new();
    let id = ReceiptId::generate();
    store.set(id, morning_receipt());
    assert_eq!(store.get(&id), Some(morning_receipt()));
}

#[test]
fn test_set_overwrites() {
    let store = InMemoryReceiptStore::new();
    let id = ReceiptId::generate();
    store.set(id, with_retailer("First"));
    store.set(id, with_retailer("Second"));
    assert_eq!(store.get(&id).map(|r| r.retailer).as_deref(), Some("Second"));
}

#[test]
fn test_get_returns_a_copy() {
    let store = InMemoryReceiptStore::new();
    let id = ReceiptId::generate();
    store.set(id, morning_receipt());

    let mut copy = store.get(&id).unwrap();
    copy.retailer = "Changed".to_string();
    assert_eq!(store.get(&id).unwrap().retailer, "Walgreens");
}

#[test]
fn test_usable_as_trait_object() {
    let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
    let id = ReceiptId::generate();
    store.set(id, Receipt::default());
    assert_eq!(store.get(&id), Some(Receipt::default()));
}

#[test]
fn test_concurrent_set_and_get() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1250;

    let store = Arc::new(InMemoryReceiptStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut written = Vec::with_capacity(PER_THREAD);
                for i in 0..PER_THREAD {
                    let id = ReceiptId::generate();
                    store.set(id, with_retailer(&format!("store {t} {i}")));
                    // Every write is visible to this thread's next read
                    assert!(store.get(&id).is_some());
                    written.push((id, format!("store {t} {i}")));
                }
                written
            })
        })
        .collect();

    let written: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(written.len(), THREADS * PER_THREAD);
    for (id, retailer) in written {
        assert_eq!(store.get(&id).map(|r| r.retailer), Some(retailer));
    }
}

#[test]
fn test_concurrent_set_and_get_on_one_id() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 625;

    let store = Arc::new(InMemoryReceiptStore::new());
    let id = ReceiptId::generate();
    store.set(id, with_retailer("writer 0"));

    // Each round is one set and one get: 8 * 625 * 2 = 10,000 operations
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let retailer = format!("writer {t}");
                for _ in 0..ROUNDS {
                    store.set(id, with_retailer(&retailer));
                    let seen = store.get(&id).map(|r| r.retailer);
                    assert!(
                        seen.as_deref().is_some_and(|r| {
                            r.strip_prefix("writer ")
                                .and_then(|n| n.parse::<usize>().ok())
                                .is_some_and(|n| n < THREADS)
                        }),
                        "unexpected value {seen:?}"
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let last = store.get(&id).map(|r| r.retailer).unwrap();
    assert!((0..THREADS).any(|t| last == format!("writer {t}")));
}
