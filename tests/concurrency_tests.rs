use catering_engine::application::engine::CateringEngine;
use catering_engine::domain::booking::{Booking, BookingItem};
use catering_engine::domain::catalog::{Package, UnitType};
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;

mod common;
use common::{add_menu_item, add_package, date, money};

const CALLERS: usize = 64;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_package_inserts_get_unique_ids() {
    let engine = Arc::new(CateringEngine::in_memory());

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                engine
                    .create_or_update_package(Package::new(format!("Package {i}"), money(dec!(100)), 10))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), CALLERS);
    assert!(ids.iter().all(|id| *id > 0));
    assert_eq!(engine.list_packages(true).await.unwrap().len(), CALLERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_booking_inserts_get_unique_ids() {
    let engine = Arc::new(CateringEngine::in_memory());
    let rice = add_menu_item(&engine, "Rice", dec!(50), UnitType::PerPerson).await;

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let items = vec![BookingItem::new(&rice, 1, 20), BookingItem::new(&rice, 1, 20)];
            tokio::spawn(async move {
                let booking = Booking::new(format!("Guest {i}"), date(2026, 11, 1), 20);
                engine.create_or_update_booking(booking, &items).await.unwrap()
            })
        })
        .collect();

    let mut booking_ids = HashSet::new();
    let mut item_ids = HashSet::new();
    for handle in handles {
        let saved = handle.await.unwrap();
        booking_ids.insert(saved.id);
        for item in &saved.items {
            assert_eq!(item.booking_id, saved.id);
            item_ids.insert(item.id);
        }
    }
    assert_eq!(booking_ids.len(), CALLERS);
    assert_eq!(item_ids.len(), CALLERS * 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_package_delete_during_booking_reads() {
    let engine = Arc::new(CateringEngine::in_memory());
    let used = add_package(&engine, "Used", dec!(100)).await;
    let unused = add_package(&engine, "Unused", dec!(100)).await;

    let mut booking = Booking::new("Ana", date(2026, 11, 1), 10);
    booking.package_id = Some(used.id);
    engine.create_or_update_booking(booking, &[]).await.unwrap();

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                for _ in 0..20 {
                    assert_eq!(engine.list_bookings().await.unwrap().len(), 1);
                }
            })
        })
        .collect();

    let (used_id, unused_id) = (used.id, unused.id);
    let deleter = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            let a = engine.remove_package(used_id).await.unwrap();
            let b = engine.remove_package(unused_id).await.unwrap();
            (a, b)
        })
    };

    for reader in readers {
        reader.await.unwrap();
    }
    assert_eq!(deleter.await.unwrap(), (true, true));

    let remaining = engine.list_packages(true).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, used_id);
    assert!(!remaining[0].active);
}
