use tempfile::TempDir;

use triplog::{
    config::TripLogConfig,
    core::store::TripStore,
    persist::{KvStore, TripRepository, sqlite::SqliteKv},
    trip::TripDraft,
    types::{CarType, TripStatus},
};

fn draft(name: &str, date: &str, time: &str) -> TripDraft {
    TripDraft {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        car_type: CarType::Seat7,
        destination: "Quảng Ninh".to_string(),
        purpose: "Khảo sát".to_string(),
    }
}

#[test]
fn sqlite_reopen_restores_collection_and_order() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("trips.db");
    let cfg = TripLogConfig::default();

    let kv = SqliteKv::open(&db_path).expect("open sqlite");
    let mut store = TripStore::open(kv, &cfg);
    let a = store.add_trip(draft("An", "2024-06-12", "14:00"));
    let b = store.add_trip(draft("Bình", "2024-06-10", "08:00"));
    let c = store.add_trip(draft("Chi", "2024-06-11", "09:00"));
    store.update_status(b.id, TripStatus::Rejected).expect("update");
    store.delete_trip(c.id).expect("delete");
    let expected = store.trips_cloned();
    drop(store);

    let reopened = TripStore::open(SqliteKv::open(&db_path).expect("reopen"), &cfg);
    assert_eq!(reopened.trips_cloned(), expected);
    assert_eq!(reopened.get(a.id).map(|t| t.status), Some(TripStatus::Pending));
    assert_eq!(reopened.get(b.id).map(|t| t.status), Some(TripStatus::Rejected));
    assert!(reopened.get(c.id).is_none());
}

#[test]
fn set_overwrites_the_previous_value() {
    let mut kv = SqliteKv::open_in_memory().expect("open");
    assert_eq!(kv.get("k").expect("get"), None);

    kv.set("k", b"first").expect("set");
    kv.set("k", b"second").expect("set");
    assert_eq!(kv.get("k").expect("get"), Some(b"second".to_vec()));
    assert!(kv.updated_ms("k").expect("ts").is_some());
}

#[test]
fn separate_keys_hold_separate_collections() {
    let kv = SqliteKv::open_in_memory().expect("open");
    let mut left = TripRepository::new(kv, "left");
    let stored = vec![triplog::trip::TripRecord::from_draft(1, draft("An", "2024-06-10", "08:00"))];
    left.save_all(&stored).expect("save");

    let right = TripRepository::new(left.into_backend(), "right");
    assert!(right.try_load_all().expect("load").is_empty());
}
