use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use triplog::{
    calendar,
    config::TripLogConfig,
    core::{
        conflict::{SlotKey, has_conflict},
        store::TripStore,
    },
    persist::memory::MemoryKv,
    trip::{TripDraft, TripRecord},
    types::{CarType, DateRange, TripStatus},
    view::projector::project,
};

#[derive(Debug, Clone)]
enum Action {
    Add { day: u8, hour: u8, car: u8 },
    SetStatus { target: u8, status: u8 },
    Delete { target: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0u8..4, 6u8..9, 0u8..3).prop_map(|(day, hour, car)| Action::Add { day, hour, car }),
        2 => (0u8..32, 0u8..3).prop_map(|(target, status)| Action::SetStatus { target, status }),
        1 => (0u8..32).prop_map(|target| Action::Delete { target }),
    ]
}

fn car(idx: u8) -> CarType {
    CarType::ALL[usize::from(idx) % CarType::ALL.len()]
}

fn status(idx: u8) -> TripStatus {
    [TripStatus::Pending, TripStatus::Approved, TripStatus::Rejected][usize::from(idx) % 3]
}

fn draft_from(day: u8, hour: u8, car_idx: u8) -> TripDraft {
    TripDraft {
        name: format!("N{day}{hour}"),
        date: format!("2024-06-{:02}", 10 + day),
        time: format!("{hour:02}:00"),
        car_type: car(car_idx),
        destination: "Hà Nội".to_string(),
        purpose: "Công tác".to_string(),
    }
}

fn every_slot() -> Vec<SlotKey> {
    let mut out = Vec::new();
    for day in 0u8..4 {
        for hour in 6u8..9 {
            for c in 0u8..3 {
                out.push(draft_from(day, hour, c).slot());
            }
        }
    }
    out
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(offset)))
            .expect("in range")
    })
}

fn record_strategy() -> impl Strategy<Value = TripRecord> {
    (date_strategy(), 0u8..24, 0u8..60, 0u8..3).prop_map(|(date, h, m, c)| TripRecord {
        id: 0,
        name: "N".to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        time: format!("{h:02}:{m:02}"),
        car_type: car(c),
        destination: "D".to_string(),
        purpose: "P".to_string(),
        status: TripStatus::Pending,
    })
}

proptest! {
    #[test]
    fn slot_index_agrees_with_full_scan(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let mut store = TripStore::open(MemoryKv::new(), &TripLogConfig::default());
        let mut seen_ids = HashSet::new();

        for action in actions {
            match action {
                Action::Add { day, hour, car } => {
                    let trip = store.add_trip(draft_from(day, hour, car));
                    prop_assert_eq!(trip.status, TripStatus::Pending);
                    prop_assert!(seen_ids.insert(trip.id), "id reused: {}", trip.id);
                }
                Action::SetStatus { target, status: s } => {
                    let ids: Vec<u64> = store.trips().iter().map(|t| t.id).collect();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    store.update_status(id, status(s)).unwrap();
                }
                Action::Delete { target } => {
                    let ids: Vec<u64> = store.trips().iter().map(|t| t.id).collect();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    store.delete_trip(id).unwrap();
                }
            }

            let all = store.trips_cloned();
            for slot in every_slot() {
                prop_assert_eq!(store.has_conflict(&slot), has_conflict(&slot, &all));
            }
        }

        prop_assert_eq!(store.load_all(), store.trips_cloned());
    }

    #[test]
    fn project_all_is_a_sorted_permutation(
        mut trips in prop::collection::vec(record_strategy(), 0..60),
        today in date_strategy(),
    ) {
        for (i, t) in trips.iter_mut().enumerate() {
            t.id = i as u64;
        }
        let rows = project(&trips, DateRange::All, today);

        prop_assert_eq!(rows.len(), trips.len());
        let mut in_ids: Vec<u64> = trips.iter().map(|t| t.id).collect();
        let mut out_ids: Vec<u64> = rows.iter().map(|t| t.id).collect();
        in_ids.sort_unstable();
        out_ids.sort_unstable();
        prop_assert_eq!(in_ids, out_ids);

        for pair in rows.windows(2) {
            prop_assert!((&pair[0].date, &pair[0].time) <= (&pair[1].date, &pair[1].time));
        }
    }

    #[test]
    fn week_matches_seven_day_window(date in date_strategy(), today in date_strategy()) {
        let from_monday = i64::from(today.weekday().num_days_from_monday());
        let delta = (date - today).num_days();
        let expected = delta >= -from_monday && delta <= 6 - from_monday;
        let raw = date.format("%Y-%m-%d").to_string();

        prop_assert_eq!(calendar::is_this_week(&raw, today), expected);
    }

    #[test]
    fn month_matches_year_and_month(date in date_strategy(), today in date_strategy()) {
        let raw = date.format("%Y-%m-%d").to_string();
        let expected = (date.year(), date.month()) == (today.year(), today.month());

        prop_assert_eq!(calendar::is_this_month(&raw, today), expected);
    }

    #[test]
    fn filtered_projection_is_subset_of_all(
        trips in prop::collection::vec(record_strategy(), 0..40),
        today in date_strategy(),
    ) {
        let all = project(&trips, DateRange::All, today);
        for range in [DateRange::Week, DateRange::Month] {
            let filtered = project(&trips, range, today);
            let expected: Vec<TripRecord> = all
                .iter()
                .filter(|t| range.contains(&t.date, today))
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
