use chrono::NaiveDate;

use triplog::{
    calendar::{self, Clock, FixedClock},
    trip::TripRecord,
    types::{CarType, DateRange, TripStatus},
    view::{projector::project, stats::TripStats},
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn trip(id: u64, date: &str, time: &str, status: TripStatus) -> TripRecord {
    TripRecord {
        id,
        name: format!("N{id}"),
        date: date.to_string(),
        time: time.to_string(),
        car_type: CarType::Seat4,
        destination: "Đà Nẵng".to_string(),
        purpose: "Công tác".to_string(),
        status,
    }
}

fn ids(rows: &[TripRecord]) -> Vec<u64> {
    rows.iter().map(|t| t.id).collect()
}

fn fixture() -> Vec<TripRecord> {
    vec![
        trip(1, "2024-06-14", "09:00", TripStatus::Pending),
        trip(2, "2024-06-10", "13:30", TripStatus::Approved),
        trip(3, "2024-05-31", "07:00", TripStatus::Rejected),
        trip(4, "2024-06-10", "08:00", TripStatus::Pending),
        trip(5, "2024-06-17", "08:00", TripStatus::Approved),
        trip(6, "2023-06-12", "08:00", TripStatus::Pending),
    ]
}

#[test]
fn all_sorts_by_date_then_time_without_dropping() {
    let trips = fixture();
    let rows = project(&trips, DateRange::All, day(2024, 6, 12));
    assert_eq!(ids(&rows), vec![6, 3, 4, 2, 1, 5]);
}

#[test]
fn week_keeps_monday_through_sunday() {
    // Wednesday 2024-06-12, week is 06-10 .. 06-16.
    let rows = project(&fixture(), DateRange::Week, day(2024, 6, 12));
    assert_eq!(ids(&rows), vec![4, 2, 1]);
}

#[test]
fn week_on_sunday_looks_back_to_monday() {
    let today = day(2024, 6, 16);
    assert_eq!(calendar::week_bounds(today), Some((day(2024, 6, 10), today)));
    let rows = project(&fixture(), DateRange::Week, today);
    assert_eq!(ids(&rows), vec![4, 2, 1]);
}

#[test]
fn week_spanning_months() {
    // Saturday 2024-06-01, week is 05-27 .. 06-02.
    let rows = project(&fixture(), DateRange::Week, day(2024, 6, 1));
    assert_eq!(ids(&rows), vec![3]);
}

#[test]
fn month_requires_same_year() {
    let rows = project(&fixture(), DateRange::Month, day(2024, 6, 30));
    assert_eq!(ids(&rows), vec![4, 2, 1, 5]);
}

#[test]
fn projection_leaves_input_untouched() {
    let trips = fixture();
    let before = trips.clone();
    let _ = project(&trips, DateRange::Week, day(2024, 6, 12));
    assert_eq!(trips, before);
}

#[test]
fn malformed_dates_never_match_a_range() {
    let today = day(2024, 6, 12);
    assert!(!calendar::is_this_week("12/06/2024", today));
    assert!(!calendar::is_this_month("", today));
    assert!(DateRange::All.contains("garbage", today));
}

#[test]
fn fixed_clock_drives_classification() {
    let clock = FixedClock(day(2024, 6, 12));
    assert!(calendar::is_this_week("2024-06-16", clock.today()));
    assert!(!calendar::is_this_week("2024-06-17", clock.today()));
    assert!(calendar::is_this_month("2024-06-01", clock.today()));
}

#[test]
fn short_labels_use_vietnamese_weekdays() {
    assert_eq!(calendar::short_date_label("2024-06-10"), "T2, 10/06");
    assert_eq!(calendar::short_date_label("2024-06-16"), "CN, 16/06");
    assert_eq!(calendar::short_date_label("soon"), "soon");
}

#[test]
fn stats_count_ranges_and_statuses() {
    let stats = TripStats::collect(&fixture(), day(2024, 6, 12));
    assert_eq!(
        stats,
        TripStats {
            total: 6,
            this_month: 4,
            this_week: 3,
            approved: 2,
            pending: 3,
            rejected: 1,
        }
    );
    assert_eq!(
        stats.status_breakdown(),
        [
            (TripStatus::Approved, 2),
            (TripStatus::Pending, 3),
            (TripStatus::Rejected, 1),
        ]
    );
}
