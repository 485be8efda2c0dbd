use chrono::TimeZone;

use super::*;

#[test]
fn window_spans_one_calendar_year() {
    let to = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
    let window = DateWindow::year_ending(to);

    assert_eq!(window.from, Utc.with_ymd_and_hms(2025, 10, 19, 8, 15, 30).unwrap());
    assert_eq!(window.to, to);
}

#[test]
fn window_from_leap_day_clamps_to_feb_28() {
    let to = Utc.with_ymd_and_hms(2028, 2, 29, 0, 0, 0).unwrap();
    let window = DateWindow::year_ending(to);

    assert_eq!(window.from, Utc.with_ymd_and_hms(2027, 2, 28, 0, 0, 0).unwrap());
}

#[test]
fn window_formats_iso_with_millis() {
    let to = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
    let window = DateWindow::year_ending(to);

    assert_eq!(window.to_iso(), "2026-10-19T08:15:30.000Z");
    assert_eq!(window.from_iso(), "2025-10-19T08:15:30.000Z");
}

#[test]
fn day_deserializes_from_api_shape() {
    let day: Day = serde_json::from_str(r#"{"date":"2026-03-01","contributionCount":7}"#).unwrap();

    assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    assert_eq!(day.contribution_count, 7);
    assert!(day.is_active());
}

#[test]
fn zero_count_day_is_inactive() {
    let day = Day::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), 0);
    assert!(!day.is_active());
}
