//! Tests for the calendar view's fetch-index-paint cycle.

use chrono::{NaiveDate, Weekday};
use wardrobe_models::calendar::{
    month_bounds, month_grid, next_month, prev_month, CalendarEntry, DateBuckets, OutfitSource,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_month_render_cycle() {
    // Host fetches the displayed month's range...
    let (from, to) = month_bounds(2025, 1).unwrap();
    assert_eq!(from, date(2025, 1, 1));
    assert_eq!(to, date(2025, 1, 31));

    // ...gets back a flat, unsorted record list...
    let buckets = DateBuckets::build([
        CalendarEntry::new(date(2025, 1, 15), OutfitSource::Manual),
        CalendarEntry::new(date(2025, 1, 6), OutfitSource::Scheduled),
        CalendarEntry::new(date(2025, 1, 15), OutfitSource::Scheduled),
        CalendarEntry::new(date(2025, 1, 15), OutfitSource::Scheduled),
    ]);

    // ...and paints each of the 42 cells with O(1) lookups.
    let grid = month_grid(from, Weekday::Mon);
    assert_eq!(grid.len(), 42);

    let mut days_with_dots = 0;
    for (cell_date, _) in &grid {
        if buckets.classify(*cell_date).any() {
            days_with_dots += 1;
        }
    }
    assert_eq!(days_with_dots, 2);

    let jan15 = buckets.classify(date(2025, 1, 15));
    assert!(jan15.has_scheduled);
    assert!(jan15.has_on_demand);

    let jan6 = buckets.classify(date(2025, 1, 6));
    assert!(jan6.has_scheduled);
    assert!(!jan6.has_on_demand);
}

#[test]
fn test_navigation_produces_new_fetch_range() {
    let displayed = date(2025, 1, 1);

    let previous = prev_month(displayed);
    assert_eq!(previous, date(2024, 12, 1));
    assert_eq!(
        month_bounds(2024, 12).unwrap(),
        (date(2024, 12, 1), date(2024, 12, 31))
    );

    let next = next_month(displayed);
    assert_eq!(next, date(2025, 2, 1));
    assert_eq!(
        month_bounds(2025, 2).unwrap(),
        (date(2025, 2, 1), date(2025, 2, 28))
    );
}

#[test]
fn test_padding_days_can_carry_indicators() {
    // A Monday-first January 2025 grid shows Dec 30-31; records on those
    // days still get dots because buckets are keyed by date, not by month.
    let buckets = DateBuckets::build([CalendarEntry::new(
        date(2024, 12, 30),
        OutfitSource::OnDemand,
    )]);

    let grid = month_grid(date(2025, 1, 1), Weekday::Mon);
    let (cell_date, in_month) = grid[0];
    assert_eq!(cell_date, date(2024, 12, 30));
    assert!(!in_month);
    assert!(buckets.classify(cell_date).has_on_demand);
}

#[test]
fn test_empty_month_renders_no_indicators() {
    let buckets = DateBuckets::build(std::iter::empty());
    for (cell_date, _) in month_grid(date(2025, 3, 1), Weekday::Sun) {
        assert!(!buckets.classify(cell_date).any());
    }
}
