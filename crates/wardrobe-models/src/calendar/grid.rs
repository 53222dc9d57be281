//! Month-grid geometry and navigation for the calendar view.
//!
//! The view always paints a fixed 6×7 grid, so a month is padded with
//! leading and trailing days from its neighbors. Navigation lands on the
//! first day of the adjacent month, and [`month_bounds`] gives the host the
//! `date_from`/`date_to` range to fetch for a displayed month.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Rows in the month grid.
pub const GRID_ROWS: u32 = 6;
/// Columns in the month grid (days of the week).
pub const GRID_COLS: u32 = 7;

/// Offset of `day` within a week that starts on `first`.
fn weekday_offset(day: Weekday, first: Weekday) -> i64 {
    i64::from((day.num_days_from_monday() + 7 - first.num_days_from_monday()) % 7)
}

/// The 42 cells for the month containing `month`, row-major.
///
/// Each cell carries its date and whether it falls inside the displayed
/// month (padding days from adjacent months are flagged `false`).
pub fn month_grid(month: NaiveDate, first_day_of_week: Weekday) -> Vec<(NaiveDate, bool)> {
    let mut days = Vec::with_capacity((GRID_ROWS * GRID_COLS) as usize);
    let year = month.year();
    let month_number = month.month();

    // Day 1 always exists for a valid date.
    let first_of_month = month.with_day(1).unwrap();
    let start_offset = weekday_offset(first_of_month.weekday(), first_day_of_week);
    let start_date = first_of_month - Duration::days(start_offset);

    for i in 0..i64::from(GRID_ROWS * GRID_COLS) {
        let date = start_date + Duration::days(i);
        let is_current_month = date.year() == year && date.month() == month_number;
        days.push((date, is_current_month));
    }

    days
}

/// First day of the month before the one containing `month`.
pub fn prev_month(month: NaiveDate) -> NaiveDate {
    let (year, month_number) = if month.month() == 1 {
        (month.year() - 1, 12)
    } else {
        (month.year(), month.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month_number, 1).unwrap()
}

/// First day of the month after the one containing `month`.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let (year, month_number) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month_number, 1).unwrap()
}

/// First and last day of the given month, or `None` for an out-of-range
/// year/month pair. This is the fetch range for a displayed month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = next_month(first) - Duration::days(1);
    Some((first, last))
}
