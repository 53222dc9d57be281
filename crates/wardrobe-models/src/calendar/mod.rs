//! Calendar-view state: per-day aggregation and month-grid helpers.
//!
//! The calendar view fetches all records for the displayed month (the range
//! from [`month_bounds`]), indexes them with [`DateBuckets::build`], and then
//! paints the 6×7 grid from [`month_grid`], asking [`DateBuckets::classify`]
//! for each cell's indicator dots. Day clicks and month navigation are host
//! callbacks; nothing here performs I/O or timezone conversion.

mod aggregate;
mod grid;

pub use aggregate::{
    parse_date_key, CalendarEntry, DateBuckets, DayIndicators, OutfitSource,
};
pub use grid::{month_bounds, month_grid, next_month, prev_month, GRID_COLS, GRID_ROWS};
