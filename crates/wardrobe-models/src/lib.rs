//! Wardrobe Models - view-model state for a wardrobe-management app.
//!
//! This crate holds the pure, synchronous core behind two views of the app:
//!
//! - The paginated outfit list: [`model::SelectionModel`] keeps bulk
//!   selection correct across page navigation using an inverse-set
//!   representation for "select all", and [`model::BulkRequest`] turns the
//!   selection into a single delete/reanalyze API payload.
//! - The outfit calendar: [`calendar::DateBuckets`] indexes a month's
//!   records per day and provenance, and the grid helpers lay out the 6×7
//!   month view.
//!
//! Everything external (fetching, authentication, rendering, suggestion
//! generation) stays outside. Views hold the state, call a transition, and
//! replace what they hold with the returned value.
//!
//! # Example
//!
//! ```
//! use wardrobe_models::model::{BulkAction, BulkRequest, SelectionModel};
//!
//! let page: Vec<String> = (0..20).map(|i| format!("outfit-{i}")).collect();
//! let total_items = 50;
//!
//! let selection = SelectionModel::new()
//!     .toggle_select_all_on_page(page.iter().map(String::as_str))
//!     .toggle_item("outfit-3");
//!
//! let request = BulkRequest::from_selection(BulkAction::Delete, &selection, total_items)
//!     .expect("49 records selected");
//! // One request for all 49 records, naming only the single exclusion.
//! ```

pub mod calendar;
pub mod error;
pub mod model;

pub use error::{Error, Result};
