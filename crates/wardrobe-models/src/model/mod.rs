//! Selection and pagination state for the paginated list view.
//!
//! The list view loads one page of records (identifiers plus a server-side
//! total) from the data layer and threads them through the types here:
//!
//! - [`SelectionModel`]: tri-state bulk selection (none / explicit set /
//!   all-except-exclusions) that stays correct across page navigation
//!   without ever holding the full identifier list in memory.
//! - [`BulkRequest`]: translates the selection into the single bulk API
//!   request the action handlers post.
//! - [`PageInfo`] / [`PageRequest`]: limit/offset arithmetic for fetching
//!   and for reconciling the current page after the total changes.
//!
//! All of it is pure, synchronous state bookkeeping. Side effects (the
//! actual fetches and bulk API calls) belong to the host view.

mod bulk;
mod pagination;
pub mod selection;

pub use bulk::{BulkAction, BulkRequest, BulkScope};
pub use pagination::{PageInfo, PageRequest};
pub use selection::{SelectionMode, SelectionModel};
