//! Bulk-request construction from selection state.
//!
//! Action handlers (delete, reanalyze) read the current [`SelectionModel`]
//! and total count, and must send the backend a *single* request: "delete
//! all except these N" is one payload naming only the exclusions, never one
//! request per record. This module owns that translation.

use serde::Serialize;

use super::selection::{SelectionMode, SelectionModel};

/// The bulk operations the list view offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    /// Delete the selected outfit records.
    Delete,
    /// Re-run suggestion analysis for the selected records.
    Reanalyze,
}

/// Which records a bulk request targets.
///
/// Identifier lists are sorted so serialized payloads are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BulkScope {
    /// Exactly these records (selection mode `Some`).
    Ids { ids: Vec<String> },
    /// Every record in the result set except these (selection mode `All`).
    AllExcept { excluded_ids: Vec<String> },
}

impl BulkScope {
    /// Number of records the scope resolves to, given the server-side total.
    pub fn record_count(&self, total_items: usize) -> usize {
        match self {
            Self::Ids { ids } => ids.len(),
            Self::AllExcept { excluded_ids } => total_items.saturating_sub(excluded_ids.len()),
        }
    }
}

/// A single bulk API request, ready to serialize as the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkRequest {
    /// The operation to perform.
    pub action: BulkAction,
    /// The records to perform it on.
    #[serde(flatten)]
    pub scope: BulkScope,
}

impl BulkRequest {
    /// Builds the request for `action` over the current selection.
    ///
    /// Returns `None` when the selection resolves to zero records, so hosts
    /// can disable the toolbar instead of posting a no-op.
    pub fn from_selection(
        action: BulkAction,
        selection: &SelectionModel,
        total_items: usize,
    ) -> Option<Self> {
        if selection.selected_count(total_items) == 0 {
            return None;
        }

        let scope = match selection.mode() {
            SelectionMode::None => return None,
            SelectionMode::Some => {
                let mut ids: Vec<String> = selection.selected_ids().iter().cloned().collect();
                ids.sort_unstable();
                BulkScope::Ids { ids }
            }
            SelectionMode::All => {
                let mut excluded_ids: Vec<String> =
                    selection.excluded_ids().iter().cloned().collect();
                excluded_ids.sort_unstable();
                BulkScope::AllExcept { excluded_ids }
            }
        };

        tracing::debug!(
            ?action,
            records = scope.record_count(total_items),
            "built bulk request"
        );
        Some(Self { action, scope })
    }
}
