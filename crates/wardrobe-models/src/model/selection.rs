//! Bulk-selection model for paginated item views.
//!
//! This module provides [`SelectionModel`], which tracks which records out of
//! a large server-side total are selected across paginated views. The key
//! design point is the inverse-set representation: "everything is selected"
//! is stored as [`SelectionMode::All`] plus a set of *excluded* identifiers,
//! so selecting thousands of records never materializes their ids client-side.
//!
//! The model is a pure reducer. Every transition takes the current state by
//! reference and returns the next state; the host view replaces its copy with
//! the returned value before issuing the next call. Counts (total items, items
//! on the current page) are supplied by the caller; the model never fetches
//! anything itself.
//!
//! # Example
//!
//! ```
//! use wardrobe_models::model::SelectionModel;
//!
//! let page: Vec<String> = (0..20).map(|i| format!("outfit-{i}")).collect();
//!
//! // Header checkbox with nothing selected: select the entire result set.
//! let selection = SelectionModel::new();
//! let selection = selection.toggle_select_all_on_page(page.iter().map(String::as_str));
//! assert_eq!(selection.selected_count(50), 50);
//!
//! // Unticking one row carves it out of "all".
//! let selection = selection.toggle_item("outfit-3");
//! assert_eq!(selection.selected_count(50), 49);
//! assert!(!selection.is_selected("outfit-3"));
//! ```

use std::collections::HashSet;

/// Top-level selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Nothing is selected.
    #[default]
    None,
    /// The enumerated set of selected identifiers is authoritative.
    Some,
    /// Every record in the server-side total is selected, except an
    /// enumerated set of excluded identifiers.
    All,
}

/// Tracks selection state for a paginated list of records.
///
/// Identifiers are opaque strings; the model places no constraints on their
/// shape. Exactly one of the two identifier sets is active per mode; the
/// inactive one is always empty, and every transition re-establishes that
/// invariant rather than assuming it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionModel {
    /// Current selection mode.
    mode: SelectionMode,

    /// Explicitly selected identifiers. Meaningful only in [`SelectionMode::Some`].
    selected_ids: HashSet<String>,

    /// Identifiers carved out of "select all". Meaningful only in [`SelectionMode::All`].
    excluded_ids: HashSet<String>,
}

impl SelectionModel {
    /// Creates an empty selection (mode [`SelectionMode::None`], both sets empty).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// Gets the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The explicitly selected identifiers.
    ///
    /// Empty unless the mode is [`SelectionMode::Some`].
    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected_ids
    }

    /// The identifiers excluded from "select all".
    ///
    /// Empty unless the mode is [`SelectionMode::All`]. An empty set in mode
    /// `All` means every record, no exceptions.
    pub fn excluded_ids(&self) -> &HashSet<String> {
        &self.excluded_ids
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Handles the header "select all" checkbox for the current page.
    ///
    /// If none of `page_ids` is currently selected, the click means "select
    /// everything across all pages": the mode becomes [`SelectionMode::All`]
    /// with no exclusions. If some or all of the page is already selected,
    /// the click clears the selection entirely rather than cycling through
    /// partial states.
    #[must_use]
    pub fn toggle_select_all_on_page<'a, I>(&self, page_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let selected_on_page = page_ids
            .into_iter()
            .filter(|id| self.is_selected(id))
            .count();

        let next = if selected_on_page == 0 {
            Self {
                mode: SelectionMode::All,
                selected_ids: HashSet::new(),
                excluded_ids: HashSet::new(),
            }
        } else {
            self.clear_selection()
        };
        debug_assert!(next.is_consistent());
        next
    }

    /// Toggles a single identifier's membership.
    ///
    /// - In mode `None`: starts an explicit selection containing just `id`.
    /// - In mode `Some`: adds `id` if absent, removes it if present. Removing
    ///   the last id stays in mode `Some` with an empty set; callers may rely
    ///   on the mode to distinguish "explicitly selected nothing" from "never
    ///   selected".
    /// - In mode `All`: toggles `id` in the exclusion set, deselecting one
    ///   record out of "all" or re-including it.
    #[must_use]
    pub fn toggle_item(&self, id: &str) -> Self {
        let mut next = self.clone();
        match next.mode {
            SelectionMode::None => {
                next.mode = SelectionMode::Some;
                next.selected_ids.insert(id.to_owned());
            }
            SelectionMode::Some => {
                if !next.selected_ids.remove(id) {
                    next.selected_ids.insert(id.to_owned());
                }
            }
            SelectionMode::All => {
                if !next.excluded_ids.remove(id) {
                    next.excluded_ids.insert(id.to_owned());
                }
            }
        }
        debug_assert!(next.is_consistent());
        next
    }

    /// Clears the selection. Always yields mode `None` with both sets empty;
    /// idempotent.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        Self::new()
    }

    // =========================================================================
    // Derived Queries
    // =========================================================================

    /// Checks whether `id` is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Some => self.selected_ids.contains(id),
            SelectionMode::All => !self.excluded_ids.contains(id),
        }
    }

    /// Number of selected records, given the server-side total.
    ///
    /// Saturates at zero if the exclusion set outgrows a stale `total_items`;
    /// the host reconciles after deletions, the model never panics on the gap.
    pub fn selected_count(&self, total_items: usize) -> usize {
        match self.mode {
            SelectionMode::None => 0,
            SelectionMode::Some => self.selected_ids.len(),
            SelectionMode::All => total_items.saturating_sub(self.excluded_ids.len()),
        }
    }

    /// True when every record is selected with no exclusions.
    pub fn is_all_selected(&self) -> bool {
        self.mode == SelectionMode::All && self.excluded_ids.is_empty()
    }

    /// True when the selection is neither empty nor complete, relative to the
    /// current page size. Drives the indeterminate state of the header checkbox.
    pub fn is_partially_selected(&self, page_item_count: usize) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Some => {
                !self.selected_ids.is_empty() && self.selected_ids.len() < page_item_count
            }
            SelectionMode::All => !self.excluded_ids.is_empty(),
        }
    }

    /// True when at least one record is selected, given the server-side total.
    pub fn has_selection(&self, total_items: usize) -> bool {
        self.selected_count(total_items) > 0
    }

    /// Checks the mode/set consistency invariant: the set that is inactive
    /// under the current mode must be empty.
    fn is_consistent(&self) -> bool {
        match self.mode {
            SelectionMode::None => self.selected_ids.is_empty() && self.excluded_ids.is_empty(),
            SelectionMode::Some => self.excluded_ids.is_empty(),
            SelectionMode::All => self.selected_ids.is_empty(),
        }
    }
}
