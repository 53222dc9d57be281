//! Tests for the list view's selection flow across pages and bulk actions.

use serde_json::json;
use wardrobe_models::model::{BulkAction, BulkRequest, PageInfo, SelectionMode, SelectionModel};

fn ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("outfit-{i}")).collect()
}

fn toggle_all(state: &SelectionModel, page: &[String]) -> SelectionModel {
    state.toggle_select_all_on_page(page.iter().map(String::as_str))
}

#[test]
fn test_select_all_spans_pages_without_loading_ids() {
    let total_items = 50;
    let info = PageInfo::new(total_items, 20);
    let first_page = ids(0..20);

    // One checkbox click on page 0 selects the whole result set.
    let selection = toggle_all(&SelectionModel::new(), &first_page);
    assert!(selection.is_all_selected());
    assert_eq!(selection.selected_count(total_items), 50);

    // Navigating to the last page changes nothing about the selection; rows
    // there render as selected even though their ids were never enumerated.
    assert_eq!(info.items_on_page(2), 10);
    let last_page = ids(40..50);
    for id in &last_page {
        assert!(selection.is_selected(id));
    }
}

#[test]
fn test_exclusions_survive_page_navigation() {
    let total_items = 50;
    let first_page = ids(0..20);

    let selection = toggle_all(&SelectionModel::new(), &first_page);
    // Untick one row on page 0 and one on page 1.
    let selection = selection.toggle_item("outfit-3").toggle_item("outfit-25");

    assert_eq!(selection.mode(), SelectionMode::All);
    assert_eq!(selection.selected_count(total_items), 48);
    assert!(!selection.is_selected("outfit-3"));
    assert!(!selection.is_selected("outfit-25"));
    assert!(selection.is_selected("outfit-40"));
    assert!(selection.is_partially_selected(20));
}

#[test]
fn test_bulk_delete_payload_for_all_except() {
    let total_items = 50;
    let first_page = ids(0..20);

    let selection = toggle_all(&SelectionModel::new(), &first_page)
        .toggle_item("outfit-3")
        .toggle_item("outfit-25");

    let request = BulkRequest::from_selection(BulkAction::Delete, &selection, total_items)
        .expect("48 records selected");
    assert_eq!(request.scope.record_count(total_items), 48);

    // A single request naming only the two exclusions.
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "action": "delete",
            "excluded_ids": ["outfit-25", "outfit-3"],
        })
    );
}

#[test]
fn test_explicit_selection_reanalyze_payload() {
    let selection = SelectionModel::new()
        .toggle_item("outfit-12")
        .toggle_item("outfit-4");

    let request = BulkRequest::from_selection(BulkAction::Reanalyze, &selection, 50)
        .expect("two records selected");

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "action": "reanalyze",
            "ids": ["outfit-12", "outfit-4"],
        })
    );
}

#[test]
fn test_host_reset_after_bulk_delete() {
    let first_page = ids(0..20);
    let selection = toggle_all(&SelectionModel::new(), &first_page).toggle_item("outfit-3");

    // The delete completes server-side; the host reconciles by resetting the
    // selection and re-deriving pagination from the new total.
    let selection = selection.clear_selection();
    let info = PageInfo::new(1, 20);

    assert!(!selection.has_selection(info.total_items()));
    assert_eq!(info.page_count(), 1);
    assert_eq!(info.clamp_page(2), 0);
    assert!(
        BulkRequest::from_selection(BulkAction::Delete, &selection, info.total_items()).is_none()
    );
}

#[test]
fn test_checkbox_cycle_from_partial_selection() {
    // A row is ticked, then the header checkbox is clicked twice: first click
    // clears the partial selection, second click selects everything.
    let page = ids(0..20);
    let selection = SelectionModel::new().toggle_item("outfit-5");

    let cleared = toggle_all(&selection, &page);
    assert_eq!(cleared.mode(), SelectionMode::None);

    let all = toggle_all(&cleared, &page);
    assert!(all.is_all_selected());
}
