use crate::common::pages;
use scandeck_core::{DocumentError, PageId};
use scandeck_document::DocumentState;

fn populated(count: u32) -> (DocumentState, Vec<PageId>) {
    let mut store = DocumentState::new();
    let batch = pages(count);
    let ids = batch.iter().map(|p| p.id.clone()).collect();
    store.add_pages(batch, "Pages scanned").unwrap();
    (store, ids)
}

#[test]
fn toggle_adds_then_removes() {
    let (mut store, ids) = populated(2);

    assert!(store.toggle_bulk_selection(&ids[0]).unwrap());
    assert!(store.is_selected(&ids[0]));
    assert!(!store.is_selected(&ids[1]));

    assert!(!store.toggle_bulk_selection(&ids[0]).unwrap());
    assert!(!store.is_selected(&ids[0]));
}

#[test]
fn toggle_of_unknown_id_is_an_error_and_records_nothing() {
    let (mut store, _) = populated(1);
    let depth = store.undo_depth();

    let ghost = PageId::scanned();
    let err = store.toggle_bulk_selection(&ghost).unwrap_err();
    assert!(matches!(err, DocumentError::PageNotFound { .. }));
    assert_eq!(store.undo_depth(), depth);
}

#[test]
fn set_active_page_toggles_on_repeat() {
    let (mut store, ids) = populated(2);

    assert_eq!(
        store.set_active_page(Some(ids[0].clone())).unwrap(),
        Some(ids[0].clone())
    );
    assert_eq!(store.active_page().map(|p| &p.id), Some(&ids[0]));

    // Selecting the already-active page deselects it.
    assert_eq!(store.set_active_page(Some(ids[0].clone())).unwrap(), None);
    assert!(store.active_page().is_none());
}

#[test]
fn set_active_page_switches_directly() {
    let (mut store, ids) = populated(2);
    store.set_active_page(Some(ids[0].clone())).unwrap();
    assert_eq!(
        store.set_active_page(Some(ids[1].clone())).unwrap(),
        Some(ids[1].clone())
    );
}

#[test]
fn set_active_page_rejects_unknown_id() {
    let (mut store, _) = populated(1);
    let err = store.set_active_page(Some(PageId::scanned())).unwrap_err();
    assert!(matches!(err, DocumentError::PageNotFound { .. }));
}

#[test]
fn delete_reconciles_both_selections() {
    let (mut store, ids) = populated(3);
    store.toggle_bulk_selection(&ids[1]).unwrap();
    store.set_active_page(Some(ids[1].clone())).unwrap();

    assert!(store.delete_page(&ids[1]));
    assert!(!store.is_selected(&ids[1]));
    assert!(store.active_page().is_none());
    assert_eq!(store.present().page_count(), 2);
}

#[test]
fn delete_of_another_page_keeps_the_active_one() {
    let (mut store, ids) = populated(2);
    store.set_active_page(Some(ids[0].clone())).unwrap();

    assert!(store.delete_page(&ids[1]));
    assert_eq!(store.active_page().map(|p| &p.id), Some(&ids[0]));
}

#[test]
fn selected_pages_come_back_in_document_order() {
    let (mut store, ids) = populated(3);
    // Toggle in reverse order; results must still follow the document.
    store.toggle_bulk_selection(&ids[2]).unwrap();
    store.toggle_bulk_selection(&ids[0]).unwrap();

    let selected: Vec<_> = store.selected_pages().iter().map(|p| p.id.clone()).collect();
    assert_eq!(selected, vec![ids[0].clone(), ids[2].clone()]);
}

#[test]
fn bulk_operation_falls_back_to_all_pages() {
    let (store, ids) = populated(3);
    let targets: Vec<_> = store
        .pages_for_bulk_operation()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(targets, ids);
}

#[test]
fn bulk_operation_uses_selection_when_present() {
    let (mut store, ids) = populated(3);
    store.toggle_bulk_selection(&ids[1]).unwrap();

    let targets: Vec<_> = store
        .pages_for_bulk_operation()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(targets, vec![ids[1].clone()]);
}

#[test]
fn page_click_toggles_selection_and_active_together() {
    let (mut store, ids) = populated(2);

    store.handle_page_click(&ids[0]).unwrap();
    assert!(store.is_selected(&ids[0]));
    assert_eq!(store.active_page().map(|p| &p.id), Some(&ids[0]));

    store.handle_page_click(&ids[0]).unwrap();
    assert!(!store.is_selected(&ids[0]));
    assert!(store.active_page().is_none());
}

#[test]
fn page_click_is_one_undo_step() {
    let (mut store, ids) = populated(2);
    let before = store.present().clone();
    let depth = store.undo_depth();

    store.handle_page_click(&ids[0]).unwrap();
    assert_eq!(store.undo_depth(), depth + 1);

    assert!(store.undo());
    assert_eq!(store.present(), &before);
}

#[test]
fn page_click_on_unknown_id_is_rejected_whole() {
    let (mut store, _) = populated(1);
    let depth = store.undo_depth();

    let err = store.handle_page_click(&PageId::scanned()).unwrap_err();
    assert!(matches!(err, DocumentError::PageNotFound { .. }));
    assert_eq!(store.undo_depth(), depth);
    assert!(store.active_page().is_none());
}

#[test]
fn selection_changes_are_undoable() {
    let (mut store, ids) = populated(2);
    store.toggle_bulk_selection(&ids[0]).unwrap();
    store.set_active_page(Some(ids[1].clone())).unwrap();

    assert!(store.undo());
    assert!(store.active_page().is_none());
    assert!(store.is_selected(&ids[0]));

    assert!(store.undo());
    assert!(!store.is_selected(&ids[0]));
}
