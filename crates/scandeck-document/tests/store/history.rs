use crate::common::{page, pages};
use scandeck_core::DocumentError;
use scandeck_document::{DocumentState, DocumentSnapshot, HistoryLog};

#[test]
fn new_store_is_empty_with_no_history() {
    let store = DocumentState::new();
    assert!(store.present().is_empty());
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.undo_depth(), 0);
    assert_eq!(store.redo_depth(), 0);
}

#[test]
fn undo_redo_at_the_ends_are_noops() {
    let mut store = DocumentState::new();
    assert!(!store.undo());
    assert!(!store.redo());
    assert!(store.present().is_empty());
}

#[test]
fn new_document_is_recorded_even_when_already_empty() {
    let mut store = DocumentState::new();
    store.create_new_document();
    assert_eq!(store.undo_depth(), 1);

    // Undo from an empty new document returns to the prior (empty) one.
    assert!(store.undo());
    assert!(store.present().is_empty());
}

#[test]
fn new_document_undo_returns_to_prior_content() {
    let mut store = DocumentState::new();
    store.add_pages(pages(2), "Pages scanned").unwrap();
    store.create_new_document();
    assert!(store.present().is_empty());

    assert!(store.undo());
    assert_eq!(store.present().page_count(), 2);
}

#[test]
fn add_pages_appends_in_order() {
    let mut store = DocumentState::new();
    let batch_a = pages(2);
    let batch_b = pages(3);
    let expected: Vec<_> = batch_a
        .iter()
        .chain(batch_b.iter())
        .map(|p| p.id.clone())
        .collect();

    store.add_pages(batch_a, "Pages scanned").unwrap();
    store.add_pages(batch_b, "Pages imported").unwrap();

    let order: Vec<_> = store.pages().iter().map(|p| p.id.clone()).collect();
    assert_eq!(order, expected);
    assert_eq!(store.undo_description(), Some("Pages imported"));
}

#[test]
fn add_pages_rejects_id_collision_with_document() {
    let mut store = DocumentState::new();
    let existing = page(0);
    store
        .add_pages(vec![existing.clone()], "Pages scanned")
        .unwrap();
    let depth = store.undo_depth();

    let err = store
        .add_pages(vec![existing], "Pages scanned")
        .unwrap_err();
    assert!(matches!(err, DocumentError::IdCollision { .. }));
    // Nothing recorded on failure.
    assert_eq!(store.undo_depth(), depth);
    assert_eq!(store.present().page_count(), 1);
}

#[test]
fn add_pages_rejects_collision_within_batch() {
    let mut store = DocumentState::new();
    let dup = page(0);
    let err = store
        .add_pages(vec![dup.clone(), dup], "Pages scanned")
        .unwrap_err();
    assert!(matches!(err, DocumentError::IdCollision { .. }));
    assert!(store.present().is_empty());
}

#[test]
fn empty_batch_records_nothing() {
    let mut store = DocumentState::new();
    store.add_pages(Vec::new(), "Pages scanned").unwrap();
    assert_eq!(store.undo_depth(), 0);
}

#[test]
fn delete_of_missing_id_records_nothing() {
    let mut store = DocumentState::new();
    store.add_pages(pages(1), "Pages scanned").unwrap();
    let depth = store.undo_depth();

    let ghost = page(9);
    assert!(!store.delete_page(&ghost.id));
    assert_eq!(store.undo_depth(), depth);
    assert_eq!(store.present().page_count(), 1);
}

#[test]
fn update_page_replaces_in_place() {
    let mut store = DocumentState::new();
    let batch = pages(3);
    let target = batch[1].clone();
    store.add_pages(batch, "Pages scanned").unwrap();

    let edited = target.replaced_with(page(7).pixels);
    store.update_page(edited.clone()).unwrap();

    assert_eq!(store.present().position(&target.id), Some(1));
    assert_eq!(store.present().page(&target.id).unwrap().pixels, edited.pixels);
}

#[test]
fn update_of_missing_page_is_a_hard_error() {
    let mut store = DocumentState::new();
    store.add_pages(pages(1), "Pages scanned").unwrap();

    let err = store.update_page(page(9)).unwrap_err();
    assert!(matches!(err, DocumentError::PageNotFound { .. }));
}

#[test]
fn undo_redo_inverse_law() {
    let mut store = DocumentState::new();
    let initial = store.present().clone();

    // A mixed sequence of history-producing operations.
    let batch = pages(3);
    let first = batch[0].id.clone();
    let second = batch[1].id.clone();
    store.add_pages(batch, "Pages scanned").unwrap();
    store.toggle_bulk_selection(&first).unwrap();
    store.set_active_page(Some(second.clone())).unwrap();
    store.delete_page(&second);
    store.create_new_document();

    let mut states: Vec<DocumentSnapshot> = vec![store.present().clone()];
    let n = store.undo_depth();
    assert_eq!(n, 5);

    for _ in 0..n {
        assert!(store.undo());
        states.push(store.present().clone());
    }
    assert_eq!(store.present(), &initial);
    assert!(!store.can_undo());

    // Redo restores the same snapshots in reverse, snapshot for snapshot.
    for expected in states.iter().rev().skip(1) {
        assert!(store.redo());
        assert_eq!(store.present(), expected);
    }
    assert!(!store.can_redo());
}

#[test]
fn new_action_after_undo_clears_future() {
    let mut store = DocumentState::new();
    store.add_pages(pages(1), "Pages scanned").unwrap();
    store.add_pages(pages(1), "Pages scanned").unwrap();

    assert!(store.undo());
    assert_eq!(store.redo_depth(), 1);

    store.add_pages(pages(1), "Pages imported").unwrap();
    assert_eq!(store.redo_depth(), 0);
    assert!(!store.redo());
}

#[test]
fn delete_then_undo_then_redo_scenario() {
    let mut store = DocumentState::new();
    let batch = pages(2);
    let a = batch[0].id.clone();
    let b = batch[1].id.clone();
    store.add_pages(batch, "Pages scanned").unwrap();

    assert!(store.delete_page(&a));
    let after_delete: Vec<_> = store.pages().iter().map(|p| p.id.clone()).collect();
    assert_eq!(after_delete, vec![b.clone()]);

    assert!(store.undo());
    let restored: Vec<_> = store.pages().iter().map(|p| p.id.clone()).collect();
    assert_eq!(restored, vec![a, b.clone()]);

    assert!(store.redo());
    let redone: Vec<_> = store.pages().iter().map(|p| p.id.clone()).collect();
    assert_eq!(redone, vec![b]);
}

#[test]
fn history_log_depth_limit_drops_oldest() {
    let mut log = HistoryLog::with_depth(3);
    for _ in 0..5 {
        log.record(
            scandeck_document::HistoryAction::new(
                scandeck_document::HistoryActionKind::NewDocument,
                "New document",
            ),
            DocumentSnapshot::empty(),
        );
    }
    assert_eq!(log.undo_depth(), 3);
}

#[test]
fn restore_discards_history() {
    let mut store = DocumentState::new();
    store.add_pages(pages(2), "Pages scanned").unwrap();
    assert!(store.can_undo());

    let snapshot = store.present().clone();
    store.restore(snapshot);
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.present().page_count(), 2);
}
