//! Property tests: the present snapshot stays internally consistent
//! under arbitrary operation sequences, and undo walks any sequence
//! back to the starting state.

use crate::common::page;
use proptest::prelude::*;
use scandeck_document::DocumentState;

/// One randomly chosen store operation. Indices address the current
/// page list modulo its length, so every op targets a real page when
/// any exist.
#[derive(Debug, Clone)]
enum Op {
    Add(u32),
    Delete(usize),
    ToggleSelection(usize),
    SetActive(usize),
    ClearActive,
    Click(usize),
    NewDocument,
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..4).prop_map(Op::Add),
        any::<usize>().prop_map(Op::Delete),
        any::<usize>().prop_map(Op::ToggleSelection),
        any::<usize>().prop_map(Op::SetActive),
        Just(Op::ClearActive),
        any::<usize>().prop_map(Op::Click),
        Just(Op::NewDocument),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

fn nth_id(store: &DocumentState, index: usize) -> Option<scandeck_core::PageId> {
    let pages = store.pages();
    if pages.is_empty() {
        None
    } else {
        Some(pages[index % pages.len()].id.clone())
    }
}

fn apply(store: &mut DocumentState, op: &Op, next_page: &mut u32) {
    match op {
        Op::Add(count) => {
            let batch = (0..*count)
                .map(|_| {
                    *next_page += 1;
                    page(*next_page)
                })
                .collect();
            store.add_pages(batch, "Pages scanned").unwrap();
        }
        Op::Delete(index) => {
            if let Some(id) = nth_id(store, *index) {
                store.delete_page(&id);
            }
        }
        Op::ToggleSelection(index) => {
            if let Some(id) = nth_id(store, *index) {
                store.toggle_bulk_selection(&id).unwrap();
            }
        }
        Op::SetActive(index) => {
            if let Some(id) = nth_id(store, *index) {
                store.set_active_page(Some(id)).unwrap();
            }
        }
        Op::ClearActive => {
            store.set_active_page(None).unwrap();
        }
        Op::Click(index) => {
            if let Some(id) = nth_id(store, *index) {
                store.handle_page_click(&id).unwrap();
            }
        }
        Op::NewDocument => store.create_new_document(),
        Op::Undo => {
            store.undo();
        }
        Op::Redo => {
            store.redo();
        }
    }
}

proptest! {
    #[test]
    fn present_stays_valid(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut store = DocumentState::new();
        let mut next_page = 0;
        for op in &ops {
            apply(&mut store, op, &mut next_page);
            prop_assert!(store.present().validate().is_ok());
        }
    }

    #[test]
    fn deleted_page_leaves_no_references(
        ops in proptest::collection::vec(op_strategy(), 1..30),
        victim in any::<usize>(),
    ) {
        let mut store = DocumentState::new();
        let mut next_page = 0;
        for op in &ops {
            apply(&mut store, op, &mut next_page);
        }

        if let Some(id) = nth_id(&store, victim) {
            store.delete_page(&id);
            prop_assert!(!store.present().contains(&id));
            prop_assert!(!store.is_selected(&id));
            prop_assert_ne!(store.active_page().map(|p| p.id.clone()), Some(id));
        }
    }

    #[test]
    fn full_undo_returns_to_start(ops in proptest::collection::vec(op_strategy(), 1..30)) {
        let mut store = DocumentState::new();
        let initial = store.present().clone();
        let mut next_page = 0;
        for op in &ops {
            apply(&mut store, op, &mut next_page);
        }

        while store.undo() {}
        prop_assert_eq!(store.present(), &initial);
    }
}
