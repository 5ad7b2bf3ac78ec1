//! Document state manager.
//!
//! Owns the history log and exposes the document operations. Split into
//! submodules:
//! - `pages`: page composition (add, delete, update)
//! - `selection`: bulk selection, active page, and the coordinator
//!   helpers export/print/mail targeting is built on

mod pages;
mod selection;

use crate::history::{HistoryAction, HistoryActionKind, HistoryLog};
use crate::snapshot::DocumentSnapshot;
use chrono::Utc;
use scandeck_core::Page;

/// The single source of truth for document composition and selection,
/// with full undo/redo.
///
/// All operations are synchronous, perform no I/O, and either succeed
/// or report a caller-input invariant violation. Every state-changing
/// operation records a history entry unless documented otherwise.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    history: HistoryLog,
}

impl DocumentState {
    /// Creates a store holding an empty document with empty history.
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
        }
    }

    /// The current document snapshot.
    pub fn present(&self) -> &DocumentSnapshot {
        self.history.present()
    }

    /// The pages in document order.
    pub fn pages(&self) -> &[Page] {
        &self.present().pages
    }

    /// Resets to an empty snapshot.
    ///
    /// Always recorded, even from an already-empty document, so undo
    /// can return to the prior (possibly non-empty) document.
    pub fn create_new_document(&mut self) {
        self.record(
            HistoryActionKind::NewDocument,
            "New document",
            DocumentSnapshot::empty(),
        );
    }

    /// Installs a restored snapshot as the present without recording
    /// history. Existing history is discarded.
    ///
    /// The caller is responsible for handing in validated state; see
    /// [`DocumentSnapshot::sanitized`].
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.history.install(snapshot);
    }

    /// Moves one step back in history. No-op (returning false) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Moves one step forward in history. No-op (returning false) when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of undoable steps.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of redoable steps.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Description of the action an undo would revert, if any.
    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    /// Drops all history, keeping the present document.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Records `new_present`, stamping it with the current time.
    pub(crate) fn record(
        &mut self,
        kind: HistoryActionKind,
        description: impl Into<String>,
        mut new_present: DocumentSnapshot,
    ) {
        new_present.timestamp = Utc::now();
        debug_assert!(new_present.validate().is_ok());
        self.history
            .record(HistoryAction::new(kind, description), new_present);
    }
}
