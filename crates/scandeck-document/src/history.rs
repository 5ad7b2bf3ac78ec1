//! Linear undo/redo history over document snapshots.
//!
//! The log is the past/present/future triple: every state-changing
//! action pushes the prior present onto the past and clears the future,
//! so redoing after a fresh action is impossible by design. Undo and
//! redo move the pointer without creating branches.

use crate::snapshot::DocumentSnapshot;
use scandeck_core::constants::HISTORY_DEPTH;

/// Discriminant for a document-level action, used for audit and debug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryActionKind {
    /// Document reset to empty.
    NewDocument,
    /// Pages appended.
    PagesAdded,
    /// A page removed.
    PageDeleted,
    /// A page replaced in place.
    PageUpdated,
    /// Bulk-selection membership flipped.
    SelectionToggled,
    /// Active page set or cleared.
    ActivePageSet,
}

/// Describes one recorded action. The description is free text for
/// audit/debug and carries no semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryAction {
    /// What kind of action this was.
    pub kind: HistoryActionKind,
    /// Free-text label, e.g. "Pages scanned".
    pub description: String,
}

impl HistoryAction {
    /// Creates an action record.
    pub fn new(kind: HistoryActionKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// A past or future history entry: the snapshot to restore plus the
/// action that moved the document away from it.
#[derive(Debug, Clone)]
struct HistoryEntry {
    snapshot: DocumentSnapshot,
    action: HistoryAction,
}

/// The past/present/future triple.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    past: Vec<HistoryEntry>,
    present: DocumentSnapshot,
    future: Vec<HistoryEntry>,
    max_depth: usize,
}

impl HistoryLog {
    /// Creates a log whose present is the empty document.
    pub fn new() -> Self {
        Self::with_depth(HISTORY_DEPTH)
    }

    /// Creates a log with a custom maximum undo depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present: DocumentSnapshot::empty(),
            future: Vec::new(),
            max_depth,
        }
    }

    /// The current snapshot.
    pub fn present(&self) -> &DocumentSnapshot {
        &self.present
    }

    /// Installs a snapshot as present without recording history.
    ///
    /// Used when restoring persisted state; the caller must hand in an
    /// already-validated snapshot.
    pub fn install(&mut self, snapshot: DocumentSnapshot) {
        self.past.clear();
        self.future.clear();
        self.present = snapshot;
    }

    /// Records an action: the prior present moves onto the past, the
    /// new snapshot becomes present, and the future is discarded.
    pub fn record(&mut self, action: HistoryAction, new_present: DocumentSnapshot) {
        tracing::debug!(kind = ?action.kind, "{}", action.description);

        self.future.clear();
        self.past.push(HistoryEntry {
            snapshot: std::mem::replace(&mut self.present, new_present),
            action,
        });

        if self.past.len() > self.max_depth {
            self.past.remove(0);
        }
    }

    /// Moves the pointer one step back. Returns false (and changes
    /// nothing) when there is no past.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(entry) => {
                tracing::debug!("undo: {}", entry.action.description);
                let redone = std::mem::replace(&mut self.present, entry.snapshot);
                self.future.push(HistoryEntry {
                    snapshot: redone,
                    action: entry.action,
                });
                true
            }
            None => false,
        }
    }

    /// Moves the pointer one step forward. Returns false (and changes
    /// nothing) when there is no future.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(entry) => {
                tracing::debug!("redo: {}", entry.action.description);
                let undone = std::mem::replace(&mut self.present, entry.snapshot);
                self.past.push(HistoryEntry {
                    snapshot: undone,
                    action: entry.action,
                });
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undoable steps.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redoable steps.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Description of the action an undo would revert, if any.
    pub fn undo_description(&self) -> Option<&str> {
        self.past.last().map(|e| e.action.description.as_str())
    }

    /// Description of the action a redo would reapply, if any.
    pub fn redo_description(&self) -> Option<&str> {
        self.future.last().map(|e| e.action.description.as_str())
    }

    /// Drops all history, keeping the present snapshot.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
