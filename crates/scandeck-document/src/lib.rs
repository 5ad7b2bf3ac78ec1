//! # Scandeck Document
//!
//! The document history store: the single source of truth for document
//! composition and selection, with full undo/redo.
//!
//! ## Core Components
//!
//! - **DocumentSnapshot**: one immutable, fully-valid state of the
//!   multi-page document (pages, bulk selection, active page)
//! - **HistoryLog**: past/present/future triple implementing linear
//!   undo/redo over snapshots
//! - **DocumentState**: the operations callers mutate the document
//!   through, each producing a new snapshot recorded into history
//! - **Selection coordination**: helpers reconciling bulk-selection
//!   state with the single active page, including the bulk-operation
//!   fallback used for export targeting
//!
//! ## Design
//!
//! Every state-changing operation is a pure function of the present
//! snapshot. The store performs no I/O; its only failure modes are
//! caller-input invariant violations, reported as
//! [`scandeck_core::DocumentError`].

pub mod document_state;
pub mod history;
pub mod snapshot;

pub use document_state::DocumentState;
pub use history::{HistoryAction, HistoryActionKind, HistoryLog};
pub use snapshot::DocumentSnapshot;
