//! # Scandeck App
//!
//! The application session: wires the document history store to the
//! capture device, the export collaborators, and the on-disk archive,
//! and publishes events for every state change.
//!
//! Everything stateful flows through [`ScanSession`]; the UI layer is
//! expected to hold one session and route user interactions into it.

pub mod session;

pub use session::{CaptureToken, ScanSession};
