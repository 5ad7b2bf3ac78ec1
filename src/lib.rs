//! # Scandeck
//!
//! A multi-page document scanning and editing application core:
//! - Document composition with full undo/redo over snapshots
//! - Non-destructive page transforms (rotate, zoom, pan, crop)
//! - Scanner acquisition behind an async device trait
//! - PDF, print, and mail export planning
//! - On-disk persistence with validated backup recovery
//!
//! ## Architecture
//!
//! Scandeck is organized as a workspace with multiple crates:
//!
//! 1. **scandeck-core** - Page data model, error taxonomy, event bus
//! 2. **scandeck-document** - Snapshot history store, selection, active page
//! 3. **scandeck-editor** - Edit sessions: transform state and rendering
//! 4. **scandeck-capture** - Scanner device trait plus a virtual device
//! 5. **scandeck-export** - PDF layout, print jobs, outgoing mail
//! 6. **scandeck-settings** - Configuration and the document archive
//! 7. **scandeck-app** - The session wiring it all together

pub use scandeck_app::{CaptureToken, ScanSession};
pub use scandeck_capture::{
    CaptureDevice, CaptureOutcome, ColorMode, PaperSize, ScanCapabilities, ScannerReadiness,
    VirtualScanner,
};
pub use scandeck_core::{
    CaptureError, DeckEvent, DocumentError, EditError, Error, EventBus, EventFilter, ExportError,
    Page, PageId, PageOrigin, PixelSource, Result, StorageError,
};
pub use scandeck_document::{DocumentSnapshot, DocumentState, HistoryLog};
pub use scandeck_editor::{CropHandle, EditSession, EditState, Rect, SessionPhase};
pub use scandeck_export::{
    MailTransport, OutgoingMail, PdfBackend, PdfLayout, PrintJob, PrintTarget,
};
pub use scandeck_settings::{Config, DocumentArchive};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
