//! Error handling for Scandeck
//!
//! Provides error types for all layers of the application:
//! - Document errors (history store invariant violations)
//! - Edit errors (transform engine / rendering)
//! - Capture errors (scanner collaborator)
//! - Storage errors (document archive / configuration)
//! - Export errors (PDF, print, mail collaborators)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document history store error type
///
/// Represents caller-input invariant violations on the document store.
/// The store performs no I/O, so these are the only failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An incoming page id collides with a page already in the document
    #[error("Page id already present in document: {id}")]
    IdCollision {
        /// The colliding page id.
        id: String,
    },

    /// The referenced page is not in the document
    #[error("Page not found: {id}")]
    PageNotFound {
        /// The missing page id.
        id: String,
    },

    /// A snapshot failed invariant validation
    #[error("Invalid document snapshot: {reason}")]
    InvalidSnapshot {
        /// Which invariant was violated.
        reason: String,
    },
}

/// Transform engine error type
// PartialEq only: DegenerateCrop carries the mapped f64 extent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The source raster could not be rendered to an output
    #[error("Render failed: {reason}")]
    Render {
        /// The reason rendering failed.
        reason: String,
    },

    /// The crop rectangle maps to a degenerate source region
    #[error("Degenerate crop region: {width:.1} x {height:.1}")]
    DegenerateCrop {
        /// Mapped source-space width.
        width: f64,
        /// Mapped source-space height.
        height: f64,
    },
}

/// Capture device error type
#[derive(Error, Debug, Clone)]
pub enum CaptureError {
    /// No scanners were reported by the device collaborator
    #[error("No scanners found")]
    NoScanners,

    /// The named scanner is not available
    #[error("Scanner not available: {device}")]
    DeviceUnavailable {
        /// The requested device name.
        device: String,
    },

    /// The capture operation itself failed
    #[error("Capture failed: {reason}")]
    CaptureFailed {
        /// The reason the capture failed.
        reason: String,
    },

    /// A scanned page preview could not be fetched
    #[error("Failed to fetch preview for page index {index}: {reason}")]
    PreviewFailed {
        /// The page index within the capture batch.
        index: u32,
        /// The reason the preview fetch failed.
        reason: String,
    },
}

/// Persistence / archive error type
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored manifest (and every backup) failed validation
    #[error("Stored document state is corrupt: {reason}")]
    Corrupt {
        /// Why the stored state was rejected.
        reason: String,
    },

    /// A page raster could not be encoded or decoded
    #[error("Pixel codec error for page {id}: {reason}")]
    PixelCodec {
        /// The page id involved.
        id: String,
        /// The codec failure description.
        reason: String,
    },

    /// Configuration file could not be parsed or validated
    #[error("Configuration error: {reason}")]
    Config {
        /// The configuration failure description.
        reason: String,
    },
}

/// Export collaborator error type
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The export was invoked with zero pages
    #[error("Nothing to export")]
    NothingToExport,

    /// An outgoing mail failed validation before dispatch
    #[error("Invalid mail: {reason}")]
    InvalidMail {
        /// Which field was rejected and why.
        reason: String,
    },

    /// The external backend reported a failure
    #[error("{backend} export failed: {reason}")]
    BackendFailed {
        /// Which backend failed (pdf, print, mail).
        backend: String,
        /// The reason reported by the backend.
        reason: String,
    },
}

/// Main error type for Scandeck
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Document store error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Transform engine error
    #[error(transparent)]
    Edit(#[from] EditError),

    /// Capture device error
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Persistence error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Export collaborator error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Another exclusive operation is already in flight
    #[error("Another operation is in progress")]
    Busy,

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a document invariant violation
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this is a recoverable render failure
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Edit(EditError::Render { .. }))
    }

    /// Check if this is an external collaborator failure
    pub fn is_external_failure(&self) -> bool {
        matches!(
            self,
            Error::Capture(_) | Error::Storage(_) | Error::Export(_) | Error::Io(_)
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
