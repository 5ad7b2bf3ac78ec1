//! Event type definitions, organized by category.
//!
//! Events are cloneable and serializable for logging and replay. Pixel
//! data never rides on an event; events carry page ids and counts.

use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeckEvent {
    /// Document composition and history changes
    Document(DocumentEvent),
    /// Scanner readiness and capture progress
    Capture(CaptureEvent),
    /// Export collaborator activity
    Export(ExportEvent),
    /// Archive persistence activity
    Storage(StorageEvent),
    /// Surfaced failures
    Error(ErrorEvent),
}

impl DeckEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DeckEvent::Document(_) => EventCategory::Document,
            DeckEvent::Capture(_) => EventCategory::Capture,
            DeckEvent::Export(_) => EventCategory::Export,
            DeckEvent::Storage(_) => EventCategory::Storage,
            DeckEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DeckEvent::Document(e) => e.description(),
            DeckEvent::Capture(e) => e.description(),
            DeckEvent::Export(e) => e.description(),
            DeckEvent::Storage(e) => e.description(),
            DeckEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Document composition and history events.
    Document,
    /// Scanner readiness and capture events.
    Capture,
    /// Export collaborator events.
    Export,
    /// Archive persistence events.
    Storage,
    /// Error events.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Capture => write!(f, "capture"),
            Self::Export => write!(f, "export"),
            Self::Storage => write!(f, "storage"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Document composition and history events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// The document was reset to an empty snapshot.
    NewDocument,
    /// Pages were appended to the document.
    PagesAdded {
        /// How many pages were added.
        count: usize,
        /// Free-text action label for audit.
        label: String,
    },
    /// A page was removed.
    PageDeleted {
        /// The removed page id.
        id: PageId,
    },
    /// A page was replaced in place by an edit.
    PageUpdated {
        /// The replaced page id.
        id: PageId,
    },
    /// Bulk-selection membership flipped for a page.
    SelectionToggled {
        /// The page whose membership changed.
        id: PageId,
        /// Whether the page is now selected.
        selected: bool,
    },
    /// The active page changed.
    ActivePageChanged {
        /// The new active page, if any.
        id: Option<PageId>,
    },
    /// The history pointer moved backwards.
    Undone,
    /// The history pointer moved forwards.
    Redone,
}

impl DocumentEvent {
    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            Self::NewDocument => "new document".to_string(),
            Self::PagesAdded { count, label } => format!("{count} page(s) added: {label}"),
            Self::PageDeleted { id } => format!("page deleted: {id}"),
            Self::PageUpdated { id } => format!("page updated: {id}"),
            Self::SelectionToggled { id, selected } => {
                format!("selection {} for {id}", if *selected { "on" } else { "off" })
            }
            Self::ActivePageChanged { id } => match id {
                Some(id) => format!("active page: {id}"),
                None => "active page cleared".to_string(),
            },
            Self::Undone => "undo".to_string(),
            Self::Redone => "redo".to_string(),
        }
    }
}

/// Scanner readiness and capture events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CaptureEvent {
    /// The device collaborator reported its scanner list.
    DeviceReady {
        /// The default scanner name, if any scanner is attached.
        scanner: Option<String>,
    },
    /// A capture batch started.
    ScanStarted {
        /// The scanner being driven.
        scanner: String,
    },
    /// A capture batch finished and its pages were committed.
    ScanCompleted {
        /// Number of pages committed to the document.
        pages: usize,
    },
    /// A capture batch finished after its document was discarded.
    ScanDiscarded {
        /// Number of pages dropped.
        pages: usize,
    },
}

impl CaptureEvent {
    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            Self::DeviceReady { scanner } => match scanner {
                Some(name) => format!("scanner ready: {name}"),
                None => "no scanners found".to_string(),
            },
            Self::ScanStarted { scanner } => format!("scan started on {scanner}"),
            Self::ScanCompleted { pages } => format!("scan completed: {pages} page(s)"),
            Self::ScanDiscarded { pages } => format!("stale scan discarded: {pages} page(s)"),
        }
    }
}

/// Export collaborator events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExportEvent {
    /// A PDF was rendered and handed to the backend.
    PdfSaved {
        /// Number of pages in the document.
        pages: usize,
    },
    /// A print job was submitted.
    PrintSubmitted {
        /// Number of sheets in the job.
        pages: usize,
    },
    /// A mail message with the document attached was dispatched.
    MailSent {
        /// Number of pages attached.
        pages: usize,
    },
}

impl ExportEvent {
    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            Self::PdfSaved { pages } => format!("pdf saved: {pages} page(s)"),
            Self::PrintSubmitted { pages } => format!("print submitted: {pages} page(s)"),
            Self::MailSent { pages } => format!("mail sent: {pages} page(s)"),
        }
    }
}

/// Archive persistence events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StorageEvent {
    /// A snapshot was written to the archive.
    SnapshotSaved {
        /// Number of pages persisted.
        pages: usize,
    },
    /// A snapshot was restored from the archive.
    SnapshotRestored {
        /// Number of pages restored.
        pages: usize,
        /// Whether recovery fell back to a backup manifest.
        from_backup: bool,
    },
}

impl StorageEvent {
    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            Self::SnapshotSaved { pages } => format!("snapshot saved: {pages} page(s)"),
            Self::SnapshotRestored { pages, from_backup } => format!(
                "snapshot restored: {pages} page(s){}",
                if *from_backup { " (from backup)" } else { "" }
            ),
        }
    }
}

/// Surfaced failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEvent {
    /// Which category of operation failed.
    pub source: EventCategory,
    /// User-facing message.
    pub message: String,
}

impl ErrorEvent {
    /// Short description for logging.
    pub fn description(&self) -> String {
        format!("{} error: {}", self.source, self.message)
    }
}
