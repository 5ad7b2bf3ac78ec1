//! # Scandeck Core
//!
//! Core types, errors, and events for the Scandeck document scanning
//! and editing application. Provides the page/pixel data model shared
//! by every other crate, the application error taxonomy, and the
//! event bus used to fan state changes out to observers.

pub mod constants;
pub mod error;
pub mod events;
pub mod page;

pub use error::{
    CaptureError, DocumentError, EditError, Error, ExportError, Result, StorageError,
};

pub use page::{Page, PageId, PageOrigin, PixelSource};

pub use events::{
    CaptureEvent, DeckEvent, DocumentEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    ExportEvent, StorageEvent, SubscriptionId,
};
