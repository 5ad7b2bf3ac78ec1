//! # Scandeck Settings
//!
//! Configuration file handling and the on-disk document archive.
//!
//! Configuration is organized into logical sections:
//! - Scan defaults (resolution, device UI)
//! - UI preferences (theme, window, confirmation gates)
//! - Storage (archive location, backup retention, autosave)
//!
//! The archive persists the current document snapshot with rotating
//! backups and recovers from the newest valid backup when the primary
//! copy is corrupt.

pub mod archive;
pub mod config;

pub use archive::{DocumentArchive, Restored};
pub use config::{Config, ScanSettings, StorageSettings, Theme, UiSettings};
