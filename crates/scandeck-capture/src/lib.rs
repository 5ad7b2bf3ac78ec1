//! # Scandeck Capture
//!
//! The capture collaborator boundary: an async trait describing what
//! the document flow needs from a scanner, plus a virtual in-memory
//! device for tests and scanner-less operation.
//!
//! The core only ever consumes decoded rasters; how they were acquired
//! (device driver, file picker, clipboard) is this crate's concern.

pub mod device;
pub mod virtual_device;

pub use device::{
    CaptureDevice, CaptureOutcome, ColorMode, PaperSize, ScanCapabilities, ScannerReadiness,
};
pub use virtual_device::VirtualScanner;
