//! # Scandeck Export
//!
//! The export collaborators: PDF page layout planning, print job
//! assembly, and outgoing mail. The contract with the document flow
//! is narrow: each export receives the bulk-operation page list in
//! document order and either transmits a document or fails.
//!
//! Byte-level PDF encoding, spooling, and SMTP are behind traits; this
//! crate owns the layout math and validation in front of them.

pub mod mail;
pub mod pdf;
pub mod print;

pub use mail::{MailTransport, OutgoingMail};
pub use pdf::{default_file_name, PdfBackend, PdfLayout, PlacedPage, A4_HEIGHT_MM, A4_WIDTH_MM};
pub use print::{PrintJob, PrintSheet, PrintTarget};
