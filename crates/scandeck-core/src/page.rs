//! Page data model.
//!
//! A `Page` is one scanned or imported document image: a stable id, an
//! immutable decoded raster, and a capture timestamp. Pages are value
//! types: editing a page produces a replacement with the same id and a
//! fresh raster, never an in-place mutation.

use chrono::{DateTime, Utc};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Where a page came from. Used for display and classification only;
/// page identity is the full id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrigin {
    /// Captured from a scanner device.
    Scan,
    /// Imported from a file or other external source.
    Import,
}

impl fmt::Display for PageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Import => write!(f, "import"),
        }
    }
}

/// Opaque page identifier, stable for the page's lifetime.
///
/// Ids are namespaced by origin (`scan-*` / `import-*`). The prefix is
/// informational; equality and hashing use the whole string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Generates a fresh id for a scanned page.
    pub fn scanned() -> Self {
        Self(format!("scan-{}", Uuid::new_v4()))
    }

    /// Generates a fresh id for an imported page.
    pub fn imported() -> Self {
        Self(format!("import-{}", Uuid::new_v4()))
    }

    /// Wraps an existing id string (e.g. restored from the archive).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Classifies the id by its namespace prefix.
    ///
    /// Ids without a recognized prefix are treated as imports.
    pub fn origin(&self) -> PageOrigin {
        if self.0.starts_with("scan-") {
            PageOrigin::Scan
        } else {
            PageOrigin::Import
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An owned, immutable-once-created pixel buffer.
///
/// Wraps the decoded raster in an `Arc` so document snapshots (of which
/// the history log keeps many) clone in O(1). The buffer is never
/// mutated after creation; edits build a new `PixelSource`.
#[derive(Debug, Clone)]
pub struct PixelSource(Arc<DynamicImage>);

impl PixelSource {
    /// Wraps a decoded raster.
    pub fn new(image: DynamicImage) -> Self {
        Self(Arc::new(image))
    }

    /// The decoded raster.
    pub fn image(&self) -> &DynamicImage {
        &self.0
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.0.height()
    }
}

impl From<DynamicImage> for PixelSource {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

impl PartialEq for PixelSource {
    fn eq(&self, other: &Self) -> bool {
        // Buffers are immutable, so pointer identity implies equality.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

/// One scanned or imported image in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Stable identity, namespaced by origin.
    pub id: PageId,
    /// Decoded raster at capture (or last edit) time.
    pub pixels: PixelSource,
    /// Creation timestamp. Used for display ordering tie-breaks;
    /// refreshed when the page is replaced by an edit.
    pub captured_at: DateTime<Utc>,
}

impl Page {
    /// Creates a page captured now.
    pub fn new(id: PageId, pixels: PixelSource) -> Self {
        Self {
            id,
            pixels,
            captured_at: Utc::now(),
        }
    }

    /// Creates a page with an explicit timestamp (archive restore).
    pub fn with_captured_at(id: PageId, pixels: PixelSource, captured_at: DateTime<Utc>) -> Self {
        Self {
            id,
            pixels,
            captured_at,
        }
    }

    /// Builds the replacement page an edit produces: same id, new
    /// raster, fresh timestamp.
    pub fn replaced_with(&self, pixels: PixelSource) -> Self {
        Self {
            id: self.id.clone(),
            pixels,
            captured_at: Utc::now(),
        }
    }
}
