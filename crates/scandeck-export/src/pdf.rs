//! PDF layout planning.
//!
//! One A4 portrait sheet per page, each raster aspect-fit to the
//! sheet and centered. Planning is pure math over page dimensions;
//! the byte-stream encoding lives behind [`PdfBackend`].

use async_trait::async_trait;
use chrono::Utc;
use scandeck_core::{ExportError, Page, PageId};

/// A4 portrait sheet width in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;

/// A4 portrait sheet height in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// One page placed on its sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPage {
    /// Which page this placement renders.
    pub page_id: PageId,
    /// Left edge of the image on the sheet.
    pub x_mm: f64,
    /// Top edge of the image on the sheet.
    pub y_mm: f64,
    /// Rendered image width on the sheet.
    pub width_mm: f64,
    /// Rendered image height on the sheet.
    pub height_mm: f64,
}

/// The planned placements, one sheet per page, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub placements: Vec<PlacedPage>,
}

impl PdfLayout {
    /// Plans placements for `pages`.
    ///
    /// Each raster fills the sheet width unless that would overflow
    /// the height, in which case it fills the height instead; either
    /// way the aspect ratio is preserved and the image is centered.
    ///
    /// Fails with [`ExportError::NothingToExport`] for an empty list,
    /// so callers surface the condition before any backend I/O runs.
    pub fn plan(pages: &[&Page]) -> Result<Self, ExportError> {
        if pages.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let placements = pages
            .iter()
            .map(|page| {
                let aspect =
                    f64::from(page.pixels.width()) / f64::from(page.pixels.height().max(1));

                let mut width_mm = A4_WIDTH_MM;
                let mut height_mm = A4_WIDTH_MM / aspect;
                if height_mm > A4_HEIGHT_MM {
                    height_mm = A4_HEIGHT_MM;
                    width_mm = A4_HEIGHT_MM * aspect;
                }

                PlacedPage {
                    page_id: page.id.clone(),
                    x_mm: (A4_WIDTH_MM - width_mm) / 2.0,
                    y_mm: (A4_HEIGHT_MM - height_mm) / 2.0,
                    width_mm,
                    height_mm,
                }
            })
            .collect();

        tracing::debug!(sheets = pages.len(), "pdf layout planned");
        Ok(Self { placements })
    }

    /// Number of sheets in the planned document.
    pub fn sheet_count(&self) -> usize {
        self.placements.len()
    }
}

/// The default file name offered for a saved PDF.
pub fn default_file_name() -> String {
    format!("scanned_document_{}", Utc::now().timestamp_millis())
}

/// Encodes and persists a planned PDF document.
#[async_trait]
pub trait PdfBackend: Send + Sync {
    /// Renders `pages` according to `layout` and writes the document
    /// under `file_name`.
    async fn save_pdf(
        &self,
        file_name: &str,
        pages: &[Page],
        layout: &PdfLayout,
    ) -> Result<(), ExportError>;
}
