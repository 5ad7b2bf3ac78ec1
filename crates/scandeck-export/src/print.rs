//! Print job assembly.
//!
//! Printing renders one sheet per page with the raster contained and
//! centered, the same visual contract as the PDF layout. The job here
//! is the ordered sheet list; spooling is behind [`PrintTarget`].

use async_trait::async_trait;
use scandeck_core::{ExportError, Page, PageId};

/// One sheet of a print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSheet {
    /// Which page this sheet renders.
    pub page_id: PageId,
    /// 1-based sheet number, used for labeling.
    pub number: usize,
}

/// An assembled print job, sheets in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub sheets: Vec<PrintSheet>,
}

impl PrintJob {
    /// Assembles one sheet per page.
    ///
    /// Fails with [`ExportError::NothingToExport`] for an empty page
    /// list.
    pub fn assemble(pages: &[&Page]) -> Result<Self, ExportError> {
        if pages.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        let sheets = pages
            .iter()
            .enumerate()
            .map(|(i, page)| PrintSheet {
                page_id: page.id.clone(),
                number: i + 1,
            })
            .collect();
        Ok(Self { sheets })
    }

    /// Number of sheets in the job.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Spools an assembled print job.
#[async_trait]
pub trait PrintTarget: Send + Sync {
    /// Renders `pages` per `job` and submits the result for printing.
    async fn submit(&self, job: &PrintJob, pages: &[Page]) -> Result<(), ExportError>;
}
