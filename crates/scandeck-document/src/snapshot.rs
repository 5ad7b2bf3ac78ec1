//! Immutable document snapshots.

use chrono::{DateTime, Utc};
use scandeck_core::{DocumentError, Page, PageId};
use std::collections::HashSet;

/// One immutable value representing the whole document at a point in
/// history: ordered pages, bulk-selection membership, and the single
/// active page.
///
/// # Invariants
///
/// - Page ids are unique; page order is insertion order.
/// - `selected_for_bulk` is a subset of the page ids.
/// - `active_page_id`, if present, references a page in `pages`.
///
/// Snapshots are produced already-valid by [`DocumentState`] operations.
/// State restored from outside (e.g. the archive) must be re-validated
/// before use; see [`DocumentSnapshot::sanitized`].
///
/// [`DocumentState`]: crate::DocumentState
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    /// Ordered pages; duplicates by id are forbidden.
    pub pages: Vec<Page>,
    /// Page ids marked for multi-page operations (export/print/mail).
    pub selected_for_bulk: HashSet<PageId>,
    /// The page currently open for editing/inspection, if any.
    pub active_page_id: Option<PageId>,
    /// When this snapshot was produced.
    pub timestamp: DateTime<Utc>,
}

impl DocumentSnapshot {
    /// An empty document: no pages, no selection, no active page.
    pub fn empty() -> Self {
        Self {
            pages: Vec::new(),
            selected_for_bulk: HashSet::new(),
            active_page_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Whether the document holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether a page with `id` exists.
    pub fn contains(&self, id: &PageId) -> bool {
        self.pages.iter().any(|p| &p.id == id)
    }

    /// Looks up a page by id.
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    /// Position of a page within the document order.
    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    /// Checks all snapshot invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = HashSet::with_capacity(self.pages.len());
        for page in &self.pages {
            if !seen.insert(&page.id) {
                return Err(DocumentError::InvalidSnapshot {
                    reason: format!("duplicate page id {}", page.id),
                });
            }
        }

        for id in &self.selected_for_bulk {
            if !seen.contains(id) {
                return Err(DocumentError::InvalidSnapshot {
                    reason: format!("selection references missing page {id}"),
                });
            }
        }

        if let Some(id) = &self.active_page_id {
            if !seen.contains(id) {
                return Err(DocumentError::InvalidSnapshot {
                    reason: format!("active page {id} is not in the document"),
                });
            }
        }

        Ok(())
    }

    /// Returns a copy with invariants restored: duplicate pages after
    /// the first are dropped, and selection / active ids that reference
    /// no page are stripped.
    ///
    /// Used when installing untrusted restored state; in-memory
    /// transitions never need this.
    pub fn sanitized(&self) -> Self {
        let mut seen: HashSet<PageId> = HashSet::with_capacity(self.pages.len());
        let mut pages = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            if seen.insert(page.id.clone()) {
                pages.push(page.clone());
            } else {
                tracing::warn!("dropping duplicate page {} during sanitize", page.id);
            }
        }

        let selected_for_bulk: HashSet<PageId> = self
            .selected_for_bulk
            .iter()
            .filter(|id| seen.contains(*id))
            .cloned()
            .collect();

        let active_page_id = self
            .active_page_id
            .clone()
            .filter(|id| seen.contains(id));

        Self {
            pages,
            selected_for_bulk,
            active_page_id,
            timestamp: self.timestamp,
        }
    }
}

impl Default for DocumentSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
