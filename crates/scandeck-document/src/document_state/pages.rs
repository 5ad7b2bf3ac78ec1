//! Page composition operations (add, delete, update).

use super::DocumentState;
use crate::history::HistoryActionKind;
use scandeck_core::{DocumentError, Page, PageId};
use std::collections::HashSet;

impl DocumentState {
    /// Appends pages to the end of the document, preserving existing
    /// order. `label` is a free-text action description for audit.
    ///
    /// Fails with [`DocumentError::IdCollision`] if any incoming id is
    /// already present or repeats within the batch; nothing is recorded
    /// on failure.
    pub fn add_pages(&mut self, new_pages: Vec<Page>, label: &str) -> Result<(), DocumentError> {
        if new_pages.is_empty() {
            // An empty batch would record a no-op entry; skip it.
            return Ok(());
        }

        let existing: HashSet<&PageId> = self.present().pages.iter().map(|p| &p.id).collect();
        let mut incoming: HashSet<&PageId> = HashSet::with_capacity(new_pages.len());
        for page in &new_pages {
            if existing.contains(&page.id) || !incoming.insert(&page.id) {
                return Err(DocumentError::IdCollision {
                    id: page.id.to_string(),
                });
            }
        }

        let mut next = self.present().clone();
        next.pages.extend(new_pages);
        self.record(HistoryActionKind::PagesAdded, label, next);
        Ok(())
    }

    /// Removes the page with `id`, stripping it from the bulk selection
    /// and from the active page atomically within the same transition.
    ///
    /// A missing id is a benign no-op: nothing changes and nothing is
    /// recorded to history. Returns whether a page was removed.
    pub fn delete_page(&mut self, id: &PageId) -> bool {
        if !self.present().contains(id) {
            tracing::debug!("delete of missing page {id} ignored");
            return false;
        }

        let mut next = self.present().clone();
        next.pages.retain(|p| &p.id != id);
        next.selected_for_bulk.remove(id);
        if next.active_page_id.as_ref() == Some(id) {
            next.active_page_id = None;
        }

        self.record(HistoryActionKind::PageDeleted, "Page deleted", next);
        true
    }

    /// Replaces the page matching `new_page.id` in place (same
    /// position), leaving selection and active state untouched.
    ///
    /// Fails with [`DocumentError::PageNotFound`] if the id is not
    /// present; silently dropping an edit would be a data-loss bug.
    pub fn update_page(&mut self, new_page: Page) -> Result<(), DocumentError> {
        let index = self
            .present()
            .position(&new_page.id)
            .ok_or_else(|| DocumentError::PageNotFound {
                id: new_page.id.to_string(),
            })?;

        let mut next = self.present().clone();
        next.pages[index] = new_page;
        self.record(HistoryActionKind::PageUpdated, "Page edited", next);
        Ok(())
    }
}
