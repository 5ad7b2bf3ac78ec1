//! Selection and active-page coordination.
//!
//! Two independent kinds of selection live on the same pages:
//!
//! - **Bulk selection**: multi-page marking that scopes export, print,
//!   and mail to a subset of the document.
//! - **Active page**: the single page open for editing/inspection.
//!
//! The helpers here reconcile the two so callers (toolbar, grid view)
//! do not duplicate the logic.

use super::DocumentState;
use crate::history::HistoryActionKind;
use scandeck_core::{DocumentError, Page, PageId};

impl DocumentState {
    /// Flips membership of `id` in the bulk selection.
    ///
    /// The id is validated so caller bugs surface: an unknown id fails
    /// with [`DocumentError::PageNotFound`] and records nothing.
    /// Returns the new membership state.
    pub fn toggle_bulk_selection(&mut self, id: &PageId) -> Result<bool, DocumentError> {
        if !self.present().contains(id) {
            return Err(DocumentError::PageNotFound { id: id.to_string() });
        }

        let mut next = self.present().clone();
        let selected = if next.selected_for_bulk.remove(id) {
            false
        } else {
            next.selected_for_bulk.insert(id.clone());
            true
        };

        self.record(
            HistoryActionKind::SelectionToggled,
            "Selection changed",
            next,
        );
        Ok(selected)
    }

    /// Sets the active page, with toggle semantics: passing the id that
    /// is already active clears it instead of re-setting it (click to
    /// select, click again to deselect). Passing `None` clears.
    ///
    /// A `Some` id must reference a page in the document.
    /// Returns the new active id.
    pub fn set_active_page(
        &mut self,
        id: Option<PageId>,
    ) -> Result<Option<PageId>, DocumentError> {
        if let Some(id) = &id {
            if !self.present().contains(id) {
                return Err(DocumentError::PageNotFound { id: id.to_string() });
            }
        }

        let new_active = if self.present().active_page_id == id {
            None
        } else {
            id
        };

        let mut next = self.present().clone();
        next.active_page_id = new_active.clone();

        let description = match &new_active {
            Some(_) => "Page selected for editing",
            None => "Page deselected",
        };
        self.record(HistoryActionKind::ActivePageSet, description, next);
        Ok(new_active)
    }

    /// Whether `id` is in the bulk selection.
    pub fn is_selected(&self, id: &PageId) -> bool {
        self.present().selected_for_bulk.contains(id)
    }

    /// The bulk-selected pages, in document order (not selection order).
    pub fn selected_pages(&self) -> Vec<&Page> {
        self.present()
            .pages
            .iter()
            .filter(|p| self.present().selected_for_bulk.contains(&p.id))
            .collect()
    }

    /// The page currently open for editing, if any.
    pub fn active_page(&self) -> Option<&Page> {
        self.present()
            .active_page_id
            .as_ref()
            .and_then(|id| self.present().page(id))
    }

    /// The pages a bulk operation (export/print/mail) should target:
    /// the bulk selection when non-empty, otherwise the entire
    /// document. Operating on everything when nothing is explicitly
    /// selected is a deliberate default.
    pub fn pages_for_bulk_operation(&self) -> Vec<&Page> {
        let selected = self.selected_pages();
        if selected.is_empty() {
            self.present().pages.iter().collect()
        } else {
            selected
        }
    }

    /// Routes one user click on a page thumbnail.
    ///
    /// A single click carries two semantically distinct state changes:
    /// it toggles the page's bulk-selection membership *and* toggles it
    /// as the active page. Both effects are applied in one recorded
    /// transition, so one click is one undo step.
    pub fn handle_page_click(&mut self, id: &PageId) -> Result<(), DocumentError> {
        if !self.present().contains(id) {
            return Err(DocumentError::PageNotFound { id: id.to_string() });
        }

        let mut next = self.present().clone();
        if !next.selected_for_bulk.remove(id) {
            next.selected_for_bulk.insert(id.clone());
        }
        next.active_page_id = if next.active_page_id.as_ref() == Some(id) {
            None
        } else {
            Some(id.clone())
        };

        self.record(HistoryActionKind::ActivePageSet, "Page clicked", next);
        Ok(())
    }
}
