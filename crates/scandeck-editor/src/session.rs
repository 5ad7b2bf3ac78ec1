//! Interactive edit session state machine.
//!
//! One session edits one page. Pointer input drives the phases:
//!
//! - `Viewing`: pointer-down starts a pan
//! - `Panning`: pointer movement updates the pan offset
//! - `Cropping`: crop mode is on; pointer-down on a handle or the
//!   rectangle interior starts a crop drag
//! - `CropDragging`: pointer movement reshapes the crop rectangle
//!
//! Rotations and completed crop drags snapshot the edit state onto a
//! session-local undo stack. Zoom and pan are continuous view
//! adjustments and are not snapshotted, matching how the interactions
//! feel to the user.

use crate::crop::{self, CropHandle, Rect};
use crate::edit_state::EditState;
use crate::render;
use scandeck_core::constants::EDIT_HISTORY_DEPTH;
use scandeck_core::{EditError, Page, PixelSource};

/// Where the session is in its pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    /// No interaction in progress, crop mode off.
    Viewing,
    /// A pan drag is in progress. Holds the grab point relative to the
    /// pan origin so movement is absolute, not accumulated.
    Panning { grab_x: f64, grab_y: f64 },
    /// Crop mode is on, no drag in progress.
    Cropping,
    /// A crop drag is in progress.
    CropDragging {
        handle: CropHandle,
        start_x: f64,
        start_y: f64,
        start_rect: Rect,
    },
}

/// An interactive edit session over one page.
///
/// The page raster is never modified; [`EditSession::save`] produces
/// the replacement page and the caller commits it to the document
/// store as a normal update.
#[derive(Debug, Clone)]
pub struct EditSession {
    page: Page,
    state: EditState,
    phase: SessionPhase,
    past: Vec<EditState>,
    future: Vec<EditState>,
}

impl EditSession {
    /// Opens a session on `page` at the identity transform.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            state: EditState::identity(),
            phase: SessionPhase::Viewing,
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// The page under edit.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The current transform parameters.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The current interaction phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The rectangle the page occupies on the canvas right now.
    pub fn display_bounds(&self) -> Rect {
        self.state
            .display_bounds(self.page.pixels.width(), self.page.pixels.height())
    }

    fn snapshot(&mut self) {
        self.future.clear();
        self.past.push(self.state.clone());
        if self.past.len() > EDIT_HISTORY_DEPTH {
            self.past.remove(0);
        }
    }

    /// Rotates by `degrees` (wrapping), recording an undo snapshot.
    pub fn rotate_by(&mut self, degrees: i32) {
        self.snapshot();
        self.state.rotate_by(degrees);
    }

    /// Rotates a quarter turn clockwise.
    pub fn rotate_clockwise(&mut self) {
        self.rotate_by(90);
    }

    /// Rotates a quarter turn counterclockwise.
    pub fn rotate_counterclockwise(&mut self) {
        self.rotate_by(-90);
    }

    /// One zoom-in step. A continuous view adjustment, not snapshotted.
    pub fn zoom_in(&mut self) {
        self.state.zoom_in();
    }

    /// One zoom-out step.
    pub fn zoom_out(&mut self) {
        self.state.zoom_out();
    }

    /// Fits the page inside the canvas and recenters.
    pub fn fit_to_view(&mut self) {
        self.state
            .fit_to_view(self.page.pixels.width(), self.page.pixels.height());
    }

    /// Toggles crop mode.
    ///
    /// Entering seeds a centered crop rectangle over the rendered
    /// image. Leaving keeps the rectangle but deactivates it, so a
    /// never-saved crop has no effect on output.
    pub fn toggle_crop_mode(&mut self) {
        if self.state.is_cropping() {
            self.state.set_cropping(false);
            self.phase = SessionPhase::Viewing;
        } else {
            let seeded = crop::initial_crop(&self.display_bounds());
            self.state.set_crop(seeded);
            self.state.set_cropping(true);
            self.phase = SessionPhase::Cropping;
        }
    }

    /// Routes a pointer-down at canvas coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.state.is_cropping() {
            if let Some(rect) = self.state.crop().copied() {
                if let Some(handle) = crop::hit_test(&rect, x, y) {
                    self.phase = SessionPhase::CropDragging {
                        handle,
                        start_x: x,
                        start_y: y,
                        start_rect: rect,
                    };
                }
            }
        } else {
            let (pan_x, pan_y) = self.state.pan();
            self.phase = SessionPhase::Panning {
                grab_x: x - pan_x,
                grab_y: y - pan_y,
            };
        }
    }

    /// Routes pointer movement during a drag.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.phase {
            SessionPhase::Panning { grab_x, grab_y } => {
                self.state.set_pan(x - grab_x, y - grab_y);
            }
            SessionPhase::CropDragging {
                handle,
                start_x,
                start_y,
                start_rect,
            } => {
                let bounds = self.display_bounds();
                let reshaped = crop::drag(&start_rect, handle, x - start_x, y - start_y, &bounds);
                self.state.set_crop(reshaped);
            }
            SessionPhase::Viewing | SessionPhase::Cropping => {}
        }
    }

    /// Routes pointer-up: a finished crop drag commits the rectangle
    /// (with an undo snapshot), a finished pan just ends.
    pub fn pointer_up(&mut self) {
        match self.phase {
            SessionPhase::CropDragging { start_rect, .. } => {
                // Snapshot the pre-drag rectangle so undo reverts it.
                let mut before = self.state.clone();
                before.set_crop(start_rect);
                self.future.clear();
                self.past.push(before);
                if self.past.len() > EDIT_HISTORY_DEPTH {
                    self.past.remove(0);
                }
                self.phase = SessionPhase::Cropping;
            }
            SessionPhase::Panning { .. } => {
                self.phase = SessionPhase::Viewing;
            }
            SessionPhase::Viewing | SessionPhase::Cropping => {}
        }
    }

    /// Reverts the last snapshotted transform. Returns false at the
    /// bottom of the stack.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(std::mem::replace(&mut self.state, previous));
                true
            }
            None => false,
        }
    }

    /// Reapplies an undone transform. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(std::mem::replace(&mut self.state, next));
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Renders the edited raster without ending the session.
    pub fn render_output(&self) -> Result<PixelSource, EditError> {
        render::render_output(&self.page.pixels, &self.state)
    }

    /// Produces the replacement page carrying the edited raster.
    ///
    /// On failure the session is untouched, so the caller can retry or
    /// cancel.
    pub fn save(&self) -> Result<Page, EditError> {
        let pixels = self.render_output()?;
        tracing::debug!(page = %self.page.id, rotation = self.state.rotation(), "edit saved");
        Ok(self.page.replaced_with(pixels))
    }
}
