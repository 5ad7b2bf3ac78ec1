//! Transform parameters for one edit session.
//!
//! Handles the numeric semantics: rotation wraps modulo 360 on every
//! increment, zoom is clamped to a fixed range on every operation, and
//! the display bounds swap width and height for quarter rotations.

use crate::crop::Rect;
use scandeck_core::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FIT_TO_VIEW_FACTOR, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};

/// The transform parameters accumulated during an edit session.
///
/// Not part of the document snapshot: this state lives only while an
/// editor session is open and is baked into a new raster on save.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    /// Rotation in degrees, normalized to `[0, 360)`.
    rotation: i32,
    /// Zoom multiplier, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    scale: f64,
    /// Pan offset of the image center from the canvas center.
    pan_x: f64,
    pan_y: f64,
    /// Crop rectangle in display space, set while crop mode is active.
    crop: Option<Rect>,
    /// Whether crop mode is active. Only an active crop affects save.
    cropping: bool,
}

impl EditState {
    /// The identity transform: no rotation, 1:1 scale, centered, no
    /// crop.
    pub fn identity() -> Self {
        Self {
            rotation: 0,
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            crop: None,
            cropping: false,
        }
    }

    /// Current rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Current zoom multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset.
    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// The crop rectangle, if one has been placed.
    pub fn crop(&self) -> Option<&Rect> {
        self.crop.as_ref()
    }

    /// Whether crop mode is active.
    pub fn is_cropping(&self) -> bool {
        self.cropping
    }

    /// Adds `degrees` to the rotation, wrapping into `[0, 360)`.
    pub fn rotate_by(&mut self, degrees: i32) {
        self.rotation = (self.rotation + degrees).rem_euclid(360);
    }

    /// Multiplies the zoom by `factor`, clamped to the legal range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    /// One zoom-in step.
    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    /// One zoom-out step.
    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / ZOOM_STEP);
    }

    /// Sets the zoom multiplier, clamped to the legal range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Chooses the zoom that fits a `src_width` x `src_height` raster
    /// inside the canvas with a margin, and recenters.
    pub fn fit_to_view(&mut self, src_width: u32, src_height: u32) {
        let scale_x = CANVAS_WIDTH * FIT_TO_VIEW_FACTOR / f64::from(src_width.max(1));
        let scale_y = CANVAS_HEIGHT * FIT_TO_VIEW_FACTOR / f64::from(src_height.max(1));
        self.set_scale(scale_x.min(scale_y));
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Places the crop rectangle.
    pub(crate) fn set_crop(&mut self, crop: Rect) {
        self.crop = Some(crop);
    }

    /// Turns crop mode on or off.
    pub(crate) fn set_cropping(&mut self, cropping: bool) {
        self.cropping = cropping;
    }

    /// Whether rotation swaps the effective width and height.
    pub fn swaps_dimensions(&self) -> bool {
        self.rotation == 90 || self.rotation == 270
    }

    /// The rectangle the source raster occupies on the canvas under
    /// the current transform. Quarter rotations swap the rendered
    /// width and height.
    ///
    /// Preview drawing and the save-time crop mapping both use this,
    /// which is what keeps the saved output WYSIWYG.
    pub fn display_bounds(&self, src_width: u32, src_height: u32) -> Rect {
        let (w, h) = if self.swaps_dimensions() {
            (src_height, src_width)
        } else {
            (src_width, src_height)
        };
        let display_w = f64::from(w) * self.scale;
        let display_h = f64::from(h) * self.scale;
        let center_x = CANVAS_WIDTH / 2.0 + self.pan_x;
        let center_y = CANVAS_HEIGHT / 2.0 + self.pan_y;
        Rect::new(
            center_x - display_w / 2.0,
            center_y - display_h / 2.0,
            display_w,
            display_h,
        )
    }
}

impl Default for EditState {
    fn default() -> Self {
        Self::identity()
    }
}
