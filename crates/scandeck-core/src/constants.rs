//! Shared constants for the editor canvas and transform limits.

/// Editor canvas width in display pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Editor canvas height in display pixels.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Minimum zoom multiplier for an edit session.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom multiplier for an edit session.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplier applied per zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Smallest crop rectangle dimension, in display pixels.
pub const MIN_CROP_DIMENSION: f64 = 20.0;

/// Side length of a crop resize handle, in display pixels.
pub const CROP_HANDLE_SIZE: f64 = 8.0;

/// Fraction of the canvas used when fitting a page to the view.
pub const FIT_TO_VIEW_FACTOR: f64 = 0.8;

/// Fraction of the rendered image used for the initial crop rectangle.
pub const INITIAL_CROP_FRACTION: f64 = 0.6;

/// Upper bound on the initial crop rectangle side, in display pixels.
pub const INITIAL_CROP_MAX: f64 = 200.0;

/// Maximum number of document-level history entries retained.
pub const HISTORY_DEPTH: usize = 100;

/// Maximum number of per-session edit snapshots retained.
pub const EDIT_HISTORY_DEPTH: usize = 50;
