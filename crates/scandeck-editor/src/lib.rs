//! # Scandeck Editor
//!
//! The per-page transform engine: rotation, zoom, pan, and a
//! rectangular crop, applied non-destructively over one page's source
//! raster.
//!
//! ## Core Components
//!
//! - **EditState**: the transform parameters for one edit session
//! - **Crop geometry**: the crop rectangle, its resize handles, and the
//!   drag/clamp math
//! - **EditSession**: the interactive state machine (viewing, panning,
//!   cropping, crop-dragging) with a session-local undo stack
//! - **Rendering**: turning the accumulated parameters into a new
//!   raster at save time
//!
//! ## Design
//!
//! The source raster is never mutated. Preview geometry and save-time
//! geometry use the same [`EditState::display_bounds`] computation so
//! the saved output matches what the preview showed. The session undo
//! stack is independent of the document-level history and is dropped
//! when the session ends.

pub mod crop;
pub mod edit_state;
pub mod render;
pub mod session;

pub use crop::{CropHandle, Rect};
pub use edit_state::EditState;
pub use render::crop_in_source;
pub use session::{EditSession, SessionPhase};
