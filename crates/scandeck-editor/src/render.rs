//! Save-time rendering: bake the accumulated transform parameters
//! into a new raster.
//!
//! Rotation is applied first, then the crop is mapped from display
//! space back to the rotated source using the ratio of source
//! dimensions to the rendered bounds. Zoom and pan only affect the
//! on-screen view, never the saved pixels.

use crate::crop::Rect;
use crate::edit_state::EditState;
use image::DynamicImage;
use scandeck_core::{EditError, PixelSource};

/// A crop region in source-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Maps a display-space crop rectangle back to source pixels.
///
/// `bounds` is the rendered image rectangle the crop was placed
/// against, `src_width`/`src_height` the dimensions of the (already
/// rotated) source. Coordinates are clamped into the source extent
/// even though upstream drag clamping should keep them inside, since
/// display-space arithmetic accumulates floating point drift.
pub fn crop_in_source(
    crop: &Rect,
    bounds: &Rect,
    src_width: u32,
    src_height: u32,
) -> Result<SourceRect, EditError> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Err(EditError::Render {
            reason: format!(
                "rendered bounds are empty ({:.1} x {:.1})",
                bounds.width, bounds.height
            ),
        });
    }

    let scale_x = f64::from(src_width) / bounds.width;
    let scale_y = f64::from(src_height) / bounds.height;

    let x0 = ((crop.x - bounds.x) * scale_x).max(0.0).min(f64::from(src_width));
    let y0 = ((crop.y - bounds.y) * scale_y).max(0.0).min(f64::from(src_height));
    let x1 = ((crop.right() - bounds.x) * scale_x)
        .max(0.0)
        .min(f64::from(src_width));
    let y1 = ((crop.bottom() - bounds.y) * scale_y)
        .max(0.0)
        .min(f64::from(src_height));

    let width = x1 - x0;
    let height = y1 - y0;
    if width < 1.0 || height < 1.0 {
        return Err(EditError::DegenerateCrop { width, height });
    }

    Ok(SourceRect {
        x: x0.floor() as u32,
        y: y0.floor() as u32,
        width: width.round() as u32,
        height: height.round() as u32,
    })
}

fn rotated(image: &DynamicImage, rotation: i32) -> Result<DynamicImage, EditError> {
    match rotation {
        0 => Ok(image.clone()),
        90 => Ok(image.rotate90()),
        180 => Ok(image.rotate180()),
        270 => Ok(image.rotate270()),
        other => Err(EditError::Render {
            reason: format!("unsupported rotation {other} degrees, expected a quarter turn"),
        }),
    }
}

/// Renders the final raster for `state` over `pixels`.
///
/// The output is at source resolution: rotation reorients the pixels
/// (swapping dimensions for quarter turns) and an active crop selects
/// a sub-region. A crop rectangle left over from a deactivated crop
/// mode is ignored.
pub fn render_output(pixels: &PixelSource, state: &EditState) -> Result<PixelSource, EditError> {
    let turned = rotated(pixels.image(), state.rotation())?;

    let cropped = match state.crop().filter(|_| state.is_cropping()) {
        Some(crop) => {
            let bounds = state.display_bounds(pixels.width(), pixels.height());
            let region = crop_in_source(crop, &bounds, turned.width(), turned.height())?;
            turned.crop_imm(region.x, region.y, region.width, region.height)
        }
        None => turned,
    };

    Ok(PixelSource::new(cropped))
}
