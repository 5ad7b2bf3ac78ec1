use image::{DynamicImage, Rgba, RgbaImage};
use scandeck_core::{Page, PageId, PixelSource};

/// Builds a page whose raster has a distinct color per quadrant, so
/// rotations and crops are observable in the output pixels.
pub fn quadrant_page(width: u32, height: u32) -> Page {
    let mut raster = RgbaImage::new(width, height);
    for (x, y, px) in raster.enumerate_pixels_mut() {
        *px = match (x < width / 2, y < height / 2) {
            (true, true) => Rgba([255, 0, 0, 255]),
            (false, true) => Rgba([0, 255, 0, 255]),
            (true, false) => Rgba([0, 0, 255, 255]),
            (false, false) => Rgba([255, 255, 0, 255]),
        };
    }
    Page::new(
        PageId::scanned(),
        PixelSource::new(DynamicImage::ImageRgba8(raster)),
    )
}
