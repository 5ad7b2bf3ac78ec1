//! Shared helpers for document store tests.

use image::DynamicImage;
use scandeck_core::{Page, PageId, PixelSource};

/// Builds a page with a small raster whose width encodes `n`, so pages
/// differ in content as well as id.
pub fn page(n: u32) -> Page {
    Page::new(
        PageId::scanned(),
        PixelSource::new(DynamicImage::new_rgba8(2 + n, 2)),
    )
}

/// Builds `count` distinct pages.
pub fn pages(count: u32) -> Vec<Page> {
    (0..count).map(page).collect()
}
