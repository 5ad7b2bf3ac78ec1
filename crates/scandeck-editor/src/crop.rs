//! Crop rectangle geometry: handles, hit testing, and drag math.
//!
//! All coordinates here are in display (canvas) space. Mapping back to
//! source pixels happens at save time in [`crate::render`].

use scandeck_core::constants::{CROP_HANDLE_SIZE, INITIAL_CROP_FRACTION, INITIAL_CROP_MAX, MIN_CROP_DIMENSION};

/// An axis-aligned rectangle in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// X coordinate of the center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Y coordinate of the center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Which part of the crop rectangle a drag grabs.
///
/// Corner handles resize two edges, edge handles resize one, and
/// `Move` translates the whole rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    North,
    South,
    West,
    East,
    Move,
}

impl CropHandle {
    /// The eight resize handles, in hit-test priority order. `Move` is
    /// tested last since its zone is the whole rectangle.
    const RESIZE: [CropHandle; 8] = [
        CropHandle::NorthWest,
        CropHandle::NorthEast,
        CropHandle::SouthWest,
        CropHandle::SouthEast,
        CropHandle::North,
        CropHandle::South,
        CropHandle::West,
        CropHandle::East,
    ];

    /// The square hit zone for this handle on the given crop rectangle.
    pub fn zone(&self, crop: &Rect) -> Rect {
        let h = CROP_HANDLE_SIZE;
        let half = h / 2.0;
        let (cx, cy) = match self {
            CropHandle::NorthWest => (crop.x, crop.y),
            CropHandle::NorthEast => (crop.right(), crop.y),
            CropHandle::SouthWest => (crop.x, crop.bottom()),
            CropHandle::SouthEast => (crop.right(), crop.bottom()),
            CropHandle::North => (crop.center_x(), crop.y),
            CropHandle::South => (crop.center_x(), crop.bottom()),
            CropHandle::West => (crop.x, crop.center_y()),
            CropHandle::East => (crop.right(), crop.center_y()),
            CropHandle::Move => return *crop,
        };
        Rect::new(cx - half, cy - half, h, h)
    }
}

/// Finds the handle under the pointer, resize handles first, then the
/// interior move zone.
pub fn hit_test(crop: &Rect, x: f64, y: f64) -> Option<CropHandle> {
    for handle in CropHandle::RESIZE {
        if handle.zone(crop).contains(x, y) {
            return Some(handle);
        }
    }
    if crop.contains(x, y) {
        return Some(CropHandle::Move);
    }
    None
}

/// The crop rectangle seeded when crop mode is entered: a centered
/// square sized to a fraction of the rendered image, capped at a fixed
/// maximum.
pub fn initial_crop(bounds: &Rect) -> Rect {
    let size = (bounds.width * INITIAL_CROP_FRACTION)
        .min(bounds.height * INITIAL_CROP_FRACTION)
        .min(INITIAL_CROP_MAX);
    Rect::new(
        bounds.x + (bounds.width - size) / 2.0,
        bounds.y + (bounds.height - size) / 2.0,
        size,
        size,
    )
}

/// Recomputes the crop rectangle for a pointer drag.
///
/// `start` is the rectangle at pointer-down, `(dx, dy)` the pointer
/// delta since then, and `bounds` the rendered image rectangle the
/// crop must stay inside. Edges are clamped so the rectangle never
/// leaves `bounds` and never collapses below the minimum dimension.
pub fn drag(start: &Rect, handle: CropHandle, dx: f64, dy: f64, bounds: &Rect) -> Rect {
    let min = MIN_CROP_DIMENSION;
    let mut out = *start;

    // min()/max() rather than clamp(): with a degenerate bounds
    // rectangle the limits can cross, and the lower bound must win.
    let drag_left = |out: &mut Rect| {
        let new_x = (start.x + dx).min(start.right() - min).max(bounds.x);
        out.width = start.width - (new_x - start.x);
        out.x = new_x;
    };
    let drag_top = |out: &mut Rect| {
        let new_y = (start.y + dy).min(start.bottom() - min).max(bounds.y);
        out.height = start.height - (new_y - start.y);
        out.y = new_y;
    };
    let drag_right = |out: &mut Rect| {
        out.width = (start.width + dx).min(bounds.right() - start.x).max(min);
    };
    let drag_bottom = |out: &mut Rect| {
        out.height = (start.height + dy).min(bounds.bottom() - start.y).max(min);
    };

    match handle {
        CropHandle::NorthWest => {
            drag_left(&mut out);
            drag_top(&mut out);
        }
        CropHandle::NorthEast => {
            drag_top(&mut out);
            drag_right(&mut out);
        }
        CropHandle::SouthWest => {
            drag_left(&mut out);
            drag_bottom(&mut out);
        }
        CropHandle::SouthEast => {
            drag_right(&mut out);
            drag_bottom(&mut out);
        }
        CropHandle::North => drag_top(&mut out),
        CropHandle::South => drag_bottom(&mut out),
        CropHandle::West => drag_left(&mut out),
        CropHandle::East => drag_right(&mut out),
        CropHandle::Move => {
            out.x = (start.x + dx).min(bounds.right() - start.width).max(bounds.x);
            out.y = (start.y + dy).min(bounds.bottom() - start.height).max(bounds.y);
        }
    }
    out
}
