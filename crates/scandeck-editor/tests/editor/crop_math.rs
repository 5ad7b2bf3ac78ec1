use proptest::prelude::*;
use scandeck_editor::{crop_in_source, EditState, Rect};

const SRC_W: u32 = 200;
const SRC_H: u32 = 100;

/// Source dimensions after applying the rotation.
fn rotated_dims(state: &EditState) -> (u32, u32) {
    if state.swaps_dimensions() {
        (SRC_H, SRC_W)
    } else {
        (SRC_W, SRC_H)
    }
}

#[test]
fn full_bounds_crop_round_trips_for_every_quarter_turn() {
    for rotation in [0, 90, 180, 270] {
        let mut state = EditState::identity();
        state.rotate_by(rotation);

        let bounds = state.display_bounds(SRC_W, SRC_H);
        let (rw, rh) = rotated_dims(&state);
        let region = crop_in_source(&bounds, &bounds, rw, rh).unwrap();

        assert_eq!(region.x, 0, "rotation {rotation}");
        assert_eq!(region.y, 0, "rotation {rotation}");
        assert_eq!(region.width, rw, "rotation {rotation}");
        assert_eq!(region.height, rh, "rotation {rotation}");
    }
}

#[test]
fn quarter_bounds_crop_maps_to_the_matching_source_quarter() {
    for rotation in [0, 90, 180, 270] {
        let mut state = EditState::identity();
        state.rotate_by(rotation);

        let bounds = state.display_bounds(SRC_W, SRC_H);
        let (rw, rh) = rotated_dims(&state);

        // Top-left quarter of the rendered image.
        let crop = Rect::new(bounds.x, bounds.y, bounds.width / 2.0, bounds.height / 2.0);
        let region = crop_in_source(&crop, &bounds, rw, rh).unwrap();

        assert_eq!(region.x, 0, "rotation {rotation}");
        assert_eq!(region.y, 0, "rotation {rotation}");
        assert_eq!(region.width, rw / 2, "rotation {rotation}");
        assert_eq!(region.height, rh / 2, "rotation {rotation}");
        assert!(region.x + region.width <= rw);
        assert!(region.y + region.height <= rh);
    }
}

#[test]
fn mapping_is_zoom_invariant() {
    // The same relative crop maps to the same source region whatever
    // the zoom, since the mapping uses the dimension ratio.
    for zoom in [0.5, 1.0, 2.0] {
        let mut state = EditState::identity();
        state.zoom_by(zoom);

        let bounds = state.display_bounds(SRC_W, SRC_H);
        let crop = Rect::new(
            bounds.x + bounds.width / 4.0,
            bounds.y + bounds.height / 4.0,
            bounds.width / 2.0,
            bounds.height / 2.0,
        );
        let region = crop_in_source(&crop, &bounds, SRC_W, SRC_H).unwrap();

        assert_eq!(region.x, SRC_W / 4, "zoom {zoom}");
        assert_eq!(region.y, SRC_H / 4, "zoom {zoom}");
        assert_eq!(region.width, SRC_W / 2, "zoom {zoom}");
        assert_eq!(region.height, SRC_H / 2, "zoom {zoom}");
    }
}

#[test]
fn mapping_is_pan_invariant() {
    let mut state = EditState::identity();
    state.set_pan(123.0, -45.0);

    let bounds = state.display_bounds(SRC_W, SRC_H);
    let crop = Rect::new(bounds.x, bounds.y, bounds.width / 2.0, bounds.height);
    let region = crop_in_source(&crop, &bounds, SRC_W, SRC_H).unwrap();

    assert_eq!(region.x, 0);
    assert_eq!(region.width, SRC_W / 2);
    assert_eq!(region.height, SRC_H);
}

proptest! {
    #[test]
    fn mapped_region_never_leaves_the_source(
        rotation in prop::sample::select(vec![0, 90, 180, 270]),
        cx in -100.0..900.0f64,
        cy in -100.0..700.0f64,
        cw in 1.0..400.0f64,
        ch in 1.0..400.0f64,
    ) {
        let mut state = EditState::identity();
        state.rotate_by(rotation);

        let bounds = state.display_bounds(SRC_W, SRC_H);
        let (rw, rh) = rotated_dims(&state);

        // Arbitrary display rectangles, including ones far outside
        // the rendered bounds, must either clamp into the source or
        // fail as degenerate. Never out of range, never a panic.
        if let Ok(region) = crop_in_source(&Rect::new(cx, cy, cw, ch), &bounds, rw, rh) {
            prop_assert!(region.width >= 1);
            prop_assert!(region.height >= 1);
            prop_assert!(region.x + region.width <= rw);
            prop_assert!(region.y + region.height <= rh);
        }
    }
}
