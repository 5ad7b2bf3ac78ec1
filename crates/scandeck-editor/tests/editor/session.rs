use crate::common::quadrant_page;
use image::GenericImageView;
use scandeck_core::constants::{INITIAL_CROP_FRACTION, MAX_ZOOM};
use scandeck_editor::{EditSession, SessionPhase};

#[test]
fn new_session_starts_at_identity() {
    let session = EditSession::new(quadrant_page(40, 20));
    assert_eq!(session.state().rotation(), 0);
    assert_eq!(session.state().scale(), 1.0);
    assert_eq!(session.phase(), SessionPhase::Viewing);
    assert!(!session.can_undo());
}

#[test]
fn rotations_accumulate_and_undo() {
    let mut session = EditSession::new(quadrant_page(40, 20));
    session.rotate_clockwise();
    session.rotate_clockwise();
    assert_eq!(session.state().rotation(), 180);

    assert!(session.undo());
    assert_eq!(session.state().rotation(), 90);
    assert!(session.redo());
    assert_eq!(session.state().rotation(), 180);

    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(session.state().rotation(), 0);
    assert!(!session.undo());
}

#[test]
fn new_transform_after_undo_clears_redo() {
    let mut session = EditSession::new(quadrant_page(40, 20));
    session.rotate_clockwise();
    session.rotate_clockwise();
    session.undo();
    session.rotate_counterclockwise();
    assert!(!session.redo());
    assert_eq!(session.state().rotation(), 0);
}

#[test]
fn zoom_saturates_without_entering_history() {
    let mut session = EditSession::new(quadrant_page(40, 20));
    for _ in 0..30 {
        session.zoom_in();
    }
    assert_eq!(session.state().scale(), MAX_ZOOM);
    assert!(!session.can_undo());
}

#[test]
fn pan_follows_the_pointer() {
    let mut session = EditSession::new(quadrant_page(40, 20));
    session.pointer_down(400.0, 300.0);
    assert!(matches!(session.phase(), SessionPhase::Panning { .. }));

    session.pointer_move(420.0, 310.0);
    assert_eq!(session.state().pan(), (20.0, 10.0));

    session.pointer_up();
    assert_eq!(session.phase(), SessionPhase::Viewing);
    assert_eq!(session.state().pan(), (20.0, 10.0));
}

#[test]
fn crop_mode_seeds_a_centered_rectangle() {
    let mut session = EditSession::new(quadrant_page(200, 100));
    session.toggle_crop_mode();

    assert!(session.state().is_cropping());
    assert_eq!(session.phase(), SessionPhase::Cropping);

    let crop = session.state().crop().copied().unwrap();
    let bounds = session.display_bounds();
    assert_eq!(crop.width, 100.0 * INITIAL_CROP_FRACTION);
    assert_eq!(crop.height, crop.width);
    assert!((crop.center_x() - bounds.center_x()).abs() < 1e-9);
    assert!((crop.center_y() - bounds.center_y()).abs() < 1e-9);
}

#[test]
fn crop_drag_commits_on_pointer_up_and_undoes_as_one_step() {
    let mut session = EditSession::new(quadrant_page(200, 100));
    session.toggle_crop_mode();
    let seeded = session.state().crop().copied().unwrap();

    // Grab the south-east handle and grow the rectangle.
    session.pointer_down(seeded.right(), seeded.bottom());
    assert!(matches!(
        session.phase(),
        SessionPhase::CropDragging { .. }
    ));
    session.pointer_move(seeded.right() + 20.0, seeded.bottom() + 10.0);
    session.pointer_up();

    assert_eq!(session.phase(), SessionPhase::Cropping);
    let reshaped = session.state().crop().copied().unwrap();
    assert_eq!(reshaped.width, seeded.width + 20.0);
    assert_eq!(reshaped.height, seeded.height + 10.0);

    assert!(session.undo());
    assert_eq!(session.state().crop().copied(), Some(seeded));
    assert!(session.state().is_cropping());
}

#[test]
fn pointer_down_outside_the_crop_is_ignored_in_crop_mode() {
    let mut session = EditSession::new(quadrant_page(200, 100));
    session.toggle_crop_mode();
    session.pointer_down(0.0, 0.0);
    assert_eq!(session.phase(), SessionPhase::Cropping);
}

#[test]
fn save_applies_rotation_to_output_dimensions() {
    let mut session = EditSession::new(quadrant_page(40, 20));
    session.rotate_clockwise();
    let saved = session.save().unwrap();

    assert_eq!(saved.id, session.page().id);
    assert_eq!(saved.pixels.width(), 20);
    assert_eq!(saved.pixels.height(), 40);

    // Clockwise: the red top-left quadrant lands top-right, the blue
    // bottom-left quadrant lands top-left.
    let img = saved.pixels.image();
    assert_eq!(img.get_pixel(19, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
}

#[test]
fn save_applies_an_active_crop() {
    let mut session = EditSession::new(quadrant_page(200, 100));
    session.toggle_crop_mode();
    let seeded = session.state().crop().copied().unwrap();

    session.pointer_down(seeded.right(), seeded.bottom());
    session.pointer_move(seeded.right() + 20.0, seeded.bottom() + 10.0);
    session.pointer_up();

    let saved = session.save().unwrap();
    assert_eq!(saved.pixels.width(), 80);
    assert_eq!(saved.pixels.height(), 70);
}

#[test]
fn deactivated_crop_does_not_affect_save() {
    let mut session = EditSession::new(quadrant_page(200, 100));
    session.toggle_crop_mode();
    session.toggle_crop_mode();

    let saved = session.save().unwrap();
    assert_eq!(saved.pixels.width(), 200);
    assert_eq!(saved.pixels.height(), 100);
}

#[test]
fn fit_to_view_recenters_and_rescales() {
    let mut session = EditSession::new(quadrant_page(1600, 600));
    session.pointer_down(0.0, 0.0);
    session.pointer_move(50.0, 50.0);
    session.pointer_up();

    session.fit_to_view();
    assert!((session.state().scale() - 0.4).abs() < 1e-9);
    assert_eq!(session.state().pan(), (0.0, 0.0));
}
