// Host-side tests for pointer normalization, update throttling, and ray
// proximity queries.

use glam::{Vec2, Vec3};
use netbg::camera::{Camera, Ray};
use netbg::pointer::{normalize_pointer, ElementBounds, PointerState};

fn bounds() -> ElementBounds {
    ElementBounds {
        width: 800.0,
        height: 600.0,
        offset_left: 40.0,
        offset_top: 120.0,
    }
}

fn camera() -> Camera {
    Camera {
        eye: Vec3::new(50.0, 100.0, 150.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 800.0 / 600.0,
        fovy_radians: 25.0_f32.to_radians(),
        znear: 0.01,
        zfar: 10000.0,
    }
}

#[test]
fn element_center_maps_to_ndc_origin() {
    let b = bounds();
    let ndc = normalize_pointer(
        b.offset_left + b.width / 2.0,
        b.offset_top + b.height / 2.0,
        &b,
    );
    assert_eq!(ndc, Vec2::ZERO);
}

#[test]
fn element_corners_map_to_ndc_extremes() {
    let b = bounds();
    // Top-left
    assert_eq!(
        normalize_pointer(b.offset_left, b.offset_top, &b),
        Vec2::new(-1.0, 1.0)
    );
    // Bottom-right
    assert_eq!(
        normalize_pointer(b.offset_left + b.width, b.offset_top + b.height, &b),
        Vec2::new(1.0, -1.0)
    );
}

#[test]
fn first_move_after_load_is_skipped() {
    let mut pointer = PointerState::default();
    let changed = pointer.record_move(400.0, 300.0, &bounds(), &camera());
    assert!(!changed);
    assert!(!pointer.updated);
    assert!(!pointer.has_ray());
    assert!(pointer.ran);
}

#[test]
fn second_move_updates_and_casts_a_ray() {
    let mut pointer = PointerState::default();
    let b = bounds();
    pointer.record_move(100.0, 200.0, &b, &camera());
    let changed = pointer.record_move(400.0, 300.0, &b, &camera());
    assert!(changed);
    assert!(pointer.updated);
    assert!(pointer.has_ray());
    assert_eq!(pointer.updated_count, -1);
}

#[test]
fn unchanged_coordinates_do_not_rearm_the_update() {
    let mut pointer = PointerState::default();
    let b = bounds();
    pointer.record_move(400.0, 300.0, &b, &camera());
    pointer.record_move(400.0, 300.0, &b, &camera());
    pointer.tick_throttle(72);
    pointer.tick_throttle(72);
    assert!(!pointer.updated);

    // Same position again: no state change, still decayed.
    let changed = pointer.record_move(400.0, 300.0, &b, &camera());
    assert!(!changed);
    assert!(!pointer.updated);
}

#[test]
fn suppressed_pointer_ignores_moves() {
    let mut pointer = PointerState::default();
    pointer.set_suppressed(true);
    let changed = pointer.record_move(400.0, 300.0, &bounds(), &camera());
    assert!(!changed);
    assert!(!pointer.updated);
}

#[test]
fn leaving_suppression_rearms_only_with_a_cached_ray() {
    let mut pointer = PointerState::default();
    // No ray yet: nothing to rearm.
    pointer.set_suppressed(true);
    pointer.set_suppressed(false);
    assert!(!pointer.updated);

    let b = bounds();
    pointer.record_move(100.0, 100.0, &b, &camera());
    pointer.record_move(400.0, 300.0, &b, &camera());
    pointer.set_suppressed(true);
    assert!(!pointer.updated);
    pointer.set_suppressed(false);
    assert!(pointer.updated);
}

#[test]
fn suppression_roundtrip_without_a_ray_leaves_the_throttle_disarmed() {
    let mut pointer = PointerState::default();
    pointer.set_suppressed(true);
    pointer.set_suppressed(false);

    // No movement ever happened, so no number of frames may pulse the
    // update flag; a pulse here would dim a frame with no pointer nearby.
    for frame in 0..150 {
        pointer.tick_throttle(72);
        assert!(!pointer.updated, "spurious pulse at frame {frame}");
    }
    assert!(!pointer.has_ray());
}

#[test]
fn update_flag_pulses_on_the_decay_modulus() {
    let mut pointer = PointerState::default();
    let b = bounds();
    pointer.record_move(100.0, 100.0, &b, &camera());
    pointer.record_move(400.0, 300.0, &b, &camera());

    // First frame after a move keeps the highlight on.
    pointer.tick_throttle(72);
    assert!(pointer.updated);

    // Then it stays off until the counter wraps.
    for frame in 1..72 {
        pointer.tick_throttle(72);
        assert!(!pointer.updated, "unexpected pulse at frame {frame}");
    }
    pointer.tick_throttle(72);
    assert!(pointer.updated);
}

#[test]
fn new_movement_resets_the_throttle_counter() {
    let mut pointer = PointerState::default();
    let b = bounds();
    pointer.record_move(100.0, 100.0, &b, &camera());
    pointer.record_move(400.0, 300.0, &b, &camera());
    for _ in 0..10 {
        pointer.tick_throttle(72);
    }
    assert!(pointer.updated_count >= 0);

    pointer.record_move(500.0, 300.0, &b, &camera());
    assert_eq!(pointer.updated_count, -1);
    assert!(pointer.updated);
}

#[test]
fn active_ray_requires_a_fresh_update() {
    let mut pointer = PointerState::default();
    let b = bounds();
    pointer.record_move(100.0, 100.0, &b, &camera());
    pointer.record_move(400.0, 300.0, &b, &camera());
    assert!(pointer.active_ray().is_some());

    pointer.tick_throttle(72);
    pointer.tick_throttle(72);
    assert!(pointer.active_ray().is_none());
    assert!(pointer.has_ray());
}

#[test]
fn ray_distance_to_perpendicular_point() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    assert!((ray.distance_to_point(Vec3::new(5.0, 3.0, 0.0)) - 3.0).abs() < 1e-6);
    assert!((ray.distance_to_point(Vec3::new(5.0, 0.0, 0.0))).abs() < 1e-6);
}

#[test]
fn ray_distance_behind_origin_measures_to_origin() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    let d = ray.distance_to_point(Vec3::new(-3.0, 4.0, 0.0));
    assert!((d - 5.0).abs() < 1e-6);
}

#[test]
fn center_ndc_ray_points_at_the_camera_target() {
    let cam = camera();
    let ray = cam.ndc_ray(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert!(ray.dir.dot(expected) > 0.999, "dir {:?}", ray.dir);
    assert_eq!(ray.origin, cam.eye);
}
