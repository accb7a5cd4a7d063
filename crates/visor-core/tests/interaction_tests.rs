// Pointer-to-rotation mapping tests.

use std::f32::consts::{FRAC_PI_3, PI};

use visor_core::map_pointer;

#[test]
fn center_maps_to_zero_rotation() {
    let r = map_pointer(400.0, 300.0, 800.0, 600.0).unwrap();
    assert!(r.rotate_x.abs() < 1e-6);
    assert!(r.rotate_y.abs() < 1e-6);
}

#[test]
fn left_edge_maps_to_negative_half_turn() {
    let r = map_pointer(0.0, 300.0, 800.0, 600.0).unwrap();
    assert!((r.rotate_y + PI).abs() < 1e-6);
}

#[test]
fn top_edge_maps_to_negative_tilt_limit() {
    let r = map_pointer(400.0, 0.0, 800.0, 600.0).unwrap();
    assert!((r.rotate_x + FRAC_PI_3).abs() < 1e-6);
}

#[test]
fn in_bounds_results_stay_within_limits() {
    let (w, h) = (1024.0, 768.0);
    for xi in 0..32 {
        for yi in 0..32 {
            let x = xi as f32 / 32.0 * w;
            let y = yi as f32 / 32.0 * h;
            let r = map_pointer(x, y, w, h).expect("in-bounds pointer must map");
            assert!(r.rotate_x >= -FRAC_PI_3 - 1e-6 && r.rotate_x <= FRAC_PI_3 + 1e-6);
            assert!(r.rotate_y >= -PI - 1e-6 && r.rotate_y <= PI + 1e-6);
        }
    }
}

#[test]
fn mapping_is_monotonic_per_axis() {
    let (w, h) = (640.0, 480.0);
    let mut prev_y = f32::NEG_INFINITY;
    for xi in 0..64 {
        let x = xi as f32 / 64.0 * w;
        let r = map_pointer(x, h / 2.0, w, h).unwrap();
        assert!(r.rotate_y > prev_y);
        prev_y = r.rotate_y;
    }
    let mut prev_x = f32::NEG_INFINITY;
    for yi in 0..64 {
        let y = yi as f32 / 64.0 * h;
        let r = map_pointer(w / 2.0, y, w, h).unwrap();
        assert!(r.rotate_x > prev_x);
        prev_x = r.rotate_x;
    }
}

#[test]
fn out_of_bounds_is_no_update() {
    let (w, h) = (800.0, 600.0);
    assert!(map_pointer(-1.0, 300.0, w, h).is_none());
    assert!(map_pointer(800.0, 300.0, w, h).is_none()); // right edge is exclusive
    assert!(map_pointer(400.0, -0.5, w, h).is_none());
    assert!(map_pointer(400.0, 600.0, w, h).is_none()); // bottom edge is exclusive
}

#[test]
fn degenerate_viewport_is_no_update() {
    assert!(map_pointer(0.0, 0.0, 0.0, 600.0).is_none());
    assert!(map_pointer(0.0, 0.0, 800.0, 0.0).is_none());
    assert!(map_pointer(0.0, 0.0, -800.0, 600.0).is_none());
}
