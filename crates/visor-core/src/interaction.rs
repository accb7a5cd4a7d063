//! Pointer-to-rotation mapping for the interactive viewport.

use std::f32::consts::PI;

use crate::constants::TILT_RANGE;

/// Rotation derived from a pointer position, radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerRotation {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Map a viewport-local pointer position to a group rotation.
///
/// Position is normalized to [-1, 1] per axis, then scaled to a third of a
/// half-turn for X tilt and a full half-turn for Y. Returns `None` when the
/// pointer lies outside `[0, width) x [0, height)` or the viewport is
/// degenerate; callers keep the previous rotation rather than snapping to a
/// default, so leaving the region never causes a discontinuity.
pub fn map_pointer(x: f32, y: f32, width: f32, height: f32) -> Option<PointerRotation> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    if x < 0.0 || x >= width || y < 0.0 || y >= height {
        return None;
    }
    let norm_x = x / width * 2.0 - 1.0;
    let norm_y = y / height * 2.0 - 1.0;
    Some(PointerRotation {
        rotate_x: (TILT_RANGE * norm_y).clamp(-PI, PI),
        rotate_y: (PI * norm_x).clamp(-PI, PI),
    })
}
