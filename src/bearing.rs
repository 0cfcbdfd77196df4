//! Compass Bearing Helpers
//!
//! Bearings use the marine compass convention: degrees clockwise from the
//! +y axis ("north"), always in [0, 360).

/// Bearing of a displacement `(dx, dy)` in compass degrees.
///
/// Note the argument order `atan2(dx, dy)`: with 0° aligned to +y and angles
/// increasing clockwise, the x component takes the sine slot. Swapping the
/// arguments would rotate every bearing by 90°.
pub fn bearing_from_dx_dy(dx: f64, dy: f64) -> f64 {
    (dx.atan2(dy).to_degrees() + 360.0) % 360.0
}
