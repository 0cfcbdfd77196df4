//! Vessel Kinematic State
//!
//! A vessel is a point mass in a planar Cartesian frame, moving at constant
//! speed along a compass heading. Headings and bearings use the marine
//! convention: degrees clockwise from the +y axis, so 0° is "north" (+y)
//! and 90° is "east" (+x).

use nalgebra::Vector2;
use serde::Serialize;

/// A point vessel with constant speed and heading.
///
/// The velocity vector is derived **once** at construction from `speed` and
/// `heading`. There are no mutators, so the derived vector can never fall
/// out of sync with the scalars it was computed from.
///
/// `speed` is accepted as any real number: a negative speed means reverse
/// travel along the heading (the velocity vector points opposite to the
/// heading direction). No range validation is applied to any field, and
/// `heading` is stored as given rather than normalized to [0, 360); a
/// heading of 450° produces the same velocity as 90° through sin/cos
/// periodicity.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    /// Vessel length, carried for display purposes; unused in kinematics
    length: f64,
    /// Position in planar Cartesian coordinates
    position: Vector2<f64>,
    /// Signed speed along the heading direction
    speed: f64,
    /// Compass heading in degrees, stored as given
    heading: f64,
    /// Velocity vector, fixed at construction
    velocity: Vector2<f64>,
}

impl Vessel {
    /// Create a vessel at `(x, y)` with the given speed and compass heading.
    pub fn new(length: f64, x: f64, y: f64, speed: f64, heading: f64) -> Self {
        let heading_rad = heading.to_radians();
        Vessel {
            length,
            position: Vector2::new(x, y),
            speed,
            heading,
            velocity: Vector2::new(speed * heading_rad.sin(), speed * heading_rad.cos()),
        }
    }

    /// Vessel length in the same planar units as position
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Current position
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    /// Signed speed along the heading direction
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Compass heading in degrees, as given at construction
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Velocity vector derived at construction
    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_velocity_magnitude_matches_speed() {
        let v = Vessel::new(30.0, 5.0, -3.0, 12.5, 37.0);
        assert!((v.velocity().norm() - 12.5).abs() < EPS);
    }

    #[test]
    fn test_compass_convention() {
        // Heading 0° is due north (+y)
        let north = Vessel::new(10.0, 0.0, 0.0, 10.0, 0.0);
        assert!((north.velocity().x - 0.0).abs() < EPS);
        assert!((north.velocity().y - 10.0).abs() < EPS);

        // Heading 90° is due east (+x)
        let east = Vessel::new(10.0, 0.0, 0.0, 10.0, 90.0);
        assert!((east.velocity().x - 10.0).abs() < EPS);
        assert!((east.velocity().y - 0.0).abs() < EPS);
    }

    #[test]
    fn test_negative_speed_reverses_velocity() {
        let ahead = Vessel::new(10.0, 0.0, 0.0, 5.0, 30.0);
        let astern = Vessel::new(10.0, 0.0, 0.0, -5.0, 30.0);
        assert!((ahead.velocity().x + astern.velocity().x).abs() < EPS);
        assert!((ahead.velocity().y + astern.velocity().y).abs() < EPS);
        assert!((astern.velocity().norm() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_heading_stored_unnormalized() {
        let v = Vessel::new(10.0, 0.0, 0.0, 10.0, 450.0);
        assert_eq!(v.heading(), 450.0);
        // 450° and 90° produce the same velocity
        let east = Vessel::new(10.0, 0.0, 0.0, 10.0, 90.0);
        assert!((v.velocity() - east.velocity()).norm() < EPS);
    }
}
