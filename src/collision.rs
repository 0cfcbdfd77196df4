//! Collision-Course Solver
//!
//! Derives a family of speed/heading candidates for a target vessel such
//! that each candidate trajectory intercepts ownship.
//!
//! With `D = P_target − P_ownship`, every candidate velocity has the form
//! `Vt = −D·a + V_ownship` for a scale factor `a > 0`. Relative to ownship
//! the candidate then moves at `−D·a`, straight down the target-to-ownship
//! line, closing the full displacement in `1/a` time units (one time unit
//! under the normalization where `a` scales time). The factor `a` is sampled
//! over `n` half-open steps of `[min_speed/‖D‖, max_speed/‖D‖)`, so the
//! closing rate sweeps the requested speed band.

use serde::{Deserialize, Serialize};

use crate::bearing::bearing_from_dx_dy;
use crate::error::CpaError;
use crate::vessel::Vessel;

/// One colliding speed/heading candidate for the target vessel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionCourse {
    /// Candidate speed, same units as vessel speeds
    pub speed: f64,
    /// Candidate compass heading in degrees [0, 360)
    pub heading: f64,
}

impl Vessel {
    /// Produce `n` `(speed, heading)` pairs for `target` that would put it
    /// on a collision course with ownship (`self`), ordered by increasing
    /// closing rate.
    ///
    /// Fails fast on caller contract violations: `n == 0` or an inverted
    /// speed range is [`CpaError::InvalidRange`], and coincident vessels
    /// (no defined ownship-to-target line) is
    /// [`CpaError::CoincidentVessels`]. `min_speed == max_speed` is valid
    /// and yields `n` copies of the single solution.
    pub fn collision_courses(
        &self,
        target: &Vessel,
        n: usize,
        min_speed: f64,
        max_speed: f64,
    ) -> Result<Vec<CollisionCourse>, CpaError> {
        if n == 0 || min_speed > max_speed {
            return Err(CpaError::InvalidRange {
                min_speed,
                max_speed,
                n,
            });
        }

        let d = target.position() - self.position();
        let d_norm = d.norm();
        if d_norm == 0.0 {
            return Err(CpaError::CoincidentVessels);
        }

        let min_a = min_speed / d_norm;
        let max_a = max_speed / d_norm;
        let step = (max_a - min_a) / n as f64;

        let mut courses = Vec::with_capacity(n);
        for i in 0..n {
            let a = min_a + step * i as f64;
            let vt = -d * a + self.velocity();
            courses.push(CollisionCourse {
                speed: vt.norm(),
                heading: bearing_from_dx_dy(vt.x, vt.y),
            });
        }
        Ok(courses)
    }
}
