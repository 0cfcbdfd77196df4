//! CPA/TCPA Calculation
//!
//! Closed-form Closest Point of Approach between two constant-velocity
//! vessels.
//!
//! Writing both trajectories as `P(t) = P0 + V·t`, the squared range between
//! them is a quadratic in `t` with leading coefficient `‖Vr‖²` (`Vr` the
//! relative velocity). When that coefficient is nonzero the quadratic has a
//! unique minimum where its derivative vanishes:
//!
//! ```text
//! tcpa = -(Vr · D) / (Vr · Vr)
//! ```
//!
//! with `D` the relative position. This is an exact algebraic identity, not
//! an approximation; no iteration is involved.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::bearing::bearing_from_dx_dy;
use crate::error::CpaError;
use crate::vessel::Vessel;

/// Squared relative speeds below this threshold, scaled by the squared
/// speeds in play, are treated as zero relative velocity. The scaling keeps
/// the test meaningful whether the vessels move at 0.001 or 1000 units.
pub const RELATIVE_VELOCITY_EPSILON: f64 = 1e-9;

/// Result of a CPA/TCPA calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpaResult {
    /// Time to closest approach; negative = CPA already occurred
    pub tcpa: f64,
    /// Predicted target position at `tcpa`
    pub target_at_cpa: Vector2<f64>,
    /// Predicted ownship position at `tcpa`
    pub ownship_at_cpa: Vector2<f64>,
    /// Separation between the two predicted positions
    pub range: f64,
    /// Compass bearing from ownship to target at `tcpa`, degrees [0, 360)
    pub bearing: f64,
}

impl CpaResult {
    /// Check whether this approach breaches the given thresholds: the
    /// vessels are still closing (`tcpa` positive, within `tcpa_threshold`)
    /// and will pass inside `cpa_threshold`.
    pub fn is_dangerous(&self, cpa_threshold: f64, tcpa_threshold: f64) -> bool {
        self.range < cpa_threshold && self.tcpa > 0.0 && self.tcpa < tcpa_threshold
    }
}

impl Vessel {
    /// Compute the closest point of approach with `target`, assuming both
    /// vessels hold their current speed and heading.
    ///
    /// Returns [`CpaError::DegenerateRelativeVelocity`] when the two
    /// velocity vectors are equal (within [`RELATIVE_VELOCITY_EPSILON`],
    /// including two stationary vessels): the separation is then constant,
    /// `tcpa` is undefined under the division, and the error carries the
    /// current-position range as the documented fallback.
    pub fn cpa(&self, target: &Vessel) -> Result<CpaResult, CpaError> {
        // Relative velocity and position of the target as seen from ownship
        let vr = target.velocity() - self.velocity();
        let d = target.position() - self.position();

        let v_sq = vr.norm_squared();
        let scale = 1.0 + self.velocity().norm_squared() + target.velocity().norm_squared();
        if v_sq < RELATIVE_VELOCITY_EPSILON * scale {
            return Err(CpaError::DegenerateRelativeVelocity { range: d.norm() });
        }

        let tcpa = -vr.dot(&d) / v_sq;
        let target_at_cpa = target.position() + target.velocity() * tcpa;
        let ownship_at_cpa = self.position() + self.velocity() * tcpa;
        let separation = target_at_cpa - ownship_at_cpa;

        Ok(CpaResult {
            tcpa,
            target_at_cpa,
            ownship_at_cpa,
            range: separation.norm(),
            bearing: bearing_from_dx_dy(separation.x, separation.y),
        })
    }
}
