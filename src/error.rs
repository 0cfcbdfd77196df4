//! Error types for CPA and collision-course computation

use thiserror::Error;

/// Errors that can occur when computing CPA or collision courses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CpaError {
    /// The two vessels move with the same velocity vector, so their
    /// separation never changes and the time of closest approach is
    /// undefined. The range at the current positions is carried as the
    /// fallback value (the minimum holds now, at tcpa = 0).
    #[error("relative velocity is zero; range {range:.3} is constant at current positions")]
    DegenerateRelativeVelocity { range: f64 },

    /// Ownship and target occupy the same position, so no bearing from one
    /// to the other is defined.
    #[error("vessels are coincident; no bearing between them is defined")]
    CoincidentVessels,

    /// The solver was called with an empty or inverted sampling range.
    #[error("invalid solver range: n={n}, speeds {min_speed}..{max_speed}")]
    InvalidRange {
        min_speed: f64,
        max_speed: f64,
        n: usize,
    },
}
