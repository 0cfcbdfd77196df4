//! # CPA Core
//!
//! Platform-independent vessel kinematics and Closest Point of Approach
//! (CPA) library.
//!
//! This crate contains pure kinematic logic with **zero I/O dependencies**:
//! no async, no platform-specific code, suitable for native hosts and WASM
//! alike. Rendering and reporting layers sit outside the crate and consume
//! the plain serializable values it produces.
//!
//! ## Conventions
//!
//! - Positions are planar Cartesian `(x, y)` in arbitrary consistent units.
//! - Headings and bearings are marine compass degrees: 0° is +y ("north"),
//!   increasing clockwise, so 90° is +x. Bearings are always in [0, 360).
//! - Speeds share the position units per unit time; a negative speed means
//!   reverse travel along the heading.
//!
//! ## Key Modules
//!
//! - [`vessel`] - the [`Vessel`] value type (position, speed, heading, and
//!   the velocity vector derived once at construction)
//! - [`cpa`] - closed-form CPA/TCPA between two vessels
//! - [`collision`] - solver for speed/heading pairs that put a target on a
//!   collision course with ownship
//! - [`bearing`] - compass-bearing helper
//! - [`error`] - error taxonomy for the computations above
//!
//! ## Example: CPA of two meeting vessels
//!
//! ```rust
//! use cpa_core::Vessel;
//!
//! // Ownship running east at 10; target 100 units east, running west at 10
//! let ownship = Vessel::new(30.0, 0.0, 0.0, 10.0, 90.0);
//! let target = Vessel::new(25.0, 100.0, 0.0, 10.0, 270.0);
//!
//! let result = ownship.cpa(&target).unwrap();
//! assert!((result.tcpa - 5.0).abs() < 1e-9);
//! assert!(result.range < 1e-9);
//! ```
//!
//! ## Example: courses that would collide
//!
//! ```rust
//! use cpa_core::Vessel;
//!
//! let ownship = Vessel::new(30.0, 0.0, 0.0, 0.0, 0.0);
//! let target = Vessel::new(25.0, 50.0, 0.0, 10.0, 0.0);
//!
//! // One solution at speed 10: steer due west, straight back at ownship
//! let courses = ownship.collision_courses(&target, 1, 10.0, 10.0).unwrap();
//! assert!((courses[0].heading - 270.0).abs() < 1e-9);
//! ```

pub mod bearing;
pub mod collision;
pub mod cpa;
pub mod error;
pub mod vessel;

// Re-export commonly used types
pub use bearing::bearing_from_dx_dy;
pub use collision::CollisionCourse;
pub use cpa::{CpaResult, RELATIVE_VELOCITY_EPSILON};
pub use error::CpaError;
pub use vessel::Vessel;
