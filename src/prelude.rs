//! Prelude module: `prelude` re-exports all `gfxmath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use gfxmath::prelude::*;
//!
//! let matrix: Mat3 = Mat3::rotation_z(PI_BY_2);
//! assert!((matrix * Vec3::unit_x()).almost_equals(&Vec3::unit_y()));
//! ```
//!

// re-exports
pub use crate::floats::*;
pub use crate::matrices::*;
pub use crate::transforms::*;
pub use crate::vectors::*;
