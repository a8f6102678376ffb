//! `vec2` submodule implements [`Vec2`], 2-element vector.
//!

use super::Vec3;
use serde::{Deserialize, Serialize};

/// [`Vec2`] is 2-element vector which is mostly used for points and directions in the plane
/// and for texture coordinates.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// First (`x`) component.
    ///
    pub x: f64,
    /// Second (`y`) component.
    ///
    pub y: f64,
}
impl_vector!(Vec2, 2, (x, y));
impl_vector_operations!(Vec2);
impl Vec2 {
    /// Unit vector pointing along `x` axis.
    ///
    pub fn unit_x() -> Self {
        Self::of(1.0, 0.0)
    }
    /// Unit vector pointing along `y` axis.
    ///
    pub fn unit_y() -> Self {
        Self::of(0.0, 1.0)
    }
    /// Sets vector to [`Vec2::unit_x`].
    ///
    pub fn set_unit_x(&mut self) -> &mut Self {
        self.set(1.0, 0.0)
    }
    /// Sets vector to [`Vec2::unit_y`].
    ///
    pub fn set_unit_y(&mut self) -> &mut Self {
        self.set(0.0, 1.0)
    }

    /// Returns vector that is perpendicular to this one (rotated clockwise by `PI / 2`).
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::vectors::Vec2;
    /// let v = Vec2::of(1.0, 2.0);
    /// assert_eq!(v.perpendicular(), Vec2::of(2.0, -1.0));
    /// assert_eq!(v.dot(&v.perpendicular()), 0.0);
    /// ```
    ///
    pub fn perpendicular(&self) -> Self {
        Self::of(self.y, -self.x)
    }
    /// Writes vector that is perpendicular to this one into `dest`.
    ///
    pub fn perpendicular_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        dest.set(self.y, -self.x)
    }

    /// Extends vector with `z` component.
    ///
    pub fn extend(self, z: f64) -> Vec3 {
        Vec3::of(self.x, self.y, z)
    }
}
