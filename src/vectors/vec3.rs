//! `vec3` submodule implements [`Vec3`], 3-element vector.
//!

use super::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// [`Vec3`] is 3-element vector which is mostly used for points and directions in space,
/// Euler angles and RGB colours.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// First (`x`) component.
    ///
    pub x: f64,
    /// Second (`y`) component.
    ///
    pub y: f64,
    /// Third (`z`) component.
    ///
    pub z: f64,
}
impl_vector!(Vec3, 3, (x, y, z));
impl_vector_operations!(Vec3);
impl Vec3 {
    /// Unit vector pointing along `x` axis.
    ///
    pub fn unit_x() -> Self {
        Self::of(1.0, 0.0, 0.0)
    }
    /// Unit vector pointing along `y` axis.
    ///
    pub fn unit_y() -> Self {
        Self::of(0.0, 1.0, 0.0)
    }
    /// Unit vector pointing along `z` axis.
    ///
    pub fn unit_z() -> Self {
        Self::of(0.0, 0.0, 1.0)
    }
    /// Sets vector to [`Vec3::unit_x`].
    ///
    pub fn set_unit_x(&mut self) -> &mut Self {
        self.set(1.0, 0.0, 0.0)
    }
    /// Sets vector to [`Vec3::unit_y`].
    ///
    pub fn set_unit_y(&mut self) -> &mut Self {
        self.set(0.0, 1.0, 0.0)
    }
    /// Sets vector to [`Vec3::unit_z`].
    ///
    pub fn set_unit_z(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 1.0)
    }

    /// Performs cross product operation on two vectors (right-handed).
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::vectors::Vec3;
    /// assert_eq!(Vec3::unit_x().cross(&Vec3::unit_y()), Vec3::unit_z());
    /// ```
    ///
    pub fn cross(&self, other: &Self) -> Self {
        let mut result: Self = Self::zero();
        self.cross_into(other, &mut result);
        result
    }
    /// Performs cross product operation on two vectors, result is stored in `dest`.
    ///
    /// Every component is computed before `dest` is written, so `dest` may hold a copy of
    /// either operand.
    ///
    pub fn cross_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
        let x: f64 = self.y * other.z - self.z * other.y;
        let y: f64 = self.z * other.x - self.x * other.z;
        let z: f64 = self.x * other.y - self.y * other.x;
        dest.set(x, y, z)
    }

    /// Extends vector with `w` component.
    ///
    pub fn extend(self, w: f64) -> Vec4 {
        Vec4::of(self.x, self.y, self.z, w)
    }
    /// Drops `z` component.
    ///
    pub fn truncate(self) -> Vec2 {
        Vec2::of(self.x, self.y)
    }
}
