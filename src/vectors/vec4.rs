//! `vec4` submodule implements [`Vec4`], 4-element vector.
//!

use super::Vec3;
use serde::{Deserialize, Serialize};

/// [`Vec4`] is 4-element vector which is mostly used for homogeneous coordinates and RGBA colours.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4 {
    /// First (`x`) component.
    ///
    pub x: f64,
    /// Second (`y`) component.
    ///
    pub y: f64,
    /// Third (`z`) component.
    ///
    pub z: f64,
    /// Fourth (`w`) component.
    ///
    pub w: f64,
}
impl_vector!(Vec4, 4, (x, y, z, w));
impl_vector_operations!(Vec4);
impl Vec4 {
    /// Unit vector pointing along `x` axis.
    ///
    pub fn unit_x() -> Self {
        Self::of(1.0, 0.0, 0.0, 0.0)
    }
    /// Unit vector pointing along `y` axis.
    ///
    pub fn unit_y() -> Self {
        Self::of(0.0, 1.0, 0.0, 0.0)
    }
    /// Unit vector pointing along `z` axis.
    ///
    pub fn unit_z() -> Self {
        Self::of(0.0, 0.0, 1.0, 0.0)
    }
    /// Unit vector pointing along `w` axis.
    ///
    pub fn unit_w() -> Self {
        Self::of(0.0, 0.0, 0.0, 1.0)
    }
    /// Sets vector to [`Vec4::unit_x`].
    ///
    pub fn set_unit_x(&mut self) -> &mut Self {
        self.set(1.0, 0.0, 0.0, 0.0)
    }
    /// Sets vector to [`Vec4::unit_y`].
    ///
    pub fn set_unit_y(&mut self) -> &mut Self {
        self.set(0.0, 1.0, 0.0, 0.0)
    }
    /// Sets vector to [`Vec4::unit_z`].
    ///
    pub fn set_unit_z(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 1.0, 0.0)
    }
    /// Sets vector to [`Vec4::unit_w`].
    ///
    pub fn set_unit_w(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0, 1.0)
    }

    /// Drops `w` component.
    ///
    /// No perspective division happens.
    ///
    pub fn truncate(self) -> Vec3 {
        Vec3::of(self.x, self.y, self.z)
    }
}
