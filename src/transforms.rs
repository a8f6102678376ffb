//! `transforms` submodule implements enums that name rotation axes and Euler angle orders,
//! and [`Transform`] enum which builds and combines three-dimensional transformation matrices.
//!

use crate::{matrices::Mat4, vectors::Vec3};
use serde::{Deserialize, Serialize};

/// [`Axis`] enum represents coordinate axes of three-dimensional space.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `x` axis.
    ///
    X,
    /// `y` axis.
    ///
    Y,
    /// `z` axis.
    ///
    Z,
}
impl Axis {
    /// Returns component of `vector` that corresponds to this axis.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::transforms::Axis;
    /// # use gfxmath::vectors::Vec3;
    /// assert_eq!(Axis::Y.select(&Vec3::of(1.0, 2.0, 3.0)), 2.0);
    /// ```
    ///
    pub fn select(self, vector: &Vec3) -> f64 {
        match self {
            Axis::X => vector.x,
            Axis::Y => vector.y,
            Axis::Z => vector.z,
        }
    }
}

/// [`EulerOrder`] enum names the order in which axis rotations are multiplied.
///
/// Name lists rotation matrices from left to right: `Xyz` is `Rx * Ry * Rz`,
/// so when the result is applied to a column vector, `z` rotation happens first.
///
/// Default order is [`EulerOrder::Yzx`], which is the one that
/// [`Mat3::set_rotation`](crate::matrices::Mat3) and [`Mat4::set_rotation`](crate::matrices::Mat4) use.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    /// `Rx * Ry * Rz`
    ///
    Xyz,
    /// `Rx * Rz * Ry`
    ///
    Xzy,
    /// `Ry * Rx * Rz`
    ///
    Yxz,
    /// `Ry * Rz * Rx`
    ///
    #[default]
    Yzx,
    /// `Rz * Rx * Ry`
    ///
    Zxy,
    /// `Rz * Ry * Rx`
    ///
    Zyx,
}
impl EulerOrder {
    /// Returns axes in multiplication order (left to right).
    ///
    pub fn axes(self) -> [Axis; 3] {
        match self {
            EulerOrder::Xyz => [Axis::X, Axis::Y, Axis::Z],
            EulerOrder::Xzy => [Axis::X, Axis::Z, Axis::Y],
            EulerOrder::Yxz => [Axis::Y, Axis::X, Axis::Z],
            EulerOrder::Yzx => [Axis::Y, Axis::Z, Axis::X],
            EulerOrder::Zxy => [Axis::Z, Axis::X, Axis::Y],
            EulerOrder::Zyx => [Axis::Z, Axis::Y, Axis::X],
        }
    }
    /// Returns order with reversed multiplication sequence.
    ///
    /// Rotation in reversed order with negated angles is the inverse of the original rotation.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::transforms::EulerOrder;
    /// assert_eq!(EulerOrder::Xyz.reversed(), EulerOrder::Zyx);
    /// assert_eq!(EulerOrder::Yzx.reversed(), EulerOrder::Xzy);
    /// ```
    ///
    pub fn reversed(self) -> Self {
        match self {
            EulerOrder::Xyz => EulerOrder::Zyx,
            EulerOrder::Xzy => EulerOrder::Yzx,
            EulerOrder::Yxz => EulerOrder::Zxy,
            EulerOrder::Yzx => EulerOrder::Xzy,
            EulerOrder::Zxy => EulerOrder::Yxz,
            EulerOrder::Zyx => EulerOrder::Xyz,
        }
    }
}

/// [`Transform`] struct-like enum represents 3 basic matrix transformations.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vec3,
    },

    /// Rotation operation rotates an object around coordinate axes.
    ///
    Rotation {
        /// Order in which axis rotations are composed.
        ///
        order: EulerOrder,
        /// Rotation angles (in radians) around `x`, `y` and `z` axes.
        ///
        angles: Vec3,
    },

    /// Scaling transform changes the size of an object by expanding or contracting all vertices
    /// along axes by given scalar values.
    ///
    Scaling {
        /// Scaling factors along `x`, `y` and `z` axes.
        ///
        factors: Vec3,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use gfxmath::transforms::Transform;
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::Vec3;
    /// let transform: Transform = Transform::Translation { vector: Vec3::of(2.0, 3.0, 4.0) };
    /// let matrix: Mat4 = transform.matrix();
    /// assert_eq!(matrix.multiply_vector3(&Vec3::of(0.0, 2.0, 0.0)), Vec3::of(2.0, 5.0, 4.0));
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use gfxmath::transforms::{EulerOrder, Transform};
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::Vec3;
    /// # use gfxmath::floats::{FloatOperations, PI_BY_2};
    /// let transform: Transform = Transform::Rotation {
    ///     order: EulerOrder::default(),
    ///     angles: Vec3::of(0.0, 0.0, PI_BY_2),
    /// };
    /// let matrix: Mat4 = transform.matrix().correct_to(0);
    /// assert_eq!(matrix.multiply_vector3(&Vec3::of(0.0, 2.0, 0.0)), Vec3::of(-2.0, 0.0, 0.0));
    /// ```
    ///
    /// ### Scaling
    /// ```rust
    /// # use gfxmath::transforms::Transform;
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::Vec3;
    /// let transform: Transform = Transform::Scaling { factors: Vec3::of(3.0, 2.0, 1.0) };
    /// let matrix: Mat4 = transform.matrix();
    /// assert_eq!(matrix.multiply_vector3(&Vec3::of(2.0, 2.0, 2.0)), Vec3::of(6.0, 4.0, 2.0));
    /// ```
    ///
    pub fn matrix(self) -> Mat4 {
        match self {
            Self::Translation { vector } => Mat4::translation(&vector),
            Self::Rotation { order, angles } => Mat4::rotation_euler(order, &angles),
            Self::Scaling { factors } => Mat4::scale(&factors),
        }
    }

    /// Combines given transforms by multiplying their matrices.
    ///
    /// This function automatically reverses the order, so if you need to combine transforms `A -> B -> C`
    /// just pass them in that order (matrices multiplication will be performed in order `C * B * A`).
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::transforms::{EulerOrder, Transform};
    /// # use gfxmath::floats::{FloatOperations, PI_BY_2};
    /// # use gfxmath::vectors::Vec3;
    /// let rotation: Transform = Transform::Rotation {
    ///     order: EulerOrder::default(),
    ///     angles: Vec3::of(0.0, 0.0, PI_BY_2),
    /// };
    /// let translation: Transform = Transform::Translation { vector: Vec3::of(3.0, 2.0, 0.0) };
    /// let scale: Transform = Transform::Scaling { factors: Vec3::of(2.0, 2.0, 2.0) };
    ///
    /// // rotation -> translation -> scaling
    /// let matrix = Transform::combine([rotation, translation, scale].into_iter()).correct_to(0);
    /// assert_eq!(matrix.multiply_vector3(&Vec3::of(1.0, 0.0, 0.0)), Vec3::of(6.0, 6.0, 0.0));
    /// ```
    ///
    pub fn combine(transforms: impl DoubleEndedIterator<Item = Transform>) -> Mat4 {
        transforms
            .rev()
            .fold(Mat4::identity(), |acc, transform| acc * transform.matrix())
    }
}
