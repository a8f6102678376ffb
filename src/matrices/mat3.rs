//! `mat3` submodule implements functionality specific to [`Mat3`].
//!
//! [`Mat3`] is used both as a three-dimensional rotation/scaling matrix and as
//! a two-dimensional affine transform (scale, rotation and translation of [`Vec2`] points
//! in homogeneous coordinates).
//!

use super::{Mat2, Mat3, Matrix};
use crate::{
    transforms::EulerOrder,
    vectors::{Vec2, Vec3},
};
use std::ops::Mul;

impl Mat3 {
    /// Initializes matrix with given elements (arguments go row by row).
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn of(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self::from([[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]])
    }
    /// Sets given elements to matrix (arguments go row by row).
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> &mut Self {
        *self = Self::of(m00, m01, m02, m10, m11, m12, m20, m21, m22);
        self
    }

    /// Turns matrix into right-handed rotation around `x` axis.
    ///
    pub fn set_rotation_x(&mut self, angle: f64) -> &mut Self {
        let (sin, cos): (f64, f64) = angle.sin_cos();
        self.set(
            1.0, 0.0, 0.0, //
            0.0, cos, -sin, //
            0.0, sin, cos,
        )
    }
    /// Turns matrix into right-handed rotation around `y` axis.
    ///
    pub fn set_rotation_y(&mut self, angle: f64) -> &mut Self {
        let (sin, cos): (f64, f64) = angle.sin_cos();
        self.set(
            cos, 0.0, sin, //
            0.0, 1.0, 0.0, //
            -sin, 0.0, cos,
        )
    }
    /// Turns matrix into right-handed rotation around `z` axis.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat3;
    /// # use gfxmath::vectors::Vec3;
    /// let mut matrix: Mat3 = Mat3::zero();
    /// matrix.set_rotation_z(std::f64::consts::FRAC_PI_2);
    /// assert!((matrix * Vec3::unit_x()).almost_equals(&Vec3::unit_y()));
    /// ```
    ///
    pub fn set_rotation_z(&mut self, angle: f64) -> &mut Self {
        let (sin, cos): (f64, f64) = angle.sin_cos();
        self.set(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        )
    }
    /// Turns matrix into rotation composed from axis rotations in given order.
    ///
    /// `angles` holds rotation angle around `x`, `y` and `z` axes respectively.
    ///
    pub fn set_rotation_euler(&mut self, order: EulerOrder, angles: &Vec3) -> &mut Self {
        let [first, second, third] = order.axes();
        *self = Self::axis_rotation(first, first.select(angles));
        self.multiply(&Self::axis_rotation(second, second.select(angles)));
        self.multiply(&Self::axis_rotation(third, third.select(angles)))
    }

    /// Initializes two-dimensional scaling matrix.
    ///
    pub fn scale(factors: &Vec2) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_scale(factors);
        matrix
    }
    /// Turns matrix into two-dimensional scaling by `factors`.
    ///
    pub fn set_scale(&mut self, factors: &Vec2) -> &mut Self {
        self.set_scale_and_translation(factors, &Vec2::zero())
    }
    /// Initializes two-dimensional translation matrix.
    ///
    pub fn translation(vector: &Vec2) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_translation(vector);
        matrix
    }
    /// Turns matrix into two-dimensional translation by `vector`.
    ///
    pub fn set_translation(&mut self, vector: &Vec2) -> &mut Self {
        self.set_scale_and_translation(&Vec2::one(), vector)
    }
    /// Turns matrix into two-dimensional translation by `-vector`.
    ///
    pub fn set_inverse_translation(&mut self, vector: &Vec2) -> &mut Self {
        self.set_translation(&-*vector)
    }
    /// Initializes matrix that scales and then translates two-dimensional points.
    ///
    pub fn scale_and_translation(factors: &Vec2, vector: &Vec2) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_scale_and_translation(factors, vector);
        matrix
    }
    /// Turns matrix into scaling by `factors` followed by translation by `vector`.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat3;
    /// # use gfxmath::vectors::Vec2;
    /// let mut matrix: Mat3 = Mat3::zero();
    /// matrix.set_scale_and_translation(&Vec2::of(2.0, 3.0), &Vec2::of(1.0, -1.0));
    /// assert_eq!(matrix.multiply_vector2(&Vec2::one()), Vec2::of(3.0, 2.0));
    /// ```
    ///
    pub fn set_scale_and_translation(&mut self, factors: &Vec2, vector: &Vec2) -> &mut Self {
        self.set(
            factors.x, 0.0, vector.x, //
            0.0, factors.y, vector.y, //
            0.0, 0.0, 1.0,
        )
    }

    /// Turns matrix into identity with `matrix` in its upper-left corner.
    ///
    pub fn set_mat2(&mut self, matrix: &Mat2) -> &mut Self {
        self.set(
            matrix[0][0], matrix[0][1], 0.0, //
            matrix[1][0], matrix[1][1], 0.0, //
            0.0, 0.0, 1.0,
        )
    }
    /// Returns upper-left 2x2 block of the matrix.
    ///
    pub fn upper_left(&self) -> Mat2 {
        Mat2::of(self[0][0], self[0][1], self[1][0], self[1][1])
    }
    /// `self = self * M`, where `M` is `matrix` extended to 3x3 with identity.
    ///
    /// Only the first two columns change, so translation part of an affine matrix is kept.
    ///
    pub fn multiply_mat2(&mut self, matrix: &Mat2) -> &mut Self {
        for r in 0..3 {
            let (a, b): (f64, f64) = (self[r][0], self[r][1]);
            self[r][0] = a * matrix[0][0] + b * matrix[1][0];
            self[r][1] = a * matrix[0][1] + b * matrix[1][1];
        }
        self
    }

    /// Returns determinant of the matrix.
    ///
    /// # Examples
    /// ```rust
    /// # use gfxmath::matrices::Mat3;
    /// let matrix: Mat3 = Mat3::of(
    ///     -3.0, 2.0, 2.0,
    ///     43.0, 1.0, -12.0,
    ///     5.0, 0.0, 5.0,
    /// );
    /// assert_eq!(matrix.determinant(), -575.0);
    /// ```
    ///
    /// ```rust
    /// # use gfxmath::matrices::Mat3;
    /// let matrix: Mat3 = Mat3::of(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// assert_eq!(matrix.determinant(), 0.0);
    /// ```
    ///
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.as_array();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
    /// Inverts matrix in place.
    ///
    /// Matrix with zero determinant is left unchanged.
    ///
    pub fn inverse(&mut self) -> &mut Self {
        let matrix: Self = *self;
        matrix.inverse_into(self)
    }
    /// Writes inverse of the matrix into `dest`.
    ///
    /// If determinant is exactly zero, `dest` is left unchanged.
    ///
    pub fn inverse_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.as_array();
        let adjugate: Self = Self::of(
            e * i - f * h,
            c * h - b * i,
            b * f - c * e,
            f * g - d * i,
            a * i - c * g,
            c * d - a * f,
            d * h - e * g,
            b * g - a * h,
            a * e - b * d,
        );
        Matrix::write_inverse(&adjugate, self.determinant(), dest)
    }

    /// Returns `self * vector`.
    ///
    pub fn multiply_vector(&self, vector: &Vec3) -> Vec3 {
        let mut result: Vec3 = Vec3::zero();
        self.multiply_vector_into(vector, &mut result);
        result
    }
    /// Writes `self * vector` into `dest`.
    ///
    pub fn multiply_vector_into<'a>(&self, vector: &Vec3, dest: &'a mut Vec3) -> &'a mut Vec3 {
        let row = |r: usize| self[r][0] * vector.x + self[r][1] * vector.y + self[r][2] * vector.z;
        dest.set(row(0), row(1), row(2))
    }
    /// Transforms two-dimensional point (vector is extended with `1.0`, third component of
    /// the result is dropped).
    ///
    pub fn multiply_vector2(&self, vector: &Vec2) -> Vec2 {
        let mut result: Vec2 = Vec2::zero();
        self.multiply_vector2_into(vector, &mut result);
        result
    }
    /// Transforms two-dimensional point, result is stored in `dest`.
    ///
    pub fn multiply_vector2_into<'a>(&self, vector: &Vec2, dest: &'a mut Vec2) -> &'a mut Vec2 {
        let row = |r: usize| self[r][0] * vector.x + self[r][1] * vector.y + self[r][2];
        dest.set(row(0), row(1))
    }
}
impl_rotations!(
    Mat3,
    (
        (set_rotation_xyz, Xyz, "Rx * Ry * Rz"),
        (set_rotation_xzy, Xzy, "Rx * Rz * Ry"),
        (set_rotation_yxz, Yxz, "Ry * Rx * Rz"),
        (set_rotation_yzx, Yzx, "Ry * Rz * Rx"),
        (set_rotation_zxy, Zxy, "Rz * Rx * Ry"),
        (set_rotation_zyx, Zyx, "Rz * Ry * Rx"),
    )
);
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.multiply_vector(&rhs)
    }
}
