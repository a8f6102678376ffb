//! `mat2` submodule implements functionality specific to [`Mat2`].
//!

use super::{Mat2, Matrix};
use crate::vectors::Vec2;
use std::ops::Mul;

impl Mat2 {
    /// Initializes matrix with given elements (arguments go row by row).
    ///
    pub fn of(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self::from([[m00, m01], [m10, m11]])
    }
    /// Sets given elements to matrix (arguments go row by row).
    ///
    pub fn set(&mut self, m00: f64, m01: f64, m10: f64, m11: f64) -> &mut Self {
        *self = Self::of(m00, m01, m10, m11);
        self
    }

    /// Initializes counterclockwise rotation matrix.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// # use gfxmath::vectors::Vec2;
    /// let rotated: Vec2 = Mat2::rotation(std::f64::consts::FRAC_PI_2) * Vec2::unit_x();
    /// assert!(rotated.almost_equals(&Vec2::unit_y()));
    /// ```
    ///
    pub fn rotation(angle: f64) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_rotation(angle);
        matrix
    }
    /// Turns matrix into counterclockwise rotation by `angle` (in radians).
    ///
    pub fn set_rotation(&mut self, angle: f64) -> &mut Self {
        let (sin, cos): (f64, f64) = angle.sin_cos();
        self.set(cos, -sin, sin, cos)
    }
    /// Turns matrix into inverse of [`set_rotation`](Self::set_rotation) (clockwise rotation).
    ///
    pub fn set_inverse_rotation(&mut self, angle: f64) -> &mut Self {
        self.set_rotation(-angle)
    }
    /// Initializes scaling matrix.
    ///
    pub fn scale(factors: &Vec2) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_scale(factors);
        matrix
    }
    /// Turns matrix into scaling by `factors` along axes.
    ///
    pub fn set_scale(&mut self, factors: &Vec2) -> &mut Self {
        self.set(factors.x, 0.0, 0.0, factors.y)
    }

    /// Returns determinant of the matrix.
    ///
    pub fn determinant(&self) -> f64 {
        self[0][0] * self[1][1] - self[0][1] * self[1][0]
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
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// let mut dest: Mat2 = Mat2::identity();
    /// Mat2::of(4.0, 2.0, 2.0, 2.0).inverse_into(&mut dest);
    /// assert_eq!(dest, Mat2::of(0.5, -0.5, -0.5, 1.0));
    ///
    /// Mat2::of(1.0, 2.0, 2.0, 4.0).inverse_into(&mut dest);
    /// assert_eq!(dest, Mat2::of(0.5, -0.5, -0.5, 1.0));
    /// ```
    ///
    pub fn inverse_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        let adjugate: Self = Self::of(self[1][1], -self[0][1], -self[1][0], self[0][0]);
        Matrix::write_inverse(&adjugate, self.determinant(), dest)
    }

    /// Returns `self * vector`.
    ///
    pub fn multiply_vector(&self, vector: &Vec2) -> Vec2 {
        let mut result: Vec2 = Vec2::zero();
        self.multiply_vector_into(vector, &mut result);
        result
    }
    /// Writes `self * vector` into `dest`.
    ///
    pub fn multiply_vector_into<'a>(&self, vector: &Vec2, dest: &'a mut Vec2) -> &'a mut Vec2 {
        dest.set(
            self[0][0] * vector.x + self[0][1] * vector.y,
            self[1][0] * vector.x + self[1][1] * vector.y,
        )
    }
}
impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        self.multiply_vector(&rhs)
    }
}
