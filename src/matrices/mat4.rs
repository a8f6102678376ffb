//! `mat4` submodule implements functionality specific to [`Mat4`].
//!
//! [`Mat4`] is three-dimensional affine transform: upper-left 3x3 block holds rotation and scale,
//! last column holds translation.
//!

use super::{Mat3, Mat4, Matrix};
use crate::{
    transforms::EulerOrder,
    vectors::{Vec3, Vec4},
};
use std::ops::Mul;

/// 2x2 minors of a 4x4 matrix that are shared by its determinant and adjugate.
///
/// First six are taken from the upper two rows, last six from the lower two rows.
///
fn minors(m: &Mat4) -> [f64; 12] {
    let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
        m.as_array();
    [
        a00 * a11 - a01 * a10,
        a00 * a12 - a02 * a10,
        a00 * a13 - a03 * a10,
        a01 * a12 - a02 * a11,
        a01 * a13 - a03 * a11,
        a02 * a13 - a03 * a12,
        a20 * a31 - a21 * a30,
        a20 * a32 - a22 * a30,
        a20 * a33 - a23 * a30,
        a21 * a32 - a22 * a31,
        a21 * a33 - a23 * a31,
        a22 * a33 - a23 * a32,
    ]
}

impl Mat4 {
    /// Initializes matrix with given elements (arguments go row by row).
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn of(
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m30: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self::from([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }
    /// Sets given elements to matrix (arguments go row by row).
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m30: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> &mut Self {
        *self = Self::of(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        );
        self
    }

    /// Turns matrix into right-handed rotation around `x` axis.
    ///
    pub fn set_rotation_x(&mut self, angle: f64) -> &mut Self {
        self.set_mat3(&Mat3::rotation_x(angle))
    }
    /// Turns matrix into right-handed rotation around `y` axis.
    ///
    pub fn set_rotation_y(&mut self, angle: f64) -> &mut Self {
        self.set_mat3(&Mat3::rotation_y(angle))
    }
    /// Turns matrix into right-handed rotation around `z` axis.
    ///
    pub fn set_rotation_z(&mut self, angle: f64) -> &mut Self {
        self.set_mat3(&Mat3::rotation_z(angle))
    }
    /// Turns matrix into rotation composed from axis rotations in given order.
    ///
    /// `angles` holds rotation angle around `x`, `y` and `z` axes respectively.
    ///
    pub fn set_rotation_euler(&mut self, order: EulerOrder, angles: &Vec3) -> &mut Self {
        self.set_mat3(&Mat3::rotation_euler(order, angles))
    }

    /// Initializes scaling matrix.
    ///
    pub fn scale(factors: &Vec3) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_scale(factors);
        matrix
    }
    /// Turns matrix into scaling by `factors` along axes.
    ///
    pub fn set_scale(&mut self, factors: &Vec3) -> &mut Self {
        self.set_scale_and_translation(factors, &Vec3::zero())
    }
    /// Initializes translation matrix.
    ///
    pub fn translation(vector: &Vec3) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_translation(vector);
        matrix
    }
    /// Turns matrix into translation by `vector`.
    ///
    pub fn set_translation(&mut self, vector: &Vec3) -> &mut Self {
        self.set_scale_and_translation(&Vec3::one(), vector)
    }
    /// Turns matrix into translation by `-vector`.
    ///
    pub fn set_inverse_translation(&mut self, vector: &Vec3) -> &mut Self {
        self.set_translation(&-*vector)
    }
    /// Initializes matrix that scales and then translates points.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::{Vec3, Vec4};
    /// let matrix: Mat4 = Mat4::scale_and_translation(&Vec3::of(2.0, 2.0, 2.0), &Vec3::of(1.0, 0.0, 0.0));
    /// assert_eq!(matrix * Vec4::one(), Vec4::of(3.0, 2.0, 2.0, 1.0));
    /// ```
    ///
    pub fn scale_and_translation(factors: &Vec3, vector: &Vec3) -> Self {
        let mut matrix: Self = Self::zero();
        matrix.set_scale_and_translation(factors, vector);
        matrix
    }
    /// Turns matrix into scaling by `factors` followed by translation by `vector`.
    ///
    pub fn set_scale_and_translation(&mut self, factors: &Vec3, vector: &Vec3) -> &mut Self {
        self.set(
            factors.x, 0.0, 0.0, vector.x, //
            0.0, factors.y, 0.0, vector.y, //
            0.0, 0.0, factors.z, vector.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Turns matrix into identity with `matrix` in its upper-left corner.
    ///
    pub fn set_mat3(&mut self, matrix: &Mat3) -> &mut Self {
        self.set_identity();
        for r in 0..3 {
            self[r][..3].copy_from_slice(&matrix[r]);
        }
        self
    }
    /// Returns upper-left 3x3 block of the matrix.
    ///
    pub fn upper_left(&self) -> Mat3 {
        let mut matrix: Mat3 = Mat3::zero();
        for r in 0..3 {
            matrix[r].copy_from_slice(&self[r][..3]);
        }
        matrix
    }
    /// `self = self * M`, where `M` is `matrix` extended to 4x4 with identity.
    ///
    /// Only the first three columns change, so translation part of an affine matrix is kept.
    ///
    pub fn multiply_mat3(&mut self, matrix: &Mat3) -> &mut Self {
        for r in 0..4 {
            let row: [f64; 3] = [self[r][0], self[r][1], self[r][2]];
            for c in 0..3 {
                self[r][c] = row[0] * matrix[0][c] + row[1] * matrix[1][c] + row[2] * matrix[2][c];
            }
        }
        self
    }

    /// Returns determinant of the matrix.
    ///
    /// Determinant is expanded over products of complementary 2x2 minors of the upper and lower row pairs.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::Vec3;
    /// assert_eq!(Mat4::scale(&Vec3::of(2.0, 3.0, 4.0)).determinant(), 24.0);
    /// ```
    ///
    pub fn determinant(&self) -> f64 {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = minors(self);
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
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
    /// Matrices that are close to singular produce large (but finite) elements.
    ///
    pub fn inverse_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.as_array();
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = minors(self);
        let determinant: f64 =
            b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;

        let adjugate: Self = Self::of(
            a11 * b11 - a12 * b10 + a13 * b09,
            a02 * b10 - a01 * b11 - a03 * b09,
            a31 * b05 - a32 * b04 + a33 * b03,
            a22 * b04 - a21 * b05 - a23 * b03,
            a12 * b08 - a10 * b11 - a13 * b07,
            a00 * b11 - a02 * b08 + a03 * b07,
            a32 * b02 - a30 * b05 - a33 * b01,
            a20 * b05 - a22 * b02 + a23 * b01,
            a10 * b10 - a11 * b08 + a13 * b06,
            a01 * b08 - a00 * b10 - a03 * b06,
            a30 * b04 - a31 * b02 + a33 * b00,
            a21 * b02 - a20 * b04 - a23 * b00,
            a11 * b07 - a10 * b09 - a12 * b06,
            a00 * b09 - a01 * b07 + a02 * b06,
            a31 * b01 - a30 * b03 - a32 * b00,
            a20 * b03 - a21 * b01 + a22 * b00,
        );
        Matrix::write_inverse(&adjugate, determinant, dest)
    }

    /// Returns `self * vector`.
    ///
    pub fn multiply_vector(&self, vector: &Vec4) -> Vec4 {
        let mut result: Vec4 = Vec4::zero();
        self.multiply_vector_into(vector, &mut result);
        result
    }
    /// Writes `self * vector` into `dest`.
    ///
    pub fn multiply_vector_into<'a>(&self, vector: &Vec4, dest: &'a mut Vec4) -> &'a mut Vec4 {
        let row = |r: usize| {
            self[r][0] * vector.x + self[r][1] * vector.y + self[r][2] * vector.z + self[r][3] * vector.w
        };
        dest.set(row(0), row(1), row(2), row(3))
    }
    /// Transforms point (vector is extended with `1.0`, fourth component of the result is dropped).
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat4;
    /// # use gfxmath::vectors::Vec3;
    /// let matrix: Mat4 = Mat4::translation(&Vec3::of(1.0, 2.0, 3.0));
    /// assert_eq!(matrix.multiply_vector3(&Vec3::one()), Vec3::of(2.0, 3.0, 4.0));
    /// ```
    ///
    pub fn multiply_vector3(&self, vector: &Vec3) -> Vec3 {
        let mut result: Vec3 = Vec3::zero();
        self.multiply_vector3_into(vector, &mut result);
        result
    }
    /// Transforms point, result is stored in `dest`.
    ///
    pub fn multiply_vector3_into<'a>(&self, vector: &Vec3, dest: &'a mut Vec3) -> &'a mut Vec3 {
        let row = |r: usize| {
            self[r][0] * vector.x + self[r][1] * vector.y + self[r][2] * vector.z + self[r][3]
        };
        dest.set(row(0), row(1), row(2))
    }
}
impl_rotations!(
    Mat4,
    (
        (set_rotation_xyz, Xyz, "Rx * Ry * Rz"),
        (set_rotation_xzy, Xzy, "Rx * Rz * Ry"),
        (set_rotation_yxz, Yxz, "Ry * Rx * Rz"),
        (set_rotation_yzx, Yzx, "Ry * Rz * Rx"),
        (set_rotation_zxy, Zxy, "Rz * Rx * Ry"),
        (set_rotation_zyx, Zyx, "Rz * Ry * Rx"),
    )
);
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        self.multiply_vector(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Mat4;
    use crate::{
        floats::PI_BY_2,
        matrices::Mat3,
        transforms::EulerOrder,
        vectors::{Vec3, Vec4},
    };

    fn general() -> Mat4 {
        Mat4::of(
            2.0, -1.0, 0.5, 3.0, //
            0.0, 4.0, 1.0, -2.0, //
            1.5, 0.0, -3.0, 1.0, //
            -1.0, 2.0, 0.0, 5.0,
        )
    }

    #[test]
    fn rotations() {
        let [rx, ry, rz] = [0.9, -0.4, 1.7];
        let mut m: Mat4 = Mat4::zero();

        m.set_rotation_x(rx);
        assert_eq!(m.upper_left(), Mat3::rotation_x(rx));
        assert_eq!([m[3], [m[0][3], m[1][3], m[2][3], m[3][3]]], [[0.0, 0.0, 0.0, 1.0]; 2]);

        assert_eq!(Mat4::rotation_y(ry).upper_left(), Mat3::rotation_y(ry));
        assert_eq!(Mat4::rotation_z(rz).upper_left(), Mat3::rotation_z(rz));

        let (x, y, z) = (Mat4::rotation_x(rx), Mat4::rotation_y(ry), Mat4::rotation_z(rz));
        assert!(m.set_rotation_xyz(rx, ry, rz).almost_equals(&(x * y * z)));
        assert!(m.set_rotation_xzy(rx, ry, rz).almost_equals(&(x * z * y)));
        assert!(m.set_rotation_yxz(rx, ry, rz).almost_equals(&(y * x * z)));
        assert!(m.set_rotation_yzx(rx, ry, rz).almost_equals(&(y * z * x)));
        assert!(m.set_rotation_zxy(rx, ry, rz).almost_equals(&(z * x * y)));
        assert!(m.set_rotation_zyx(rx, ry, rz).almost_equals(&(z * y * x)));
        assert!(m.set_rotation(rx, ry, rz).almost_equals(&(y * z * x)));
        assert_eq!(
            *m.set_rotation_vector(&Vec3::of(rx, ry, rz)),
            Mat4::rotation(rx, ry, rz)
        );

        let mut inverse: Mat4 = Mat4::zero();
        inverse.set_inverse_rotation(rx, ry, rz);
        assert!((inverse * Mat4::rotation(rx, ry, rz)).almost_equals(&Mat4::identity()));
        inverse.set_inverse_rotation_vector(&Vec3::of(rx, ry, rz));
        assert!((Mat4::rotation(rx, ry, rz) * inverse).almost_equals(&Mat4::identity()));
        inverse.set_inverse_rotation_euler(EulerOrder::Xzy, &Vec3::of(rx, ry, rz));
        assert!((inverse * (x * z * y)).almost_equals(&Mat4::identity()));
    }

    #[test]
    fn rotating_points() {
        let m: Mat4 = Mat4::rotation_z(PI_BY_2);
        assert!(m.multiply_vector3(&Vec3::unit_x()).almost_equals(&Vec3::unit_y()));
        let m: Mat4 = Mat4::rotation_x(PI_BY_2);
        assert!((m * Vec4::of(0.0, 1.0, 0.0, 1.0)).almost_equals(&Vec4::of(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn affine() {
        let m: Mat4 = Mat4::scale_and_translation(&Vec3::of(2.0, 2.0, 2.0), &Vec3::of(1.0, 0.0, 0.0));
        assert_eq!(m * Vec4::of(1.0, 1.0, 1.0, 1.0), Vec4::of(3.0, 2.0, 2.0, 1.0));
        assert_eq!(m.multiply_vector3(&Vec3::of(1.0, 1.0, 1.0)), Vec3::of(3.0, 2.0, 2.0));
        assert_eq!(
            m,
            Mat4::translation(&Vec3::of(1.0, 0.0, 0.0)) * Mat4::scale(&Vec3::of(2.0, 2.0, 2.0))
        );

        let mut dest: Vec3 = Vec3::zero();
        Mat4::scale(&Vec3::of(1.0, 2.0, 3.0)).multiply_vector3_into(&Vec3::one(), &mut dest);
        assert_eq!(dest, Vec3::of(1.0, 2.0, 3.0));

        let translation: Vec3 = Vec3::of(-4.0, 0.5, 9.0);
        let mut inverse: Mat4 = Mat4::zero();
        inverse.set_inverse_translation(&translation);
        assert_eq!(inverse * Mat4::translation(&translation), Mat4::identity());

        let mut dest: Vec4 = Vec4::zero();
        Mat4::translation(&translation).multiply_vector_into(&Vec4::unit_w(), &mut dest);
        assert_eq!(dest, translation.extend(1.0));
    }

    #[test]
    fn blocks() {
        let block: Mat3 = Mat3::of(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mut m: Mat4 = Mat4::zero();
        m.set_mat3(&block);
        assert_eq!(
            m,
            Mat4::of(
                1.0, 2.0, 3.0, 0.0, //
                4.0, 5.0, 6.0, 0.0, //
                7.0, 8.0, 9.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            )
        );
        assert_eq!(m.upper_left(), block);

        let mut product: Mat4 = general();
        product.multiply_mat3(&block);
        assert_eq!(product, general() * m);
        for r in 0..4 {
            assert_eq!(product[r][3], general()[r][3]);
        }
    }

    #[test]
    fn determinants() {
        assert_eq!(Mat4::identity().determinant(), 1.0);
        assert_eq!(Mat4::zero().determinant(), 0.0);
        assert_eq!(general().determinant(), -207.5);
        assert_eq!(general().transposed().determinant(), general().determinant());

        let mut with_block: Mat4 = Mat4::zero();
        let block: Mat3 = Mat3::of(3.0, 2.0, 2.0, 1.0, 2.0, 2.0, 1.0, 3.0, 2.0);
        with_block.set_mat3(&block);
        assert_eq!(with_block.determinant(), block.determinant());
    }

    #[test]
    fn inversion() {
        let m: Mat4 = general();
        let mut inverse: Mat4 = m;
        inverse.inverse();
        assert!((m * inverse).almost_equals(&Mat4::identity()));
        assert!((inverse * m).almost_equals(&Mat4::identity()));

        let affine: Mat4 = Mat4::rotation(0.3, 0.2, 0.1)
            * Mat4::scale_and_translation(&Vec3::of(2.0, 0.5, 4.0), &Vec3::of(1.0, -2.0, 3.0));
        let mut dest: Mat4 = Mat4::zero();
        affine.inverse_into(&mut dest);
        assert!((affine * dest).almost_equals(&Mat4::identity()));
        let point: Vec3 = Vec3::of(7.0, -1.0, 0.25);
        assert!(dest
            .multiply_vector3(&affine.multiply_vector3(&point))
            .almost_equals(&point));

        assert_eq!(
            *Mat4::scale(&Vec3::of(2.0, 4.0, 8.0)).inverse_into(&mut dest),
            Mat4::scale(&Vec3::of(0.5, 0.25, 0.125))
        );
    }

    #[test]
    fn singular_inversion() {
        let sentinel: Mat4 = general();
        let mut dest: Mat4 = sentinel;
        Mat4::zero().inverse_into(&mut dest);
        assert_eq!(dest, sentinel);

        // last row duplicates first one
        let singular: Mat4 = Mat4::of(
            1.0, 2.0, 3.0, 4.0, //
            0.0, 1.0, 0.0, 2.0, //
            5.0, 0.0, 1.0, 1.0, //
            1.0, 2.0, 3.0, 4.0,
        );
        assert_eq!(singular.determinant(), 0.0);
        singular.inverse_into(&mut dest);
        assert_eq!(dest, sentinel);

        let mut in_place: Mat4 = singular;
        in_place.inverse();
        assert_eq!(in_place, singular);
    }
}
