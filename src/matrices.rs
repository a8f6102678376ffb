//! `matrices` submodule implements square matrices which can be used to apply transformations
//! on vectors.
//!
//! [`Matrix`] is generic over its size and holds everything that does not depend on it
//! (construction, products, transposition, buffer export, comparisons, operators).
//! Size-specific functionality (determinants, inverses, transformation constructors)
//! is implemented on [`Mat2`], [`Mat3`] and [`Mat4`] aliases.
//!
//! Elements are addressed as `matrix[row][column]`, vectors are columns (`w = M * v`)
//! and [`Matrix::fill_buffer`] exports elements in column-major order.
//!

use crate::floats::{almost_equal, fpad, FloatOperations};
use log::trace;
use serde::{Deserialize, Serialize};
use serde_big_array::Array;
use std::{
    fmt,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`BufferElement`] trait is implemented for scalar types that [`Matrix::fill_buffer`] can write to.
///
pub trait BufferElement: Copy {
    /// Converts matrix element to buffer element.
    ///
    fn from_scalar(value: f64) -> Self;
}
impl BufferElement for f32 {
    /// Narrows element to `f32` (graphics APIs mostly expect single precision uniforms).
    ///
    fn from_scalar(value: f64) -> Self {
        value as f32
    }
}
impl BufferElement for f64 {
    fn from_scalar(value: f64) -> Self {
        value
    }
}

/// [`Matrix`] struct implements linear algebra functions with square matrices.
///
/// It also implements various matrix operations with second operand being either matrix or number.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix<const N: usize> {
    /// Underlying array (row by row).
    ///
    arr: Array<Array<f64, N>, N>,
}
impl<const N: usize> Matrix<N> {
    /// Returns count of matrix rows.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Matrix;
    /// let matrix: Matrix<3> = Matrix::zero();
    /// assert_eq!(matrix.rows(), 3);
    /// ```
    ///
    pub fn rows(&self) -> usize {
        N
    }
    /// Returns count of matrix columns.
    ///
    pub fn columns(&self) -> usize {
        N
    }
    /// Returns element at given position or `None` if position is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// let matrix: Mat2 = Mat2::of(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(matrix.get(0, 1), Some(2.0));
    /// assert_eq!(matrix.get(2, 0), None);
    /// ```
    ///
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.arr.get(row).and_then(|r| r.get(column)).copied()
    }
    /// Returns matrix as an array of rows.
    ///
    pub fn as_array(&self) -> [[f64; N]; N] {
        let mut arr: [[f64; N]; N] = [[0.0; N]; N];
        for (r, item) in self.arr.iter().enumerate() {
            arr[r] = item.0;
        }
        arr
    }

    /// Initializes matrix with zeroes.
    ///
    pub fn zero() -> Self {
        Self {
            arr: Array([Array([0.0; N]); N]),
        }
    }
    /// Initializes identity matrix.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Matrix;
    /// let matrix: Matrix<2> = Matrix::identity();
    /// assert_eq!(matrix.as_array(), [[1.0, 0.0], [0.0, 1.0]]);
    /// ```
    ///
    pub fn identity() -> Self {
        let mut matrix: Self = Self::zero();
        for i in 0..N {
            matrix[i][i] = 1.0;
        }
        matrix
    }
    /// Sets all elements of matrix to zero.
    ///
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }
    /// Turns matrix into identity matrix.
    ///
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }
    /// Copies `other` matrix into this one.
    ///
    pub fn set_matrix(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// Allows to perform custom operations on each matrix element.
    ///
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        let mut matrix: Self = Self::zero();
        for r in 0..N {
            for c in 0..N {
                matrix[r][c] = f(self[r][c]);
            }
        }
        matrix
    }
    /// Combines matrices by applying function on their elements.
    ///
    /// Allows performing operations with 2 matrices.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut matrix: Self = Self::zero();
        for r in 0..N {
            for c in 0..N {
                matrix[r][c] = f(self[r][c], other[r][c]);
            }
        }
        matrix
    }

    /// `self = self * other`
    ///
    /// Since vectors are columns, `other` is applied to vectors before `self`.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// let mut matrix: Mat2 = Mat2::of(1.0, 2.0, 3.0, 4.0);
    /// matrix.multiply(&Mat2::of(0.0, 1.0, 1.0, 0.0));
    /// assert_eq!(matrix, Mat2::of(2.0, 1.0, 4.0, 3.0));
    /// ```
    ///
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        let lhs: Self = *self;
        lhs.multiply_into(other, self)
    }
    /// `dest = self * other`
    ///
    pub fn multiply_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
        for r in 0..N {
            for c in 0..N {
                dest[r][c] = (0..N).fold(0.0, |acc, k| acc + self[r][k] * other[k][c]);
            }
        }
        dest
    }

    /// Transposes matrix in place.
    ///
    /// Interchanges its rows into columns (flips matrix over its diagonal).
    ///
    pub fn transpose(&mut self) -> &mut Self {
        for r in 0..N {
            for c in (r + 1)..N {
                let upper: f64 = self[r][c];
                self[r][c] = self[c][r];
                self[c][r] = upper;
            }
        }
        self
    }
    /// Writes transpose of matrix into `dest`.
    ///
    pub fn transpose_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        for r in 0..N {
            for c in 0..N {
                dest[c][r] = self[r][c];
            }
        }
        dest
    }
    /// Returns transpose of matrix.
    ///
    pub fn transposed(self) -> Self {
        let mut matrix: Self = self;
        matrix.transpose();
        matrix
    }

    /// Writes matrix elements into `buffer` in column-major order and returns amount of written elements.
    ///
    /// If `buffer` is shorter than `N * N`, only its length worth of elements is written.
    /// If it is longer, remaining elements are left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// let matrix: Mat2 = Mat2::of(1.0, 2.0, 3.0, 4.0);
    ///
    /// let mut buffer: [f32; 4] = [0.0; 4];
    /// assert_eq!(matrix.fill_buffer(&mut buffer), 4);
    /// assert_eq!(buffer, [1.0, 3.0, 2.0, 4.0]);
    ///
    /// let mut short: [f64; 3] = [0.0; 3];
    /// assert_eq!(matrix.fill_buffer(&mut short), 3);
    /// assert_eq!(short, [1.0, 3.0, 2.0]);
    /// ```
    ///
    pub fn fill_buffer<T: BufferElement>(&self, buffer: &mut [T]) -> usize {
        let written: usize = buffer.len().min(N * N);
        for (i, slot) in buffer.iter_mut().take(written).enumerate() {
            // `i`-th element in column-major order is in column `i / N` and row `i % N`
            *slot = T::from_scalar(self[i % N][i / N]);
        }
        written
    }

    /// Checks whether matrices are exactly equal (no tolerance).
    ///
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
    /// Checks whether matrices are equal with [`EPSILON`](crate::floats::EPSILON) tolerance.
    ///
    pub fn almost_equals(&self, other: &Self) -> bool {
        (0..N).all(|r| (0..N).all(|c| almost_equal(self[r][c], other[r][c])))
    }

    /// Stores `adjugate / determinant` into `dest`.
    ///
    /// Zero determinant leaves `dest` unchanged.
    ///
    fn write_inverse<'a>(adjugate: &Self, determinant: f64, dest: &'a mut Self) -> &'a mut Self {
        if determinant == 0.0 {
            trace!("{}x{} matrix with zero determinant is left uninverted", N, N);
            return dest;
        }
        *dest = adjugate.map(|elem| elem / determinant);
        dest
    }
}
impl<const N: usize> FloatOperations for Matrix<N> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    /// Fixes such things as -0.0 into 0.0, 0.00000000001 into 0.0 and 0.99999999999 into 1.0.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::matrices::Mat2;
    /// # use gfxmath::floats::FloatOperations;
    /// let matrix: Mat2 = Mat2::rotation(std::f64::consts::FRAC_PI_2).correct_to(0);
    /// assert_eq!(matrix.as_array(), [[0.0, -1.0], [1.0, 0.0]]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = [f64; N];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}
impl<const N: usize> IndexMut<usize> for Matrix<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr[index]
    }
}
impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;

    /// Returns negated matrix.
    ///
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl<const N: usize> Add<Self> for Matrix<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl<const N: usize> Sub<Self> for Matrix<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl<const N: usize> Mul<Self> for Matrix<N> {
    type Output = Self;

    /// Returns matrix product.
    ///
    /// Is equal to `self.multiply_into(&rhs, &mut dest)`.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        let mut matrix: Self = Self::zero();
        self.multiply_into(&rhs, &mut matrix);
        matrix
    }
}
impl<const N: usize> Mul<f64> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl<const N: usize> AddAssign<Self> for Matrix<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<const N: usize> SubAssign<Self> for Matrix<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<const N: usize> MulAssign<Self> for Matrix<N> {
    /// Is equal to `self.multiply(&rhs)`.
    ///
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}
impl<const N: usize> MulAssign<f64> for Matrix<N> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
impl<const N: usize> PartialEq for Matrix<N> {
    /// Checks if matrices are exactly equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        (0..N).all(|r| self[r] == other[r])
    }
}
impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    /// Builds matrix from an array of rows.
    ///
    fn from(arr: [[f64; N]; N]) -> Self {
        let mut array: Array<Array<f64, N>, N> = Array([Array([0.0; N]); N]);
        for r in 0..N {
            array[r] = Array(arr[r]);
        }
        Matrix { arr: array }
    }
}
impl<const N: usize> From<Matrix<N>> for [[f64; N]; N] {
    fn from(matrix: Matrix<N>) -> Self {
        matrix.as_array()
    }
}
impl<const N: usize> fmt::Display for Matrix<N> {
    /// Writes multi-line listing with one matrix row per line.
    ///
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            write!(f, "{}", if r == 0 { "[" } else { "\n " })?;
            for c in 0..N {
                write!(f, " {}", fpad(self[r][c]))?;
            }
        }
        write!(f, " ]")
    }
}

/// [`impl_rotations`] macro implements Euler angle rotations on matrix type.
///
/// Type is required to have `set_rotation_x`, `set_rotation_y`, `set_rotation_z` and
/// `set_rotation_euler` methods.
///
macro_rules! impl_rotations {
    ($matrix:ident, ($(($name:ident, $order:ident, $product:literal),)+)) => {
        impl $matrix {
            /// Initializes rotation matrix around `x` axis.
            ///
            pub fn rotation_x(angle: f64) -> Self {
                let mut matrix: Self = Self::zero();
                matrix.set_rotation_x(angle);
                matrix
            }
            /// Initializes rotation matrix around `y` axis.
            ///
            pub fn rotation_y(angle: f64) -> Self {
                let mut matrix: Self = Self::zero();
                matrix.set_rotation_y(angle);
                matrix
            }
            /// Initializes rotation matrix around `z` axis.
            ///
            pub fn rotation_z(angle: f64) -> Self {
                let mut matrix: Self = Self::zero();
                matrix.set_rotation_z(angle);
                matrix
            }
            /// Initializes rotation matrix around given axis.
            ///
            pub fn axis_rotation(axis: $crate::transforms::Axis, angle: f64) -> Self {
                match axis {
                    $crate::transforms::Axis::X => Self::rotation_x(angle),
                    $crate::transforms::Axis::Y => Self::rotation_y(angle),
                    $crate::transforms::Axis::Z => Self::rotation_z(angle),
                }
            }
            /// Initializes rotation matrix from Euler angles in default (**YZX**) order.
            ///
            /// See [`set_rotation`](Self::set_rotation).
            ///
            pub fn rotation(rx: f64, ry: f64, rz: f64) -> Self {
                let mut matrix: Self = Self::zero();
                matrix.set_rotation(rx, ry, rz);
                matrix
            }
            /// Initializes rotation matrix from Euler angles in given order.
            ///
            pub fn rotation_euler(order: $crate::transforms::EulerOrder, angles: &$crate::vectors::Vec3) -> Self {
                let mut matrix: Self = Self::zero();
                matrix.set_rotation_euler(order, angles);
                matrix
            }

            /// Turns matrix into rotation from Euler angles (in radians).
            ///
            /// Rotations are composed in **YZX** order: `Ry * Rz * Rx`,
            /// so rotation around `x` axis is applied to a vector first.
            /// Other orders are available as `set_rotation_xyz`, `set_rotation_zyx`, ...
            ///
            pub fn set_rotation(&mut self, rx: f64, ry: f64, rz: f64) -> &mut Self {
                self.set_rotation_euler(
                    $crate::transforms::EulerOrder::default(),
                    &$crate::vectors::Vec3::of(rx, ry, rz),
                )
            }
            /// Turns matrix into rotation from Euler angles given as vector (`x`, `y`, `z` angles).
            ///
            /// Order is the same as in [`set_rotation`](Self::set_rotation).
            ///
            pub fn set_rotation_vector(&mut self, angles: &$crate::vectors::Vec3) -> &mut Self {
                self.set_rotation(angles.x, angles.y, angles.z)
            }
            /// Turns matrix into exact inverse of [`set_rotation`](Self::set_rotation) with same angles.
            ///
            pub fn set_inverse_rotation(&mut self, rx: f64, ry: f64, rz: f64) -> &mut Self {
                self.set_inverse_rotation_euler(
                    $crate::transforms::EulerOrder::default(),
                    &$crate::vectors::Vec3::of(rx, ry, rz),
                )
            }
            /// Turns matrix into exact inverse of [`set_rotation_vector`](Self::set_rotation_vector)
            /// with same angles.
            ///
            pub fn set_inverse_rotation_vector(&mut self, angles: &$crate::vectors::Vec3) -> &mut Self {
                self.set_inverse_rotation(angles.x, angles.y, angles.z)
            }
            /// Turns matrix into exact inverse of [`set_rotation_euler`](Self::set_rotation_euler)
            /// with same order and angles.
            ///
            /// Order is reversed and angles are negated.
            ///
            pub fn set_inverse_rotation_euler(
                &mut self,
                order: $crate::transforms::EulerOrder,
                angles: &$crate::vectors::Vec3,
            ) -> &mut Self {
                self.set_rotation_euler(order.reversed(), &(-*angles))
            }

            $(
            #[doc = concat!("Turns matrix into rotation `", $product, "` from Euler angles (in radians).")]
            ///
            pub fn $name(&mut self, rx: f64, ry: f64, rz: f64) -> &mut Self {
                self.set_rotation_euler(
                    $crate::transforms::EulerOrder::$order,
                    &$crate::vectors::Vec3::of(rx, ry, rz),
                )
            }
            )+
        }
    };
}

/// Type alias for 2x2 [`Matrix`] (two-dimensional linear transform).
///
pub type Mat2 = Matrix<2>;
/// Type alias for 3x3 [`Matrix`] (three-dimensional linear transform or two-dimensional affine one).
///
pub type Mat3 = Matrix<3>;
/// Type alias for 4x4 [`Matrix`] (three-dimensional affine transform).
///
pub type Mat4 = Matrix<4>;

mod mat2;
mod mat3;
mod mat4;

#[cfg(test)]
mod tests {
    use super::{Mat2, Mat3, Mat4, Matrix};
    use crate::vectors::{Vec2, Vec3};

    fn sample() -> Mat4 {
        Mat4::of(
            2.0, -1.0, 0.5, 3.0, //
            0.0, 4.0, 1.0, -2.0, //
            1.5, 0.0, -3.0, 1.0, //
            -1.0, 2.0, 0.0, 5.0,
        )
    }

    #[test]
    fn matrix() {
        let m1: Mat2 = Mat2::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m1[0][1], 2.0);
        assert_eq!(m1[1], [3.0, 4.0]);
        assert_eq!(m1.rows(), 2);
        assert_eq!(m1.columns(), 2);
        assert_eq!(m1.get(1, 0), Some(3.0));
        assert_eq!(m1.get(0, 2), None);
        assert_eq!(<[[f64; 2]; 2]>::from(m1), [[1.0, 2.0], [3.0, 4.0]]);

        let m2: Mat2 = Mat2::from([[4.0, 3.0], [2.0, 1.0]]);
        let mut m3: Mat2 = m1;

        assert_eq!((m1 + m2).as_array(), [[5.0; 2]; 2]);
        assert_eq!((m1 - m2).as_array(), [[-3.0, -1.0], [1.0, 3.0]]);
        assert_eq!((m1 * 2.0).as_array(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!((-m1).as_array(), [[-1.0, -2.0], [-3.0, -4.0]]);
        assert_eq!((m1 * m2).as_array(), [[8.0, 5.0], [20.0, 13.0]]);

        m3 += m2;
        assert_eq!(m3.as_array(), [[5.0; 2]; 2]);
        m3 -= m2;
        assert_eq!(m3, m1);
        m3 *= 2.0;
        assert_eq!(m3.as_array(), [[2.0, 4.0], [6.0, 8.0]]);
        m3 *= Mat2::identity();
        assert_eq!(m3.as_array(), [[2.0, 4.0], [6.0, 8.0]]);

        m3[0][0] = 10.0;
        assert_eq!(m3.get(0, 0), Some(10.0));
    }

    #[test]
    fn setters() {
        let mut m: Mat3 = Mat3::zero();
        assert_eq!(m.as_array(), [[0.0; 3]; 3]);
        m.set_identity();
        assert_eq!(m.as_array(), [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        m.set_matrix(&Mat3::of(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(m[2], [7.0, 8.0, 9.0]);
        m.set_zero();
        assert_eq!(m, Mat3::zero());
    }

    #[test]
    fn identity_is_neutral() {
        let m: Mat4 = sample();
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);

        let m: Mat3 = Mat3::of(1.0, -2.0, 3.5, 0.25, 5.0, -6.0, 7.0, 8.0, 0.0);
        let mut product: Mat3 = Mat3::zero();
        assert_eq!(*Mat3::identity().multiply_into(&m, &mut product), m);
        let mut in_place: Mat3 = m;
        assert_eq!(*in_place.multiply(&Mat3::identity()), m);
    }

    #[test]
    fn multiplication_order() {
        let a: Mat2 = Mat2::of(1.0, 2.0, 3.0, 4.0);
        let b: Mat2 = Mat2::of(0.0, 1.0, 1.0, 0.0);
        assert_ne!(a * b, b * a);

        let mut product: Mat2 = a;
        product.multiply(&b);
        assert_eq!(product, a * b);
    }

    #[test]
    fn transposition() {
        let m: Mat4 = sample();
        let mut t: Mat4 = m;
        t.transpose();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(t[r][c], m[c][r]);
            }
        }
        t.transpose();
        assert_eq!(t, m);
        assert_eq!(m.transposed().transposed(), m);

        let mut dest: Mat4 = Mat4::zero();
        assert_eq!(*m.transpose_into(&mut dest), m.transposed());
    }

    #[test]
    fn buffers() {
        let mut buffer: [f32; 9] = [-1.0; 9];
        assert_eq!(Mat3::identity().fill_buffer(&mut buffer), 9);
        assert_eq!(buffer, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let mut buffer: [f64; 9] = [0.0; 9];
        Mat3::translation(&Vec2::of(5.0, 7.0)).fill_buffer(&mut buffer);
        assert_eq!(buffer, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 7.0, 1.0]);

        let mut buffer: Vec<f32> = vec![0.0; 16];
        Mat4::translation(&Vec3::of(1.0, 2.0, 3.0)).fill_buffer(&mut buffer);
        assert_eq!(buffer[12..], [1.0_f32, 2.0, 3.0, 1.0]);

        // buffer that is too long keeps its tail
        let mut long: [f64; 6] = [9.0; 6];
        assert_eq!(Mat2::of(1.0, 2.0, 3.0, 4.0).fill_buffer(&mut long), 4);
        assert_eq!(long, [1.0, 3.0, 2.0, 4.0, 9.0, 9.0]);

        // buffer that is too short is filled as far as it goes
        let mut short: [f32; 5] = [0.0; 5];
        assert_eq!(sample().fill_buffer(&mut short), 5);
        assert_eq!(short, [2.0, 0.0, 1.5, -1.0, -1.0]);

        let mut empty: [f64; 0] = [];
        assert_eq!(sample().fill_buffer(&mut empty), 0);
    }

    #[test]
    fn equality() {
        let a: Mat2 = Mat2::of(0.1 + 0.2, 0.0, 0.0, 1.0);
        let b: Mat2 = Mat2::of(0.3, 0.0, 0.0, 1.0);
        assert!(!a.equals(&b));
        assert!(a.almost_equals(&b));
        assert!(a.equals(&a));
        assert!(!Mat2::identity().almost_equals(&Mat2::zero()));
    }

    #[test]
    fn formatting() {
        assert_eq!(
            Mat2::of(1.0, -2.0, 0.5, 4.0).to_string(),
            "[     1.0000    -2.0000\n      0.5000     4.0000 ]"
        );
        let generic: Matrix<1> = Matrix::identity();
        assert_eq!(generic.to_string(), "[     1.0000 ]");
    }

    #[test]
    fn serialization() {
        let m: Mat4 = sample();
        let bytes: Vec<u8> = serde_cbor::to_vec(&m).expect("Serialization should not fail.");
        let restored: Mat4 =
            serde_cbor::from_slice(&bytes).expect("Deserialization should not fail.");
        assert_eq!(restored, m);

        let v: Vec3 = Vec3::of(1.0, -2.0, 0.5);
        let bytes: Vec<u8> = serde_cbor::to_vec(&v).expect("Serialization should not fail.");
        let restored: Vec3 =
            serde_cbor::from_slice(&bytes).expect("Deserialization should not fail.");
        assert_eq!(restored, v);
    }
}
