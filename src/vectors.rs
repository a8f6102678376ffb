//! `vectors` submodule implements 2-, 3- and 4-element vectors which can be used to represent
//! points, directions, homogeneous coordinates or colours.
//!
//! # Conventions
//! Every operator comes in two flavours:
//! * in-place one (`add_vector`, `normalize`, ...) mutates the receiver and returns it,
//!   so calls can be chained;
//! * `*_into` one (`add_vector_into`, `normalize_into`, ...) leaves the receiver intact, writes
//!   result into caller-supplied destination and returns that destination.
//!
//! Value-style code can also use `std::ops` operators (`a + b`, `v * 2.0`, `-v`).
//!
//! Equality (`==` and `equals`) is exact, [`almost_equals`](Vec3::almost_equals) is tolerant.
//!
//! # Example
//! ```rust
//! # use gfxmath::vectors::Vec3;
//! let mut v: Vec3 = Vec3::of(3.0, 0.0, 4.0);
//! v.mul_scalar(2.0).normalize();
//! assert_eq!(v, Vec3::of(0.6, 0.0, 0.8));
//!
//! let mut sum: Vec3 = Vec3::zero();
//! Vec3::one().add_vector_into(&Vec3::unit_z(), &mut sum);
//! assert_eq!(sum, Vec3::of(1.0, 1.0, 2.0));
//! ```
//!

// Macros are used because vectors share all operations and differ only in the set of fields.
// Field list is passed to macros explicitly so that every operation unrolls into plain field
// arithmetic without loops or temporary arrays.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// It takes name of the struct, amount of its fields and the fields themselves.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr, ($($field:ident),+)) => {
        impl $struct {
            /// Initializes vector with given components.
            ///
            pub fn of($($field: f64),+) -> Self {
                Self { $($field),+ }
            }
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Returns elements of vector.
            ///
            pub fn elements(&self) -> [f64; $size] {
                [$(self.$field),+]
            }
            /// Sets given values to elements of vector.
            ///
            pub fn set(&mut self, $($field: f64),+) -> &mut Self {
                $(self.$field = $field;)+
                self
            }
            /// Copies `other` vector into this one.
            ///
            pub fn set_vector(&mut self, other: &Self) -> &mut Self {
                *self = *other;
                self
            }
            /// Sets all elements of vector to zero.
            ///
            pub fn set_zero(&mut self) -> &mut Self {
                *self = Self::zero();
                self
            }
            /// Sets all elements of vector to one.
            ///
            pub fn set_one(&mut self) -> &mut Self {
                *self = Self::one();
                self
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            /// Allows to perform custom operations on each vector element.
            ///
            pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
            /// Combines vectors by applying function on their elements.
            ///
            /// Allows performing operations with 2 vectors.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            /// `self = self + other`
            ///
            pub fn add_vector(&mut self, other: &Self) -> &mut Self {
                $(self.$field += other.$field;)+
                self
            }
            /// `dest = self + other`
            ///
            pub fn add_vector_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field + other.$field;)+
                dest
            }
            /// `self = self - other`
            ///
            pub fn sub_vector(&mut self, other: &Self) -> &mut Self {
                $(self.$field -= other.$field;)+
                self
            }
            /// `dest = self - other`
            ///
            pub fn sub_vector_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field - other.$field;)+
                dest
            }
            /// `self = self + other * s`
            ///
            pub fn add_scaled(&mut self, other: &Self, s: f64) -> &mut Self {
                $(self.$field += other.$field * s;)+
                self
            }
            /// `dest = self + other * s`
            ///
            pub fn add_scaled_into<'a>(&self, other: &Self, s: f64, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field + other.$field * s;)+
                dest
            }
            /// Multiplies vectors element-wise, result is stored in `self`.
            ///
            pub fn mul_vector(&mut self, other: &Self) -> &mut Self {
                $(self.$field *= other.$field;)+
                self
            }
            /// Multiplies vectors element-wise, result is stored in `dest`.
            ///
            pub fn mul_vector_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field * other.$field;)+
                dest
            }
            /// Divides vectors element-wise, result is stored in `self`.
            ///
            pub fn div_vector(&mut self, other: &Self) -> &mut Self {
                $(self.$field /= other.$field;)+
                self
            }
            /// Divides vectors element-wise, result is stored in `dest`.
            ///
            pub fn div_vector_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field / other.$field;)+
                dest
            }
            /// `self = self * s`
            ///
            pub fn mul_scalar(&mut self, s: f64) -> &mut Self {
                $(self.$field *= s;)+
                self
            }
            /// `dest = self * s`
            ///
            pub fn mul_scalar_into<'a>(&self, s: f64, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field * s;)+
                dest
            }
            /// `self = self / s`
            ///
            pub fn div_scalar(&mut self, s: f64) -> &mut Self {
                $(self.$field /= s;)+
                self
            }
            /// `dest = self / s`
            ///
            pub fn div_scalar_into<'a>(&self, s: f64, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field / s;)+
                dest
            }
            /// `self = -self`
            ///
            pub fn negate(&mut self) -> &mut Self {
                $(self.$field = -self.$field;)+
                self
            }
            /// `dest = -self`
            ///
            pub fn negate_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = -self.$field;)+
                dest
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot(&self, other: &Self) -> f64 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }
            /// Returns squared magnitude of a vector (squared vector length).
            ///
            /// This is cheaper than [`magnitude`](Self::magnitude) and is enough for comparisons.
            ///
            pub fn sqr_magnitude(&self) -> f64 {
                self.dot(self)
            }
            /// Returns magnitude of a vector (vector length).
            ///
            pub fn magnitude(&self) -> f64 {
                self.sqr_magnitude().sqrt()
            }

            /// Normalizes vector in place.
            ///
            /// Vector with zero magnitude is left unchanged.
            ///
            pub fn normalize(&mut self) -> &mut Self {
                let magnitude: f64 = self.magnitude();
                self.normalize_for(magnitude)
            }
            /// Writes normalized vector into `dest`.
            ///
            /// If vector has zero magnitude, `dest` is left unchanged.
            ///
            pub fn normalize_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
                self.normalize_for_into(self.magnitude(), dest)
            }
            /// Normalizes vector in place using already known magnitude.
            ///
            /// Nothing happens unless `magnitude` is positive.
            ///
            pub fn normalize_for(&mut self, magnitude: f64) -> &mut Self {
                if magnitude > 0.0 {
                    return self.div_scalar(magnitude);
                }
                ::log::trace!("{} with magnitude {} is left unnormalized", stringify!($struct), magnitude);
                self
            }
            /// Writes vector normalized with already known magnitude into `dest`.
            ///
            /// `dest` is left unchanged unless `magnitude` is positive.
            ///
            pub fn normalize_for_into<'a>(&self, magnitude: f64, dest: &'a mut Self) -> &'a mut Self {
                if magnitude > 0.0 {
                    return self.div_scalar_into(magnitude, dest);
                }
                ::log::trace!("{} with magnitude {} is left unnormalized", stringify!($struct), magnitude);
                dest
            }
            /// Returns new vector that is normalized (or unchanged copy for zero vector).
            ///
            pub fn normalized(self) -> Self {
                let mut vector: Self = self;
                vector.normalize();
                vector
            }

            /// Clamps every element between corresponding elements of `min` and `max`.
            ///
            pub fn clamp_vector(&mut self, min: &Self, max: &Self) -> &mut Self {
                $(self.$field = $crate::floats::clamp(self.$field, min.$field, max.$field);)+
                self
            }
            /// Writes vector clamped between `min` and `max` element-wise into `dest`.
            ///
            pub fn clamp_vector_into<'a>(&self, min: &Self, max: &Self, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = $crate::floats::clamp(self.$field, min.$field, max.$field);)+
                dest
            }
            /// Clamps every element to `[min; max]`.
            ///
            pub fn clamp(&mut self, min: f64, max: f64) -> &mut Self {
                $(self.$field = $crate::floats::clamp(self.$field, min, max);)+
                self
            }
            /// Writes vector with every element clamped to `[min; max]` into `dest`.
            ///
            pub fn clamp_into<'a>(&self, min: f64, max: f64, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = $crate::floats::clamp(self.$field, min, max);)+
                dest
            }
            /// Clamps every element to `[0.0; 1.0]`.
            ///
            pub fn clamp01(&mut self) -> &mut Self {
                self.clamp(0.0, 1.0)
            }
            /// Writes vector with every element clamped to `[0.0; 1.0]` into `dest`.
            ///
            pub fn clamp01_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
                self.clamp_into(0.0, 1.0, dest)
            }

            /// Linearly interpolates between `self` and `other` by `t`.
            ///
            /// `t` is not clamped. `t = 0.0` gives exactly `self` and `t = 1.0` gives exactly `other`.
            ///
            pub fn lerp(&self, other: &Self, t: f64) -> Self {
                let mut result: Self = Self::zero();
                self.lerp_into(other, t, &mut result);
                result
            }
            /// Linearly interpolates between `self` and `other` by `t`, result is stored in `dest`.
            ///
            pub fn lerp_into<'a>(&self, other: &Self, t: f64, dest: &'a mut Self) -> &'a mut Self {
                $(dest.$field = self.$field * (1.0 - t) + other.$field * t;)+
                dest
            }
            /// Bilinear interpolation.
            ///
            /// Interpolates `a1 -> b1` and `a2 -> b2` by `s`, then interpolates between
            /// those two results by `t`.
            ///
            pub fn lerp2(a1: &Self, b1: &Self, a2: &Self, b2: &Self, s: f64, t: f64) -> Self {
                a1.lerp(b1, s).lerp(&a2.lerp(b2, s), t)
            }
            /// Bilinear interpolation, result is stored in `dest`.
            ///
            #[allow(clippy::too_many_arguments)]
            pub fn lerp2_into<'a>(
                a1: &Self,
                b1: &Self,
                a2: &Self,
                b2: &Self,
                s: f64,
                t: f64,
                dest: &'a mut Self,
            ) -> &'a mut Self {
                *dest = Self::lerp2(a1, b1, a2, b2, s, t);
                dest
            }

            /// Checks whether vectors are exactly equal (no tolerance).
            ///
            pub fn equals(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
            /// Checks whether vectors are equal with [`EPSILON`](crate::floats::EPSILON) tolerance.
            ///
            pub fn almost_equals(&self, other: &Self) -> bool {
                $($crate::floats::almost_equal(self.$field, other.$field))&&+
            }
        }
        impl $crate::floats::FloatOperations for $struct {
            /// Constructs new vector by correcting every vector component that may be wronged by float operations.
            ///
            fn correct_to(self, digits: i32) -> Self {
                self.map(|elem| $crate::floats::FloatOperations::correct_to(elem, digits))
            }
            /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
            ///
            fn round_up_to(self, digits: i32) -> Self {
                self.map(|elem| $crate::floats::FloatOperations::round_up_to(elem, digits))
            }
        }
        impl From<[f64; $size]> for $struct {
            fn from(arr: [f64; $size]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }
        }
        impl From<$struct> for [f64; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
        impl ::std::fmt::Display for $struct {
            /// Writes single-line `[ x y ... ]` listing with fixed-width elements.
            ///
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "[")?;
                $(write!(f, " {}", $crate::floats::fpad(self.$field))?;)+
                write!(f, " ]")
            }
        }
    };
}

// All the following macros depend on [`impl_vector`] macro.
/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl ::std::ops::$trait<$struct_name> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $struct_name) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl ::std::ops::$trait<f64> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
// This could've been integrated in `impl_vector_vector_operations` and
// `impl_vector_rhs_operations`
// macros but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl ::std::ops::$trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl ::std::ops::Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl ::std::ops::Mul<$struct_name> for f64 {
            type Output = $struct_name;

            fn mul(self, rhs: $struct_name) -> Self::Output {
                rhs * self
            }
        }
        impl_vector_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),));
        impl_vector_assignoperations!($struct_name, $struct_name, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),));
        impl_vector_rhs_operations!($struct_name, ((Mul, mul, *),
                                                   (Div, div, /),));
        impl_vector_assignoperations!($struct_name, f64, ((MulAssign, mul_assign, *),
                                                          (DivAssign, div_assign, /),));
    };
}

mod vec2;
pub use self::vec2::Vec2;
mod vec3;
pub use self::vec3::Vec3;
mod vec4;
pub use self::vec4::Vec4;

#[cfg(test)]
mod tests {
    use super::{Vec2, Vec3, Vec4};
    use crate::floats::{almost_equal, FloatOperations};

    #[test]
    fn construction() {
        assert_eq!(Vec3::zero(), Vec3 { x: 0.0, y: 0.0, z: 0.0 });
        assert_eq!(Vec3::one(), Vec3 { x: 1.0, y: 1.0, z: 1.0 });
        assert_eq!(Vec3::of(1.0, 2.0, 3.0).elements(), [1.0, 2.0, 3.0]);
        assert_eq!(Vec4::from([1.0, 2.0, 3.0, 4.0]), Vec4::of(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f64; 2]>::from(Vec2::of(5.0, 6.0)), [5.0, 6.0]);

        let mut v: Vec3 = Vec3::zero();
        v.set(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::of(1.0, 2.0, 3.0));
        v.set_one();
        assert_eq!(v, Vec3::one());
        v.set_vector(&Vec3::of(7.0, 8.0, 9.0));
        assert_eq!(v, Vec3::of(7.0, 8.0, 9.0));
        v.set_zero();
        assert_eq!(v, Vec3::zero());
    }

    #[test]
    fn in_place_operations() {
        let mut v: Vec3 = Vec3::of(1.0, 2.0, 3.0);
        v.add_vector(&Vec3::of(1.0, 1.0, 1.0));
        assert_eq!(v, Vec3::of(2.0, 3.0, 4.0));
        v.sub_vector(&Vec3::of(2.0, 2.0, 2.0));
        assert_eq!(v, Vec3::of(0.0, 1.0, 2.0));
        v.add_scaled(&Vec3::of(1.0, 2.0, 3.0), 2.0);
        assert_eq!(v, Vec3::of(2.0, 5.0, 8.0));
        v.mul_vector(&Vec3::of(2.0, 0.0, 0.5));
        assert_eq!(v, Vec3::of(4.0, 0.0, 4.0));
        v.div_vector(&Vec3::of(2.0, 1.0, 8.0));
        assert_eq!(v, Vec3::of(2.0, 0.0, 0.5));
        v.mul_scalar(4.0);
        assert_eq!(v, Vec3::of(8.0, 0.0, 2.0));
        v.div_scalar(2.0);
        assert_eq!(v, Vec3::of(4.0, 0.0, 1.0));
        v.negate();
        assert_eq!(v, Vec3::of(-4.0, -0.0, -1.0));

        // chaining returns the same vector
        let mut w: Vec2 = Vec2::of(1.0, 1.0);
        w.mul_scalar(3.0).add_vector(&Vec2::of(1.0, 0.0)).negate();
        assert_eq!(w, Vec2::of(-4.0, -3.0));
    }

    #[test]
    fn into_operations() {
        let a: Vec4 = Vec4::of(1.0, 2.0, 3.0, 4.0);
        let b: Vec4 = Vec4::of(4.0, 3.0, 2.0, 1.0);
        let mut dest: Vec4 = Vec4::zero();

        assert_eq!(*a.add_vector_into(&b, &mut dest), Vec4::of(5.0, 5.0, 5.0, 5.0));
        assert_eq!(*a.sub_vector_into(&b, &mut dest), Vec4::of(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(*a.add_scaled_into(&b, 0.5, &mut dest), Vec4::of(3.0, 3.5, 4.0, 4.5));
        assert_eq!(*a.mul_vector_into(&b, &mut dest), Vec4::of(4.0, 6.0, 6.0, 4.0));
        assert_eq!(*a.div_vector_into(&b, &mut dest), Vec4::of(0.25, 2.0 / 3.0, 1.5, 4.0));
        assert_eq!(*a.mul_scalar_into(2.0, &mut dest), Vec4::of(2.0, 4.0, 6.0, 8.0));
        assert_eq!(*a.div_scalar_into(2.0, &mut dest), Vec4::of(0.5, 1.0, 1.5, 2.0));
        assert_eq!(*a.negate_into(&mut dest), Vec4::of(-1.0, -2.0, -3.0, -4.0));

        // operands are untouched
        assert_eq!(a, Vec4::of(1.0, 2.0, 3.0, 4.0));
        assert_eq!(b, Vec4::of(4.0, 3.0, 2.0, 1.0));
    }

    #[test]
    fn operators() {
        let a: Vec2 = Vec2::of(3.0, 4.0);
        let b: Vec2 = Vec2::of(1.0, 2.0);

        assert_eq!(a + b, Vec2::of(4.0, 6.0));
        assert_eq!(a - b, Vec2::of(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::of(6.0, 8.0));
        assert_eq!(2.0 * a, Vec2::of(6.0, 8.0));
        assert_eq!(a / 2.0, Vec2::of(1.5, 2.0));
        assert_eq!(-a, Vec2::of(-3.0, -4.0));

        let mut c: Vec2 = a;
        c += b;
        assert_eq!(c, Vec2::of(4.0, 6.0));
        c -= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, Vec2::of(9.0, 12.0));
        c /= 3.0;
        assert_eq!(c, a);

        assert_eq!(a.map(|n| n * n), Vec2::of(9.0, 16.0));
        assert_eq!(a.combine(b, f64::max), a);
    }

    #[test]
    fn products_and_magnitudes() {
        let a: Vec3 = Vec3::of(1.0, 2.0, 2.0);
        assert_eq!(a.dot(&Vec3::of(2.0, -1.0, 3.0)), 6.0);
        assert_eq!(a.sqr_magnitude(), 9.0);
        assert_eq!(a.magnitude(), 3.0);
        assert_eq!(Vec2::of(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vec4::of(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);
    }

    #[test]
    fn normalization() {
        let mut zero2: Vec2 = Vec2::zero();
        zero2.normalize();
        assert_eq!(zero2, Vec2::zero());
        assert!(!zero2.x.is_nan() && !zero2.y.is_nan());

        let mut zero3: Vec3 = Vec3::zero();
        zero3.normalize();
        assert_eq!(zero3, Vec3::zero());

        let mut zero4: Vec4 = Vec4::zero();
        zero4.normalize();
        assert_eq!(zero4, Vec4::zero());
        assert_eq!(Vec4::zero().normalized(), Vec4::zero());

        for v in [
            Vec3::of(3.0, 4.0, 12.0),
            Vec3::of(-0.001, 0.0, 0.0),
            Vec3::of(1e6, -2e6, 3e6),
        ] {
            let mut n: Vec3 = v;
            n.normalize();
            assert!(almost_equal(n.magnitude(), 1.0));
        }
        assert!(almost_equal(Vec2::of(-7.0, 0.5).normalized().magnitude(), 1.0));
        assert!(almost_equal(Vec4::of(1.0, 2.0, 3.0, 4.0).normalized().magnitude(), 1.0));

        let mut v: Vec3 = Vec3::of(2.0, 0.0, 0.0);
        v.normalize_for(4.0);
        assert_eq!(v, Vec3::of(0.5, 0.0, 0.0));
        v.normalize_for(0.0);
        assert_eq!(v, Vec3::of(0.5, 0.0, 0.0));
        v.normalize_for(-1.0);
        assert_eq!(v, Vec3::of(0.5, 0.0, 0.0));
    }

    #[test]
    fn normalization_into() {
        let mut dest: Vec3 = Vec3::of(9.0, 9.0, 9.0);
        Vec3::of(0.0, 3.0, 4.0).normalize_into(&mut dest);
        assert_eq!(dest, Vec3::of(0.0, 0.6, 0.8));

        // zero magnitude leaves destination as it was
        Vec3::zero().normalize_into(&mut dest);
        assert_eq!(dest, Vec3::of(0.0, 0.6, 0.8));
        Vec3::one().normalize_for_into(0.0, &mut dest);
        assert_eq!(dest, Vec3::of(0.0, 0.6, 0.8));

        Vec3::of(0.0, 0.0, 8.0).normalize_for_into(2.0, &mut dest);
        assert_eq!(dest, Vec3::of(0.0, 0.0, 4.0));
    }

    #[test]
    fn clamping() {
        let mut v: Vec3 = Vec3::of(-2.0, 0.5, 2.0);
        v.clamp_vector(&Vec3::of(-1.0, 0.75, 0.0), &Vec3::of(1.0, 1.0, 1.5));
        assert_eq!(v, Vec3::of(-1.0, 0.75, 1.5));

        let mut v: Vec3 = Vec3::of(-2.0, 0.5, 2.0);
        v.clamp(-1.0, 1.0);
        assert_eq!(v, Vec3::of(-1.0, 0.5, 1.0));

        let mut v: Vec4 = Vec4::of(-2.0, 0.5, 2.0, 1.0);
        v.clamp01();
        assert_eq!(v, Vec4::of(0.0, 0.5, 1.0, 1.0));

        let source: Vec2 = Vec2::of(-3.0, 3.0);
        let mut dest: Vec2 = Vec2::zero();
        assert_eq!(*source.clamp01_into(&mut dest), Vec2::of(0.0, 1.0));
        assert_eq!(*source.clamp_into(-2.0, 2.0, &mut dest), Vec2::of(-2.0, 2.0));
        assert_eq!(
            *source.clamp_vector_into(&Vec2::of(0.0, 0.0), &Vec2::of(1.0, 2.0), &mut dest),
            Vec2::of(0.0, 2.0)
        );
        assert_eq!(source, Vec2::of(-3.0, 3.0));
    }

    #[test]
    fn interpolation() {
        let a2: Vec2 = Vec2::of(0.1, -3.0);
        let b2: Vec2 = Vec2::of(0.7, 5.0);
        assert_eq!(a2.lerp(&b2, 0.0), a2);
        assert_eq!(a2.lerp(&b2, 1.0), b2);
        assert_eq!(
            Vec2::of(0.0, -2.0).lerp(&Vec2::of(4.0, 2.0), 0.5),
            Vec2::of(2.0, 0.0)
        );

        let a3: Vec3 = Vec3::of(0.3, 0.2, 0.1);
        let b3: Vec3 = Vec3::of(-1.3, 7.0, 0.9);
        assert_eq!(a3.lerp(&b3, 0.0), a3);
        assert_eq!(a3.lerp(&b3, 1.0), b3);
        assert_eq!(
            Vec3::of(0.0, 2.0, 4.0).lerp(&Vec3::of(2.0, 4.0, 8.0), 0.5),
            Vec3::of(1.0, 3.0, 6.0)
        );

        let a4: Vec4 = Vec4::of(1.0, 2.0, 3.0, 4.0);
        let b4: Vec4 = Vec4::of(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a4.lerp(&b4, 0.0), a4);
        assert_eq!(a4.lerp(&b4, 1.0), b4);
        assert_eq!(a4.lerp(&b4, 0.5), Vec4::of(3.0, 4.0, 5.0, 6.0));
        assert_eq!(a4.lerp(&b4, 2.0), Vec4::of(9.0, 10.0, 11.0, 12.0));

        let mut dest: Vec4 = Vec4::zero();
        assert_eq!(*a4.lerp_into(&b4, 0.25, &mut dest), Vec4::of(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn bilinear_interpolation() {
        // corners of a unit square carrying their own coordinates
        let c00: Vec2 = Vec2::of(0.0, 0.0);
        let c10: Vec2 = Vec2::of(1.0, 0.0);
        let c01: Vec2 = Vec2::of(0.0, 1.0);
        let c11: Vec2 = Vec2::of(1.0, 1.0);

        assert_eq!(Vec2::lerp2(&c00, &c10, &c01, &c11, 0.25, 0.75), Vec2::of(0.25, 0.75));
        assert_eq!(Vec2::lerp2(&c00, &c10, &c01, &c11, 0.0, 0.0), c00);
        assert_eq!(Vec2::lerp2(&c00, &c10, &c01, &c11, 1.0, 1.0), c11);

        let mut dest: Vec3 = Vec3::zero();
        Vec3::lerp2_into(
            &Vec3::zero(),
            &Vec3::of(2.0, 0.0, 0.0),
            &Vec3::of(0.0, 2.0, 0.0),
            &Vec3::of(2.0, 2.0, 0.0),
            0.5,
            0.5,
            &mut dest,
        );
        assert_eq!(dest, Vec3::of(1.0, 1.0, 0.0));
    }

    #[test]
    fn equality() {
        let a: Vec3 = Vec3::of(0.1 + 0.2, 1.0, 1.0);
        let b: Vec3 = Vec3::of(0.3, 1.0, 1.0);
        assert!(!a.equals(&b));
        assert_ne!(a, b);
        assert!(a.almost_equals(&b));
        assert!(a.equals(&a));

        assert!(!Vec2::of(f64::NAN, 0.0).equals(&Vec2::of(f64::NAN, 0.0)));
        let infinite: Vec3 = Vec3::of(f64::INFINITY, 0.0, 0.0);
        assert!(!infinite.almost_equals(&Vec3::unit_x()));
        assert!(!infinite.almost_equals(&-infinite));
        assert!(infinite.almost_equals(&infinite));
    }

    #[test]
    fn corrections() {
        let v: Vec3 = Vec3::of(1e-17, 0.99999999999, -2.0);
        assert_eq!(v.correct_to(0), Vec3::of(0.0, 1.0, -2.0));
        assert_eq!(Vec2::of(1.234, 5.678).round_up_to(1), Vec2::of(1.2, 5.7));
    }

    #[test]
    fn formatting() {
        assert_eq!(Vec2::of(1.0, -2.5).to_string(), "[     1.0000    -2.5000 ]");
        assert_eq!(
            Vec4::of(0.0, 1.0, 2.0, 3.0).to_string(),
            "[     0.0000     1.0000     2.0000     3.0000 ]"
        );
    }
}
