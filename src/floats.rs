//! `floats` submodule implements scalar constants and helper functions that
//! vector and matrix code is built upon.
//!
//! [`clamp`], [`clamp01`], [`lerp`], [`deg2rad`] and [`cotan`] are scalar counterparts of
//! element-wise vector operations.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations (e.g. `cos(PI / 2)` not being exactly zero).
//!

use std::f64::consts::PI;

/// `2 * PI` as a constant.
///
pub const TWO_PI: f64 = PI * 2.0;
/// `PI / 2` as a constant.
///
pub const PI_BY_2: f64 = PI / 2.0;
/// `PI / 180` as a constant (multiplier that converts degrees to radians).
///
pub const PI_BY_180: f64 = PI / 180.0;
/// `sqrt(2 * PI)` as a constant.
///
// `f64::sqrt` is not `const`, so value is spelled out.
pub const TWO_PI_ROOT: f64 = 2.506_628_274_631_000_2;

/// Clamps `x` so that it is not less than `min` and not greater than `max`.
///
/// Unlike `f64::clamp` this function never panics: if `min > max` result is unspecified,
/// NaN is passed through.
///
/// # Example
/// ```rust
/// # use gfxmath::floats::clamp;
/// assert_eq!(clamp(5.0, 0.0, 2.0), 2.0);
/// assert_eq!(clamp(-5.0, 0.0, 2.0), 0.0);
/// assert_eq!(clamp(1.5, 0.0, 2.0), 1.5);
/// ```
///
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}
/// Clamps `x` to `[0.0; 1.0]`.
///
pub fn clamp01(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/// Linearly interpolates between `a` and `b` by `t`.
///
/// `t` is not clamped, so values outside of `[0.0; 1.0]` extrapolate.
///
/// # Example
/// ```rust
/// # use gfxmath::floats::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
/// ```
///
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Converts angle in degrees to radians.
///
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI_BY_180
}

/// Returns cotangent of the angle (in radians).
///
/// There is no guard for multiples of `PI`, division follows IEEE-754 rules.
///
pub fn cotan(angle: f64) -> f64 {
    1.0 / angle.tan()
}

/// Amount of digits after decimal point that [`fpad`] prints.
///
pub const FPAD_PRECISION: usize = 4;
/// Width to which [`fpad`] left-pads its output.
///
pub const FPAD_WIDTH: usize = 10;
/// Formats number with [`FPAD_PRECISION`] digits after decimal point,
/// left-padded with spaces to [`FPAD_WIDTH`].
///
/// This is used by `Display` implementations of vectors and matrices and is meant
/// for debugging and logging only.
///
/// # Example
/// ```rust
/// # use gfxmath::floats::fpad;
/// assert_eq!(fpad(1.5), "    1.5000");
/// assert_eq!(fpad(-12.25), "  -12.2500");
/// ```
///
pub fn fpad(n: f64) -> String {
    format!("{:>width$.prec$}", n, width = FPAD_WIDTH, prec = FPAD_PRECISION)
}

/// Constant that is used in floating point equality.
///
/// It is used as an absolute tolerance for values near zero and as a relative one otherwise.
///
pub const EPSILON: f64 = 1e-9;
/// This function implements tolerant floating point equality for `gfxmath` crate.
///
/// It backs `almost_equals` methods of vectors and matrices. `==` on those types stays exact.
///
/// # Example
/// ```rust
/// # use gfxmath::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(std::f64::consts::FRAC_PI_2.cos(), 0.0));
/// assert!(!almost_equal(1.0, 1.001));
/// assert!(!almost_equal(f64::INFINITY, 1.0));
/// ```
///
pub fn almost_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    // infinities only match themselves, NaN matches nothing
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let diff = (a - b).abs();
    let norm = a.abs().max(b.abs()).max(1.0);
    diff <= norm * EPSILON
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f64 = 1e-9;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f64 = 1.0 - CLOSE_TO_ZERO;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 1e-17 (anything whose fractional part is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999999999 (anything whose fractional part is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f64 {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::floats::FloatOperations;
    /// assert_eq!((-0.0_f64).correct_to(0).to_bits(), 0.0_f64.to_bits());
    /// assert_eq!(std::f64::consts::FRAC_PI_2.cos().correct_to(0), 0.0);
    /// assert_eq!(0.99999999999_f64.correct_to(0), 1.0);
    ///
    /// assert_eq!(0.2000000000001_f64.correct_to(1), 0.2);
    /// assert_eq!(0.25_f64.correct_to(0), 0.25);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul = 10_f64.powi(digits);

        let n = self * mul;

        if n == 0.0 {
            return 0.0;
        }

        let fract = n.abs().fract();
        if !(CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            // `+ 0.0` turns `-0.0` into `0.0`
            return n.round() / mul + 0.0;
        }

        n / mul
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use gfxmath::floats::FloatOperations;
    /// assert_eq!(12.345_f64.round_up_to(1), 12.3);
    /// assert_eq!(12.345_f64.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul = 10_f64.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
