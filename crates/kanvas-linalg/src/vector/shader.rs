//! The shader-style elementwise math protocol.
//!
//! Every function applies independently per component, mirroring the GLSL
//! builtins of the same names. Two-operand functions accept either a vector
//! or a single `f32` (broadcast to every component) for the extra operand,
//! via the `From<f32>` conversion.

use crate::scalar;

use super::Vector;

/// Trigonometric functions, applied per component.
impl<const N: usize> Vector<N> {
    /// Computes the sine of each component (interpreted as radians).
    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    /// Computes the cosine of each component (interpreted as radians).
    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    /// Computes the tangent of each component (interpreted as radians).
    pub fn tan(self) -> Self {
        self.map(f32::tan)
    }

    /// Computes the arcsine of each component.
    pub fn asin(self) -> Self {
        self.map(f32::asin)
    }

    /// Computes the arccosine of each component.
    pub fn acos(self) -> Self {
        self.map(f32::acos)
    }

    /// Computes the arctangent of each component.
    pub fn atan(self) -> Self {
        self.map(f32::atan)
    }

    /// Computes the four-quadrant arctangent of each component and the
    /// corresponding component of `x` (scalar or vector).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// use std::f32::consts::FRAC_PI_4;
    /// assert_approx_eq!(vec2(1.0, -1.0).atan2(1.0), vec2(FRAC_PI_4, -FRAC_PI_4));
    /// ```
    pub fn atan2(self, x: impl Into<Self>) -> Self {
        let x = x.into();
        Self::from_fn(|i| self[i].atan2(x[i]))
    }

    /// Computes the hyperbolic sine of each component.
    pub fn sinh(self) -> Self {
        self.map(f32::sinh)
    }

    /// Computes the hyperbolic cosine of each component.
    pub fn cosh(self) -> Self {
        self.map(f32::cosh)
    }

    /// Computes the hyperbolic tangent of each component.
    pub fn tanh(self) -> Self {
        self.map(f32::tanh)
    }

    /// Computes the inverse hyperbolic sine of each component.
    pub fn asinh(self) -> Self {
        self.map(f32::asinh)
    }

    /// Computes the inverse hyperbolic cosine of each component.
    pub fn acosh(self) -> Self {
        self.map(f32::acosh)
    }

    /// Computes the inverse hyperbolic tangent of each component.
    pub fn atanh(self) -> Self {
        self.map(f32::atanh)
    }

    /// Converts each component from degrees to radians.
    pub fn to_radians(self) -> Self {
        self.map(scalar::radians)
    }

    /// Converts each component from radians to degrees.
    pub fn to_degrees(self) -> Self {
        self.map(scalar::degrees)
    }
}

/// Exponential functions, applied per component.
impl<const N: usize> Vector<N> {
    /// Computes `e^c` for each component.
    pub fn exp(self) -> Self {
        self.map(f32::exp)
    }

    /// Computes `2^c` for each component.
    pub fn exp2(self) -> Self {
        self.map(f32::exp2)
    }

    /// Computes the natural logarithm of each component.
    pub fn ln(self) -> Self {
        self.map(f32::ln)
    }

    /// Computes the base-2 logarithm of each component.
    pub fn log2(self) -> Self {
        self.map(f32::log2)
    }

    /// Computes the square root of each component.
    ///
    /// Negative components produce NaN, which is the caller's concern.
    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    /// Computes `1 / sqrt(c)` for each component.
    pub fn inverse_sqrt(self) -> Self {
        self.map(scalar::inverse_sqrt)
    }

    /// Raises each component to the corresponding power in `exponent`
    /// (scalar or vector).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(2.0, 3.0).powf(2.0), vec2(4.0, 9.0));
    /// assert_eq!(vec2(2.0, 3.0).powf(vec2(3.0, 1.0)), vec2(8.0, 3.0));
    /// ```
    pub fn powf(self, exponent: impl Into<Self>) -> Self {
        let exponent = exponent.into();
        Self::from_fn(|i| self[i].powf(exponent[i]))
    }
}

/// Rounding functions, applied per component.
impl<const N: usize> Vector<N> {
    /// Rounds each component down to the nearest integer.
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Rounds each component up to the nearest integer.
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Rounds each component to the nearest integer, ties away from zero.
    pub fn round(self) -> Self {
        self.map(f32::round)
    }

    /// Rounds each component to the nearest integer, ties to the nearest
    /// *even* integer (IEEE round-half-to-even).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(2.5, 3.5).round_even(), vec2(2.0, 4.0));
    /// ```
    pub fn round_even(self) -> Self {
        self.map(scalar::round_even)
    }

    /// Truncates each component toward zero.
    pub fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    /// Returns `c - floor(c)` for each component (never negative).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(1.25, -0.25).fract(), vec2(0.25, 0.75));
    /// ```
    pub fn fract(self) -> Self {
        self.map(scalar::fract)
    }

    /// Splits each component into fractional and integral parts, both
    /// carrying the component's sign.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let (fract, trunc) = vec2(1.25, -1.25).modf();
    /// assert_eq!(fract, vec2(0.25, -0.25));
    /// assert_eq!(trunc, vec2(1.0, -1.0));
    /// ```
    pub fn modf(self) -> (Self, Self) {
        (self.map(f32::fract), self.map(f32::trunc))
    }
}

/// Range functions, applied per component.
impl<const N: usize> Vector<N> {
    /// Linearly interpolates between `self` and `other` by the factor `t`
    /// (scalar or per-component vector). `t` is not clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(0.0, 10.0).mix(vec2(10.0, 20.0), 0.5), vec2(5.0, 15.0));
    /// ```
    pub fn mix(self, other: Self, t: impl Into<Self>) -> Self {
        let t = t.into();
        Self::from_fn(|i| scalar::mix(self[i], other[i], t[i]))
    }

    /// Returns 0.0 for each component less than the corresponding `edge`
    /// component, and 1.0 otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec3(0.0, 1.0, 2.0).step(1.0), vec3(0.0, 1.0, 1.0));
    /// ```
    pub fn step(self, edge: impl Into<Self>) -> Self {
        let edge = edge.into();
        Self::from_fn(|i| scalar::step(edge[i], self[i]))
    }

    /// Smooth Hermite interpolation of each component across `low..=high`
    /// (scalars or vectors).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec3(-1.0, 0.5, 2.0).smoothstep(0.0, 1.0), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn smoothstep(self, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        let (low, high) = (low.into(), high.into());
        Self::from_fn(|i| scalar::smoothstep(low[i], high[i], self[i]))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, Vec2};

    #[test]
    fn trigonometric() {
        assert_approx_eq!(vec2(0.0, FRAC_PI_2).sin(), vec2(0.0, 1.0));
        assert_approx_eq!(vec2(0.0, PI).cos(), vec2(1.0, -1.0)).abs(1e-6);
        assert_approx_eq!(vec2(1.0, -1.0).asin(), vec2(FRAC_PI_2, -FRAC_PI_2));
        assert_approx_eq!(vec2(0.5, 0.5).sinh().asinh(), vec2(0.5, 0.5)).abs(1e-6);
        assert_approx_eq!(vec2(0.5, 0.5).tanh().atanh(), vec2(0.5, 0.5)).abs(1e-6);
    }

    #[test]
    fn degrees_radians() {
        assert_approx_eq!(vec2(180.0, 90.0).to_radians(), vec2(PI, FRAC_PI_2));
        assert_approx_eq!(vec2(PI, FRAC_PI_2).to_degrees(), vec2(180.0, 90.0));
    }

    #[test]
    fn exponential() {
        assert_approx_eq!(vec2(1.0, 2.0).exp().ln(), vec2(1.0, 2.0)).abs(1e-6);
        assert_eq!(vec2(3.0, 8.0).exp2(), vec2(8.0, 256.0));
        assert_eq!(vec2(16.0, 1024.0).log2(), vec2(4.0, 10.0));
        assert_eq!(vec2(16.0, 4.0).sqrt(), vec2(4.0, 2.0));
        assert_eq!(vec2(16.0, 4.0).inverse_sqrt(), vec2(0.25, 0.5));
    }

    #[test]
    fn rounding() {
        assert_eq!(vec2(1.7, -1.7).floor(), vec2(1.0, -2.0));
        assert_eq!(vec2(1.2, -1.2).ceil(), vec2(2.0, -1.0));
        assert_eq!(vec2(0.5, 1.5).round(), vec2(1.0, 2.0));
        assert_eq!(vec2(0.5, 1.5).round_even(), vec2(0.0, 2.0));
        assert_eq!(vec2(1.7, -1.7).trunc(), vec2(1.0, -1.0));
    }

    #[test]
    fn scalar_broadcast() {
        assert_eq!(vec3(0.0, 1.0, 2.0).min(1.0), vec3(0.0, 1.0, 1.0));
        assert_eq!(vec3(0.0, 1.0, 2.0).max(1.0), vec3(1.0, 1.0, 2.0));
        assert_eq!(Vec2::ZERO.mix(vec2(2.0, 4.0), 0.5), vec2(1.0, 2.0));
        assert_eq!(vec2(2.0, 8.0).powf(2.0), vec2(4.0, 64.0));
    }

    #[test]
    fn range_functions() {
        assert_eq!(
            vec3(-2.0, 0.25, 7.0).clamp(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 8.0)),
            vec3(0.0, 0.25, 7.0)
        );
        assert_eq!(vec2(0.0, 2.0).step(vec2(1.0, 1.0)), vec2(0.0, 1.0));
        assert_eq!(vec2(0.5, 2.0).smoothstep(0.0, 1.0), vec2(0.5, 1.0));
        assert_eq!(
            vec2(1.0, 2.0).mix(vec2(3.0, 6.0), vec2(0.0, 1.0)),
            vec2(1.0, 6.0)
        );
    }
}
