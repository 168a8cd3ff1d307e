//! Shared shader-style scalar helpers.
//!
//! These free functions implement the scalar versions of the GLSL-inspired
//! math protocol. The vector types apply them per component; they are exported
//! so that callers can use the same definitions on plain [`f32`] values.

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::radians;
/// assert_eq!(radians(180.0), std::f32::consts::PI);
/// ```
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::degrees;
/// assert_eq!(degrees(std::f32::consts::PI), 180.0);
/// ```
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Returns the fractional part of `x`, computed as `x - floor(x)`.
///
/// Unlike [`f32::fract`], the result is never negative (the shader
/// convention).
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::fract;
/// assert_eq!(fract(1.25), 0.25);
/// assert_eq!(fract(-0.25), 0.75);
/// ```
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Rounds `x` to the nearest integer, with ties rounding to the nearest
/// *even* integer (IEEE round-half-to-even).
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::round_even;
/// assert_eq!(round_even(2.5), 2.0);
/// assert_eq!(round_even(3.5), 4.0);
/// assert_eq!(round_even(2.4), 2.0);
/// ```
#[inline]
pub fn round_even(x: f32) -> f32 {
    x.round_ties_even()
}

/// Computes `1 / sqrt(x)`.
///
/// Negative input produces NaN, zero produces infinity; neither is an error.
#[inline]
pub fn inverse_sqrt(x: f32) -> f32 {
    x.sqrt().recip()
}

/// Linearly interpolates between `a` and `b` by the factor `t`.
///
/// `t` is not clamped; values outside `0..=1` extrapolate.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::mix;
/// assert_eq!(mix(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(mix(-1.0, 1.0, 0.5), 0.0);
/// ```
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Returns 0.0 if `x` is less than `edge`, and 1.0 otherwise.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::step;
/// assert_eq!(step(1.0, 0.5), 0.0);
/// assert_eq!(step(1.0, 1.0), 1.0);
/// ```
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Smooth Hermite interpolation between 0 and 1 as `x` moves across
/// `low..=high`.
///
/// Computes `t * t * (3 - 2 * t)` with `t = clamp((x - low) / (high - low),
/// 0, 1)`. When `low == high` the division produces NaN, matching the shader
/// definition (the result is unspecified there, not an error).
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::smoothstep;
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0, 4.0, -1.0), 0.0);
/// assert_eq!(smoothstep(0.0, 4.0, 9.0), 1.0);
/// ```
#[inline]
pub fn smoothstep(low: f32, high: f32, x: f32) -> f32 {
    let t = ((x - low) / (high - low)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Rounds `x` to at most `fraction_digits` decimal digits.
///
/// The rounding happens in decimal, not in the binary representation: the
/// value is scaled by `10^fraction_digits`, rounded to the nearest integer
/// (ties away from zero), and scaled back. Used by the rounded equality and
/// serialization paths.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::scalar::round_to;
/// assert_eq!(round_to(1.2345678, 3), 1.235);
/// assert_eq!(round_to(-0.0004, 3), 0.0);
/// ```
#[inline]
pub fn round_to(x: f32, fraction_digits: u32) -> f32 {
    round_to_f64(f64::from(x), fraction_digits) as f32
}

/// [`round_to`], but operating on `f64` so that the decimal scaling does not
/// lose precision for values near rounding boundaries.
pub(crate) fn round_to_f64(x: f64, fraction_digits: u32) -> f64 {
    let scale = 10f64.powi(fraction_digits as i32);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_even_ties() {
        assert_eq!(round_even(0.5), 0.0);
        assert_eq!(round_even(1.5), 2.0);
        assert_eq!(round_even(2.5), 2.0);
        assert_eq!(round_even(-1.5), -2.0);
        assert_eq!(round_even(-2.5), -2.0);
    }

    #[test]
    fn fract_is_floor_based() {
        assert_eq!(fract(2.75), 0.75);
        assert_eq!(fract(-2.75), 0.25);
        assert_eq!(fract(3.0), 0.0);
    }

    #[test]
    fn step_edges() {
        assert_eq!(step(0.0, -f32::MIN_POSITIVE), 0.0);
        assert_eq!(step(0.0, 0.0), 1.0);
        assert_eq!(step(-1.0, 0.0), 1.0);
    }

    #[test]
    fn smoothstep_clamps() {
        assert_eq!(smoothstep(2.0, 6.0, 0.0), 0.0);
        assert_eq!(smoothstep(2.0, 6.0, 8.0), 1.0);
        assert_eq!(smoothstep(2.0, 6.0, 4.0), 0.5);
    }

    #[test]
    fn mix_extrapolates() {
        assert_eq!(mix(0.0, 10.0, 1.5), 15.0);
        assert_eq!(mix(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn decimal_rounding() {
        assert_eq!(round_to(1.004, 2), 1.0);
        assert_eq!(round_to(1.006, 2), 1.01);
        assert_eq!(round_to(12.3, 0), 12.0);
        assert_eq!(round_to(-1.006, 2), -1.01);
    }

    #[test]
    fn angle_conversions() {
        assert_eq!(radians(360.0), std::f32::consts::TAU);
        assert_eq!(degrees(std::f32::consts::TAU), 360.0);
        assert_eq!(inverse_sqrt(4.0), 0.5);
    }
}
