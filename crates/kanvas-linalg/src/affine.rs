//! Reduced 2D affine transforms.
//!
//! An [`AffineTransform`] is the 2-row, 3-column matrix
//! `[[a, c, e], [b, d, f]]` with an implicit third row `[0, 0, 1]` that is
//! never stored. It represents a 2D linear map plus translation, in the
//! component naming convention of platform 2D transforms (canvas contexts,
//! DOM matrices). All of its operations are computed directly against the
//! implicit row.

use std::{
    fmt, mem,
    ops::{Deref, DerefMut, Mul, MulAssign},
};

use crate::{approx::ApproxEq, buffer, vec2, Error, Mat3, Mat4, Matrix, Result, Vec2};

/// A 2D affine transformation matrix.
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |   (implicit, never stored)
/// ```
///
/// The six coefficients are stored contiguously as `[a, b, c, d, e, f]`
/// (column-major, the platform convention), and are accessible as fields:
/// `t.a`, `t.e = 4.0`, and so on.
///
/// `a`/`d` carry scale, `b`/`c` carry shear/rotation, and `e`/`f` carry the
/// translation.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::*;
/// let t = AffineTransform::from_translation(vec2(10.0, 0.0))
///     * AffineTransform::from_scale(2.0);
/// assert_eq!(t.transform_point(vec2(1.0, 1.0)), vec2(12.0, 2.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct AffineTransform {
    mat: Matrix<2, 3>,
}

unsafe impl bytemuck::Zeroable for AffineTransform {}
unsafe impl bytemuck::Pod for AffineTransform {}

/// The six named coefficients of an [`AffineTransform`], exposed as `Deref`
/// target so they read and write the underlying storage directly.
#[repr(C)]
pub struct Coefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    _priv: (), // prevent external construction
}

impl Deref for AffineTransform {
    type Target = Coefficients;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for AffineTransform {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        mat: Matrix::IDENTITY,
    };

    /// Creates a transform from its six coefficients.
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self {
            mat: Matrix::from_columns([[a, b], [c, d], [e, f]]),
        }
    }

    /// Creates a pure translation transform.
    pub fn from_translation(translation: impl Into<Vec2>) -> Self {
        let [x, y] = translation.into().into_array();
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Creates a counterclockwise rotation transform (Y axis up).
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Creates a scaling transform (a scalar scales uniformly).
    pub fn from_scale(scale: impl Into<Vec2>) -> Self {
        let [x, y] = scale.into().into_array();
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Returns the coefficients as `[a, b, c, d, e, f]`.
    pub fn to_array(self) -> [f32; 6] {
        bytemuck::cast(self)
    }

    /// Returns the coefficients as a slice, in `[a, b, c, d, e, f]` order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.mat.as_slice()
    }

    /// Views this transform's storage as raw bytes (24 bytes).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Creates a view over the first 6 floats of `slice`, interpreted as
    /// `[a, b, c, d, e, f]`.
    ///
    /// See [`Vector::from_slice`][crate::Vector::from_slice] for the aliasing
    /// and error rules.
    pub fn from_slice(slice: &[f32]) -> Result<&Self> {
        buffer::float_prefix(slice)
    }

    /// Mutable variant of [`AffineTransform::from_slice`].
    pub fn from_slice_mut(slice: &mut [f32]) -> Result<&mut Self> {
        buffer::float_prefix_mut(slice)
    }

    /// Creates a view over the 24 bytes of `bytes` starting at `byte_offset`.
    pub fn from_bytes(bytes: &[u8], byte_offset: usize) -> Result<&Self> {
        buffer::byte_region(bytes, byte_offset)
    }

    /// Mutable variant of [`AffineTransform::from_bytes`].
    pub fn from_bytes_mut(bytes: &mut [u8], byte_offset: usize) -> Result<&mut Self> {
        buffer::byte_region_mut(bytes, byte_offset)
    }

    /// Returns the determinant, `a * d - c * b`.
    ///
    /// The implicit `[0, 0, 1]` row contributes the factor 1 to the
    /// expansion, so this equals the 3x3 determinant of the materialized
    /// matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let t = AffineTransform::new(5.0, 6.0, 7.0, 8.0, 9.0, 10.0);
    /// assert_eq!(t.determinant(), -2.0);
    /// ```
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.c * self.b
    }

    /// Inverts this transform.
    ///
    /// A degenerate transform (determinant 0) is not an error: the division
    /// produces non-finite coefficients. Use
    /// [`AffineTransform::try_invert`] to detect degeneracy instead.
    pub fn invert(self) -> Self {
        let r = self.determinant().recip();
        Self::new(
            self.d * r,
            -self.b * r,
            -self.c * r,
            self.a * r,
            (self.c * self.f - self.d * self.e) * r,
            (self.b * self.e - self.a * self.f) * r,
        )
    }

    /// Inverts this transform, returning [`None`] if it is degenerate.
    pub fn try_invert(self) -> Option<Self> {
        (self.determinant() != 0.0).then(|| self.invert())
    }

    /// Multiplies by the inverse of `other` on the right:
    /// `self × other⁻¹`.
    pub fn div(self, other: Self) -> Self {
        self * other.invert()
    }

    /// Applies a translation: `self × translation(t)`.
    pub fn translate(self, translation: impl Into<Vec2>) -> Self {
        self * Self::from_translation(translation)
    }

    /// Rotates counterclockwise: `self × rotation(radians)`.
    pub fn rotate(self, radians: f32) -> Self {
        self * Self::from_rotation(radians)
    }

    /// Scales per axis (or uniformly, for a scalar): `self × scaling(s)`.
    pub fn scale(self, scale: impl Into<Vec2>) -> Self {
        self * Self::from_scale(scale)
    }

    /// Transforms a *point*: applies the linear map and the translation.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        vec2(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Transforms a *vector*: applies the linear map only, ignoring the
    /// translation.
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        vec2(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// Extracts the per-axis scale and the rotation angle (radians,
    /// counterclockwise) of this transform.
    ///
    /// The decomposition assumes the transform is a rotation followed by a
    /// (possibly non-uniform) scale; shear ends up folded into the Y scale.
    pub fn decompose(&self) -> (Vec2, f32) {
        let rotation = self.b.atan2(self.a);
        let scale_x = (self.a * self.a + self.b * self.b).sqrt();
        let scale_y = self.determinant() / scale_x;
        (vec2(scale_x, scale_y), rotation)
    }

    /// Returns `true` if this transform exactly equals the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns a copy with each coefficient rounded to at most
    /// `fraction_digits` decimal digits.
    pub fn rounded(self, fraction_digits: u32) -> Self {
        Self {
            mat: self.mat.rounded(fraction_digits),
        }
    }

    /// Compares two transforms after rounding each coefficient difference to
    /// `fraction_digits` decimal digits (see
    /// [`Vector::eq_rounded`][crate::Vector::eq_rounded]).
    pub fn eq_rounded(self, other: Self, fraction_digits: u32) -> bool {
        self.mat.eq_rounded(other.mat, fraction_digits)
    }

    /// Pushes this transform into a drawing context, multiplying it onto the
    /// context's current transform state.
    pub fn apply_to<T: CanvasTransform + ?Sized>(&self, ctx: &mut T) {
        ctx.transform(self.a, self.b, self.c, self.d, self.e, self.f);
    }

    /// Replaces a drawing context's transform state with this transform.
    pub fn set_on<T: CanvasTransform + ?Sized>(&self, ctx: &mut T) {
        ctx.set_transform(self.a, self.b, self.c, self.d, self.e, self.f);
    }
}

/// Drawing contexts that accept a 2D transform as six coefficients.
///
/// This is the one-way call-out seam towards rendering backends; the algebra
/// never reads anything back from the context.
pub trait CanvasTransform {
    /// Multiplies the given transform onto the context's current transform.
    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32);

    /// Replaces the context's current transform.
    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32);
}

/// Composition with the implicit `[0, 0, 1]` rows never materialized.
impl Mul for AffineTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.c * rhs.b,
            self.b * rhs.a + self.d * rhs.b,
            self.a * rhs.c + self.c * rhs.d,
            self.b * rhs.c + self.d * rhs.d,
            self.a * rhs.e + self.c * rhs.f + self.e,
            self.b * rhs.e + self.d * rhs.f + self.f,
        )
    }
}

impl MulAssign for AffineTransform {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<[f32; 6]> for AffineTransform {
    fn from(coefficients: [f32; 6]) -> Self {
        bytemuck::cast(coefficients)
    }
}

impl From<AffineTransform> for [f32; 6] {
    fn from(t: AffineTransform) -> Self {
        t.to_array()
    }
}

/// An affine transform is storage-compatible with the general 2-row,
/// 3-column matrix; the conversion reinterprets the columns as `(a, b)`,
/// `(c, d)`, `(e, f)`.
impl From<Matrix<2, 3>> for AffineTransform {
    fn from(mat: Matrix<2, 3>) -> Self {
        Self { mat }
    }
}

impl From<AffineTransform> for Matrix<2, 3> {
    fn from(t: AffineTransform) -> Self {
        t.mat
    }
}

/// Materializes the implicit `[0, 0, 1]` row.
impl From<AffineTransform> for Mat3 {
    fn from(t: AffineTransform) -> Self {
        Mat3::from_columns([[t.a, t.b, 0.0], [t.c, t.d, 0.0], [t.e, t.f, 1.0]])
    }
}

/// Reduces a 3x3 matrix to the affine representation.
///
/// Fails with [`Error::NotAffine`] when the bottom row is not exactly
/// `[0, 0, 1]`, since that row cannot be stored.
impl TryFrom<Mat3> for AffineTransform {
    type Error = Error;

    fn try_from(m: Mat3) -> Result<Self> {
        if m.row(2) != crate::vec3(0.0, 0.0, 1.0) {
            return Err(Error::NotAffine);
        }
        Ok(Self::new(
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        ))
    }
}

/// Embeds the transform into a 4x4 matrix the way platform (DOM-style)
/// matrices do: the linear part in the top-left 2x2 block, the translation
/// in the fourth column.
impl From<AffineTransform> for Mat4 {
    fn from(t: AffineTransform) -> Self {
        Mat4::from_columns([
            [t.a, t.b, 0.0, 0.0],
            [t.c, t.d, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.e, t.f, 0.0, 1.0],
        ])
    }
}

/// Extracts the 2D transform from a platform-style 4x4 matrix.
///
/// Fails with [`Error::Not2D`] when the matrix is not a pure 2D embedding
/// (any component outside the 2D pattern non-zero, or the Z/W diagonal not
/// 1).
impl TryFrom<Mat4> for AffineTransform {
    type Error = Error;

    fn try_from(m: Mat4) -> Result<Self> {
        let is_2d = m[(2, 0)] == 0.0
            && m[(3, 0)] == 0.0
            && m[(2, 1)] == 0.0
            && m[(3, 1)] == 0.0
            && m.column(2) == crate::vec4(0.0, 0.0, 1.0, 0.0)
            && m[(2, 3)] == 0.0
            && m[(3, 3)] == 1.0;
        if !is_2d {
            return Err(Error::Not2D);
        }
        Ok(Self::new(
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 3)],
            m[(1, 3)],
        ))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffineTransform")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("d", &self.d)
            .field("e", &self.e)
            .field("f", &self.f)
            .finish()
    }
}

/// Formats the coefficients as `[ a, b, c, d, e, f ]`, each value rounded to
/// at most 5 fraction digits (override with the precision field: `{:.2}`).
impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mat, f)
    }
}

impl ApproxEq for AffineTransform {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.mat.abs_diff_eq(&other.mat, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.mat.rel_diff_eq(&other.mat, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.mat.ulps_diff_eq(&other.mat, ulps_tolerance)
    }
}
