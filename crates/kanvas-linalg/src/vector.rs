use std::{array, fmt};

use crate::{buffer, scalar, Mat2, Result};

mod ops;
mod shader;
mod view;

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// An `N`-component vector of `f32` values (N ∈ 2, 3, 4).
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from component values.
/// - [`Vector::splat`] broadcasts one value into every component.
/// - [`Vector::from_fn`] invokes a closure with each component index.
/// - `From` impls accept component arrays as well as mixed scalar/vector
///   tuples: a [`Vec4`] can be built from `(Vec2, f32, f32)`,
///   `(f32, Vec2, f32)`, `(Vec2, Vec2)`, `(Vec3, f32)`, and so on, with each
///   argument filling the next components in order.
/// - [`Vector::ZERO`] and the per-axis unit constants (`Vector::X`,
///   `Vector::Y`, …) provide common values.
///
/// # Component access
///
/// - Components can be read and written as fields `x`, `y`, `z`, `w`
///   (up to the vector's dimension).
/// - The [`Index`]/[`IndexMut`] impls work like on arrays.
/// - [`Vector::as_slice`], [`Vector::as_array`], and [`Vector::into_array`]
///   expose the underlying storage.
///
/// # Storage
///
/// The components are a contiguous `[f32; N]` and the type is
/// `#[repr(transparent)]` and [`bytemuck::Pod`], so vectors can be handed to
/// graphics APIs without copying. [`Vector::from_slice`] and
/// [`Vector::from_bytes`] create *views* into foreign buffers; see the
/// crate-level docs for the aliasing rules.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f32; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// The number of components in this vector type.
    pub const LEN: usize = N;

    /// A vector with every component set to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// Creates a vector with every component set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(Vec3::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    /// Creates a vector by invoking a closure with each component's index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let v = Vec3::from_fn(|i| i as f32 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each component, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|c| c * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(f))
    }

    /// Returns a reference to the underlying components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying components as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Returns the components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this vector into its component array.
    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Views this vector's storage as raw bytes (4 bytes per component,
    /// sequential), the layout graphics APIs expect for direct upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Creates a view over the first `N` floats of `slice`.
    ///
    /// The view aliases `slice`; no copy is made. Fails with
    /// [`Error::OutOfBounds`][crate::Error::OutOfBounds] if the slice holds
    /// fewer than `N` floats.
    pub fn from_slice(slice: &[f32]) -> Result<&Self> {
        buffer::float_prefix(slice)
    }

    /// Mutable variant of [`Vector::from_slice`].
    pub fn from_slice_mut(slice: &mut [f32]) -> Result<&mut Self> {
        buffer::float_prefix_mut(slice)
    }

    /// Creates a view over the `N * 4` bytes of `bytes` starting at
    /// `byte_offset`.
    ///
    /// Fails with [`Error::OutOfBounds`][crate::Error::OutOfBounds] if the
    /// region exceeds the buffer, or
    /// [`Error::Misaligned`][crate::Error::Misaligned] if the region does not
    /// start on a 4-byte boundary.
    pub fn from_bytes(bytes: &[u8], byte_offset: usize) -> Result<&Self> {
        buffer::byte_region(bytes, byte_offset)
    }

    /// Mutable variant of [`Vector::from_bytes`].
    pub fn from_bytes_mut(bytes: &mut [u8], byte_offset: usize) -> Result<&mut Self> {
        buffer::byte_region_mut(bytes, byte_offset)
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Zero-length vectors are not special-cased: normalizing one yields NaN
    /// components, which the caller is responsible for handling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        (0..N).fold(0.0, |acc, i| acc + self[i] * other[i])
    }

    /// Reflects `self` at a surface with the given normal.
    ///
    /// Computes `self - 2 * dot(normal, self) * normal`. `normal` must be a
    /// unit vector for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(1.0, -1.0).reflect(vec2(0.0, 1.0)), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Refracts `self` at a surface with the given normal, for the ratio of
    /// indices of refraction `eta`.
    ///
    /// Follows the shader definition: with `d = dot(normal, self)` and
    /// `k = 1 - eta² * (1 - d²)`, the result is
    /// `self * eta - normal * (eta * d + sqrt(k))`. When `k` is negative the
    /// incidence exceeds the critical angle (total internal reflection) and
    /// the *zero vector* is returned; this is a defined result, not an error.
    pub fn refract(self, normal: Self, eta: f32) -> Self {
        let d = normal.dot(self);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            Self::ZERO
        } else {
            self * eta - normal * (eta * d + k.sqrt())
        }
    }

    /// Component-wise minimum of `self` and `other`.
    ///
    /// The right-hand side may be a vector or a single scalar applied to
    /// every component.
    pub fn min(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Component-wise maximum of `self` and `other`.
    pub fn max(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each component between the corresponding components of `min`
    /// and `max` (either of which may be a scalar).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec3(-2.0, 0.5, 9.0).clamp(0.0, 1.0), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: impl Into<Self>, max: impl Into<Self>) -> Self {
        let (min, max) = (min.into(), max.into());
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Returns a copy with each component rounded to at most
    /// `fraction_digits` decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(1.2345678, 2.0).rounded(3), vec2(1.235, 2.0));
    /// ```
    pub fn rounded(self, fraction_digits: u32) -> Self {
        self.map(|c| scalar::round_to(c, fraction_digits))
    }

    /// Compares two vectors after rounding each component difference to
    /// `fraction_digits` decimal digits.
    ///
    /// The vectors are equal at the given precision if every component
    /// difference rounds to zero. For exact comparison use `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert!(vec2(1.004, 2.0).eq_rounded(vec2(1.006, 2.0), 2));
    /// assert!(!vec2(1.004, 2.0).eq_rounded(vec2(1.016, 2.0), 2));
    /// ```
    pub fn eq_rounded(self, other: Self, fraction_digits: u32) -> bool {
        (0..N).all(|i| {
            scalar::round_to_f64(f64::from(self[i] - other[i]), fraction_digits) == 0.0
        })
    }
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);

    /// Appends another component, yielding a [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: f32) -> Vec3 {
        let [x, y] = self.into_array();
        Vector([x, y, value])
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// Equivalent to the Z coordinate of the cross product of the two
    /// vectors extended with Z=0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(Vec2::X.perp_dot(Vec2::Y), 1.0);
    /// assert_eq!(Vec2::Y.perp_dot(Vec2::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates `self` clockwise in the 2D plane (Y axis up, X axis right).
    pub fn rotate_clockwise(self, radians: f32) -> Self {
        Mat2::from_rotation(-radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane (Y axis up, X axis
    /// right).
    pub fn rotate_counterclockwise(self, radians: f32) -> Self {
        Mat2::from_rotation(radians) * self
    }

    /// Computes the smallest positive angle between `self` and `other`, in
    /// radians.
    ///
    /// Both vectors must have non-zero length for the result to be
    /// meaningful.
    pub fn abs_angle_to(self, other: Self) -> f32 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Computes the signed clockwise rotation in radians needed to align
    /// `self` with `other` (Y axis up, X axis right).
    pub fn signed_angle_to(self, other: Self) -> f32 {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Removes the last component, yielding a [`Vec2`].
    pub fn truncate(self) -> Vec2 {
        let [x, y, ..] = self.into_array();
        Vector([x, y])
    }

    /// Appends another component, yielding a [`Vec4`].
    pub fn extend(self, value: f32) -> Vec4 {
        let [x, y, z] = self.into_array();
        Vector([x, y, z, value])
    }

    /// Overwrites the first two components, keeping `z`.
    pub fn set_xy(&mut self, xy: impl Into<Vec2>) {
        let [x, y] = xy.into().into_array();
        self[0] = x;
        self[1] = y;
    }

    /// Computes the cross product of `self` and `other` (right-handed).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the smallest positive angle between `self` and `other`, in
    /// radians.
    pub fn abs_angle_to(self, other: Self) -> f32 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// Removes the last component, yielding a [`Vec3`].
    pub fn truncate(self) -> Vec3 {
        let [x, y, z, ..] = self.into_array();
        Vector([x, y, z])
    }

    /// Creates a homogeneous *point* (`w = 1`), which translation affects.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(Vec4::from_point(vec3(1.0, 2.0, 3.0)), vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn from_point(p: Vec3) -> Self {
        p.extend(1.0)
    }

    /// Creates a homogeneous *direction* (`w = 0`), which translation leaves
    /// unchanged.
    pub fn from_direction(d: Vec3) -> Self {
        d.extend(0.0)
    }

    /// Overwrites the first two components, keeping `z` and `w`.
    pub fn set_xy(&mut self, xy: impl Into<Vec2>) {
        let [x, y] = xy.into().into_array();
        self[0] = x;
        self[1] = y;
    }

    /// Overwrites the first three components, keeping `w`.
    pub fn set_xyz(&mut self, xyz: impl Into<Vec3>) {
        let [x, y, z] = xyz.into().into_array();
        self[0] = x;
        self[1] = y;
        self[2] = z;
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

/// Broadcast conversion: a scalar converts to a vector with the value in
/// every component. This is what lets the two-operand math methods accept
/// either a scalar or a vector argument.
impl<const N: usize> From<f32> for Vector<N> {
    #[inline]
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector([x, y])
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector([x, y, z])
    }
}

impl From<(Vec2, f32)> for Vec3 {
    fn from((xy, z): (Vec2, f32)) -> Self {
        let [x, y] = xy.into_array();
        Vector([x, y, z])
    }
}

impl From<(f32, Vec2)> for Vec3 {
    fn from((x, yz): (f32, Vec2)) -> Self {
        let [y, z] = yz.into_array();
        Vector([x, y, z])
    }
}

impl From<(f32, f32, f32, f32)> for Vec4 {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Vector([x, y, z, w])
    }
}

impl From<(Vec2, f32, f32)> for Vec4 {
    fn from((xy, z, w): (Vec2, f32, f32)) -> Self {
        let [x, y] = xy.into_array();
        Vector([x, y, z, w])
    }
}

impl From<(f32, Vec2, f32)> for Vec4 {
    fn from((x, yz, w): (f32, Vec2, f32)) -> Self {
        let [y, z] = yz.into_array();
        Vector([x, y, z, w])
    }
}

impl From<(f32, f32, Vec2)> for Vec4 {
    fn from((x, y, zw): (f32, f32, Vec2)) -> Self {
        let [z, w] = zw.into_array();
        Vector([x, y, z, w])
    }
}

impl From<(Vec2, Vec2)> for Vec4 {
    fn from((xy, zw): (Vec2, Vec2)) -> Self {
        let [x, y] = xy.into_array();
        let [z, w] = zw.into_array();
        Vector([x, y, z, w])
    }
}

impl From<(Vec3, f32)> for Vec4 {
    fn from((xyz, w): (Vec3, f32)) -> Self {
        let [x, y, z] = xyz.into_array();
        Vector([x, y, z, w])
    }
}

impl From<(f32, Vec3)> for Vec4 {
    fn from((x, yzw): (f32, Vec3)) -> Self {
        let [y, z, w] = yzw.into_array();
        Vector([x, y, z, w])
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for component in &self.0 {
            tup.field(component);
        }
        tup.finish()
    }
}

/// Formats the vector as `[ v0, v1, … ]` with each value rounded to at most
/// 5 fraction digits (override with the precision field: `{:.2}`).
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(5) as u32;
        f.write_str("[ ")?;
        for (i, component) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", scalar::round_to_f64(f64::from(*component), digits))?;
        }
        f.write_str(" ]")
    }
}

impl<const N: usize> AsRef<[f32]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl<const N: usize> AsRef<[f32; N]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32; N] {
        &self.0
    }
}

impl<const N: usize> AsMut<[f32]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl<const N: usize> AsMut<[f32; N]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four components.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3::X.x, 1.0);
        assert_eq!(Vec3::X[0], 1.0);
        assert_eq!(Vec3::X[1], 0.0);
        assert_eq!(Vec3::X.y, 0.0);
        assert_eq!(Vec4::W.w, 1.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v.x, 777.0);
        assert_eq!(v[0], 777.0);
        assert_eq!(v.y, 1.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn construction_overloads() {
        assert_eq!(Vec4::from((vec2(10.0, 20.0), 3.0, 4.0)), vec4(10.0, 20.0, 3.0, 4.0));
        assert_eq!(Vec4::from((1.0, vec2(20.0, 30.0), 4.0)), vec4(1.0, 20.0, 30.0, 4.0));
        assert_eq!(Vec4::from((1.0, 2.0, vec2(30.0, 40.0))), vec4(1.0, 2.0, 30.0, 40.0));
        assert_eq!(
            Vec4::from((vec2(1.0, 2.0), vec2(3.0, 4.0))),
            vec4(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(Vec4::from((vec3(1.0, 2.0, 3.0), 4.0)), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vec3::from((5.0, vec2(6.0, 7.0))), vec3(5.0, 6.0, 7.0));
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(2.0), Vec3::splat(2.0));
    }

    #[test]
    fn prefix_setters() {
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        v.set_xy(vec2(9.0, 8.0));
        assert_eq!(v, vec4(9.0, 8.0, 3.0, 4.0));
        v.set_xyz(vec3(0.0, 0.5, 1.0));
        assert_eq!(v, vec4(0.0, 0.5, 1.0, 4.0));
        v.set_xyz(7.0);
        assert_eq!(v, vec4(7.0, 7.0, 7.0, 4.0));
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
        assert_eq!(vec3(-1.0, 2.0, 3.5).extend(99.0), vec4(-1.0, 2.0, 3.5, 99.0));
        assert_eq!(vec4(-1.0, 2.0, 3.5, 99.0).truncate(), vec3(-1.0, 2.0, 3.5));
        assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4::W), "[ 0, 0, 0, 1 ]");
        assert_eq!(format!("{}", vec2(1.25, -3.0)), "[ 1.25, -3 ]");
        assert_eq!(format!("{}", vec2(0.1234567, 0.0)), "[ 0.12346, 0 ]");
        assert_eq!(format!("{:.2}", vec2(0.1234567, 0.0)), "[ 0.12, 0 ]");
        assert_eq!(format!("{:?}", Vec4::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn length_and_normalize() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec3(0.0, 0.0, -2.0).normalize(), vec3(0.0, 0.0, -1.0));

        // Zero-length normalization produces NaN, not a panic.
        let nan = Vec2::ZERO.normalize();
        assert!(nan.x.is_nan() && nan.y.is_nan());
    }

    #[test]
    fn reflect_refract() {
        assert_eq!(vec2(1.0, -1.0).reflect(vec2(0.0, 1.0)), vec2(1.0, 1.0));

        // eta == 1 means no bending at all.
        assert_eq!(vec2(0.0, -1.0).refract(vec2(0.0, 1.0), 1.0), vec2(0.0, -1.0));

        // Total internal reflection yields the zero vector.
        assert_eq!(
            vec2(-9.0, -10.0).refract(vec2(-0.784046, 0.620703), -18.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn rounded_equality() {
        assert!(vec2(1.004, 2.0).eq_rounded(vec2(1.006, 2.0), 2));
        assert!(!vec2(1.004, 2.0).eq_rounded(vec2(1.016, 2.0), 2));
        assert!(vec2(1.004, 2.0).eq_rounded(vec2(1.004, 2.0), 7));
        // Exact equality stays exact.
        assert_ne!(vec2(1.004, 2.0), vec2(1.006, 2.0));
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2::Y.rotate_clockwise(TAU / 4.0), Vec2::X);
        assert_approx_eq!(Vec2::Y.rotate_clockwise(TAU / 2.0), -Vec2::Y);
        assert_approx_eq!(Vec2::X.rotate_counterclockwise(TAU / 4.0), Vec2::Y);
    }

    #[test]
    fn angles() {
        assert_approx_eq!(Vec2::Y.abs_angle_to(Vec2::X), TAU / 4.0);
        assert_approx_eq!(Vec3::Y.abs_angle_to(-Vec3::Y), TAU / 2.0);
        assert_approx_eq!(Vec2::Y.signed_angle_to(Vec2::X), TAU / 4.0);
        assert_approx_eq!(Vec2::X.signed_angle_to(Vec2::Y), -TAU / 4.0);
    }

    #[test]
    fn homogeneous() {
        assert_eq!(Vec4::from_point(vec3(1.0, 2.0, 3.0)).w, 1.0);
        assert_eq!(Vec4::from_direction(vec3(1.0, 2.0, 3.0)).w, 0.0);
    }
}
