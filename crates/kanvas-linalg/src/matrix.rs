use std::{array, fmt};

use crate::{buffer, scalar, Result, Vec2, Vec3, Vector};

mod ops;

/// A 2x2 matrix.
pub type Mat2 = Matrix<2, 2>;
/// A 3x3 matrix.
pub type Mat3 = Matrix<3, 3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4, 4>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3 = Matrix<2, 3>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2 = Matrix<3, 2>;

/// A column-major matrix with `R` rows and `C` columns of `f32` components.
///
/// # Storage
///
/// Components are stored column-major in a contiguous `[[f32; R]; C]`: the
/// component at column `x`, row `y` lives at linear offset `y + x * R`. The
/// type is `#[repr(transparent)]` and [`bytemuck::Pod`], so matrices upload
/// to graphics APIs without copying, and [`Matrix::from_slice`] /
/// [`Matrix::from_bytes`] create views into foreign buffers.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from
///   arrays of row or column vectors.
/// - [`Matrix::from_fn`] invokes a closure with each component's row and
///   column.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given
///   diagonal (zero elsewhere).
/// - [`Matrix::resize`] and the `From` impls between the square sizes
///   widen or narrow a matrix, padding missing rows/columns *from the
///   identity matrix* (1 on the filled diagonal, 0 elsewhere), so the
///   original linear subspace is preserved.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] provide the usual constants.
///
/// # Element access
///
/// [`Matrix`] implements [`Index`]/[`IndexMut`] for `(usize, usize)` tuples;
/// the first element is the *row*, the second the *column*, both 0-based.
/// [`Matrix::get`] and [`Matrix::get_mut`] are the checked variants.
///
/// ```
/// # use kanvas_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0]
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<const R: usize, const C: usize>([[f32; R]; C]);

unsafe impl<const R: usize, const C: usize> bytemuck::Zeroable for Matrix<R, C> {}
unsafe impl<const R: usize, const C: usize> bytemuck::Pod for Matrix<R, C> {}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// The smaller dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// A matrix with every component set to 0.
    pub const ZERO: Self = Self([[0.0; R]; C]);

    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying a vector or matrix with it returns the operand unchanged.
    /// Assigning it is also how a matrix is reset in place:
    /// `*m = Matrix::IDENTITY`.
    pub const IDENTITY: Self = {
        let mut cols = [[0.0f32; R]; C];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            cols[i][i] = 1.0;
            i += 1;
        }
        Self(cols)
    };

    /// The number of rows in this matrix type.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// The number of columns in this matrix type.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row as f32 * 10.0 + col as f32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each component, returning a new matrix.
    #[inline]
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 3.0],
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<C, R> {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the component at `(row, col)`, or [`None`] if
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f32> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the component at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f32> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the column at `index` as a vector.
    pub fn column(&self, index: usize) -> Vector<R> {
        self.0[index].into()
    }

    /// Returns the row at `index` as a vector.
    pub fn row(&self, index: usize) -> Vector<C> {
        Vector::from_fn(|col| self[(index, col)])
    }

    /// Returns a matrix with the contents of `self`, but a potentially
    /// different size.
    ///
    /// Components not present in `self` are filled *from the identity
    /// matrix*: 1 on the diagonal, 0 elsewhere, so widening embeds the
    /// original linear map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.resize::<3, 3>(), Matrix::from_rows([
    ///     [1.0, 2.0, 0.0],
    ///     [3.0, 4.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<R2, C2> {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else if row == col {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Returns the flat component slice in storage (column-major) order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.0)
    }

    /// Returns the flat component slice in storage (column-major) order,
    /// mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(&mut self.0)
    }

    /// Views this matrix's storage as raw bytes (4 bytes per component,
    /// column-major), the layout graphics APIs expect for direct upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Creates a view over the first `R * C` floats of `slice`, interpreted
    /// in column-major order.
    ///
    /// The view aliases `slice`; no copy is made. Fails with
    /// [`Error::OutOfBounds`][crate::Error::OutOfBounds] if the slice is too
    /// short.
    pub fn from_slice(slice: &[f32]) -> Result<&Self> {
        buffer::float_prefix(slice)
    }

    /// Mutable variant of [`Matrix::from_slice`].
    pub fn from_slice_mut(slice: &mut [f32]) -> Result<&mut Self> {
        buffer::float_prefix_mut(slice)
    }

    /// Creates a view over the `R * C * 4` bytes of `bytes` starting at
    /// `byte_offset`.
    ///
    /// Fails with [`Error::OutOfBounds`][crate::Error::OutOfBounds] if the
    /// region exceeds the buffer, or
    /// [`Error::Misaligned`][crate::Error::Misaligned] if the region does not
    /// start on a 4-byte boundary.
    pub fn from_bytes(bytes: &[u8], byte_offset: usize) -> Result<&Self> {
        buffer::byte_region(bytes, byte_offset)
    }

    /// Mutable variant of [`Matrix::from_bytes`].
    pub fn from_bytes_mut(bytes: &mut [u8], byte_offset: usize) -> Result<&mut Self> {
        buffer::byte_region_mut(bytes, byte_offset)
    }

    /// Component-wise multiplication with `other` (a matrix, or a scalar
    /// applied to every component).
    ///
    /// Not to be confused with the matrix product, [`Mul`](std::ops::Mul).
    pub fn comp_mul(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_fn(|row, col| self[(row, col)] * other[(row, col)])
    }

    /// Component-wise division by `other` (a matrix, or a scalar applied to
    /// every component).
    pub fn comp_div(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_fn(|row, col| self[(row, col)] / other[(row, col)])
    }

    /// Returns a copy with each component rounded to at most
    /// `fraction_digits` decimal digits.
    pub fn rounded(self, fraction_digits: u32) -> Self {
        self.map(|c| scalar::round_to(c, fraction_digits))
    }

    /// Compares two matrices after rounding each component difference to
    /// `fraction_digits` decimal digits (see
    /// [`Vector::eq_rounded`][crate::Vector::eq_rounded]).
    pub fn eq_rounded(self, other: Self, fraction_digits: u32) -> bool {
        (0..C).all(|col| {
            (0..R).all(|row| {
                scalar::round_to_f64(
                    f64::from(self[(row, col)] - other[(row, col)]),
                    fraction_digits,
                ) == 0.0
            })
        })
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Returns a [`Vector`] holding the diagonal of this square matrix.
    pub fn into_diagonal(self) -> Vector<N> {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal, with zero outside of it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let diag = Matrix::from_diagonal([1.0, 2.0, 3.0]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { 0.0 })
    }

    /// Returns the *trace* of the matrix (the sum of the diagonal).
    pub fn trace(&self) -> f32 {
        (0..N).fold(0.0, |acc, i| acc + self[(i, i)])
    }

    /// Returns `true` if this matrix exactly equals the identity matrix.
    ///
    /// The comparison is exact, not tolerance-based.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Matrix<2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Returns the [adjugate] (the transposed cofactor matrix).
    ///
    /// Dividing it by the determinant yields the inverse; it is also exposed
    /// directly because it stays finite where the inverse does not.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Self::from_columns([[d, -c], [-b, a]])
    }

    /// Inverts this matrix.
    ///
    /// A singular matrix (determinant 0) is not an error: the division
    /// produces non-finite components that propagate into any further use.
    /// Use [`Matrix::try_invert`] to detect singularity instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// assert_eq!(Mat2::IDENTITY.invert(), Mat2::IDENTITY);
    /// ```
    pub fn invert(self) -> Self {
        self.adjugate() * self.determinant().recip()
    }

    /// Inverts this matrix, returning [`None`] if it is singular.
    pub fn try_invert(self) -> Option<Self> {
        let det = self.determinant();
        (det != 0.0).then(|| self.adjugate() * det.recip())
    }

    /// Multiplies by the inverse of `other` on the right: `self × other⁻¹`.
    ///
    /// Computed from `other`'s adjugate and determinant directly, without
    /// materializing the intermediate inverse. Singular `other` propagates
    /// non-finite components, as with [`Matrix::invert`].
    pub fn div(self, other: Self) -> Self {
        self * other.adjugate() * other.determinant().recip()
    }

    /// Creates a rotation matrix for a counterclockwise rotation in the XY
    /// plane (Y axis up, X axis right).
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }

    /// Creates a scaling matrix (a scalar scales uniformly).
    pub fn from_scale(scale: impl Into<Vec2>) -> Self {
        Self::from_diagonal(scale.into())
    }

    /// Rotates by `radians` counterclockwise: `self × rotation(radians)`.
    pub fn rotate(self, radians: f32) -> Self {
        self * Self::from_rotation(radians)
    }

    /// Scales per axis (or uniformly, for a scalar): `self × scaling(s)`.
    pub fn scale(self, scale: impl Into<Vec2>) -> Self {
        self * Self::from_scale(scale)
    }
}

impl Matrix<3, 3> {
    /// Returns the [determinant] of the matrix, via the six-term closed-form
    /// expansion.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f32 {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Returns the [adjugate] (the transposed cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        Self::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ])
    }

    /// Inverts this matrix.
    ///
    /// A singular matrix (determinant 0) is not an error: the division
    /// produces non-finite components that propagate into any further use.
    /// Use [`Matrix::try_invert`] to detect singularity instead.
    pub fn invert(self) -> Self {
        self.adjugate() * self.determinant().recip()
    }

    /// Inverts this matrix, returning [`None`] if it is singular.
    pub fn try_invert(self) -> Option<Self> {
        let det = self.determinant();
        (det != 0.0).then(|| self.adjugate() * det.recip())
    }

    /// Multiplies by the inverse of `other` on the right: `self × other⁻¹`,
    /// computed from `other`'s adjugate and determinant directly.
    pub fn div(self, other: Self) -> Self {
        self * other.adjugate() * other.determinant().recip()
    }

    /// Creates a 2D homogeneous translation matrix.
    ///
    /// The translation occupies the last column; multiplying a homogeneous
    /// `vec3(x, y, 1)` applies it.
    pub fn from_translation(translation: impl Into<Vec2>) -> Self {
        let [x, y] = translation.into().into_array();
        Self::from_columns([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [x, y, 1.0]])
    }

    /// Creates a scaling matrix (a scalar scales uniformly).
    pub fn from_scale(scale: impl Into<Vec3>) -> Self {
        Self::from_diagonal(scale.into())
    }

    /// Creates a rotation matrix around `axis` (which must be normalized),
    /// by Rodrigues' rotation formula.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let [x, y, z] = axis.into_array();
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        Self::from_columns([
            [t * x * x + c, t * x * y + s * z, t * x * z - s * y],
            [t * x * y - s * z, t * y * y + c, t * y * z + s * x],
            [t * x * z + s * y, t * y * z - s * x, t * z * z + c],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn from_rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_columns([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn from_rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_columns([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn from_rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_columns([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Applies a 2D homogeneous translation: `self × translation(t)`.
    pub fn translate(self, translation: impl Into<Vec2>) -> Self {
        self * Self::from_translation(translation)
    }

    /// Scales per axis (or uniformly, for a scalar): `self × scaling(s)`.
    pub fn scale(self, scale: impl Into<Vec3>) -> Self {
        self * Self::from_scale(scale)
    }

    /// Rotates around `axis` (normalized): `self × rotation(axis, radians)`.
    pub fn rotate(self, axis: Vec3, radians: f32) -> Self {
        self * Self::from_axis_angle(axis, radians)
    }

    /// Rotates around the X axis: `self × rotation_x(radians)`.
    pub fn rotate_x(self, radians: f32) -> Self {
        self * Self::from_rotation_x(radians)
    }

    /// Rotates around the Y axis: `self × rotation_y(radians)`.
    pub fn rotate_y(self, radians: f32) -> Self {
        self * Self::from_rotation_y(radians)
    }

    /// Rotates around the Z axis: `self × rotation_z(radians)`.
    pub fn rotate_z(self, radians: f32) -> Self {
        self * Self::from_rotation_z(radians)
    }
}

impl Matrix<4, 4> {
    /// The six 2x2 sub-products of rows 0-1 (`s`) and rows 2-3 (`c`), shared
    /// by the determinant and adjugate expansions.
    fn sub_products(&self) -> ([f32; 6], [f32; 6]) {
        let m = self;
        let s = [
            m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
            m[(0, 0)] * m[(1, 2)] - m[(0, 2)] * m[(1, 0)],
            m[(0, 0)] * m[(1, 3)] - m[(0, 3)] * m[(1, 0)],
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            m[(0, 1)] * m[(1, 3)] - m[(0, 3)] * m[(1, 1)],
            m[(0, 2)] * m[(1, 3)] - m[(0, 3)] * m[(1, 2)],
        ];
        let c = [
            m[(2, 0)] * m[(3, 1)] - m[(2, 1)] * m[(3, 0)],
            m[(2, 0)] * m[(3, 2)] - m[(2, 2)] * m[(3, 0)],
            m[(2, 0)] * m[(3, 3)] - m[(2, 3)] * m[(3, 0)],
            m[(2, 1)] * m[(3, 2)] - m[(2, 2)] * m[(3, 1)],
            m[(2, 1)] * m[(3, 3)] - m[(2, 3)] * m[(3, 1)],
            m[(2, 2)] * m[(3, 3)] - m[(2, 3)] * m[(3, 2)],
        ];
        (s, c)
    }

    fn adjugate_from(&self, s: [f32; 6], c: [f32; 6]) -> Self {
        let m = self;
        Self::from_rows([
            [
                m[(1, 1)] * c[5] - m[(1, 2)] * c[4] + m[(1, 3)] * c[3],
                -(m[(0, 1)] * c[5] - m[(0, 2)] * c[4] + m[(0, 3)] * c[3]),
                m[(3, 1)] * s[5] - m[(3, 2)] * s[4] + m[(3, 3)] * s[3],
                -(m[(2, 1)] * s[5] - m[(2, 2)] * s[4] + m[(2, 3)] * s[3]),
            ],
            [
                -(m[(1, 0)] * c[5] - m[(1, 2)] * c[2] + m[(1, 3)] * c[1]),
                m[(0, 0)] * c[5] - m[(0, 2)] * c[2] + m[(0, 3)] * c[1],
                -(m[(3, 0)] * s[5] - m[(3, 2)] * s[2] + m[(3, 3)] * s[1]),
                m[(2, 0)] * s[5] - m[(2, 2)] * s[2] + m[(2, 3)] * s[1],
            ],
            [
                m[(1, 0)] * c[4] - m[(1, 1)] * c[2] + m[(1, 3)] * c[0],
                -(m[(0, 0)] * c[4] - m[(0, 1)] * c[2] + m[(0, 3)] * c[0]),
                m[(3, 0)] * s[4] - m[(3, 1)] * s[2] + m[(3, 3)] * s[0],
                -(m[(2, 0)] * s[4] - m[(2, 1)] * s[2] + m[(2, 3)] * s[0]),
            ],
            [
                -(m[(1, 0)] * c[3] - m[(1, 1)] * c[1] + m[(1, 2)] * c[0]),
                m[(0, 0)] * c[3] - m[(0, 1)] * c[1] + m[(0, 2)] * c[0],
                -(m[(3, 0)] * s[3] - m[(3, 1)] * s[1] + m[(3, 2)] * s[0]),
                m[(2, 0)] * s[3] - m[(2, 1)] * s[1] + m[(2, 2)] * s[0],
            ],
        ])
    }

    /// Returns the [determinant] of the matrix, via the 24-term closed-form
    /// expansion over shared 2x2 sub-products.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kanvas_linalg::*;
    /// let m = Mat4::from_columns([
    ///     [6.0, 3.0, 1.0, 7.0],
    ///     [20.0, -3.0, 5.0, 8.0],
    ///     [30.0, 12.0, -10.0, 4.0],
    ///     [9.0, -5.0, -9.0, 2.0],
    /// ]);
    /// assert_eq!(m.determinant(), 28346.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.sub_products();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Returns the [adjugate] (the transposed cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let (s, c) = self.sub_products();
        self.adjugate_from(s, c)
    }

    /// Inverts this matrix.
    ///
    /// A singular matrix (determinant 0) is not an error: the division
    /// produces non-finite components that propagate into any further use.
    /// Use [`Matrix::try_invert`] to detect singularity instead.
    pub fn invert(self) -> Self {
        let (s, c) = self.sub_products();
        let det =
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        self.adjugate_from(s, c) * det.recip()
    }

    /// Inverts this matrix, returning [`None`] if it is singular.
    pub fn try_invert(self) -> Option<Self> {
        let det = self.determinant();
        (det != 0.0).then(|| self.adjugate() * det.recip())
    }

    /// Multiplies by the inverse of `other` on the right: `self × other⁻¹`,
    /// computed from `other`'s adjugate and determinant directly.
    pub fn div(self, other: Self) -> Self {
        self * other.adjugate() * other.determinant().recip()
    }

    /// Creates a translation matrix (translation in the last column).
    pub fn from_translation(translation: impl Into<Vec3>) -> Self {
        let [x, y, z] = translation.into().into_array();
        Self::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a scaling matrix (a scalar scales uniformly).
    pub fn from_scale(scale: impl Into<Vec3>) -> Self {
        let [x, y, z] = scale.into().into_array();
        Self::from_diagonal([x, y, z, 1.0])
    }

    /// Creates a rotation matrix around `axis` (which must be normalized).
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        Matrix::<3, 3>::from_axis_angle(axis, radians).resize()
    }

    /// Creates a rotation matrix around the X axis.
    pub fn from_rotation_x(radians: f32) -> Self {
        Matrix::<3, 3>::from_rotation_x(radians).resize()
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn from_rotation_y(radians: f32) -> Self {
        Matrix::<3, 3>::from_rotation_y(radians).resize()
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn from_rotation_z(radians: f32) -> Self {
        Matrix::<3, 3>::from_rotation_z(radians).resize()
    }

    /// Applies a translation: `self × translation(t)`.
    pub fn translate(self, translation: impl Into<Vec3>) -> Self {
        self * Self::from_translation(translation)
    }

    /// Scales per axis (or uniformly, for a scalar): `self × scaling(s)`.
    pub fn scale(self, scale: impl Into<Vec3>) -> Self {
        self * Self::from_scale(scale)
    }

    /// Rotates around `axis` (normalized): `self × rotation(axis, radians)`.
    pub fn rotate(self, axis: Vec3, radians: f32) -> Self {
        self * Self::from_axis_angle(axis, radians)
    }

    /// Rotates around the X axis: `self × rotation_x(radians)`.
    pub fn rotate_x(self, radians: f32) -> Self {
        self * Self::from_rotation_x(radians)
    }

    /// Rotates around the Y axis: `self × rotation_y(radians)`.
    pub fn rotate_y(self, radians: f32) -> Self {
        self * Self::from_rotation_y(radians)
    }

    /// Rotates around the Z axis: `self × rotation_z(radians)`.
    pub fn rotate_z(self, radians: f32) -> Self {
        self * Self::from_rotation_z(radians)
    }
}

/// Widening conversion, padding the missing row/column from the identity.
impl From<Matrix<2, 2>> for Matrix<3, 3> {
    fn from(m: Matrix<2, 2>) -> Self {
        m.resize()
    }
}

/// Widening conversion, padding the missing rows/columns from the identity.
impl From<Matrix<2, 2>> for Matrix<4, 4> {
    fn from(m: Matrix<2, 2>) -> Self {
        m.resize()
    }
}

/// Widening conversion, padding the missing row/column from the identity.
impl From<Matrix<3, 3>> for Matrix<4, 4> {
    fn from(m: Matrix<3, 3>) -> Self {
        m.resize()
    }
}

/// Narrowing conversion, keeping the top-left 2x2 block.
impl From<Matrix<3, 3>> for Matrix<2, 2> {
    fn from(m: Matrix<3, 3>) -> Self {
        m.resize()
    }
}

/// Narrowing conversion, keeping the top-left 2x2 block.
impl From<Matrix<4, 4>> for Matrix<2, 2> {
    fn from(m: Matrix<4, 4>) -> Self {
        m.resize()
    }
}

/// Narrowing conversion, keeping the top-left 3x3 block.
impl From<Matrix<4, 4>> for Matrix<3, 3> {
    fn from(m: Matrix<4, 4>) -> Self {
        m.resize()
    }
}

/// Broadcast conversion: a scalar converts to a matrix with the value in
/// every component. Used by [`Matrix::comp_mul`] and [`Matrix::comp_div`]
/// to accept scalar operands.
impl<const R: usize, const C: usize> From<f32> for Matrix<R, C> {
    #[inline]
    fn from(value: f32) -> Self {
        Self([[value; R]; C])
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const R: usize, const C: usize>(&'a Matrix<R, C>, usize);
        impl<'a, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Formats the flat component list in storage (column-major) order as
/// `[ m0, m1, … ]`, each value rounded to at most 5 fraction digits
/// (override with the precision field: `{:.2}`).
impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(5) as u32;
        f.write_str("[ ")?;
        for (i, component) in self.as_slice().iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", scalar::round_to_f64(f64::from(*component), digits))?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{assert_approx_eq, vec2, vec3, Vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Mat2x3::from_columns([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]),
        );
    }

    #[test]
    fn storage_is_column_major() {
        let m = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        // Offset of (row y, col x) is y + x * R.
        assert_eq!(m.as_slice()[1 + 2 * 2], m[(1, 2)]);
    }

    #[test]
    fn diagonal_and_trace() {
        let mat = Matrix::from_diagonal([1.0, 2.0]);
        assert_eq!(mat, Matrix::from_rows([[1.0, 0.0], [0.0, 2.0]]));
        assert_eq!(mat.into_diagonal(), [1.0, 2.0]);
        assert_eq!(mat.trace(), 3.0);
        assert_eq!(Mat3::IDENTITY.trace(), 3.0);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        // Display prints the flat column-major storage.
        assert_eq!(format!("{}", mat), "[ 0, 2, 1, 3 ]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert!(Mat4::IDENTITY.is_identity());
        assert!(!Mat4::ZERO.is_identity());
    }

    #[rustfmt::skip]
    #[test]
    fn resize_pads_from_identity() {
        let mat = Matrix::from_rows([
            [1.0, 2.0],
            [3.0, 4.0],
        ]);

        // Widening pads from the identity, not with zeroes.
        let larger: Mat4 = mat.into();
        assert_eq!(larger, Matrix::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]));

        let smaller: Mat2 = larger.into();
        assert_eq!(smaller, mat);

        let rect = mat.resize::<1, 2>();
        assert_eq!(rect, Matrix::from_rows([
            [1.0, 2.0]
        ]));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        let vec = vec2(4.0, 5.0);
        assert_eq!(mat * vec, [4.0 * 0.0 + 5.0 * 1.0, 4.0 * 2.0 + 5.0 * 3.0]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
            [7.0, 8.0],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2::ZERO.determinant(), 0.0);
        assert_eq!(Mat3::ZERO.determinant(), 0.0);
        assert_eq!(Mat4::ZERO.determinant(), 0.0);
        assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(m3.determinant(), 54.0);
        assert_eq!(m3.transpose().determinant(), 54.0);

        let m4 = Mat4::from_columns([
            [6.0, 3.0, 1.0, 7.0],
            [20.0, -3.0, 5.0, 8.0],
            [30.0, 12.0, -10.0, 4.0],
            [9.0, -5.0, -9.0, 2.0],
        ]);
        assert_eq!(m4.determinant(), 28346.0);
    }

    #[test]
    fn determinant_is_multiplicative() {
        let a = Mat3::from_rows([[2.0, 1.0, 0.5], [0.0, 3.0, 1.0], [1.0, -1.0, 2.0]]);
        let b = Mat3::from_rows([[1.0, 0.0, 2.0], [2.0, -1.0, 1.0], [0.5, 1.0, 1.0]]);
        assert_approx_eq!((a * b).determinant(), a.determinant() * b.determinant()).rel(1e-5);

        let a4: Mat4 = a.into();
        let b4: Mat4 = b.into();
        assert_approx_eq!((a4 * b4).determinant(), a4.determinant() * b4.determinant()).rel(1e-5);
    }

    #[test]
    fn invert_round_trip() {
        let m4 = Mat4::from_columns([
            [6.0, 3.0, 1.0, 7.0],
            [20.0, -3.0, 5.0, 8.0],
            [30.0, 12.0, -10.0, 4.0],
            [9.0, -5.0, -9.0, 2.0],
        ]);
        let id = m4.invert() * m4;
        assert!(id.eq_rounded(Mat4::IDENTITY, 4));
        assert_approx_eq!(m4.invert().invert(), m4).abs(1e-2);

        let m2 = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_approx_eq!(m2.invert() * m2, Mat2::IDENTITY).abs(1e-6);
        assert_eq!(
            m2.invert(),
            Mat2::from_rows([[0.6, -0.7], [-0.2, 0.4]])
        );

        let m3 = Mat3::from_rows([[-2.0, -1.0, 2.0], [2.0, 1.0, 4.0], [-3.0, 3.0, -1.0]]);
        assert_approx_eq!(m3.invert() * m3, Mat3::IDENTITY).abs(1e-6);
    }

    #[test]
    fn adjugate_is_unscaled_inverse() {
        let m = Mat3::from_rows([[-2.0, -1.0, 2.0], [2.0, 1.0, 4.0], [-3.0, 3.0, -1.0]]);
        assert_approx_eq!(m.adjugate() * m.determinant().recip(), m.invert());

        let m4 = Mat4::from_rotation_z(0.5).translate(vec3(1.0, 2.0, 3.0));
        assert_approx_eq!(m4.adjugate() * m4.determinant().recip(), m4.invert());
    }

    #[test]
    fn singular_inversion_propagates_non_finite() {
        let singular = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.determinant(), 0.0);
        let inv = singular.invert();
        assert!(inv.as_slice().iter().all(|c| !c.is_finite()));
        assert_eq!(singular.try_invert(), None);

        assert!(Mat3::ZERO.try_invert().is_none());
        assert!(Mat4::ZERO.try_invert().is_none());
        assert!(Mat4::IDENTITY.try_invert().is_some());
    }

    #[test]
    fn division_identity() {
        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2::from_rows([[2.0, 0.0], [1.0, 3.0]]);
        assert_approx_eq!(a.div(b) * b, a).abs(1e-5);

        let a3: Mat3 = a.into();
        let b3: Mat3 = b.into();
        assert_approx_eq!(a3.div(b3) * b3, a3).abs(1e-5);

        let a4 = Mat4::from_axis_angle(Vec3::Z, 1.0).scale(vec3(2.0, 3.0, 4.0));
        let b4 = Mat4::from_translation(vec3(5.0, -1.0, 0.5));
        assert_approx_eq!(a4.div(b4) * b4, a4).abs(1e-4);
        assert_approx_eq!(a4.div(a4), Mat4::IDENTITY).abs(1e-5);
    }

    #[test]
    fn transpose_involution() {
        let m = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.transpose().transpose(), m);

        let m4 = Mat4::from_fn(|r, c| (r * 4 + c) as f32);
        assert_eq!(m4.transpose().transpose(), m4);
    }

    #[test]
    fn rotation_2d() {
        let r = Mat2::from_rotation(0.0);
        assert_eq!(r, r.invert());

        let r = Mat2::from_rotation(PI);
        assert_approx_eq!(r, r.invert()).abs(1e-6);

        assert_approx_eq!(Mat2::from_rotation(TAU / 4.0) * vec2(1.0, 0.0), vec2(0.0, 1.0));

        // Composing via `rotate` equals multiplying by the generator.
        let m = Mat2::from_rotation(0.3);
        assert_approx_eq!(m.rotate(0.4), m * Mat2::from_rotation(0.4));
    }

    #[test]
    fn rotation_3d() {
        // Rodrigues around Z must agree with the axis-aligned specialization.
        assert_approx_eq!(
            Mat3::from_axis_angle(Vec3::Z, 1.2),
            Mat3::from_rotation_z(1.2)
        );
        assert_approx_eq!(
            Mat3::from_axis_angle(Vec3::X, 0.7),
            Mat3::from_rotation_x(0.7)
        );
        assert_approx_eq!(
            Mat3::from_axis_angle(Vec3::Y, -0.4),
            Mat3::from_rotation_y(-0.4)
        );

        assert_approx_eq!(Mat3::from_rotation_x(FRAC_PI_2) * Vec3::Y, Vec3::Z);
        assert_approx_eq!(Mat3::from_rotation_z(FRAC_PI_2) * Vec3::X, Vec3::Y);

        // A rotation matrix is orthonormal: inverse == transpose.
        let r = Mat3::from_axis_angle(vec3(1.0, 2.0, 2.0).normalize(), 0.9);
        assert_approx_eq!(r.invert(), r.transpose()).abs(1e-6);
        assert_approx_eq!(r.determinant(), 1.0).abs(1e-6);
    }

    #[test]
    fn translation_and_scale() {
        let t = Mat3::from_translation(vec2(10.0, 20.0));
        assert_eq!(t * vec3(1.0, 2.0, 1.0), vec3(11.0, 22.0, 1.0));
        // Directions (w=0) are unaffected.
        assert_eq!(t * vec3(1.0, 2.0, 0.0), vec3(1.0, 2.0, 0.0));

        let t4 = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(
            t4 * crate::Vec4::from_point(vec3(0.0, 0.0, 0.0)),
            crate::vec4(1.0, 2.0, 3.0, 1.0)
        );

        let s = Mat2::from_scale(vec2(2.0, 3.0));
        assert_eq!(s * vec2(1.0, 1.0), vec2(2.0, 3.0));
        // A scalar scales uniformly.
        assert_eq!(Mat2::from_scale(2.0) * vec2(1.0, 2.0), vec2(2.0, 4.0));

        // `translate` post-multiplies the generator.
        let m = Mat4::from_rotation_y(0.5);
        assert_approx_eq!(
            m.translate(vec3(1.0, 0.0, 0.0)),
            m * Mat4::from_translation(vec3(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn comp_ops() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let n = Mat2::from_rows([[2.0, 2.0], [2.0, 2.0]]);
        assert_eq!(m.comp_mul(n), Mat2::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(m.comp_mul(2.0), Mat2::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(m.comp_div(m), Mat2::from_rows([[1.0, 1.0], [1.0, 1.0]]));
        assert_eq!(m.comp_div(2.0), Mat2::from_rows([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn rounded_equality() {
        let a = Mat2::from_rows([[1.004, 2.0], [3.0, 4.0]]);
        let b = Mat2::from_rows([[1.006, 2.0], [3.0, 4.0]]);
        assert!(a.eq_rounded(b, 2));
        assert!(!a.eq_rounded(b, 3));
        assert_eq!(a.rounded(2), Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn checked_access() {
        let m = Mat2x3::from_rows([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(m.get(1, 2), Some(&5.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.column(1), vec2(1.0, 4.0));
        assert_eq!(m.row(1), vec3(3.0, 4.0, 5.0));
    }
}
