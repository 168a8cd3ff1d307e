//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Matrix, Vector};

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const R: usize, const C: usize> ApproxEq for Matrix<R, C> {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// Component-wise negation.
impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(f32::neg)
    }
}

/// Component-wise addition.
impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Matrix-scalar addition (added to every component).
impl<const R: usize, const C: usize> Add<f32> for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: f32) -> Self {
        self.map(|c| c + rhs)
    }
}

impl<const R: usize, const C: usize> AddAssign for Matrix<R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const R: usize, const C: usize> AddAssign<f32> for Matrix<R, C> {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

/// Component-wise subtraction.
impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Matrix-scalar subtraction (subtracted from every component).
impl<const R: usize, const C: usize> Sub<f32> for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self {
        self.map(|c| c - rhs)
    }
}

impl<const R: usize, const C: usize> SubAssign for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const R: usize, const C: usize> SubAssign<f32> for Matrix<R, C> {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

/// Matrix * column vector: component `i` of the result is
/// `Σ_j self[(i, j)] * rhs[j]`.
impl<const R: usize, const C: usize> Mul<Vector<C>> for Matrix<R, C> {
    type Output = Vector<R>;

    fn mul(self, rhs: Vector<C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(0.0, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * matrix: the standard product. For the fixed sizes of this crate
/// the index loop produces exactly the closed-form expansion.
impl<const M: usize, const N: usize, const P: usize> Mul<Matrix<N, P>> for Matrix<M, N> {
    type Output = Matrix<M, P>;

    fn mul(self, rhs: Matrix<N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(0.0, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * scalar (scaling every component).
impl<const R: usize, const C: usize> Mul<f32> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

/// Matrix / scalar (scaling every component).
impl<const R: usize, const C: usize> Div<f32> for Matrix<R, C> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<const R: usize, const C: usize> MulAssign<f32> for Matrix<R, C> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const R: usize, const C: usize> DivAssign<f32> for Matrix<R, C> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// In-place matrix product (square matrices only): `*self = *self * rhs`.
impl<const N: usize> MulAssign for Matrix<N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat2x3, Mat3x2, Matrix};

    #[test]
    fn add_sub() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let n = Mat2::from_rows([[10.0, 20.0], [30.0, 40.0]]);
        assert_eq!(m + n, Mat2::from_rows([[11.0, 22.0], [33.0, 44.0]]));
        assert_eq!(n - m, Mat2::from_rows([[9.0, 18.0], [27.0, 36.0]]));
        assert_eq!(m + 1.0, Mat2::from_rows([[2.0, 3.0], [4.0, 5.0]]));
        assert_eq!(m - 1.0, Mat2::from_rows([[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(-m, Mat2::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));
    }

    #[test]
    fn scalar_scaling() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 2.0, Mat2::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(m / 2.0, Mat2::from_rows([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn assign_ops() {
        let mut m = Mat2::IDENTITY;
        m *= 4.0;
        m += Mat2::IDENTITY;
        m -= 1.0;
        m /= 2.0;
        assert_eq!(m, Mat2::from_rows([[2.0, -0.5], [-0.5, 2.0]]));

        let mut r = Mat2::from_rotation(0.25);
        r *= Mat2::from_rotation(-0.25);
        assert!(r.eq_rounded(Mat2::IDENTITY, 6));
    }

    #[test]
    fn rectangular_products() {
        let a = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Mat3x2::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c: Mat2 = a * b;
        assert_eq!(c, Mat2::from_rows([[58.0, 64.0], [139.0, 154.0]]));

        let d: Matrix<3, 3> = b * a;
        assert_eq!(d[(0, 0)], 7.0 * 1.0 + 8.0 * 4.0);
    }
}
