use super::ApproxEq;

impl ApproxEq for f32 {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = f32::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        if self.is_sign_negative() != other.is_sign_negative() {
            return self == other; // `-0.0` == `+0.0`
        }

        if self.is_nan() || other.is_nan() {
            return false;
        }

        self.to_bits().abs_diff(other.to_bits()) <= ulps_tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    fn abs_diff_eq(&self, other: &U, abs_tolerance: f32) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: f32) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], abs_tolerance: f32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: f32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: f32) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: f32) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self.as_slice()
            .ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}
