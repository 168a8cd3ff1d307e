//! Approximate equality for floating-point results.
//!
//! Closed-form linear algebra accumulates rounding error, so most tests (and
//! some callers) need tolerance-based comparisons alongside the exact
//! [`PartialEq`] impls. The [`ApproxEq`] trait supports three comparison
//! styles (absolute difference, relative difference, and ULPs), and the
//! [`assert_approx_eq!`][crate::assert_approx_eq] /
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros expose them to
//! tests.
//!
//! Decimal-digit rounded equality (the `eq_rounded` methods on the vector and
//! matrix types) is a separate contract: it compares after rounding component
//! differences to a decimal digit count, rather than against a binary
//! tolerance.
//!
//! For background on why floating-point comparison needs this much care, see:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered equal if all of
/// their components are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is less
    /// than or equal to `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: f32) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is less
    /// than or equal to the larger of the two magnitudes times
    /// `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: f32) -> bool;

    /// Performs a comparison of `self` and `other` by counting the number of
    /// [*units in the last place*] (ULPs) between the values.
    ///
    /// `NaN` is never considered equal to anything. `-0.0` and `+0.0` are
    /// always considered equal; other values with differing signs never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default absolute tolerance used when an assertion is not configured.
pub const DEFAULT_ABS_TOLERANCE: f32 = f32::EPSILON;
/// Default relative tolerance used when an assertion is not configured.
pub const DEFAULT_REL_TOLERANCE: f32 = f32::EPSILON;

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the guard is dropped. Calling [`Asserter::abs`],
/// [`Asserter::rel`], or [`Asserter::ulps`] configures which comparisons are
/// performed (their results are ORed together). Without configuration, a
/// default comparison is used: absolute with [`DEFAULT_ABS_TOLERANCE`], or
/// relative with [`DEFAULT_REL_TOLERANCE`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f32>,
    rel: Option<f32>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given
    /// tolerance.
    ///
    /// A good choice for values close to zero, where relative comparison
    /// degenerates.
    pub fn abs(&mut self, abs: f32) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given
    /// tolerance.
    ///
    /// A good default for values that are not close to zero.
    pub fn rel(&mut self, rel: f32) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Perform a comparison by counting the number of *units in the last
    /// place* between the values.
    ///
    /// Respects the uneven distribution of floats, but behaves poorly near
    /// zero (values of opposing sign are billions of ULPs apart).
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if T::abs_diff_eq(self.left, self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if T::rel_diff_eq(self.left, self.right, rel) {
                return true;
            }
        }
        if let Some(ulps) = self.ulps.take() {
            if T::ulps_diff_eq(self.left, self.right, ulps) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(DEFAULT_ABS_TOLERANCE);
            self.rel = Some(DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        // `#[track_caller]` does not propagate through `drop`, so the
        // assertion's location is printed manually.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Functions like [`assert_eq!`], except that it performs an approximate
/// comparison and returns an [`Asserter`] that can be used to configure the
/// comparison kind and tolerances.
///
/// # Examples
///
/// ```
/// # use kanvas_linalg::assert_approx_eq;
/// let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0f32, 99.0).abs(1.0);
/// assert_approx_eq!(100.0f32, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal (using
/// [`ApproxEq`]).
///
/// See [`assert_approx_eq!`].
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}
