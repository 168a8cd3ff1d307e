//! Error types for the fallible parts of the library.
//!
//! Only the buffer-view constructors and the shape-checked conversions can
//! fail. All algebraic operations are infallible: degenerate inputs (singular
//! matrices, zero-length vectors) propagate non-finite component values
//! instead of returning errors.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer views and shape-checked conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A buffer view was requested for a region that exceeds the buffer.
    #[error("buffer region out of bounds: need {len} bytes at offset {offset}, buffer holds {buffer_len}")]
    OutOfBounds {
        /// Requested byte offset into the buffer.
        offset: usize,
        /// Size in bytes of the requested view.
        len: usize,
        /// Total size in bytes of the buffer.
        buffer_len: usize,
    },

    /// A buffer view was requested at an address that is not 4-byte aligned.
    #[error("buffer region at offset {offset} is not aligned to 4 bytes")]
    Misaligned {
        /// Requested byte offset into the buffer.
        offset: usize,
    },

    /// A 3x3 matrix could not be reduced to an affine transform because its
    /// bottom row is not `[0, 0, 1]`.
    #[error("matrix bottom row is not [0, 0, 1]; cannot reduce to an affine transform")]
    NotAffine,

    /// A 4x4 matrix does not have the shape of an embedded 2D transform.
    #[error("matrix is not a 2D transform embedding")]
    Not2D,
}
