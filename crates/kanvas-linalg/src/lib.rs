//! Fixed-size vector and matrix algebra for 2D/3D canvas graphics.
//!
//! # Motivation
//!
//! The kanvas drawing libraries need to expose small-vector/small-matrix
//! types in their public APIs and hand them to graphics backends without
//! copying. This crate was created for that use case: every type is a plain
//! `#[repr(transparent)]` wrapper over contiguous `f32` storage, so a vector
//! or matrix *is* the buffer region a rendering API consumes.
//!
//! # Goals & Non-Goals
//!
//! - Support only the fixed sizes 2D/3D graphics code actually uses: 2-, 3-
//!   and 4-component vectors, square matrices up to 4x4, the rectangular
//!   2x3/3x2 shapes, and the reduced [`AffineTransform`]. Dimensions are
//!   const generics; there are no dynamically-sized objects.
//! - Support only a single, column-major, unpadded `f32` data layout,
//!   matching what graphics APIs ingest directly. No double-precision
//!   storage.
//! - Provide the shader-style elementwise math protocol (clamp, mix, step,
//!   smoothstep, the trigonometric and exponential families) so CPU-side
//!   code can mirror shader code expression for expression.
//! - Keep numeric degeneracy silent: singular inversion, zero-length
//!   normalization, and total internal reflection produce non-finite or
//!   zero results instead of branching or panicking on every call. The
//!   `try_*` variants exist for callers that want the check.
//! - No linear algebra beyond the closed forms these sizes need: no sparse
//!   matrices, no decompositions, no GPU execution.
//!
//! # Buffer views
//!
//! Construction normally copies components into an owned value. The
//! `from_slice` / `from_bytes` constructors instead return *views* (`&T` /
//! `&mut T`) into a caller-supplied buffer at a byte offset: multiple views
//! may alias the same memory and mutation through one is observable through
//! the others, with Rust's borrow rules enforcing the single-writer
//! discipline. Out-of-bounds or misaligned regions fail with [`Error`].

pub mod approx;
pub mod scalar;

mod affine;
mod buffer;
mod error;
mod matrix;
mod serde_impls;
mod vector;

pub use affine::*;
pub use error::*;
pub use matrix::*;
pub use vector::*;
