//! Checked construction of vector/matrix views over caller-supplied buffers.
//!
//! Every algebra type in this crate is a plain `#[repr(transparent)]` wrapper
//! over contiguous `f32` storage and implements [`bytemuck::Pod`], so a
//! correctly sized and aligned region of a foreign buffer *is* a valid value
//! of the type. The helpers here perform the bounds and alignment checks and
//! hand out `&T` / `&mut T` views into such regions; multiple views of the
//! same region alias the same memory, with Rust's borrow rules supplying the
//! single-writer discipline.
//!
//! The public surface is the `from_slice` / `from_bytes` constructors on
//! [`Vector`][crate::Vector], [`Matrix`][crate::Matrix], and
//! [`AffineTransform`][crate::AffineTransform].

use std::mem;

use bytemuck::Pod;

use crate::{Error, Result};

/// Views the leading `size_of::<T>()` bytes of `slice` as a `T`.
pub(crate) fn float_prefix<T: Pod>(slice: &[f32]) -> Result<&T> {
    let len = mem::size_of::<T>();
    let floats = len / mem::size_of::<f32>();
    if slice.len() < floats {
        return Err(Error::OutOfBounds {
            offset: 0,
            len,
            buffer_len: mem::size_of_val(slice),
        });
    }

    // Alignment always holds: `T` is a transparent wrapper over `f32`s.
    Ok(bytemuck::from_bytes(
        &bytemuck::cast_slice::<f32, u8>(slice)[..len],
    ))
}

/// Mutable variant of [`float_prefix`].
pub(crate) fn float_prefix_mut<T: Pod>(slice: &mut [f32]) -> Result<&mut T> {
    let len = mem::size_of::<T>();
    let floats = len / mem::size_of::<f32>();
    if slice.len() < floats {
        return Err(Error::OutOfBounds {
            offset: 0,
            len,
            buffer_len: mem::size_of_val(slice),
        });
    }

    Ok(bytemuck::from_bytes_mut(
        &mut bytemuck::cast_slice_mut::<f32, u8>(slice)[..len],
    ))
}

/// Views the bytes at `offset..offset + size_of::<T>()` as a `T`.
pub(crate) fn byte_region<T: Pod>(bytes: &[u8], offset: usize) -> Result<&T> {
    let len = mem::size_of::<T>();
    let end = offset.checked_add(len).ok_or(Error::OutOfBounds {
        offset,
        len,
        buffer_len: bytes.len(),
    })?;
    if end > bytes.len() {
        return Err(Error::OutOfBounds {
            offset,
            len,
            buffer_len: bytes.len(),
        });
    }

    bytemuck::try_from_bytes(&bytes[offset..end]).map_err(|_| Error::Misaligned { offset })
}

/// Mutable variant of [`byte_region`].
pub(crate) fn byte_region_mut<T: Pod>(bytes: &mut [u8], offset: usize) -> Result<&mut T> {
    let len = mem::size_of::<T>();
    let end = offset.checked_add(len).ok_or(Error::OutOfBounds {
        offset,
        len,
        buffer_len: bytes.len(),
    })?;
    if end > bytes.len() {
        return Err(Error::OutOfBounds {
            offset,
            len,
            buffer_len: bytes.len(),
        });
    }

    bytemuck::try_from_bytes_mut(&mut bytes[offset..end]).map_err(|_| Error::Misaligned { offset })
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Error, Mat2, Vec2, Vec3};

    #[test]
    fn prefix_views() {
        let storage = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(*Vec2::from_slice(&storage).unwrap(), vec2(1.0, 2.0));
        assert_eq!(*Vec3::from_slice(&storage[2..]).unwrap(), [3.0, 4.0, 5.0]);

        let mat = Mat2::from_slice(&storage).unwrap();
        assert_eq!(mat[(0, 0)], 1.0);
        assert_eq!(mat[(1, 0)], 2.0);
        assert_eq!(mat[(0, 1)], 3.0);
    }

    #[test]
    fn out_of_bounds() {
        let storage = [0.0f32; 3];
        assert!(Vec3::from_slice(&storage).is_ok());
        assert_eq!(
            Mat2::from_slice(&storage),
            Err(Error::OutOfBounds {
                offset: 0,
                len: 16,
                buffer_len: 12,
            })
        );

        let floats = [0f32; 4];
        let bytes = bytemuck::cast_slice::<f32, u8>(&floats);
        assert!(Vec2::from_bytes(bytes, 8).is_ok());
        assert_eq!(
            Vec2::from_bytes(bytes, 12),
            Err(Error::OutOfBounds {
                offset: 12,
                len: 8,
                buffer_len: 16,
            })
        );
    }

    #[test]
    fn misaligned_offset() {
        // 4-byte aligned backing storage so that only the offset decides.
        let storage = [0u32; 4];
        let bytes = bytemuck::cast_slice::<u32, u8>(&storage);
        assert!(Vec2::from_bytes(bytes, 0).is_ok());
        assert!(Vec2::from_bytes(bytes, 4).is_ok());
        assert_eq!(
            Vec2::from_bytes(bytes, 2),
            Err(Error::Misaligned { offset: 2 })
        );
    }

    #[test]
    fn views_alias_storage() {
        let mut storage = [0.0f32; 4];
        *Vec2::from_slice_mut(&mut storage[..2]).unwrap() = vec2(7.0, 8.0);
        storage[2] = 9.0;

        let v = Vec3::from_slice(&storage).unwrap();
        assert_eq!(*v, [7.0, 8.0, 9.0]);

        // A second view of the same region observes the same memory.
        let again = Vec2::from_slice(&storage).unwrap();
        assert_eq!(*again, vec2(7.0, 8.0));
    }

    #[test]
    fn byte_views_round_trip() {
        let v = vec2(1.5, -2.5);
        let bytes = v.as_bytes();
        assert_eq!(bytes.len(), 8);
        let back = Vec2::from_bytes(bytes, 0).unwrap();
        assert_eq!(*back, v);
    }
}
