//! Generic serialization of fixed-width values with explicit host and buffer byte orders.
//!
//! [`serialize`] and [`deserialize`] take the byte order the value is assumed to have in
//! memory (`host`) and the byte order wanted in the buffer (`target`). When the two match the
//! bytes are copied verbatim, otherwise they are reversed across the whole width of `T`. Both
//! return the remainder of the buffer, so calls chain the same way a cursor advances.
//!
//! Neither tag has a default. [`encode`] and [`decode`] fill in `host` with
//! [`Endian::NATIVE`], which is what callers want unless they are deliberately reinterpreting
//! foreign memory.
//!
//! # Examples
//!
//! ```rust
//! use endiancodec::{decode, encode, endian::Endian};
//!
//! let mut frame = [0u8; 6];
//! let rest = encode(&mut frame, 0x1234_5678_u32, Endian::Big)?;
//! let rest = encode(rest, 0xABCD_u16, Endian::Little)?;
//! assert!(rest.is_empty());
//! assert_eq!(frame, [0x12, 0x34, 0x56, 0x78, 0xCD, 0xAB]);
//!
//! let (word, rest) = decode::<u32>(&frame, Endian::Big)?;
//! let (half, _) = decode::<u16>(rest, Endian::Little)?;
//! assert_eq!((word, half), (0x1234_5678, 0xABCD));
//! # Ok::<(), endiancodec::Error>(())
//! ```

use std::mem::size_of;

use crate::{endian::Endian, io::ByteIO, Result};

fn copy_ordered(dst: &mut [u8], src: &[u8], reverse: bool) {
    if reverse {
        for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
            *d = *s;
        }
    } else {
        dst.copy_from_slice(src);
    }
}

/// Writes the in-memory bytes of `value` into the front of `buf`, in `target` order.
///
/// `host` names the byte order the in-memory representation of `value` is taken to have. If
/// it equals `target`, the `size_of::<T>()` bytes are copied unchanged; otherwise they are
/// written in reverse. Returns the part of `buf` after the written value.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `buf` is shorter than `T`.
///
/// # Examples
///
/// ```rust
/// use endiancodec::{endian::Endian, serialize::serialize};
///
/// let mut buf = [0u8; 4];
/// serialize(&mut buf, 0x1234_5678_u32, Endian::NATIVE, Endian::Big)?;
/// assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn serialize<T: ByteIO>(
    buf: &mut [u8],
    value: T,
    host: Endian,
    target: Endian,
) -> Result<&mut [u8]> {
    let size = size_of::<T>();
    if buf.len() < size {
        return Err(out_of_bounds_error!(size, buf.len()));
    }

    let (dst, rest) = buf.split_at_mut(size);
    copy_ordered(dst, value.to_ne_bytes().as_ref(), host != target);
    Ok(rest)
}

/// Reads a `T` from the front of `buf`, stored in `target` order, into `host` order.
///
/// The inverse of [`serialize`] for the same pair of tags. Returns the value together with the
/// part of `buf` after it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `buf` is shorter than `T`.
pub fn deserialize<T: ByteIO>(buf: &[u8], host: Endian, target: Endian) -> Result<(T, &[u8])> {
    let size = size_of::<T>();
    if buf.len() < size {
        return Err(out_of_bounds_error!(size, buf.len()));
    }

    let (src, rest) = buf.split_at(size);
    let mut bytes = T::Bytes::default();
    copy_ordered(bytes.as_mut(), src, host != target);
    Ok((T::from_ne_bytes(bytes), rest))
}

/// Encodes `value` into the front of `buf` in `target` order and returns the remainder.
///
/// Equivalent to `serialize(buf, value, Endian::NATIVE, target)`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `buf` is shorter than `T`.
pub fn encode<T: ByteIO>(buf: &mut [u8], value: T, target: Endian) -> Result<&mut [u8]> {
    serialize(buf, value, Endian::NATIVE, target)
}

/// Decodes a `T` stored in `target` order from the front of `buf`.
///
/// Equivalent to `deserialize(buf, Endian::NATIVE, target)`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `buf` is shorter than `T`.
pub fn decode<T: ByteIO>(buf: &[u8], target: Endian) -> Result<(T, &[u8])> {
    deserialize(buf, Endian::NATIVE, target)
}
