//! Endian-aware reading and writing of fixed-width values in byte buffers.
//!
//! This module provides the value-level primitives the rest of the crate is built on: a trait
//! describing how a primitive converts to and from its byte representation, and free functions
//! that read or write such values at the start of a buffer or at a tracked offset.
//!
//! # Architecture
//!
//! The module is built around the [`crate::io::ByteIO`] trait, which gives every supported
//! primitive a fixed-size byte array representation in big, little and native order. On top of
//! it sit three layers:
//!
//! - Typed memory access in host order ([`read_ne`], [`write_ne`] and their `unsafe` unchecked
//!   variants)
//! - Get/put with endian conversion ([`read_be`], [`write_le`], [`get_be32`], [`put_le16`], ...)
//! - Offset-advancing access ([`read_be_at`], [`write_le_at`], [`read_at_dyn`], ...)
//!
//! # Key Components
//!
//! ## Core Trait
//! - [`crate::io::ByteIO`] - Conversion of a primitive to and from its byte representation
//!
//! ## Reading Functions
//! - [`crate::io::read`] / [`crate::io::read_at`] - Read in an explicit [`Endian`]
//! - [`crate::io::read_le`] / [`crate::io::read_le_at`] - Read little-endian values
//! - [`crate::io::read_be`] / [`crate::io::read_be_at`] - Read big-endian values
//! - [`crate::io::read_at_dyn`] - Read a 2 or 4 byte field as `u32`
//!
//! ## Writing Functions
//! - [`crate::io::write`] / [`crate::io::write_at`] - Write in an explicit [`Endian`]
//! - [`crate::io::write_le`] / [`crate::io::write_le_at`] - Write little-endian values
//! - [`crate::io::write_be`] / [`crate::io::write_be_at`] - Write big-endian values
//! - [`crate::io::write_at_dyn`] - Write a `u32` as a 2 or 4 byte field
//!
//! ## Supported Types
//! The [`crate::io::ByteIO`] trait is implemented for:
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`, `usize`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`, `isize`
//! - **Floating point**: `f32`, `f64`
//!
//! # Usage Examples
//!
//! ## Basic Value Reading and Writing
//!
//! ```rust
//! use endiancodec::io::{read_be, read_le, write_be, write_le};
//!
//! let mut data = [0u8; 4];
//! write_be(&mut data, 0x1234_5678_u32)?;
//! assert_eq!(data, [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(read_be::<u32>(&data)?, 0x1234_5678);
//!
//! write_le(&mut data, 0x1234_5678_u32)?;
//! assert_eq!(data, [0x78, 0x56, 0x34, 0x12]);
//! assert_eq!(read_le::<u32>(&data)?, 0x1234_5678);
//! # Ok::<(), endiancodec::Error>(())
//! ```
//!
//! ## Sequential Access with Offset Tracking
//!
//! ```rust
//! use endiancodec::io::{read_be_at, write_be_at};
//!
//! let mut data = [0u8; 7];
//! let mut offset = 0;
//! write_be_at(&mut data, &mut offset, 0x01_u8)?;
//! write_be_at(&mut data, &mut offset, 0x0203_u16)?;
//! write_be_at(&mut data, &mut offset, 0x0405_0607_u32)?;
//! assert_eq!(offset, 7);
//! assert_eq!(data, [1, 2, 3, 4, 5, 6, 7]);
//!
//! offset = 0;
//! assert_eq!(read_be_at::<u8>(&data, &mut offset)?, 0x01);
//! assert_eq!(read_be_at::<u16>(&data, &mut offset)?, 0x0203);
//! assert_eq!(read_be_at::<u32>(&data, &mut offset)?, 0x0405_0607);
//! # Ok::<(), endiancodec::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All checked functions return [`crate::Result`] and fail with [`crate::Error::OutOfBounds`]
//! when the buffer holds fewer bytes than the value needs. Offsets are only advanced on
//! success. The `*_unchecked` functions perform no checks at all and are `unsafe`.
//!
//! # Thread Safety
//!
//! All functions are pure apart from writing into the buffer they are handed, and can be
//! called concurrently from multiple threads on distinct buffers.

use std::mem::size_of;

use crate::{endian::Endian, Result};

mod sealed {
    /// Restricts [`super::ByteIO`] to the primitives implemented in this module.
    pub trait Sealed {}
}

/// Conversion of a primitive value to and from its fixed-size byte representation.
///
/// Each implementation names a `Bytes` array type of exactly `size_of::<Self>()` bytes and
/// converts through it in big, little or native order. The trait is implemented for every
/// primitive integer and floating-point type; the reading and writing functions of this crate
/// are generic over it.
///
/// The trait is sealed. Every length computed by the checked and unchecked functions relies on
/// `Self::Bytes` being exactly as wide as `Self`, so only the primitives listed below implement
/// it:
///
/// ```rust,compile_fail
/// use endiancodec::io::ByteIO;
///
/// #[derive(Clone, Copy)]
/// struct Padded(u8, u16);
///
/// impl ByteIO for Padded {
///     type Bytes = [u8; 3];
///
///     fn from_le_bytes(b: [u8; 3]) -> Self { Padded(b[0], u16::from_le_bytes([b[1], b[2]])) }
///     fn from_be_bytes(b: [u8; 3]) -> Self { Padded(b[0], u16::from_be_bytes([b[1], b[2]])) }
///     fn from_ne_bytes(b: [u8; 3]) -> Self { Padded(b[0], u16::from_ne_bytes([b[1], b[2]])) }
///     fn to_le_bytes(self) -> [u8; 3] { let [x, y] = self.1.to_le_bytes(); [self.0, x, y] }
///     fn to_be_bytes(self) -> [u8; 3] { let [x, y] = self.1.to_be_bytes(); [self.0, x, y] }
///     fn to_ne_bytes(self) -> [u8; 3] { let [x, y] = self.1.to_ne_bytes(); [self.0, x, y] }
///     fn swap_order(self) -> Self { Padded(self.0, self.1.swap_bytes()) }
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::ByteIO;
///
/// let bytes = ByteIO::to_be_bytes(0x0102_u16);
/// assert_eq!(bytes, [0x01, 0x02]);
/// assert_eq!(<u16 as ByteIO>::from_le_bytes(bytes), 0x0201);
/// assert_eq!(ByteIO::swap_order(0x0102_u16), 0x0201);
/// ```
pub trait ByteIO: sealed::Sealed + Sized + Copy {
    /// Byte array holding the encoded value.
    type Bytes: Sized
        + Copy
        + Default
        + AsRef<[u8]>
        + AsMut<[u8]>
        + for<'a> TryFrom<&'a [u8]>;

    /// Decode from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Decode from big-endian bytes
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
    /// Decode from host-order bytes
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// Encode to little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;
    /// Encode to big-endian bytes
    fn to_be_bytes(self) -> Self::Bytes;
    /// Encode to host-order bytes
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Reverses the byte order of the value's representation.
    fn swap_order(self) -> Self;

    /// Decode from bytes laid out in `endian`.
    fn from_bytes(bytes: Self::Bytes, endian: Endian) -> Self {
        match endian {
            Endian::Big => Self::from_be_bytes(bytes),
            Endian::Little => Self::from_le_bytes(bytes),
        }
    }

    /// Encode to bytes laid out in `endian`.
    fn to_bytes(self, endian: Endian) -> Self::Bytes {
        match endian {
            Endian::Big => self.to_be_bytes(),
            Endian::Little => self.to_le_bytes(),
        }
    }
}

impl_byte_io!(int u8, 1);
impl_byte_io!(int i8, 1);
impl_byte_io!(int u16, 2);
impl_byte_io!(int i16, 2);
impl_byte_io!(int u32, 4);
impl_byte_io!(int i32, 4);
impl_byte_io!(int u64, 8);
impl_byte_io!(int i64, 8);
impl_byte_io!(int usize, size_of::<usize>());
impl_byte_io!(int isize, size_of::<isize>());
impl_byte_io!(float f32, 4);
impl_byte_io!(float f64, 8);

/// Borrows the `size_of::<T>()` bytes at `offset` as `T`'s byte array.
fn field<T: ByteIO>(data: &[u8], offset: usize) -> Result<T::Bytes> {
    let type_len = size_of::<T>();
    let available = data.len().saturating_sub(offset);
    if type_len > available {
        return Err(out_of_bounds_error!(type_len, available));
    }

    let Ok(bytes) = data[offset..offset + type_len].try_into() else {
        return Err(out_of_bounds_error!(type_len, available));
    };

    Ok(bytes)
}

/// Copies `bytes` into `data` at `offset` after checking there is room.
fn place(data: &mut [u8], offset: usize, bytes: &[u8]) -> Result<()> {
    let available = data.len().saturating_sub(offset);
    if bytes.len() > available {
        return Err(out_of_bounds_error!(bytes.len(), available));
    }

    data[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(())
}

/// Reads a value of type `T` in host byte order from the start of `data`.
///
/// This reinterprets the leading `size_of::<T>()` bytes as `T` without any conversion. The
/// buffer has no alignment requirement.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::read_ne;
///
/// let data = 0x1122_3344_u32.to_ne_bytes();
/// assert_eq!(read_ne::<u32>(&data)?, 0x1122_3344);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn read_ne<T: ByteIO>(data: &[u8]) -> Result<T> {
    Ok(T::from_ne_bytes(field::<T>(data, 0)?))
}

/// Writes `value` in host byte order to the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn write_ne<T: ByteIO>(data: &mut [u8], value: T) -> Result<()> {
    place(data, 0, value.to_ne_bytes().as_ref())
}

/// Reads a value of type `T` in host byte order from a raw pointer.
///
/// The load is unaligned, so `ptr` may point anywhere inside a byte buffer.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size_of::<T>()` bytes.
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::read_ne_unchecked;
///
/// let data = [0xAA, 0x78, 0x56, 0x34, 0x12];
/// // SAFETY: four readable bytes follow index 1.
/// let value: u32 = unsafe { read_ne_unchecked(data.as_ptr().add(1)) };
/// assert_eq!(value.to_ne_bytes(), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[must_use]
pub unsafe fn read_ne_unchecked<T: ByteIO>(ptr: *const u8) -> T {
    // SAFETY: the caller guarantees `size_of::<T>()` readable bytes, which is the size of
    // `T::Bytes`; `read_unaligned` lifts any alignment requirement.
    let bytes = unsafe { ptr.cast::<T::Bytes>().read_unaligned() };
    T::from_ne_bytes(bytes)
}

/// Writes `value` in host byte order through a raw pointer.
///
/// # Safety
///
/// `ptr` must be valid for writes of `size_of::<T>()` bytes.
pub unsafe fn write_ne_unchecked<T: ByteIO>(ptr: *mut u8, value: T) {
    // SAFETY: see `read_ne_unchecked`.
    unsafe { ptr.cast::<T::Bytes>().write_unaligned(value.to_ne_bytes()) }
}

/// Reads a value stored in `endian` through a raw pointer and returns it in host order.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size_of::<T>()` bytes.
#[must_use]
pub unsafe fn read_unchecked<T: ByteIO>(ptr: *const u8, endian: Endian) -> T {
    // SAFETY: forwarded from the caller.
    endian.to_host(unsafe { read_ne_unchecked::<T>(ptr) })
}

/// Writes a host-order `value` through a raw pointer, laid out in `endian`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `size_of::<T>()` bytes.
pub unsafe fn write_unchecked<T: ByteIO>(ptr: *mut u8, value: T, endian: Endian) {
    // SAFETY: forwarded from the caller.
    unsafe { write_ne_unchecked(ptr, endian.host_to(value)) }
}

/// Reads a value of type `T` stored in `endian` from the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn read<T: ByteIO>(data: &[u8], endian: Endian) -> Result<T> {
    let mut offset = 0_usize;
    read_at(data, &mut offset, endian)
}

/// Reads a value of type `T` stored in `endian` at `offset`, advancing `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain at
/// `offset`. `offset` is left unchanged in that case.
///
/// # Thread Safety
///
/// Each thread should use its own offset variable.
pub fn read_at<T: ByteIO>(data: &[u8], offset: &mut usize, endian: Endian) -> Result<T> {
    let bytes = field::<T>(data, *offset)?;
    *offset += size_of::<T>();

    Ok(T::from_bytes(bytes, endian))
}

/// Writes `value` laid out in `endian` to the start of `data`.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn write<T: ByteIO>(data: &mut [u8], value: T, endian: Endian) -> Result<()> {
    let mut offset = 0_usize;
    write_at(data, &mut offset, value, endian)
}

/// Writes `value` laid out in `endian` at `offset`, advancing `offset` past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain at
/// `offset`. Neither `data` nor `offset` are modified in that case.
pub fn write_at<T: ByteIO>(
    data: &mut [u8],
    offset: &mut usize,
    value: T,
    endian: Endian,
) -> Result<()> {
    place(data, *offset, value.to_bytes(endian).as_ref())?;
    *offset += size_of::<T>();

    Ok(())
}

/// Safely reads a value of type `T` in little-endian byte order from a data buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::read_le;
///
/// let data = [0x01, 0x00, 0x00, 0x00];
/// let value: u32 = read_le(&data)?;
/// assert_eq!(value, 1);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn read_le<T: ByteIO>(data: &[u8]) -> Result<T> {
    read(data, Endian::Little)
}

/// Safely reads a value of type `T` in little-endian byte order at `offset`, advancing it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::read_le_at;
///
/// let data = [0x01, 0x00, 0x02, 0x00];
/// let mut offset = 0;
///
/// assert_eq!(read_le_at::<u16>(&data, &mut offset)?, 1);
/// assert_eq!(read_le_at::<u16>(&data, &mut offset)?, 2);
/// assert_eq!(offset, 4);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn read_le_at<T: ByteIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    read_at(data, offset, Endian::Little)
}

/// Safely reads a value of type `T` in big-endian byte order from a data buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use endiancodec::io::read_be;
///
/// let data = [0x00, 0x00, 0x00, 0x01];
/// let value: u32 = read_be(&data)?;
/// assert_eq!(value, 1);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn read_be<T: ByteIO>(data: &[u8]) -> Result<T> {
    read(data, Endian::Big)
}

/// Safely reads a value of type `T` in big-endian byte order at `offset`, advancing it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_be_at<T: ByteIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    read_at(data, offset, Endian::Big)
}

/// Safely writes a value of type `T` in little-endian byte order to a data buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_le<T: ByteIO>(data: &mut [u8], value: T) -> Result<()> {
    write(data, value, Endian::Little)
}

/// Safely writes a value of type `T` in little-endian byte order at `offset`, advancing it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_le_at<T: ByteIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    write_at(data, offset, value, Endian::Little)
}

/// Safely writes a value of type `T` in big-endian byte order to a data buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_be<T: ByteIO>(data: &mut [u8], value: T) -> Result<()> {
    write(data, value, Endian::Big)
}

/// Safely writes a value of type `T` in big-endian byte order at `offset`, advancing it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_be_at<T: ByteIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    write_at(data, offset, value, Endian::Big)
}

/// Dynamically reads either a 2-byte or 4-byte field at `offset`.
///
/// 2-byte fields are promoted to `u32`. This is the shape of index fields whose width depends
/// on a header flag.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWidth`] if `width` is not 2 or 4, or
/// [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use endiancodec::{endian::Endian, io::read_at_dyn};
///
/// let data = [0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
/// let mut offset = 0;
/// assert_eq!(read_at_dyn(&data, &mut offset, 2, Endian::Big)?, 1);
/// assert_eq!(read_at_dyn(&data, &mut offset, 4, Endian::Big)?, 2);
/// assert_eq!(offset, 6);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub fn read_at_dyn(data: &[u8], offset: &mut usize, width: usize, endian: Endian) -> Result<u32> {
    match width {
        2 => Ok(u32::from(read_at::<u16>(data, offset, endian)?)),
        4 => read_at::<u32>(data, offset, endian),
        other => Err(crate::Error::InvalidWidth(other)),
    }
}

/// Dynamically writes `value` as either a 2-byte or 4-byte field at `offset`.
///
/// For 2-byte fields only the lower 16 bits of `value` are written.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWidth`] if `width` is not 2 or 4, or
/// [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_at_dyn(
    data: &mut [u8],
    offset: &mut usize,
    value: u32,
    width: usize,
    endian: Endian,
) -> Result<()> {
    match width {
        #[allow(clippy::cast_possible_truncation)]
        2 => write_at(data, offset, value as u16, endian),
        4 => write_at(data, offset, value, endian),
        other => Err(crate::Error::InvalidWidth(other)),
    }
}

get_put!(u16, Endian::Big, "big endian", get_be16, put_be16);
get_put!(u32, Endian::Big, "big endian", get_be32, put_be32);
get_put!(u64, Endian::Big, "big endian", get_be64, put_be64);
get_put!(u16, Endian::Little, "little endian", get_le16, put_le16);
get_put!(u32, Endian::Little, "little endian", get_le32, put_le32);
get_put!(u64, Endian::Little, "little endian", get_le64, put_le64);
