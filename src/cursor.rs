//! Cursor types for sequential encoding and decoding of binary frames.
//!
//! This module provides [`crate::cursor::Reader`] and [`crate::cursor::Writer`], which wrap a
//! byte slice together with a position that advances as values are popped from or pushed into
//! the buffer. They are the building block for protocol code that walks a frame field by field.
//!
//! # Architecture
//!
//! Both cursors follow the same model:
//!
//! - **Position tracking** - The current offset is advanced by exactly the width of each value
//! - **Bounds checking** - Every checked operation validates the remaining length first and
//!   surfaces [`crate::Error::OutOfBounds`] without moving the cursor
//! - **Unchecked fast path** - `pop_unchecked`/`push_unchecked` skip the check for callers that
//!   already called [`Reader::ensure_remaining`] or otherwise validated the frame length
//!
//! # Key Components
//!
//! - [`crate::cursor::Reader`] - Decodes values from a `&[u8]`
//! - [`crate::cursor::Writer`] - Encodes values into a `&mut [u8]`
//!
//! Both expose width-named operations for 8, 16, 32 and 64-bit values in either byte order
//! (`pop_be16`, `pop_le64`, `push_be32`, `push_le8`, ...) next to the generic `pop::<T>` and
//! `push::<T>`.
//!
//! # Usage Examples
//!
//! ```rust
//! use endiancodec::{Reader, Writer};
//!
//! let mut frame = [0u8; 7];
//! let mut writer = Writer::new(&mut frame);
//! writer.push_be8(0x01)?;
//! writer.push_be16(0x0203)?;
//! writer.push_le32(0x0706_0504)?;
//! assert_eq!(writer.pos(), 7);
//! assert_eq!(frame, [1, 2, 3, 4, 5, 6, 7]);
//!
//! let mut reader = Reader::new(&frame);
//! assert_eq!(reader.pop_be8()?, 0x01);
//! assert_eq!(reader.pop_be16()?, 0x0203);
//! assert_eq!(reader.pop_le32()?, 0x0706_0504);
//! assert!(!reader.has_more_data());
//! # Ok::<(), endiancodec::Error>(())
//! ```

use std::mem::size_of;

use crate::{
    endian::Endian,
    io::{read_at, read_unchecked, write_at, write_unchecked, ByteIO},
    Error, Result,
};

/// A bounds-checked decoding cursor over a byte slice.
///
/// `Reader` maintains a position within borrowed data and pops fixed-width values in either
/// byte order, advancing past each one. A failed pop leaves the position unchanged, so callers
/// can retry with a different interpretation or report how far decoding got.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The binary data being decoded
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a new [`Reader`] positioned at the start of `data`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endiancodec::Reader;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let reader = Reader::new(&data);
    /// assert_eq!(reader.len(), 4);
    /// assert_eq!(reader.pos(), 0);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to decode.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Returns the current position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns the full underlying buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the bytes that have not been consumed yet.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Move the current position to `pos`.
    ///
    /// Seeking to `len()` is allowed and leaves the reader exhausted.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] if `pos` is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::InvalidOffset(pos));
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by `step` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `step` bytes remain.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        self.ensure_remaining(step)?;
        self.position += step;
        Ok(())
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// A successful check is what makes a following run of `pop_unchecked` calls sound.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `needed` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endiancodec::{endian::Endian, Reader};
    ///
    /// let data = [0x00, 0x01, 0x00, 0x02];
    /// let mut reader = Reader::new(&data);
    ///
    /// reader.ensure_remaining(4)?;
    /// // SAFETY: four bytes were checked above.
    /// let (a, b) = unsafe {
    ///     (
    ///         reader.pop_unchecked::<u16>(Endian::Big),
    ///         reader.pop_unchecked::<u16>(Endian::Big),
    ///     )
    /// };
    /// assert_eq!((a, b), (1, 2));
    /// # Ok::<(), endiancodec::Error>(())
    /// ```
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            log::trace!(
                "reader rejected access of {needed} bytes at offset {} ({available} available)",
                self.position
            );
            return Err(out_of_bounds_error!(needed, available));
        }
        Ok(())
    }

    /// Reads a slice of `length` bytes from the current position and advances past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.ensure_remaining(length)?;
        let bytes = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    /// Decodes a value stored in `endian` at the current position without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain.
    pub fn peek<T: ByteIO>(&self, endian: Endian) -> Result<T> {
        let mut offset = self.position;
        self.checked(read_at(self.data, &mut offset, endian))
    }

    /// Decodes a value stored in `endian` and advances the cursor by `size_of::<T>()`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain. The cursor does not
    /// move in that case.
    pub fn pop<T: ByteIO>(&mut self, endian: Endian) -> Result<T> {
        let mut offset = self.position;
        let value = self.checked(read_at(self.data, &mut offset, endian))?;
        self.position = offset;
        Ok(value)
    }

    /// Decodes a value stored in `endian` and advances the cursor, without a bounds check.
    ///
    /// # Safety
    ///
    /// At least `size_of::<T>()` bytes must remain, e.g. as established by a prior
    /// [`Reader::ensure_remaining`].
    pub unsafe fn pop_unchecked<T: ByteIO>(&mut self, endian: Endian) -> T {
        // SAFETY: the caller guarantees `size_of::<T>()` bytes remain past `position`, which
        // lies within `data`.
        let value = unsafe { read_unchecked::<T>(self.data.as_ptr().add(self.position), endian) };
        self.position += size_of::<T>();
        value
    }

    /// Decodes a big-endian value. Shorthand for `pop::<T>(Endian::Big)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain.
    pub fn read_be<T: ByteIO>(&mut self) -> Result<T> {
        self.pop(Endian::Big)
    }

    /// Decodes a little-endian value. Shorthand for `pop::<T>(Endian::Little)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain.
    pub fn read_le<T: ByteIO>(&mut self) -> Result<T> {
        self.pop(Endian::Little)
    }

    pop_methods! {
        u8, Endian::Big, "big endian", pop_be8;
        u16, Endian::Big, "big endian", pop_be16;
        u32, Endian::Big, "big endian", pop_be32;
        u64, Endian::Big, "big endian", pop_be64;
        u8, Endian::Little, "little endian", pop_le8;
        u16, Endian::Little, "little endian", pop_le16;
        u32, Endian::Little, "little endian", pop_le32;
        u64, Endian::Little, "little endian", pop_le64;
    }

    fn checked<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(Error::OutOfBounds { needed, available }) = &result {
            log::trace!(
                "reader rejected access of {needed} bytes at offset {} ({available} available)",
                self.position
            );
        }
        result
    }
}

/// A bounds-checked encoding cursor over a mutable byte slice.
///
/// `Writer` is the push-side counterpart of [`Reader`]: each push encodes a value in the
/// requested byte order at the current position and advances past it. A failed push neither
/// touches the buffer nor moves the position.
#[derive(Debug)]
pub struct Writer<'a> {
    /// The buffer being filled
    data: &'a mut [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Writer<'a> {
    /// Create a new [`Writer`] positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Writer { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the current position, which is also the number of bytes written so far when
    /// the writer was not seeked.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns the bytes before the current position.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position.min(self.data.len())]
    }

    /// Consumes the writer and returns the bytes before the final position.
    #[must_use]
    pub fn into_written(self) -> &'a mut [u8] {
        let end = self.position.min(self.data.len());
        let data = self.data;
        &mut data[..end]
    }

    /// Move the current position to `pos`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] if `pos` is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::InvalidOffset(pos));
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by `step` bytes, leaving them untouched.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `step` bytes remain.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        self.ensure_remaining(step)?;
        self.position += step;
        Ok(())
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `needed` bytes remain.
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            log::trace!(
                "writer rejected access of {needed} bytes at offset {} ({available} available)",
                self.position
            );
            return Err(out_of_bounds_error!(needed, available));
        }
        Ok(())
    }

    /// Copies `bytes` verbatim to the current position and advances past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `bytes` does not fit.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_remaining(bytes.len())?;
        self.data[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        Ok(())
    }

    /// Encodes `value` in `endian` and advances the cursor by `size_of::<T>()`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain. Neither the buffer nor
    /// the cursor are modified in that case.
    pub fn push<T: ByteIO>(&mut self, value: T, endian: Endian) -> Result<()> {
        let mut offset = self.position;
        if let Err(error) = write_at(self.data, &mut offset, value, endian) {
            if let Error::OutOfBounds { needed, available } = error {
                log::trace!(
                    "writer rejected access of {needed} bytes at offset {} ({available} available)",
                    self.position
                );
            }
            return Err(error);
        }

        self.position = offset;
        Ok(())
    }

    /// Encodes `value` in `endian` and advances the cursor, without a bounds check.
    ///
    /// # Safety
    ///
    /// At least `size_of::<T>()` bytes must remain, e.g. as established by a prior
    /// [`Writer::ensure_remaining`].
    pub unsafe fn push_unchecked<T: ByteIO>(&mut self, value: T, endian: Endian) {
        // SAFETY: the caller guarantees `size_of::<T>()` bytes remain past `position`.
        unsafe { write_unchecked(self.data.as_mut_ptr().add(self.position), value, endian) };
        self.position += size_of::<T>();
    }

    /// Encodes a big-endian value. Shorthand for `push(value, Endian::Big)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain.
    pub fn write_be<T: ByteIO>(&mut self, value: T) -> Result<()> {
        self.push(value, Endian::Big)
    }

    /// Encodes a little-endian value. Shorthand for `push(value, Endian::Little)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain.
    pub fn write_le<T: ByteIO>(&mut self, value: T) -> Result<()> {
        self.push(value, Endian::Little)
    }

    push_methods! {
        u8, Endian::Big, "big endian", push_be8;
        u16, Endian::Big, "big endian", push_be16;
        u32, Endian::Big, "big endian", push_be32;
        u64, Endian::Big, "big endian", push_be64;
        u8, Endian::Little, "little endian", push_le8;
        u16, Endian::Little, "little endian", push_le16;
        u32, Endian::Little, "little endian", push_le32;
        u64, Endian::Little, "little endian", push_le64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_advances_by_width() {
        let data = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
            0x0F,
        ];
        let mut reader = Reader::new(&data);

        assert_eq!(reader.pop_be8().unwrap(), 0x01);
        assert_eq!(reader.pos(), 1);
        assert_eq!(reader.pop_be16().unwrap(), 0x0203);
        assert_eq!(reader.pos(), 3);
        assert_eq!(reader.pop_be32().unwrap(), 0x0405_0607);
        assert_eq!(reader.pos(), 7);
        assert_eq!(reader.pop_be64().unwrap(), 0x0809_0A0B_0C0D_0E0F);
        assert_eq!(reader.pos(), 15);
        assert!(!reader.has_more_data());
    }

    #[test]
    fn test_pop_little_endian() {
        let data = [
            0xAA, 0x02, 0x01, 0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02,
            0x01,
        ];
        let mut reader = Reader::new(&data);

        assert_eq!(reader.pop_le8().unwrap(), 0xAA);
        assert_eq!(reader.pop_le16().unwrap(), 0x0102);
        assert_eq!(reader.pop_le32().unwrap(), 0x0102_0304);
        assert_eq!(reader.pop_le64().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_failed_pop_does_not_move() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.pop_be8().unwrap();

        assert_eq!(
            reader.pop_be32(),
            Err(Error::OutOfBounds {
                needed: 4,
                available: 2
            })
        );
        assert_eq!(reader.pos(), 1);
        assert_eq!(reader.pop_le16().unwrap(), 0x0302);
    }

    #[test]
    fn test_peek_and_rest() {
        let data = [0x12, 0x34, 0x56];
        let mut reader = Reader::new(&data);

        assert_eq!(reader.peek::<u16>(Endian::Big).unwrap(), 0x1234);
        assert_eq!(reader.pos(), 0);
        reader.advance_by(1).unwrap();
        assert_eq!(reader.rest(), &[0x34, 0x56]);
        assert_eq!(reader.read_bytes(2).unwrap(), &[0x34, 0x56]);
        assert!(reader.read_bytes(1).is_err());
        assert!(reader.peek::<u8>(Endian::Big).is_err());
    }

    #[test]
    fn test_seek() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);

        reader.seek(2).unwrap();
        assert_eq!(reader.read_le::<u16>().unwrap(), 0x0403);
        reader.seek(4).unwrap();
        assert!(!reader.has_more_data());
        assert_eq!(reader.seek(5), Err(Error::InvalidOffset(5)));
        assert_eq!(reader.pos(), 4);
        assert_eq!(reader.data(), &data);
    }

    #[test]
    fn test_empty_reader() {
        let reader = Reader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.len(), 0);
        assert!(!reader.has_more_data());
        assert!(reader.ensure_remaining(0).is_ok());
        assert!(reader.ensure_remaining(1).is_err());
    }

    #[test]
    fn test_unchecked_pop() {
        let data = [0x00, 0x00, 0x00, 0x2A, 0x2A, 0x00];
        let mut reader = Reader::new(&data);
        reader.ensure_remaining(6).unwrap();

        // SAFETY: six bytes were checked above.
        unsafe {
            assert_eq!(reader.pop_unchecked::<i32>(Endian::Big), 42);
            assert_eq!(reader.pop_unchecked::<u16>(Endian::Little), 0x2A);
        }
        assert_eq!(reader.pos(), 6);
    }

    #[test]
    fn test_push_advances_by_width() {
        let mut buffer = [0u8; 15];
        let mut writer = Writer::new(&mut buffer);

        writer.push_be8(0x01).unwrap();
        assert_eq!(writer.pos(), 1);
        writer.push_be16(0x0203).unwrap();
        assert_eq!(writer.pos(), 3);
        writer.push_be32(0x0405_0607).unwrap();
        assert_eq!(writer.pos(), 7);
        writer.push_be64(0x0809_0A0B_0C0D_0E0F).unwrap();
        assert_eq!(writer.pos(), 15);
        assert_eq!(writer.remaining(), 0);

        assert_eq!(
            buffer,
            [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F]
        );
    }

    #[test]
    fn test_push_little_endian() {
        let mut buffer = [0u8; 15];
        let mut writer = Writer::new(&mut buffer);

        writer.push_le8(0xAA).unwrap();
        writer.push_le16(0x0102).unwrap();
        writer.push_le32(0x0102_0304).unwrap();
        writer.push_le64(0x0102_0304_0506_0708).unwrap();

        assert_eq!(
            writer.written(),
            &[0xAA, 0x02, 0x01, 0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn test_failed_push_does_not_touch_buffer() {
        let mut buffer = [0u8; 3];
        let mut writer = Writer::new(&mut buffer);
        writer.push_be8(0xFF).unwrap();

        assert_eq!(
            writer.push_le32(0xDEAD_BEEF),
            Err(Error::OutOfBounds {
                needed: 4,
                available: 2
            })
        );
        assert_eq!(writer.pos(), 1);
        assert_eq!(writer.into_written(), &[0xFF]);
        assert_eq!(buffer, [0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_push_then_pop() {
        let mut buffer = [0u8; 32];
        let mut writer = Writer::new(&mut buffer);
        writer.write_be(-7_i16).unwrap();
        writer.write_le(3.25_f64).unwrap();
        writer.push(0xCAFE_u16, Endian::NATIVE).unwrap();
        writer.write_bytes(b"ok").unwrap();
        let written = writer.pos();

        let mut reader = Reader::new(&buffer[..written]);
        assert_eq!(reader.read_be::<i16>().unwrap(), -7);
        assert_eq!(reader.read_le::<f64>().unwrap(), 3.25);
        assert_eq!(reader.pop::<u16>(Endian::NATIVE).unwrap(), 0xCAFE);
        assert_eq!(reader.read_bytes(2).unwrap(), b"ok");
        assert!(!reader.has_more_data());
    }

    #[test]
    fn test_writer_navigation() {
        let mut buffer = [0u8; 6];
        let mut writer = Writer::new(&mut buffer);
        assert_eq!(writer.len(), 6);
        assert!(!writer.is_empty());

        writer.advance_by(2).unwrap();
        writer.push_be16(0x0102).unwrap();
        writer.seek(0).unwrap();
        writer.push_be16(0xFFFF).unwrap();
        assert_eq!(writer.seek(7), Err(Error::InvalidOffset(7)));

        writer.seek(6).unwrap();
        assert_eq!(writer.remaining(), 0);
        assert_eq!(
            writer.push_be8(0xAA),
            Err(Error::OutOfBounds {
                needed: 1,
                available: 0
            })
        );
        assert_eq!(writer.pos(), 6);

        writer.seek(0).unwrap();
        writer.push_be16(0xFFFF).unwrap();
        assert!(writer.advance_by(5).is_err());
        assert!(writer.write_bytes(&[0; 5]).is_err());
        assert_eq!(writer.pos(), 2);

        assert_eq!(buffer, [0xFF, 0xFF, 0x01, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_unchecked_push() {
        let mut buffer = [0u8; 6];
        let mut writer = Writer::new(&mut buffer);
        writer.ensure_remaining(6).unwrap();

        // SAFETY: six bytes were checked above.
        unsafe {
            writer.push_unchecked(0x0102_0304_u32, Endian::Big);
            writer.push_unchecked(0x0506_u16, Endian::Little);
        }
        assert_eq!(writer.pos(), 6);
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x06, 0x05]);
    }
}
