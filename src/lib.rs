// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
// - 'io.rs' and 'cursor.rs' expose unaligned pointer loads/stores as an unchecked fast path

//! # endiancodec
//!
//! Byte-order conversion and buffer read/write primitives for binary protocol and file format
//! code. `endiancodec` detects the host byte order, converts 16/32/64-bit integers between
//! big-endian, little-endian and host representations, and moves a cursor through a byte
//! buffer while encoding or decoding fixed-width values.
//!
//! ## Features
//!
//! - **Explicit byte order** - Every operation takes an [`Endian`] or names it (`be`/`le`)
//! - **Bounds checked by default** - Short buffers surface [`Error::OutOfBounds`] instead of
//!   reading past the end
//! - **Unchecked fast path** - `unsafe` variants for frames whose length is already validated
//! - **No allocation** - All operations work on caller-provided slices
//! - **Swap backend selection** - The `portable-swap` feature switches `endian::swap` and the
//!   `endian::convert` functions built on it to a shift-and-mask fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use endiancodec::prelude::*;
//!
//! let mut frame = [0u8; 6];
//! let mut writer = Writer::new(&mut frame);
//! writer.push_be16(0x0102)?;
//! writer.push_le32(0x0605_0403)?;
//!
//! let mut reader = Reader::new(&frame);
//! assert_eq!(reader.pop_be16()?, 0x0102);
//! assert_eq!(reader.pop_le32()?, 0x0605_0403);
//! # Ok::<(), endiancodec::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`endian`] - [`Endian`], host detection, swap primitives and width-named conversions
//! - [`io`] - [`ByteIO`] and the free functions that read or write values in buffers
//! - [`cursor`] - [`Reader`] and [`Writer`] for sequential frame access
//! - [`serialize`] - Generic serialize/deserialize with explicit host and buffer byte orders
//!
//! ## Error Handling
//!
//! All checked operations return [`Result`]. The `*_unchecked` operations never fail and
//! instead state their preconditions under `# Safety`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Cursor operations
//! that are rejected for lack of space emit a `trace` record with the requested and available
//! byte counts.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Byte order description, host detection and integer byte swapping.
pub mod endian;

/// Endian-aware reading and writing of fixed-width values in byte buffers.
pub mod io;

/// Cursor types for sequential encoding and decoding.
pub mod cursor;

/// Generic serialize/deserialize with explicit host and buffer byte orders.
pub mod serialize;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use endiancodec::prelude::*;
///
/// let mut buf = [0u8; 2];
/// write_be(&mut buf, 0xBEEF_u16)?;
/// assert_eq!(read_le::<u16>(&buf)?, 0xEFBE);
/// # Ok::<(), endiancodec::Error>(())
/// ```
pub mod prelude;

/// `endiancodec` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `endiancodec` Error type
///
/// # Examples
///
/// ```rust
/// use endiancodec::{Error, Reader};
///
/// let mut reader = Reader::new(&[0x01]);
/// match reader.pop_be32() {
///     Err(Error::OutOfBounds { needed, available }) => assert_eq!((needed, available), (4, 1)),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub use error::Error;

pub use cursor::{Reader, Writer};
pub use endian::{detect_endian, Endian};
pub use io::ByteIO;
pub use serialize::{decode, deserialize, encode, serialize};
