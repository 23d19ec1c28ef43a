//! Byte order description and host endianness detection.
//!
//! This module defines [`crate::endian::Endian`], the explicit on-wire byte order that every
//! reading and writing function in this crate is parameterized by, and the host detection
//! routine [`crate::endian::detect_endian`].
//!
//! # Key Components
//!
//! - [`crate::endian::Endian`] - Big or little endian, with [`Endian::NATIVE`] and [`Endian::NETWORK`]
//! - [`crate::endian::detect_endian`] - Runtime probe of the host byte order
//! - [`crate::endian::swap`] - Raw 16/32/64-bit byte reversal primitives
//! - [`crate::endian::convert`] - Host to/from big and little endian conversions per width
//!
//! # Examples
//!
//! ```rust
//! use endiancodec::endian::{detect_endian, Endian};
//!
//! assert_eq!(detect_endian(), Endian::NATIVE);
//! assert_eq!(Endian::NETWORK, Endian::Big);
//! assert_eq!(Endian::Big.opposite(), Endian::Little);
//! ```

use std::fmt;

use crate::io::ByteIO;

pub mod convert;
pub mod swap;

/// Byte order of a multi-byte value in memory or on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Alias for [`Endian::Big`].
pub const BIG_ENDIAN: Endian = Endian::Big;

/// Alias for [`Endian::Little`].
pub const LITTLE_ENDIAN: Endian = Endian::Little;

impl Endian {
    /// Byte order of the compilation target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Byte order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Network byte order, which is big endian.
    pub const NETWORK: Endian = Endian::Big;

    /// Returns the other byte order.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    /// Returns `true` for [`Endian::Big`].
    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }

    /// Returns `true` for [`Endian::Little`].
    #[must_use]
    pub const fn is_little(self) -> bool {
        matches!(self, Endian::Little)
    }

    /// Returns `true` if this is the byte order of the host.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
        )
    }

    /// Converts a host-order value into this byte order.
    ///
    /// The returned value has the same bits as `value` laid out in memory as `self` expects.
    /// Identity when `self` is the host byte order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endiancodec::endian::Endian;
    ///
    /// let wire = Endian::Big.host_to(0x1234_u16);
    /// assert_eq!(wire.to_ne_bytes(), [0x12, 0x34]);
    /// ```
    #[must_use]
    pub fn host_to<T: ByteIO>(self, value: T) -> T {
        if self.is_native() {
            value
        } else {
            value.swap_order()
        }
    }

    /// Converts a value laid out in this byte order into host order.
    ///
    /// The inverse of [`Endian::host_to`].
    #[must_use]
    pub fn to_host<T: ByteIO>(self, value: T) -> T {
        self.host_to(value)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => write!(f, "big-endian"),
            Endian::Little => write!(f, "little-endian"),
        }
    }
}

/// Detects the byte order of the executing machine.
///
/// Stores the 16-bit pattern `0x1122` and inspects the first byte of its in-memory
/// representation. Always agrees with [`Endian::NATIVE`].
///
/// # Examples
///
/// ```rust
/// use endiancodec::endian::{detect_endian, Endian};
///
/// assert_eq!(detect_endian(), Endian::NATIVE);
/// ```
#[must_use]
pub fn detect_endian() -> Endian {
    let probe = 0x1122_u16.to_ne_bytes();
    if probe[0] == 0x11 {
        Endian::Big
    } else {
        Endian::Little
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_independent_probe() {
        let independent = if u16::from_ne_bytes([0x00, 0x01]) == 1 {
            Endian::Big
        } else {
            Endian::Little
        };
        assert_eq!(detect_endian(), independent);
        assert_eq!(detect_endian(), Endian::NATIVE);
    }

    #[test]
    fn test_detect_matches_target_cfg() {
        assert_eq!(detect_endian().is_big(), cfg!(target_endian = "big"));
        assert!(detect_endian().is_native());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Endian::Big.opposite(), Endian::Little);
        assert_eq!(Endian::Little.opposite(), Endian::Big);
        assert_eq!(Endian::NATIVE.opposite().opposite(), Endian::NATIVE);
        assert!(!Endian::NATIVE.opposite().is_native());
    }

    #[test]
    fn test_constants() {
        assert_eq!(BIG_ENDIAN, Endian::Big);
        assert_eq!(LITTLE_ENDIAN, Endian::Little);
        assert_eq!(Endian::NETWORK, BIG_ENDIAN);
    }

    #[test]
    fn test_host_conversion() {
        let value = 0x1234_5678_u32;
        assert_eq!(Endian::Big.host_to(value).to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(Endian::Little.host_to(value).to_ne_bytes(), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(Endian::Big.to_host(Endian::Big.host_to(value)), value);
        assert_eq!(Endian::Little.to_host(Endian::Little.host_to(value)), value);
    }

    #[test]
    fn test_display() {
        assert_eq!(Endian::Big.to_string(), "big-endian");
        assert_eq!(Endian::Little.to_string(), "little-endian");
    }
}
