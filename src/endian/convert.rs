//! Width-specific conversions between host order and big or little endian.
//!
//! Every function returns its argument unchanged when the host already uses the target
//! layout, and a byte-reversed copy otherwise. The choice is made at compile time from
//! `target_endian`, so on a little-endian host the `le` family compiles to nothing and the
//! `be` family to a single swap.
//!
//! # Examples
//!
//! ```rust
//! use endiancodec::endian::convert::{be32_to_host, host_to_be32};
//!
//! let wire = host_to_be32(0x1234_5678);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(be32_to_host(wire), 0x1234_5678);
//! ```

use super::swap::{swap16, swap32, swap64};

macro_rules! endian_conversions {
    ($ty:ty, $swap:ident, $to_be:ident, $from_be:ident, $to_le:ident, $from_le:ident) => {
        #[doc = concat!("Converts a host-order `", stringify!($ty), "` to big endian.")]
        #[inline]
        #[must_use]
        pub const fn $to_be(value: $ty) -> $ty {
            if cfg!(target_endian = "big") {
                value
            } else {
                $swap(value)
            }
        }

        #[doc = concat!("Converts a big-endian `", stringify!($ty), "` to host order.")]
        #[inline]
        #[must_use]
        pub const fn $from_be(value: $ty) -> $ty {
            $to_be(value)
        }

        #[doc = concat!("Converts a host-order `", stringify!($ty), "` to little endian.")]
        #[inline]
        #[must_use]
        pub const fn $to_le(value: $ty) -> $ty {
            if cfg!(target_endian = "little") {
                value
            } else {
                $swap(value)
            }
        }

        #[doc = concat!("Converts a little-endian `", stringify!($ty), "` to host order.")]
        #[inline]
        #[must_use]
        pub const fn $from_le(value: $ty) -> $ty {
            $to_le(value)
        }
    };
}

endian_conversions!(u16, swap16, host_to_be16, be16_to_host, host_to_le16, le16_to_host);
endian_conversions!(u32, swap32, host_to_be32, be32_to_host, host_to_le32, le32_to_host);
endian_conversions!(u64, swap64, host_to_be64, be64_to_host, host_to_le64, le64_to_host);
