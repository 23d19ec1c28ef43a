//! Raw byte reversal primitives for 16, 32 and 64-bit values.
//!
//! Two implementations are provided:
//!
//! - [`native`] maps onto the integer `swap_bytes` intrinsics, which lower to a single
//!   `bswap`/`rev` instruction on every tier-1 target.
//! - [`portable`] reverses the bytes with shifts and masks and relies on nothing but integer
//!   arithmetic.
//!
//! The crate-level [`swap16`], [`swap32`] and [`swap64`] re-export one of the two, chosen at
//! build time by the `portable-swap` cargo feature. Both are always compiled so they can be
//! checked against each other.

#[cfg(not(feature = "portable-swap"))]
pub use native::{swap16, swap32, swap64};
#[cfg(feature = "portable-swap")]
pub use portable::{swap16, swap32, swap64};

/// Byte reversal through the platform intrinsics.
pub mod native {
    /// Reverses the byte order of a 16-bit value.
    #[inline]
    #[must_use]
    pub const fn swap16(value: u16) -> u16 {
        value.swap_bytes()
    }

    /// Reverses the byte order of a 32-bit value.
    #[inline]
    #[must_use]
    pub const fn swap32(value: u32) -> u32 {
        value.swap_bytes()
    }

    /// Reverses the byte order of a 64-bit value.
    #[inline]
    #[must_use]
    pub const fn swap64(value: u64) -> u64 {
        value.swap_bytes()
    }
}

/// Byte reversal by manual shifting, for targets without a usable intrinsic.
pub mod portable {
    /// Reverses the byte order of a 16-bit value.
    #[inline]
    #[must_use]
    pub const fn swap16(value: u16) -> u16 {
        ((value & 0xFF00) >> 8) | ((value & 0x00FF) << 8)
    }

    /// Reverses the byte order of a 32-bit value.
    #[inline]
    #[must_use]
    pub const fn swap32(value: u32) -> u32 {
        ((value & 0xFF00_0000) >> 24)
            | ((value & 0x00FF_0000) >> 8)
            | ((value & 0x0000_FF00) << 8)
            | ((value & 0x0000_00FF) << 24)
    }

    /// Reverses the byte order of a 64-bit value.
    #[inline]
    #[must_use]
    pub const fn swap64(value: u64) -> u64 {
        ((value & 0xFF00_0000_0000_0000) >> 56)
            | ((value & 0x00FF_0000_0000_0000) >> 40)
            | ((value & 0x0000_FF00_0000_0000) >> 24)
            | ((value & 0x0000_00FF_0000_0000) >> 8)
            | ((value & 0x0000_0000_FF00_0000) << 8)
            | ((value & 0x0000_0000_00FF_0000) << 24)
            | ((value & 0x0000_0000_0000_FF00) << 40)
            | ((value & 0x0000_0000_0000_00FF) << 56)
    }
}
