use thiserror::Error;

/// Builds an [`Error::OutOfBounds`] for an access of `$needed` bytes against
/// `$available` remaining bytes.
///
/// ```rust, ignore
/// if remaining < 4 {
///     return Err(out_of_bounds_error!(4, remaining));
/// }
/// ```
macro_rules! out_of_bounds_error {
    ($needed:expr, $available:expr) => {
        crate::Error::OutOfBounds {
            needed: $needed,
            available: $available,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only the checked API produces errors. The `*_unchecked` functions have no error path and
/// instead document their preconditions under `# Safety`.
///
/// # Error Categories
///
/// - [`Error::OutOfBounds`] - The buffer is shorter than the value being read or written
/// - [`Error::InvalidOffset`] - A cursor was moved past the end of its buffer
/// - [`Error::InvalidWidth`] - A dynamic-width field was requested with an unsupported size
///
/// # Examples
///
/// ```rust
/// use endiancodec::{io::read_be, Error};
///
/// let short = [0x12, 0x34];
/// match read_be::<u32>(&short) {
///     Ok(value) => println!("decoded {value:#x}"),
///     Err(Error::OutOfBounds { needed, available }) => {
///         eprintln!("need {needed} bytes, have {available}");
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An out of bound access was attempted.
    ///
    /// Raised when fewer than `needed` bytes are available at the access point. Cursors and
    /// offsets are left unchanged when this is returned.
    ///
    /// # Fields
    ///
    /// * `needed` - Number of bytes the operation required
    /// * `available` - Number of bytes left in the buffer at the access point
    #[error("Out of Bound access would have occurred! (needed {needed} bytes, {available} available)")]
    OutOfBounds {
        /// Number of bytes the operation required
        needed: usize,
        /// Number of bytes left in the buffer at the access point
        available: usize,
    },

    /// A cursor was asked to move to a position beyond the end of its buffer.
    #[error("Could not seek to offset {0}, it lies beyond the buffer")]
    InvalidOffset(usize),

    /// A dynamic-width field helper was called with a width other than 2 or 4 bytes.
    #[error("Unsupported field width - {0} bytes")]
    InvalidWidth(usize),
}
