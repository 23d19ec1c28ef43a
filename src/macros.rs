#![allow(unused_macros)]

/// Implements [`crate::io::ByteIO`] for a primitive integer type.
///
/// ```rust, ignore
///  impl_byte_io!(int u32, 4);
/// ```
macro_rules! impl_byte_io {
    (int $ty:ty, $len:expr) => {
        impl crate::io::sealed::Sealed for $ty {}

        impl crate::io::ByteIO for $ty {
            type Bytes = [u8; $len];

            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_le_bytes(bytes)
            }

            fn from_be_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_be_bytes(bytes)
            }

            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            fn to_be_bytes(self) -> Self::Bytes {
                <$ty>::to_be_bytes(self)
            }

            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }

            fn swap_order(self) -> Self {
                self.swap_bytes()
            }
        }
    };

    (float $ty:ty, $len:expr) => {
        impl crate::io::sealed::Sealed for $ty {}

        impl crate::io::ByteIO for $ty {
            type Bytes = [u8; $len];

            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_le_bytes(bytes)
            }

            fn from_be_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_be_bytes(bytes)
            }

            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            fn to_be_bytes(self) -> Self::Bytes {
                <$ty>::to_be_bytes(self)
            }

            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }

            // Swaps the raw bits; NaN payloads are preserved.
            fn swap_order(self) -> Self {
                <$ty>::from_bits(self.to_bits().swap_bytes())
            }
        }
    };
}

/// Generates the width-named get/put helpers on top of [`crate::io::read`] and
/// [`crate::io::write`].
///
/// ```rust, ignore
///  get_put!(u16, Endian::Big, "big endian", get_be16, put_be16);
/// ```
macro_rules! get_put {
    ($ty:ty, $endian:expr, $order:literal, $get:ident, $put:ident) => {
        #[doc = concat!(
            "Reads a `", stringify!($ty), "` stored as ", $order,
            " from the start of `data`."
        )]
        ///
        /// # Errors
        ///
        /// Returns [`crate::Error::OutOfBounds`] if `data` is too short.
        pub fn $get(data: &[u8]) -> crate::Result<$ty> {
            crate::io::read::<$ty>(data, $endian)
        }

        #[doc = concat!(
            "Writes a `", stringify!($ty), "` as ", $order,
            " to the start of `data`."
        )]
        ///
        /// # Errors
        ///
        /// Returns [`crate::Error::OutOfBounds`] if `data` is too short.
        pub fn $put(data: &mut [u8], value: $ty) -> crate::Result<()> {
            crate::io::write::<$ty>(data, value, $endian)
        }
    };
}

/// Generates the width-named pop/push methods of the cursor types on top of their generic
/// `pop`/`push`.
///
/// ```rust, ignore
///  impl Reader<'_> {
///      pop_methods! {
///          u32, Endian::Big, "big endian", pop_be32;
///      }
///  }
/// ```
macro_rules! pop_methods {
    ($( $ty:ty, $endian:expr, $order:literal, $name:ident; )*) => {
        $(
            #[doc = concat!(
                "Reads a `", stringify!($ty), "` stored as ", $order,
                " and advances the cursor past it."
            )]
            ///
            /// # Errors
            ///
            /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain. The cursor
            /// does not move in that case.
            pub fn $name(&mut self) -> crate::Result<$ty> {
                self.pop::<$ty>($endian)
            }
        )*
    };
}

/// Counterpart of `pop_methods!` for [`crate::cursor::Writer`].
macro_rules! push_methods {
    ($( $ty:ty, $endian:expr, $order:literal, $name:ident; )*) => {
        $(
            #[doc = concat!(
                "Writes a `", stringify!($ty), "` as ", $order,
                " and advances the cursor past it."
            )]
            ///
            /// # Errors
            ///
            /// Returns [`crate::Error::OutOfBounds`] if not enough bytes remain. The cursor
            /// does not move in that case.
            pub fn $name(&mut self, value: $ty) -> crate::Result<()> {
                self.push::<$ty>(value, $endian)
            }
        )*
    };
}
