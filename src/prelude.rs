pub use crate::{
    cursor::{Reader, Writer},
    endian::{
        convert::{
            be16_to_host, be32_to_host, be64_to_host, host_to_be16, host_to_be32, host_to_be64,
            host_to_le16, host_to_le32, host_to_le64, le16_to_host, le32_to_host, le64_to_host,
        },
        detect_endian, Endian,
    },
    io::{
        read, read_at, read_be, read_be_at, read_le, read_le_at, write, write_at, write_be,
        write_be_at, write_le, write_le_at, ByteIO,
    },
    serialize::{decode, deserialize, encode, serialize},
    Error, Result,
};
