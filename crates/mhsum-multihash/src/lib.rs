//! The multihash binary container: a digest prefixed with its hash-function
//! code and byte length, so the value describes its own provenance.
//!
//! Layout: `uvarint(code) || uvarint(length) || digest`. Decoding is strict —
//! truncated or non-minimal varints, a declared length the buffer cannot
//! satisfy, and trailing bytes are all rejected. An unrecognized function code
//! is not: unknown algorithms must still round-trip, and recognition belongs
//! to the layers that hold a registry.

pub use self::error::{Error, Result};
pub use self::multihash::Multihash;
pub use self::varint::{read_uvarint, write_uvarint};

mod error;
mod multihash;
mod varint;
