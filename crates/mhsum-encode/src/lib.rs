//! Textual radix encodings over raw bytes.
//!
//! The scheme set is closed and small, so selection is an enum rather than a
//! runtime registry. Every scheme round-trips losslessly; decoding rejects
//! out-of-alphabet characters and structurally invalid lengths or padding
//! instead of coercing.

pub use self::encoding::Encoding;
pub use self::error::{Error, Result};

mod base32;
mod base58;
mod encoding;
mod error;
