use std::fmt;

use crate::varint::{read_uvarint, write_uvarint};
use crate::{Error, Result};

/// A self-describing hash: function code, declared digest length, digest.
///
/// The length field can never diverge from the digest — construction derives
/// it and [`Multihash::from_bytes`] enforces the equality while parsing.
/// Compared by structural equality over all three fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multihash {
    code: u64,
    length: usize,
    digest: Vec<u8>,
}

impl Multihash {
    /// Package a digest under the given function code.
    pub fn new(code: u64, digest: Vec<u8>) -> Self {
        Self {
            code,
            length: digest.len(),
            digest,
        }
    }

    /// Hash-function code. May be unknown to any given registry.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Declared digest length in bytes. Always equals `digest().len()`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Serialize to the binary container form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.digest.len() + 10);
        write_uvarint(&mut buf, self.code);
        write_uvarint(&mut buf, self.digest.len() as u64);
        buf.extend_from_slice(&self.digest);
        buf
    }

    /// Parse a binary container.
    ///
    /// The whole buffer must be consumed: a declared length the remaining
    /// bytes cannot satisfy fails with [`Error::DigestTooShort`], leftover
    /// bytes with [`Error::TrailingBytes`]. Nothing is truncated or padded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (code, read) = read_uvarint(bytes)?;
        let rest = &bytes[read..];

        let (declared, read) = read_uvarint(rest)?;
        let rest = &rest[read..];

        if declared > rest.len() as u64 {
            return Err(Error::DigestTooShort {
                declared,
                available: rest.len(),
            });
        }

        let length = declared as usize;
        if rest.len() > length {
            return Err(Error::TrailingBytes(rest.len() - length));
        }

        Ok(Self {
            code,
            length,
            digest: rest.to_vec(),
        })
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
