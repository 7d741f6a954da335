use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::{Error, Result, base32, base58};

/// A supported textual scheme. The set is closed, so dispatch is an enum
/// rather than a lookup table.
///
/// Case handling per scheme: [`Hex`](Encoding::Hex) and
/// [`Base32`](Encoding::Base32) decode case-insensitively and encode
/// lowercase; the base58 and base64 alphabets are case-sensitive. `Base64`
/// carries standard `=` padding, `Base64Url` none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Hex,
    Base32,
    Base58Btc,
    Base64,
    Base64Url,
}

impl Encoding {
    pub const ALL: [Self; 5] = [
        Self::Hex,
        Self::Base32,
        Self::Base58Btc,
        Self::Base64,
        Self::Base64Url,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base32 => "base32",
            Self::Base58Btc => "base58",
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base32 => base32::encode(bytes),
            Self::Base58Btc => base58::encode(bytes),
            Self::Base64 => STANDARD.encode(bytes),
            Self::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    pub fn decode(self, input: &str) -> Result<Vec<u8>> {
        match self {
            Self::Hex => hex::decode(input).map_err(|e| hex_error(e, input)),
            Self::Base32 => base32::decode(input),
            Self::Base58Btc => base58::decode(input),
            Self::Base64 => STANDARD
                .decode(input)
                .map_err(|e| base64_error(e, input, self.name())),
            Self::Base64Url => URL_SAFE_NO_PAD
                .decode(input)
                .map_err(|e| base64_error(e, input, self.name())),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "hex" => Ok(Self::Hex),
            "base32" => Ok(Self::Base32),
            "base58" | "base58btc" => Ok(Self::Base58Btc),
            "base64" => Ok(Self::Base64),
            "base64url" => Ok(Self::Base64Url),
            other => Err(Error::UnknownEncoding(other.to_owned())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn hex_error(error: hex::FromHexError, input: &str) -> Error {
    match error {
        hex::FromHexError::InvalidHexCharacter { c, .. } => Error::InvalidCharacter {
            encoding: "hex",
            character: c,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            Error::InvalidLength {
                encoding: "hex",
                length: input.len(),
            }
        }
    }
}

fn base64_error(error: base64::DecodeError, input: &str, encoding: &'static str) -> Error {
    match error {
        base64::DecodeError::InvalidByte(_, byte) => Error::InvalidCharacter {
            encoding,
            character: char::from(byte),
        },
        base64::DecodeError::InvalidLength(_) => Error::InvalidLength {
            encoding,
            length: input.len(),
        },
        base64::DecodeError::InvalidLastSymbol(_, _) | base64::DecodeError::InvalidPadding => {
            Error::InvalidPadding { encoding }
        }
    }
}
