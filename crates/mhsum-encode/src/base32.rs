//! RFC 4648 base32, lowercase, without padding.
//!
//! Decoding folds uppercase input to lowercase; `=` padding is treated as an
//! out-of-alphabet character. Non-canonical trailing bits are rejected.

use crate::{Error, Result};

const NAME: &str = "base32";
const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

pub(crate) fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut acc: u32 = 0;
    let mut bits = 0usize;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((acc >> bits) & 0x1f) as usize] as char);
        }
    }

    if bits > 0 {
        out.push(ALPHABET[((acc << (5 - bits)) & 0x1f) as usize] as char);
    }

    out
}

pub(crate) fn decode(input: &str) -> Result<Vec<u8>> {
    // 1, 3 or 6 leftover characters can never fall out of whole bytes.
    if matches!(input.len() % 8, 1 | 3 | 6) {
        return Err(Error::InvalidLength {
            encoding: NAME,
            length: input.len(),
        });
    }

    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0usize;

    for character in input.chars() {
        let value = digit(character).ok_or(Error::InvalidCharacter {
            encoding: NAME,
            character,
        })?;
        acc = (acc << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    // Leftover bits must be zero, otherwise two strings decode to one value.
    if bits > 0 && acc & ((1 << bits) - 1) != 0 {
        return Err(Error::InvalidPadding { encoding: NAME });
    }

    Ok(out)
}

fn digit(character: char) -> Option<u8> {
    match character {
        'a'..='z' => Some(character as u8 - b'a'),
        'A'..='Z' => Some(character as u8 - b'A'),
        '2'..='7' => Some(character as u8 - b'2' + 26),
        _ => None,
    }
}
