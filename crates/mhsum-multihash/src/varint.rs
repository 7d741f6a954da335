use crate::{Error, Result};

/// Append `value` to `buf` as an unsigned varint.
///
/// Each byte carries 7 value bits, least-significant group first; the high bit
/// flags a continuation. A `u64` therefore never needs more than 10 bytes.
pub fn write_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(group);
            return;
        }
        buf.push(group | 0x80);
    }
}

/// Read an unsigned varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. Rejects sequences that
/// end on a continuation byte, overflow 64 bits, or spend a byte on an empty
/// final group (non-minimal encodings such as `0x80 0x00`).
pub fn read_uvarint(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut value: u64 = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let group = u64::from(byte & 0x7f);
        let shift = i * 7;

        // The 10th byte may only hold the single remaining high bit.
        if shift > 63 || (shift == 63 && group > 1) {
            return Err(Error::VarintOverflow);
        }

        value |= group << shift;

        if byte & 0x80 == 0 {
            if group == 0 && i > 0 {
                return Err(Error::NonMinimalVarint);
            }
            return Ok((value, i + 1));
        }
    }

    Err(Error::TruncatedVarint)
}
