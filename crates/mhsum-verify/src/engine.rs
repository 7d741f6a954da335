use std::io::{self, Read};

use mhsum_multihash::Multihash;

use crate::options::ResolvedOptions;
use crate::{Error, Result};

const READ_BUF: usize = 8 * 1024;

/// Result of comparing a computed hash against a reference.
///
/// A mismatch is an expected verification outcome, not a failure; hard
/// failures (I/O, algorithm) surface as `Err` before any comparison happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Mismatched,
}

/// Hash `input` to completion with the configured algorithm and package the
/// digest as a [`Multihash`].
///
/// Reads sequentially in fixed-size chunks; the source only has to produce
/// bytes, never seek. The stream is not held past this call.
pub fn compute<R: Read>(options: &ResolvedOptions<'_>, mut input: R) -> Result<Multihash> {
    let hash_fn = options.hash_fn();
    let mut hasher = hash_fn.hasher(options.length());
    let mut buf = [0u8; READ_BUF];
    let mut total: u64 = 0;

    loop {
        match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buf[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::InputRead(e)),
        }
    }

    tracing::debug!(
        algorithm = hash_fn.name(),
        bytes = total,
        length = options.length(),
        "computed digest"
    );

    Ok(Multihash::new(hash_fn.code(), hasher.finalize()))
}

/// Structural equality over function code, declared length and digest bytes.
///
/// Any field differing means "no match", with no indication of which one —
/// a checksum mismatch is not an oracle for why two claims differ.
pub fn verify(computed: &Multihash, reference: &Multihash) -> bool {
    computed == reference
}

/// Compute a hash over `input` and compare it against `reference`.
pub fn check<R: Read>(
    options: &ResolvedOptions<'_>,
    input: R,
    reference: &Multihash,
) -> Result<Outcome> {
    let computed = compute(options, input)?;

    if verify(&computed, reference) {
        Ok(Outcome::Matched)
    } else {
        tracing::debug!(%computed, %reference, "checksum mismatch");
        Ok(Outcome::Mismatched)
    }
}
