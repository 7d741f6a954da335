//! Multihash computation and verification.
//!
//! A [`Registry`] maps algorithm names and multiformats codes to digest
//! implementations. [`Options`] resolves a user's algorithm/encoding/length
//! selection against it exactly once; the resulting [`ResolvedOptions`] drives
//! [`compute`] and [`check`] without re-validation. Verification is a
//! structural comparison of whole containers — a mismatch never reveals which
//! field differed.

pub use self::engine::{Outcome, check, compute, verify};
pub use self::error::{Error, Result};
pub use self::hasher::{Blake3Hasher, DigestHasher, Hasher};
pub use self::options::{Options, ResolvedOptions};
pub use self::registry::{HashFn, Registry};

mod engine;
mod error;
mod hasher;
mod options;
mod registry;
