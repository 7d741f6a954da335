use std::str::FromStr;

use mhsum_encode::Encoding;

use crate::registry::{HashFn, Registry};
use crate::{Error, Result};

/// The user's raw algorithm/encoding/length selection, before it has been
/// checked against a registry. Populated from CLI flags (or equivalent),
/// then resolved exactly once.
#[derive(Clone, Debug)]
pub struct Options {
    pub algorithm: String,
    pub encoding: String,
    /// Explicit digest length override in bytes. Only variable-length
    /// algorithms accept a value other than their default.
    pub length: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: "sha2-256".to_owned(),
            encoding: "base58".to_owned(),
            length: None,
        }
    }
}

impl Options {
    /// Resolve against `registry`, short-circuiting on the first violation:
    /// algorithm, then encoding, then length. The result is read-only
    /// configuration; nothing downstream validates again.
    pub fn validate<'r>(&self, registry: &'r Registry) -> Result<ResolvedOptions<'r>> {
        let hash_fn = registry
            .by_name(&self.algorithm)
            .ok_or_else(|| Error::UnknownAlgorithm(self.algorithm.clone()))?;

        let encoding = Encoding::from_str(&self.encoding)?;

        let length = self.length.unwrap_or_else(|| hash_fn.default_length());
        if !hash_fn.supports_length(length) {
            return Err(Error::IncompatibleLength {
                algorithm: hash_fn.name(),
                requested: length,
                supported: hash_fn.default_length(),
            });
        }

        Ok(ResolvedOptions {
            hash_fn,
            encoding,
            length,
        })
    }
}

/// A validated selection: registry descriptor, textual scheme and the digest
/// length the engine will produce.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedOptions<'r> {
    hash_fn: &'r HashFn,
    encoding: Encoding,
    length: usize,
}

impl<'r> ResolvedOptions<'r> {
    pub fn hash_fn(&self) -> &'r HashFn {
        self.hash_fn
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(algorithm: &str, encoding: &str, length: Option<usize>) -> Options {
        Options {
            algorithm: algorithm.to_owned(),
            encoding: encoding.to_owned(),
            length,
        }
    }

    #[test]
    fn defaults_validate() {
        let registry = Registry::with_defaults();
        let resolved = Options::default().validate(&registry).unwrap();
        assert_eq!(resolved.hash_fn().name(), "sha2-256");
        assert_eq!(resolved.encoding(), Encoding::Base58Btc);
        assert_eq!(resolved.length(), 32);
    }

    #[test]
    fn unknown_algorithm_fails_at_validate() {
        let registry = Registry::with_defaults();
        let err = options("sha5963", "base58", None)
            .validate(&registry)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(name) if name == "sha5963"));
    }

    #[test]
    fn unknown_encoding_fails_at_validate() {
        let registry = Registry::with_defaults();
        let err = options("sha2-256", "base300", None)
            .validate(&registry)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding(mhsum_encode::Error::UnknownEncoding(name)) if name == "base300"
        ));
    }

    #[test]
    fn algorithm_checked_before_encoding() {
        // Both are wrong; the algorithm violation wins.
        let registry = Registry::with_defaults();
        let err = options("sha5963", "base300", None)
            .validate(&registry)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(_)));
    }

    #[test]
    fn fixed_length_override_rejected() {
        let registry = Registry::with_defaults();
        let err = options("sha2-256", "hex", Some(16))
            .validate(&registry)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::IncompatibleLength {
                algorithm: "sha2-256",
                requested: 16,
                supported: 32,
            }
        ));
    }

    #[test]
    fn matching_override_accepted_for_fixed_length() {
        let registry = Registry::with_defaults();
        let resolved = options("sha2-256", "hex", Some(32))
            .validate(&registry)
            .unwrap();
        assert_eq!(resolved.length(), 32);
    }

    #[test]
    fn variable_length_override_accepted() {
        let registry = Registry::with_defaults();
        let resolved = options("blake3", "hex", Some(64))
            .validate(&registry)
            .unwrap();
        assert_eq!(resolved.length(), 64);
    }

    #[test]
    fn zero_length_rejected_for_variable() {
        let registry = Registry::with_defaults();
        assert!(matches!(
            options("blake3", "hex", Some(0)).validate(&registry),
            Err(Error::IncompatibleLength { .. })
        ));
    }
}
