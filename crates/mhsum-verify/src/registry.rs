use std::collections::HashMap;

use digest::consts::U32;

use crate::hasher::{Blake3Hasher, DigestHasher, Hasher};
use crate::{Error, Result};

type Blake2b256 = blake2::Blake2b<U32>;

/// One registered hash function: multiformats code, canonical name, natural
/// digest length and a factory for its streaming hasher.
#[derive(Debug)]
pub struct HashFn {
    name: &'static str,
    code: u64,
    default_length: usize,
    variable: bool,
    new_hasher: fn(usize) -> Box<dyn Hasher>,
}

impl HashFn {
    pub fn new(
        name: &'static str,
        code: u64,
        default_length: usize,
        new_hasher: fn(usize) -> Box<dyn Hasher>,
    ) -> Self {
        Self {
            name,
            code,
            default_length,
            variable: false,
            new_hasher,
        }
    }

    /// Like [`HashFn::new`] for algorithms whose output length is a free
    /// parameter (XOFs).
    pub fn variable_length(
        name: &'static str,
        code: u64,
        default_length: usize,
        new_hasher: fn(usize) -> Box<dyn Hasher>,
    ) -> Self {
        Self {
            variable: true,
            ..Self::new(name, code, default_length, new_hasher)
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    /// Whether `length` is a digest length this algorithm can produce.
    pub fn supports_length(&self, length: usize) -> bool {
        if self.variable {
            length > 0
        } else {
            length == self.default_length
        }
    }

    /// Build a hasher producing `length` bytes. Callers go through options
    /// validation first, so `length` is one this algorithm supports.
    pub fn hasher(&self, length: usize) -> Box<dyn Hasher> {
        (self.new_hasher)(length)
    }
}

/// Append-only table of hash functions, keyed by name and by code.
///
/// Built once at startup and handed around by reference; nothing mutates it
/// afterwards, so shared reads need no synchronization.
pub struct Registry {
    entries: Vec<HashFn>,
    by_name: HashMap<&'static str, usize>,
    by_code: HashMap<u64, usize>,
    aliases: HashMap<&'static str, &'static str>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            by_code: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// The built-in multiformats table.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let table = [
            HashFn::new("sha2-256", 0x12, 32, |_| {
                Box::new(DigestHasher::<sha2::Sha256>::new())
            }),
            HashFn::new("sha2-512", 0x13, 64, |_| {
                Box::new(DigestHasher::<sha2::Sha512>::new())
            }),
            HashFn::new("sha3-512", 0x14, 64, |_| {
                Box::new(DigestHasher::<sha3::Sha3_512>::new())
            }),
            HashFn::new("sha3-384", 0x15, 48, |_| {
                Box::new(DigestHasher::<sha3::Sha3_384>::new())
            }),
            HashFn::new("sha3-256", 0x16, 32, |_| {
                Box::new(DigestHasher::<sha3::Sha3_256>::new())
            }),
            HashFn::new("sha3-224", 0x17, 28, |_| {
                Box::new(DigestHasher::<sha3::Sha3_224>::new())
            }),
            HashFn::variable_length("blake3", 0x1e, 32, |length| {
                Box::new(Blake3Hasher::new(length))
            }),
            HashFn::new("blake2b-256", 0xb220, 32, |_| {
                Box::new(DigestHasher::<Blake2b256>::new())
            }),
            HashFn::new("blake2b-512", 0xb240, 64, |_| {
                Box::new(DigestHasher::<blake2::Blake2b512>::new())
            }),
            HashFn::new("blake2s-256", 0xb260, 32, |_| {
                Box::new(DigestHasher::<blake2::Blake2s256>::new())
            }),
        ];

        for hash_fn in table {
            registry
                .register(hash_fn)
                .expect("built-in algorithm table is disjoint");
        }
        registry
            .alias("sha3", "sha3-512")
            .expect("built-in aliases resolve");

        registry
    }

    /// Register a hash function. Duplicate names or codes are configuration
    /// errors; registration happens before any hashing work.
    pub fn register(&mut self, hash_fn: HashFn) -> Result<()> {
        if self.by_name.contains_key(hash_fn.name)
            || self.aliases.contains_key(hash_fn.name)
            || self.by_code.contains_key(&hash_fn.code)
        {
            return Err(Error::DuplicateAlgorithm {
                name: hash_fn.name,
                code: hash_fn.code,
            });
        }

        let index = self.entries.len();
        self.by_name.insert(hash_fn.name, index);
        self.by_code.insert(hash_fn.code, index);
        self.entries.push(hash_fn);
        Ok(())
    }

    /// Map an extra name onto an already registered canonical one.
    pub fn alias(&mut self, alias: &'static str, canonical: &'static str) -> Result<()> {
        if self.by_name.contains_key(alias) || self.aliases.contains_key(alias) {
            let code = self
                .by_name(alias)
                .map(HashFn::code)
                .unwrap_or_default();
            return Err(Error::DuplicateAlgorithm { name: alias, code });
        }
        let canonical = self
            .by_name
            .get_key_value(canonical)
            .map(|(&name, _)| name)
            .ok_or_else(|| Error::UnknownAlgorithm(canonical.to_owned()))?;

        self.aliases.insert(alias, canonical);
        Ok(())
    }

    /// Look up by name or alias. Names are canonically lowercase.
    pub fn by_name(&self, name: &str) -> Option<&HashFn> {
        let name = name.to_ascii_lowercase();
        let name = self
            .aliases
            .get(name.as_str())
            .copied()
            .unwrap_or(name.as_str());
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Look up by multiformats code.
    pub fn by_code(&self, code: u64) -> Option<&HashFn> {
        self.by_code.get(&code).map(|&index| &self.entries[index])
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_both_ways() {
        let registry = Registry::with_defaults();
        let sha2 = registry.by_name("sha2-256").unwrap();
        assert_eq!(sha2.code(), 0x12);
        assert_eq!(sha2.default_length(), 32);
        assert_eq!(registry.by_code(0x12).unwrap().name(), "sha2-256");
        assert_eq!(registry.by_code(0xb240).unwrap().name(), "blake2b-512");
    }

    #[test]
    fn alias_resolves_to_canonical_descriptor() {
        let registry = Registry::with_defaults();
        let via_alias = registry.by_name("sha3").unwrap();
        assert_eq!(via_alias.name(), "sha3-512");
        assert_eq!(via_alias.code(), 0x14);
    }

    #[test]
    fn lookup_normalizes_case() {
        let registry = Registry::with_defaults();
        assert!(registry.by_name("SHA2-256").is_some());
    }

    #[test]
    fn unknown_lookups_are_none() {
        let registry = Registry::with_defaults();
        assert!(registry.by_name("sha5963").is_none());
        assert!(registry.by_code(0x5963).is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut registry = Registry::with_defaults();
        let dup = HashFn::new("sha2-256", 0x7777, 32, |_| {
            Box::new(DigestHasher::<sha2::Sha256>::new())
        });
        assert!(matches!(
            registry.register(dup),
            Err(Error::DuplicateAlgorithm { name: "sha2-256", .. })
        ));
    }

    #[test]
    fn duplicate_code_rejected() {
        let mut registry = Registry::with_defaults();
        let dup = HashFn::new("not-sha2", 0x12, 32, |_| {
            Box::new(DigestHasher::<sha2::Sha256>::new())
        });
        assert!(matches!(
            registry.register(dup),
            Err(Error::DuplicateAlgorithm { code: 0x12, .. })
        ));
    }

    #[test]
    fn length_support_policy() {
        let registry = Registry::with_defaults();
        let sha2 = registry.by_name("sha2-256").unwrap();
        assert!(sha2.supports_length(32));
        assert!(!sha2.supports_length(16));

        let blake3 = registry.by_name("blake3").unwrap();
        assert!(blake3.supports_length(32));
        assert!(blake3.supports_length(100));
        assert!(!blake3.supports_length(0));
    }
}
