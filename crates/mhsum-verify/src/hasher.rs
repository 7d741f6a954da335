use digest::Digest;

/// Incremental digest over a byte stream.
///
/// The one seam a new algorithm has to implement; everything else (registry
/// entry, length policy) is data.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter for any RustCrypto [`Digest`] implementation.
pub struct DigestHasher<D>(D);

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self {
        Self(D::new())
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

/// BLAKE3 with a caller-selected output length via the XOF reader.
pub struct Blake3Hasher {
    inner: blake3::Hasher,
    length: usize,
}

impl Blake3Hasher {
    pub fn new(length: usize) -> Self {
        Self {
            inner: blake3::Hasher::new(),
            length,
        }
    }
}

impl Hasher for Blake3Hasher {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        let mut out = vec![0u8; self.length];
        self.inner.finalize_xof().fill(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_hasher_matches_one_shot() {
        let mut hasher = Box::new(DigestHasher::<sha2::Sha256>::new());
        hasher.update(b"Hello, ");
        hasher.update(b"world!");
        assert_eq!(
            hasher.finalize(),
            sha2::Sha256::digest(b"Hello, world!").to_vec()
        );
    }

    #[test]
    fn blake3_xof_prefix_property() {
        // A longer XOF output starts with the shorter one.
        let mut short = Box::new(Blake3Hasher::new(16));
        let mut long = Box::new(Blake3Hasher::new(64));
        short.update(b"abc");
        long.update(b"abc");

        let short = short.finalize();
        let long = long.finalize();
        assert_eq!(short.len(), 16);
        assert_eq!(long.len(), 64);
        assert_eq!(short[..], long[..16]);
    }

    #[test]
    fn blake3_default_length_matches_crate() {
        let mut hasher = Box::new(Blake3Hasher::new(32));
        hasher.update(b"abc");
        assert_eq!(
            hasher.finalize(),
            blake3::hash(b"abc").as_bytes().to_vec()
        );
    }
}
