#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("varint ends before its final group")]
    TruncatedVarint,

    #[error("varint does not fit in 64 bits")]
    VarintOverflow,

    #[error("varint is not minimally encoded")]
    NonMinimalVarint,

    #[error("declared digest length {declared} exceeds the {available} remaining bytes")]
    DigestTooShort { declared: u64, available: usize },

    #[error("{0} unconsumed bytes after the digest")]
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
