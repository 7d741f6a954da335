use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("algorithm '{0}' is not registered")]
    UnknownAlgorithm(String),

    #[error("algorithm '{name}' (code {code:#x}) is already registered")]
    DuplicateAlgorithm { name: &'static str, code: u64 },

    #[error("length {requested} is incompatible with '{algorithm}' ({supported} bytes)")]
    IncompatibleLength {
        algorithm: &'static str,
        requested: usize,
        supported: usize,
    },

    #[error(transparent)]
    Encoding(#[from] mhsum_encode::Error),

    #[error(transparent)]
    Container(#[from] mhsum_multihash::Error),

    #[error("failed to read input")]
    InputRead(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
