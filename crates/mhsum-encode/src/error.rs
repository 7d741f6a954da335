#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("character {character:?} is not in the {encoding} alphabet")]
    InvalidCharacter {
        encoding: &'static str,
        character: char,
    },

    #[error("input length {length} is not valid for {encoding}")]
    InvalidLength {
        encoding: &'static str,
        length: usize,
    },

    #[error("invalid {encoding} padding")]
    InvalidPadding { encoding: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
