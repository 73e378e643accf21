use thiserror::Error;

/// Errors produced while configuring or running a [`Validator`](crate::Validator).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A setting was out of range or malformed. Settings are never silently clamped.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tokenizer, lemmatizer, or stemmer could not process its input.
    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    pub(crate) fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Shorthand for capability implementations outside this crate.
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
