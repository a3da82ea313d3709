use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// One corpus source could not be fetched or parsed. The loader moves on
    /// to the next source.
    #[error("Corpus source unavailable ({location}): {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// Every configured source failed; the loader falls back to the built-in sample.
    #[error("All {attempted} corpus source(s) failed")]
    CorpusExhausted { attempted: usize },
}

impl Error {
    pub fn unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
