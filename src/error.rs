//! Error types for sprout_notes

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or impossible `M/D/YY` token. Callers skip the entry and
    /// keep going.
    #[error("Invalid or ambiguous date encountered: {token} ({reason})")]
    InvalidDateToken { token: String, reason: &'static str },

    /// Required host state is unavailable; the invocation aborts.
    #[error("Cannot run without {0}")]
    HostContextMissing(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_date(token: &str, reason: &'static str) -> Self {
        Error::InvalidDateToken { token: token.to_string(), reason }
    }
}
