use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Upstream answered with a non-success status.
    Upstream { status: u16, body: String },
    /// Persisted data could not be read or written.
    Store(String),
    /// Anything else; logged by the caller.
    Anyhow(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream { status, body } => write!(f, "upstream HTTP {status}: {body}"),
            Self::Store(msg) => write!(f, "store: {msg}"),
            Self::Anyhow(e) => write!(f, "{e:#}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Anyhow(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Anyhow(e)
    }
}

/* ---- Narrow, explicit conversions so `?` works everywhere ---- */

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Anyhow(e.into())
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        Self::Anyhow(e.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Anyhow(e.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Anyhow(e.into())
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(e: tempfile::PersistError) -> Self {
        Self::Store(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
