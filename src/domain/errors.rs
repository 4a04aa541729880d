use thiserror::Error;

/// Failures talking to an upstream timezone or holiday provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("ABSTRACT_TIMEZONE_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("{context}: {message}")]
    Upstream {
        context: String,
        status: u16,
        message: String,
    },
    #[error("{context}: {source}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}: {message}")]
    Decode { context: String, message: String },
}

impl ProviderError {
    /// HTTP status returned by the upstream, when it answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProviderError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
