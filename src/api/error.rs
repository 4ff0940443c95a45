use thiserror::Error;

/// Failures of a call to the Products service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{method} {url} failed: {source}")]
    Network {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned HTTP {status}")]
    Server {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response of {method} {url}: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of a non-2xx response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable tag for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client(_) => "client_error",
            ApiError::Network { .. } => "network_error",
            ApiError::Server { .. } => "server_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}
