use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Coarse classification of gateway failures, threaded up to the API
/// boundary so callers never have to sniff error-message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The provider requires a second-factor verification code; the caller
    /// should resubmit with one.
    NeedsVerification,
    /// The provider returned a non-success status.
    Rejected,
    /// The provider answered but the body was unusable (not JSON, or
    /// missing the account identifier).
    BadResponse,
    /// The request never completed (DNS, connect, timeout).
    Transport,
}

/// Errors from the single outbound call to the aggregation API.
/// Nothing is retried - a failure surfaces immediately.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider rejected the request ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        needs_verification: bool,
        location: ErrorLocation,
    },

    #[error("Unusable provider response: {message} {location}")]
    BadResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            GatewayError::Transport { .. } => GatewayErrorKind::Transport,
            GatewayError::Rejected {
                needs_verification: true,
                ..
            } => GatewayErrorKind::NeedsVerification,
            GatewayError::Rejected { .. } => GatewayErrorKind::Rejected,
            GatewayError::BadResponse { .. } => GatewayErrorKind::BadResponse,
        }
    }

    pub fn needs_verification(&self) -> bool {
        self.kind() == GatewayErrorKind::NeedsVerification
    }

    /// Provider-supplied detail suitable for the error response body.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Transport { message, .. } => message.clone(),
            GatewayError::Rejected { message, .. } => message.clone(),
            GatewayError::BadResponse { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
