use thiserror::Error;

pub const UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the server. Please check if the backend is running.";
pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred";
pub const INVALID_PREDICTION_RESPONSE: &str = "Invalid prediction response";
pub const UNEXPECTED_CLIENT_MESSAGE: &str = "An unexpected error occurred";

/// Every failure of a prediction service call, normalized to one of three
/// shapes callers can match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The request went out but no response came back (refused, reset,
    /// timed out).
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// The request could not be built, or the local side could not make
    /// sense of what it had. The message is propagated as-is.
    #[error("{0}")]
    Client(String),
}

impl ApiError {
    pub(crate) fn client(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            ApiError::Client(UNEXPECTED_CLIENT_MESSAGE.to_string())
        } else {
            ApiError::Client(message)
        }
    }

    /// HTTP status of the failure: the real code for server errors, the
    /// `0` sentinel when unreachable, nothing for client-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unreachable => Some(0),
            ApiError::Client(_) => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable)
    }
}
