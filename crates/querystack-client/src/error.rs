//! The client-facing error type.
//!
//! Propagation policy: nothing is retried anywhere in this crate. Every
//! error is raised synchronously to the caller of the operation that
//! triggered it; there is no partial-success state.

use querystack_core::{ApiErrorKind, ConfigError};
use querystack_xml::XmlError;

/// Errors surfaced by [`crate::QueryClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A client-side argument error, raised before any network activity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A server-signaled error parsed from the response envelope.
    ///
    /// `code` is the dot-stripped error code identifier; `message` is the
    /// server's original human-readable message.
    #[error("{code} (HTTP {status}): {message}")]
    Api {
        /// The symbolic category the code resolved to.
        kind: ApiErrorKind,
        /// The dot-stripped error code.
        code: String,
        /// The server's message.
        message: String,
        /// The HTTP status the envelope arrived with.
        status: u16,
    },

    /// A 5xx response whose body carried no recognizable error envelope.
    #[error("unexpected server error (HTTP {status}): {body}")]
    UnexpectedServerError {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A non-success response whose body did not match the expected
    /// error-envelope shape. Signals a protocol mismatch; never swallowed.
    #[error("unexpected error response format (HTTP {status}): {body}")]
    MalformedErrorResponse {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A success response whose body failed to parse as XML.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A DNS, connection, or protocol failure from the HTTP stack,
    /// propagated as-is.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl From<ConfigError> for QueryError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
