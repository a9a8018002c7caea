//! Response interpretation.
//!
//! A success response parses directly into the generic tree. A failure
//! response is expected to carry an XML error envelope in one of the
//! shapes AWS uses:
//!
//! ```text
//! <Response><Errors><Error><Code>..</Code><Message>..</Message>...
//! <ErrorResponse><Error><Code>..</Code><Message>..</Message>...
//! ```
//!
//! The parsed code is dot-stripped and resolved through the static
//! lookup table; unrecognized codes still produce a typed error with
//! [`ApiErrorKind::Unknown`]. A failure response with no recognizable
//! envelope is surfaced as-is: a generic server error for 5xx, a
//! malformed-response error otherwise.

use http::StatusCode;
use querystack_core::{ApiErrorKind, strip_code_dots};
use querystack_xml::{XmlValue, from_xml};
use tracing::debug;

use crate::error::QueryError;

/// Interpret a raw response: a parsed tree on success, a typed error
/// otherwise.
///
/// # Errors
///
/// - [`QueryError::Api`] for a response carrying an error envelope.
/// - [`QueryError::UnexpectedServerError`] for a 5xx without one.
/// - [`QueryError::MalformedErrorResponse`] for any other non-success
///   response without one.
/// - [`QueryError::Xml`] when a success body is not well-formed XML.
pub fn interpret(status: StatusCode, body: &[u8]) -> Result<XmlValue, QueryError> {
    if status.is_success() {
        return Ok(from_xml(body)?);
    }

    if let Some((code, message)) = parse_error_envelope(body) {
        let code = strip_code_dots(&code);
        let kind = ApiErrorKind::lookup(&code);
        debug!(%status, code, ?kind, "server signaled an error");
        return Err(QueryError::Api {
            kind,
            code,
            message,
            status: status.as_u16(),
        });
    }

    let body = String::from_utf8_lossy(body).into_owned();
    if status.is_server_error() {
        Err(QueryError::UnexpectedServerError {
            status: status.as_u16(),
            body,
        })
    } else {
        Err(QueryError::MalformedErrorResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Extract `(code, message)` from an error envelope, if the body has one.
///
/// Accepts `Errors/Error/{Code,Message}` and `Error/{Code,Message}`
/// directly under the root; when `Error` repeats, the first one wins.
fn parse_error_envelope(body: &[u8]) -> Option<(String, String)> {
    let tree = from_xml(body).ok()?;

    let error = tree
        .get("Errors")
        .and_then(|errors| errors.get("Error"))
        .or_else(|| tree.get("Error"))?;
    let error = error.items().next()?;

    let code = error.get("Code")?.as_str()?;
    if code.is_empty() {
        return None;
    }
    let message = error
        .get("Message")
        .and_then(XmlValue::as_str)
        .unwrap_or_default();

    Some((code.to_owned(), message.to_owned()))
}
