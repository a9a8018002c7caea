//! The public client entry point.

use querystack_core::{ClientConfig, Params};
use querystack_xml::XmlValue;
use tracing::debug;

use crate::error::QueryError;
use crate::request::build_request;
use crate::response::interpret;
use crate::transport::Transport;

/// A client for one Query API endpoint.
///
/// Holds the immutable configuration and the underlying HTTP client.
/// Safe to share across tasks: independent calls carry no shared mutable
/// state. Each [`call`](Self::call) is one round trip (build, sign,
/// send, interpret) with nothing retried and nothing cached.
#[derive(Debug)]
pub struct QueryClient {
    config: ClientConfig,
    transport: Transport,
}

impl QueryClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        let transport = Transport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invoke an action and return the parsed response tree.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidArgument`] if `action` is empty (raised
    ///   before any network activity).
    /// - [`QueryError::Transport`] for DNS/connection failures.
    /// - [`QueryError::Api`], [`QueryError::UnexpectedServerError`],
    ///   [`QueryError::MalformedErrorResponse`], or [`QueryError::Xml`]
    ///   per the response interpreter.
    pub async fn call(&self, action: &str, params: Params) -> Result<XmlValue, QueryError> {
        let request = build_request(&self.config, action, &params)?;
        debug!(
            action,
            host = self.config.host(),
            method = %request.method,
            "dispatching query request"
        );

        let response = self.transport.send(&request).await?;
        interpret(response.status, &response.body)
    }
}
