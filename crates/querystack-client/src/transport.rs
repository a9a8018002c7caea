//! HTTP transport.
//!
//! One request per call: no automatic retry, no connection-reuse
//! guarantee beyond what the underlying HTTP stack provides, and no
//! explicit timeouts (the stack's defaults apply). DNS and connection
//! failures propagate as [`QueryError::Transport`] untranslated.

use bytes::Bytes;
use http::StatusCode;
use querystack_core::ClientConfig;
use tracing::debug;

use crate::error::QueryError;
use crate::request::{FORM_CONTENT_TYPE, RequestPayload, SignedRequest};

/// User agent reported by outgoing requests.
const USER_AGENT: &str = concat!("querystack/", env!("CARGO_PKG_VERSION"));

/// A raw HTTP response: status and full body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The complete response body.
    pub body: Bytes,
}

/// The configured HTTP connection to one endpoint.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    /// Build the HTTP client for a configuration.
    ///
    /// TLS certificate verification stays on unless the configuration
    /// explicitly opted out. Proxy credentials are passed through to the
    /// HTTP stack unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Transport`] if the HTTP client cannot be
    /// constructed (e.g. an invalid proxy address).
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, QueryError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        if config.danger_accept_invalid_certs() {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(proxy) = config.proxy() {
            let mut proxy_spec =
                reqwest::Proxy::all(format!("http://{}:{}", proxy.host, proxy.port))?;
            if let Some(username) = &proxy.username {
                proxy_spec = proxy_spec
                    .basic_auth(username, proxy.password.as_deref().unwrap_or_default());
            }
            builder = builder.proxy(proxy_spec);
        }

        let scheme = if config.use_tls() { "https" } else { "http" };
        let base_url = format!("{scheme}://{}:{}", config.host(), config.port());

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// Issue exactly one HTTP request and collect the full response.
    pub(crate) async fn send(&self, request: &SignedRequest) -> Result<RawResponse, QueryError> {
        let response = match &request.payload {
            RequestPayload::Form(body) => {
                let url = format!("{}{}", self.base_url, request.path);
                self.http
                    .post(&url)
                    .header(http::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(body.clone())
                    .send()
                    .await?
            }
            RequestPayload::Query(query) => {
                let url = format!("{}{}?{query}", self.base_url, request.path);
                self.http.get(&url).send().await?
            }
        };

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, body_len = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
