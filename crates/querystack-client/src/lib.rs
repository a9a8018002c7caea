//! Signed request building, transport, and response interpretation for
//! AWS Query APIs.
//!
//! This crate is the runtime half of querystack: it turns an action name
//! plus a parameter map into a signed HTTP request, submits it, and
//! interprets the XML response.
//!
//! Data flows one direction per call:
//!
//! ```text
//! caller params -> request builder -> canonicalizer + signer
//!               -> transport -> raw response -> interpreter -> tree
//! ```
//!
//! No state is retained across calls beyond the immutable configuration
//! and the underlying HTTP client. Nothing is retried; every failure is
//! surfaced to the caller of [`QueryClient::call`].
//!
//! # Example
//!
//! ```no_run
//! use querystack_client::QueryClient;
//! use querystack_core::{ClientConfig, Credentials, Params};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .credentials(Credentials::new("AKIA...", "secret")?)
//!     .host("ec2.amazonaws.com")
//!     .api_version("2010-08-31")
//!     .build()?;
//! let client = QueryClient::new(config)?;
//!
//! let mut params = Params::new();
//! params.set_list("InstanceId", &["i-123456"]);
//! let result = client.call("DescribeInstances", params).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod request;
mod response;
mod transport;

pub use client::QueryClient;
pub use error::QueryError;
pub use request::{RequestPayload, SignedRequest, build_request};
pub use response::interpret;
pub use transport::RawResponse;
