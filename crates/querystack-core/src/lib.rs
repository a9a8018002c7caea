//! Core types for the querystack AWS Query API client.
//!
//! This crate provides the foundational building blocks shared across the
//! querystack workspace: client configuration and credentials, the request
//! parameter map, per-service endpoint descriptors, and the error-code
//! taxonomy used to translate server-signaled AWS errors into typed values.
//!
//! Nothing in this crate performs I/O. Endpoint resolution from the
//! environment belongs to the application layer; the core only consumes an
//! already-resolved host/port/path.

mod config;
mod error;
mod params;
mod service;

pub use config::{ClientConfig, ClientConfigBuilder, Credentials, ProxyConfig, SignatureVersion};
pub use error::{ApiErrorKind, ConfigError, strip_code_dots};
pub use params::Params;
pub use service::ServiceSpec;
