//! AWS Query API request canonicalization and HMAC signing.
//!
//! The current signing generation (SignatureVersion 2) signs:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Host + "\n" +
//!                BasePath + "\n" +
//!                SortedEncodedParams
//! ```
//!
//! with `Signature = Base64(HMAC-SHA256(SecretKey, StringToSign))`.
//!
//! The legacy generation (SignatureVersion 1) signs only the parameter
//! list, sorted case-insensitively and concatenated bare, with HMAC-SHA1.
//! The two paths share nothing beyond the HMAC shape and must not be
//! conflated.
//!
//! Everything here is deterministic: no nonce, no salt. The signature for
//! a given secret and canonical string is stable across processes, which
//! is what lets the server re-derive and compare it.

pub mod canonical;
pub mod signer;

pub use canonical::{canonical_string, query_encode};
pub use signer::{legacy_string_to_sign, sign, sign_legacy};
