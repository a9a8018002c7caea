//! Service descriptors and action parameter builders.
//!
//! One module per Query API service, each carrying its endpoint
//! descriptor (well-known host and API version), a `connect` convenience
//! constructor, and a representative set of action builders. Builders
//! are deliberately thin: they validate required arguments client-side
//! and flatten them into the wire parameter spellings, nothing more. The
//! full per-action surface of each service is intentionally not covered
//! here; any action can be invoked directly through
//! [`QueryClient::call`](querystack_client::QueryClient::call) with
//! hand-built [`Params`](querystack_core::Params).

pub mod autoscaling;
pub mod cloudwatch;
pub mod ec2;
pub mod elb;
pub mod rds;

use querystack_client::QueryError;

/// Reject an empty required argument before any network activity.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), QueryError> {
    if value.is_empty() {
        return Err(QueryError::InvalidArgument(format!(
            "{name} must be present and non-empty"
        )));
    }
    Ok(())
}
