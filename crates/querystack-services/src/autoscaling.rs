//! Auto Scaling.

use querystack_client::{QueryClient, QueryError};
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};

use crate::require_non_empty;

/// Auto Scaling endpoint descriptor.
pub const SPEC: ServiceSpec = ServiceSpec {
    service: "autoscaling",
    default_host: "autoscaling.amazonaws.com",
    api_version: "2010-08-01",
};

/// Create a client against the well-known Auto Scaling endpoint.
///
/// # Errors
///
/// Returns [`QueryError`] if the configuration or HTTP client cannot be
/// built.
pub fn connect(credentials: Credentials) -> Result<QueryClient, QueryError> {
    let config = ClientConfig::builder()
        .credentials(credentials)
        .service(&SPEC)
        .build()?;
    QueryClient::new(config)
}

/// Parameters for `DescribeAutoScalingGroups`. An empty name list
/// describes all groups.
#[must_use]
pub fn describe_auto_scaling_groups(names: &[&str]) -> Params {
    let mut params = Params::new();
    params.set_list("AutoScalingGroupNames.member", names);
    params
}

/// Parameters for `SetDesiredCapacity`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty group name.
pub fn set_desired_capacity(group_name: &str, capacity: u32) -> Result<Params, QueryError> {
    require_non_empty("AutoScalingGroupName", group_name)?;
    let mut params = Params::new();
    params.set("AutoScalingGroupName", group_name);
    params.set("DesiredCapacity", capacity.to_string());
    Ok(params)
}
