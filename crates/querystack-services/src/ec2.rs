//! Amazon EC2 (Elastic Compute Cloud).
//!
//! EC2 responses wrap repeated elements in `item`.

use querystack_client::{QueryClient, QueryError};
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};

use crate::require_non_empty;

/// EC2 endpoint descriptor.
pub const SPEC: ServiceSpec = ServiceSpec {
    service: "ec2",
    default_host: "ec2.amazonaws.com",
    api_version: "2010-08-31",
};

/// Create a client against the well-known EC2 endpoint.
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

/// Parameters for `DescribeInstances`. An empty id list describes all
/// instances.
#[must_use]
pub fn describe_instances(instance_ids: &[&str]) -> Params {
    let mut params = Params::new();
    params.set_list("InstanceId", instance_ids);
    params
}

/// Parameters for `DescribeImages`.
#[must_use]
pub fn describe_images(image_ids: &[&str], owners: &[&str]) -> Params {
    let mut params = Params::new();
    params.set_list("ImageId", image_ids);
    params.set_list("Owner", owners);
    params
}

/// Parameters for `RunInstances`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty image id or a
/// count range where `max_count < min_count` or `min_count == 0`.
pub fn run_instances(
    image_id: &str,
    min_count: u32,
    max_count: u32,
) -> Result<Params, QueryError> {
    require_non_empty("ImageId", image_id)?;
    if min_count == 0 || max_count < min_count {
        return Err(QueryError::InvalidArgument(
            "instance counts must satisfy 1 <= MinCount <= MaxCount".to_owned(),
        ));
    }

    let mut params = Params::new();
    params.set("ImageId", image_id);
    params.set("MinCount", min_count.to_string());
    params.set("MaxCount", max_count.to_string());
    Ok(params)
}

/// Parameters for `TerminateInstances`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] if no instance id is given.
pub fn terminate_instances(instance_ids: &[&str]) -> Result<Params, QueryError> {
    if instance_ids.is_empty() {
        return Err(QueryError::InvalidArgument(
            "InstanceId must name at least one instance".to_owned(),
        ));
    }
    let mut params = Params::new();
    params.set_list("InstanceId", instance_ids);
    Ok(params)
}

/// Parameters for `CreateKeyPair`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty key name.
pub fn create_key_pair(key_name: &str) -> Result<Params, QueryError> {
    require_non_empty("KeyName", key_name)?;
    let mut params = Params::new();
    params.set("KeyName", key_name);
    Ok(params)
}

/// Parameters for `DeleteKeyPair`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty key name.
pub fn delete_key_pair(key_name: &str) -> Result<Params, QueryError> {
    require_non_empty("KeyName", key_name)?;
    let mut params = Params::new();
    params.set("KeyName", key_name);
    Ok(params)
}
