//! Elastic Load Balancing.
//!
//! ELB responses wrap repeated elements in `member`, and list parameters
//! use the `Name.member.N` spelling rather than EC2's `Name.N`.

use querystack_client::{QueryClient, QueryError};
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};

use crate::require_non_empty;

/// ELB endpoint descriptor.
pub const SPEC: ServiceSpec = ServiceSpec {
    service: "elasticloadbalancing",
    default_host: "elasticloadbalancing.amazonaws.com",
    api_version: "2010-07-01",
};

/// Create a client against the well-known ELB endpoint.
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

/// Parameters for `DescribeLoadBalancers`. An empty name list describes
/// all load balancers.
#[must_use]
pub fn describe_load_balancers(names: &[&str]) -> Params {
    let mut params = Params::new();
    params.set_list("LoadBalancerNames.member", names);
    params
}

/// Parameters for `DeleteLoadBalancer`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty name.
pub fn delete_load_balancer(name: &str) -> Result<Params, QueryError> {
    require_non_empty("LoadBalancerName", name)?;
    let mut params = Params::new();
    params.set("LoadBalancerName", name);
    Ok(params)
}

/// Parameters for `RegisterInstancesWithLoadBalancer`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty name or an empty
/// instance list.
pub fn register_instances_with_load_balancer(
    name: &str,
    instance_ids: &[&str],
) -> Result<Params, QueryError> {
    require_non_empty("LoadBalancerName", name)?;
    if instance_ids.is_empty() {
        return Err(QueryError::InvalidArgument(
            "Instances must name at least one instance".to_owned(),
        ));
    }

    let mut params = Params::new();
    params.set("LoadBalancerName", name);
    for (index, instance_id) in instance_ids.iter().enumerate() {
        params.set(
            format!("Instances.member.{}.InstanceId", index + 1),
            *instance_id,
        );
    }
    Ok(params)
}
