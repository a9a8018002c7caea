//! Amazon CloudWatch.

use querystack_client::{QueryClient, QueryError};
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};

/// CloudWatch endpoint descriptor.
pub const SPEC: ServiceSpec = ServiceSpec {
    service: "monitoring",
    default_host: "monitoring.amazonaws.com",
    api_version: "2010-08-01",
};

/// Create a client against the well-known CloudWatch endpoint.
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

/// Parameters for `ListMetrics`. Both filters are optional.
#[must_use]
pub fn list_metrics(namespace: Option<&str>, metric_name: Option<&str>) -> Params {
    let mut params = Params::new();
    params.set_opt("Namespace", namespace);
    params.set_opt("MetricName", metric_name);
    params
}

/// Parameters for `DescribeAlarms`. An empty name list describes all
/// alarms.
#[must_use]
pub fn describe_alarms(alarm_names: &[&str]) -> Params {
    let mut params = Params::new();
    params.set_list("AlarmNames.member", alarm_names);
    params
}
