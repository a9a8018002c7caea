//! Amazon RDS (Relational Database Service).

use querystack_client::{QueryClient, QueryError};
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};

use crate::require_non_empty;

/// RDS endpoint descriptor.
pub const SPEC: ServiceSpec = ServiceSpec {
    service: "rds",
    default_host: "rds.amazonaws.com",
    api_version: "2010-07-28",
};

/// Create a client against the well-known RDS endpoint.
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

/// Parameters for `DescribeDBInstances`. With no identifier, all
/// instances are described.
#[must_use]
pub fn describe_db_instances(identifier: Option<&str>) -> Params {
    let mut params = Params::new();
    params.set_opt("DBInstanceIdentifier", identifier);
    params
}

/// Parameters for `RebootDBInstance`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for an empty identifier.
pub fn reboot_db_instance(identifier: &str) -> Result<Params, QueryError> {
    require_non_empty("DBInstanceIdentifier", identifier)?;
    let mut params = Params::new();
    params.set("DBInstanceIdentifier", identifier);
    Ok(params)
}

/// Parameters for `CreateDBSnapshot`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] if either identifier is empty.
pub fn create_db_snapshot(
    snapshot_identifier: &str,
    instance_identifier: &str,
) -> Result<Params, QueryError> {
    require_non_empty("DBSnapshotIdentifier", snapshot_identifier)?;
    require_non_empty("DBInstanceIdentifier", instance_identifier)?;

    let mut params = Params::new();
    params.set("DBSnapshotIdentifier", snapshot_identifier);
    params.set("DBInstanceIdentifier", instance_identifier);
    Ok(params)
}
