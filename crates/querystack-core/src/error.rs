//! Configuration errors and the server-signaled error-code taxonomy.
//!
//! AWS Query APIs report failures as an XML envelope carrying a code such
//! as `InvalidParameterCombination` or `InvalidKeyPair.Duplicate`. Codes
//! may contain `.` characters; those are stripped before lookup so that a
//! code maps to a single flat identifier. Lookup is a static table from
//! stripped code to [`ApiErrorKind`]; codes outside the table fall back to
//! [`ApiErrorKind::Unknown`] rather than failing.

/// Errors raised while constructing a [`crate::ClientConfig`].
///
/// All of these are client-side argument errors: they occur before any
/// network activity and are recoverable by correcting the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The access key id was missing or empty.
    #[error("access key id must be present and non-empty")]
    MissingAccessKey,

    /// The secret access key was missing or empty.
    #[error("secret access key must be present and non-empty")]
    MissingSecretKey,

    /// The endpoint host was missing or empty.
    #[error("endpoint host must be present and non-empty")]
    MissingHost,

    /// The service API version was missing or empty.
    #[error("service API version must be present and non-empty")]
    MissingApiVersion,
}

/// Strip `.` characters from an AWS error code to form a lookup key.
///
/// # Examples
///
/// ```
/// use querystack_core::strip_code_dots;
///
/// assert_eq!(
///     strip_code_dots("InvalidKeyPair.Duplicate"),
///     "InvalidKeyPairDuplicate"
/// );
/// assert_eq!(strip_code_dots("AuthFailure"), "AuthFailure");
/// ```
#[must_use]
pub fn strip_code_dots(code: &str) -> String {
    code.chars().filter(|c| *c != '.').collect()
}

/// Symbolic categories for server-signaled AWS Query API errors.
///
/// Each variant corresponds to the dot-stripped form of a well-known error
/// code. The set is not exhaustive across all services; codes without a
/// variant resolve to [`ApiErrorKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// The request signature or credentials were rejected.
    AuthFailure,
    /// The computed signature did not match the one the server derived.
    SignatureDoesNotMatch,
    /// The security token in the request is invalid.
    InvalidClientTokenId,
    /// The account is not opted in to the requested service.
    OptInRequired,
    /// The request reached the service after its timestamp window expired.
    RequestExpired,

    /// A parameter not understood by the action was supplied.
    UnknownParameter,
    /// A required parameter was not supplied.
    MissingParameter,
    /// A supplied parameter value is invalid.
    InvalidParameterValue,
    /// The combination of supplied parameters is invalid.
    InvalidParameterCombination,
    /// The query string itself could not be parsed.
    MalformedQueryString,

    /// The request was throttled.
    Throttling,
    /// Too many requests in flight for this account.
    RequestLimitExceeded,
    /// The service is temporarily unable to handle the request.
    ServiceUnavailable,
    /// The service endpoint is unavailable.
    Unavailable,
    /// An internal error occurred inside the service.
    InternalError,

    /// The resource is not in a state that permits the operation.
    IncorrectState,
    /// The operation is not permitted on this resource.
    OperationNotPermitted,
    /// A resource is still in use and cannot be modified or deleted.
    ResourceInUse,
    /// An account-level resource limit was exceeded.
    LimitExceeded,
    /// The running-instance limit was exceeded.
    InstanceLimitExceeded,
    /// The elastic address limit was exceeded.
    AddressLimitExceeded,
    /// The snapshot limit was exceeded.
    SnapshotLimitExceeded,
    /// The volume limit was exceeded.
    VolumeLimitExceeded,
    /// Not enough capacity to fulfil the instance request.
    InsufficientInstanceCapacity,

    /// The named instance does not exist.
    InvalidInstanceIDNotFound,
    /// The instance id is syntactically invalid.
    InvalidInstanceIDMalformed,
    /// The named machine image does not exist.
    InvalidAMIIDNotFound,
    /// The machine image id is syntactically invalid.
    InvalidAMIIDMalformed,
    /// The named key pair does not exist.
    InvalidKeyPairNotFound,
    /// A key pair with that name already exists.
    InvalidKeyPairDuplicate,
    /// The named security group does not exist.
    InvalidGroupNotFound,
    /// A security group with that name already exists.
    InvalidGroupDuplicate,
    /// The named volume does not exist.
    InvalidVolumeNotFound,
    /// The named snapshot does not exist.
    InvalidSnapshotNotFound,

    /// The named load balancer does not exist.
    LoadBalancerNotFound,
    /// A load balancer with that name already exists.
    DuplicateLoadBalancerName,
    /// The named database instance does not exist.
    DBInstanceNotFound,
    /// A database instance with that identifier already exists.
    DBInstanceAlreadyExists,
    /// A resource with that name already exists.
    AlreadyExists,

    /// A code with no entry in the lookup table.
    #[default]
    Unknown,
}

impl ApiErrorKind {
    /// Resolve a dot-stripped error code to its kind.
    ///
    /// Unrecognized codes resolve to [`ApiErrorKind::Unknown`]; lookup
    /// never fails.
    #[must_use]
    pub fn lookup(stripped_code: &str) -> Self {
        match stripped_code {
            "AuthFailure" => Self::AuthFailure,
            "SignatureDoesNotMatch" => Self::SignatureDoesNotMatch,
            "InvalidClientTokenId" => Self::InvalidClientTokenId,
            "OptInRequired" => Self::OptInRequired,
            "RequestExpired" => Self::RequestExpired,
            "UnknownParameter" => Self::UnknownParameter,
            "MissingParameter" => Self::MissingParameter,
            "InvalidParameterValue" => Self::InvalidParameterValue,
            "InvalidParameterCombination" => Self::InvalidParameterCombination,
            "MalformedQueryString" => Self::MalformedQueryString,
            "Throttling" => Self::Throttling,
            "RequestLimitExceeded" => Self::RequestLimitExceeded,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "Unavailable" => Self::Unavailable,
            "InternalError" => Self::InternalError,
            "IncorrectState" => Self::IncorrectState,
            "OperationNotPermitted" => Self::OperationNotPermitted,
            "ResourceInUse" => Self::ResourceInUse,
            "LimitExceeded" => Self::LimitExceeded,
            "InstanceLimitExceeded" => Self::InstanceLimitExceeded,
            "AddressLimitExceeded" => Self::AddressLimitExceeded,
            "SnapshotLimitExceeded" => Self::SnapshotLimitExceeded,
            "VolumeLimitExceeded" => Self::VolumeLimitExceeded,
            "InsufficientInstanceCapacity" => Self::InsufficientInstanceCapacity,
            "InvalidInstanceIDNotFound" => Self::InvalidInstanceIDNotFound,
            "InvalidInstanceIDMalformed" => Self::InvalidInstanceIDMalformed,
            "InvalidAMIIDNotFound" => Self::InvalidAMIIDNotFound,
            "InvalidAMIIDMalformed" => Self::InvalidAMIIDMalformed,
            "InvalidKeyPairNotFound" => Self::InvalidKeyPairNotFound,
            "InvalidKeyPairDuplicate" => Self::InvalidKeyPairDuplicate,
            "InvalidGroupNotFound" => Self::InvalidGroupNotFound,
            "InvalidGroupDuplicate" => Self::InvalidGroupDuplicate,
            "InvalidVolumeNotFound" => Self::InvalidVolumeNotFound,
            "InvalidSnapshotNotFound" => Self::InvalidSnapshotNotFound,
            "LoadBalancerNotFound" => Self::LoadBalancerNotFound,
            "DuplicateLoadBalancerName" => Self::DuplicateLoadBalancerName,
            "DBInstanceNotFound" => Self::DBInstanceNotFound,
            "DBInstanceAlreadyExists" => Self::DBInstanceAlreadyExists,
            "AlreadyExists" => Self::AlreadyExists,
            _ => Self::Unknown,
        }
    }

    /// The canonical (dot-stripped) code string for this kind, or `None`
    /// for [`ApiErrorKind::Unknown`].
    #[must_use]
    pub fn as_code(self) -> Option<&'static str> {
        match self {
            Self::AuthFailure => Some("AuthFailure"),
            Self::SignatureDoesNotMatch => Some("SignatureDoesNotMatch"),
            Self::InvalidClientTokenId => Some("InvalidClientTokenId"),
            Self::OptInRequired => Some("OptInRequired"),
            Self::RequestExpired => Some("RequestExpired"),
            Self::UnknownParameter => Some("UnknownParameter"),
            Self::MissingParameter => Some("MissingParameter"),
            Self::InvalidParameterValue => Some("InvalidParameterValue"),
            Self::InvalidParameterCombination => Some("InvalidParameterCombination"),
            Self::MalformedQueryString => Some("MalformedQueryString"),
            Self::Throttling => Some("Throttling"),
            Self::RequestLimitExceeded => Some("RequestLimitExceeded"),
            Self::ServiceUnavailable => Some("ServiceUnavailable"),
            Self::Unavailable => Some("Unavailable"),
            Self::InternalError => Some("InternalError"),
            Self::IncorrectState => Some("IncorrectState"),
            Self::OperationNotPermitted => Some("OperationNotPermitted"),
            Self::ResourceInUse => Some("ResourceInUse"),
            Self::LimitExceeded => Some("LimitExceeded"),
            Self::InstanceLimitExceeded => Some("InstanceLimitExceeded"),
            Self::AddressLimitExceeded => Some("AddressLimitExceeded"),
            Self::SnapshotLimitExceeded => Some("SnapshotLimitExceeded"),
            Self::VolumeLimitExceeded => Some("VolumeLimitExceeded"),
            Self::InsufficientInstanceCapacity => Some("InsufficientInstanceCapacity"),
            Self::InvalidInstanceIDNotFound => Some("InvalidInstanceIDNotFound"),
            Self::InvalidInstanceIDMalformed => Some("InvalidInstanceIDMalformed"),
            Self::InvalidAMIIDNotFound => Some("InvalidAMIIDNotFound"),
            Self::InvalidAMIIDMalformed => Some("InvalidAMIIDMalformed"),
            Self::InvalidKeyPairNotFound => Some("InvalidKeyPairNotFound"),
            Self::InvalidKeyPairDuplicate => Some("InvalidKeyPairDuplicate"),
            Self::InvalidGroupNotFound => Some("InvalidGroupNotFound"),
            Self::InvalidGroupDuplicate => Some("InvalidGroupDuplicate"),
            Self::InvalidVolumeNotFound => Some("InvalidVolumeNotFound"),
            Self::InvalidSnapshotNotFound => Some("InvalidSnapshotNotFound"),
            Self::LoadBalancerNotFound => Some("LoadBalancerNotFound"),
            Self::DuplicateLoadBalancerName => Some("DuplicateLoadBalancerName"),
            Self::DBInstanceNotFound => Some("DBInstanceNotFound"),
            Self::DBInstanceAlreadyExists => Some("DBInstanceAlreadyExists"),
            Self::AlreadyExists => Some("AlreadyExists"),
            Self::Unknown => None,
        }
    }
}
