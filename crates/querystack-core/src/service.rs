//! Per-service endpoint descriptors.

/// Static description of a Query API service endpoint.
///
/// Descriptors are plain configuration passed into client construction;
/// nothing reads hosts or versions from process globals or the
/// environment inside the core. Application code may override the host
/// after resolving environment URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Short service name (e.g. `ec2`).
    pub service: &'static str,
    /// Well-known public endpoint host.
    pub default_host: &'static str,
    /// API version string sent as the `Version` parameter.
    pub api_version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_descriptor_fields() {
        let spec = ServiceSpec {
            service: "ec2",
            default_host: "ec2.amazonaws.com",
            api_version: "2010-08-31",
        };
        assert_eq!(spec.service, "ec2");
        assert_eq!(spec.default_host, "ec2.amazonaws.com");
        assert_eq!(spec.api_version, "2010-08-31");
    }
}
