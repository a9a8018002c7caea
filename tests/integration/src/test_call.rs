//! Signed round-trip tests against the stub endpoint.

#[cfg(test)]
mod tests {
    use querystack_client::QueryError;
    use querystack_core::Params;
    use querystack_services::ec2;
    use querystack_xml::XmlValue;

    use crate::{spawn_stub_endpoint, stub_client, stub_client_with_secret};

    #[tokio::test]
    async fn test_should_round_trip_signed_describe_call() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let tree = client
            .call("DescribeKeyPairs", Params::new())
            .await
            .expect("stub accepts a correctly signed request");

        assert_eq!(
            tree.get("requestId").and_then(XmlValue::as_str),
            Some("stub-req-1")
        );

        let items = tree
            .get("keySet")
            .and_then(|set| set.get("item"))
            .expect("keySet/item present");
        assert_eq!(items.item_count(), 1);
        assert_eq!(
            items
                .items()
                .next()
                .and_then(|item| item.get("keyName"))
                .and_then(XmlValue::as_str),
            Some("stub-key")
        );
    }

    #[tokio::test]
    async fn test_should_send_caller_parameters() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let params = ec2::create_key_pair("integration").expect("valid key name");
        let tree = client
            .call("CreateKeyPair", params)
            .await
            .expect("stub accepts the request");

        assert_eq!(
            tree.get("keyName").and_then(XmlValue::as_str),
            Some("integration")
        );
    }

    #[tokio::test]
    async fn test_should_fail_signature_check_with_wrong_secret() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client_with_secret(addr, "not-the-stub-secret");

        let err = client
            .call("DescribeKeyPairs", Params::new())
            .await
            .expect_err("stub rejects a bad signature");

        match err {
            QueryError::Api { code, status, .. } => {
                assert_eq!(code, "SignatureDoesNotMatch");
                assert_eq!(status, 403);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_reject_empty_action_before_any_network_call() {
        // No stub endpoint at all: the port is unreachable, so reaching
        // the network would fail loudly rather than pass.
        let addr = spawn_stub_endpoint().await;
        let client = stub_client_with_secret(
            std::net::SocketAddr::new(addr.ip(), 1),
            crate::STUB_SECRET_KEY,
        );

        let err = client
            .call("", Params::new())
            .await
            .expect_err("empty action is a client-side error");
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }
}
