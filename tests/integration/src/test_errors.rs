//! Error-path tests against the stub endpoint.

#[cfg(test)]
mod tests {
    use querystack_client::QueryError;
    use querystack_core::{ApiErrorKind, Params};
    use querystack_services::ec2;

    use crate::{spawn_stub_endpoint, stub_client};

    #[tokio::test]
    async fn test_should_map_duplicate_resource_to_typed_error() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let params = ec2::create_key_pair("duplicate").expect("valid key name");
        let err = client
            .call("CreateKeyPair", params)
            .await
            .expect_err("stub reports a duplicate");

        match err {
            QueryError::Api {
                kind,
                code,
                message,
                status,
            } => {
                assert_eq!(kind, ApiErrorKind::InvalidKeyPairDuplicate);
                assert_eq!(code, "InvalidKeyPairDuplicate");
                assert_eq!(message, "The key pair 'duplicate' already exists.");
                assert_eq!(status, 400);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_map_throttling_envelope_from_server_error_status() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let err = client
            .call("Throttle", Params::new())
            .await
            .expect_err("stub throttles");

        assert!(matches!(
            err,
            QueryError::Api {
                kind: ApiErrorKind::Throttling,
                status: 503,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_should_fall_back_to_unknown_kind_for_novel_code() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let err = client
            .call("NovelFailure", Params::new())
            .await
            .expect_err("stub fails with a novel code");

        match err {
            QueryError::Api { kind, code, .. } => {
                assert_eq!(kind, ApiErrorKind::Unknown);
                // Dot-stripped form of `Totally.Novel.Code`.
                assert_eq!(code, "TotallyNovelCode");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_raise_generic_error_for_plain_text_server_failure() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let err = client
            .call("Explode", Params::new())
            .await
            .expect_err("stub explodes");

        match err {
            QueryError::UnexpectedServerError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal stub failure");
            }
            other => panic!("expected UnexpectedServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_raise_malformed_error_for_plain_text_not_found() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let err = client
            .call("Vanish", Params::new())
            .await
            .expect_err("stub has no such page");

        assert!(matches!(
            err,
            QueryError::MalformedErrorResponse { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn test_should_map_unknown_action_to_invalid_action() {
        let addr = spawn_stub_endpoint().await;
        let client = stub_client(addr);

        let err = client
            .call("NoSuchAction", Params::new())
            .await
            .expect_err("stub rejects unknown actions");

        assert!(matches!(
            err,
            QueryError::Api {
                kind: ApiErrorKind::Unknown,
                ..
            }
        ));
    }
}
