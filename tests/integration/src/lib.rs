//! Integration tests for the querystack client.
//!
//! Each test spins up an in-process stub Query API endpoint and drives a
//! real [`QueryClient`] against it over plain HTTP on a loopback port.
//! The stub re-derives the request signature from the received
//! parameters with the shared secret, so a passing round trip covers
//! canonicalization, signing, encoding, transport, and interpretation
//! end to end.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Once;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::Request;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use querystack_client::QueryClient;
use querystack_core::{ClientConfig, Credentials};
use tokio::net::TcpListener;

mod test_call;
mod test_errors;

/// Access key the stub endpoint accepts.
pub const STUB_ACCESS_KEY: &str = "QUERYSTACKSTUBACCESS";

/// Secret key the stub endpoint verifies signatures with.
pub const STUB_SECRET_KEY: &str = "querystack-stub-secret";

/// Host name the client signs against (loopback, matching the listener).
const STUB_HOST: &str = "127.0.0.1";

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Start the stub endpoint on an ephemeral loopback port.
pub async fn spawn_stub_endpoint() -> SocketAddr {
    init_tracing();

    let listener = TcpListener::bind((STUB_HOST, 0))
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let service = service_fn(handle);
                let _ = HttpConnBuilder::new(TokioExecutor::new())
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    addr
}

/// Create a client pointed at the stub endpoint.
#[must_use]
pub fn stub_client(addr: SocketAddr) -> QueryClient {
    stub_client_with_secret(addr, STUB_SECRET_KEY)
}

/// Create a client pointed at the stub endpoint with a chosen secret,
/// for signature-mismatch tests.
#[must_use]
pub fn stub_client_with_secret(addr: SocketAddr, secret: &str) -> QueryClient {
    let config = ClientConfig::builder()
        .credentials(Credentials::new(STUB_ACCESS_KEY, secret).expect("valid credentials"))
        .host(STUB_HOST)
        .port(addr.port())
        .use_tls(false)
        .api_version("2010-08-31")
        .build()
        .expect("valid config");
    QueryClient::new(config).expect("client builds")
}

/// Handle one stub request: decode the form body, check the signature,
/// dispatch on `Action`.
async fn handle(
    req: Request<hyper::body::Incoming>,
) -> Result<hyper::Response<Full<Bytes>>, Infallible> {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => Bytes::new(),
    };
    let params: HashMap<String, String> =
        form_urlencoded::parse(body.as_ref()).into_owned().collect();
    Ok(respond(&params))
}

/// Produce the stub response for a decoded parameter set.
fn respond(params: &HashMap<String, String>) -> hyper::Response<Full<Bytes>> {
    if params.get("AWSAccessKeyId").map(String::as_str) != Some(STUB_ACCESS_KEY) {
        return xml_response(403, &error_envelope("AuthFailure", "unknown access key"));
    }
    if params.get("SignatureVersion").map(String::as_str) != Some("2")
        || params.get("SignatureMethod").map(String::as_str) != Some("HmacSHA256")
    {
        return xml_response(403, &error_envelope("AuthFailure", "unsupported signature"));
    }
    if !signature_matches(params) {
        return xml_response(
            403,
            &error_envelope(
                "SignatureDoesNotMatch",
                "the request signature we calculated does not match",
            ),
        );
    }

    match params.get("Action").map(String::as_str) {
        Some("DescribeKeyPairs") => xml_response(
            200,
            "<?xml version=\"1.0\"?>\
             <DescribeKeyPairsResponse>\
               <requestId>stub-req-1</requestId>\
               <keySet><item>\
                 <keyName>stub-key</keyName>\
                 <keyFingerprint>1f:51:ae:28</keyFingerprint>\
               </item></keySet>\
             </DescribeKeyPairsResponse>",
        ),
        Some("CreateKeyPair") => match params.get("KeyName").map(String::as_str) {
            None | Some("") => xml_response(
                400,
                &error_envelope("MissingParameter", "KeyName is required"),
            ),
            Some("duplicate") => xml_response(
                400,
                &error_envelope(
                    "InvalidKeyPair.Duplicate",
                    "The key pair 'duplicate' already exists.",
                ),
            ),
            Some(name) => xml_response(
                200,
                &format!(
                    "<?xml version=\"1.0\"?>\
                     <CreateKeyPairResponse>\
                       <keyName>{name}</keyName>\
                       <keyFingerprint>1f:51:ae:28</keyFingerprint>\
                     </CreateKeyPairResponse>"
                ),
            ),
        },
        Some("Throttle") => xml_response(503, &error_envelope("Throttling", "Rate exceeded")),
        Some("NovelFailure") => xml_response(
            400,
            &error_envelope("Totally.Novel.Code", "nobody has seen this before"),
        ),
        Some("Explode") => plain_response(500, "internal stub failure"),
        Some("Vanish") => plain_response(404, "404 page not found"),
        _ => xml_response(
            400,
            &error_envelope("InvalidAction", "the action is not valid for this stub"),
        ),
    }
}

/// Re-derive the SigV2 signature from the received parameters and
/// compare it with the one the client sent.
fn signature_matches(params: &HashMap<String, String>) -> bool {
    let Some(provided) = params.get("Signature") else {
        return false;
    };

    let unsigned: Vec<(&str, &str)> = params
        .iter()
        .filter(|(name, _)| *name != "Signature")
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let canonical = querystack_sign::canonical_string(unsigned, STUB_HOST, "POST", "/");
    let expected = querystack_sign::sign(STUB_SECRET_KEY, &canonical, false);

    *provided == expected
}

/// A minimal error envelope in the `Response/Errors/Error` shape.
fn error_envelope(code: &str, message: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\
         <Response><Errors><Error>\
           <Code>{code}</Code>\
           <Message>{message}</Message>\
         </Error></Errors><RequestID>stub-req-1</RequestID></Response>"
    )
}

/// Build an XML response with the given status.
fn xml_response(status: u16, body: &str) -> hyper::Response<Full<Bytes>> {
    hyper::Response::builder()
        .status(status)
        .header("Content-Type", "text/xml")
        .body(Full::new(Bytes::from(body.to_owned())))
        .expect("valid stub response")
}

/// Build a plain-text response with the given status.
fn plain_response(status: u16, body: &str) -> hyper::Response<Full<Bytes>> {
    hyper::Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body.to_owned())))
        .expect("valid stub response")
}
