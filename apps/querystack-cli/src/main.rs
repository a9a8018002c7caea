//! querystack - command-line client for AWS Query APIs.
//!
//! Issues one signed Query API call and prints the parsed response as
//! JSON.
//!
//! # Usage
//!
//! ```text
//! querystack <service> <Action> [Name=Value ...]
//! querystack ec2 DescribeInstances InstanceId.1=i-123456
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `AWS_ACCESS_KEY_ID` | Access key id (or `ACCESS_KEY`) |
//! | `AWS_SECRET_ACCESS_KEY` | Secret access key (or `SECRET_KEY`) |
//! | `EC2_URL`, `ELB_URL`, `RDS_URL`, `AUTOSCALING_URL`, `CLOUDWATCH_URL` | Per-service endpoint override URL |
//! | `QUERYSTACK_INSECURE_TLS` | `1`/`true` disables TLS certificate verification |
//! | `LOG_LEVEL` | Log level filter (default `warn`) |
//! | `RUST_LOG` | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::env;

use anyhow::{Context, Result, bail};
use querystack_client::QueryClient;
use querystack_core::{ClientConfig, Credentials, Params, ServiceSpec};
use querystack_services::{autoscaling, cloudwatch, ec2, elb, rds};
use querystack_xml::XmlValue;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Read the log level from the environment.
fn log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string())
}

/// Resolve a service name to its descriptor and endpoint-override
/// environment variable.
fn resolve_service(name: &str) -> Option<(ServiceSpec, &'static str)> {
    match name.to_ascii_lowercase().as_str() {
        "ec2" => Some((ec2::SPEC, "EC2_URL")),
        "elb" => Some((elb::SPEC, "ELB_URL")),
        "rds" => Some((rds::SPEC, "RDS_URL")),
        "autoscaling" => Some((autoscaling::SPEC, "AUTOSCALING_URL")),
        "cloudwatch" => Some((cloudwatch::SPEC, "CLOUDWATCH_URL")),
        _ => None,
    }
}

/// A resolved endpoint override.
#[derive(Debug, PartialEq, Eq)]
struct EndpointOverride {
    use_tls: bool,
    host: String,
    port: u16,
    base_path: String,
}

/// Parse an endpoint override URL into host/port/path configuration.
///
/// URL parsing lives here, in the application layer; the core client
/// only ever sees the resolved values.
fn parse_endpoint(url: &str) -> Result<EndpointOverride> {
    let uri: http::Uri = url
        .parse()
        .with_context(|| format!("invalid endpoint URL: {url}"))?;

    let use_tls = match uri.scheme_str() {
        Some("https") | None => true,
        Some("http") => false,
        Some(other) => bail!("unsupported endpoint scheme: {other}"),
    };
    let host = uri
        .host()
        .with_context(|| format!("endpoint URL has no host: {url}"))?
        .to_owned();
    let port = uri
        .port_u16()
        .unwrap_or(if use_tls { 443 } else { 80 });
    let base_path = match uri.path() {
        "" => "/".to_owned(),
        path => path.to_owned(),
    };

    Ok(EndpointOverride {
        use_tls,
        host,
        port,
        base_path,
    })
}

/// Read credentials from the environment.
fn credentials_from_env() -> Result<Credentials> {
    let access_key = env::var("AWS_ACCESS_KEY_ID")
        .or_else(|_| env::var("ACCESS_KEY"))
        .context("AWS_ACCESS_KEY_ID is not set")?;
    let secret_key = env::var("AWS_SECRET_ACCESS_KEY")
        .or_else(|_| env::var("SECRET_KEY"))
        .context("AWS_SECRET_ACCESS_KEY is not set")?;
    Ok(Credentials::new(access_key, secret_key)?)
}

/// Parse `Name=Value` command-line arguments into request parameters.
fn parse_param_args(args: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            bail!("parameter argument must be Name=Value, got: {arg}");
        };
        if name.is_empty() {
            bail!("parameter argument has an empty name: {arg}");
        }
        params.set(name, value);
    }
    Ok(params)
}

/// Render the response tree as JSON.
fn to_json(value: &XmlValue) -> serde_json::Value {
    match value {
        XmlValue::Text(text) => serde_json::Value::String(text.clone()),
        XmlValue::Node(node) => {
            let mut map = serde_json::Map::new();
            for (name, child) in node.entries() {
                map.insert(name.clone(), to_json(child));
            }
            serde_json::Value::Object(map)
        }
        XmlValue::List(list) => serde_json::Value::Array(list.iter().map(to_json).collect()),
    }
}

/// Whether an environment flag is set to a truthy value.
fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: querystack <service> <Action> [Name=Value ...]");
        eprintln!("services: ec2, elb, rds, autoscaling, cloudwatch");
        std::process::exit(2);
    }

    init_tracing(&log_level())?;

    let (spec, url_var) = resolve_service(&args[1])
        .with_context(|| format!("unknown service: {}", args[1]))?;

    let mut builder = ClientConfig::builder()
        .credentials(credentials_from_env()?)
        .service(&spec);

    if let Ok(url) = env::var(url_var) {
        let endpoint = parse_endpoint(&url)?;
        builder = builder
            .use_tls(endpoint.use_tls)
            .host(endpoint.host)
            .port(endpoint.port)
            .base_path(endpoint.base_path);
    }

    if env_flag("QUERYSTACK_INSECURE_TLS") {
        builder = builder.danger_accept_invalid_certs(true);
    }

    let config = builder.build()?;
    let client = QueryClient::new(config)?;

    let action = &args[2];
    let params = parse_param_args(&args[3..])?;

    let result = client.call(action, params).await?;
    println!("{}", serde_json::to_string_pretty(&to_json(&result))?);

    Ok(())
}
