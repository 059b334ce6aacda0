//! Config text rendering

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Result;

/// Render the UDS frontend and backend sections for `haproxy.cfg`.
///
/// The frontend listens on `frontend_bind` and the cluster IP; the backend
/// round-robins over one `uds-N` server per member, in the given order. The
/// result has no trailing newline.
pub fn render_haproxy(
    cluster_ip: &str,
    member_ips: &[String],
    port: u16,
    frontend_bind: &str,
) -> String {
    let mut out = format!(
        "frontend uds-frontend
    mode tcp
    bind {frontend_bind}:{port}
    bind {cluster_ip}:{port}
    acl udsbackendacl dst_port {port}
    use_backend uds-backend if udsbackendacl

backend uds-backend
    mode tcp
    balance static-rr"
    );

    for (i, ip) in member_ips.iter().enumerate() {
        out.push_str(&format!("\n    server uds-{} {ip}:{port} check", i + 1));
    }
    out
}

#[derive(Serialize)]
struct UdsConfig<'a> {
    version: &'a str,
    service_config: ServiceConfig<'a>,
}

#[derive(Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "RESTServer")]
    rest_server: RestServer<'a>,
}

#[derive(Serialize)]
struct RestServer<'a> {
    host: &'a str,
}

/// Render the UDS service config as JSON indented by four spaces.
pub fn render_uds_config(version: &str, host: &str) -> Result<String> {
    let config = UdsConfig {
        version,
        service_config: ServiceConfig {
            rest_server: RestServer { host },
        },
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    config.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
