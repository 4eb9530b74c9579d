//! courier-ping - Check connectivity to a Courier server

use anyhow::{Context, Result};
use clap::Parser;
use futures::future::join;
use serde::Serialize;

use libcourier::actions::general::{get_client_config, get_license_config, get_ping};
use libcourier::client::http::RestServer;
use libcourier::client::ServerApi;
use libcourier::logging::{self, LogFormat};
use libcourier::state::AppState;
use libcourier::store::Store;
use libcourier::CourierConfig;

#[derive(Parser, Debug)]
#[command(name = "courier-ping")]
#[command(version, about = "Check connectivity to a Courier server")]
#[command(long_about = r#"Check connectivity to a Courier server.

Probes the server and reports its version. With --full, also fetches the
client-visible configuration and license capabilities (these endpoints may
require a session token).

EXAMPLES:
    # Probe a server
    courier-ping https://chat.example.com

    # Probe the configured server
    courier-ping

    # Include server configuration and license
    courier-ping https://chat.example.com --token abc123 --full

    # JSON output for scripting
    courier-ping https://chat.example.com --format json | jq .version

EXIT CODES:
    0 - Server is reachable
    1 - Server is unreachable or returned an error
    2 - The server rejected the session token
"#)]
struct Args {
    /// Server URL (falls back to the configured server)
    url: Option<String>,

    /// Session token for authenticated endpoints
    #[arg(short, long, env = "COURIER_TOKEN")]
    token: Option<String>,

    /// Also fetch the server's client configuration and license
    #[arg(long)]
    full: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the probe found, extracted from store state.
#[derive(Debug, Serialize)]
struct PingReport {
    url: String,
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licensed: Option<bool>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init(LogFormat::Text, if args.verbose { "debug" } else { "info" });

    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<i32> {
    let url = match args.url {
        Some(url) => url,
        None => {
            CourierConfig::load()
                .context("no server URL given and no configuration found")?
                .server
                .url
        }
    };

    let client = RestServer::new(&url);
    if let Some(token) = &args.token {
        client.set_token(token);
    }
    let store = Store::new();

    tracing::debug!(url = %url, full = args.full, "probing server");
    get_ping(&client, &store).await;

    if args.full {
        join(
            get_client_config(&client, &store),
            get_license_config(&client, &store),
        )
        .await;
    }

    let state = store.snapshot();
    let report = build_report(&url, &state, args.full);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }

    Ok(if report.reachable {
        0
    } else if state.session.expired {
        2
    } else {
        1
    })
}

fn build_report(url: &str, state: &AppState, full: bool) -> PingReport {
    let reachable = state.requests.ping.is_success();
    let ping = state.server.ping.clone().unwrap_or_default();

    PingReport {
        url: url.to_string(),
        reachable,
        version: ping.version,
        status: ping.status,
        error: state
            .requests
            .ping
            .failure()
            .map(|e| e.default_message.clone()),
        config_entries: full.then(|| state.server.client_config.len()),
        licensed: full.then(|| {
            state
                .server
                .license
                .get("IsLicensed")
                .map(|v| v == "true")
                .unwrap_or(false)
        }),
    }
}

fn print_text(report: &PingReport) {
    if report.reachable {
        match &report.version {
            Some(version) => println!("✓ {} is reachable (server version {})", report.url, version),
            None => println!("✓ {} is reachable", report.url),
        }
    } else {
        let reason = report.error.as_deref().unwrap_or("unknown error");
        println!("✗ {} is not reachable: {}", report.url, reason);
    }

    if let Some(entries) = report.config_entries {
        println!("  client config: {} entries", entries);
    }
    if let Some(licensed) = report.licensed {
        println!("  licensed: {}", if licensed { "yes" } else { "no" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcourier::change::Change;
    use libcourier::error::UserFacingError;
    use libcourier::reducer::reduce;
    use libcourier::types::PingResponse;

    #[test]
    fn test_report_from_successful_probe() {
        let state = reduce(
            AppState::default(),
            &Change::PingSuccess {
                data: PingResponse {
                    version: Some("9.4.0".to_string()),
                    status: Some("OK".to_string()),
                },
            },
        );

        let report = build_report("https://chat.example.com", &state, false);
        assert!(report.reachable);
        assert_eq!(report.version.as_deref(), Some("9.4.0"));
        assert!(report.error.is_none());
        assert!(report.config_entries.is_none());
    }

    #[test]
    fn test_report_from_failed_probe() {
        let state = reduce(
            AppState::default(),
            &Change::PingFailure {
                error: UserFacingError::new("server.ping_failed", "Cannot connect to the server."),
            },
        );

        let report = build_report("https://chat.example.com", &state, false);
        assert!(!report.reachable);
        assert_eq!(report.error.as_deref(), Some("Cannot connect to the server."));
    }

    #[test]
    fn test_full_report_reads_license_flag() {
        let mut license = std::collections::HashMap::new();
        license.insert("IsLicensed".to_string(), "true".to_string());
        let state = reduce(AppState::default(), &Change::ReceivedLicense { data: license });

        let report = build_report("https://chat.example.com", &state, true);
        assert_eq!(report.licensed, Some(true));
        assert_eq!(report.config_entries, Some(0));
    }
}
