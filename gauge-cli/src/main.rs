//! Gauge stdio server
//!
//! Reads one JSON request per line from stdin and writes one JSON
//! response per line to stdout. Logs go to stderr.
//!
//! Methods:
//! - convert: single value conversion
//! - convert_compound: decompose a measurement into target units
//! - parse_compound: parse free text, optionally converting it
//! - format_compound: render a measurement with a format's template
//! - search: ranked unit search over loaded categories
//! - categories: registered categories and their load state
//! - compatible_units / popular_units: unit listings for a category

mod protocol;

use std::io::{self, Write};
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use gauge::{Gauge, GaugeConfig};
use protocol::{handle_request, Request, Response};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    let filter = EnvFilter::try_from_env("GAUGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_response(response: &Response) -> io::Result<()> {
    let line = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match GaugeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let gauge = Gauge::with_standard_library().with_config(config);
    info!(version = SERVER_VERSION, "gauge server starting");
    gauge.initialize().await;
    // runs alongside request handling; failures are only logged
    let _preload = gauge.preload();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("ready, waiting for requests");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("client disconnected (EOF)");
                break;
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                return ExitCode::FAILURE;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                handle_request(&gauge, &request).await
            }
            Err(e) => {
                debug!(error = %e, "unparseable request");
                Response::parse_error(e)
            }
        };

        if let Err(e) = write_response(&response) {
            error!(error = %e, "error writing response");
            return ExitCode::FAILURE;
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}
