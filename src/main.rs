use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bank_api_verifier::client::ApiClient;
use bank_api_verifier::runner::{write_summary, SuiteRunner};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bank-api-verifier [endpoint_url] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let endpoint = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let runner = SuiteRunner::new(ApiClient::new(endpoint));

    let timer = Instant::now();
    let outcomes = runner.run_all().await;
    let duration = timer.elapsed();

    info!("Ran verification suite against [{endpoint}] in: {duration:?}");

    write_summary(&outcomes, &mut BufWriter::new(stdout().lock()))?;

    if outcomes.iter().any(|outcome| !outcome.passed()) {
        exit(1);
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The summary goes to stdout, so logging has to stay on stderr to keep the report machine-readable
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
