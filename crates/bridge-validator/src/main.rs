use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use bridge_validator::{Expectations, SmokeTest, DEFAULT_BASE_URL};
use clap::{value_parser, Arg, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("bridge-validate")
        .version(bridge_validator::VERSION)
        .about("Smoke-test a running Uma + PS Bridge System server")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .default_value(DEFAULT_BASE_URL)
                .help("Server to test"),
        )
        .arg(
            Arg::new("timeout-secs")
                .long("timeout-secs")
                .default_value("5")
                .value_parser(value_parser!(u64))
                .help("Per-request timeout in seconds"),
        )
        .get_matches();

    let mut expectations = Expectations::new();
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        expectations = expectations.with_base_url(base_url);
    }
    if let Some(secs) = matches.get_one::<u64>("timeout-secs") {
        expectations = expectations.with_timeout(Duration::from_secs(*secs));
    }

    let smoke = SmokeTest::new(expectations)?;
    let outcome = smoke
        .run(&mut std::io::stdout().lock())
        .await
        .context("failed to write report")?;

    Ok(ExitCode::from(outcome.exit_code()))
}
