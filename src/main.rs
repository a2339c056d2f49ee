//! pubcheck - report outdated pubspec.yaml dependencies
//!
//! Reads the `dependencies` of a pubspec.yaml, asks pub.dev for the latest
//! version of every plain version dependency and prints the ones that are
//! behind.

use clap::Parser;
use pubcheck::check::Checker;
use pubcheck::cli::{CliArgs, USAGE};
use pubcheck::manifest::load_pubspec;
use pubcheck::output::{create_formatter, OutputConfig};
use pubcheck::progress::Progress;
use pubcheck::registry::{HttpClient, PubDevAdapter, DEFAULT_USER_AGENT};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let Some(path) = args.manifest_path() else {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    };

    match run(&args, path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "check failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "pubcheck=debug,warn" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
async fn run(args: &CliArgs, path: &Path) -> anyhow::Result<()> {
    let pubspec = load_pubspec(path)?;

    let client = HttpClient::with_config(args.timeout(), DEFAULT_USER_AGENT)?
        .with_max_retries(args.retries);
    let registry = PubDevAdapter::with_base_url(client, &args.registry);

    let checker = Checker::new(&registry)
        .with_concurrency(args.concurrency)
        .with_progress(Progress::new(args.show_progress()));
    let report = checker.check(&pubspec).await?.with_manifest(path);

    let color = !args.no_color && io::stdout().is_terminal();
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, color));

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
