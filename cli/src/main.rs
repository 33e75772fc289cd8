//! CLI for the issue dashboard.
//!
//! Fetches the issues of a GitHub repository and writes either the HTML
//! dashboard (`dashboard`) or the markdown report (`report`).

use clap::{Parser, Subcommand};
use issue_dashboard::{Pipeline, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Dashboard - Summarize GitHub issues as an HTML dashboard or a markdown report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write dashboard/index.html, dashboard/summary.json and charts for all issues.
    Dashboard(RunArgs),

    /// Write issue-report.md and issue-stats.png for open issues.
    Report(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Repository in owner/name form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// Directory the outputs are written under.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to an optional settings file.
    #[arg(long, env = "ISSUE_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,
}

impl Command {
    fn into_parts(self) -> (Pipeline, RunArgs) {
        match self {
            Self::Dashboard(args) => (Pipeline::Dashboard, args),
            Self::Report(args) => (Pipeline::Report, args),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    install_crypto_provider();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "{}", failure_message(&e));
            ExitCode::from(1)
        }
    }
}

/// Installs aws-lc-rs as the process-wide rustls provider.
///
/// octocrab enables `ring` while this crate enables `aws-lc-rs`, so rustls
/// cannot pick one on its own and the client would panic when built.
fn install_crypto_provider() {
    // Err only means a provider is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// Picks the log message for a failed run.
fn failure_message(error: &RunnerError) -> &'static str {
    match error {
        RunnerError::Fetch(fetch) if fetch.is_authorization_failure() => {
            "Access denied, check GITHUB_TOKEN and GITHUB_REPOSITORY"
        }
        _ => "Run failed",
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output; `RUST_LOG` selects the level, defaulting to
/// `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn runner_config(args: Args) -> RunnerConfig {
    let (pipeline, run) = args.command.into_parts();
    RunnerConfig::new(run.repository, run.token, pipeline)
        .with_output_root(run.output_dir)
        .with_config_path(run.config)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(runner_config(args))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Pipeline: {}", summary.pipeline);
    println!("  Issues fetched: {}", summary.issues_fetched);
    println!("  Pull requests skipped: {}", summary.pull_requests_skipped);
    println!("  Open: {}", summary.open);
    println!("  Closed: {}", summary.closed);
    if summary.is_empty() {
        println!("  No issues found");
    }

    for output in &summary.outputs {
        println!("  Wrote {}", output.display());
    }
}
