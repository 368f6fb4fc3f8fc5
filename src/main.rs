//! Wiring & DI. Entry point: parse args, bootstrap the adapter, run the reporter.
//! No business logic here; the only place errors become exit codes.

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use std::sync::Arc;
use todo_progress::adapters::directory::HttpDirectoryAdapter;
use todo_progress::domain::{Report, ReportError};
use todo_progress::ports::DirectoryPort;
use todo_progress::shared::config::AppConfig;
use todo_progress::usecases::ProgressReporter;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: todo-progress <employee_id>";

#[derive(Parser, Debug)]
#[command(
    name = "todo-progress",
    version,
    about = "Report an employee's to-do completion progress",
    allow_negative_numbers = true
)]
struct Cli {
    /// Employee ID (positive integer)
    #[arg(allow_hyphen_values = true)]
    employee_id: String,

    /// API base URL (overrides TODO_PROGRESS_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the report and error lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            println!("Error: expected exactly one argument <employee_id>");
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Report> {
    let mut cfg = AppConfig::load()
        .map_err(|e| ReportError::Unexpected(format!("Failed to load configuration: {}", e)))?;
    cfg.override_base_url(cli.base_url);
    let base_url = cfg.base_url_or_default();
    info!(employee_id = %cli.employee_id, base_url = %base_url, "fetching progress");

    let directory: Arc<dyn DirectoryPort> = Arc::new(HttpDirectoryAdapter::new(base_url));
    let reporter = ProgressReporter::new(directory);

    // Rejects invalid ids before any request is sent.
    Ok(reporter.report_for_arg(&cli.employee_id).await?)
}
