use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use joke_search::{telemetry, AppError, Dependencies, Settings};
use joke_search_ingest::{IngestSummary, RowFailurePolicy};

#[derive(Parser)]
#[command(name = "ingest")]
#[command(about = "Load jokes from a CSV file into the search index", long_about = None)]
struct Cli {
    /// CSV file with a header row and a `joke` column
    #[arg(long, default_value = "dad_jokes.csv")]
    csv: PathBuf,

    /// What to do after a row fails to index (abort|continue)
    #[arg(long, default_value_t = RowFailurePolicy::Abort)]
    on_row_error: RowFailurePolicy,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(summary) => {
            info!(
                indexed = summary.indexed,
                failed = summary.failed,
                "Process completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to complete the process");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<IngestSummary, AppError> {
    let settings = Settings::from_env()?;
    let deps = Dependencies::new(settings)?;
    deps.ingest(&cli.csv, cli.on_row_error).await
}
