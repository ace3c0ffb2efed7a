use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use joke_search::{telemetry, AppError, Dependencies, Settings};
use joke_search_server::router;

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Serve the joke search page and API", long_about = None)]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Server stopped with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = Settings::from_env()?;
    if let Some(port) = cli.port {
        settings.port = port;
    }

    let deps = Dependencies::new(settings)?;

    if let Err(e) = deps.verify_connection().await {
        warn!(error = %e, "OpenSearch is not reachable yet");
    }

    let port = deps.settings.port;
    let app = router(deps.app_state());
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;

    info!(port = port, "Server running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
