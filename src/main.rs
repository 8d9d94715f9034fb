use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{create_router, AppState};
use attendance_engine::config::ConfigLoader;

/// Attendance service: records clock events and reports lateness and idle time.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing labels.yaml, employees.yaml and service.yaml.
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on. Overrides `bind_address` from service.yaml.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)?;
    let bind_address = cli
        .bind
        .unwrap_or_else(|| config.service().bind_address.clone());
    info!(
        config_dir = %cli.config.display(),
        employees = config.employees().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::with_memory_store(config));

    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Attendance service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
