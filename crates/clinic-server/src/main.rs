use anyhow::Context;
use clap::{Parser, Subcommand};
use clinic_audit::AuditLogger;
use clinic_core::ClinicConfig;
use clinic_server::{AppState, create_router};
use clinic_session::{SessionStore, StaticDirectory, hash_password};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clinic", version, about = "Clinic back-office service")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service.
    Serve {
        /// Path to the configuration file.
        #[arg(long, default_value = "clinic.yaml")]
        config: PathBuf,
    },

    /// Validate a configuration file and exit.
    Check {
        /// Path to the configuration file.
        #[arg(long, default_value = "clinic.yaml")]
        config: PathBuf,
    },

    /// Hash a password for the directory section of clinic.yaml.
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve { config } => serve(&config).await,
        Command::Check { config } => check(&config),
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
            Ok(())
        }
    }
}

async fn serve(path: &Path) -> anyhow::Result<()> {
    let config = ClinicConfig::from_file(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    let directory = Arc::new(StaticDirectory::from_config(&config.directory));
    if directory.is_empty() {
        tracing::warn!("identity directory has no accounts; nobody can sign in");
    }

    let sessions = Arc::new(SessionStore::new(directory));
    let audit = Arc::new(AuditLogger::new(config.audit.clone())?);

    let addr = config.server.bind_addr();
    let state = AppState::new(config, sessions.clone(), audit);
    let app = create_router(state);

    // The directory is loaded; stop deferring authorization decisions.
    sessions.mark_ready();

    tracing::info!(address = %addr, "Starting clinic back office");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

fn check(path: &Path) -> anyhow::Result<()> {
    let config = ClinicConfig::from_file(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    println!(
        "configuration OK: {} account(s), listening on {}",
        config.directory.users.len(),
        config.server.bind_addr()
    );
    Ok(())
}
