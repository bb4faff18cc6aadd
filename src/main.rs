use people_registry::api::{build_router, AppState};
use people_registry::config::Config;
use people_registry::enrichment::{Enricher, HttpDemographicsSource};
use people_registry::lifecycle::{setup_tracing, PeopleSystem};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // before tracing, so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();
    setup_tracing();
    if let Err(e) = dotenv {
        debug!(error = %e, ".env not loaded, using process environment");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(bind_addr = %config.bind_addr, "Starting people registry");

    let system = PeopleSystem::new(config.store_buffer);
    let source = HttpDemographicsSource::new(config.endpoints.clone());
    let enricher = Enricher::new(Arc::new(source));
    let app = build_router(AppState::new(system.people.clone(), enricher));

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(bind_addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(bind_addr = %config.bind_addr, "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = served {
        error!(error = %e, "Server error");
    }

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Unclean shutdown");
        return ExitCode::FAILURE;
    }
    info!("Stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
