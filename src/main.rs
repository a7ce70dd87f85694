use dawala::dawala_config::ServerConfig;
use dawala::logging::{init_tracing, shutdown_tracer};
use dawala::metrics::{init_metrics, metrics_app};
use dawala::modules::setup::controller::run_bootstrap;
use dawala::router::init_router;
use dawala::state::{AppState, init_app_state};
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing();
    let metrics_handle = init_metrics();

    let state = init_app_state();
    if state.auto_setup.run_on_start {
        bootstrap_on_start(&state).await;
    }

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    info!(address = %local_addr, "🚀 Server running");
    info!("📚 Swagger UI available at http://{local_addr}/swagger-ui");
    info!("📖 Scalar UI available at http://{local_addr}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

/// A failed bootstrap is logged and the server keeps starting.
async fn bootstrap_on_start(state: &AppState) {
    match run_bootstrap(state).await {
        Ok(outcome) => info!(result = outcome.message(), "Startup admin bootstrap finished"),
        Err(e) => warn!(error = %e.message(), "Startup admin bootstrap failed"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
