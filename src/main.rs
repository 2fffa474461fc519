use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use bookd::api::{self, AppState};
use bookd::directory::OpenDirectory;
use bookd::engine::Engine;
use bookd::notify::EventHub;
use bookd::seed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("BOOKD_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    bookd::observability::init(metrics_port);

    let port = std::env::var("BOOKD_PORT").unwrap_or_else(|_| "8086".into());
    let bind = std::env::var("BOOKD_BIND").unwrap_or_else(|_| "0.0.0.0".into());
    let seed_file =
        std::env::var("BOOKD_SEED_FILE").unwrap_or_else(|_| "db/reservations.json".into());
    let cors_origin =
        std::env::var("BOOKD_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".into());
    let max_guests: u32 = std::env::var("BOOKD_MAX_GUESTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);

    // Every hotel key is accepted; a deployment with a real hotel service
    // wires in its own HotelDirectory implementation instead.
    let engine = Arc::new(Engine::new(
        Arc::new(OpenDirectory),
        Arc::new(EventHub::new()),
        max_guests,
    ));

    let seeded = engine.restore(seed::load_reservations(&PathBuf::from(&seed_file))?);

    let app = api::build_router(AppState { engine }, &cors_origin);

    let addr = format!("{bind}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("bookd listening on {addr}");
    info!("  seed_file: {seed_file} ({seeded} records)");
    info!("  max_guests: {max_guests}");
    info!("  cors_origin: {cors_origin}");
    info!(
        "  metrics: {}",
        metrics_port.map_or("disabled".to_string(), |p| format!(
            "http://0.0.0.0:{p}/metrics"
        ))
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("bookd stopped");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
    info!("shutdown signal received");
}
