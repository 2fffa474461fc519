use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total engine operations. Labels: op, outcome.
pub const OPERATIONS_TOTAL: &str = "bookd_operations_total";

/// Histogram: operation latency in seconds. Labels: op.
pub const OPERATION_DURATION_SECONDS: &str = "bookd_operation_duration_seconds";

/// Counter: mutations rejected because the window was already taken.
pub const CONFLICTS_TOTAL: &str = "bookd_conflicts_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: reservations currently holding a window (not cancelled).
pub const RESERVATIONS_ACTIVE: &str = "bookd_reservations_active";

/// Counter: booking events fanned out to subscribers.
pub const EVENTS_PUBLISHED_TOTAL: &str = "bookd_events_published_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
