use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    handlers::{self, AppState},
    plans::PlanLoader,
    signals::setup_signal_handlers,
};

/// Start the landing page server
///
/// This function:
/// 1. Builds the plan loader from the API settings
/// 2. Installs the Prometheus recorder when metrics are enabled
/// 3. Binds to the configured address
/// 4. Serves requests until SIGINT/SIGTERM, then drains connections
pub async fn start_server(config: Config) -> Result<()> {
    info!("InkManage landing starting...");

    let loader = PlanLoader::new(&config.api)?;

    let metrics_handle = if config.metrics.enabled {
        match crate::metrics::init_metrics() {
            Ok(handle) => Some(Arc::new(handle)),
            Err(e) => {
                warn!("Metrics disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!(
        plans_endpoint = %loader.endpoint(),
        revalidate_seconds = config.api.revalidate_seconds,
        "Configuration loaded"
    );

    let metrics_endpoint = config.metrics.endpoint.clone();
    let state = AppState::new(config, loader);
    let app = create_router(
        state,
        metrics_handle.map(|handle| (metrics_endpoint, handle)),
    );

    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// `metrics` is the scrape path and handle; `None` leaves the route out.
pub fn create_router(
    state: AppState,
    metrics: Option<(String, Arc<PrometheusHandle>)>,
) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::landing::landing_page))
        .route("/api/plans", get(handlers::plans::list_plans))
        .with_state(state)
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    if let Some((endpoint, handle)) = metrics {
        let metrics_routes = Router::new()
            .route(&endpoint, get(handlers::metrics_handler::metrics))
            .with_state(handle);
        app = app.merge(metrics_routes);
    }

    app.layer(TraceLayer::new_for_http())
}
