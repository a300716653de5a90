use crate::cli::ServeArgs;
use crate::infra::{AppState, ScoringDefaults};
use crate::routes::scoring_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_engine::config::AppConfig;
use credit_engine::error::AppError;
use credit_engine::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = scoring_router()
        .layer(Extension(state))
        .layer(Extension(ScoringDefaults {
            preview_limit: config.scoring.preview_limit,
        }))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
