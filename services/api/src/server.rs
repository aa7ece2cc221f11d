use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use payout_advisor::advisor::{Advisor, ReferenceTables};
use payout_advisor::config::AppConfig;
use payout_advisor::error::AppError;
use payout_advisor::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(path) = args.tables.reference_tables.take() {
        config.advisor.reference_tables = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let tables = ReferenceTables::load(config.advisor.reference_tables.as_deref())?;
    let advisor = Arc::new(Advisor::new(tables));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_advisor_routes(advisor.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        reference_version = advisor.tables().version(),
        "payout advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
