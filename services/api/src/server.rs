use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryNoticeRepository};
use crate::routes::with_hostel_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hostel_hub::config::AppConfig;
use hostel_hub::error::AppError;
use hostel_hub::notices::NoticeBoardService;
use hostel_hub::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryNoticeRepository::seeded(
        config.notices.seed_path.as_deref(),
    )?);
    let notice_board = Arc::new(NoticeBoardService::new(repository));

    let app = with_hostel_routes(notice_board)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hostel notice service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
