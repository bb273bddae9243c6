use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use staffing_dashboard::config::AppConfig;
use staffing_dashboard::dashboard::DashboardController;
use staffing_dashboard::error::AppError;
use staffing_dashboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
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

    let controller = DashboardController::seeded(config.dashboard.clone());
    info!(
        employees = controller.store().employees().len(),
        requisitions = controller.store().hiring().len(),
        page_size = config.dashboard.page_size,
        filter_mode = ?config.dashboard.filter_mode,
        "dashboard session seeded"
    );
    let dashboard = Arc::new(Mutex::new(controller));

    let app = with_dashboard_routes(dashboard)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "staffing dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
