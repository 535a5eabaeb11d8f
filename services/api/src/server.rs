use crate::cli::ServeArgs;
use crate::infra::{seed_demo_catalog, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use brokerage::app::BrokerageApp;
use brokerage::config::AppConfig;
use brokerage::error::AppError;
use brokerage::telemetry;
use chrono::Local;
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

    let mut brokerage = BrokerageApp::new();
    if config.seed_demo {
        seed_demo_catalog(&mut brokerage, Local::now().date_naive())?;
        info!("demo catalog seeded");
    }
    let shared = Arc::new(Mutex::new(brokerage));

    let app = with_service_routes(shared)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "house brokerage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
