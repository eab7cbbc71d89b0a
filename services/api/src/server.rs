use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_presentation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prakriti::assessment::questionnaire::QuestionnaireSet;
use prakriti::config::AppConfig;
use prakriti::error::AppError;
use prakriti::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // The questionnaire files are the only external input; the service does
    // not start without them.
    let questionnaires = match QuestionnaireSet::load(&config.questionnaire) {
        Ok(set) => Arc::new(set),
        Err(err) => {
            error!(%err, "questionnaire data failed to load");
            return Err(err.into());
        }
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_presentation_routes(questionnaires.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions = questionnaires.question_count(),
        "constitution questionnaire service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
