use metrics_exporter_prometheus::PrometheusHandle;
use prakriti::assessment::domain::Language;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw)
        .ok_or_else(|| format!("unsupported language '{raw}' (expected 'ja' or 'en')"))
}
