use cancer_screen::error::AppError;
use cancer_screen::prediction::PredictionClient;
use cancer_screen::screening::CancerType;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) client: PredictionClient,
}

pub(crate) fn parse_cancer_type(raw: &str) -> Result<CancerType, String> {
    raw.parse::<CancerType>().map_err(|err| err.to_string())
}

/// Read a questionnaire answer set from a JSON file.
pub(crate) fn read_answers<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Input(format!("failed to parse {} as answers ({err})", path.display()))
    })
}
