use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use cancer_screen::error::AppError;
use cancer_screen::prediction::{ModelStatus, PredictionRequest, PredictionResponse};
use cancer_screen::screening::{screening_router, CancerType};
use serde_json::{json, Value};

pub(crate) fn with_service_routes() -> axum::Router {
    screening_router()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/predict/:cancer", post(predict_endpoint))
        .route("/api/v1/model-status/:cancer", get(model_status_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Forward a prediction to the remote service for the named cancer type.
pub(crate) async fn predict_endpoint(
    Extension(state): Extension<AppState>,
    Path(cancer): Path<String>,
    Json(fields): Json<Value>,
) -> Result<Json<PredictionResponse>, AppError> {
    let cancer: CancerType = cancer.parse()?;
    let request = PredictionRequest::from_answers(&fields)
        .map_err(|err| AppError::Input(err.to_string()))?;
    let response = state.client.predict(cancer, &request).await?;
    Ok(Json(response))
}

pub(crate) async fn model_status_endpoint(
    Extension(state): Extension<AppState>,
    Path(cancer): Path<String>,
) -> Result<Json<ModelStatus>, AppError> {
    let cancer: CancerType = cancer.parse()?;
    Ok(Json(state.client.model_status(cancer).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cancer_screen::config::MlApiConfig;
    use cancer_screen::prediction::{ApiError, PredictionClient};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind throwaway listener");
        let addr = listener.local_addr().expect("listener address");
        drop(listener);
        format!("http://{addr}/api")
    }

    async fn state(ready: bool) -> AppState {
        let client = PredictionClient::new(&MlApiConfig {
            base_url: closed_port_url().await,
            ..MlApiConfig::default()
        })
        .expect("client builds");
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            client,
        }
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = readiness_endpoint(Extension(state(false).await))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(state(true).await))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn predict_rejects_unknown_cancer_type() {
        let result = predict_endpoint(
            Extension(state(true).await),
            Path("kidney".to_string()),
            Json(json!({ "age": 60 })),
        )
        .await;

        let err = result.expect_err("unknown type rejected");
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn predict_rejects_non_object_fields() {
        let result = predict_endpoint(
            Extension(state(true).await),
            Path("lung".to_string()),
            Json(json!([1, 2, 3])),
        )
        .await;

        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_service_unavailable() {
        let result =
            model_status_endpoint(Extension(state(true).await), Path("lung".to_string())).await;

        let err = result.expect_err("backend is down");
        assert!(matches!(err, AppError::Api(ApiError::Unreachable)));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
