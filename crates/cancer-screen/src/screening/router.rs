use axum::{routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::{LungAnswers, ProstateAnswers, TriageAnswers};
use super::lung::{LungAssessment, LungScorer};
use super::prostate::{ProstateAssessment, ProstateScorer};
use super::triage::{TriageEngine, TriageOutcome};

/// Scorer result stamped with the time it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResponse<T> {
    pub assessed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: T,
}

impl<T> ScreeningResponse<T> {
    pub fn now(result: T) -> Self {
        Self {
            assessed_at: Utc::now(),
            result,
        }
    }
}

/// Router builder exposing the local scorers over HTTP.
pub fn screening_router() -> Router {
    Router::new()
        .route("/api/v1/screening/triage", post(triage_handler))
        .route("/api/v1/screening/lung", post(lung_handler))
        .route("/api/v1/screening/prostate", post(prostate_handler))
}

pub(crate) async fn triage_handler(
    Json(answers): Json<TriageAnswers>,
) -> Json<ScreeningResponse<TriageOutcome>> {
    Json(ScreeningResponse::now(TriageEngine::new().assess(&answers)))
}

pub(crate) async fn lung_handler(
    Json(answers): Json<LungAnswers>,
) -> Json<ScreeningResponse<LungAssessment>> {
    Json(ScreeningResponse::now(LungScorer::new().score(&answers)))
}

pub(crate) async fn prostate_handler(
    Json(answers): Json<ProstateAnswers>,
) -> Json<ScreeningResponse<ProstateAssessment>> {
    Json(ScreeningResponse::now(ProstateScorer::new().score(&answers)))
}
