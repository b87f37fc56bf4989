//! Client for the remote prediction service that trains and serves the
//! per-cancer machine-learning models.
//!
//! Failures never surface as raw transport errors: every call resolves to
//! its payload or to one of the three [`ApiError`] shapes.

mod client;
mod dataset;
mod error;
mod http;
mod models;

pub use client::{PredictionClient, TrainingSource};
pub use dataset::{DatasetFile, DatasetShape};
pub use error::{
    ApiError, GENERIC_SERVER_MESSAGE, INVALID_PREDICTION_RESPONSE, UNEXPECTED_CLIENT_MESSAGE,
    UNREACHABLE_MESSAGE,
};
pub use models::{
    BatchPredictionFile, BatchPredictionRow, HealthStatus, ModelInfo, ModelPrediction,
    ModelStatus, ModelStatusDetail, PredictionRequest, PredictionResponse, TrainingMetrics,
    TrainingReport, UploadReceipt, NEGATIVE_RISK_SCORE, POSITIVE_RISK_SCORE,
};
