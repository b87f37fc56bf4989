use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::error::{ApiError, INVALID_PREDICTION_RESPONSE};

/// Risk score the lung page shows for a positive model prediction.
pub const POSITIVE_RISK_SCORE: u8 = 85;
pub const NEGATIVE_RISK_SCORE: u8 = 15;

/// Flat field map posted to `/predict/{domain}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    fields: BTreeMap<String, Value>,
}

impl PredictionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten any serializable answer set into request fields. Fails when
    /// the answers do not serialize to a JSON object.
    pub fn from_answers<T: Serialize + ?Sized>(answers: &T) -> Result<Self, ApiError> {
        match serde_json::to_value(answers) {
            Ok(Value::Object(map)) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            Ok(other) => Err(ApiError::client(format!(
                "prediction fields must form an object, got {other}"
            ))),
            Err(err) => Err(ApiError::client(err.to_string())),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: ModelPrediction,
}

#[derive(Deserialize)]
struct RawPredictionResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    prediction: Option<ModelPrediction>,
}

impl PredictionResponse {
    /// Decode a 2xx body. Anything short of `success: true` with a readable
    /// prediction is reported as an invalid response.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiError> {
        let raw = match serde_json::from_slice::<RawPredictionResponse>(bytes) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "undecodable prediction payload");
                return Err(ApiError::client(INVALID_PREDICTION_RESPONSE));
            }
        };
        match raw.prediction {
            Some(prediction) if raw.success => Ok(Self {
                success: true,
                prediction,
            }),
            _ => Err(ApiError::client(INVALID_PREDICTION_RESPONSE)),
        }
    }
}

/// One model classification. Fields the service adds later land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Human-readable label, e.g. "Malignant" or "High Risk".
    pub prediction: String,
    #[serde(default)]
    pub prediction_code: Option<i64>,
    /// Probability of the chosen class, in percent.
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
    #[serde(default)]
    pub model_type: Option<String>,
    /// Number of feature columns the model consumed.
    #[serde(default)]
    pub features_used: Option<u32>,
    #[serde(default)]
    pub model_info: Option<ModelInfo>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ModelPrediction {
    pub fn is_positive(&self) -> bool {
        self.prediction_code == Some(1)
    }

    pub fn risk_score(&self) -> u8 {
        if self.is_positive() {
            POSITIVE_RISK_SCORE
        } else {
            NEGATIVE_RISK_SCORE
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub trained_at: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub model_type: Option<String>,
}

impl ModelInfo {
    pub fn trained_at(&self) -> Option<NaiveDateTime> {
        self.trained_at.as_deref().and_then(parse_timestamp)
    }
}

/// Service timestamps are ISO-8601 without an offset.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub metrics: TrainingMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub training_samples: u64,
    pub test_samples: u64,
    pub features: u64,
    pub trained_at: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl TrainingMetrics {
    pub fn trained_at(&self) -> Option<NaiveDateTime> {
        self.trained_at.as_deref().and_then(parse_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Name the service stored the dataset under.
    pub file_path: String,
    pub rows: u64,
    pub columns: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    #[serde(default)]
    pub success: bool,
    pub status: ModelStatusDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatusDetail {
    pub cancer_type: String,
    pub is_trained: bool,
    #[serde(default)]
    pub metrics: Option<TrainingMetrics>,
    #[serde(default)]
    pub trained_at: Option<String>,
    #[serde(default)]
    pub model_path: Option<String>,
}

impl ModelStatusDetail {
    pub fn trained_at(&self) -> Option<NaiveDateTime> {
        self.trained_at.as_deref().and_then(parse_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// CSV returned by a batch prediction: the input rows plus `prediction`,
/// `prediction_code` and `confidence` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPredictionFile {
    /// Attachment name suggested by the service, if any.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchPredictionRow {
    pub prediction: String,
    pub prediction_code: i64,
    pub confidence: f64,
}

impl BatchPredictionFile {
    pub fn rows(&self) -> Result<Vec<BatchPredictionRow>, ApiError> {
        let mut reader = csv::Reader::from_reader(self.bytes.as_slice());
        reader
            .deserialize()
            .collect::<Result<Vec<BatchPredictionRow>, csv::Error>>()
            .map_err(|err| ApiError::client(format!("invalid batch output: {err}")))
    }

    /// Number of rows per predicted label.
    pub fn label_counts(&self) -> Result<BTreeMap<String, usize>, ApiError> {
        let mut counts = BTreeMap::new();
        for row in self.rows()? {
            *counts.entry(row.prediction).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
