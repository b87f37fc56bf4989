use std::time::Duration;

use reqwest::multipart::Form;
use tracing::debug;

use super::dataset::DatasetFile;
use super::error::ApiError;
use super::http::{attachment_filename, check_response, read_json, transport_error};
use super::models::{
    BatchPredictionFile, HealthStatus, ModelStatus, PredictionRequest, PredictionResponse,
    TrainingReport, UploadReceipt,
};
use crate::config::MlApiConfig;
use crate::screening::domain::CancerType;

/// Where a training run takes its data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingSource {
    /// The dataset bundled with the service.
    DefaultDataset,
    Upload(DatasetFile),
}

/// HTTP client for the prediction service.
///
/// Each method issues exactly one request and never retries. Training and
/// batch prediction run under the long timeout; everything else under the
/// default one.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
    long_running_timeout: Duration,
}

impl PredictionClient {
    pub fn new(config: &MlApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cancer-screen/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ApiError::client(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            long_running_timeout: config.long_running_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    pub async fn predict(
        &self,
        cancer: CancerType,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        let url = self.url(&format!("predict/{cancer}"));
        debug!(%url, fields = request.len(), "requesting prediction");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let resp = check_response(resp).await?;
        let bytes = resp.bytes().await.map_err(transport_error)?;
        PredictionResponse::from_slice(&bytes)
    }

    pub async fn train_model(
        &self,
        cancer: CancerType,
        source: TrainingSource,
    ) -> Result<TrainingReport, ApiError> {
        let url = self.url(&format!("train/{cancer}"));
        let form = match source {
            TrainingSource::DefaultDataset => Form::new().text("useDefault", "true"),
            TrainingSource::Upload(file) => Form::new()
                .part("file", file.into_part()?)
                .text("useDefault", "false"),
        };
        debug!(%url, "requesting model training");

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(self.long_running_timeout)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_response(resp).await?).await
    }

    pub async fn predict_batch(
        &self,
        cancer: CancerType,
        file: DatasetFile,
    ) -> Result<BatchPredictionFile, ApiError> {
        let url = self.url(&format!("predict-batch/{cancer}"));
        debug!(%url, file = %file.file_name, "requesting batch prediction");
        let form = Form::new().part("file", file.into_part()?);

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(self.long_running_timeout)
            .send()
            .await
            .map_err(transport_error)?;
        let resp = check_response(resp).await?;
        let file_name = attachment_filename(&resp);
        let bytes = resp.bytes().await.map_err(transport_error)?;
        Ok(BatchPredictionFile {
            file_name,
            bytes: bytes.to_vec(),
        })
    }

    pub async fn upload_dataset(
        &self,
        file: DatasetFile,
        cancer: CancerType,
    ) -> Result<UploadReceipt, ApiError> {
        let url = self.url("upload-dataset");
        debug!(%url, file = %file.file_name, %cancer, "uploading dataset");
        let form = Form::new()
            .part("file", file.into_part()?)
            .text("cancerType", cancer.path_segment());

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_response(resp).await?).await
    }

    pub async fn model_status(&self, cancer: CancerType) -> Result<ModelStatus, ApiError> {
        let url = self.url(&format!("model-status/{cancer}"));
        debug!(%url, "fetching model status");

        let resp = self.http.get(&url).send().await.map_err(transport_error)?;
        read_json(check_response(resp).await?).await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url("health");
        debug!(%url, "checking prediction service health");

        let resp = self.http.get(&url).send().await.map_err(transport_error)?;
        read_json(check_response(resp).await?).await
    }
}
