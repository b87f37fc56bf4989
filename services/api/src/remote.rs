use crate::infra::{parse_cancer_type, read_answers};
use cancer_screen::config::AppConfig;
use cancer_screen::error::AppError;
use cancer_screen::prediction::{
    DatasetFile, PredictionClient, PredictionRequest, TrainingMetrics, TrainingSource,
};
use cancer_screen::screening::CancerType;
use cancer_screen::telemetry;
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_BATCH_OUTPUT: &str = "predictions.csv";

#[derive(Args, Debug)]
pub(crate) struct DomainArgs {
    /// Cancer type: breast, lung or prostate
    #[arg(value_parser = parse_cancer_type)]
    pub(crate) cancer: CancerType,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    #[arg(value_parser = parse_cancer_type)]
    pub(crate) cancer: CancerType,
    /// JSON file holding the prediction fields
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct TrainArgs {
    #[arg(value_parser = parse_cancer_type)]
    pub(crate) cancer: CancerType,
    /// Train on this CSV instead of the bundled dataset
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    #[arg(value_parser = parse_cancer_type)]
    pub(crate) cancer: CancerType,
    /// CSV with one row per case
    pub(crate) file: PathBuf,
    /// Where to write the scored CSV (defaults to the name the service suggests)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct UploadArgs {
    #[arg(value_parser = parse_cancer_type)]
    pub(crate) cancer: CancerType,
    pub(crate) file: PathBuf,
}

pub(crate) fn connect() -> Result<PredictionClient, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let client = PredictionClient::new(&config.ml_api)?;
    info!(base_url = client.base_url(), "prediction service client ready");
    Ok(client)
}

/// Read a CSV and report its shape before it is sent anywhere.
fn load_dataset(path: PathBuf) -> Result<DatasetFile, AppError> {
    let file = DatasetFile::from_path(&path)?;
    let shape = file.inspect()?;
    println!(
        "Dataset {}: {} rows x {} columns",
        file.file_name, shape.rows, shape.columns
    );
    Ok(file)
}

pub(crate) async fn predict(client: &PredictionClient, args: PredictArgs) -> Result<(), AppError> {
    let fields: Value = read_answers(&args.input)?;
    let request = PredictionRequest::from_answers(&fields)?;
    let response = client.predict(args.cancer, &request).await?;
    let prediction = response.prediction;

    println!("{} prediction", args.cancer.label());
    println!(
        "Result: {} ({:.2}% confidence)",
        prediction.prediction, prediction.confidence
    );
    println!("Risk score: {}", prediction.risk_score());
    if let Some(model_type) = &prediction.model_type {
        println!("Model: {}", model_type);
    }
    if let Some(info) = &prediction.model_info {
        if let Some(accuracy) = info.accuracy {
            println!("Model accuracy: {:.1}%", accuracy * 100.0);
        }
        if let Some(trained_at) = info.trained_at() {
            println!("Trained: {}", trained_at.format("%Y-%m-%d %H:%M"));
        }
    }
    Ok(())
}

pub(crate) async fn train(client: &PredictionClient, args: TrainArgs) -> Result<(), AppError> {
    let source = match args.file {
        Some(path) => TrainingSource::Upload(load_dataset(path)?),
        None => TrainingSource::DefaultDataset,
    };
    let report = client.train_model(args.cancer, source).await?;

    println!("{}", report.message);
    render_metrics(&report.metrics);
    Ok(())
}

pub(crate) async fn predict_batch(
    client: &PredictionClient,
    args: BatchArgs,
) -> Result<(), AppError> {
    let file = load_dataset(args.file)?;
    let output = client.predict_batch(args.cancer, file).await?;

    let path = args
        .output
        .unwrap_or_else(|| batch_output_path(output.file_name.as_deref()));
    std::fs::write(&path, &output.bytes)?;
    println!("Predictions saved to {}", path.display());

    match output.label_counts() {
        Ok(counts) => {
            for (label, count) in &counts {
                println!("- {}: {}", label, count);
            }
        }
        Err(err) => warn!(error = %err, path = %path.display(), "batch output not summarised"),
    }
    Ok(())
}

/// Local path for a downloaded batch file. Only the last component of the
/// service's suggested name is kept.
fn batch_output_path(suggested: Option<&str>) -> PathBuf {
    suggested
        .and_then(|name| Path::new(name).file_name())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BATCH_OUTPUT))
}

pub(crate) async fn upload(client: &PredictionClient, args: UploadArgs) -> Result<(), AppError> {
    let file = load_dataset(args.file)?;
    let receipt = client.upload_dataset(file, args.cancer).await?;

    println!("{}", receipt.message);
    println!(
        "Stored as {} ({} rows x {} columns)",
        receipt.file_path, receipt.rows, receipt.columns
    );
    Ok(())
}

pub(crate) async fn status(client: &PredictionClient, args: DomainArgs) -> Result<(), AppError> {
    let status = client.model_status(args.cancer).await?.status;

    println!("{} model", args.cancer.label());
    if !status.is_trained {
        println!("Status: not trained");
        return Ok(());
    }
    println!("Status: trained");
    if let Some(trained_at) = status.trained_at() {
        println!("Trained: {}", trained_at.format("%Y-%m-%d %H:%M"));
    }
    if let Some(path) = &status.model_path {
        println!("Model file: {}", path);
    }
    if let Some(metrics) = &status.metrics {
        render_metrics(metrics);
    }
    Ok(())
}

pub(crate) async fn health(client: &PredictionClient) -> Result<(), AppError> {
    let health = client.health_check().await?;
    let message = health.message.as_deref().unwrap_or_default();
    if health.is_healthy() {
        println!("Prediction service healthy: {}", message);
    } else {
        println!("Prediction service reports '{}': {}", health.status, message);
    }
    Ok(())
}

fn render_metrics(metrics: &TrainingMetrics) {
    println!("\nMetrics");
    println!("- Accuracy: {:.1}%", metrics.accuracy * 100.0);
    println!("- Precision: {:.1}%", metrics.precision * 100.0);
    println!("- Recall: {:.1}%", metrics.recall * 100.0);
    println!("- F1 score: {:.3}", metrics.f1_score);
    println!(
        "- Samples: {} training / {} test, {} features",
        metrics.training_samples, metrics.test_samples, metrics.features
    );
}
