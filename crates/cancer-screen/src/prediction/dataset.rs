use std::path::Path;

use reqwest::multipart::Part;
use serde::Serialize;

use super::error::ApiError;
use super::http::transport_error;

/// CSV dataset headed for the training, upload or batch endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Row and column counts of a dataset, header excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetShape {
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
}

impl DatasetFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|err| ApiError::client(format!("unable to read {}: {err}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset.csv".to_string());
        Ok(Self { file_name, bytes })
    }

    pub fn inspect(&self) -> Result<DatasetShape, ApiError> {
        let invalid = |err: csv::Error| ApiError::client(format!("invalid CSV file: {err}"));
        let mut reader = csv::Reader::from_reader(self.bytes.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .map_err(invalid)?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = 0;
        for record in reader.records() {
            record.map_err(invalid)?;
            rows += 1;
        }
        Ok(DatasetShape {
            rows,
            columns: headers.len(),
            headers,
        })
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime::TEXT_CSV.essence_str())
            .map_err(transport_error)
    }
}
