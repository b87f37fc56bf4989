//! Cancer risk screening: local rule-based scorers for the auto-detection,
//! lung and prostate questionnaires, plus a client for the remote
//! prediction service that trains and serves the machine-learning models.

pub mod config;
pub mod error;
pub mod prediction;
pub mod screening;
pub mod telemetry;
