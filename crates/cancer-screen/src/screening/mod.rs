//! Local rule-based risk scoring.
//!
//! Each scorer is a pure function of an answer set: no I/O and no shared
//! state. The triage confidence bump is the only random input and comes
//! from a swappable [`ConfidenceJitter`].

pub mod answers;
pub mod domain;
pub mod jitter;
pub mod lung;
pub mod prostate;
pub mod router;
pub mod triage;

#[cfg(test)]
mod tests;

pub use answers::{
    parse_measurement_or_zero, parse_whole_or_zero, BreastMeasurements, Gender, LungAnswers,
    Measurement, ProgressionPattern, ProstateAnswers, SmokingHistory, SmokingStatus,
    SymptomDuration, SymptomProgression, TriageAnswers, WholeNumber, YesNo,
};
pub use domain::{
    CancerType, LungRiskBand, ProstateRiskBand, RiskLevel, ScoreComponent, UnknownCancerType,
};
pub use jitter::{ConfidenceJitter, FixedJitter, ThreadRngJitter};
pub use lung::{LungAssessment, LungScorer};
pub use prostate::{ProstateAssessment, ProstateScorer};
pub use router::{screening_router, ScreeningResponse};
pub use triage::{CategoryProbabilities, CategoryScores, TriageEngine, TriageOutcome};
