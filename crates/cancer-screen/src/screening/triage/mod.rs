mod policy;
mod rules;

pub use policy::{round_half_up, CategoryProbabilities};
pub use rules::CategoryScores;

use super::answers::{Gender, TriageAnswers};
use super::domain::{CancerType, RiskLevel};
use super::jitter::{ConfidenceJitter, ThreadRngJitter};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const STAGE_ONE_MODEL: &str = "Cancer Type Classifier";
pub const NO_SPECIALIZED_MODEL: &str = "No specialized model activated";
pub const LOW_RISK_LABEL: &str = "Low Risk";
pub const LOW_RISK_CONFIDENCE: i64 = 85;
pub const LOW_RISK_RECOMMENDATION: &str = "Continue regular health screenings";

/// Two-stage auto-detection: tally symptoms per cancer type, then name the
/// specialized model for the leading type.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriageEngine;

impl TriageEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, answers: &TriageAnswers) -> TriageOutcome {
        self.assess_with(answers, &mut ThreadRngJitter)
    }

    pub fn assess_with<J>(&self, answers: &TriageAnswers, jitter: &mut J) -> TriageOutcome
    where
        J: ConfidenceJitter + ?Sized,
    {
        let scores = rules::accumulate(answers);
        let total = scores.total();

        if total == 0 {
            debug!("no triage signal, returning low risk placeholder");
            return TriageOutcome::low_risk(answers.gender, scores);
        }

        let probabilities = policy::normalize(&scores, total);
        let (detected, share) = probabilities.leader();
        let risk_level = policy::risk_level(share);
        let confidence = policy::confidence(share, jitter.next_jitter());

        debug!(
            detected = detected.path_segment(),
            share,
            risk = risk_level.label(),
            "triage complete"
        );

        TriageOutcome {
            detected: Some(detected),
            detected_type: detected.label().to_string(),
            probabilities,
            scores,
            risk_level,
            confidence,
            stage1: STAGE_ONE_MODEL.to_string(),
            stage2: detected.specialized_model().to_string(),
            recommendation: policy::recommendation(detected, risk_level),
        }
    }
}

/// Result of one triage run. Built fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageOutcome {
    /// `None` when nothing in the answers pointed at any cancer type.
    pub detected: Option<CancerType>,
    pub detected_type: String,
    pub probabilities: CategoryProbabilities,
    pub scores: CategoryScores,
    pub risk_level: RiskLevel,
    pub confidence: i64,
    pub stage1: String,
    pub stage2: String,
    pub recommendation: String,
}

impl TriageOutcome {
    /// Fixed placeholder returned when every tally is zero.
    fn low_risk(gender: Gender, scores: CategoryScores) -> Self {
        let prostate = if gender == Gender::Male { 10 } else { 0 };
        Self {
            detected: None,
            detected_type: LOW_RISK_LABEL.to_string(),
            probabilities: CategoryProbabilities {
                breast: 10,
                lung: 10,
                prostate,
            },
            scores,
            risk_level: RiskLevel::Low,
            confidence: LOW_RISK_CONFIDENCE,
            stage1: STAGE_ONE_MODEL.to_string(),
            stage2: NO_SPECIALIZED_MODEL.to_string(),
            recommendation: LOW_RISK_RECOMMENDATION.to_string(),
        }
    }

    pub fn is_low_risk_placeholder(&self) -> bool {
        self.detected.is_none()
    }
}
