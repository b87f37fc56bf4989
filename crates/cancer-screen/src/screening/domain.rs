use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cancer domains with their own questionnaire, weights and model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancerType {
    Breast,
    Lung,
    Prostate,
}

impl CancerType {
    /// Evaluation order; the first entry wins ties during auto-detection.
    pub const ALL: [CancerType; 3] = [CancerType::Breast, CancerType::Lung, CancerType::Prostate];

    /// Route segment used by the prediction service (`/predict/{segment}`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            CancerType::Breast => "breast",
            CancerType::Lung => "lung",
            CancerType::Prostate => "prostate",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CancerType::Breast => "Breast Cancer",
            CancerType::Lung => "Lung Cancer",
            CancerType::Prostate => "Prostate Cancer",
        }
    }

    /// Second-stage model activated once this type has been detected.
    pub const fn specialized_model(self) -> &'static str {
        match self {
            CancerType::Breast => "Breast Cancer SVM Model",
            CancerType::Lung => "Lung Cancer Neural Network",
            CancerType::Prostate => "Prostate Cancer Random Forest",
        }
    }
}

impl fmt::Display for CancerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported cancer type '{0}' (expected breast, lung or prostate)")]
pub struct UnknownCancerType(pub String);

impl FromStr for CancerType {
    type Err = UnknownCancerType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breast" => Ok(CancerType::Breast),
            "lung" => Ok(CancerType::Lung),
            "prostate" => Ok(CancerType::Prostate),
            _ => Err(UnknownCancerType(value.to_string())),
        }
    }
}

/// Banding used by the auto-detection triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Banding used by the lung scorer. Four bands, unlike the triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LungRiskBand {
    Low,
    LowModerate,
    Moderate,
    High,
}

impl LungRiskBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            LungRiskBand::High
        } else if score >= 50 {
            LungRiskBand::Moderate
        } else if score >= 25 {
            LungRiskBand::LowModerate
        } else {
            LungRiskBand::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LungRiskBand::Low => "Low Risk",
            LungRiskBand::LowModerate => "Low-Moderate Risk",
            LungRiskBand::Moderate => "Moderate Risk",
            LungRiskBand::High => "High Risk",
        }
    }
}

/// Banding used by the prostate scorer, applied to the clamped percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProstateRiskBand {
    Low,
    Moderate,
    High,
}

impl ProstateRiskBand {
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage < 20 {
            ProstateRiskBand::Low
        } else if percentage < 50 {
            ProstateRiskBand::Moderate
        } else {
            ProstateRiskBand::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProstateRiskBand::Low => "Low",
            ProstateRiskBand::Moderate => "Moderate",
            ProstateRiskBand::High => "High",
        }
    }
}

/// Discrete contribution to a single-domain score, kept for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: String,
    pub points: i32,
    pub notes: String,
}

impl ScoreComponent {
    pub(crate) fn new(factor: &str, points: i32, notes: impl Into<String>) -> Self {
        Self {
            factor: factor.to_string(),
            points,
            notes: notes.into(),
        }
    }
}
