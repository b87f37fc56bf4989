use super::super::domain::{CancerType, RiskLevel};
use super::rules::CategoryScores;
use serde::{Deserialize, Serialize};

/// Rounded share of the total per category, in percent.
///
/// Each share is rounded on its own, so the three need not add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProbabilities {
    pub breast: i64,
    pub lung: i64,
    pub prostate: i64,
}

impl CategoryProbabilities {
    pub fn get(&self, cancer: CancerType) -> i64 {
        match cancer {
            CancerType::Breast => self.breast,
            CancerType::Lung => self.lung,
            CancerType::Prostate => self.prostate,
        }
    }

    /// Highest share and its category, earlier categories winning ties.
    pub fn leader(&self) -> (CancerType, i64) {
        let mut leader = (CancerType::Breast, self.breast);
        for cancer in CancerType::ALL {
            let share = self.get(cancer);
            if share > leader.1 {
                leader = (cancer, share);
            }
        }
        leader
    }
}

/// Round half toward positive infinity, like JavaScript's `Math.round`.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Caller guarantees `total != 0`.
pub(crate) fn normalize(scores: &CategoryScores, total: i64) -> CategoryProbabilities {
    let share = |score: i64| round_half_up((score as f64 / total as f64) * 100.0);
    CategoryProbabilities {
        breast: share(scores.breast),
        lung: share(scores.lung),
        prostate: share(scores.prostate),
    }
}

pub(crate) fn risk_level(share: i64) -> RiskLevel {
    if share >= 60 {
        RiskLevel::High
    } else if share >= 40 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub(crate) const CONFIDENCE_CEILING: i64 = 95;

pub(crate) fn confidence(share: i64, jitter: u8) -> i64 {
    share.saturating_add(i64::from(jitter)).min(CONFIDENCE_CEILING)
}

pub(crate) fn recommendation(cancer: CancerType, level: RiskLevel) -> String {
    match level {
        RiskLevel::High => format!(
            "Immediate consultation recommended for {} assessment",
            cancer.label()
        ),
        RiskLevel::Medium | RiskLevel::Low => {
            format!("Follow-up screening recommended for {}", cancer.label())
        }
    }
}
