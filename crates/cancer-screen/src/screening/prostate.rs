use super::answers::ProstateAnswers;
use super::domain::{ProstateRiskBand, ScoreComponent};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const RISK_FLOOR: i32 = 5;
pub const RISK_CEILING: i32 = 95;

const HIGH_RISK_RECOMMENDATION: &str = "High risk prediction warrants immediate consultation with a urologist for further evaluation and potential biopsy consideration.";
const STANDARD_RECOMMENDATION: &str = "Interpret together with other diagnostic tests and a clinical examination by a qualified healthcare professional.";

/// Pick the points of the first threshold `value` reaches, else `fallback`.
fn tiered(value: f64, tiers: &[(f64, i32)], fallback: i32) -> i32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(fallback)
}

/// Prostate risk from age, PSA, PSA density, Gleason score, DRE finding and
/// family history. Every tiered factor contributes at least its base points.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProstateScorer;

impl ProstateScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, answers: &ProstateAnswers) -> ProstateAssessment {
        let age = answers.age.value();
        let psa = answers.psa.value();
        let density = answers.psa_density.value();
        let gleason = answers.gleason.value();

        let mut components = vec![
            ScoreComponent::new(
                "age",
                tiered(age, &[(70.0, 25), (60.0, 20), (50.0, 15)], 10),
                format!("age {age}"),
            ),
            ScoreComponent::new(
                "psa",
                tiered(psa, &[(10.0, 30), (4.0, 20), (2.5, 10)], 5),
                format!("PSA {psa} ng/mL"),
            ),
            ScoreComponent::new(
                "psa_density",
                tiered(density, &[(0.15, 15), (0.10, 10)], 5),
                format!("PSA density {density}"),
            ),
            ScoreComponent::new(
                "gleason",
                tiered(gleason, &[(8.0, 20), (7.0, 15)], 5),
                format!("Gleason score {gleason}"),
            ),
        ];

        if answers.dre.value() == 1.0 {
            components.push(ScoreComponent::new("dre", 15, "abnormal digital rectal exam"));
        }
        if answers.family_history.value() == 1.0 {
            components.push(ScoreComponent::new(
                "family_history",
                10,
                "family history of prostate cancer",
            ));
        }

        let raw_score: i32 = components.iter().map(|component| component.points).sum();
        let risk_percentage = raw_score.clamp(RISK_FLOOR, RISK_CEILING) as u8;
        let band = ProstateRiskBand::from_percentage(risk_percentage);
        let recommendation = match band {
            ProstateRiskBand::High => HIGH_RISK_RECOMMENDATION,
            ProstateRiskBand::Low | ProstateRiskBand::Moderate => STANDARD_RECOMMENDATION,
        };

        debug!(raw_score, risk_percentage, band = band.label(), "prostate score computed");

        ProstateAssessment {
            raw_score,
            risk_percentage,
            band,
            recommendation: recommendation.to_string(),
            components,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProstateAssessment {
    /// Unclamped sum of the components.
    pub raw_score: i32,
    /// `raw_score` clamped to 5..=95.
    pub risk_percentage: u8,
    pub band: ProstateRiskBand,
    pub recommendation: String,
    pub components: Vec<ScoreComponent>,
}
