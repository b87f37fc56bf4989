use super::answers::{LungAnswers, ProgressionPattern, SmokingStatus, YesNo};
use super::domain::{LungRiskBand, ScoreComponent};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SCORE_CEILING: i32 = 100;

fn symptom_weights(answers: &LungAnswers) -> [(&'static str, YesNo, i32); 6] {
    [
        ("coughing_blood", answers.coughing_blood, 20),
        ("persistent_cough", answers.persistent_cough, 10),
        ("chest_pain", answers.chest_pain, 8),
        ("shortness_of_breath", answers.shortness_of_breath, 8),
        ("weight_loss", answers.weight_loss, 7),
        ("recurrent_infections", answers.recurrent_infections, 6),
    ]
}

/// Additive lung risk score over demographics, smoking history, symptoms
/// and how fast they are progressing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LungScorer;

impl LungScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, answers: &LungAnswers) -> LungAssessment {
        let mut components = Vec::new();

        let age = answers.age.value();
        let age_points = if age >= 65 {
            15
        } else if age >= 50 {
            10
        } else if age >= 40 {
            5
        } else {
            0
        };
        if age_points > 0 {
            components.push(ScoreComponent::new(
                "age",
                age_points,
                format!("age {age} in elevated bracket"),
            ));
        }

        let status_points = match answers.smoking.status {
            SmokingStatus::Current => 25,
            SmokingStatus::Former => 15,
            SmokingStatus::Never | SmokingStatus::Unknown => 0,
        };
        if status_points > 0 {
            components.push(ScoreComponent::new(
                "smoking_status",
                status_points,
                format!("{:?} smoker", answers.smoking.status).to_lowercase(),
            ));
        }

        let years = answers.smoking.years.value();
        let years_points = if years >= 30 {
            15
        } else if years >= 20 {
            10
        } else if years >= 10 {
            5
        } else {
            0
        };
        if years_points > 0 {
            components.push(ScoreComponent::new(
                "smoking_years",
                years_points,
                format!("{years} years of smoking"),
            ));
        }

        for (factor, answer, points) in symptom_weights(answers) {
            if answer.is_yes() {
                components.push(ScoreComponent::new(factor, points, "reported"));
            }
        }

        let severity_points = match answers.cough_severity.value() {
            4 => 5,
            3 => 3,
            _ => 0,
        };
        if severity_points > 0 {
            components.push(ScoreComponent::new(
                "cough_severity",
                severity_points,
                format!("cough severity {}", answers.cough_severity.value()),
            ));
        }

        let progression_points = match answers.progression.pattern {
            ProgressionPattern::Rapid => 10,
            ProgressionPattern::Gradual => 5,
            _ => 0,
        };
        if progression_points > 0 {
            components.push(ScoreComponent::new(
                "progression",
                progression_points,
                format!("{:?} worsening", answers.progression.pattern).to_lowercase(),
            ));
        }

        let total: i32 = components.iter().map(|component| component.points).sum();
        let risk_score = total.min(SCORE_CEILING) as u8;
        let band = LungRiskBand::from_score(risk_score);

        debug!(risk_score, band = band.label(), "lung score computed");

        LungAssessment {
            risk_score,
            band,
            risk_label: band.label().to_string(),
            recommendation: recommendation(band).to_string(),
            components,
        }
    }
}

fn recommendation(band: LungRiskBand) -> &'static str {
    match band {
        LungRiskBand::High => {
            "Consult an oncologist or pulmonologist promptly; imaging studies (CT, PET) or biopsy may be needed for a definitive diagnosis."
        }
        LungRiskBand::Moderate => {
            "Discuss these results with your healthcare provider; additional imaging may be recommended."
        }
        LungRiskBand::LowModerate => {
            "Monitor symptoms and report new or worsening conditions to your healthcare team."
        }
        LungRiskBand::Low => {
            "Maintain routine check-ups; smoking cessation and clean air further reduce risk."
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LungAssessment {
    /// Sum of all components, capped at 100.
    pub risk_score: u8,
    pub band: LungRiskBand,
    pub risk_label: String,
    pub recommendation: String,
    pub components: Vec<ScoreComponent>,
}
