use super::common::*;
use crate::screening::answers::{Measurement, ProstateAnswers};
use crate::screening::domain::ProstateRiskBand;
use crate::screening::prostate::ProstateScorer;
use serde_json::json;

#[test]
fn worst_case_inputs_clamp_to_ceiling() {
    let answers = prostate_case(75.0, 12.0, 0.2, 9.0, 1.0, 1.0);
    let assessment = ProstateScorer::new().score(&answers);

    assert_eq!(assessment.raw_score, 115);
    assert_eq!(assessment.risk_percentage, 95);
    assert_eq!(assessment.band, ProstateRiskBand::High);
    assert!(assessment.recommendation.contains("urologist"));
}

#[test]
fn empty_answers_score_base_points() {
    let assessment = ProstateScorer::new().score(&ProstateAnswers::default());

    assert_eq!(assessment.raw_score, 25);
    assert_eq!(assessment.risk_percentage, 25);
    assert_eq!(assessment.band, ProstateRiskBand::Moderate);
    assert_eq!(assessment.components.len(), 4);
    assert!(!assessment.recommendation.contains("urologist"));
}

#[test]
fn tier_thresholds_are_inclusive() {
    let answers = prostate_case(60.0, 4.0, 0.10, 7.0, 0.0, 0.0);
    let assessment = ProstateScorer::new().score(&answers);

    assert_eq!(points_for(&assessment.components, "age"), Some(20));
    assert_eq!(points_for(&assessment.components, "psa"), Some(20));
    assert_eq!(points_for(&assessment.components, "psa_density"), Some(10));
    assert_eq!(points_for(&assessment.components, "gleason"), Some(15));
    assert_eq!(assessment.raw_score, 65);
    assert_eq!(assessment.band, ProstateRiskBand::High);
}

#[test]
fn indicators_only_count_when_exactly_one() {
    let answers = prostate_case(45.0, 1.0, 0.05, 6.0, 0.5, 2.0);
    let assessment = ProstateScorer::new().score(&answers);

    assert_eq!(points_for(&assessment.components, "dre"), None);
    assert_eq!(points_for(&assessment.components, "family_history"), None);
    assert_eq!(assessment.raw_score, 25);
}

#[test]
fn string_indicators_are_parsed() {
    let answers: ProstateAnswers = serde_json::from_value(json!({
        "age": "52",
        "psa": "3.1",
        "dre": "1",
        "familyHistory": "0"
    }))
    .expect("answers deserialize");

    assert_eq!(answers.dre, Measurement(1.0));

    let assessment = ProstateScorer::new().score(&answers);
    assert_eq!(points_for(&assessment.components, "dre"), Some(15));
    assert_eq!(assessment.raw_score, 15 + 10 + 5 + 5 + 15);
}

#[test]
fn bands_follow_prostate_thresholds() {
    assert_eq!(ProstateRiskBand::from_percentage(19), ProstateRiskBand::Low);
    assert_eq!(ProstateRiskBand::from_percentage(20), ProstateRiskBand::Moderate);
    assert_eq!(ProstateRiskBand::from_percentage(49), ProstateRiskBand::Moderate);
    assert_eq!(ProstateRiskBand::from_percentage(50), ProstateRiskBand::High);
}

#[test]
fn percentage_never_leaves_clamp_range() {
    let scorer = ProstateScorer::new();
    for age in [0.0, 49.0, 55.0, 65.0, 80.0] {
        for psa in [0.0, 3.0, 5.0, 20.0] {
            let assessment = scorer.score(&prostate_case(age, psa, 0.2, 9.0, 1.0, 1.0));
            assert!((5..=95).contains(&assessment.risk_percentage));
        }
    }
}
