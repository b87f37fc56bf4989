use super::common::*;
use crate::screening::answers::{Gender, TriageAnswers, WholeNumber, YesNo};
use crate::screening::domain::{CancerType, RiskLevel};
use crate::screening::jitter::FixedJitter;
use crate::screening::triage::{
    CategoryProbabilities, CategoryScores, TriageEngine, LOW_RISK_CONFIDENCE, LOW_RISK_LABEL,
    NO_SPECIALIZED_MODEL, STAGE_ONE_MODEL,
};
use serde_json::json;

#[test]
fn silent_answers_return_low_risk_placeholder() {
    let outcome =
        TriageEngine::new().assess_with(&silent_triage(Gender::Other), &mut FixedJitter(9));

    assert!(outcome.is_low_risk_placeholder());
    assert_eq!(outcome.detected_type, LOW_RISK_LABEL);
    assert_eq!(
        outcome.probabilities,
        CategoryProbabilities {
            breast: 10,
            lung: 10,
            prostate: 0,
        }
    );
    assert_eq!(outcome.confidence, LOW_RISK_CONFIDENCE);
    assert_eq!(outcome.risk_level, RiskLevel::Low);
    assert_eq!(outcome.stage1, STAGE_ONE_MODEL);
    assert_eq!(outcome.stage2, NO_SPECIALIZED_MODEL);
    assert_eq!(outcome.scores.total(), 0);
}

#[test]
fn empty_payload_is_low_risk() {
    let answers: TriageAnswers = serde_json::from_value(json!({})).expect("empty answers");
    let outcome = TriageEngine::new().assess(&answers);

    assert!(outcome.is_low_risk_placeholder());
    assert_eq!(outcome.confidence, 85);
}

#[test]
fn female_respondents_never_score_prostate() {
    let answers = TriageAnswers {
        age: WholeNumber(67),
        gender: Gender::Female,
        smoking: YesNo::Yes,
        alcohol: YesNo::Yes,
        family_history: YesNo::Yes,
        lumps: YesNo::Yes,
        chest_pain: YesNo::Yes,
        shortness_of_breath: YesNo::Yes,
        fatigue: WholeNumber(4),
        weight_loss: WholeNumber(4),
        pain_level: WholeNumber(4),
        appetite_loss: WholeNumber(4),
    };

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));

    assert_eq!(outcome.scores.prostate, 0);
    assert_eq!(outcome.probabilities.prostate, 0);
    assert_ne!(outcome.detected, Some(CancerType::Prostate));
}

#[test]
fn male_branch_resets_breast_to_residual() {
    let mut answers = silent_triage(Gender::Male);
    answers.age = WholeNumber(60);

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));
    assert_eq!(
        outcome.scores,
        CategoryScores {
            breast: 5,
            lung: 15,
            prostate: 50,
        }
    );

    let mut answers = silent_triage(Gender::Male);
    answers.lumps = YesNo::Yes;
    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));
    assert_eq!(outcome.scores.breast, 30);
    assert_eq!(outcome.scores.prostate, 40);
}

#[test]
fn shares_are_rounded_independently() {
    let mut answers = silent_triage(Gender::Other);
    answers.smoking = YesNo::Yes;
    answers.alcohol = YesNo::Yes;

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));

    assert_eq!(
        outcome.scores,
        CategoryScores {
            breast: 15,
            lung: 45,
            prostate: 10,
        }
    );
    assert_eq!(
        outcome.probabilities,
        CategoryProbabilities {
            breast: 21,
            lung: 64,
            prostate: 14,
        }
    );
    assert_eq!(outcome.detected, Some(CancerType::Lung));
    assert_eq!(outcome.risk_level, RiskLevel::High);
    assert_eq!(outcome.stage2, "Lung Cancer Neural Network");
    assert_eq!(
        outcome.recommendation,
        "Immediate consultation recommended for Lung Cancer assessment"
    );
}

#[test]
fn ties_go_to_breast_first() {
    let mut answers = silent_triage(Gender::Other);
    answers.alcohol = YesNo::Yes;

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));

    assert_eq!(outcome.probabilities.breast, 40);
    assert_eq!(outcome.probabilities.lung, 40);
    assert_eq!(outcome.detected, Some(CancerType::Breast));
    assert_eq!(outcome.detected_type, "Breast Cancer");
    assert_eq!(outcome.risk_level, RiskLevel::Medium);
    assert_eq!(
        outcome.recommendation,
        "Follow-up screening recommended for Breast Cancer"
    );
}

#[test]
fn older_male_smoker_leads_with_prostate() {
    let mut answers = silent_triage(Gender::Male);
    answers.age = WholeNumber(60);
    answers.smoking = YesNo::Yes;

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(3));

    assert_eq!(
        outcome.probabilities,
        CategoryProbabilities {
            breast: 9,
            lung: 43,
            prostate: 48,
        }
    );
    assert_eq!(outcome.detected, Some(CancerType::Prostate));
    assert_eq!(outcome.risk_level, RiskLevel::Medium);
    assert_eq!(outcome.confidence, 51);
    assert_eq!(outcome.stage2, "Prostate Cancer Random Forest");
}

#[test]
fn confidence_adds_jitter_to_leading_share() {
    let mut answers = silent_triage(Gender::Female);
    answers.age = WholeNumber(55);
    answers.lumps = YesNo::Yes;
    answers.family_history = YesNo::Yes;

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(9));

    assert_eq!(outcome.scores.breast, 85);
    assert_eq!(outcome.scores.lung, 30);
    assert_eq!(outcome.probabilities.breast, 74);
    assert_eq!(outcome.probabilities.lung, 26);
    assert_eq!(outcome.risk_level, RiskLevel::High);
    assert_eq!(outcome.confidence, 83);
}

#[test]
fn unparsable_severities_contribute_nothing() {
    let garbled: TriageAnswers = serde_json::from_value(json!({
        "age": "40",
        "gender": "male",
        "chestPain": "yes",
        "fatigue": "very",
        "weightLoss": "",
        "painLevel": null,
        "appetiteLoss": "??"
    }))
    .expect("answers deserialize");

    let mut zeroed = silent_triage(Gender::Male);
    zeroed.age = WholeNumber(40);
    zeroed.chest_pain = YesNo::Yes;

    let engine = TriageEngine::new();
    assert_eq!(
        engine.assess_with(&garbled, &mut FixedJitter(2)),
        engine.assess_with(&zeroed, &mut FixedJitter(2))
    );
}

#[test]
fn severities_scale_by_category_coefficient() {
    let mut answers = silent_triage(Gender::Other);
    answers.fatigue = WholeNumber(2);
    answers.appetite_loss = WholeNumber(1);

    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));

    assert_eq!(
        outcome.scores,
        CategoryScores {
            breast: 4,
            lung: 9,
            prostate: 2,
        }
    );
}

#[test]
fn fixed_jitter_makes_assessment_repeatable() {
    let mut answers = silent_triage(Gender::Female);
    answers.chest_pain = YesNo::Yes;
    answers.fatigue = WholeNumber(3);

    let engine = TriageEngine::new();
    let first = engine.assess_with(&answers, &mut FixedJitter(5));
    let second = engine.assess_with(&answers, &mut FixedJitter(5));

    assert_eq!(first, second);
}

#[test]
fn random_confidence_stays_within_bounds() {
    let mut answers = silent_triage(Gender::Other);
    answers.shortness_of_breath = YesNo::Yes;
    answers.chest_pain = YesNo::Yes;

    let engine = TriageEngine::new();
    for _ in 0..50 {
        let outcome = engine.assess(&answers);
        let share = outcome.probabilities.lung;
        assert!(outcome.confidence >= share);
        assert!(outcome.confidence <= 95);
    }
}
