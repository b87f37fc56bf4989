use cancer_screen::prediction::PredictionRequest;
use cancer_screen::screening::{
    CancerType, FixedJitter, Gender, LungAnswers, LungRiskBand, LungScorer, ProstateAnswers,
    ProstateRiskBand, ProstateScorer, RiskLevel, TriageAnswers, TriageEngine, WholeNumber, YesNo,
};
use serde_json::json;

fn triage(value: serde_json::Value) -> TriageAnswers {
    serde_json::from_value(value).expect("triage answers")
}

#[test]
fn all_negative_form_yields_fixed_low_risk_result() {
    for (gender, prostate) in [("female", 0), ("other", 0), ("", 0)] {
        let answers = triage(json!({
            "age": "35",
            "gender": gender,
            "smoking": "no",
            "alcohol": "no",
            "familyHistory": "no",
            "lumps": "no",
            "chestPain": "no",
            "shortnessOfBreath": "no",
            "fatigue": "0",
            "weightLoss": "0",
            "painLevel": "0",
            "appetiteLoss": "0"
        }));

        let outcome = TriageEngine::new().assess(&answers);

        assert_eq!(outcome.detected_type, "Low Risk");
        assert_eq!(outcome.probabilities.breast, 10);
        assert_eq!(outcome.probabilities.lung, 10);
        assert_eq!(outcome.probabilities.prostate, prostate);
        assert_eq!(outcome.confidence, 85);
    }
}

#[test]
fn male_respondents_always_carry_a_signal() {
    let answers = triage(json!({ "gender": "male" }));
    let outcome = TriageEngine::new().assess_with(&answers, &mut FixedJitter(0));

    assert!(!outcome.is_low_risk_placeholder());
    assert_eq!(outcome.detected, Some(CancerType::Prostate));
    assert_eq!(outcome.probabilities.prostate, 86);
    assert_eq!(outcome.risk_level, RiskLevel::High);
}

#[test]
fn triage_scores_are_bounded_and_monotonic_in_answers() {
    let engine = TriageEngine::new();
    let base = TriageAnswers {
        age: WholeNumber(45),
        gender: Gender::Female,
        ..TriageAnswers::default()
    };
    let worse = TriageAnswers {
        smoking: YesNo::Yes,
        ..base.clone()
    };

    let before = engine.assess_with(&base, &mut FixedJitter(0));
    let after = engine.assess_with(&worse, &mut FixedJitter(0));

    assert!(after.scores.lung > before.scores.lung);
    for outcome in [before, after] {
        for cancer in CancerType::ALL {
            let share = outcome.probabilities.get(cancer);
            assert!((0..=100).contains(&share));
        }
        assert!(outcome.confidence <= 95);
    }
}

#[test]
fn lung_reference_case_is_high_risk() {
    let answers: LungAnswers = serde_json::from_value(json!({
        "age": "70",
        "status": "current",
        "years": "30",
        "coughingBlood": "yes",
        "persistentCough": "yes",
        "chestPain": "no",
        "shortnessOfBreath": "no",
        "wheezing": "no",
        "fatigue": "no",
        "weightLoss": "no",
        "recurrentInfections": "no",
        "coughSeverity": "1",
        "chestPainSeverity": "1",
        "breathingSeverity": "1"
    }))
    .expect("lung answers");

    let assessment = LungScorer::new().score(&answers);

    assert_eq!(assessment.risk_score, 85);
    assert_eq!(assessment.band, LungRiskBand::High);
}

#[test]
fn prostate_reference_case_clamps_to_ninety_five() {
    let answers: ProstateAnswers = serde_json::from_value(json!({
        "age": 75,
        "psa": 12,
        "psaDensity": 0.2,
        "gleason": 9,
        "dre": 1,
        "familyHistory": 1
    }))
    .expect("prostate answers");

    let assessment = ProstateScorer::new().score(&answers);

    assert_eq!(assessment.raw_score, 115);
    assert_eq!(assessment.risk_percentage, 95);
    assert_eq!(assessment.band, ProstateRiskBand::High);
}

#[test]
fn answers_convert_into_prediction_request() {
    let answers = ProstateAnswers {
        age: 66.0.into(),
        psa: 7.5.into(),
        ..ProstateAnswers::default()
    };

    let request = PredictionRequest::from_answers(&answers).unwrap();

    assert_eq!(request.get("psa"), Some(&json!(7.5)));
    assert_eq!(request.get("prostatevolume"), Some(&json!(0.0)));
    assert_eq!(request.get("psaDensity"), Some(&json!(0.0)));
}
