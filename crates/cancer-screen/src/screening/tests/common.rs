use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::screening::answers::{
    Gender, LungAnswers, ProgressionPattern, ProstateAnswers, SmokingHistory, SmokingStatus,
    SymptomProgression, TriageAnswers, WholeNumber, YesNo,
};
use crate::screening::domain::ScoreComponent;

/// Triage answers that push nothing into any tally.
pub(super) fn silent_triage(gender: Gender) -> TriageAnswers {
    TriageAnswers {
        age: WholeNumber(34),
        gender,
        smoking: YesNo::No,
        alcohol: YesNo::No,
        family_history: YesNo::No,
        lumps: YesNo::No,
        chest_pain: YesNo::No,
        shortness_of_breath: YesNo::No,
        fatigue: WholeNumber(0),
        weight_loss: WholeNumber(0),
        pain_level: WholeNumber(0),
        appetite_loss: WholeNumber(0),
    }
}

/// Heavy current smoker coughing blood; all other symptoms absent.
pub(super) fn heavy_smoker() -> LungAnswers {
    LungAnswers {
        age: WholeNumber(70),
        gender: Gender::Male,
        persistent_cough: YesNo::Yes,
        cough_severity: WholeNumber(1),
        chest_pain: YesNo::No,
        chest_pain_severity: WholeNumber(1),
        shortness_of_breath: YesNo::No,
        breathing_severity: WholeNumber(1),
        wheezing: YesNo::No,
        coughing_blood: YesNo::Yes,
        fatigue: YesNo::No,
        weight_loss: YesNo::No,
        recurrent_infections: YesNo::No,
        smoking: SmokingHistory {
            status: SmokingStatus::Current,
            years: WholeNumber(30),
            per_day: WholeNumber(20),
            years_since_quit: WholeNumber(0),
        },
        progression: SymptomProgression::default(),
    }
}

pub(super) fn never_smoker() -> LungAnswers {
    LungAnswers {
        age: WholeNumber(32),
        gender: Gender::Female,
        smoking: SmokingHistory {
            status: SmokingStatus::Never,
            ..SmokingHistory::default()
        },
        progression: SymptomProgression {
            pattern: ProgressionPattern::Stable,
            ..SymptomProgression::default()
        },
        ..LungAnswers::default()
    }
}

pub(super) fn prostate_case(
    age: f64,
    psa: f64,
    psa_density: f64,
    gleason: f64,
    dre: f64,
    family_history: f64,
) -> ProstateAnswers {
    ProstateAnswers {
        age: age.into(),
        psa: psa.into(),
        psa_density: psa_density.into(),
        gleason: gleason.into(),
        dre: dre.into(),
        family_history: family_history.into(),
        ..ProstateAnswers::default()
    }
}

pub(super) fn points_for(components: &[ScoreComponent], factor: &str) -> Option<i32> {
    components
        .iter()
        .find(|component| component.factor == factor)
        .map(|component| component.points)
}

pub(super) async fn read_json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}
