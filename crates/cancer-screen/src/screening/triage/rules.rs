use super::super::answers::{Gender, TriageAnswers, WholeNumber};
use super::super::domain::CancerType;
use serde::{Deserialize, Serialize};

/// Raw per-category tallies before normalization. No upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub breast: i64,
    pub lung: i64,
    pub prostate: i64,
}

impl CategoryScores {
    pub fn total(&self) -> i64 {
        self.breast
            .saturating_add(self.lung)
            .saturating_add(self.prostate)
    }

    pub fn get(&self, cancer: CancerType) -> i64 {
        match cancer {
            CancerType::Breast => self.breast,
            CancerType::Lung => self.lung,
            CancerType::Prostate => self.prostate,
        }
    }

    fn add(&mut self, breast: i64, lung: i64, prostate: i64) {
        self.breast = self.breast.saturating_add(breast);
        self.lung = self.lung.saturating_add(lung);
        self.prostate = self.prostate.saturating_add(prostate);
    }
}

fn weighted(severity: WholeNumber, coefficient: i64) -> i64 {
    severity.value().saturating_mul(coefficient)
}

/// Stage one of the auto-detection pipeline: build the three tallies.
///
/// Rule order matters. The male branch assigns the breast tally instead of
/// adding to it, so an age contribution made before it is discarded and
/// later symptom rules build on the residual 5.
pub(crate) fn accumulate(answers: &TriageAnswers) -> CategoryScores {
    let mut scores = CategoryScores::default();

    if answers.age.value() >= 50 {
        scores.add(15, 15, 20);
    }

    match answers.gender {
        Gender::Female => {
            scores.breast += 30;
            scores.prostate = 0;
        }
        Gender::Male => {
            scores.prostate += 30;
            scores.breast = 5;
        }
        Gender::Other | Gender::Unspecified => {}
    }

    if answers.smoking.is_yes() {
        scores.add(5, 35, 5);
    }
    if answers.alcohol.is_yes() {
        scores.add(10, 10, 5);
    }
    if answers.family_history.is_yes() {
        scores.add(15, 15, 15);
    }
    if answers.lumps.is_yes() {
        scores.add(25, 0, 10);
    }
    if answers.chest_pain.is_yes() {
        scores.add(5, 20, 0);
    }
    if answers.shortness_of_breath.is_yes() {
        scores.add(0, 25, 0);
    }

    scores.add(
        weighted(answers.fatigue, 2)
            .saturating_add(weighted(answers.weight_loss, 2))
            .saturating_add(weighted(answers.pain_level, 2)),
        weighted(answers.fatigue, 3)
            .saturating_add(weighted(answers.weight_loss, 3))
            .saturating_add(weighted(answers.appetite_loss, 3)),
        weighted(answers.pain_level, 3).saturating_add(weighted(answers.appetite_loss, 2)),
    );

    // Prostate is never a candidate for female respondents.
    if answers.gender == Gender::Female {
        scores.prostate = 0;
    }

    scores
}
