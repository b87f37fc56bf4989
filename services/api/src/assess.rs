use crate::infra::read_answers;
use cancer_screen::error::AppError;
use cancer_screen::screening::{
    FixedJitter, LungAnswers, LungAssessment, LungScorer, ProstateAnswers, ProstateAssessment,
    ProstateScorer, ScoreComponent, TriageAnswers, TriageEngine, TriageOutcome,
};
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding the questionnaire answers
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Fix the triage confidence jitter (0-9) for a reproducible result
    #[arg(long)]
    pub(crate) jitter: Option<u8>,
    /// Print the raw result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_triage(args: AssessArgs) -> Result<(), AppError> {
    let answers: TriageAnswers = read_answers(&args.input)?;
    let engine = TriageEngine::new();
    let outcome = match args.jitter {
        Some(value) => engine.assess_with(&answers, &mut FixedJitter(value)),
        None => engine.assess(&answers),
    };

    if args.json {
        return print_json(&outcome);
    }
    render_triage(&outcome);
    Ok(())
}

pub(crate) fn run_lung(args: AssessArgs) -> Result<(), AppError> {
    let answers: LungAnswers = read_answers(&args.input)?;
    let assessment = LungScorer::new().score(&answers);

    if args.json {
        return print_json(&assessment);
    }
    render_lung(&assessment);
    Ok(())
}

pub(crate) fn run_prostate(args: AssessArgs) -> Result<(), AppError> {
    let answers: ProstateAnswers = read_answers(&args.input)?;
    let assessment = ProstateScorer::new().score(&answers);

    if args.json {
        return print_json(&assessment);
    }
    render_prostate(&assessment);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_triage(outcome: &TriageOutcome) {
    println!("Cancer auto-detection ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!("Stage 1: {}", outcome.stage1);

    if outcome.is_low_risk_placeholder() {
        println!("Result: {}", outcome.detected_type);
    } else {
        println!(
            "Result: {} ({} risk, {}% confidence)",
            outcome.detected_type,
            outcome.risk_level.label(),
            outcome.confidence
        );
    }
    println!("Stage 2: {}", outcome.stage2);

    println!("\nProbabilities");
    println!("- Breast: {}%", outcome.probabilities.breast);
    println!("- Lung: {}%", outcome.probabilities.lung);
    println!("- Prostate: {}%", outcome.probabilities.prostate);

    println!(
        "\nRaw scores: breast {} | lung {} | prostate {}",
        outcome.scores.breast, outcome.scores.lung, outcome.scores.prostate
    );
    println!("Recommendation: {}", outcome.recommendation);
}

pub(crate) fn render_lung(assessment: &LungAssessment) {
    println!("Lung cancer risk assessment");
    println!(
        "Risk score: {}/100 ({})",
        assessment.risk_score, assessment.risk_label
    );
    render_components(&assessment.components);
    println!("\nRecommendation: {}", assessment.recommendation);
}

pub(crate) fn render_prostate(assessment: &ProstateAssessment) {
    println!("Prostate cancer risk assessment");
    println!(
        "Risk: {}% ({} risk, raw score {})",
        assessment.risk_percentage,
        assessment.band.label(),
        assessment.raw_score
    );
    render_components(&assessment.components);
    println!("\nRecommendation: {}", assessment.recommendation);
}

fn render_components(components: &[ScoreComponent]) {
    if components.is_empty() {
        println!("\nContributing factors: none");
        return;
    }
    println!("\nContributing factors");
    for component in components {
        println!(
            "- {} (+{}): {}",
            component.factor, component.points, component.notes
        );
    }
}
