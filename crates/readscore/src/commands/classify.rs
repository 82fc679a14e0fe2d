//! Classify command: map a raw score to its tier or band.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::{Classification, ScoreKind, classify};

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// The score to classify.
    #[arg(allow_negative_numbers = true)]
    pub score: f64,

    /// Which scale the score is on.
    #[arg(long, value_enum, default_value_t)]
    pub kind: ScoreKind,
}

#[derive(Serialize)]
struct ClassifyOutput {
    kind: ScoreKind,
    score: f64,
    #[serde(flatten)]
    classification: Classification,
}

/// Classify a Flesch Reading Ease or Flesch-Kincaid grade score.
#[instrument(name = "cmd_classify", skip_all, fields(score = args.score))]
pub fn cmd_classify(args: ClassifyArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(kind = args.kind.as_str(), "executing classify command");

    let output = ClassifyOutput {
        kind: args.kind,
        score: args.score,
        classification: classify(args.kind, args.score),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &output.classification {
        Classification::Ease(ease) => println!(
            "{:.1} {} ({})",
            output.score,
            ease.tier.bold(),
            ease.approx_grade.dimmed(),
        ),
        Classification::Grade(grade) => {
            println!("{:.1} {}", output.score, grade.band.bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_is_flat() {
        let output = ClassifyOutput {
            kind: ScoreKind::Ease,
            score: 65.0,
            classification: classify(ScoreKind::Ease, 65.0),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "ease");
        assert_eq!(json["tier"], "Standard");
        assert_eq!(json["approx_grade"], "8th-9th grade");
    }

    #[test]
    fn grade_json() {
        let output = ClassifyOutput {
            kind: ScoreKind::Grade,
            score: 11.0,
            classification: classify(ScoreKind::Grade, 11.0),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "grade");
        assert_eq!(json["band"], "High School");
    }

    #[test]
    fn command_succeeds() {
        let args = ClassifyArgs {
            score: -20.0,
            kind: ScoreKind::Ease,
        };
        assert!(cmd_classify(args, false).is_ok());
    }
}
