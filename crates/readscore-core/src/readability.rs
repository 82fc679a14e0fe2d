//! Readability reports with quality gates.
//!
//! Wraps [`metrics::analyze`] for callers that want one serializable record:
//! every count and score, both classifications, and pass/fail against
//! optional thresholds. Degenerate input becomes
//! [`AnalysisError::EmptyInput`] here instead of `None`.

use schemars::JsonSchema;
use serde::Serialize;

use crate::classify::{self, EaseClassification, GradeClassification};
use crate::error::{AnalysisError, AnalysisResult};
use crate::markdown;
use crate::metrics::{self, Metrics};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// How to prepare the text and which gates to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportOptions {
    /// Reduce markdown to prose before scoring.
    pub strip_markdown: bool,
    /// Fail when the Flesch-Kincaid grade is above this.
    pub max_grade: Option<f64>,
    /// Fail when Flesch Reading Ease is below this.
    pub min_ease: Option<f64>,
}

/// Scores, classifications, and gate results for one document.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Counts, averages, and the five scores.
    #[serde(flatten)]
    pub metrics: Metrics,
    /// Difficulty tier for the reading-ease score.
    pub ease: EaseClassification,
    /// Education band for the grade-level score.
    pub grade_band: GradeClassification,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Minimum acceptable reading ease (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ease: Option<f64>,
    /// Whether the grade exceeds `max_grade`.
    pub over_max_grade: bool,
    /// Whether the reading ease is below `min_ease`.
    pub under_min_ease: bool,
    /// Whether every configured gate passed.
    pub passes: bool,
}

/// Score `text` and evaluate it against the gates in `options`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    options: &ReportOptions,
) -> AnalysisResult<ReadabilityReport> {
    let stripped;
    let prose = if options.strip_markdown {
        stripped = markdown::strip_to_prose(text);
        stripped.as_str()
    } else {
        text
    };

    let metrics = metrics::analyze(prose).ok_or(AnalysisError::EmptyInput)?;

    let over_max_grade = options
        .max_grade
        .is_some_and(|max| metrics.flesch_kincaid_grade > max);
    let under_min_ease = options
        .min_ease
        .is_some_and(|min| metrics.flesch_reading_ease < min);

    Ok(ReadabilityReport {
        ease: classify::classify_ease(metrics.flesch_reading_ease),
        grade_band: classify::classify_grade(metrics.flesch_kincaid_grade),
        metrics,
        max_grade: options.max_grade,
        min_ease: options.min_ease,
        over_max_grade,
        under_min_ease,
        passes: !over_max_grade && !under_min_ease,
    })
}

/// Reject input larger than `limit` bytes. `None` means unlimited.
pub const fn check_input_size(text: &str, limit: Option<usize>) -> AnalysisResult<()> {
    match limit {
        Some(limit) if text.len() > limit => Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{EaseTier, GradeBand};

    const EASY: &str = "The cat sat on the mat. The dog ran fast.";

    const DENSE: &str = "The implementation of the comprehensive organizational restructuring \
                         initiative necessitated the establishment of interdepartmental \
                         communication protocols that facilitated the dissemination of \
                         procedural documentation.";

    #[test]
    fn basic_report() {
        let report = check_readability(EASY, &ReportOptions::default()).unwrap();
        assert_eq!(report.metrics.sentence_count, 2);
        assert_eq!(report.ease.tier, EaseTier::VeryEasy);
        assert_eq!(report.grade_band.band, GradeBand::Elementary);
        assert!(report.passes);
        assert!(!report.over_max_grade);
        assert!(!report.under_min_ease);
    }

    #[test]
    fn max_grade_gate() {
        let options = ReportOptions {
            max_grade: Some(5.0),
            ..ReportOptions::default()
        };
        let report = check_readability(DENSE, &options).unwrap();
        assert!(report.over_max_grade);
        assert!(!report.passes);
        assert_eq!(report.max_grade, Some(5.0));
    }

    #[test]
    fn min_ease_gate() {
        let options = ReportOptions {
            min_ease: Some(60.0),
            ..ReportOptions::default()
        };
        assert!(check_readability(DENSE, &options).unwrap().under_min_ease);
        assert!(check_readability(EASY, &options).unwrap().passes);
    }

    #[test]
    fn empty_input_errors() {
        let result = check_readability("", &ReportOptions::default());
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn markdown_stripping() {
        let md = "# Title\n\nThe cat sat on the mat. The dog ran fast.\n\n```rust\nlet x = 1;\n```";
        let options = ReportOptions {
            strip_markdown: true,
            ..ReportOptions::default()
        };
        let report = check_readability(md, &options).unwrap();
        assert_eq!(report.metrics.word_count, 10);
        assert_eq!(report.metrics.sentence_count, 2);
    }

    #[test]
    fn markdown_with_only_code_is_empty() {
        let options = ReportOptions {
            strip_markdown: true,
            ..ReportOptions::default()
        };
        let result = check_readability("```\nfn main() {}\n```\n", &options);
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn report_json_is_flat() {
        let options = ReportOptions {
            max_grade: Some(8.0),
            ..ReportOptions::default()
        };
        let report = check_readability(EASY, &options).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["word_count"], 10);
        assert_eq!(json["ease"]["tier"], "Very Easy");
        assert_eq!(json["grade_band"]["band"], "Elementary");
        assert_eq!(json["max_grade"], 8.0);
        assert!(json.get("min_ease").is_none());
        assert_eq!(json["passes"], true);
    }

    #[test]
    fn input_size_limit() {
        assert!(check_input_size("hello", None).is_ok());
        assert!(check_input_size("hello", Some(5)).is_ok());
        assert_eq!(
            check_input_size("hello", Some(4)),
            Err(AnalysisError::InputTooLarge { size: 5, limit: 4 })
        );
    }
}
