//! Qualitative labels for numeric scores.
//!
//! Two lookup tables: Flesch Reading Ease maps to a difficulty tier with an
//! approximate school grade, and Flesch-Kincaid grade maps to an education
//! band. Every `f64`, NaN included, lands in exactly one bucket.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Difficulty tier derived from Flesch Reading Ease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EaseTier {
    /// 90 and above.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// 80 to below 90.
    #[serde(rename = "Easy")]
    Easy,
    /// 70 to below 80.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// 60 to below 70.
    #[serde(rename = "Standard")]
    Standard,
    /// 50 to below 60.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// 30 to below 50.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Below 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl EaseTier {
    /// Every tier, easiest first.
    pub const ALL: [Self; 7] = [
        Self::VeryEasy,
        Self::Easy,
        Self::FairlyEasy,
        Self::Standard,
        Self::FairlyDifficult,
        Self::Difficult,
        Self::VeryDifficult,
    ];

    /// Lower bound of the tier, inclusive. `None` for the catch-all tier.
    pub const fn min_score(self) -> Option<f64> {
        match self {
            Self::VeryEasy => Some(90.0),
            Self::Easy => Some(80.0),
            Self::FairlyEasy => Some(70.0),
            Self::Standard => Some(60.0),
            Self::FairlyDifficult => Some(50.0),
            Self::Difficult => Some(30.0),
            Self::VeryDifficult => None,
        }
    }

    /// Human-readable tier name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }

    /// School level a reader typically needs for this tier.
    pub const fn approx_grade(self) -> &'static str {
        match self {
            Self::VeryEasy => "5th grade",
            Self::Easy => "6th grade",
            Self::FairlyEasy => "7th grade",
            Self::Standard => "8th-9th grade",
            Self::FairlyDifficult => "10th-12th grade",
            Self::Difficult => "College",
            Self::VeryDifficult => "College graduate",
        }
    }
}

impl std::fmt::Display for EaseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Education band derived from a Flesch-Kincaid grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GradeBand {
    /// Grade 6 and below.
    #[serde(rename = "Elementary")]
    Elementary,
    /// Above 6 through 10.
    #[serde(rename = "Middle School")]
    MiddleSchool,
    /// Above 10 through 12.
    #[serde(rename = "High School")]
    HighSchool,
    /// Above 12 through 16.
    #[serde(rename = "College")]
    College,
    /// Above 16.
    #[serde(rename = "Graduate")]
    Graduate,
}

impl GradeBand {
    /// Every band, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Elementary,
        Self::MiddleSchool,
        Self::HighSchool,
        Self::College,
        Self::Graduate,
    ];

    /// Upper bound of the band, inclusive. `None` for the catch-all band.
    pub const fn max_grade(self) -> Option<f64> {
        match self {
            Self::Elementary => Some(6.0),
            Self::MiddleSchool => Some(10.0),
            Self::HighSchool => Some(12.0),
            Self::College => Some(16.0),
            Self::Graduate => None,
        }
    }

    /// Human-readable band name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::Graduate => "Graduate",
        }
    }
}

impl std::fmt::Display for GradeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier and approximate grade for a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EaseClassification {
    /// Difficulty tier.
    pub tier: EaseTier,
    /// Approximate school level, e.g. "8th-9th grade".
    pub approx_grade: &'static str,
}

/// Education band for a Flesch-Kincaid grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GradeClassification {
    /// Education band.
    pub band: GradeBand,
}

/// Classify a Flesch Reading Ease score.
///
/// Tiers are tested from easiest down; a score exactly on a boundary belongs
/// to the easier tier.
pub fn classify_ease(score: f64) -> EaseClassification {
    let tier = EaseTier::ALL
        .into_iter()
        .find(|tier| tier.min_score().is_none_or(|min| score >= min))
        .unwrap_or(EaseTier::VeryDifficult);

    EaseClassification {
        tier,
        approx_grade: tier.approx_grade(),
    }
}

/// Classify a Flesch-Kincaid grade.
///
/// Bands are tested from lowest up; a grade exactly on a boundary belongs to
/// the lower band.
pub fn classify_grade(score: f64) -> GradeClassification {
    let band = GradeBand::ALL
        .into_iter()
        .find(|band| band.max_grade().is_none_or(|max| score <= max))
        .unwrap_or(GradeBand::Graduate);

    GradeClassification { band }
}

/// Which table a raw score is looked up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScoreKind {
    /// Flesch Reading Ease (0--100, higher is easier).
    #[default]
    Ease,
    /// Flesch-Kincaid grade level.
    Grade,
}

impl ScoreKind {
    /// Returns the kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Grade => "grade",
        }
    }
}

/// Either classification, depending on [`ScoreKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Classification {
    /// Result of [`classify_ease`].
    Ease(EaseClassification),
    /// Result of [`classify_grade`].
    Grade(GradeClassification),
}

impl Classification {
    /// Tier or band name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ease(c) => c.tier.label(),
            Self::Grade(c) => c.band.label(),
        }
    }
}

/// Classify `score` with the table selected by `kind`.
pub fn classify(kind: ScoreKind, score: f64) -> Classification {
    match kind {
        ScoreKind::Ease => Classification::Ease(classify_ease(score)),
        ScoreKind::Grade => Classification::Grade(classify_grade(score)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_tiers_at_boundaries() {
        let cases = [
            (100.0, EaseTier::VeryEasy),
            (90.0, EaseTier::VeryEasy),
            (89.99, EaseTier::Easy),
            (80.0, EaseTier::Easy),
            (70.0, EaseTier::FairlyEasy),
            (60.0, EaseTier::Standard),
            (50.0, EaseTier::FairlyDifficult),
            (49.9, EaseTier::Difficult),
            (30.0, EaseTier::Difficult),
            (29.999, EaseTier::VeryDifficult),
            (0.0, EaseTier::VeryDifficult),
            (-5.0, EaseTier::VeryDifficult),
        ];
        for (score, expected) in cases {
            assert_eq!(classify_ease(score).tier, expected, "score {score}");
        }
    }

    #[test]
    fn ease_carries_approx_grade() {
        let c = classify_ease(65.0);
        assert_eq!(c.tier.label(), "Standard");
        assert_eq!(c.approx_grade, "8th-9th grade");

        let c = classify_ease(10.0);
        assert_eq!(c.tier.label(), "Very Difficult");
        assert_eq!(c.approx_grade, "College graduate");
    }

    #[test]
    fn grade_bands_at_boundaries() {
        let cases = [
            (0.0, GradeBand::Elementary),
            (6.0, GradeBand::Elementary),
            (6.01, GradeBand::MiddleSchool),
            (10.0, GradeBand::MiddleSchool),
            (12.0, GradeBand::HighSchool),
            (16.0, GradeBand::College),
            (16.5, GradeBand::Graduate),
            (40.0, GradeBand::Graduate),
        ];
        for (score, expected) in cases {
            assert_eq!(classify_grade(score).band, expected, "grade {score}");
        }
    }

    #[test]
    fn nan_falls_to_last_bucket() {
        assert_eq!(classify_ease(f64::NAN).tier, EaseTier::VeryDifficult);
        assert_eq!(classify_grade(f64::NAN).band, GradeBand::Graduate);
    }

    #[test]
    fn infinities_are_classified() {
        assert_eq!(classify_ease(f64::INFINITY).tier, EaseTier::VeryEasy);
        assert_eq!(classify_ease(f64::NEG_INFINITY).tier, EaseTier::VeryDifficult);
        assert_eq!(classify_grade(f64::NEG_INFINITY).band, GradeBand::Elementary);
        assert_eq!(classify_grade(f64::INFINITY).band, GradeBand::Graduate);
    }

    #[test]
    fn serializes_as_labels() {
        let json = serde_json::to_value(classify_ease(75.0)).unwrap();
        assert_eq!(json["tier"], "Fairly Easy");
        assert_eq!(json["approx_grade"], "7th grade");

        let json = serde_json::to_value(classify_grade(11.0)).unwrap();
        assert_eq!(json["band"], "High School");
    }

    #[test]
    fn display_matches_label() {
        for tier in EaseTier::ALL {
            assert_eq!(tier.to_string(), tier.label());
        }
        for band in GradeBand::ALL {
            assert_eq!(band.to_string(), band.label());
        }
    }

    #[test]
    fn classify_dispatches_on_kind() {
        assert_eq!(classify(ScoreKind::Ease, 95.0).label(), "Very Easy");
        assert_eq!(classify(ScoreKind::Grade, 95.0).label(), "Graduate");
        assert_eq!(ScoreKind::default(), ScoreKind::Ease);
    }

    #[test]
    fn untagged_classification_serializes_inner_fields() {
        let json = serde_json::to_value(classify(ScoreKind::Grade, 3.0)).unwrap();
        assert_eq!(json["band"], "Elementary");
        assert!(json.get("Grade").is_none());
    }
}
