//! Core library for readscore.
//!
//! A pure readability engine plus the configuration and report types the
//! `readscore` CLI and MCP server are built on.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word segmentation
//! - [`syllables`] - Heuristic syllable estimation
//! - [`metrics`] - The five readability formulas
//! - [`classify`] - Difficulty tiers and grade bands
//! - [`markdown`] - Markdown to prose
//! - [`readability`] - Reports with quality gates
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! let metrics = readscore_core::analyze("The cat sat on the mat.").unwrap();
//! assert_eq!(metrics.word_count, 6);
//! assert_eq!(metrics.smog_index, 0.0);
//!
//! let ease = readscore_core::classify_ease(metrics.flesch_reading_ease);
//! println!("{} ({})", ease.tier, ease.approx_grade);
//!
//! assert!(readscore_core::analyze("   ").is_none());
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod markdown;
pub mod metrics;
pub mod readability;
pub mod syllables;
pub mod text;

pub use classify::{
    Classification, EaseClassification, EaseTier, GradeBand, GradeClassification, ScoreKind,
    classify, classify_ease, classify_grade,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use metrics::{Metrics, analyze, compute_metrics};
pub use readability::{
    DEFAULT_MAX_INPUT_BYTES, ReadabilityReport, ReportOptions, check_input_size,
    check_readability,
};
pub use syllables::{count_syllables, count_syllables_in};
pub use text::{TokenSet, tokenize};
