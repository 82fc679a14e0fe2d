//! Score command: all five readability formulas for a file or stdin.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::config::Config;
use readscore_core::{ReadabilityReport, ReportOptions, check_readability};

use super::{read_input_file, read_input_stream};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// File to score (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Maximum acceptable Flesch-Kincaid grade.
    #[arg(long, allow_negative_numbers = true)]
    pub max_grade: Option<f64>,

    /// Minimum acceptable Flesch Reading Ease.
    #[arg(long, allow_negative_numbers = true)]
    pub min_ease: Option<f64>,

    /// Strip markdown before scoring (implied for .md and .markdown files).
    #[arg(long)]
    pub strip_markdown: bool,
}

impl ScoreArgs {
    /// The input file, or `None` for stdin.
    fn input_path(&self) -> Option<&Utf8Path> {
        self.file.as_deref().filter(|p| p.as_str() != "-")
    }

    /// Flags win over config; a markdown extension always strips.
    fn report_options(&self, config: &Config) -> ReportOptions {
        let by_extension = self
            .input_path()
            .and_then(Utf8Path::extension)
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown")
            });
        ReportOptions {
            strip_markdown: self.strip_markdown || config.strip_markdown || by_extension,
            max_grade: self.max_grade.or(config.max_grade),
            min_ease: self.min_ease.or(config.min_ease),
        }
    }
}

/// Score a file (or stdin) and check it against the configured gates.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = args.report_options(config);
    debug!(?options, "executing score command");

    let source = args.input_path().map_or_else(|| "<stdin>".to_string(), ToString::to_string);
    let content = match args.input_path() {
        Some(path) => read_input_file(path, config.input_limit())?,
        None => read_input_stream(std::io::stdin().lock(), config.input_limit())?,
    };

    let report = check_readability(&content, &options)
        .with_context(|| format!("failed to score {source}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&source, &report);

    if report.over_max_grade {
        bail!(
            "{source} has grade {:.1} (max: {:.1}). Shorten sentences or use simpler words.",
            report.metrics.flesch_kincaid_grade,
            report.max_grade.unwrap_or_default(),
        );
    }
    if report.under_min_ease {
        bail!(
            "{source} has reading ease {:.1} (min: {:.1}). Shorten sentences or use simpler words.",
            report.metrics.flesch_reading_ease,
            report.min_ease.unwrap_or_default(),
        );
    }
    if report.max_grade.is_some() || report.min_ease.is_some() {
        println!("{} {source} meets readability targets", "PASS:".green());
    }

    Ok(())
}

fn print_report(source: &str, report: &ReadabilityReport) {
    let m = &report.metrics;

    println!("{}", source.bold());
    println!();
    println!("{}", "Counts".bold().underline());
    print_row("Sentences", m.sentence_count);
    print_row("Words", m.word_count);
    print_row("Letters", m.character_count);
    print_row("Syllables", m.syllable_count);
    print_row("Complex words", m.complex_word_count);

    println!();
    println!("{}", "Averages".bold().underline());
    print_row("Words per sentence", format!("{:.2}", m.average_words_per_sentence));
    print_row("Syllables per word", format!("{:.2}", m.average_syllables_per_word));

    println!();
    println!("{}", "Scores".bold().underline());
    print_row(
        "Flesch Reading Ease",
        format!(
            "{:.1}  {} ({})",
            m.flesch_reading_ease,
            report.ease.tier.cyan(),
            report.ease.approx_grade,
        ),
    );
    print_row(
        "Flesch-Kincaid Grade",
        format!("{:.1}  {}", m.flesch_kincaid_grade, report.grade_band.band.cyan()),
    );
    print_row("Gunning Fog", format!("{:.1}", m.gunning_fog_index));
    print_row("Coleman-Liau", format!("{:.1}", m.coleman_liau_index));
    print_row("SMOG", format!("{:.1}", m.smog_index));
}

fn print_row<T: std::fmt::Display>(label: &str, value: T) {
    println!("  {:<22}{}", format!("{label}:").dimmed(), value);
}
