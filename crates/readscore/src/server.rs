//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes readability scoring over stdio so editors and assistants can score
//! text without shelling out to the CLI. Every tool delegates to
//! `readscore-core`; nothing here computes a score itself.
//!
//! # Tools
//!
//! - `get_info` - package name, version, and description
//! - `score_text` - full readability report for a piece of text
//! - `classify_score` - tier or band for a raw score

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readscore_core::{ReportOptions, ScoreKind, check_input_size, classify};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreTextParams {
    /// The text to score.
    pub text: String,
    /// Strip markdown formatting before scoring. Defaults to the server configuration.
    pub strip_markdown: Option<bool>,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
    /// Minimum acceptable Flesch Reading Ease.
    pub min_ease: Option<f64>,
}

/// Parameters for the `classify_score` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyScoreParams {
    /// The raw score.
    pub score: f64,
    /// Scale of the score: "ease" (Flesch Reading Ease) or "grade" (Flesch-Kincaid).
    #[serde(default)]
    pub kind: ScoreKind,
}

/// MCP server exposing readability scoring.
#[derive(Clone)]
pub struct ReadscoreServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    defaults: ReportOptions,
}

impl Default for ReadscoreServer {
    fn default() -> Self {
        Self::new(
            Some(readscore_core::DEFAULT_MAX_INPUT_BYTES),
            ReportOptions::default(),
        )
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ReadscoreServer {
    /// Create a server with an input size limit and default scoring options.
    ///
    /// Per-call parameters override `defaults`.
    pub fn new(max_input_bytes: Option<usize>, defaults: ReportOptions) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            defaults,
        }
    }

    /// Get project information.
    #[tool(description = "Get readscore name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text with all five readability formulas.
    #[tool(
        description = "Score the readability of text. Returns counts, averages, Flesch Reading Ease, Flesch-Kincaid grade, Gunning Fog, Coleman-Liau, SMOG, difficulty tier, grade band, and optional pass/fail against max_grade and min_ease."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn score_text(
        &self,
        Parameters(params): Parameters<ScoreTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "score_text",
            strip_md = ?params.strip_markdown,
            "executing MCP tool"
        );

        check_input_size(&params.text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let options = ReportOptions {
            strip_markdown: params.strip_markdown.unwrap_or(self.defaults.strip_markdown),
            max_grade: params.max_grade.or(self.defaults.max_grade),
            min_ease: params.min_ease.or(self.defaults.min_ease),
        };

        let report = readscore_core::check_readability(&params.text, &options)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = to_json(&report)?;

        tracing::info!(
            tool = "score_text",
            grade = report.metrics.flesch_kincaid_grade,
            ease = report.metrics.flesch_reading_ease,
            passes = report.passes,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Classify a raw score.
    #[tool(
        description = "Classify a raw score. kind=\"ease\" maps Flesch Reading Ease to a difficulty tier and approximate grade; kind=\"grade\" maps a Flesch-Kincaid grade to an education band."
    )]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn classify_score(
        &self,
        Parameters(params): Parameters<ClassifyScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_score", kind = params.kind.as_str(), "executing MCP tool");

        let classification = classify(params.kind, params.score);
        let json = to_json(&classification)?;

        tracing::info!(
            tool = "classify_score",
            label = classification.label(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ReadscoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_text to measure how hard prose is to read \
                 and classify_score to interpret a raw score.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
