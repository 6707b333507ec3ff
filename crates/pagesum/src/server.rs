//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes summarization over the MCP protocol so AI assistants can condense
//! page text via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library that
//! the CLI commands use, and each `#[tool]` method delegates to core library
//! functions rather than implementing summarization itself.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use pagesum_core::extract::{Markdown, PlainText, TextSource};
use pagesum_core::{SummaryOptions, summarize, top_words};

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

/// Parameters for the `summarize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SummarizeTextParams {
    /// The page text to summarize.
    pub text: String,
    /// Whether to strip markdown formatting before summarizing.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Number of sentences in the summary (at most 10).
    pub target: Option<usize>,
    /// Size of the top-word table used for keyword scoring.
    pub top_words: Option<usize>,
}

/// Parameters for the `top_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TopWordsParams {
    /// The text to analyze.
    pub text: String,
    /// Number of words to return.
    pub count: Option<usize>,
    /// Whether to strip markdown formatting before counting.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing pagesum summarization to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct SummaryServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    options: SummaryOptions,
    max_input_bytes: Option<usize>,
}

impl Default for SummaryServer {
    fn default() -> Self {
        Self::new(SummaryOptions::default(), None)
    }
}

impl SummaryServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn extract(text: &str, strip_markdown: bool) -> String {
        if strip_markdown {
            Markdown::default().extract(text).content
        } else {
            PlainText::default().extract(text).content
        }
    }
}

#[tool_router]
impl SummaryServer {
    /// Create a server that summarizes with `options` and rejects text
    /// larger than `max_input_bytes`.
    pub fn new(options: SummaryOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            options,
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
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

    /// Summarize page text into its most representative sentences.
    #[tool(
        description = "Summarize page text by extracting its most representative sentences, returned in original order with a status and the top words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn summarize_text(
        &self,
        Parameters(params): Parameters<SummarizeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "summarize_text",
            strip_md = params.strip_markdown,
            target = ?params.target,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let mut options = self.options.clone();
        if let Some(target) = params.target {
            options.target_summary_length = target;
        }
        if let Some(count) = params.top_words {
            options.top_word_count = count;
        }

        let content = Self::extract(&params.text, params.strip_markdown);
        let report = summarize(&content, &options)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "summarize_text",
            status = %report.status,
            sentences = report.sentences.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the most frequent informative words.
    #[tool(
        description = "List the most frequent informative words in text (stopwords and words of three letters or fewer are ignored)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn top_words(
        &self,
        Parameters(params): Parameters<TopWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "top_words", count = ?params.count, "executing MCP tool");
        self.check_size(&params.text)?;

        let count = params.count.unwrap_or(self.options.top_word_count);
        let content = Self::extract(&params.text, params.strip_markdown);
        let words = top_words(&content, count, &self.options.stopwords);

        let json = serde_json::to_string_pretty(&words)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "top_words", returned = words.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for SummaryServer {
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
                "{} MCP server. Use summarize_text to condense page text into key sentences.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
