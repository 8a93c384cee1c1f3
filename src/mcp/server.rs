//! FLX MCP Server Implementation
//!
//! Implements the MCP server with all FLX tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::label::ScanResult;
use crate::tools::extract;
use crate::tools::status::StatusTracker;

/// FLX MCP Service
#[derive(Clone)]
pub struct FlxService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<FlxService>,
}

impl FlxService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for FlxService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tool Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExtractNutrientsParams {
    /// The scan result produced by the host's OCR pipeline
    pub scan: ScanResult,
    /// Column to extract, 1 or 2; defaults to the best column
    pub column: Option<u8>,
    /// Attribute names to suppress (already resolved elsewhere)
    #[serde(default)]
    pub ignoring: Vec<String>,
    /// Borrow the opposite column's value for rows missing one
    #[serde(default)]
    pub include_fallback: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BestColumnParams {
    /// The scan result produced by the host's OCR pipeline
    pub scan: ScanResult,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseValueTextParams {
    /// Raw OCR line to scan for number+unit tokens
    pub text: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FlxService {
    // --- Status ---

    #[tool(description = "Get the current status of the FLX service including build info and process information")]
    async fn flx_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for extracting nutrients from label scans. Call this when starting a new label scanning session or when unsure how to use the extraction tools.")]
    fn scan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SCAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SCAN_INSTRUCTIONS)]))
    }

    // --- Extraction ---

    #[tool(description = "Extract one column of a label scan as a normalized, ordered nutrient list. Omit column to use the best column. Attributes in ignoring are suppressed; include_fallback borrows the opposite column's value for rows missing one.")]
    async fn extract_nutrients(&self, Parameters(p): Parameters<ExtractNutrientsParams>) -> Result<CallToolResult, McpError> {
        let result = extract::extract_nutrients(&p.scan, p.column, &p.ignoring, p.include_fallback)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        {
            let mut tracker = self.status_tracker.lock().await;
            tracker.record_extraction();
        }

        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Report which column of a two-column label scan is most likely the primary one, with per-column population counts")]
    fn best_column(&self, Parameters(p): Parameters<BestColumnParams>) -> Result<CallToolResult, McpError> {
        let result = extract::best_column(&p.scan);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Detect food-label values (number plus unit) in a raw OCR text line")]
    fn parse_value_text(&self, Parameters(p): Parameters<ParseValueTextParams>) -> Result<CallToolResult, McpError> {
        let result = extract::parse_value_text(&p.text);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the known nutrient attributes with their group, default unit, and supported units")]
    fn list_attributes(&self) -> Result<CallToolResult, McpError> {
        let result = extract::list_attributes();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FlxService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "flx".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Food Label Extractor".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Food Label Extractor (FLX) - Turns OCR'd nutrition label scans into clean nutrient lists. \
                 IMPORTANT: Call scan_instructions at the start of a label scanning session. \
                 Extraction: extract_nutrients (one normalized column; energy first, macros always present), \
                 best_column (which column a two-column label leads with). \
                 Helpers: parse_value_text (number+unit tokens in a raw OCR line), \
                 list_attributes (attribute table with groups and units). \
                 The host's vision pipeline supplies the scan result JSON; FLX performs no OCR, \
                 persistence, or networking."
                    .into(),
            ),
        }
    }
}
