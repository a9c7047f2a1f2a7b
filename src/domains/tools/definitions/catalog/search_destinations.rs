//! Destination keyword search tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::common::{json_result, parse_args, require_args};
use crate::domains::catalog;

/// Parameters for the destination search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDestinationsParams {
    /// Search query to find destinations.
    pub query: String,
}

/// Searches the catalog by keyword in name, description, or attractions.
/// An empty query matches every destination.
pub struct SearchDestinationsTool;

impl SearchDestinationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_destinations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search destinations by keyword in name or description";

    const REQUIRED: &'static [&'static str] = &["query"];

    /// Execute the tool logic.
    pub fn execute(params: &SearchDestinationsParams) -> CallToolResult {
        info!("Searching destinations for: {}", params.query);
        json_result(&catalog::search(&params.query))
    }

    /// Validate arguments and run the handler.
    pub fn handle(args: serde_json::Map<String, serde_json::Value>) -> CallToolResult {
        if let Some(missing) = require_args(&args, Self::REQUIRED) {
            return missing;
        }
        match parse_args::<SearchDestinationsParams>(args) {
            Ok(params) => Self::execute(&params),
            Err(result) => result,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> serde_json::Value {
        let args = arguments.as_object().cloned().unwrap_or_default();
        super::super::common::envelope(&Self::handle(args))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchDestinationsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok(Self::handle(args)) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_execute_matches_attractions() {
        let params = SearchDestinationsParams {
            query: "opera".into(),
        };
        let result = SearchDestinationsTool::execute(&params);
        let text = text_of(&result);
        assert!(text.contains("sydney"));
        assert!(!text.contains("paris"));
    }

    #[test]
    fn test_execute_no_match_returns_empty_list() {
        let params = SearchDestinationsParams {
            query: "zzz-nowhere".into(),
        };
        let result = SearchDestinationsTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(text_of(&result), "[]");
    }

    #[test]
    fn test_handle_missing_query() {
        let result = SearchDestinationsTool::handle(serde_json::Map::new());
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: query");
    }
}
