//! Travel tips tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::common::{error_result, json_result, parse_args, require_args};
use crate::domains::catalog;

/// Parameters for the travel tips tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTravelTipsParams {
    /// Category of travel tips (packing, safety, budgeting, cultural).
    pub category: String,
}

/// Returns the ordered tip list for one category. The category arrives as a
/// free string so an out-of-enumeration value produces a tool-level error
/// naming the valid keys.
pub struct GetTravelTipsTool;

impl GetTravelTipsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_travel_tips";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get travel tips for a specific category";

    const REQUIRED: &'static [&'static str] = &["category"];

    /// Execute the tool logic.
    pub fn execute(params: &GetTravelTipsParams) -> CallToolResult {
        info!("Fetching travel tips for: {}", params.category);

        match catalog::tips(&params.category) {
            Ok(tips) => json_result(&tips),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Validate arguments and run the handler.
    pub fn handle(args: serde_json::Map<String, serde_json::Value>) -> CallToolResult {
        if let Some(missing) = require_args(&args, Self::REQUIRED) {
            return missing;
        }
        match parse_args::<GetTravelTipsParams>(args) {
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
            input_schema: cached_schema_for_type::<GetTravelTipsParams>(),
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
    fn test_execute_valid_category() {
        let params = GetTravelTipsParams {
            category: "packing".into(),
        };
        let result = GetTravelTipsTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        let text = text_of(&result);
        assert!(text.contains("\"category\": \"packing\""));
        assert!(text.contains("Roll clothes to save space"));
    }

    #[test]
    fn test_execute_invalid_category_lists_valid_keys() {
        let params = GetTravelTipsParams {
            category: "invalid".into(),
        };
        let result = GetTravelTipsTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("packing, safety, budgeting, cultural"));
    }

    #[test]
    fn test_handle_missing_category() {
        let result = GetTravelTipsTool::handle(serde_json::Map::new());
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: category");
    }
}
