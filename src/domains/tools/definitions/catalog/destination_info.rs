//! Destination detail lookup tool definition.

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

/// Parameters for the destination lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDestinationInfoParams {
    /// The destination to get information about (e.g., paris, tokyo, newyork, barcelona, sydney).
    pub destination: String,
}

/// Returns the full record for one destination, looked up by id or by
/// display-name fragment.
pub struct GetDestinationInfoTool;

impl GetDestinationInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_destination_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a travel destination \
        including attractions, best time to visit, and costs";

    const REQUIRED: &'static [&'static str] = &["destination"];

    /// Execute the tool logic.
    pub fn execute(params: &GetDestinationInfoParams) -> CallToolResult {
        info!("Looking up destination: {}", params.destination);

        match catalog::find(&params.destination) {
            Ok(destination) => json_result(destination),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Validate arguments and run the handler.
    pub fn handle(args: serde_json::Map<String, serde_json::Value>) -> CallToolResult {
        if let Some(missing) = require_args(&args, Self::REQUIRED) {
            return missing;
        }
        match parse_args::<GetDestinationInfoParams>(args) {
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
            input_schema: cached_schema_for_type::<GetDestinationInfoParams>(),
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
    fn test_execute_known_id() {
        let params = GetDestinationInfoParams {
            destination: "paris".into(),
        };
        let result = GetDestinationInfoTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        let text = text_of(&result);
        assert!(text.contains("Eiffel Tower"));
        assert!(text.contains("bestTimeToVisit"));
    }

    #[test]
    fn test_execute_unknown_is_error_with_valid_ids() {
        let params = GetDestinationInfoParams {
            destination: "atlantis".into(),
        };
        let result = GetDestinationInfoTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("paris, tokyo, newyork, barcelona, sydney"));
    }

    #[test]
    fn test_handle_missing_argument() {
        let result = GetDestinationInfoTool::handle(serde_json::Map::new());
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: destination");
    }
}
