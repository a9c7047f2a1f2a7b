//! Destination listing tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::common::json_result;
use crate::domains::catalog;

/// This tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDestinationsParams {}

/// Lists every destination in the catalog with a brief description.
pub struct ListDestinationsTool;

impl ListDestinationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_destinations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all available travel destinations with brief descriptions";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        info!("Listing destinations");
        json_result(&catalog::summaries())
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> serde_json::Value {
        super::super::common::envelope(&Self::execute())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListDestinationsParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_execute_lists_all_destinations() {
        let result = ListDestinationsTool::execute();
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        for id in ["paris", "tokyo", "newyork", "barcelona", "sydney"] {
            assert!(text.contains(id), "missing {}", id);
        }
    }
}
