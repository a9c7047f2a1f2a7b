//! Attraction search tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{error_result, json_result, parse_args, require_args};
use crate::domains::providers::Providers;

/// Parameters for the attraction search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAttractionsParams {
    /// Location to search for attractions.
    pub location: String,

    /// Category filter (e.g., museum, park, historic).
    #[serde(default)]
    pub category: Option<String>,
}

/// Searches for attractions and things to do in a location.
pub struct SearchAttractionsTool;

impl SearchAttractionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_attractions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search for attractions and things to do in a location";

    const REQUIRED: &'static [&'static str] = &["location"];

    /// Execute the tool logic.
    pub async fn execute(
        params: &SearchAttractionsParams,
        providers: &Providers,
    ) -> CallToolResult {
        let result = providers
            .places
            .search_attractions(&params.location, params.category.as_deref())
            .await;

        match result {
            Ok(attractions) => json_result(&attractions),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Validate arguments and run the handler.
    pub async fn handle(
        args: serde_json::Map<String, serde_json::Value>,
        providers: &Providers,
    ) -> CallToolResult {
        if let Some(missing) = require_args(&args, Self::REQUIRED) {
            return missing;
        }
        match parse_args::<SearchAttractionsParams>(args) {
            Ok(params) => Self::execute(&params, providers).await,
            Err(result) => result,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        providers: Arc<Providers>,
    ) -> serde_json::Value {
        let args = arguments.as_object().cloned().unwrap_or_default();
        super::super::common::envelope(&Self::handle(args, &providers).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchAttractionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(providers: Arc<Providers>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let providers = providers.clone();
            async move { Ok(Self::handle(args, &providers).await) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_params_category_optional() {
        let json = r#"{"location": "Paris"}"#;
        let params: SearchAttractionsParams = serde_json::from_str(json).unwrap();
        assert!(params.category.is_none());
    }

    #[tokio::test]
    async fn test_handle_missing_location() {
        let providers = Providers::new(&CredentialsConfig::default());
        let result = SearchAttractionsTool::handle(serde_json::Map::new(), &providers).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: location");
    }

    #[tokio::test]
    async fn test_execute_without_key_reports_configuration_error() {
        let providers = Providers::new(&CredentialsConfig::default());
        let params = SearchAttractionsParams {
            location: "Paris".into(),
            category: Some("museum".into()),
        };

        let result = SearchAttractionsTool::execute(&params, &providers).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("TripAdvisor API key is required"));
    }
}
