//! Restaurant search tool definition.

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

/// Parameters for the restaurant search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchRestaurantsParams {
    /// Location to search for restaurants.
    pub location: String,

    /// Cuisine type filter (e.g., Italian, Japanese).
    #[serde(default)]
    pub cuisine: Option<String>,
}

/// Searches for restaurants in a location, optionally filtered by cuisine.
pub struct SearchRestaurantsTool;

impl SearchRestaurantsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_restaurants";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for restaurants in a location";

    const REQUIRED: &'static [&'static str] = &["location"];

    /// Execute the tool logic.
    pub async fn execute(
        params: &SearchRestaurantsParams,
        providers: &Providers,
    ) -> CallToolResult {
        let result = providers
            .places
            .search_restaurants(&params.location, params.cuisine.as_deref())
            .await;

        match result {
            Ok(restaurants) => json_result(&restaurants),
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
        match parse_args::<SearchRestaurantsParams>(args) {
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
            input_schema: cached_schema_for_type::<SearchRestaurantsParams>(),
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
    fn test_params_cuisine_optional() {
        let json = r#"{"location": "Tokyo", "cuisine": "Japanese"}"#;
        let params: SearchRestaurantsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.cuisine.as_deref(), Some("Japanese"));
    }

    #[tokio::test]
    async fn test_handle_missing_location() {
        let providers = Providers::new(&CredentialsConfig::default());
        let result = SearchRestaurantsTool::handle(serde_json::Map::new(), &providers).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: location");
    }

    #[tokio::test]
    async fn test_execute_without_key_reports_configuration_error() {
        let providers = Providers::new(&CredentialsConfig::default());
        let params = SearchRestaurantsParams {
            location: "Tokyo".into(),
            cuisine: None,
        };

        let result = SearchRestaurantsTool::execute(&params, &providers).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("TripAdvisor API key is required"));
    }
}
