//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;

use crate::domains::providers::Providers;

use super::definitions::{
    GetCurrentWeatherTool, GetDestinationInfoTool, GetTravelTipsTool, GetWeatherForecastTool,
    ListDestinationsTool, SearchAttractionsTool, SearchDestinationsTool, SearchFlightsTool,
    SearchRestaurantsTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    providers: Arc<Providers>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the given provider clients.
    pub fn new(providers: Arc<Providers>) -> Self {
        Self { providers }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListDestinationsTool::NAME,
            GetDestinationInfoTool::NAME,
            GetTravelTipsTool::NAME,
            SearchDestinationsTool::NAME,
            SearchFlightsTool::NAME,
            GetWeatherForecastTool::NAME,
            GetCurrentWeatherTool::NAME,
            SearchAttractionsTool::NAME,
            SearchRestaurantsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListDestinationsTool::to_tool(),
            GetDestinationInfoTool::to_tool(),
            GetTravelTipsTool::to_tool(),
            SearchDestinationsTool::to_tool(),
            SearchFlightsTool::to_tool(),
            GetWeatherForecastTool::to_tool(),
            GetCurrentWeatherTool::to_tool(),
            SearchAttractionsTool::to_tool(),
            SearchRestaurantsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Always returns a response envelope. An unregistered name comes back
    /// as an error-flagged response naming the tool, not a transport fault.
    #[cfg(feature = "http")]
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        use super::definitions::common::{envelope, error_result};
        use tracing::warn;

        match name {
            ListDestinationsTool::NAME => ListDestinationsTool::http_handler(arguments),
            GetDestinationInfoTool::NAME => GetDestinationInfoTool::http_handler(arguments),
            GetTravelTipsTool::NAME => GetTravelTipsTool::http_handler(arguments),
            SearchDestinationsTool::NAME => SearchDestinationsTool::http_handler(arguments),
            SearchFlightsTool::NAME => {
                SearchFlightsTool::http_handler(arguments, self.providers.clone()).await
            }
            GetWeatherForecastTool::NAME => {
                GetWeatherForecastTool::http_handler(arguments, self.providers.clone()).await
            }
            GetCurrentWeatherTool::NAME => {
                GetCurrentWeatherTool::http_handler(arguments, self.providers.clone()).await
            }
            SearchAttractionsTool::NAME => {
                SearchAttractionsTool::http_handler(arguments, self.providers.clone()).await
            }
            SearchRestaurantsTool::NAME => {
                SearchRestaurantsTool::http_handler(arguments, self.providers.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                envelope(&error_result(&format!("Unknown tool: {}", name)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(Providers::new(&CredentialsConfig::default())))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"list_destinations"));
        assert!(names.contains(&"get_destination_info"));
        assert!(names.contains(&"get_travel_tips"));
        assert!(names.contains(&"search_destinations"));
        assert!(names.contains(&"search_flights"));
        assert!(names.contains(&"get_weather_forecast"));
        assert!(names.contains(&"get_current_weather"));
        assert!(names.contains(&"search_attractions"));
        assert!(names.contains(&"search_restaurants"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), registry.tool_names().len());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_catalog_tool() {
        let registry = test_registry();
        let result = registry
            .call_tool("get_destination_info", serde_json::json!({ "destination": "tokyo" }))
            .await;
        assert_eq!(result["isError"], serde_json::json!(false));
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Tokyo Skytree"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown_tool_is_error_envelope() {
        let registry = test_registry();
        let result = registry
            .call_tool("teleport", serde_json::json!({}))
            .await;
        assert_eq!(result["isError"], serde_json::json!(true));
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Unknown tool: teleport"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_missing_argument_envelope() {
        let registry = test_registry();
        let result = registry
            .call_tool("search_flights", serde_json::json!({ "origin": "JFK" }))
            .await;
        assert_eq!(result["isError"], serde_json::json!(true));
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Missing required arguments"));
    }
}
