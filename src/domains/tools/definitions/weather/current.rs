//! Current weather tool definition.

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

/// Parameters for the current weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCurrentWeatherParams {
    /// Location to get current weather conditions for.
    pub location: String,
}

/// Gets today's conditions for a destination (the first day of the forecast).
pub struct GetCurrentWeatherTool;

impl GetCurrentWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather conditions for a destination";

    const REQUIRED: &'static [&'static str] = &["location"];

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetCurrentWeatherParams,
        providers: &Providers,
    ) -> CallToolResult {
        match providers.weather.current(&params.location).await {
            Ok(Some(day)) => json_result(&day),
            Ok(None) => error_result(&format!(
                "No forecast data available for {}",
                params.location
            )),
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
        match parse_args::<GetCurrentWeatherParams>(args) {
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
            input_schema: cached_schema_for_type::<GetCurrentWeatherParams>(),
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
