//! Weather forecast tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{error_result, json_result, parse_args, require_args};
use crate::domains::providers::{Providers, weather::DEFAULT_FORECAST_DAYS};

/// Parameters for the weather forecast tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherForecastParams {
    /// Location to get weather forecast for.
    pub location: String,

    /// Number of days to forecast (1-7, default: 5).
    #[serde(default)]
    pub days: Option<usize>,
}

/// Gets a per-day weather forecast for a destination.
pub struct GetWeatherForecastTool;

impl GetWeatherForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather forecast for a destination";

    const REQUIRED: &'static [&'static str] = &["location"];

    /// Execute the tool logic.
    ///
    /// The day count is passed to the provider as-is; only a missing or
    /// zero value falls back to the default of 5.
    pub async fn execute(
        params: &GetWeatherForecastParams,
        providers: &Providers,
    ) -> CallToolResult {
        let days = match params.days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_FORECAST_DAYS,
        };

        match providers.weather.forecast(&params.location, days).await {
            Ok(forecast) => json_result(&forecast),
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
        match parse_args::<GetWeatherForecastParams>(args) {
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
            input_schema: cached_schema_for_type::<GetWeatherForecastParams>(),
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
