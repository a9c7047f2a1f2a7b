//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; the adapter-backed tools capture the shared provider clients.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::providers::Providers;

use super::definitions::{
    GetCurrentWeatherTool, GetDestinationInfoTool, GetTravelTipsTool, GetWeatherForecastTool,
    ListDestinationsTool, SearchAttractionsTool, SearchDestinationsTool, SearchFlightsTool,
    SearchRestaurantsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(providers: Arc<Providers>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListDestinationsTool::create_route())
        .with_route(GetDestinationInfoTool::create_route())
        .with_route(GetTravelTipsTool::create_route())
        .with_route(SearchDestinationsTool::create_route())
        .with_route(SearchFlightsTool::create_route(providers.clone()))
        .with_route(GetWeatherForecastTool::create_route(providers.clone()))
        .with_route(GetCurrentWeatherTool::create_route(providers.clone()))
        .with_route(SearchAttractionsTool::create_route(providers.clone()))
        .with_route(SearchRestaurantsTool::create_route(providers))
}
