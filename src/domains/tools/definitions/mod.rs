//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod catalog;
pub mod common;
pub mod flights;
pub mod places;
pub mod weather;

pub use catalog::{
    GetDestinationInfoTool, GetTravelTipsTool, ListDestinationsTool, SearchDestinationsTool,
};
pub use flights::SearchFlightsTool;
pub use places::{SearchAttractionsTool, SearchRestaurantsTool};
pub use weather::{GetCurrentWeatherTool, GetWeatherForecastTool};
