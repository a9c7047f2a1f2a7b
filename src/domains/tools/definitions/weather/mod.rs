//! Tools backed by the Met Office weather API.

mod current;
mod forecast;

pub use current::{GetCurrentWeatherParams, GetCurrentWeatherTool};
pub use forecast::{GetWeatherForecastParams, GetWeatherForecastTool};
