//! Tools backed by the TripAdvisor Content API.

mod attractions;
mod restaurants;

pub use attractions::{SearchAttractionsParams, SearchAttractionsTool};
pub use restaurants::{SearchRestaurantsParams, SearchRestaurantsTool};
