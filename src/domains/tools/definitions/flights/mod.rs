//! Tools backed by the Skyscanner flight API.

mod search_flights;

pub use search_flights::{SearchFlightsParams, SearchFlightsTool};
