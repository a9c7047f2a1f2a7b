//! Tools backed by the static travel catalog.

mod destination_info;
mod list_destinations;
mod search_destinations;
mod travel_tips;

pub use destination_info::{GetDestinationInfoParams, GetDestinationInfoTool};
pub use list_destinations::ListDestinationsTool;
pub use search_destinations::{SearchDestinationsParams, SearchDestinationsTool};
pub use travel_tips::{GetTravelTipsParams, GetTravelTipsTool};
