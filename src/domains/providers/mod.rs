//! Providers domain - clients for the upstream travel APIs.
//!
//! Three structurally identical adapters translate tool calls into one
//! external provider's read-only HTTP API:
//!
//! - `flights` - Skyscanner flight search
//! - `weather` - Met Office DataHub forecasts
//! - `places` - TripAdvisor attractions and restaurants
//!
//! Each client is constructed once at startup with its API key and fails
//! closed before any network I/O when the key is absent. Upstream bodies are
//! decoded through best-effort response structs: missing fields become
//! zero/empty defaults instead of failing the call.

mod error;
pub mod flights;
pub mod places;
pub mod weather;

pub use error::ProviderError;
pub use flights::{CabinClass, FlightOffer, FlightQuery, FlightsClient, PlaceSuggestion};
pub use places::{Attraction, PlacesClient, Restaurant};
pub use weather::{DailyForecast, FixedSiteResolver, SiteRef, SiteResolver, WeatherClient};

use crate::core::config::CredentialsConfig;

/// Request timeout applied to every upstream call.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Build a reqwest client with the shared request timeout.
pub(crate) fn http_client(context: &str) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::upstream(context, format!("Failed to create HTTP client: {e}")))
}

/// The full set of upstream clients, constructed once and shared read-only
/// by every tool dispatch path.
pub struct Providers {
    pub flights: FlightsClient,
    pub weather: WeatherClient,
    pub places: PlacesClient,
}

impl Providers {
    /// Build all clients from the credentials section of the configuration.
    pub fn new(credentials: &CredentialsConfig) -> Self {
        Self {
            flights: FlightsClient::new(credentials.skyscanner_api_key.clone()),
            weather: WeatherClient::new(credentials.met_office_api_key.clone()),
            places: PlacesClient::new(
                credentials.tripadvisor_api_key.clone(),
                credentials.tripadvisor_referer.clone(),
            ),
        }
    }
}
