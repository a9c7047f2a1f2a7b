//! Skyscanner flight search client.
//!
//! Thin pass-through against the Skyscanner partners API: one live-search
//! request per call, results capped at 10 offers, no retry and no paging.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{ProviderError, http_client};

const BASE_URL: &str = "https://partners.api.skyscanner.net";
const SEARCH_CONTEXT: &str = "Failed to search flights";
const SUGGEST_CONTEXT: &str = "Failed to get place suggestions";
const MAX_OFFERS: usize = 10;

/// Cabin class preference for a flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_str(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

/// A flight search request.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    pub return_date: Option<String>,
    pub adults: Option<u32>,
    pub cabin_class: Option<CabinClass>,
}

/// One priced itinerary. Transient: offers carry no identity beyond their
/// fields and are never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub price: f64,
    pub currency: String,
    pub airline: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub stops: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
}

/// An autosuggest place entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuggestion {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub iata_code: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Skyscanner API client.
pub struct FlightsClient {
    api_key: Option<String>,
    base_url: String,
}

impl FlightsClient {
    /// Create a client with the given API key (usually from configuration).
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey {
                provider: "Skyscanner",
                env_var: "SKYSCANNER_API_KEY",
            })
    }

    /// Search for flights. Returns at most 10 offers.
    pub async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, ProviderError> {
        let key = self.require_key()?;

        info!(
            "Searching flights {} -> {} on {}",
            query.origin, query.destination, query.depart_date
        );

        let mut params: Vec<(&str, String)> = vec![
            ("originPlace", query.origin.clone()),
            ("destinationPlace", query.destination.clone()),
            ("outboundDate", query.depart_date.clone()),
            ("adults", query.adults.unwrap_or(1).to_string()),
            (
                "cabinClass",
                query
                    .cabin_class
                    .unwrap_or(CabinClass::Economy)
                    .as_str()
                    .to_string(),
            ),
        ];
        if let Some(return_date) = &query.return_date {
            params.push(("inboundDate", return_date.clone()));
        }

        let url = format!(
            "{}/apiservices/v3/flights/live/search/create",
            self.base_url
        );
        let response = http_client(SEARCH_CONTEXT)?
            .get(url)
            .header("x-api-key", key)
            .query(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Skyscanner API error: {}", e);
                ProviderError::upstream(SEARCH_CONTEXT, e)
            })?;

        let body: RawSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::upstream(SEARCH_CONTEXT, e))?;

        Ok(parse_offers(body))
    }

    /// Get place suggestions for autocomplete.
    pub async fn suggest_places(
        &self,
        query: &str,
    ) -> Result<Vec<PlaceSuggestion>, ProviderError> {
        let key = self.require_key()?;

        let url = format!("{}/apiservices/v3/autosuggest/flights", self.base_url);
        let response = http_client(SUGGEST_CONTEXT)?
            .get(url)
            .header("x-api-key", key)
            .query(&[("query", query)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Skyscanner place suggestion error: {}", e);
                ProviderError::upstream(SUGGEST_CONTEXT, e)
            })?;

        let body: RawSuggestResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::upstream(SUGGEST_CONTEXT, e))?;

        Ok(body.places)
    }
}

// ============================================================================
// Upstream response decoding (best-effort)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    itineraries: Vec<RawItinerary>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestResponse {
    #[serde(default)]
    places: Vec<PlaceSuggestion>,
}

#[derive(Debug, Deserialize)]
struct RawItinerary {
    #[serde(default, rename = "pricingOptions")]
    pricing_options: Vec<RawPricingOption>,
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPricingOption {
    #[serde(default)]
    price: RawPrice,
    #[serde(default, rename = "deepLink")]
    deep_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPrice {
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawLeg {
    #[serde(default)]
    departure: String,
    #[serde(default)]
    arrival: String,
    #[serde(default)]
    duration: String,
    #[serde(default, rename = "stopCount")]
    stop_count: u32,
    #[serde(default)]
    carriers: RawCarriers,
}

#[derive(Debug, Default, Deserialize)]
struct RawCarriers {
    #[serde(default)]
    marketing: Vec<RawCarrier>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCarrier {
    #[serde(default)]
    name: String,
}

/// Map up to 10 itineraries to offers: first pricing option and first
/// marketing carrier per itinerary, missing fields defaulted.
fn parse_offers(body: RawSearchResponse) -> Vec<FlightOffer> {
    body.itineraries
        .into_iter()
        .take(MAX_OFFERS)
        .map(|itinerary| {
            let pricing = itinerary.pricing_options.into_iter().next();
            let leg = itinerary.legs.into_iter().next().unwrap_or_default();
            let carrier = leg.carriers.marketing.into_iter().next();

            let (price, currency, deep_link) = match pricing {
                Some(p) => {
                    let currency = if p.price.unit.is_empty() {
                        "USD".to_string()
                    } else {
                        p.price.unit
                    };
                    (p.price.amount, currency, p.deep_link)
                }
                None => (0.0, "USD".to_string(), None),
            };

            let airline = carrier
                .map(|c| c.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());

            FlightOffer {
                price,
                currency,
                airline,
                departure: leg.departure,
                arrival: leg.arrival,
                duration: leg.duration,
                stops: leg.stop_count,
                deep_link,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itinerary_json(price: f64) -> serde_json::Value {
        serde_json::json!({
            "pricingOptions": [
                { "price": { "amount": price, "unit": "EUR" }, "deepLink": "https://example.com" }
            ],
            "legs": [
                {
                    "departure": "2026-09-01T08:00:00",
                    "arrival": "2026-09-01T11:30:00",
                    "duration": "PT3H30M",
                    "stopCount": 1,
                    "carriers": { "marketing": [ { "name": "Air Example" } ] }
                }
            ]
        })
    }

    #[test]
    fn test_parse_offers_maps_fields() {
        let body: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "itineraries": [itinerary_json(123.45)]
        }))
        .unwrap();

        let offers = parse_offers(body);
        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.price, 123.45);
        assert_eq!(offer.currency, "EUR");
        assert_eq!(offer.airline, "Air Example");
        assert_eq!(offer.stops, 1);
        assert_eq!(offer.deep_link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_offers_caps_at_ten() {
        let itineraries: Vec<_> = (0..12).map(|i| itinerary_json(i as f64)).collect();
        let body: RawSearchResponse =
            serde_json::from_value(serde_json::json!({ "itineraries": itineraries })).unwrap();

        assert_eq!(parse_offers(body).len(), 10);
    }

    #[test]
    fn test_parse_offers_defaults_missing_fields() {
        // bare itinerary: no pricing options, no legs
        let body: RawSearchResponse =
            serde_json::from_value(serde_json::json!({ "itineraries": [ {} ] })).unwrap();

        let offers = parse_offers(body);
        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.price, 0.0);
        assert_eq!(offer.currency, "USD");
        assert_eq!(offer.airline, "Unknown");
        assert_eq!(offer.departure, "");
        assert_eq!(offer.stops, 0);
        assert!(offer.deep_link.is_none());
    }

    #[test]
    fn test_parse_offers_empty_body() {
        let body: RawSearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parse_offers(body).is_empty());
    }

    #[tokio::test]
    async fn test_search_without_key_fails_fast() {
        let client = FlightsClient::new(None);
        let query = FlightQuery {
            origin: "JFK".into(),
            destination: "LHR".into(),
            depart_date: "2026-09-01".into(),
            return_date: None,
            adults: None,
            cabin_class: None,
        };

        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
        assert!(err.to_string().contains("Skyscanner API key is required"));
    }

    #[tokio::test]
    async fn test_empty_key_treated_as_missing() {
        let client = FlightsClient::new(Some(String::new()));
        let err = client.suggest_places("london").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
    }

    #[test]
    fn test_cabin_class_wire_names() {
        assert_eq!(CabinClass::PremiumEconomy.as_str(), "premium_economy");
        let parsed: CabinClass = serde_json::from_str("\"premium_economy\"").unwrap();
        assert_eq!(parsed, CabinClass::PremiumEconomy);
    }
}
