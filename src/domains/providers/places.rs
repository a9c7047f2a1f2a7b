//! TripAdvisor Content API client.
//!
//! Attraction and restaurant search. Every lookup chains two calls: resolve
//! the free-text location to a TripAdvisor location id, then fetch the
//! resource for that id. Resolution is best-effort: a failed or empty
//! search yields an empty id rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{ProviderError, http_client};

const BASE_URL: &str = "https://api.content.tripadvisor.com/api/v1";
const DEFAULT_REFERER: &str = "http://localhost:3000";
const ATTRACTIONS_CONTEXT: &str = "Failed to search attractions";
const RESTAURANTS_CONTEXT: &str = "Failed to search restaurants";

/// A point of interest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A restaurant listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u64,
    pub cuisine: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// TripAdvisor API client.
pub struct PlacesClient {
    api_key: Option<String>,
    referer: String,
    base_url: String,
}

impl PlacesClient {
    /// Create a client with the given API key and optional Referer header.
    pub fn new(api_key: Option<String>, referer: Option<String>) -> Self {
        Self {
            api_key,
            referer: referer.unwrap_or_else(|| DEFAULT_REFERER.to_string()),
            base_url: BASE_URL.to_string(),
        }
    }

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey {
                provider: "TripAdvisor",
                env_var: "TRIPADVISOR_API_KEY",
            })
    }

    /// Search for attractions in a location, optionally filtered by category.
    pub async fn search_attractions(
        &self,
        location: &str,
        category: Option<&str>,
    ) -> Result<Vec<Attraction>, ProviderError> {
        let key = self.require_key()?;

        info!("Searching attractions in {}", location);
        let location_id = self.resolve_location_id(key, location).await;

        let mut params: Vec<(&str, String)> =
            vec![("key", key.to_string()), ("language", "en".to_string())];
        if let Some(category) = category {
            params.push(("category", category.to_string()));
        }

        let url = format!("{}/location/{}/attractions", self.base_url, location_id);
        let body = self.fetch(ATTRACTIONS_CONTEXT, &url, &params).await?;

        Ok(body.data.into_iter().map(Attraction::from).collect())
    }

    /// Search for restaurants in a location, optionally filtered by a
    /// case-insensitive cuisine substring. Unmatched entries are dropped.
    pub async fn search_restaurants(
        &self,
        location: &str,
        cuisine: Option<&str>,
    ) -> Result<Vec<Restaurant>, ProviderError> {
        let key = self.require_key()?;

        info!("Searching restaurants in {}", location);
        let location_id = self.resolve_location_id(key, location).await;

        let params: Vec<(&str, String)> =
            vec![("key", key.to_string()), ("language", "en".to_string())];

        let url = format!("{}/location/{}/restaurants", self.base_url, location_id);
        let body = self.fetch(RESTAURANTS_CONTEXT, &url, &params).await?;

        let restaurants = body.data.into_iter().map(Restaurant::from).collect();
        Ok(filter_by_cuisine(restaurants, cuisine))
    }

    /// Resolve a free-text location to a TripAdvisor location id.
    ///
    /// Best-effort: any failure or empty result collapses to an empty id,
    /// leaving the subsequent fetch to surface the upstream error.
    async fn resolve_location_id(&self, key: &str, location: &str) -> String {
        let url = format!("{}/location/search", self.base_url);
        let params: Vec<(&str, String)> = vec![
            ("key", key.to_string()),
            ("searchQuery", location.to_string()),
            ("language", "en".to_string()),
        ];

        let Ok(client) = http_client("location search") else {
            return String::new();
        };

        let response = client
            .get(url)
            .header("accept", "application/json")
            .header("Referer", &self.referer)
            .query(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let body: RawLocationSearchResponse = match response {
            Ok(r) => match r.json().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Location search decode failed: {}", e);
                    return String::new();
                }
            },
            Err(e) => {
                debug!("Location search failed: {}", e);
                return String::new();
            }
        };

        body.data
            .into_iter()
            .next()
            .map(|entry| entry.location_id)
            .unwrap_or_default()
    }

    async fn fetch(
        &self,
        context: &str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<RawListResponse, ProviderError> {
        let response = http_client(context)?
            .get(url)
            .header("accept", "application/json")
            .header("Referer", &self.referer)
            .query(params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("TripAdvisor API error: {}", e);
                ProviderError::upstream(context, e)
            })?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::upstream(context, e))
    }
}

// ============================================================================
// Upstream response decoding (best-effort)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawLocationSearchResponse {
    #[serde(default)]
    data: Vec<RawLocationEntry>,
}

#[derive(Debug, Deserialize)]
struct RawLocationEntry {
    #[serde(default)]
    location_id: String,
}

#[derive(Debug, Deserialize)]
struct RawListResponse {
    #[serde(default)]
    data: Vec<RawPlace>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPlace {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    num_reviews: u64,
    #[serde(default)]
    subcategory: Vec<RawNamed>,
    #[serde(default)]
    cuisine: Vec<RawNamed>,
    #[serde(default)]
    address_obj: RawAddress,
    #[serde(default)]
    price_level: Option<String>,
    #[serde(default)]
    web_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNamed {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawAddress {
    #[serde(default)]
    address_string: Option<String>,
}

/// Keep only restaurants whose cuisine list matches the wanted substring
/// (case-insensitive). `None` keeps everything.
fn filter_by_cuisine(restaurants: Vec<Restaurant>, cuisine: Option<&str>) -> Vec<Restaurant> {
    let Some(wanted) = cuisine.map(str::to_lowercase) else {
        return restaurants;
    };

    restaurants
        .into_iter()
        .filter(|r| r.cuisine.iter().any(|c| c.to_lowercase().contains(&wanted)))
        .collect()
}

impl From<RawPlace> for Attraction {
    fn from(place: RawPlace) -> Self {
        let category = place
            .subcategory
            .into_iter()
            .next()
            .map(|s| s.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Attraction".to_string());

        Self {
            name: place.name,
            description: place.description,
            rating: place.rating,
            review_count: place.num_reviews,
            category,
            address: place.address_obj.address_string,
            price_level: place.price_level,
            url: place.web_url,
        }
    }
}

impl From<RawPlace> for Restaurant {
    fn from(place: RawPlace) -> Self {
        Self {
            name: place.name,
            description: place.description,
            rating: place.rating,
            review_count: place.num_reviews,
            cuisine: place.cuisine.into_iter().map(|c| c.name).collect(),
            price_level: place.price_level,
            address: place.address_obj.address_string,
            url: place.web_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant_json(name: &str, cuisines: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "description": "A place to eat",
            "rating": 4.2,
            "num_reviews": 120,
            "cuisine": cuisines.iter().map(|c| serde_json::json!({ "name": c })).collect::<Vec<_>>(),
            "address_obj": { "address_string": "1 Example St" },
            "web_url": "https://example.com"
        })
    }

    #[test]
    fn test_attraction_from_raw_defaults() {
        let raw: RawPlace = serde_json::from_value(serde_json::json!({})).unwrap();
        let attraction = Attraction::from(raw);
        assert_eq!(attraction.name, "");
        assert_eq!(attraction.rating, 0.0);
        assert_eq!(attraction.review_count, 0);
        assert_eq!(attraction.category, "Attraction");
        assert!(attraction.address.is_none());
    }

    #[test]
    fn test_attraction_takes_first_subcategory() {
        let raw: RawPlace = serde_json::from_value(serde_json::json!({
            "name": "Louvre Museum",
            "subcategory": [ { "name": "Museum" }, { "name": "Landmark" } ]
        }))
        .unwrap();
        assert_eq!(Attraction::from(raw).category, "Museum");
    }

    #[test]
    fn test_restaurant_cuisine_filter_case_insensitive() {
        let body: RawListResponse = serde_json::from_value(serde_json::json!({
            "data": [
                restaurant_json("Trattoria", &["Italian", "Pizza"]),
                restaurant_json("Izakaya", &["Japanese"]),
            ]
        }))
        .unwrap();

        let restaurants: Vec<Restaurant> = body.data.into_iter().map(Restaurant::from).collect();
        let matched = filter_by_cuisine(restaurants, Some("ITALIAN"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Trattoria");
    }

    #[test]
    fn test_restaurant_without_cuisine_dropped_by_filter() {
        let body: RawListResponse = serde_json::from_value(serde_json::json!({
            "data": [ restaurant_json("Mystery Diner", &[]) ]
        }))
        .unwrap();

        let restaurants: Vec<Restaurant> = body.data.into_iter().map(Restaurant::from).collect();
        assert!(filter_by_cuisine(restaurants, Some("italian")).is_empty());
    }

    #[tokio::test]
    async fn test_search_without_key_fails_fast() {
        let client = PlacesClient::new(None, None);
        let err = client.search_attractions("Paris", None).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
        assert!(err.to_string().contains("TripAdvisor API key is required"));

        let err = client.search_restaurants("Paris", None).await.unwrap_err();
        assert!(err.to_string().contains("TRIPADVISOR_API_KEY"));
    }
}
