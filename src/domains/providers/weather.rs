//! Met Office DataHub weather client.
//!
//! Resolves a free-text location to a forecast site through a pluggable
//! [`SiteResolver`], fetches the site's point forecast, and folds the flat
//! hourly time series into per-calendar-day summaries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{ProviderError, http_client};

const BASE_URL: &str = "https://data.hub.api.metoffice.gov.uk/sitespecific/v0";
const FORECAST_CONTEXT: &str = "Failed to get weather forecast";

/// Default number of forecast days when the caller does not ask for a count.
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// A resolved forecast site.
#[derive(Debug, Clone)]
pub struct SiteRef {
    pub id: String,
    pub name: String,
}

/// Resolves a free-text location to a provider site identifier.
///
/// The DataHub point API is keyed by site id, not by place name; resolution
/// is a separate concern and intentionally pluggable.
#[async_trait]
pub trait SiteResolver: Send + Sync {
    async fn resolve(&self, location: &str) -> Result<SiteRef, ProviderError>;
}

/// Best-effort resolver that maps every location to a single fixed site.
///
/// TODO: replace with a gazetteer-backed resolver once the DataHub site
/// search endpoint is available on our plan.
pub struct FixedSiteResolver;

impl FixedSiteResolver {
    const SITE_ID: &'static str = "310042";
}

#[async_trait]
impl SiteResolver for FixedSiteResolver {
    async fn resolve(&self, location: &str) -> Result<SiteRef, ProviderError> {
        Ok(SiteRef {
            id: Self::SITE_ID.to_string(),
            name: location.to_string(),
        })
    }
}

/// One day of forecast, summarized from the hourly samples.
#[derive(Debug, Clone, Serialize)]
pub struct DailyForecast {
    pub date: String,
    pub location: String,
    pub temperature: TemperatureRange,
    pub conditions: String,
    pub precipitation: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureRange {
    pub max: f64,
    pub min: f64,
    pub unit: String,
}

/// Met Office API client.
pub struct WeatherClient {
    api_key: Option<String>,
    base_url: String,
    resolver: Box<dyn SiteResolver>,
}

impl WeatherClient {
    /// Create a client with the given API key and the fixed-site resolver.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
            resolver: Box::new(FixedSiteResolver),
        }
    }

    /// Swap in a different site resolution strategy.
    pub fn with_resolver(mut self, resolver: Box<dyn SiteResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey {
                provider: "Met Office",
                env_var: "MET_OFFICE_API_KEY",
            })
    }

    /// Get the forecast for a location, summarized per calendar day.
    ///
    /// `days` is taken as-is: values above the series length simply return
    /// every available day.
    pub async fn forecast(
        &self,
        location: &str,
        days: usize,
    ) -> Result<Vec<DailyForecast>, ProviderError> {
        let key = self.require_key()?;

        let site = self.resolver.resolve(location).await?;
        info!("Fetching forecast for {} (site {})", location, site.id);

        let url = format!("{}/point/{}/forecast", self.base_url, site.id);
        let response = http_client(FORECAST_CONTEXT)?
            .get(url)
            .header("apikey", key)
            .header("Accept", "application/json")
            .query(&[("includeLocationName", "true")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Met Office API error: {}", e);
                ProviderError::upstream(FORECAST_CONTEXT, e)
            })?;

        let body: RawForecastResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::upstream(FORECAST_CONTEXT, e))?;

        Ok(summarize(body, days))
    }

    /// Current conditions: the first day of a one-day forecast, when the
    /// upstream series is non-empty.
    pub async fn current(&self, location: &str) -> Result<Option<DailyForecast>, ProviderError> {
        let mut days = self.forecast(location, 1).await?;
        Ok(if days.is_empty() {
            None
        } else {
            Some(days.remove(0))
        })
    }
}

// ============================================================================
// Upstream response decoding (best-effort)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawForecastResponse {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    location: RawLocation,
    #[serde(default, rename = "timeSeries")]
    time_series: Vec<RawSample>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSample {
    #[serde(default)]
    time: String,
    #[serde(default, rename = "screenTemperature")]
    screen_temperature: f64,
    #[serde(default, rename = "significantWeatherCode")]
    significant_weather_code: Option<i64>,
    #[serde(default, rename = "totalPrecipAmount")]
    total_precip_amount: f64,
    #[serde(default, rename = "windSpeed10m")]
    wind_speed_10m: f64,
    #[serde(default, rename = "screenRelativeHumidity")]
    screen_relative_humidity: f64,
}

struct DayBucket {
    date: String,
    temps: Vec<f64>,
    conditions: Option<i64>,
    precipitation: f64,
    wind_speed: f64,
    humidity: f64,
}

/// Fold the flat time series into per-day summaries and truncate to `days`.
///
/// Bucket key is the date portion of each timestamp (first 10 characters).
/// The first sample of a day supplies conditions, precipitation, wind, and
/// humidity; max/min temperature come from every sample in the bucket.
fn summarize(body: RawForecastResponse, days: usize) -> Vec<DailyForecast> {
    let Some(feature) = body.features.into_iter().next() else {
        return Vec::new();
    };

    let location = if feature.properties.location.name.is_empty() {
        "Unknown".to_string()
    } else {
        feature.properties.location.name
    };

    let mut buckets: Vec<DayBucket> = Vec::new();
    for sample in feature.properties.time_series {
        let date = sample.time.get(..10).unwrap_or(&sample.time).to_string();

        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.temps.push(sample.screen_temperature),
            None => buckets.push(DayBucket {
                date,
                temps: vec![sample.screen_temperature],
                conditions: sample.significant_weather_code,
                precipitation: sample.total_precip_amount,
                wind_speed: sample.wind_speed_10m,
                humidity: sample.screen_relative_humidity,
            }),
        }
    }

    buckets
        .into_iter()
        .take(days)
        .map(|bucket| DailyForecast {
            date: bucket.date,
            location: location.clone(),
            temperature: TemperatureRange {
                max: bucket.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                min: bucket.temps.iter().copied().fold(f64::INFINITY, f64::min),
                unit: "C".to_string(),
            },
            conditions: describe_weather_code(bucket.conditions),
            precipitation: bucket.precipitation,
            wind_speed: bucket.wind_speed,
            humidity: bucket.humidity,
        })
        .collect()
}

/// Met Office significant weather codes, rendered as labels.
fn describe_weather_code(code: Option<i64>) -> String {
    let label = match code {
        Some(0) => "Clear night",
        Some(1) => "Sunny day",
        Some(2) => "Partly cloudy (night)",
        Some(3) => "Partly cloudy (day)",
        Some(5) => "Mist",
        Some(6) => "Fog",
        Some(7) => "Cloudy",
        Some(8) => "Overcast",
        Some(9) => "Light rain shower (night)",
        Some(10) => "Light rain shower (day)",
        Some(11) => "Drizzle",
        Some(12) => "Light rain",
        Some(13) => "Heavy rain shower (night)",
        Some(14) => "Heavy rain shower (day)",
        Some(15) => "Heavy rain",
        Some(16) => "Sleet shower (night)",
        Some(17) => "Sleet shower (day)",
        Some(18) => "Sleet",
        Some(19) => "Hail shower (night)",
        Some(20) => "Hail shower (day)",
        Some(21) => "Hail",
        Some(22) => "Light snow shower (night)",
        Some(23) => "Light snow shower (day)",
        Some(24) => "Light snow",
        Some(25) => "Heavy snow shower (night)",
        Some(26) => "Heavy snow shower (day)",
        Some(27) => "Heavy snow",
        Some(28) => "Thunder shower (night)",
        Some(29) => "Thunder shower (day)",
        Some(30) => "Thunder",
        _ => "Unknown",
    };
    label.to_string()
}
