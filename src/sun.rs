//! Sunrise / sunset lookup against the RapidAPI sun-times service.
//!
//! No local astronomy: the strings are shown exactly as the service returns
//! them. Either field may be missing; that is not an error.

use crate::config::Config;
use crate::error::FetchError;
use crate::http;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Sunrise and sunset as reported upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
}

impl SunTimes {
    /// Display lines, one per field that is present.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(ref sunrise) = self.sunrise {
            lines.push(format!("Sunrise: {}", sunrise));
        }
        if let Some(ref sunset) = self.sunset {
            lines.push(format!("Sunset:  {}", sunset));
        }
        lines
    }
}

/// Source of sun times for a coordinate, date and timezone identifier.
pub trait SunTimeSource {
    fn lookup(&self, lat: f64, lon: f64, date: &str, tz_id: &str) -> Result<SunTimes, FetchError>;
}

/// Client for the `getSunTimes` endpoint.
pub struct SunTimeLookup {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
    api_host: String,
}

impl SunTimeLookup {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: http::agent(config.timeout()),
            endpoint: config.sun_times_url.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        }
    }
}

impl SunTimeSource for SunTimeLookup {
    fn lookup(&self, lat: f64, lon: f64, date: &str, tz_id: &str) -> Result<SunTimes, FetchError> {
        info!(lat, lon, date, tz_id, "looking up sun times");
        let request = self
            .agent
            .get(&self.endpoint)
            .set("x-rapidapi-key", &self.api_key)
            .set("x-rapidapi-host", &self.api_host)
            .query("latitude", &lat.to_string())
            .query("longitude", &lon.to_string())
            .query("date", date)
            .query("timeZoneId", tz_id);

        let body = http::fetch_body(request)?;
        let times = parse_response(&body)?;
        debug!(sunrise = ?times.sunrise, sunset = ?times.sunset, "sun times received");
        Ok(times)
    }
}

pub(crate) fn parse_response(body: &str) -> Result<SunTimes, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Schema(e.to_string()))?;
    if !value.is_object() {
        return Err(FetchError::Schema(format!("expected a JSON object, got {}", value)));
    }
    serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))
}
