//! Open-Meteo geocoding provider.

use super::types::Location;
use crate::config::Config;
use crate::error::FetchError;
use crate::http;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Number of candidates requested. Only the first is used.
const RESULT_COUNT: &str = "10";
const LANGUAGE: &str = "en";

/// Resolves a free-text place name into a [`Location`].
pub trait Geocode {
    fn resolve(&self, city: &str) -> Result<Location, FetchError>;
}

/// Geocoder backed by the Open-Meteo search endpoint.
pub struct Geocoder {
    agent: ureq::Agent,
    endpoint: String,
}

impl Geocoder {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: http::agent(config.timeout()),
            endpoint: config.geocoding_url.clone(),
        }
    }
}

impl Geocode for Geocoder {
    fn resolve(&self, city: &str) -> Result<Location, FetchError> {
        info!(city, "geocoding");
        let request = self
            .agent
            .get(&self.endpoint)
            .query("name", city)
            .query("count", RESULT_COUNT)
            .query("language", LANGUAGE);

        let body = http::fetch_body(request)?;
        let location = parse_response(city, &body)?;
        debug!(
            name = %location.display_name,
            lat = location.latitude,
            lon = location.longitude,
            "geocoded"
        );
        Ok(location)
    }
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    /// Open-Meteo omits the key entirely when nothing matches.
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    #[serde(default)]
    latitude: Option<Value>,
    #[serde(default)]
    longitude: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Build a [`Location`] from the first search result.
pub(crate) fn parse_response(query: &str, body: &str) -> Result<Location, FetchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Schema(e.to_string()))?;

    let first = response
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| FetchError::Lookup(query.to_string()))?;

    let lat = coordinate(first.latitude.as_ref(), "latitude")?;
    let lon = coordinate(first.longitude.as_ref(), "longitude")?;
    let name = first.name.as_deref().unwrap_or(query);

    Ok(Location::new(lat, lon, name, first.country.as_deref()))
}

/// Accept a JSON number or a numeric string.
fn coordinate(value: Option<&Value>, field: &str) -> Result<f64, FetchError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| match value {
            None | Some(Value::Null) => FetchError::Schema(format!("no {} field", field)),
            Some(other) => FetchError::Schema(format!("{} is not numeric: {}", field, other)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_result_with_country() {
        let body = r#"{
            "results": [
                {"latitude": 59.91273, "longitude": 10.74609, "name": "Oslo", "country": "Norway"},
                {"latitude": 39.5, "longitude": -94.1, "name": "Oslo", "country": "United States"}
            ],
            "generationtime_ms": 0.7
        }"#;
        let loc = parse_response("oslo", body).unwrap();
        assert_relative_eq!(loc.latitude, 59.91273);
        assert_relative_eq!(loc.longitude, 10.74609);
        assert_eq!(loc.display_name, "Oslo, Norway");
    }

    #[test]
    fn test_first_result_without_country() {
        let body = r#"{"results": [{"latitude": 1.0, "longitude": 2.0, "name": "Nowhere"}]}"#;
        let loc = parse_response("nowhere", body).unwrap();
        assert_eq!(loc.display_name, "Nowhere");
    }

    #[test]
    fn test_missing_name_uses_query() {
        let body = r#"{"results": [{"latitude": 1.0, "longitude": 2.0, "country": "Chile"}]}"#;
        let loc = parse_response("Valparaiso", body).unwrap();
        assert_eq!(loc.display_name, "Valparaiso, Chile");
    }

    #[test]
    fn test_empty_results_is_lookup_error() {
        let err = parse_response("xyz", r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Lookup(ref q) if q == "xyz"));
    }

    #[test]
    fn test_absent_results_is_lookup_error() {
        let err = parse_response("xyz", r#"{"generationtime_ms": 0.3}"#).unwrap_err();
        assert!(matches!(err, FetchError::Lookup(_)));
    }

    #[test]
    fn test_numeric_string_coordinates() {
        let body = r#"{"results": [{"latitude": "35.6895", "longitude": "139.69171", "name": "Tokyo", "country": "Japan"}]}"#;
        let loc = parse_response("tokyo", body).unwrap();
        assert_relative_eq!(loc.latitude, 35.6895);
        assert_relative_eq!(loc.longitude, 139.69171);
    }

    #[test]
    fn test_missing_latitude_is_schema_error() {
        let body = r#"{"results": [{"longitude": 2.0, "name": "Half"}]}"#;
        let err = parse_response("half", body).unwrap_err();
        assert!(matches!(err, FetchError::Schema(ref m) if m.contains("latitude")));
    }

    #[test]
    fn test_non_numeric_longitude_is_schema_error() {
        let body = r#"{"results": [{"latitude": 2.0, "longitude": "east", "name": "Odd"}]}"#;
        let err = parse_response("odd", body).unwrap_err();
        assert!(matches!(err, FetchError::Schema(ref m) if m.contains("longitude")));
    }

    #[test]
    fn test_malformed_body_is_schema_error() {
        let err = parse_response("x", "<html>busy</html>").unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }
}
