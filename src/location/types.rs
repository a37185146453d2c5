//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};

/// A resolved place. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// "{name}, {country}", or the bare name when the country is unknown.
    pub display_name: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, name: &str, country: Option<&str>) -> Self {
        let display_name = match country.map(str::trim).filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", name, country),
            None => name.to_string(),
        };
        Self { latitude, longitude, display_name }
    }

    pub fn display_line(&self) -> String {
        format!(
            "\u{1F4CD} {}\n  \u{1F4D0} {}",
            self.display_name,
            format_coords(self.latitude, self.longitude)
        )
    }
}

/// Format coordinates with hemisphere letters, e.g. `59.9127°N, 10.7461°E`.
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}\u{00B0}{}, {:.4}\u{00B0}{}", lat.abs(), ns, lon.abs(), ew)
}
