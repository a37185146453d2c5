//! Sunrise and sunset lookup panel.
//!
//! Resolves a place name through Open-Meteo geocoding, asks the RapidAPI
//! sun-times service for the chosen date and timezone, and renders the
//! answer into a small two-panel display model.

pub mod config;
pub mod error;
mod http;
pub mod location;
pub mod panel;
pub mod sun;
pub mod timezone;

pub use config::Config;
pub use error::{ConfigError, FetchError};
