//! Place-name resolution.
//!
//! Turns free text into coordinates plus a "city, country" label using the
//! first result of the Open-Meteo geocoding search.

pub mod geocoder;
pub mod types;

pub use geocoder::{Geocode, Geocoder};
pub use types::{format_coords, Location};
