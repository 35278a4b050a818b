//! Place strings split into city / county / state / country tiers

use serde::{Deserialize, Serialize};

/// A place as written in the record file, with its comma-separated tiers
///
/// The tiers are derived once, from the number of comma-separated segments
/// in `full_text`:
///
/// | segments | populated tiers               |
/// |----------|-------------------------------|
/// | 4        | city, county, state, country  |
/// | 3        | city, state, country          |
/// | 2        | city, country                 |
/// | 1        | country                       |
/// | other    | none                          |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub full_text: String,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Location {
    /// Parse a free-text place value
    pub fn parse(full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        let mut location = Self {
            full_text,
            city: None,
            county: None,
            state: None,
            country: None,
        };

        if location.full_text.trim().is_empty() {
            return location;
        }

        let parts: Vec<String> = location
            .full_text
            .split(',')
            .map(|p| p.trim().to_string())
            .collect();

        match parts.as_slice() {
            [city, county, state, country] => {
                location.city = Some(city.clone());
                location.county = Some(county.clone());
                location.state = Some(state.clone());
                location.country = Some(country.clone());
            }
            [city, state, country] => {
                location.city = Some(city.clone());
                location.state = Some(state.clone());
                location.country = Some(country.clone());
            }
            [city, country] => {
                location.city = Some(city.clone());
                location.country = Some(country.clone());
            }
            [country] => {
                location.country = Some(country.clone());
            }
            _ => {}
        }

        location
    }

    /// Narrative-friendly name: "city, state", else "city, country", else the raw text
    pub fn display_name(&self) -> String {
        fn present(tier: &Option<String>) -> Option<&str> {
            tier.as_deref().filter(|s| !s.is_empty())
        }

        match (present(&self.city), present(&self.state), present(&self.country)) {
            (Some(city), Some(state), _) => format!("{}, {}", city, state),
            (Some(city), None, Some(country)) => format!("{}, {}", city, country),
            _ => self.full_text.clone(),
        }
    }
}
