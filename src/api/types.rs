//! Serde types for the REST Countries v3.1 record shape.
//!
//! Multi-result endpoints wrap these in a JSON array. Almost every field is
//! `#[serde(default)]`: the upstream omits keys freely (territories without a
//! cioc code, countries without currencies, and so on) and a missing field
//! must never fail the whole lookup.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Canonical and official names of a country.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references (URLs).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Coat-of-arms image references. May be an empty object upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoatOfArms {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
}

/// One currency entry, keyed by its code in `CountryRecord::currencies`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Car {
    #[serde(default)]
    pub side: String,
}

/// Capital coordinates, when the upstream provides them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CapitalInfo {
    #[serde(default)]
    pub latlng: Vec<f64>,
}

/// The full country record behind the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub cca3: String,
    /// Olympic-style short code. Empty for territories without one.
    #[serde(default)]
    pub cioc: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default, rename = "coatOfArms")]
    pub coat_of_arms: CoatOfArms,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default, rename = "capitalInfo")]
    pub capital_info: CapitalInfo,
    /// Country centroid as `[lat, lng]`.
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    /// Area in km².
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// cca3 codes of neighboring countries.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub car: Car,
    #[serde(default)]
    pub landlocked: bool,
    #[serde(default, rename = "startOfWeek")]
    pub start_of_week: String,
}

impl CountryRecord {
    /// Coordinates for the map, as `(lat, lng)`. Capital coordinates win
    /// over the country centroid; `None` when neither is present.
    pub fn map_coords(&self) -> Option<(f64, f64)> {
        pair(&self.capital_info.latlng).or_else(|| pair(&self.latlng))
    }

    /// First capital name, if any.
    pub fn capital_name(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

fn pair(latlng: &[f64]) -> Option<(f64, f64)> {
    match latlng {
        [lat, lng, ..] => Some((*lat, *lng)),
        _ => None,
    }
}

/// The list-view subset: identifier + flag + code. Regions can hold dozens
/// of entries, so the full record is never fetched for lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountrySummary {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub cca3: String,
}
