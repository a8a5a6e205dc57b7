//! Shared test fixtures.

use std::collections::BTreeMap;

use crate::api::types::{
    CapitalInfo, Car, CountryName, CountryRecord, CountrySummary, Currency, Flags,
};

/// A fully-populated record mirroring the live v3.1 payload for France.
pub fn france() -> CountryRecord {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        "EUR".to_string(),
        Currency {
            name: "Euro".to_string(),
            symbol: Some("€".to_string()),
        },
    );
    let mut languages = BTreeMap::new();
    languages.insert("fra".to_string(), "French".to_string());

    CountryRecord {
        name: CountryName {
            common: "France".to_string(),
            official: "French Republic".to_string(),
        },
        cca3: "FRA".to_string(),
        cioc: "FRA".to_string(),
        capital: vec!["Paris".to_string()],
        region: "Europe".to_string(),
        subregion: "Western Europe".to_string(),
        population: 67_391_582,
        area: 551_695.0,
        currencies,
        languages,
        borders: vec![
            "AND".to_string(),
            "BEL".to_string(),
            "DEU".to_string(),
            "ITA".to_string(),
            "LUX".to_string(),
            "MCO".to_string(),
            "ESP".to_string(),
            "CHE".to_string(),
        ],
        car: Car {
            side: "right".to_string(),
        },
        timezones: vec!["UTC-10:00".to_string(), "UTC+01:00".to_string()],
        start_of_week: "monday".to_string(),
        landlocked: false,
        latlng: vec![46.0, 2.0],
        capital_info: CapitalInfo {
            latlng: vec![48.87, 2.33],
        },
        flags: Flags {
            png: "https://flagcdn.com/w320/fr.png".to_string(),
            svg: "https://flagcdn.com/fr.svg".to_string(),
            alt: Some(
                "The flag of France is composed of three equal vertical bands \
                 of blue, white and red."
                    .to_string(),
            ),
        },
        ..Default::default()
    }
}

/// A minimal list entry, as returned by the region and subregion endpoints.
pub fn summary(name: &str, cca3: &str) -> CountrySummary {
    CountrySummary {
        name: CountryName {
            common: name.to_string(),
            official: name.to_string(),
        },
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            svg: format!("https://flagcdn.com/{}.svg", cca3.to_lowercase()),
            alt: None,
        },
        cca3: cca3.to_string(),
    }
}
