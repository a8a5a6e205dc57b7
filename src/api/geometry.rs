//! Boundary geometry for the map overlay.
//!
//! The geometry service returns one GeoJSON document per country, keyed by
//! its cca3 code. Only the ring coordinates matter for the terminal canvas,
//! so the document is reduced on parse to flat lists of `(lng, lat)` points
//! and everything else (properties, ids, bounding boxes) is dropped.

use serde::Deserialize;
use std::fmt;

/// GeoJSON values Atlas understands. Anything else fails the parse, which
/// callers treat as a missing overlay.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoJson {
    FeatureCollection { features: Vec<GeoJson> },
    Feature { geometry: Option<Box<GeoJson>> },
    GeometryCollection { geometries: Vec<GeoJson> },
    // Positions are parsed as Vec<f64>: some sources emit [lng, lat, alt].
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

#[derive(Debug)]
pub struct GeometryError(String);

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid boundary geometry: {}", self.0)
    }
}

impl std::error::Error for GeometryError {}

/// A country's boundary, reduced to polygon rings of `(lng, lat)` points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryGeometry {
    pub rings: Vec<Vec<(f64, f64)>>,
}

impl BoundaryGeometry {
    pub fn from_json(raw: &str) -> Result<Self, GeometryError> {
        let parsed: GeoJson =
            serde_json::from_str(raw).map_err(|e| GeometryError(e.to_string()))?;
        let mut rings = Vec::new();
        collect_rings(&parsed, &mut rings);
        if rings.is_empty() {
            return Err(GeometryError("no polygon rings".to_string()));
        }
        Ok(Self { rings })
    }

    /// Bounding box as `(min_lng, min_lat, max_lng, max_lat)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.rings.iter().flatten();
        let &(first_lng, first_lat) = points.next()?;
        let mut bounds = (first_lng, first_lat, first_lng, first_lat);
        for &(lng, lat) in points {
            bounds.0 = bounds.0.min(lng);
            bounds.1 = bounds.1.min(lat);
            bounds.2 = bounds.2.max(lng);
            bounds.3 = bounds.3.max(lat);
        }
        Some(bounds)
    }
}

fn collect_rings(value: &GeoJson, rings: &mut Vec<Vec<(f64, f64)>>) {
    match value {
        GeoJson::FeatureCollection { features } => {
            for feature in features {
                collect_rings(feature, rings);
            }
        }
        GeoJson::Feature { geometry } => {
            if let Some(geometry) = geometry {
                collect_rings(geometry, rings);
            }
        }
        GeoJson::GeometryCollection { geometries } => {
            for geometry in geometries {
                collect_rings(geometry, rings);
            }
        }
        GeoJson::Polygon { coordinates } => {
            for ring in coordinates {
                rings.push(to_ring(ring));
            }
        }
        GeoJson::MultiPolygon { coordinates } => {
            for polygon in coordinates {
                for ring in polygon {
                    rings.push(to_ring(ring));
                }
            }
        }
    }
}

fn to_ring(positions: &[Vec<f64>]) -> Vec<(f64, f64)> {
    positions
        .iter()
        .filter_map(|position| match position.as_slice() {
            [lng, lat, ..] => Some((*lng, *lat)),
            _ => None,
        })
        .collect()
}
