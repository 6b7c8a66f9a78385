//! Tolerant decoding of GeoJSON feature collections.
//!
//! Only a syntactically broken document is an error. Below the document root,
//! anything missing or malformed is left out: unusable features are skipped,
//! unusable geometries become [`Geometry::None`](crate::feature::Geometry::None),
//! and unusable ring points or polygons are dropped from their sequence.
//! Supported geometry types are `Point`, `Polygon` and `MultiPolygon`.

mod decode;
pub mod json;

use std::str::FromStr;

use serde_json::Value;

use crate::feature::FeatureCollection;

pub use decode::{decode_feature, decode_geometry};


#[derive(thiserror::Error, Debug)]
pub enum GeoJsonError {
    #[error("Invalid GeoJSON document: {}", .0)]
    Document(#[from] serde_json::Error),

    #[error("Could not read GeoJSON input: {}", .0)]
    Io(#[from] std::io::Error),
}

/// Parses `text` as JSON and decodes the feature collection inside.
pub fn parse_str(text: &str) -> Result<FeatureCollection, GeoJsonError> {
    let root: Value = serde_json::from_str(text)?;
    Ok(from_value(&root))
}

/// Decodes an already parsed document. Never fails; a root without a
/// `features` array gives an empty collection.
pub fn from_value(root: &Value) -> FeatureCollection {
    decode::decode_collection(root)
}

impl FromStr for FeatureCollection {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
