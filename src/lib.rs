//! Web-Mercator pixel/tile projection and tolerant GeoJSON decoding.
//!
//! [`projection`] and [`geojson`] are independent of each other. [`loader`]
//! adds the file system plumbing on top of [`geojson`].

pub mod feature;
pub mod geojson;
pub mod loader;
pub mod projection;

#[cfg(test)]
mod test;

pub use feature::{Feature, FeatureCollection, Geometry, MultiPolygon, Point, Polygon, Properties};
pub use geojson::{parse_str, GeoJsonError};
