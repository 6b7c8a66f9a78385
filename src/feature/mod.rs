mod to_geo;

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};


/// A coordinate pair as it appeared in the source document.
///
/// The first array element is stored as `latitude` and the second as
/// `longitude`. GeoJSON itself orders positions as (longitude, latitude), so
/// for standard data these labels are swapped. Existing consumers rely on the
/// positional layout, don't reorder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point { latitude, longitude }
    }
}

/// Outer ring plus an optional hole ring, empty when the source had none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub outside: Vec<Point>,
    pub inside: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    /// Missing, malformed or unsupported geometry.
    #[default]
    None,
    Point(Point),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::None => "None",
            Geometry::Point(_) => "Point",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    pub fn is_some(&self) -> bool {
        !matches!(self, Geometry::None)
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(m) => Some(m),
            _ => None,
        }
    }
}

/// Property values are kept in their textual form.
pub type Properties = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
    /// Bounding box as `[min..., max...]`, empty when absent or malformed.
    pub bbox: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub bbox: Vec<f64>,
}

impl Deref for FeatureCollection {
    type Target = Vec<Feature>;
    fn deref(&self) -> &Vec<Feature> {
        &self.features
    }
}

impl DerefMut for FeatureCollection {
    fn deref_mut(&mut self) -> &mut Vec<Feature> {
        &mut self.features
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        FeatureCollection {
            features: iter.into_iter().collect(),
            bbox: vec![],
        }
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl FeatureCollection {
    pub fn new() -> Self {
        FeatureCollection::default()
    }
}
