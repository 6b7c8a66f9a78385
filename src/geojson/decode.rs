use log::debug;
use serde_json::{Map, Value};

use crate::feature::{
    Feature, FeatureCollection, Geometry, MultiPolygon, Point, Polygon, Properties,
};
use crate::geojson::json::{opt_array, opt_object, opt_str, to_property_string};

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use crate::feature::{Geometry, Point};
    use crate::geojson::decode::*;

    fn geometry(value: serde_json::Value) -> Geometry {
        decode_geometry(&value)
    }

    #[test]
    fn point_is_stored_positionally() {
        let g = geometry(json!({"type": "Point", "coordinates": [1.5, 2.5]}));
        assert_eq!(g, Geometry::Point(Point { latitude: 1.5, longitude: 2.5 }));
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let g = geometry(json!({"type": "Point", "coordinates": [3, -4]}));
        assert_eq!(g, Geometry::Point(Point::new(3.0, -4.0)));
    }

    #[rstest]
    #[case(json!({"type": "Point", "coordinates": [1.0]}))]
    #[case(json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]}))]
    #[case(json!({"type": "Point", "coordinates": [1.0, "2.0"]}))]
    #[case(json!({"type": "Point", "coordinates": {"x": 1.0}}))]
    #[case(json!({"type": "Point"}))]
    #[case(json!({"type": "Polygon", "coordinates": []}))]
    #[case(json!({"type": "Polygon", "coordinates": [[], [], []]}))]
    #[case(json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]}))]
    #[case(json!({"type": "GeometryCollection", "geometries": []}))]
    #[case(json!({"coordinates": [1.0, 2.0]}))]
    #[case(json!({"type": 7, "coordinates": [1.0, 2.0]}))]
    #[case(json!([1.0, 2.0]))]
    #[case(json!(null))]
    fn unusable_geometries_become_none(#[case] value: serde_json::Value) {
        assert_eq!(geometry(value), Geometry::None);
    }

    #[test]
    fn polygon_without_hole_has_empty_inside() {
        let g = geometry(json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]}));
        let polygon = g.as_polygon().unwrap();
        assert_eq!(polygon.outside, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(polygon.inside.is_empty());
    }

    #[test]
    fn polygon_with_hole_fills_both_rings() {
        let g = geometry(json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                [[2, 2], [3, 2], [3, 3], [2, 2]]
            ]
        }));
        let polygon = g.as_polygon().unwrap();
        assert_eq!(polygon.outside.len(), 5);
        assert_eq!(polygon.inside.len(), 4);
        assert_eq!(polygon.inside[1], Point::new(3.0, 2.0));
    }

    #[test]
    fn malformed_ring_points_are_filtered() {
        let g = geometry(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1], "x", [2, 2, 2], [3, 3]]]
        }));
        let polygon = g.as_polygon().unwrap();
        assert_eq!(polygon.outside, vec![Point::new(0.0, 0.0), Point::new(3.0, 3.0)]);
    }

    #[test]
    fn ring_that_is_not_an_array_is_empty() {
        let g = geometry(json!({"type": "Polygon", "coordinates": [[[0, 0]], "hole"]}));
        let polygon = g.as_polygon().unwrap();
        assert_eq!(polygon.outside.len(), 1);
        assert!(polygon.inside.is_empty());
    }

    #[test]
    fn multi_polygon_drops_malformed_entries() {
        let g = geometry(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                [],
                "not a polygon",
                [[[5, 5]], [[6, 6]], [[7, 7]]]
            ]
        }));
        let multi = g.as_multi_polygon().unwrap();
        assert_eq!(multi.polygons.len(), 1);
        assert_eq!(multi.polygons[0].outside.len(), 4);
    }

    #[test]
    fn empty_multi_polygon_is_kept() {
        let g = geometry(json!({"type": "MultiPolygon", "coordinates": []}));
        assert_eq!(g.as_multi_polygon().map(|m| m.polygons.len()), Some(0));
    }

    #[test]
    fn properties_are_stringified() {
        let feature = decode_feature(&json!({
            "properties": {
                "name": "Tokyo",
                "pop": 14,
                "area": 2194.07,
                "capital": true,
                "note": null,
                "tags": ["a"]
            }
        }))
        .unwrap();

        let p = &feature.properties;
        assert_eq!(p.len(), 6);
        assert_eq!(p["name"], "Tokyo");
        assert_eq!(p["pop"], "14");
        assert_eq!(p["area"], "2194.07");
        assert_eq!(p["capital"], "true");
        assert_eq!(p["note"], "null");
        assert_eq!(p["tags"], "[\"a\"]");
        assert_eq!(feature.geometry, Geometry::None);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"properties": null}))]
    #[case(json!({"properties": "oops"}))]
    #[case(json!({"properties": [1, 2]}))]
    fn missing_properties_are_empty(#[case] value: serde_json::Value) {
        let feature = decode_feature(&value).unwrap();
        assert!(feature.properties.is_empty());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(1))]
    #[case(json!("feature"))]
    #[case(json!([]))]
    fn non_object_features_are_skipped(#[case] value: serde_json::Value) {
        assert!(decode_feature(&value).is_none());
    }

    #[test]
    fn collection_skips_non_objects_and_keeps_order() {
        let collection = decode_collection(&json!({
            "features": [
                {"geometry": {"type": "Point", "coordinates": [1, 1]}, "properties": {"i": 0}},
                42,
                {"geometry": {"type": "Point", "coordinates": [2]}, "properties": {"i": 1}},
                null,
                {"geometry": {"type": "Point", "coordinates": [3, 3]}, "properties": {"i": 2}}
            ]
        }));

        assert_eq!(collection.len(), 3);
        let order: Vec<&str> = collection.iter().map(|f| f.properties["i"].as_str()).collect();
        assert_eq!(order, vec!["0", "1", "2"]);
        assert_eq!(collection[1].geometry, Geometry::None);
    }

    #[test]
    fn bbox_is_read_on_collection_and_feature() {
        let collection = decode_collection(&json!({
            "bbox": [100.0, 0.0, 105.0, 1.0],
            "features": [
                {
                    "bbox": [-10, -10, 10, 10],
                    "geometry": {"type": "Point", "coordinates": [0, 0]}
                },
                {"geometry": {"type": "Point", "coordinates": [1, 1]}}
            ]
        }));

        assert_eq!(collection.bbox, vec![100.0, 0.0, 105.0, 1.0]);
        assert_eq!(collection[0].bbox, vec![-10.0, -10.0, 10.0, 10.0]);
        assert!(collection[1].bbox.is_empty());
    }

    #[test]
    fn three_dimensional_bbox_is_kept() {
        let feature = decode_feature(&json!({"bbox": [0, 0, 0, 1, 1, 1]})).unwrap();
        assert_eq!(feature.bbox.len(), 6);
    }

    #[rstest]
    #[case(json!({"bbox": [1.0, 2.0, 3.0]}))]
    #[case(json!({"bbox": [1.0, "2.0", 3.0, 4.0]}))]
    #[case(json!({"bbox": [1.0, null]}))]
    #[case(json!({"bbox": "1,2,3,4"}))]
    #[case(json!({"bbox": {"min": [0, 0]}}))]
    #[case(json!({"bbox": []}))]
    fn malformed_bbox_is_empty(#[case] value: serde_json::Value) {
        assert!(decode_feature(&value).unwrap().bbox.is_empty());
        assert!(decode_collection(&value).bbox.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"features": null}))]
    #[case(json!({"features": {"0": {}}}))]
    #[case(json!([{"geometry": {"type": "Point", "coordinates": [1, 1]}}]))]
    #[case(json!("FeatureCollection"))]
    fn missing_features_array_yields_empty_collection(#[case] value: serde_json::Value) {
        assert!(decode_collection(&value).is_empty());
    }
}

pub fn decode_collection(root: &Value) -> FeatureCollection {
    let bbox = decode_bbox(root);
    let features = match opt_array(root, "features") {
        Some(features) => features,
        None => {
            debug!("document has no 'features' array");
            return FeatureCollection { features: vec![], bbox };
        }
    };

    let features = features
        .iter()
        .enumerate()
        .filter_map(|(i, element)| {
            let feature = decode_feature(element);
            if feature.is_none() {
                debug!("skipping features[{}]: not an object", i);
            }
            feature
        })
        .collect();

    FeatureCollection { features, bbox }
}

pub fn decode_feature(value: &Value) -> Option<Feature> {
    if !value.is_object() {
        return None;
    }

    let geometry = value.get("geometry").map(decode_geometry).unwrap_or_default();
    let properties = opt_object(value, "properties")
        .map(decode_properties)
        .unwrap_or_default();

    Some(Feature {
        geometry,
        properties,
        bbox: decode_bbox(value),
    })
}

/// An even number of plain numbers, otherwise empty.
fn decode_bbox(value: &Value) -> Vec<f64> {
    let values = match opt_array(value, "bbox") {
        Some(values) => values,
        None => return vec![],
    };

    let bbox: Option<Vec<f64>> = values.iter().map(Value::as_f64).collect();
    match bbox {
        Some(bbox) if bbox.len() % 2 == 0 => bbox,
        _ => {
            debug!("ignoring malformed bbox {}", Value::Array(values.clone()));
            vec![]
        }
    }
}

pub fn decode_geometry(value: &Value) -> Geometry {
    let type_name = match opt_str(value, "type") {
        Some(type_name) => type_name,
        None => return Geometry::None,
    };
    let coordinates = opt_array(value, "coordinates").map(Vec::as_slice);

    let geometry = match type_name {
        "Point" => coordinates.and_then(decode_point).map(Geometry::Point),
        "Polygon" => coordinates.and_then(decode_polygon).map(Geometry::Polygon),
        "MultiPolygon" => coordinates.map(decode_multi_polygon).map(Geometry::MultiPolygon),
        other => {
            debug!("unsupported geometry type '{}'", other);
            return Geometry::None;
        }
    };

    geometry.unwrap_or_else(|| {
        debug!("malformed coordinates for geometry type '{}'", type_name);
        Geometry::None
    })
}

fn decode_properties(object: &Map<String, Value>) -> Properties {
    object
        .iter()
        .map(|(key, value)| (key.clone(), to_property_string(value)))
        .collect()
}

/// Exactly two numbers, kept in source order.
fn decode_point(values: &[Value]) -> Option<Point> {
    match values {
        [first, second] => Some(Point::new(first.as_f64()?, second.as_f64()?)),
        _ => None,
    }
}

/// One outer ring and at most one hole.
fn decode_polygon(rings: &[Value]) -> Option<Polygon> {
    if rings.is_empty() || rings.len() > 2 {
        return None;
    }

    Some(Polygon {
        outside: decode_ring(rings.get(0)),
        inside: decode_ring(rings.get(1)),
    })
}

fn decode_ring(ring: Option<&Value>) -> Vec<Point> {
    ring.and_then(Value::as_array)
        .map(|points| {
            points
                .iter()
                .filter_map(|p| p.as_array().and_then(|p| decode_point(p)))
                .collect()
        })
        .unwrap_or_default()
}

fn decode_multi_polygon(polygons: &[Value]) -> MultiPolygon {
    MultiPolygon {
        polygons: polygons
            .iter()
            .filter_map(|p| p.as_array().and_then(|p| decode_polygon(p)))
            .collect(),
    }
}
