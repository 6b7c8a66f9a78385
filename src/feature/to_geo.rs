use geo::{Coordinate, LineString};

use crate::feature::{Geometry, MultiPolygon, Point, Polygon};

#[cfg(test)]
mod tests {
    use crate::feature::{Geometry, MultiPolygon, Point, Polygon};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn none_has_no_geo_counterpart() {
        assert!(Geometry::None.to_geo().is_none());
    }

    #[test]
    fn point_maps_positionally() {
        match Geometry::Point(Point::new(1.5, 2.5)).to_geo() {
            Some(geo::Geometry::Point(p)) => {
                assert_eq!(p.x(), 1.5);
                assert_eq!(p.y(), 2.5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn polygon_without_hole_has_no_interiors() {
        let polygon = Polygon { outside: square(), inside: vec![] };
        match Geometry::Polygon(polygon).to_geo() {
            Some(geo::Geometry::Polygon(p)) => {
                assert_eq!(p.exterior().0.len(), 4);
                assert!(p.interiors().is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn polygon_hole_becomes_interior() {
        let hole = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
        ];
        let polygon = Polygon { outside: square(), inside: hole };
        match Geometry::Polygon(polygon).to_geo() {
            Some(geo::Geometry::Polygon(p)) => assert_eq!(p.interiors().len(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn multi_polygon_keeps_every_polygon() {
        let multi = MultiPolygon {
            polygons: vec![
                Polygon { outside: square(), inside: vec![] },
                Polygon { outside: square(), inside: vec![] },
            ],
        };
        match Geometry::MultiPolygon(multi).to_geo() {
            Some(geo::Geometry::MultiPolygon(m)) => assert_eq!(m.0.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }
}

impl From<&Point> for Coordinate<f64> {
    fn from(point: &Point) -> Self {
        Coordinate { x: point.latitude, y: point.longitude }
    }
}

fn ring(points: &[Point]) -> LineString<f64> {
    LineString(points.iter().map(Coordinate::from).collect())
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let interiors = if polygon.inside.is_empty() {
            vec![]
        } else {
            vec![ring(&polygon.inside)]
        };
        geo::Polygon::new(ring(&polygon.outside), interiors)
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(multi: &MultiPolygon) -> Self {
        geo::MultiPolygon(multi.polygons.iter().map(geo::Polygon::from).collect())
    }
}

impl Geometry {
    /// Converts into a `geo` geometry with `x` = first stored value and
    /// `y` = second, i.e. in source axis order.
    pub fn to_geo(&self) -> Option<geo::Geometry<f64>> {
        match self {
            Geometry::None => None,
            Geometry::Point(p) => Some(geo::Geometry::Point(geo::Point(Coordinate::from(p)))),
            Geometry::Polygon(p) => Some(geo::Geometry::Polygon(geo::Polygon::from(p))),
            Geometry::MultiPolygon(m) => {
                Some(geo::Geometry::MultiPolygon(geo::MultiPolygon::from(m)))
            }
        }
    }
}
