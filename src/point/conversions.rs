use crate::point::Point;

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point { x, y }
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl From<geo_types::Coord<i64>> for Point {
    fn from(coord: geo_types::Coord<i64>) -> Self {
        Point {
            x: coord.x,
            y: coord.y,
        }
    }
}

impl From<Point> for geo_types::Coord<i64> {
    fn from(point: Point) -> Self {
        geo_types::Coord {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<geo_types::Point<i64>> for Point {
    fn from(point: geo_types::Point<i64>) -> Self {
        point.0.into()
    }
}

impl From<Point> for geo_types::Point<i64> {
    fn from(point: Point) -> Self {
        geo_types::Point(point.into())
    }
}
