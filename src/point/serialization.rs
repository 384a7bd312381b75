use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::point::Point;

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PointVisitor;

impl Visitor<'_> for PointVisitor {
    type Value = Point;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a point as \"x,y\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Point, E> {
        Point::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PointVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&[Point::new(1, -2), Point::ORIGIN]).unwrap();
        assert_eq!(json, r#"["1,-2","0,0"]"#);
    }

    #[test]
    fn test_deserialize() {
        let points: Vec<Point> = serde_json::from_str(r#"["3,-7","0,0"]"#).unwrap();
        assert_eq!(points, vec![Point::new(3, -7), Point::ORIGIN]);
    }

    #[test]
    fn test_deserialize_rejects_bad_text() {
        let err = serde_json::from_str::<Point>(r#""1,2,3""#).unwrap_err();
        assert!(err.to_string().contains("Invalid point format"), "{err}");
        assert!(serde_json::from_str::<Point>("[1, 2]").is_err());
    }
}
