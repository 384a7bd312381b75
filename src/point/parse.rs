use std::str::FromStr;

use crate::errors::{PointError, Result};
use crate::point::Point;

/// # Text representation
///
/// A point is written as two base-10 integers separated by a single comma,
/// `"x,y"`, exactly as [`Display`](std::fmt::Display) renders it. Each
/// coordinate may carry a leading sign. Whitespace is not trimmed anywhere,
/// so `"1, 2"` is rejected.
impl Point {
    /// Parse a point from its canonical `"x,y"` form.
    ///
    /// Fails with [`PointError::InvalidFormat`] when the input is empty or
    /// blank, does not split into exactly two non-empty comma-separated parts,
    /// or either part is not a valid `i64`.
    ///
    /// ```rust
    /// use gridpoint::Point;
    ///
    /// assert_eq!(Point::parse("3,-7").unwrap(), Point::new(3, -7));
    /// assert!(Point::parse("1,2,3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Point> {
        let (x, y) = split_coordinates(text).inspect_err(|e| log::debug!("{e}"))?;
        Ok(Point {
            x: parse_coordinate(text, "x", x)?,
            y: parse_coordinate(text, "y", y)?,
        })
    }

    /// Like [`Point::parse`], but returns `None` instead of an error.
    pub fn try_parse(text: &str) -> Option<Point> {
        Point::parse(text).ok()
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self> {
        Point::parse(s)
    }
}

fn split_coordinates(text: &str) -> Result<(&str, &str)> {
    if text.trim().is_empty() {
        return Err(PointError::invalid_format(text, "input is empty or blank"));
    }

    let mut parts = text.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) if !x.is_empty() && !y.is_empty() => Ok((x, y)),
        _ => Err(PointError::invalid_format(
            text,
            "expected exactly two non-empty comma-separated coordinates",
        )),
    }
}

fn parse_coordinate(text: &str, axis: &str, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| {
        let err = PointError::invalid_format(text, format!("{axis} coordinate '{token}': {e}"));
        log::debug!("{err}");
        err
    })
}
