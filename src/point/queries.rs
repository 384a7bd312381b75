use std::borrow::Borrow;
use std::fmt;

use crate::errors::{PointError, Result};
use crate::point::Point;

/// How a point lines up with a reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Both coordinates match.
    Same,
    /// Same x-coordinate, different y (vertical alignment).
    X,
    /// Same y-coordinate, different x (horizontal alignment).
    Y,
}

impl Alignment {
    /// The tag used in [`Point::collinear_point_coordinates`] reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Alignment::Same => "SAME",
            Alignment::X => "X",
            Alignment::Y => "Y",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// # Queries against point collections
///
/// Every query takes any iterable of points or point references and reads
/// it once, front to back. Results keep the input order, duplicates
/// included.
impl Point {
    /// Chebyshev distance, `max(|Δx|, |Δy|)`.
    ///
    /// Computed on unsigned differences, so it is exact for any pair of
    /// coordinates.
    pub fn chebyshev_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Classify `other` relative to `self`, or `None` if it shares neither
    /// coordinate.
    pub fn alignment_with(&self, other: &Point) -> Option<Alignment> {
        match (self.x == other.x, self.y == other.y) {
            (true, true) => Some(Alignment::Same),
            (true, false) => Some(Alignment::X),
            (false, true) => Some(Alignment::Y),
            (false, false) => None,
        }
    }

    /// Number of points in `points` equal to `self`.
    pub fn count_in_same_location<I>(&self, points: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<Point>,
    {
        points
            .into_iter()
            .filter(|p| Borrow::<Point>::borrow(p) == self)
            .count()
    }

    /// Points sharing at least one coordinate with `self`, with their
    /// [`Alignment`].
    pub fn collinear_points<I>(&self, points: I) -> impl Iterator<Item = (Point, Alignment)>
    where
        I: IntoIterator,
        I::Item: Borrow<Point>,
    {
        let origin = *self;
        points.into_iter().filter_map(move |p| {
            let p: Point = *p.borrow();
            origin.alignment_with(&p).map(|alignment| (p, alignment))
        })
    }

    /// Text report of [`Point::collinear_points`].
    ///
    /// Each match is written as `(x,y,"TAG")` and entries are joined with
    /// commas. Returns an empty string when nothing lines up.
    ///
    /// ```rust
    /// use gridpoint::Point;
    ///
    /// let points = [Point::new(0, 0), Point::new(0, 5), Point::new(5, 0), Point::new(3, 3)];
    /// assert_eq!(
    ///     Point::ORIGIN.collinear_point_coordinates(&points),
    ///     r#"(0,0,"SAME"),(0,5,"X"),(5,0,"Y")"#
    /// );
    /// ```
    pub fn collinear_point_coordinates<I>(&self, points: I) -> String
    where
        I: IntoIterator,
        I::Item: Borrow<Point>,
    {
        self.collinear_points(points)
            .map(|(p, alignment)| format!("({p},\"{alignment}\")"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Points within Chebyshev `distance` of `self`, i.e. inside the closed
    /// square of half-width `distance` centred on it.
    ///
    /// Entries equal to `self` are never returned, however many times they
    /// appear. Fails with [`PointError::InvalidArgument`] if `distance` is not
    /// positive.
    pub fn neighbors<I>(&self, distance: i64, points: I) -> Result<Vec<Point>>
    where
        I: IntoIterator,
        I::Item: Borrow<Point>,
    {
        if distance <= 0 {
            return Err(PointError::InvalidArgument(format!(
                "neighbor distance must be positive, got {distance}"
            )));
        }
        let limit = distance.unsigned_abs();

        let found: Vec<Point> = points
            .into_iter()
            .map(|p| -> Point { *p.borrow() })
            .filter(|p| p != self && self.chebyshev_distance(p) <= limit)
            .collect();

        log::trace!(
            "{} neighbors of ({self}) within distance {distance}",
            found.len()
        );
        Ok(found)
    }
}
