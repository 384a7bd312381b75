use std::fmt;
use std::hash::{Hash, Hasher};

mod conversions;
mod parse;
mod queries;
#[cfg(feature = "serde")]
mod serialization;


pub use queries::Alignment;

/// An immutable point on the integer plane.
///
/// Coordinates are stored as `i64` and cannot be changed once the point
/// exists; a "moved" point is a new value. Equality is structural, and the
/// canonical text form is `"x,y"` (see [`Point::parse`]).
///
/// # Example
///
/// ```rust
/// use gridpoint::Point;
///
/// let p = Point::new(3, -7);
/// assert_eq!(p.to_string(), "3,-7");
/// assert_eq!("3,-7".parse::<Point>().unwrap(), p);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point from two integer coordinates.
    ///
    /// Narrower integer types are widened with `i64::from` (or `.into()`)
    /// before the call.
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// The x-coordinate.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// The y-coordinate.
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// 32-bit hash of the coordinates.
    ///
    /// Folds the high half of each coordinate onto its low half (arithmetic
    /// shift), XORs the two results and keeps the low 32 bits. Equal points
    /// always produce the same value; this is also what [`Hash`] feeds to
    /// the hasher.
    pub fn hash_code(&self) -> i32 {
        (((self.x >> 32) ^ self.x) ^ ((self.y >> 32) ^ self.y)) as i32
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
