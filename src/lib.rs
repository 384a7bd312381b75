//! Immutable points on the integer plane.
//!
//! A [`Point`] is a pair of `i64` coordinates with value semantics. Besides
//! construction, parsing and rendering of the `"x,y"` text form, it answers
//! three questions about a collection of other points:
//!
//! * how many sit exactly on it ([`Point::count_in_same_location`]),
//! * which share its x or y coordinate ([`Point::collinear_point_coordinates`]),
//! * which lie within a Chebyshev distance of it ([`Point::neighbors`]).
//!
//! ## Use
//!
//! ```
//! use gridpoint::Point;
//!
//! # fn main() -> gridpoint::errors::Result<()> {
//! let here = Point::parse("0,0")?;
//! let others: Vec<Point> = ["1,1", "2,2", "3,3", "-2,-2"]
//!     .into_iter()
//!     .filter_map(Point::try_parse)
//!     .collect();
//!
//! let close = here.neighbors(2, &others)?;
//! assert_eq!(close, [Point::new(1, 1), Point::new(2, 2), Point::new(-2, -2)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cargo features
//!
//! * `serde`: (de)serialize points as their `"x,y"` string.

pub mod errors;
mod point;

pub use point::{Alignment, Point};
