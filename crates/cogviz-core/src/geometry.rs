//! Geometric primitives for graph layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate (also used as a velocity vector)
//! - [`Size`] - Width and height of the rendering surface
//!
//! # Coordinate System
//!
//! Coordinates follow the SVG convention used by the rendering sink:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

/// A 2D point in layout space.
///
/// Points use `f32` coordinates and double as displacement/velocity vectors in
/// the force simulation.
///
/// # Examples
///
/// ```
/// # use cogviz_core::geometry::Point;
/// let from = Point::new(10.0, 20.0);
/// let to = Point::new(13.0, 24.0);
///
/// let delta = to.sub_point(from);
/// assert_eq!(delta, Point::new(3.0, 4.0));
/// assert_eq!(delta.hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true when both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the Euclidean length of the vector from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }
}

/// Width and height of an element or of the rendering surface
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center of a surface of this size anchored at the origin
    ///
    /// ```
    /// # use cogviz_core::geometry::{Point, Size};
    /// assert_eq!(Size::new(600.0, 400.0).center(), Point::new(300.0, 200.0));
    /// ```
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns true if both dimensions are strictly positive and finite
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Distance is symmetric and never negative.
    fn check_distance_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let d1 = p1.distance(p2);
        let d2 = p2.distance(p1);

        prop_assert!(d1 >= 0.0);
        prop_assert!(approx_eq!(f32, d1, d2));
        Ok(())
    }

    /// The difference vector is as long as the distance.
    fn check_difference_length(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let delta = p2.sub_point(p1);

        prop_assert!(approx_eq!(f32, delta.hypot(), p1.distance(p2), epsilon = 0.001));
        prop_assert!(delta.is_finite());
        Ok(())
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_is_symmetric(p1, p2)?;
        }

        #[test]
        fn difference_length(p1 in point_strategy(), p2 in point_strategy()) {
            check_difference_length(p1, p2)?;
        }
    }
}
