use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle on the plane.
///
/// Defined by minimum and maximum coordinates on each axis. Containment is
/// inclusive of the boundary on all four sides, so a degenerate rectangle
/// (`min == max`) still contains its corner point.
///
/// Construction does not validate: a rectangle with a non-finite coordinate
/// or `min > max` can be built, and is rejected with an invalid-argument
/// error wherever the store receives one as a query parameter. `is_valid`
/// reports that check.
///
/// # Examples
///
/// ```
/// use planemap_types::{Point, Rect};
///
/// let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
/// assert!(unit.contains(&Point::new(1.0, 1.0))); // boundary is inside
/// assert!(!unit.contains(&Point::new(1.0, 1.1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    /// Create a new rectangle from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum x coordinate
    /// * `min_y` - Minimum y coordinate
    /// * `max_x` - Maximum x coordinate
    /// * `max_y` - Maximum y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use planemap_types::Rect;
    ///
    /// let rect = Rect::new(-1.0, -1.0, 1.0, 1.0);
    /// assert_eq!(rect.width(), 2.0);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Get the minimum x coordinate.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Get the minimum y coordinate.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Get the maximum x coordinate.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Get the maximum y coordinate.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Get the width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True iff all coordinates are finite and `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Check if a point lies within this rectangle, boundary included.
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Check if this rectangle intersects another, boundaries included.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

impl From<geo::Rect<f64>> for Rect {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

/// Conversion to `geo::Rect`, which normalizes corners by construction;
/// meaningful for valid rectangles.
impl From<Rect> for geo::Rect<f64> {
    fn from(rect: Rect) -> Self {
        geo::Rect::new(
            geo::coord! { x: rect.min_x, y: rect.min_y },
            geo::coord! { x: rect.max_x, y: rect.max_y },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::new(-1.0, -2.0, 3.0, 4.0);
        assert_eq!(rect.min_x(), -1.0);
        assert_eq!(rect.min_y(), -2.0);
        assert_eq!(rect.max_x(), 3.0);
        assert_eq!(rect.max_y(), 4.0);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 6.0);
        assert_eq!(rect.center(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);

        assert!(rect.contains(&Point::new(0.5, 0.5)));
        // All four corners and the edges count as inside.
        assert!(rect.contains(&Point::new(0.0, 0.0)));
        assert!(rect.contains(&Point::new(1.0, 1.0)));
        assert!(rect.contains(&Point::new(0.0, 1.0)));
        assert!(rect.contains(&Point::new(1.0, 0.0)));
        assert!(rect.contains(&Point::new(0.5, 1.0)));

        assert!(!rect.contains(&Point::new(1.0000001, 0.5)));
        assert!(!rect.contains(&Point::new(0.5, -0.0000001)));
    }

    #[test]
    fn test_degenerate_rect_contains_its_corner() {
        let rect = Rect::new(2.0, 3.0, 2.0, 3.0);
        assert!(rect.is_valid());
        assert!(rect.contains(&Point::new(2.0, 3.0)));
        assert!(!rect.contains(&Point::new(2.0, 3.1)));
    }

    #[test]
    fn test_is_valid() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 1.0, 1.0, 0.0).is_valid());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 3.0, 3.0);
        let c = Rect::new(2.5, 2.5, 4.0, 4.0);
        let edge = Rect::new(2.0, 0.0, 3.0, 2.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Shared edge counts as intersecting.
        assert!(a.intersects(&edge));
    }

    #[test]
    fn test_geo_conversions() {
        let rect = Rect::new(0.0, 1.0, 2.0, 3.0);
        let geo_rect: geo::Rect<f64> = rect.into();
        assert_eq!(geo_rect.min().x, 0.0);
        assert_eq!(geo_rect.max().y, 3.0);

        let back = Rect::from(geo_rect);
        assert_eq!(back, rect);
    }
}
