use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A planar point with x/y coordinates.
///
/// This wraps `geo::Point` and adds the pieces a sorted point store needs:
/// a total order (lexicographic by x, then y), squared-distance computation,
/// and a finiteness check.
///
/// Comparison, equality, and hashing all go through `f64::total_cmp` and the
/// coordinate bit patterns, so `Point` can serve as a `BTreeMap` key. Under
/// that order `-0.0` and `+0.0` are distinct coordinates.
///
/// # Examples
///
/// ```
/// use planemap_types::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(p.distance_squared(&Point::new(0.0, 0.0)), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x and y coordinates.
    ///
    /// Construction does not validate; non-finite coordinates are rejected
    /// by the store at its API boundary instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use planemap_types::Point;
    ///
    /// let origin = Point::new(0.0, 0.0);
    /// ```
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// True iff both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Squared Euclidean distance to another point: (Δx)² + (Δy)².
    ///
    /// Distance ordering is preserved without the square root, so proximity
    /// comparisons use this form throughout.
    ///
    /// # Examples
    ///
    /// ```
    /// use planemap_types::Point;
    ///
    /// let p1 = Point::new(0.0, 0.0);
    /// let p2 = Point::new(3.0, 4.0);
    /// assert_eq!(p1.distance_squared(&p2), 25.0);
    /// ```
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    ///
    /// # Examples
    ///
    /// ```
    /// use planemap_types::Point;
    ///
    /// let p1 = Point::new(0.0, 0.0);
    /// let p2 = Point::new(3.0, 4.0);
    /// assert_eq!(p1.distance(&p2), 5.0); // 3-4-5 triangle
    /// ```
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Euclidean.distance(self.inner, other.inner)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic order: x first, then y, each via `f64::total_cmp`.
impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.x()
            .total_cmp(&other.x())
            .then_with(|| self.y().total_cmp(&other.y()))
    }
}

/// Hashes the coordinate bit patterns, consistent with `Eq`.
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x().to_bits().hash(state);
        self.y().to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}
