use num_traits::Num;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used for poster geometry.
///
/// Internally, all generation happens in `f64`; this trait mostly exists so
/// that callers can keep their vertex data in `f32` if storage matters.
pub trait PosterNum: Num + PartialOrd + Into<f64> + Copy + std::fmt::Debug {}

impl<T> PosterNum for T where T: Num + PartialOrd + Into<f64> + Copy + std::fmt::Debug {}

/// A two dimensional point.
///
/// This is the basic type used for defining blob vertices and annotation
/// positions. Poster space is the unit square `[0,1]×[0,1]` with the y axis
/// pointing up.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: PosterNum> Point2<S> {
    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    /// Returns the squared length of this point interpreted as a vector.
    #[inline]
    pub fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }

    /// Component wise addition.
    #[inline]
    pub fn add(&self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Component wise subtraction.
    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both components with a scalar factor.
    #[inline]
    pub fn mul(&self, factor: S) -> Self {
        Point2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl<S: PosterNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: PosterNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: PosterNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: PosterNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

#[cfg(test)]
mod test {
    use super::Point2;

    #[test]
    fn test_arithmetic() {
        let p = Point2::new(0.5, 0.25);
        let q = Point2::new(0.1, 0.05);

        assert_eq!(p.add(q), Point2::new(0.6, 0.3));
        assert_eq!(p.sub(q), Point2::new(0.4, 0.2));
        assert_eq!(p.mul(2.0), Point2::new(1.0, 0.5));
    }

    #[test]
    fn test_distance() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(3.0, 4.0);
        assert_eq!(p.distance_2(q), 25.0);
    }

    #[test]
    fn test_conversion() {
        let p: Point2<f64> = [0.25, 0.75].into();
        assert_eq!(<(f64, f64)>::from(p), (0.25, 0.75));
    }
}
