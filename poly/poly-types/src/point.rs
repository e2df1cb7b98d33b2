//! Fixed-point 2D point type.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point coordinate: signed 64-bit micrometers.
pub type Coord = i64;

/// Number of coordinate units per millimeter.
pub const UNITS_PER_MM: Coord = 1000;

/// Convert millimeters to fixed-point units (rounded).
#[must_use]
pub fn mm_to_units(mm: f64) -> Coord {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let units = (mm * UNITS_PER_MM as f64).round() as Coord;
    units
}

/// Convert fixed-point units to millimeters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn units_to_mm(units: Coord) -> f64 {
    units as f64 / UNITS_PER_MM as f64
}

/// Convert an area in square units to square millimeters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn units2_to_mm2(units2: f64) -> f64 {
    units2 / ((UNITS_PER_MM * UNITS_PER_MM) as f64)
}

/// A 2D point in fixed-point units.
///
/// `Point2` is a plain value type: freely copied, no ownership
/// implications. Ordering is lexicographic (x, then y), which is exactly
/// the sort the monotone-chain convex hull needs.
///
/// # Example
///
/// ```
/// use poly_types::Point2;
///
/// let a = Point2::new(3, 4);
/// let b = Point2::new(1, 1);
/// assert_eq!(a + b, Point2::new(4, 5));
/// assert_eq!(a.cross(b), 3 - 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// X coordinate in fixed-point units.
    pub x: Coord,
    /// Y coordinate in fixed-point units.
    pub y: Coord,
}

impl Point2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Exact 2D cross product (z component of the 3D cross product).
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    #[must_use]
    pub const fn cross(self, other: Self) -> i128 {
        self.x as i128 * other.y as i128 - self.y as i128 * other.x as i128
    }

    /// Exact dot product.
    #[inline]
    #[must_use]
    pub const fn dot(self, other: Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// Exact squared length of the vector from the origin.
    #[inline]
    #[must_use]
    pub const fn norm_squared(self) -> i128 {
        self.dot(self)
    }

    /// Euclidean length of the vector from the origin.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length(self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }

    /// Scale this vector to the given length.
    ///
    /// Returns [`Point2::ZERO`] for the zero vector; callers that cannot
    /// tolerate a degenerate normal must skip near-zero-length edges first.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn scaled_to(self, len: Coord) -> Self {
        let current = self.length();
        if current == 0.0 {
            return Self::ZERO;
        }
        let f = len as f64 / current;
        Self::new(
            (self.x as f64 * f).round() as Coord,
            (self.y as f64 * f).round() as Coord,
        )
    }

    /// Rotate the vector 90 degrees counter-clockwise.
    #[inline]
    #[must_use]
    pub const fn turned_90_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for Point2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Coord> for Point2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Coord) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(Coord, Coord)> for Point2 {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}
