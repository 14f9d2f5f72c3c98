// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Geometry primitives used by [softcanvas](https://docs.rs/softcanvas).
//!
//! Unlike most rasterizers, all types use double precision floats (`f64`),
//! because the backend relies on exact span and parametric computations.

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

mod rect;
mod size;
mod transform;

pub use rect::{IntRect, Rect};
pub use size::IntSize;
pub use transform::Transform;

/// An integer length that is guarantee to be > 0
type LengthU32 = core::num::NonZeroU32;

/// A point or a 2D vector.
///
/// Doesn't guarantee to be finite.
#[allow(missing_docs)]
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

// Two `f64` without padding.
unsafe impl bytemuck::Zeroable for Point {}
unsafe impl bytemuck::Pod for Point {}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(v: [f64; 2]) -> Self {
        Point { x: v[0], y: v[1] }
    }
}

impl Point {
    /// Creates a new `Point`.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Creates a point at 0x0 position.
    pub const fn zero() -> Self {
        Point { x: 0.0, y: 0.0 }
    }

    /// Returns true if x and y are both zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns true if both x and y are measurable values.
    ///
    /// Both values are other than infinities and NaN.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Multiplies both coordinates by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Point::from_xy(self.x * factor, self.y * factor)
    }

    /// Divides component-wise.
    pub fn div(&self, other: Point) -> Self {
        Point::from_xy(self.x / other.x, self.y / other.y)
    }

    /// Returns the dot product of two points.
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the cross product of vector and vec.
    ///
    /// Vector and vec form three-dimensional vectors with z-axis value equal to zero.
    /// The cross product z-axis component is returned.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the Euclidean distance from origin.
    pub fn length(&self) -> f64 {
        self.length_sqd().sqrt()
    }

    /// Returns the squared Euclidean distance from origin.
    pub fn length_sqd(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a vector with the same direction and a length of one.
    ///
    /// Returns `None` for zero-length or non-finite vectors.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }

        Some(self.scale(1.0 / len))
    }

    /// Returns `atan2(y, x)`.
    pub fn atan2(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the angle measured from the positive Y axis towards the positive X axis.
    pub fn angle(&self) -> f64 {
        core::f64::consts::FRAC_PI_2 - self.atan2()
    }

    /// Returns the unsigned angle between two vectors, in radians.
    ///
    /// Returns NaN when one of the vectors cannot be normalized.
    pub fn angle_to(&self, other: Point) -> f64 {
        match (self.normalized(), other.normalized()) {
            (Some(a), Some(b)) => a.dot(b).max(-1.0).min(1.0).acos(),
            _ => f64::NAN,
        }
    }

    /// Maps the point using the provided transform.
    pub fn transform(&self, ts: Transform) -> Self {
        ts.map_point(*self)
    }
}

impl core::ops::Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl core::ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Self::Output {
        Point::from_xy(self.x + other.x, self.y + other.y)
    }
}

impl core::ops::AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl core::ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Self::Output {
        Point::from_xy(self.x - other.x, self.y - other.y)
    }
}

impl core::ops::SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl core::ops::Mul for Point {
    type Output = Point;

    fn mul(self, other: Point) -> Self::Output {
        Point::from_xy(self.x * other.x, self.y * other.y)
    }
}

impl core::ops::Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{:.6},{:.6}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::from_xy(1.0, 2.0);
        let b = Point::from_xy(3.0, -4.0);
        assert_eq!(a + b, Point::from_xy(4.0, -2.0));
        assert_eq!(a - b, Point::from_xy(-2.0, 6.0));
        assert_eq!(a * 2.0, Point::from_xy(2.0, 4.0));
        assert_eq!(a * b, Point::from_xy(3.0, -8.0));
        assert_eq!(-a, Point::from_xy(-1.0, -2.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.cross(b), -10.0);
        assert_eq!(Point::from_xy(6.0, 8.0).div(Point::from_xy(2.0, 4.0)), Point::from_xy(3.0, 2.0));
    }

    #[test]
    fn length_and_normalize() {
        let v = Point::from_xy(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_sqd(), 25.0);

        let n = v.normalized().unwrap();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);

        assert_eq!(Point::zero().normalized(), None);
        assert_eq!(Point::from_xy(f64::NAN, 1.0).normalized(), None);
    }

    #[test]
    fn angles() {
        let right = Point::from_xy(1.0, 0.0);
        let down = Point::from_xy(0.0, 1.0);
        assert_eq!(right.atan2(), 0.0);
        assert_eq!(right.angle(), core::f64::consts::FRAC_PI_2);
        assert!((right.angle_to(down) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(right.angle_to(Point::zero()).is_nan());
    }

    #[test]
    fn cast_to_coordinates() {
        let points = [Point::from_xy(1.0, 2.0), Point::from_xy(3.0, 4.0)];
        let coords: &[f64] = bytemuck::cast_slice(&points);
        assert_eq!(coords, &[1.0, 2.0, 3.0, 4.0]);
    }
}
