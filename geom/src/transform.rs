// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Point;

/// An affine transformation matrix.
///
/// A 2x2 linear part plus a translation.
/// A point is mapped as `x' = sx * x + kx * y + tx` and `y' = ky * x + sy * y + ty`.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    pub sx: f64,
    pub ky: f64,
    pub kx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            sx: 1.0,
            ky: 0.0,
            kx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    /// Creates an identity transform.
    pub fn identity() -> Self {
        Transform::default()
    }

    /// Creates a new `Transform`.
    ///
    /// We are using column-major-column-vector matrix notation, therefore it's ky-kx, not kx-ky.
    pub fn from_row(sx: f64, ky: f64, kx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Transform { sx, ky, kx, sy, tx, ty }
    }

    /// Creates a new translating `Transform`.
    pub fn from_translate(tx: f64, ty: f64) -> Self {
        Transform::from_row(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Creates a new scaling `Transform`.
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Transform::from_row(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Creates a new rotating `Transform`.
    ///
    /// `radians` is measured clockwise in a Y-down coordinate system.
    pub fn from_rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Transform::from_row(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Checks that transform is identity.
    pub fn is_identity(&self) -> bool {
        *self == Transform::default()
    }

    /// Checks that transform is translate-only.
    pub fn is_translate(&self) -> bool {
        !self.has_scale() && !self.has_skew() && self.has_translate()
    }

    /// Checks that transform contains only scale and translate.
    pub fn is_scale_translate(&self) -> bool {
        (self.has_scale() || self.has_translate()) && !self.has_skew()
    }

    /// Checks that transform contains a scale part.
    pub fn has_scale(&self) -> bool {
        self.sx != 1.0 || self.sy != 1.0
    }

    /// Checks that transform contains a skew part.
    pub fn has_skew(&self) -> bool {
        self.kx != 0.0 || self.ky != 0.0
    }

    /// Checks that transform contains a translate part.
    pub fn has_translate(&self) -> bool {
        self.tx != 0.0 || self.ty != 0.0
    }

    /// Checks that all transform components are finite.
    pub fn is_finite(&self) -> bool {
        self.sx.is_finite()
            && self.ky.is_finite()
            && self.kx.is_finite()
            && self.sy.is_finite()
            && self.tx.is_finite()
            && self.ty.is_finite()
    }

    /// Pre-scales the current transform.
    #[must_use]
    pub fn pre_scale(&self, sx: f64, sy: f64) -> Self {
        self.pre_concat(Transform::from_scale(sx, sy))
    }

    /// Post-scales the current transform.
    #[must_use]
    pub fn post_scale(&self, sx: f64, sy: f64) -> Self {
        self.post_concat(Transform::from_scale(sx, sy))
    }

    /// Pre-translates the current transform.
    #[must_use]
    pub fn pre_translate(&self, tx: f64, ty: f64) -> Self {
        self.pre_concat(Transform::from_translate(tx, ty))
    }

    /// Post-translates the current transform.
    #[must_use]
    pub fn post_translate(&self, tx: f64, ty: f64) -> Self {
        self.post_concat(Transform::from_translate(tx, ty))
    }

    /// Pre-concats the current transform.
    ///
    /// `other` is applied first.
    #[must_use]
    pub fn pre_concat(&self, other: Self) -> Self {
        concat(*self, other)
    }

    /// Post-concats the current transform.
    ///
    /// `self` is applied first.
    #[must_use]
    pub fn post_concat(&self, other: Self) -> Self {
        concat(other, *self)
    }

    /// Maps a single point.
    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        Point::from_xy(
            p.x * self.sx + p.y * self.kx + self.tx,
            p.x * self.ky + p.y * self.sy + self.ty,
        )
    }

    /// Transforms a slice of points using the current transform.
    pub fn map_points(&self, points: &mut [Point]) {
        if points.is_empty() || self.is_identity() {
            return;
        }

        if self.is_translate() {
            for p in points {
                p.x += self.tx;
                p.y += self.ty;
            }
        } else {
            for p in points {
                *p = self.map_point(*p);
            }
        }
    }
}

fn concat(a: Transform, b: Transform) -> Transform {
    if a.is_identity() {
        b
    } else if b.is_identity() {
        a
    } else {
        Transform::from_row(
            a.sx * b.sx + a.kx * b.ky,
            a.ky * b.sx + a.sy * b.ky,
            a.sx * b.kx + a.kx * b.sy,
            a.ky * b.kx + a.sy * b.sy,
            a.sx * b.tx + a.kx * b.ty + a.tx,
            a.ky * b.tx + a.sy * b.ty + a.ty,
        )
    }
}
