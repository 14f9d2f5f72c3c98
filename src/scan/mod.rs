// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Scanline conversion of pre-tessellated geometry.

pub mod msaa;
pub mod quad;
pub mod triangle;

use arrayref::array_ref;
use softcanvas_geom::{IntSize, Point};

pub use msaa::{Sample, SampleBuffer, MAX_MSAA_LEVEL};
pub use quad::{fill_quad, fill_quad_aa, quad_area, QuadBasis};
pub use triangle::{fill_triangle, fill_triangle_aa, triangle_span};

/// Blitter is responsible for actually writing pixels into memory.
///
/// Scan converters only report covered pixels. Clipping, deduplication
/// and shading are up to the implementation.
pub trait Blitter {
    /// Blits a single fully covered pixel.
    ///
    /// `uv` is the parametric position of the pixel center inside a quad.
    /// Triangles always pass a zero point.
    fn blit_pixel(&mut self, x: u32, y: u32, uv: Point);
}

/// A convex shape that can be scan converted row by row.
pub(crate) trait Shape {
    /// Returns the topmost and the bottommost Y.
    fn y_bounds(&self) -> (f64, f64);

    /// Returns the `[left, right)` span at a given Y.
    fn span_at(&self, y: f64) -> Option<(f64, f64)>;

    /// Returns the parametric position of a point.
    fn uv_at(&self, p: Point) -> Point;
}

/// Splits a flat list of points into triangles.
///
/// Exactly 4 points are treated as two triangles sharing the 0-2 diagonal.
/// Otherwise, points are consumed in triples and trailing points are ignored.
pub fn for_each_triangle<F: FnMut(&[Point; 3])>(points: &[Point], mut f: F) {
    if points.len() == 4 {
        f(&[points[0], points[1], points[2]]);
        f(&[points[0], points[2], points[3]]);
        return;
    }

    for i in 0..points.len() / 3 {
        f(array_ref!(points, i * 3, 3));
    }
}

/// Fills a shape without anti-aliasing.
///
/// A pixel is covered when its center is inside the `[left, right)` span of its row.
pub(crate) fn fill_shape<S: Shape>(shape: &S, size: IntSize, blitter: &mut dyn Blitter) {
    let (top, bottom) = match row_range(shape.y_bounds(), size.height()) {
        Some(v) => v,
        None => return,
    };

    let width = f64::from(size.width());
    for y in top..=bottom {
        let (l, r) = match shape.span_at(f64::from(y) + 0.5).and_then(|s| clamp_span(s, width)) {
            Some(v) => v,
            None => continue,
        };

        let (first, last) = columns(l, r, size.width());
        for x in first..=last {
            let fx = f64::from(x) + 0.5;
            if fx < l || fx >= r {
                continue;
            }

            let uv = shape.uv_at(Point::from_xy(fx, f64::from(y) + 0.5));
            blitter.blit_pixel(x, y, uv);
        }
    }
}

/// Returns the inclusive range of rows touched by the vertical bounds.
///
/// Returns `None` when the range is outside the buffer.
pub(crate) fn row_range((top, bottom): (f64, f64), height: u32) -> Option<(u32, u32)> {
    if !top.is_finite() || !bottom.is_finite() {
        return None;
    }

    let top = top.floor();
    let bottom = bottom.ceil();
    if top >= f64::from(height) || bottom < 0.0 {
        return None;
    }

    let top = top.max(0.0) as u32;
    let bottom = (bottom as u32).min(height - 1);
    Some((top, bottom))
}

/// Clamps a span to `[0, width]`.
///
/// Returns `None` when nothing is left.
pub(crate) fn clamp_span((l, r): (f64, f64), width: f64) -> Option<(f64, f64)> {
    // Also rejects NaN.
    if !(l <= width && r >= 0.0) {
        return None;
    }

    let l = l.max(0.0);
    let r = r.min(width);
    if l >= r {
        return None;
    }

    Some((l, r))
}

/// Returns the inclusive range of columns that can be covered by a clamped span.
#[inline]
pub(crate) fn columns(l: f64, r: f64, width: u32) -> (u32, u32) {
    let first = l.floor() as u32;
    let last = (r.ceil() as u32).min(width - 1);
    (first, last)
}

#[inline]
pub(crate) fn all_finite(points: &[Point]) -> bool {
    bytemuck::cast_slice::<Point, f64>(points).iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_points_share_a_diagonal() {
        let pts = [
            Point::from_xy(0.0, 0.0),
            Point::from_xy(1.0, 0.0),
            Point::from_xy(1.0, 1.0),
            Point::from_xy(0.0, 1.0),
        ];

        let mut tris = Vec::new();
        for_each_triangle(&pts, |t| tris.push(*t));
        assert_eq!(tris, vec![[pts[0], pts[1], pts[2]], [pts[0], pts[2], pts[3]]]);
    }

    #[test]
    fn trailing_points_are_ignored() {
        let pts = [Point::zero(); 8];
        let mut count = 0;
        for_each_triangle(&pts, |_| count += 1);
        assert_eq!(count, 2);

        count = 0;
        for_each_triangle(&pts[..2], |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn rows() {
        assert_eq!(row_range((-5.0, 2.5), 10), Some((0, 3)));
        assert_eq!(row_range((2.5, 100.0), 10), Some((2, 9)));
        assert_eq!(row_range((10.0, 12.0), 10), None);
        assert_eq!(row_range((-3.0, -1.0), 10), None);
        assert_eq!(row_range((f64::NAN, 1.0), 10), None);
    }

    #[test]
    fn spans() {
        assert_eq!(clamp_span((-1.0, 5.0), 4.0), Some((0.0, 4.0)));
        assert_eq!(clamp_span((5.0, 6.0), 4.0), None);
        assert_eq!(clamp_span((-3.0, -1.0), 4.0), None);
        assert_eq!(clamp_span((2.0, 2.0), 4.0), None);
    }
}
