// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::{IntSize, Point};

use super::{Blitter, SampleBuffer, Shape};

struct Triangle<'a>(&'a [Point; 3]);

impl Shape for Triangle<'_> {
    fn y_bounds(&self) -> (f64, f64) {
        let [a, b, c] = *self.0;
        (a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y))
    }

    #[inline]
    fn span_at(&self, y: f64) -> Option<(f64, f64)> {
        triangle_span(self.0, y)
    }

    #[inline]
    fn uv_at(&self, _: Point) -> Point {
        Point::zero()
    }
}

/// Returns the left and right X of a triangle at a given Y.
///
/// Returns `None` when `y` is above or at the top vertex, or below the bottom one.
pub fn triangle_span(tri: &[Point; 3], y: f64) -> Option<(f64, f64)> {
    let [mut a, mut b, mut c] = *tri;

    // Sort by Y.
    if a.y > b.y {
        core::mem::swap(&mut a, &mut b);
    }
    if b.y > c.y {
        core::mem::swap(&mut b, &mut c);
        if a.y > b.y {
            core::mem::swap(&mut a, &mut b);
        }
    }

    if y <= a.y || y > c.y {
        return None;
    }

    // The long edge is always a-c. The short one switches at the middle vertex.
    let r = lerp_x(a, c, y);
    let l = if y <= b.y && a.y < b.y {
        lerp_x(a, b, y)
    } else {
        lerp_x(b, c, y)
    };

    if l > r {
        Some((r, l))
    } else {
        Some((l, r))
    }
}

#[inline]
fn lerp_x(p0: Point, p1: Point, y: f64) -> f64 {
    let t = (y - p0.y) / (p1.y - p0.y);
    (p1.x - p0.x) * t + p0.x
}

/// Fills a triangle without anti-aliasing.
///
/// Non-finite and off-buffer triangles paint nothing.
pub fn fill_triangle(tri: &[Point; 3], size: IntSize, blitter: &mut dyn Blitter) {
    if !super::all_finite(tri) {
        return;
    }

    super::fill_shape(&Triangle(tri), size, blitter);
}

/// Fills a triangle using an `(level + 1)²` sub-sample grid per pixel.
///
/// Fully covered pixels go directly to the `blitter`, partially covered ones
/// are accumulated in `samples`.
pub fn fill_triangle_aa(
    tri: &[Point; 3],
    level: u8,
    size: IntSize,
    samples: &mut SampleBuffer,
    blitter: &mut dyn Blitter,
) {
    if !super::all_finite(tri) {
        return;
    }

    super::msaa::fill_shape(&Triangle(tri), level, size, samples, blitter);
}
