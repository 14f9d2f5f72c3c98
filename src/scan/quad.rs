// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::{IntSize, Point};

use super::{triangle_span, Blitter, SampleBuffer, Shape};

/// A parametric basis of a quad.
///
/// Corners are expected in the following order: top-left, bottom-left,
/// bottom-right, top-right, in terms of the image mapped onto the quad.
/// `u` runs along the top edge and `v` along the left one.
#[derive(Copy, Clone, Debug)]
pub struct QuadBasis {
    origin: Point,
    left: Point,
    top: Point,
    left_len: f64,
    top_len: f64,
}

impl QuadBasis {
    /// Creates a new basis.
    ///
    /// Returns `None` when the left or top edge has zero or non-finite length,
    /// or when both edges are parallel.
    pub fn new(quad: &[Point; 4]) -> Option<Self> {
        let left = quad[1] - quad[0];
        let top = quad[3] - quad[0];
        if left.cross(top) == 0.0 {
            return None;
        }

        Some(QuadBasis {
            origin: quad[0],
            left: left.normalized()?,
            top: top.normalized()?,
            left_len: left.length(),
            top_len: top.length(),
        })
    }

    /// Solves the parametric position of a point.
    ///
    /// The pivot is the left edge's larger component, so we never divide by a near-zero value.
    pub fn uv_at(&self, p: Point) -> Point {
        let d = p - self.origin;
        let l = self.left;
        let t = self.top;

        let (tx, ty) = if l.x.abs() > l.y.abs() {
            let k = l.y / l.x;
            let tx = (d.y - d.x * k) / (t.y - t.x * k);
            (tx, (d.x - t.x * tx) / l.x)
        } else {
            let k = l.x / l.y;
            let tx = (d.x - d.y * k) / (t.x - t.y * k);
            (tx, (d.y - t.y * tx) / l.y)
        };

        Point::from_xy(tx / self.top_len, ty / self.left_len)
    }
}

struct Quad<'a> {
    tri1: [Point; 3],
    tri2: [Point; 3],
    points: &'a [Point; 4],
    basis: QuadBasis,
}

impl<'a> Quad<'a> {
    fn new(points: &'a [Point; 4]) -> Option<Self> {
        if !super::all_finite(points) {
            return None;
        }

        Some(Quad {
            tri1: [points[0], points[1], points[2]],
            tri2: [points[0], points[2], points[3]],
            points,
            basis: QuadBasis::new(points)?,
        })
    }
}

impl Shape for Quad<'_> {
    fn y_bounds(&self) -> (f64, f64) {
        let ys = self.points.iter().map(|p| p.y);
        let top = ys.clone().fold(f64::MAX, f64::min);
        let bottom = ys.fold(f64::MIN, f64::max);
        (top, bottom)
    }

    fn span_at(&self, y: f64) -> Option<(f64, f64)> {
        // Rows crossing the shared diagonal get the union of both halves.
        match (triangle_span(&self.tri1, y), triangle_span(&self.tri2, y)) {
            (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        }
    }

    #[inline]
    fn uv_at(&self, p: Point) -> Point {
        self.basis.uv_at(p)
    }
}

/// Returns the area of the parallelogram spanned by the left and top edges.
pub fn quad_area(quad: &[Point; 4]) -> f64 {
    let left = quad[1] - quad[0];
    let top = quad[3] - quad[0];
    left.cross(top).abs()
}

/// Fills a quad without anti-aliasing.
///
/// Each pixel is reported together with the parametric position of its center.
/// Degenerate quads paint nothing.
pub fn fill_quad(quad: &[Point; 4], size: IntSize, blitter: &mut dyn Blitter) {
    match Quad::new(quad) {
        Some(quad) => super::fill_shape(&quad, size, blitter),
        None => log::warn!("a degenerate quad cannot be filled"),
    }
}

/// Fills a quad using an `(level + 1)²` sub-sample grid per pixel.
pub fn fill_quad_aa(
    quad: &[Point; 4],
    level: u8,
    size: IntSize,
    samples: &mut SampleBuffer,
    blitter: &mut dyn Blitter,
) {
    match Quad::new(quad) {
        Some(quad) => super::msaa::fill_shape(&quad, level, size, samples, blitter),
        None => log::warn!("a degenerate quad cannot be filled"),
    }
}
