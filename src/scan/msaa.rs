// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use softcanvas_geom::{IntSize, Point};

use super::{Blitter, Shape};

/// The maximum supported multi-sampling level.
///
/// Level `N` uses an `(N + 1)²` sub-sample grid.
pub const MAX_MSAA_LEVEL: u8 = 4;

const MAX_ROWS: usize = MAX_MSAA_LEVEL as usize + 1;

/// A single inside sub-sample of a partially covered pixel.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Sample {
    /// Pixel X.
    pub x: u32,
    /// Pixel Y.
    pub y: u32,
    /// Sub-sample column.
    pub sub_x: u8,
    /// Sub-sample row.
    pub sub_y: u8,
    /// Sub-sample position in canvas space.
    pub pos: Point,
    /// Parametric quad position. Zero for triangles.
    pub uv: Point,
}

/// A growable arena of sub-samples.
///
/// Owned by the backend and reused across operations. A sub-sample is stored
/// only once per operation, even when several triangles cover it.
#[derive(Default, Debug)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
    seen: HashSet<(u32, u32, u8, u8)>,
}

impl SampleBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all samples, keeping the allocations.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.seen.clear();
    }

    /// Checks that the buffer has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Adds a sample unless the same sub-sample of the same pixel was already added.
    pub fn push(&mut self, sample: Sample) {
        if self.seen.insert((sample.x, sample.y, sample.sub_x, sample.sub_y)) {
            self.samples.push(sample);
        }
    }

    /// Groups samples by pixel.
    ///
    /// Pixels are yielded in row-major order.
    pub fn pixels(&mut self) -> PixelSamples<'_> {
        self.samples.sort_by_key(|s| (s.y, s.x));
        PixelSamples { samples: &self.samples }
    }
}

/// An iterator over per-pixel sample groups.
#[derive(Debug)]
pub struct PixelSamples<'a> {
    samples: &'a [Sample],
}

impl<'a> Iterator for PixelSamples<'a> {
    type Item = &'a [Sample];

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.samples.first()?;
        let len = self
            .samples
            .iter()
            .position(|s| s.x != first.x || s.y != first.y)
            .unwrap_or(self.samples.len());

        let (group, rest) = self.samples.split_at(len);
        self.samples = rest;
        Some(group)
    }
}

/// Fills a shape using a sub-sample grid.
pub(crate) fn fill_shape<S: Shape>(
    shape: &S,
    level: u8,
    size: IntSize,
    samples: &mut SampleBuffer,
    blitter: &mut dyn Blitter,
) {
    let (top, bottom) = match super::row_range(shape.y_bounds(), size.height()) {
        Some(v) => v,
        None => return,
    };

    let grid = level.min(MAX_MSAA_LEVEL) + 1;
    let step = 1.0 / f64::from(grid);
    let sub = |v: u32, i: u8| f64::from(v) + step * 0.5 + f64::from(i) * step;

    let width = f64::from(size.width());
    for y in top..=bottom {
        let mut spans = ArrayVec::<Option<(f64, f64)>, MAX_ROWS>::new();
        let mut min_l = f64::MAX;
        let mut max_r = 0.0f64;
        for j in 0..grid {
            let span = shape.span_at(sub(y, j)).and_then(|s| super::clamp_span(s, width));
            if let Some((l, r)) = span {
                min_l = min_l.min(l);
                max_r = max_r.max(r);
            }

            spans.push(span);
        }

        if spans.iter().all(Option::is_none) {
            continue;
        }

        let (first, last) = super::columns(min_l, max_r, size.width());
        for x in first..=last {
            let fully_covered = spans.iter().all(|span| match *span {
                Some((l, r)) => (0..grid).all(|i| {
                    let sx = sub(x, i);
                    sx >= l && sx < r
                }),
                None => false,
            });

            if fully_covered {
                let center = Point::from_xy(f64::from(x) + 0.5, f64::from(y) + 0.5);
                blitter.blit_pixel(x, y, shape.uv_at(center));
                continue;
            }

            for (j, span) in spans.iter().enumerate() {
                let (l, r) = match *span {
                    Some(v) => v,
                    None => continue,
                };

                let j = j as u8;
                for i in 0..grid {
                    let sx = sub(x, i);
                    if sx >= l && sx < r {
                        let pos = Point::from_xy(sx, sub(y, j));
                        samples.push(Sample {
                            x,
                            y,
                            sub_x: i,
                            sub_y: j,
                            pos,
                            uv: shape.uv_at(pos),
                        });
                    }
                }
            }
        }
    }
}
