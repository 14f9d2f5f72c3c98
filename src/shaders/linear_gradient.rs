// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::Point;

use super::gradient::{Gradient, GradientStop};
use crate::ColorU8;

/// A linear gradient handle.
///
/// Owns gradient stops. Geometry is provided per fill via [`Shader::LinearGradient`].
///
/// [`Shader::LinearGradient`]: crate::Shader::LinearGradient
#[derive(Clone, PartialEq, Debug)]
pub struct LinearGradient {
    gradient: Gradient,
    deleted: bool,
}

impl LinearGradient {
    /// Creates a new linear gradient from sorted stops.
    pub fn new(stops: &[GradientStop]) -> Self {
        LinearGradient {
            gradient: Gradient::new(stops.to_vec()),
            deleted: false,
        }
    }

    /// Replaces gradient stops.
    pub fn replace(&mut self, stops: &[GradientStop]) {
        self.gradient = Gradient::new(stops.to_vec());
        self.deleted = false;
    }

    /// Releases gradient stops.
    ///
    /// A deleted gradient is transparent.
    pub fn delete(&mut self) {
        self.gradient = Gradient::default();
        self.deleted = true;
    }

    /// Checks that the gradient was deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns gradient stops.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct LinearGradientContext<'a> {
    gradient: &'a Gradient,
    start: Point,
    dir: Point,
    len: f64,
}

impl<'a> LinearGradientContext<'a> {
    pub fn new(gradient: &'a LinearGradient, start: Point, end: Point) -> Self {
        let axis = end - start;
        let dir = match axis.normalized() {
            Some(v) => v,
            None => {
                log::warn!("linear gradient with zero length. Only the last stop will be used");
                Point::from_xy(f64::NAN, f64::NAN)
            }
        };

        LinearGradientContext {
            gradient: &gradient.gradient,
            start,
            dir,
            len: axis.length(),
        }
    }

    /// Projects a point onto the gradient axis.
    #[inline]
    pub fn color_at(&self, p: Point) -> ColorU8 {
        let t = (p - self.start).dot(self.dir) / self.len;
        self.gradient.color_at(t)
    }
}
