// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::Point;

use super::gradient::{Gradient, GradientStop};
use crate::ColorU8;

/// A two point conical gradient handle.
///
/// Owns gradient stops. Circles are provided per fill via [`Shader::RadialGradient`].
///
/// [`Shader::RadialGradient`]: crate::Shader::RadialGradient
#[derive(Clone, PartialEq, Debug)]
pub struct RadialGradient {
    gradient: Gradient,
    deleted: bool,
}

impl RadialGradient {
    /// Creates a new radial gradient from sorted stops.
    pub fn new(stops: &[GradientStop]) -> Self {
        RadialGradient {
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
pub(crate) struct RadialGradientContext<'a> {
    gradient: &'a Gradient,
    from: Point,
    radius_from: f64,
    // Center delta and radius delta between circles.
    cd: Point,
    dr: f64,
    // The quadratic `a` coefficient. Doesn't depend on the point.
    a: f64,
}

impl<'a> RadialGradientContext<'a> {
    pub fn new(
        gradient: &'a RadialGradient,
        from: Point,
        to: Point,
        radius_from: f64,
        radius_to: f64,
    ) -> Self {
        let cd = to - from;
        let dr = radius_to - radius_from;
        RadialGradientContext {
            gradient: &gradient.gradient,
            from,
            radius_from,
            cd,
            dr,
            a: cd.length_sqd() - dr * dr,
        }
    }

    /// Finds the largest `t` such that the point lies on the circle
    /// interpolated between the two circles at `t`.
    pub fn color_at(&self, p: Point) -> ColorU8 {
        let pd = p - self.from;
        let b = pd.dot(self.cd) + self.radius_from * self.dr;
        let c = pd.length_sqd() - self.radius_from * self.radius_from;

        let d = (b * b - c * self.a).sqrt();
        let t1 = (b - d) / self.a;
        let t2 = (b + d) / self.a;
        if t1.is_nan() && t2.is_nan() {
            return ColorU8::TRANSPARENT;
        }

        // `max` ignores NaN.
        self.gradient.color_at(t1.max(t2))
    }
}
