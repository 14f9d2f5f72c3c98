// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

mod gradient;
mod linear_gradient;
mod pattern;
mod radial_gradient;

pub use gradient::{Gradient, GradientStop};
pub use linear_gradient::LinearGradient;
pub use pattern::{ImagePattern, ImagePatternData, Repeat};
pub use radial_gradient::RadialGradient;

use softcanvas_geom::Point;

use crate::ColorU8;

use linear_gradient::LinearGradientContext;
use pattern::PatternContext;
use radial_gradient::RadialGradientContext;

/// A shader specifies the source color(s) for what is being drawn.
///
/// Gradient handles only own stops, so the gradient geometry is stored here.
#[derive(Clone, Copy, Debug)]
pub enum Shader<'a> {
    /// A solid color shader.
    SolidColor(ColorU8),
    /// A linear gradient shader.
    LinearGradient {
        /// Gradient stops.
        gradient: &'a LinearGradient,
        /// Position of the 0 stop.
        start: Point,
        /// Position of the 1 stop.
        end: Point,
    },
    /// A two point conical gradient shader.
    RadialGradient {
        /// Gradient stops.
        gradient: &'a RadialGradient,
        /// Center of the 0 stop circle.
        from: Point,
        /// Center of the 1 stop circle.
        to: Point,
        /// Radius of the 0 stop circle.
        radius_from: f64,
        /// Radius of the 1 stop circle.
        radius_to: f64,
    },
    /// An image pattern shader.
    Pattern(&'a ImagePattern<'a>),
}

impl Default for Shader<'_> {
    fn default() -> Self {
        Shader::SolidColor(ColorU8::BLACK)
    }
}

/// A shader resolved into a position to color function.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ShaderContext<'a> {
    Solid(ColorU8),
    Linear(LinearGradientContext<'a>),
    Radial(RadialGradientContext<'a>),
    Pattern(PatternContext<'a>),
}

impl<'a> ShaderContext<'a> {
    /// Resolves a shader once per operation.
    pub fn new(shader: &Shader<'a>) -> Self {
        match *shader {
            Shader::SolidColor(c) => ShaderContext::Solid(c),
            Shader::LinearGradient { gradient, start, end } => {
                ShaderContext::Linear(LinearGradientContext::new(gradient, start, end))
            }
            Shader::RadialGradient { gradient, from, to, radius_from, radius_to } => {
                ShaderContext::Radial(RadialGradientContext::new(
                    gradient,
                    from,
                    to,
                    radius_from,
                    radius_to,
                ))
            }
            Shader::Pattern(pattern) => ShaderContext::Pattern(PatternContext::new(pattern)),
        }
    }

    #[inline]
    pub fn color_at(&self, p: Point) -> ColorU8 {
        match self {
            ShaderContext::Solid(c) => *c,
            ShaderContext::Linear(ctx) => ctx.color_at(p),
            ShaderContext::Radial(ctx) => ctx.color_at(p),
            ShaderContext::Pattern(ctx) => ctx.color_at(p),
        }
    }
}
