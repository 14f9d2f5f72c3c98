// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Straight alpha compositing.

use crate::ColorU8;

/// Blends `src` over `dst` using source-over compositing.
///
/// Both colors are unpremultiplied. Intermediates are computed in `f64`
/// and each channel is rounded to the nearest integer at the end.
pub fn source_over(src: ColorU8, dst: ColorU8) -> ColorU8 {
    let a1 = normalize(src.alpha());
    let a2 = normalize(dst.alpha());

    let mix = |c1: u8, c2: u8| -> u8 {
        let c1 = normalize(c1);
        let c2 = normalize(c2);
        denormalize((c1 - c2) * a1 + c2)
    };

    let a = ((a1 - a2) * a1 + a2).max(a2);

    ColorU8::from_rgba(
        mix(src.red(), dst.red()),
        mix(src.green(), dst.green()),
        mix(src.blue(), dst.blue()),
        denormalize(a),
    )
}

/// Multiplies color's alpha by a coverage value.
///
/// The result is truncated.
#[inline]
pub fn scale_alpha(color: ColorU8, coverage: u8) -> ColorU8 {
    let a = u32::from(color.alpha()) * u32::from(coverage) / 255;
    color.with_alpha(a as u8)
}

/// Accumulated channel sums of several colors.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct ColorSum {
    r: u32,
    g: u32,
    b: u32,
    a: u32,
}

impl ColorSum {
    #[inline]
    pub fn add(&mut self, c: ColorU8) {
        self.r += u32::from(c.red());
        self.g += u32::from(c.green());
        self.b += u32::from(c.blue());
        self.a += u32::from(c.alpha());
    }

    /// Returns an integer mean, dividing by `count`, not by the number of added colors.
    #[inline]
    pub fn average(&self, count: u32) -> ColorU8 {
        debug_assert!(count > 0);
        let avg = |v: u32| (v / count).min(255) as u8;
        ColorU8::from_rgba(avg(self.r), avg(self.g), avg(self.b), avg(self.a))
    }
}

#[inline]
fn normalize(v: u8) -> f64 {
    f64::from(v) / 255.0
}

#[inline]
fn denormalize(v: f64) -> u8 {
    (v * 255.0).round().max(0.0).min(255.0) as u8
}
