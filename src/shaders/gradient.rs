// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::ColorU8;

/// A gradient point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GradientStop {
    /// Stop position. Not clamped.
    pub position: f64,
    /// Stop color.
    pub color: ColorU8,
}

impl GradientStop {
    /// Creates a new gradient point.
    pub fn new(position: f64, color: ColorU8) -> Self {
        GradientStop { position, color }
    }
}

/// A list of gradient stops.
///
/// Stops must be sorted by position in ascending order. This is not checked.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Creates a new gradient.
    pub fn new(stops: Vec<GradientStop>) -> Self {
        debug_assert!(stops.windows(2).all(|w| w[0].position <= w[1].position));
        Gradient { stops }
    }

    /// Returns gradient stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Returns a color at the specified position.
    ///
    /// Positions outside the stops range are clamped to the first or last color.
    /// An empty gradient is transparent.
    pub fn color_at(&self, pos: f64) -> ColorU8 {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return ColorU8::TRANSPARENT,
        };

        // The first stop past `pos`. The one before it is the last one at or before `pos`.
        let after_idx = match self.stops.iter().position(|s| s.position > pos) {
            Some(0) => return first.color,
            Some(idx) => idx,
            None => return last.color,
        };

        let before = self.stops[after_idx - 1];
        let after = self.stops[after_idx];
        let t = (pos - before.position) / (after.position - before.position);

        let lerp = |c1: u8, c2: u8| -> u8 {
            let c1 = f64::from(c1);
            let c2 = f64::from(c2);
            ((c2 - c1) * t + c1).round() as u8
        };

        let (c1, c2) = (before.color, after.color);
        ColorU8::from_rgba(
            lerp(c1.red(), c2.red()),
            lerp(c1.green(), c2.green()),
            lerp(c1.blue(), c2.blue()),
            lerp(c1.alpha(), c2.alpha()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> Gradient {
        Gradient::new(vec![
            GradientStop::new(0.0, ColorU8::BLACK),
            GradientStop::new(1.0, ColorU8::WHITE),
        ])
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(Gradient::default().color_at(0.5), ColorU8::TRANSPARENT);

        let g = Gradient::new(vec![GradientStop::new(0.3, ColorU8::WHITE)]);
        assert_eq!(g.color_at(-10.0), ColorU8::WHITE);
        assert_eq!(g.color_at(10.0), ColorU8::WHITE);
    }

    #[test]
    fn endpoints_and_clamping() {
        let g = black_to_white();
        assert_eq!(g.color_at(0.0), ColorU8::BLACK);
        assert_eq!(g.color_at(1.0), ColorU8::WHITE);
        assert_eq!(g.color_at(-0.5), ColorU8::BLACK);
        assert_eq!(g.color_at(1.5), ColorU8::WHITE);
    }

    #[test]
    fn midpoint() {
        let c = black_to_white().color_at(0.5);
        assert_eq!(c, ColorU8::from_rgba(128, 128, 128, 255));
    }

    #[test]
    fn hard_stop() {
        let red = ColorU8::from_rgba(255, 0, 0, 255);
        let g = Gradient::new(vec![
            GradientStop::new(0.0, ColorU8::BLACK),
            GradientStop::new(0.5, ColorU8::BLACK),
            GradientStop::new(0.5, red),
            GradientStop::new(1.0, red),
        ]);

        assert_eq!(g.color_at(0.49), ColorU8::BLACK);
        assert_eq!(g.color_at(0.5), red);
    }
}
