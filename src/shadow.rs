// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayref::array_ref;
use softcanvas_geom::{Point, Transform};

use crate::{Backend, ColorU8, FillStyle, Mask, Shader, SoftwareBackend};

/// A drop shadow.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Shadow {
    /// Shadow color.
    ///
    /// Default: transparent
    pub color: ColorU8,
    /// Horizontal offset.
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
    /// Blur size.
    pub blur: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow {
            color: ColorU8::TRANSPARENT,
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
        }
    }
}

impl Shadow {
    /// Checks that the shadow produces any output.
    ///
    /// A shadow without an offset is hidden by the shape itself.
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent() && (self.offset_x != 0.0 || self.offset_y != 0.0)
    }
}

impl SoftwareBackend {
    /// Draws a shadow of a shape.
    ///
    /// The shape is filled with the shadow color, offset and blurred.
    /// `global_alpha` is multiplied into the shadow color alpha.
    ///
    /// When `mask` is set, `points` must be a quad.
    ///
    /// # Panics
    ///
    /// Panics when `mask` is set and `points` is not 4 points long.
    pub fn draw_shadow(
        &mut self,
        shadow: &Shadow,
        global_alpha: f64,
        points: &[Point],
        mask: Option<&Mask>,
        can_overlap: bool,
    ) {
        if !shadow.is_visible() {
            return;
        }

        let alpha = f64::from(shadow.color.alpha()) / 255.0 * global_alpha.max(0.0).min(1.0);
        let color = shadow.color.with_alpha((alpha * 255.0).round() as u8);
        let style = FillStyle {
            shader: Shader::SolidColor(color),
            blur: shadow.blur,
        };

        let offset = Point::from_xy(shadow.offset_x, shadow.offset_y);
        let mut shifted = core::mem::take(&mut self.shadow_points);
        shifted.clear();
        shifted.extend(points.iter().map(|p| *p + offset));

        match mask {
            Some(mask) => {
                if shifted.len() != 4 {
                    self.shadow_points = shifted;
                    panic!("invalid number of points to fill with mask, must be 4");
                }

                self.fill_image_mask(&style, mask, array_ref!(shifted, 0, 4));
            }
            None => {
                self.fill(&style, &shifted, Transform::identity(), can_overlap);
            }
        }

        self.shadow_points = shifted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_shadows() {
        let mut shadow = Shadow::default();
        assert!(!shadow.is_visible());

        shadow.color = ColorU8::BLACK;
        assert!(!shadow.is_visible());

        shadow.offset_y = 2.0;
        assert!(shadow.is_visible());
    }

    #[test]
    #[should_panic(expected = "must be 4")]
    fn mask_requires_a_quad() {
        let mut backend = SoftwareBackend::new(4, 4).unwrap();
        let shadow = Shadow { color: ColorU8::BLACK, offset_x: 1.0, ..Shadow::default() };
        let mask = Mask::new(2, 2).unwrap();
        let points = [Point::zero(), Point::from_xy(2.0, 0.0), Point::from_xy(0.0, 2.0)];
        backend.draw_shadow(&shadow, 1.0, &points, Some(&mask), false);
    }
}
