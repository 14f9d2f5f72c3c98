// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::Point;

use crate::blend::{self, ColorSum};
use crate::clip::ClipMask;
use crate::scan::{self, Blitter, SampleBuffer};
use crate::stencil::Stencil;
use crate::{ColorU8, Pixmap, Shader};

/// Controls how a shape should be painted.
#[derive(Clone, Copy, Debug)]
pub struct FillStyle<'a> {
    /// A paint shader.
    ///
    /// Default: black color
    pub shader: Shader<'a>,

    /// A blur size.
    ///
    /// Values <= 0 disable the blur.
    ///
    /// Default: 0
    pub blur: f64,
}

impl Default for FillStyle<'_> {
    fn default() -> Self {
        FillStyle {
            shader: Shader::default(),
            blur: 0.0,
        }
    }
}

impl<'a> FillStyle<'a> {
    /// Creates a solid color style without blur.
    pub fn solid(color: ColorU8) -> Self {
        FillStyle {
            shader: Shader::SolidColor(color),
            blur: 0.0,
        }
    }
}

/// Where a directly blitted pixel is shaded.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) enum ShadeAt {
    /// The pixel's integer position. Used by triangle fills.
    Origin,
    /// The pixel's center. Used by quad fills.
    Center,
}

/// Everything a paint operation writes to.
pub(crate) struct Target<'a> {
    pub pixmap: &'a mut Pixmap,
    pub clip: &'a ClipMask,
    pub stencil: &'a mut Stencil,
    pub samples: &'a mut SampleBuffer,
    pub msaa: u8,
}

/// Blends shaded pixels into a pixmap, respecting the clip and the stencil.
struct PaintBlitter<'a, F> {
    pixmap: &'a mut Pixmap,
    clip: &'a ClipMask,
    stencil: &'a mut Stencil,
    shade_at: ShadeAt,
    paint: F,
}

impl<F: Fn(Point, Point) -> ColorU8> PaintBlitter<'_, F> {
    /// Claims a pixel for this operation.
    #[inline]
    fn claim(&mut self, x: u32, y: u32) -> bool {
        self.clip.is_visible(x, y) && self.stencil.check_and_set(x, y)
    }

    #[inline]
    fn blend(&mut self, x: u32, y: u32, color: ColorU8) {
        if let Some(dst) = self.pixmap.pixel(x, y) {
            self.pixmap.set_pixel(x, y, blend::source_over(color, dst));
        }
    }

    /// Blends averaged sub-samples of partially covered pixels.
    ///
    /// The sum is divided by the whole grid size, so missing sub-samples count as transparent.
    fn resolve(&mut self, samples: &mut SampleBuffer, level: u8) {
        let grid = u32::from(level.min(scan::MAX_MSAA_LEVEL)) + 1;
        let count = grid * grid;

        for group in samples.pixels() {
            let (x, y) = (group[0].x, group[0].y);
            if !self.claim(x, y) {
                continue;
            }

            let mut sum = ColorSum::default();
            for s in group {
                sum.add((self.paint)(s.pos, s.uv));
            }

            self.blend(x, y, sum.average(count));
        }
    }
}

impl<F: Fn(Point, Point) -> ColorU8> Blitter for PaintBlitter<'_, F> {
    fn blit_pixel(&mut self, x: u32, y: u32, uv: Point) {
        if !self.claim(x, y) {
            return;
        }

        let pos = match self.shade_at {
            ShadeAt::Origin => Point::from_xy(f64::from(x), f64::from(y)),
            ShadeAt::Center => Point::from_xy(f64::from(x) + 0.5, f64::from(y) + 0.5),
        };

        let color = (self.paint)(pos, uv);
        if !color.is_transparent() {
            self.blend(x, y, color);
        }
    }
}

/// Fills a list of triangles.
///
/// `paint` receives a position and a zero parametric position.
pub(crate) fn fill_triangles<F>(target: Target<'_>, points: &[Point], paint: F)
where
    F: Fn(Point, Point) -> ColorU8,
{
    let Target { pixmap, clip, stencil, samples, msaa } = target;
    let size = pixmap.size();

    stencil.clear();
    let mut blitter = PaintBlitter {
        pixmap,
        clip,
        stencil,
        shade_at: ShadeAt::Origin,
        paint,
    };

    if msaa > 0 {
        samples.clear();
        scan::for_each_triangle(points, |tri| {
            scan::fill_triangle_aa(tri, msaa, size, samples, &mut blitter);
        });
        blitter.resolve(samples, msaa);
    } else {
        scan::for_each_triangle(points, |tri| {
            scan::fill_triangle(tri, size, &mut blitter);
        });
    }
}

/// Fills a quad.
///
/// `paint` receives a position and the parametric position inside the quad.
pub(crate) fn fill_quad<F>(target: Target<'_>, quad: &[Point; 4], paint: F)
where
    F: Fn(Point, Point) -> ColorU8,
{
    let Target { pixmap, clip, stencil, samples, msaa } = target;
    let size = pixmap.size();

    stencil.clear();
    let mut blitter = PaintBlitter {
        pixmap,
        clip,
        stencil,
        shade_at: ShadeAt::Center,
        paint,
    };

    if msaa > 0 {
        samples.clear();
        scan::fill_quad_aa(quad, msaa, size, samples, &mut blitter);
        blitter.resolve(samples, msaa);
    } else {
        scan::fill_quad(quad, size, &mut blitter);
    }
}

/// Writes transparent black over visible pixels.
struct ClearBlitter<'a> {
    pixmap: &'a mut Pixmap,
    clip: &'a ClipMask,
}

impl Blitter for ClearBlitter<'_> {
    fn blit_pixel(&mut self, x: u32, y: u32, _: Point) {
        if self.clip.is_visible(x, y) {
            self.pixmap.set_pixel(x, y, ColorU8::TRANSPARENT);
        }
    }
}

/// Clears a quad without anti-aliasing.
pub(crate) fn clear_quad(pixmap: &mut Pixmap, clip: &ClipMask, quad: &[Point; 4]) {
    let size = pixmap.size();
    let mut blitter = ClearBlitter { pixmap, clip };
    scan::for_each_triangle(quad, |tri| scan::fill_triangle(tri, size, &mut blitter));
}

/// Marks covered pixels in a stencil, ignoring the clip.
struct CoverageBlitter<'a>(&'a mut Stencil);

impl Blitter for CoverageBlitter<'_> {
    fn blit_pixel(&mut self, x: u32, y: u32, _: Point) {
        self.0.check_and_set(x, y);
    }
}

/// Intersects the clip with the coverage of a list of triangles.
///
/// The stencil is used as a scratch mask.
pub(crate) fn clip_triangles(clip: &mut ClipMask, stencil: &mut Stencil, points: &[Point]) {
    stencil.clear();

    let size = clip.as_mask().size();
    let mut blitter = CoverageBlitter(stencil);
    scan::for_each_triangle(points, |tri| scan::fill_triangle(tri, size, &mut blitter));

    clip.intersect(stencil.as_mask());
}

/// Composites `src` over `dst` ignoring the clip.
pub(crate) fn draw_pixmap(dst: &mut Pixmap, src: &Pixmap) {
    debug_assert_eq!(dst.size(), src.size());

    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        if !s.is_transparent() {
            *d = blend::source_over(*s, *d);
        }
    }
}
