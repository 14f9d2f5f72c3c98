// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::{IntRect, IntSize, Point, Rect, Transform};

use crate::clip::ClipMask;
use crate::painter::{self, Target};
use crate::scan::{self, SampleBuffer, MAX_MSAA_LEVEL};
use crate::shaders::ShaderContext;
use crate::stencil::Stencil;
use crate::{blend, blur};
use crate::{ColorU8, Error, FillStyle, Mask, Pixmap};
use crate::{GradientStop, Image, ImagePattern, ImagePatternData, ImageSource};
use crate::{LinearGradient, RadialGradient};

/// A rendering backend.
///
/// Consumes pre-tessellated geometry. Curves must be flattened by the caller.
pub trait Backend {
    /// Returns the framebuffer size.
    fn size(&self) -> IntSize;

    /// Resizes the framebuffer.
    ///
    /// All buffers are reallocated, content is lost and the clip is reset.
    /// On error, the backend is left unchanged.
    fn set_size(&mut self, width: u32, height: u32) -> Option<()>;

    /// Loads an image and builds its mip levels.
    fn load_image(&mut self, source: ImageSource) -> Result<Image, Error>;

    /// Creates a linear gradient handle.
    fn load_linear_gradient(&mut self, stops: &[GradientStop]) -> LinearGradient;

    /// Creates a radial gradient handle.
    fn load_radial_gradient(&mut self, stops: &[GradientStop]) -> RadialGradient;

    /// Creates an image pattern handle.
    fn load_image_pattern<'a>(&mut self, data: ImagePatternData<'a>) -> ImagePattern<'a>;

    /// Fills a quad with transparent black, respecting the clip.
    fn clear(&mut self, quad: &[Point; 4]);

    /// Fills triangles.
    ///
    /// Exactly 4 points are treated as two triangles sharing the 0-2 diagonal.
    /// Each pixel is painted at most once per call, regardless of `can_overlap`.
    fn fill(&mut self, style: &FillStyle, points: &[Point], transform: Transform, can_overlap: bool);

    /// Draws a part of an image onto a quad.
    ///
    /// Quad corners are: top-left, bottom-left, bottom-right, top-right.
    fn draw_image(&mut self, image: &Image, src_rect: Rect, quad: &[Point; 4], alpha: f64);

    /// Fills a quad using a coverage mask.
    fn fill_image_mask(&mut self, style: &FillStyle, mask: &Mask, quad: &[Point; 4]);

    /// Intersects the clip with triangles.
    fn clip(&mut self, points: &[Point]);

    /// Resets the clip.
    fn clear_clip(&mut self);

    /// Returns a copy of a framebuffer region.
    ///
    /// Returns `None` when the region is outside the framebuffer.
    fn get_image_data(&self, rect: IntRect) -> Option<Pixmap>;

    /// Copies pixels into the framebuffer as is, ignoring the clip.
    fn put_image_data(&mut self, pixmap: &Pixmap, x: i32, y: i32);
}

/// A CPU rasterizer.
///
/// Renders into an unpremultiplied RGBA pixmap.
#[derive(Debug)]
pub struct SoftwareBackend {
    pixmap: Pixmap,
    clip: ClipMask,
    stencil: Stencil,
    samples: SampleBuffer,
    blur_target: Pixmap,
    blur_scratch: Pixmap,
    points: Vec<Point>,
    pub(crate) shadow_points: Vec<Point>,
    msaa: u8,
}

impl SoftwareBackend {
    /// Creates a new backend with a transparent framebuffer.
    ///
    /// Anti-aliasing is disabled by default.
    ///
    /// Zero size in an error.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(SoftwareBackend {
            pixmap: Pixmap::new(width, height)?,
            clip: ClipMask::new(width, height)?,
            stencil: Stencil::new(width, height)?,
            samples: SampleBuffer::new(),
            blur_target: Pixmap::new(width, height)?,
            blur_scratch: Pixmap::new(width, height)?,
            points: Vec::new(),
            shadow_points: Vec::new(),
            msaa: 0,
        })
    }

    /// Sets the multi-sampling level.
    ///
    /// 0 disables anti-aliasing. Level `N` uses `(N + 1)²` samples per pixel.
    /// Values above [`MAX_MSAA_LEVEL`] are clamped.
    pub fn set_msaa(&mut self, level: u8) {
        if level > MAX_MSAA_LEVEL {
            log::warn!("MSAA level {} is not supported, using {}", level, MAX_MSAA_LEVEL);
        }

        self.msaa = level.min(MAX_MSAA_LEVEL);
    }

    /// Returns the multi-sampling level.
    pub fn msaa(&self) -> u8 {
        self.msaa
    }

    /// Returns the framebuffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Returns the clip mask.
    pub fn clip_mask(&self) -> &ClipMask {
        &self.clip
    }

    /// Encodes the framebuffer into a PNG data.
    #[cfg(feature = "png-format")]
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        self.pixmap.encode_png()
    }

    fn target(&mut self) -> Target<'_> {
        Target {
            pixmap: &mut self.pixmap,
            clip: &self.clip,
            stencil: &mut self.stencil,
            samples: &mut self.samples,
            msaa: self.msaa,
        }
    }

    /// Runs `draw` either directly or through the blur pass.
    ///
    /// Blurred content is drawn into a blank buffer, blurred and then
    /// composited over the framebuffer, ignoring the clip.
    fn paint<D: FnOnce(Target<'_>)>(&mut self, blur: f64, draw: D) {
        if !(blur > 0.0) {
            draw(self.target());
            return;
        }

        self.blur_target.fill(ColorU8::TRANSPARENT);
        core::mem::swap(&mut self.pixmap, &mut self.blur_target);
        draw(self.target());
        core::mem::swap(&mut self.pixmap, &mut self.blur_target);

        blur::box_blur(&mut self.blur_target, &mut self.blur_scratch, blur);
        painter::draw_pixmap(&mut self.pixmap, &self.blur_target);
    }
}

impl Backend for SoftwareBackend {
    fn size(&self) -> IntSize {
        self.pixmap.size()
    }

    fn set_size(&mut self, width: u32, height: u32) -> Option<()> {
        let mut resized = match SoftwareBackend::new(width, height) {
            Some(v) => v,
            None => {
                log::warn!("invalid framebuffer size {}x{}", width, height);
                return None;
            }
        };

        resized.samples = core::mem::take(&mut self.samples);
        resized.points = core::mem::take(&mut self.points);
        resized.shadow_points = core::mem::take(&mut self.shadow_points);
        resized.msaa = self.msaa;
        *self = resized;
        log::debug!("framebuffer resized to {}x{}", width, height);
        Some(())
    }

    fn load_image(&mut self, source: ImageSource) -> Result<Image, Error> {
        Image::from_source(source)
    }

    fn load_linear_gradient(&mut self, stops: &[GradientStop]) -> LinearGradient {
        LinearGradient::new(stops)
    }

    fn load_radial_gradient(&mut self, stops: &[GradientStop]) -> RadialGradient {
        RadialGradient::new(stops)
    }

    fn load_image_pattern<'a>(&mut self, data: ImagePatternData<'a>) -> ImagePattern<'a> {
        ImagePattern::new(data)
    }

    fn clear(&mut self, quad: &[Point; 4]) {
        painter::clear_quad(&mut self.pixmap, &self.clip, quad);
    }

    fn fill(&mut self, style: &FillStyle, points: &[Point], transform: Transform, _can_overlap: bool) {
        let ctx = ShaderContext::new(&style.shader);

        if !transform.is_finite() {
            log::warn!("fill transform is not finite. Nothing will be rendered");
            return;
        }

        let mut transformed = core::mem::take(&mut self.points);
        let points = if transform.is_identity() {
            points
        } else {
            transformed.clear();
            transformed.extend(points.iter().map(|p| transform.map_point(*p)));
            &transformed[..]
        };

        self.paint(style.blur, |target| {
            painter::fill_triangles(target, points, |p, _| ctx.color_at(p));
        });

        self.points = transformed;
    }

    fn draw_image(&mut self, image: &Image, src_rect: Rect, quad: &[Point; 4], alpha: f64) {
        if image.is_deleted() {
            log::warn!("cannot draw a deleted image");
            return;
        }

        let (w, h) = (f64::from(image.width()), f64::from(image.height()));
        let factor = (w * h) / src_rect.area();
        let area = scan::quad_area(quad) * factor;

        let mip = match image.select_mip(area).and_then(|level| image.mip(level)) {
            Some(v) => v,
            None => return,
        };

        let src_rect = match src_rect.scale(f64::from(mip.width()) / w, f64::from(mip.height()) / h) {
            Some(v) => v,
            None => return,
        };

        let alpha = alpha.max(0.0).min(1.0);
        self.paint(0.0, |target| {
            painter::fill_quad(target, quad, |_, uv| {
                let x = (src_rect.x() + src_rect.width() * uv.x).floor() as i64;
                let y = (src_rect.y() + src_rect.height() * uv.y).floor() as i64;
                let c = mip.pixel_or_transparent(x, y);
                c.with_alpha((f64::from(c.alpha()) * alpha).round() as u8)
            });
        });
    }

    fn fill_image_mask(&mut self, style: &FillStyle, mask: &Mask, quad: &[Point; 4]) {
        let ctx = ShaderContext::new(&style.shader);

        let (mw, mh) = (f64::from(mask.width()), f64::from(mask.height()));
        self.paint(style.blur, |target| {
            painter::fill_quad(target, quad, |p, uv| {
                let coverage = mask.value((mw * uv.x) as i64, (mh * uv.y) as i64);
                if coverage == 0 {
                    return ColorU8::TRANSPARENT;
                }

                blend::scale_alpha(ctx.color_at(p), coverage)
            });
        });
    }

    fn clip(&mut self, points: &[Point]) {
        painter::clip_triangles(&mut self.clip, &mut self.stencil, points);
    }

    fn clear_clip(&mut self) {
        self.clip.clear();
    }

    fn get_image_data(&self, rect: IntRect) -> Option<Pixmap> {
        self.pixmap.clone_rect(rect)
    }

    fn put_image_data(&mut self, pixmap: &Pixmap, x: i32, y: i32) {
        self.pixmap.copy_from(pixmap, x, y);
    }
}
