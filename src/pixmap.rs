// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::{IntRect, IntSize};

use crate::color::ColorU8;

#[cfg(feature = "png-format")]
use crate::color::ALPHA_U8_OPAQUE;
#[cfg(feature = "png-format")]
use crate::Error;

/// Number of bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A container that owns unpremultiplied RGBA pixels.
///
/// Used as the backend framebuffer, as the blur scratch buffer and as image mip levels.
///
/// The data is not aligned, therefore width == stride.
#[derive(Clone, PartialEq)]
pub struct Pixmap {
    pixels: Vec<ColorU8>,
    size: IntSize,
}

impl Pixmap {
    /// Allocates a new pixmap.
    ///
    /// A pixmap is filled with transparent black by default, aka (0, 0, 0, 0).
    ///
    /// Zero size in an error.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        let len = pixels_len(size)?;
        Some(Pixmap {
            pixels: vec![ColorU8::TRANSPARENT; len],
            size,
        })
    }

    /// Creates a new pixmap by taking ownership over RGBA bytes.
    ///
    /// The size needs to match the data provided.
    pub fn from_vec(data: Vec<u8>, size: IntSize) -> Option<Self> {
        let len = pixels_len(size)?;
        if data.len() != len * BYTES_PER_PIXEL {
            return None;
        }

        let pixels = data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| ColorU8::from_rgba(c[0], c[1], c[2], c[3]))
            .collect();

        Some(Pixmap { pixels, size })
    }

    /// Decodes a PNG data into a `Pixmap`.
    ///
    /// Only 8-bit images are supported.
    /// Index PNGs are not supported.
    #[cfg(feature = "png-format")]
    pub fn decode_png(data: &[u8]) -> Result<Self, Error> {
        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let mut img_data = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut img_data)?;
        img_data.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedPng("unsupported bit depth"));
        }

        let size = IntSize::from_wh(info.width, info.height)
            .ok_or(Error::InvalidSize { width: info.width, height: info.height })?;

        let img_data = match info.color_type {
            png::ColorType::Rgb => {
                let mut rgba_data = Vec::with_capacity(img_data.len() / 3 * 4);
                for rgb in img_data.chunks(3) {
                    rgba_data.push(rgb[0]);
                    rgba_data.push(rgb[1]);
                    rgba_data.push(rgb[2]);
                    rgba_data.push(ALPHA_U8_OPAQUE);
                }

                rgba_data
            }
            png::ColorType::Rgba => {
                img_data
            }
            png::ColorType::Grayscale => {
                let mut rgba_data = Vec::with_capacity(img_data.len() * 4);
                for gray in img_data {
                    rgba_data.push(gray);
                    rgba_data.push(gray);
                    rgba_data.push(gray);
                    rgba_data.push(ALPHA_U8_OPAQUE);
                }

                rgba_data
            }
            png::ColorType::GrayscaleAlpha => {
                let mut rgba_data = Vec::with_capacity(img_data.len() * 2);
                for slice in img_data.chunks(2) {
                    let gray = slice[0];
                    let alpha = slice[1];
                    rgba_data.push(gray);
                    rgba_data.push(gray);
                    rgba_data.push(gray);
                    rgba_data.push(alpha);
                }

                rgba_data
            }
            png::ColorType::Indexed => {
                return Err(Error::UnsupportedPng("indexed PNG is not supported"));
            }
        };

        let actual = img_data.len();
        Pixmap::from_vec(img_data, size).ok_or(Error::DataLength {
            expected: size.area() as usize * BYTES_PER_PIXEL,
            actual,
        })
    }

    /// Loads a PNG file into a `Pixmap`.
    ///
    /// Only 8-bit images are supported.
    /// Index PNGs are not supported.
    #[cfg(feature = "png-format")]
    pub fn load_png<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        // `png::Decoder` is generic over input, which means that it will instance
        // two copies: one for `&[]` and one for `File`. Which will simply bloat the code.
        // Therefore we're using only one type for input.
        let data = std::fs::read(path)?;
        Self::decode_png(&data)
    }

    /// Encodes pixmap into a PNG data.
    #[cfg(feature = "png-format")]
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        let bytes = self.to_rgba_bytes();

        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&bytes)?;
        }

        Ok(data)
    }

    /// Saves pixmap as a PNG file.
    #[cfg(feature = "png-format")]
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let data = self.encode_png()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Returns pixmap's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Returns pixmap's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Returns pixmap's size.
    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Fills the entire pixmap with a specified color.
    pub fn fill(&mut self, color: ColorU8) {
        for p in self.pixels.iter_mut() {
            *p = color;
        }
    }

    /// Returns the internal data.
    ///
    /// Byteorder: RGBA on little-endian targets.
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns the mutable internal data.
    ///
    /// Byteorder: RGBA on little-endian targets.
    pub fn data_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Returns pixels as RGBA bytes regardless of the target endianness.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Returns a pixel color.
    ///
    /// Returns `None` when position is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        self.pixels.get(self.index(x, y)).cloned()
    }

    /// Returns a pixel color or transparent black when position is out of bounds.
    #[inline]
    pub(crate) fn pixel_or_transparent(&self, x: i64, y: i64) -> ColorU8 {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return ColorU8::TRANSPARENT;
        }

        self.pixels[self.index(x as u32, y as u32)]
    }

    /// Sets a pixel color.
    ///
    /// Out of bounds positions are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: ColorU8) {
        if x < self.width() && y < self.height() {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Returns a slice of pixels.
    pub fn pixels(&self) -> &[ColorU8] {
        &self.pixels
    }

    /// Returns a mutable slice of pixels.
    pub fn pixels_mut(&mut self) -> &mut [ColorU8] {
        &mut self.pixels
    }

    /// Returns a copy of the pixmap that intersects the `rect`.
    ///
    /// Returns `None` when `Pixmap`'s rect doesn't contain `rect`.
    pub fn clone_rect(&self, rect: IntRect) -> Option<Pixmap> {
        let rect = self.size.to_int_rect(0, 0)?.intersect(&rect)?;
        let mut new = Pixmap::new(rect.width(), rect.height())?;

        let src_width = self.width() as usize;
        let new_width = rect.width() as usize;
        for (y, row) in new.pixels.chunks_exact_mut(new_width).enumerate() {
            let start = (rect.y() as usize + y) * src_width + rect.x() as usize;
            row.copy_from_slice(&self.pixels[start..start + new_width]);
        }

        Some(new)
    }

    /// Copies `src` into this pixmap at the provided position, replacing existing pixels.
    ///
    /// Parts of `src` outside this pixmap are skipped.
    pub fn copy_from(&mut self, src: &Pixmap, x: i32, y: i32) {
        let dst_rect = match src.size.to_int_rect(x, y) {
            Some(v) => v,
            None => return,
        };

        let rect = match self.size.to_int_rect(0, 0).and_then(|r| r.intersect(&dst_rect)) {
            Some(v) => v,
            None => return,
        };

        let src_x = (rect.x() - x) as usize;
        let src_y = (rect.y() - y) as usize;
        let w = rect.width() as usize;
        let dst_width = self.width() as usize;
        let src_width = src.width() as usize;
        for row in 0..rect.height() as usize {
            let dst_start = (rect.y() as usize + row) * dst_width + rect.x() as usize;
            let src_start = (src_y + row) * src_width + src_x;
            self.pixels[dst_start..dst_start + w]
                .copy_from_slice(&src.pixels[src_start..src_start + w]);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("data", &"...")
            .field("width", &self.size.width())
            .field("height", &self.size.height())
            .finish()
    }
}

/// Returns the number of pixels required by the size.
///
/// Pixmap's row bytes must fit in 31 bits.
pub(crate) fn pixels_len(size: IntSize) -> Option<usize> {
    let row_bytes = (size.width() as usize).checked_mul(BYTES_PER_PIXEL)?;
    if row_bytes > i32::MAX as usize {
        return None;
    }

    (size.width() as usize).checked_mul(size.height() as usize)
}
