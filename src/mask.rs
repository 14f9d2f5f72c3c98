// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::IntSize;

#[cfg(feature = "png-format")]
use crate::Error;

/// A single channel 8-bit mask.
///
/// Used as an external coverage mask for [`SoftwareBackend::fill_image_mask`],
/// and internally as the clip and stencil storage.
///
/// Black (0) "pixels" block rendering and white (255) allow it.
///
/// [`SoftwareBackend::fill_image_mask`]: crate::SoftwareBackend::fill_image_mask
#[derive(Clone, PartialEq)]
pub struct Mask {
    data: Vec<u8>,
    size: IntSize,
}

impl Mask {
    /// Allocates a new zero-filled mask.
    ///
    /// Returns `None` when the size is zero or too large.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        Some(Mask {
            data: vec![0; data_len(size)?],
            size,
        })
    }

    /// Creates a new mask by taking ownership over a mask buffer.
    ///
    /// The size needs to match the data provided.
    pub fn from_vec(data: Vec<u8>, size: IntSize) -> Option<Self> {
        if data.len() != data_len(size)? {
            return None;
        }

        Some(Mask { data, size })
    }

    /// Decodes a PNG data into a `Mask`.
    ///
    /// Only 8-bit grayscale images are supported.
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

        if info.color_type != png::ColorType::Grayscale {
            return Err(Error::UnsupportedPng("only grayscale masks are supported"));
        }

        let size = IntSize::from_wh(info.width, info.height)
            .ok_or(Error::InvalidSize { width: info.width, height: info.height })?;

        let actual = img_data.len();
        Mask::from_vec(img_data, size).ok_or(Error::DataLength {
            expected: size.area() as usize,
            actual,
        })
    }

    /// Encodes mask into a PNG data.
    #[cfg(feature = "png-format")]
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, self.width(), self.height());
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
        }

        Ok(data)
    }

    /// Returns mask's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Returns mask's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Returns mask's size.
    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Returns the internal data.
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Returns the mutable internal data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// Returns a mask value.
    ///
    /// Out of bounds positions are fully masked out, aka 0.
    #[inline]
    pub fn value(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return 0;
        }

        self.data[y as usize * self.width() as usize + x as usize]
    }

    /// Sets a mask value.
    ///
    /// Out of bounds positions are ignored.
    #[inline]
    pub fn set_value(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width() && y < self.height() {
            let idx = y as usize * self.width() as usize + x as usize;
            self.data[idx] = value;
        }
    }

    /// Fills the whole mask with the same value.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Clears the mask.
    ///
    /// Zero-fills the internal data buffer.
    pub fn clear(&mut self) {
        self.fill(0);
    }
}

impl core::fmt::Debug for Mask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mask")
            .field("data", &"...")
            .field("width", &self.size.width())
            .field("height", &self.size.height())
            .finish()
    }
}

/// Returns the number of mask values, one byte each.
///
/// Rows longer than `i32::MAX` bytes are rejected, like pixmap rows.
fn data_len(size: IntSize) -> Option<usize> {
    let row_bytes = size.width() as usize;
    if row_bytes > i32::MAX as usize {
        return None;
    }

    row_bytes.checked_mul(size.height() as usize)
}
