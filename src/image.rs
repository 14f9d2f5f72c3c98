// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::IntSize;

use crate::{ColorU8, Error, Pixmap};

/// An image source.
#[derive(Clone, Copy, Debug)]
pub enum ImageSource<'a> {
    /// An existing pixmap. Will be copied.
    Pixmap(&'a Pixmap),
    /// Unpremultiplied RGBA bytes.
    Raw {
        /// Pixel data, `width * height * 4` bytes.
        data: &'a [u8],
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// PNG data.
    ///
    /// Requires the `png-format` feature.
    Png(&'a [u8]),
}

impl ImageSource<'_> {
    /// Decodes the source into a new pixmap.
    pub fn to_pixmap(&self) -> Result<Pixmap, Error> {
        match *self {
            ImageSource::Pixmap(pixmap) => Ok(pixmap.clone()),
            ImageSource::Raw { data, width, height } => {
                let size = IntSize::from_wh(width, height)
                    .ok_or(Error::InvalidSize { width, height })?;
                Pixmap::from_vec(data.to_vec(), size).ok_or(Error::DataLength {
                    expected: size.area() as usize * crate::BYTES_PER_PIXEL,
                    actual: data.len(),
                })
            }
            #[cfg(feature = "png-format")]
            ImageSource::Png(data) => Pixmap::decode_png(data),
            #[cfg(not(feature = "png-format"))]
            ImageSource::Png(_) => Err(Error::UnsupportedSource("PNG support is disabled")),
        }
    }
}

/// An image with a mipmap pyramid.
///
/// Level 0 is the source image. Each next level is a 2x2 box downsample of the previous one,
/// down to a level where either dimension is 1.
#[derive(Clone, PartialEq)]
pub struct Image {
    mips: Vec<Pixmap>,
    size: IntSize,
    deleted: bool,
}

impl Image {
    /// Creates a new image and builds its mip levels.
    pub fn new(pixmap: Pixmap) -> Self {
        let size = pixmap.size();
        Image {
            mips: build_mips(pixmap),
            size,
            deleted: false,
        }
    }

    /// Creates a new image from a source.
    pub fn from_source(source: ImageSource) -> Result<Self, Error> {
        Ok(Image::new(source.to_pixmap()?))
    }

    /// Replaces image content and rebuilds mip levels.
    ///
    /// A deleted image becomes usable again.
    pub fn replace(&mut self, source: ImageSource) -> Result<(), Error> {
        let pixmap = source.to_pixmap()?;
        self.size = pixmap.size();
        self.mips = build_mips(pixmap);
        self.deleted = false;
        Ok(())
    }

    /// Releases image data.
    ///
    /// Drawing a deleted image is a no-op. The size is preserved.
    pub fn delete(&mut self) {
        self.mips = Vec::new();
        self.deleted = true;
    }

    /// Checks that the image was deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns image's width.
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Returns image's height.
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Returns image's size.
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Returns the number of mip levels.
    ///
    /// Zero for deleted images.
    pub fn mip_levels(&self) -> usize {
        self.mips.len()
    }

    /// Returns a mip level.
    pub fn mip(&self, level: usize) -> Option<&Pixmap> {
        self.mips.get(level)
    }

    /// Returns the level whose pixel count is the closest to `area`.
    ///
    /// The first level wins ties. Anisotropic scaling is not taken into account.
    pub fn select_mip(&self, area: f64) -> Option<usize> {
        let mut closest = f64::MAX;
        let mut level = None;
        for (i, mip) in self.mips.iter().enumerate() {
            let dist = (mip.size().area() as f64 - area).abs();
            if dist < closest {
                closest = dist;
                level = Some(i);
            }
        }

        // NaN areas never win.
        level.or(if self.mips.is_empty() { None } else { Some(0) })
    }
}

impl core::fmt::Debug for Image {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.size.width())
            .field("height", &self.size.height())
            .field("mip_levels", &self.mips.len())
            .field("deleted", &self.deleted)
            .finish()
    }
}

fn build_mips(pixmap: Pixmap) -> Vec<Pixmap> {
    let mut mips = vec![pixmap];
    while let Some(next) = mips.last().and_then(halve) {
        mips.push(next);
    }

    log::debug!(
        "built {} mip levels for a {}x{} image",
        mips.len(),
        mips[0].width(),
        mips[0].height()
    );

    mips
}

/// Downsamples a pixmap by averaging 2x2 blocks.
///
/// Channels are expanded to 16 bits before averaging and truncated back.
/// Returns `None` when either dimension is already 1.
fn halve(src: &Pixmap) -> Option<Pixmap> {
    let size = src.size().halved()?;
    let mut dst = Pixmap::new(size.width(), size.height())?;
    for y in 0..dst.height() {
        for x in 0..dst.width() {
            let sx = i64::from(x) * 2;
            let sy = i64::from(y) * 2;
            let block = [
                src.pixel_or_transparent(sx, sy),
                src.pixel_or_transparent(sx + 1, sy),
                src.pixel_or_transparent(sx, sy + 1),
                src.pixel_or_transparent(sx + 1, sy + 1),
            ];

            let avg = |f: fn(ColorU8) -> u8| -> u8 {
                let sum: u32 = block.iter().map(|c| u32::from(f(*c)) * 257).sum();
                (sum / 1024) as u8
            };

            let c = ColorU8::from_rgba(
                avg(ColorU8::red),
                avg(ColorU8::green),
                avg(ColorU8::blue),
                avg(ColorU8::alpha),
            );
            dst.set_pixel(x, y, c);
        }
    }

    Some(dst)
}
