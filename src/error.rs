// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

/// Errors that can be reported while loading or saving pixel data.
///
/// Rasterization itself never fails: degenerate geometry paints nothing.
#[derive(Error, Debug)]
pub enum Error {
    /// The image source kind is not supported by this build.
    #[error("unsupported image source: {0}")]
    UnsupportedSource(&'static str),

    /// The image dimensions are zero or too big.
    #[error("invalid image size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A raw buffer length doesn't match the declared dimensions.
    #[error("expected {expected} bytes of pixel data, got {actual}")]
    DataLength {
        /// Required length in bytes.
        expected: usize,
        /// Provided length in bytes.
        actual: usize,
    },

    /// The PNG is valid, but uses a format we do not support.
    #[error("unsupported PNG format: {0}")]
    UnsupportedPng(&'static str),

    /// Failed to decode a PNG.
    #[cfg(feature = "png-format")]
    #[error("failed to decode PNG")]
    PngDecoding(#[from] png::DecodingError),

    /// Failed to encode a PNG.
    #[cfg(feature = "png-format")]
    #[error("failed to encode PNG")]
    PngEncoding(#[from] png::EncodingError),

    /// Failed to read or write a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
