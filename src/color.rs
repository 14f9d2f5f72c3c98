// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// 8-bit type for an alpha value. 255 is 100% opaque, zero is 100% transparent.
pub type AlphaU8 = u8;

/// Represents fully transparent AlphaU8 value.
pub const ALPHA_U8_TRANSPARENT: AlphaU8 = 0x00;

/// Represents fully opaque AlphaU8 value.
pub const ALPHA_U8_OPAQUE: AlphaU8 = 0xFF;

/// A 32-bit RGBA color value.
///
/// Components are stored unpremultiplied (straight alpha).
///
/// Byteorder: ABGR
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorU8(u32);

unsafe impl bytemuck::Zeroable for ColorU8 {}
unsafe impl bytemuck::Pod for ColorU8 {}

impl ColorU8 {
    /// A transparent black color.
    pub const TRANSPARENT: Self = ColorU8::from_rgba(0, 0, 0, 0);

    /// An opaque black color.
    pub const BLACK: Self = ColorU8::from_rgba(0, 0, 0, 255);

    /// An opaque white color.
    pub const WHITE: Self = ColorU8::from_rgba(255, 255, 255, 255);

    /// Creates a new color.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8(pack_rgba(r, g, b, a))
    }

    /// Returns color's red component.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns color's green component.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Returns color's blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Returns color's alpha component.
    #[inline]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Returns all components as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8::from_rgba(self.red(), self.green(), self.blue(), a)
    }

    /// Check that color is opaque.
    ///
    /// Alpha == 255
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha() == ALPHA_U8_OPAQUE
    }

    /// Check that color is fully transparent.
    ///
    /// Alpha == 0
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.alpha() == ALPHA_U8_TRANSPARENT
    }
}

impl From<[u8; 4]> for ColorU8 {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        ColorU8::from_rgba(c[0], c[1], c[2], c[3])
    }
}

impl std::fmt::Debug for ColorU8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorU8")
            .field("r", &self.red())
            .field("g", &self.green())
            .field("b", &self.blue())
            .field("a", &self.alpha())
            .finish()
    }
}

#[inline]
const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}
