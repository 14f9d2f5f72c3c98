// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Unlike Skia, we're using just a simple 1bit alpha mask for clipping.

use crate::color::{ALPHA_U8_OPAQUE, ALPHA_U8_TRANSPARENT};
use crate::Mask;

/// A persistent clip mask.
///
/// Has the same size as the framebuffer. A pixel is either fully visible (255)
/// or fully clipped (0). The visible region can only shrink between
/// [`ClipMask::clear`] calls.
#[derive(Clone, PartialEq, Debug)]
pub struct ClipMask {
    mask: Mask,
}

impl ClipMask {
    /// Creates a new, fully visible clip mask.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let mut mask = Mask::new(width, height)?;
        mask.fill(ALPHA_U8_OPAQUE);
        Some(ClipMask { mask })
    }

    /// Makes every pixel visible again.
    pub fn clear(&mut self) {
        // Keep the allocation.
        self.mask.fill(ALPHA_U8_OPAQUE);
    }

    /// Excludes every pixel that is not covered by `coverage`.
    ///
    /// `coverage` must have the same size as the clip.
    pub fn intersect(&mut self, coverage: &Mask) {
        debug_assert_eq!(self.mask.size(), coverage.size());

        for (c, n) in self.mask.data_mut().iter_mut().zip(coverage.data()) {
            if *n == ALPHA_U8_TRANSPARENT {
                *c = ALPHA_U8_TRANSPARENT;
            }
        }
    }

    /// Checks that a pixel is not clipped.
    #[inline]
    pub fn is_visible(&self, x: u32, y: u32) -> bool {
        self.mask.value(i64::from(x), i64::from(y)) != ALPHA_U8_TRANSPARENT
    }

    /// Returns the underlying mask.
    pub fn as_mask(&self) -> &Mask {
        &self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_is_and() {
        let mut clip = ClipMask::new(2, 1).unwrap();
        assert!(clip.is_visible(0, 0));
        assert!(clip.is_visible(1, 0));

        let mut a = Mask::new(2, 1).unwrap();
        a.set_value(0, 0, 255);
        clip.intersect(&a);
        assert!(clip.is_visible(0, 0));
        assert!(!clip.is_visible(1, 0));

        // Excluded pixels never come back without a clear.
        let mut b = Mask::new(2, 1).unwrap();
        b.set_value(1, 0, 255);
        clip.intersect(&b);
        assert!(!clip.is_visible(0, 0));
        assert!(!clip.is_visible(1, 0));

        clip.clear();
        assert!(clip.is_visible(0, 0));
        assert!(clip.is_visible(1, 0));
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let clip = ClipMask::new(1, 1).unwrap();
        assert!(!clip.is_visible(1, 0));
    }
}
