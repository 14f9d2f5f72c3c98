// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Mask;

const PAINTED: u8 = 255;

/// A per-operation mask that marks already painted pixels.
///
/// Cleared at the start of every fill, draw, mask fill and clip operation,
/// so a pixel is blended at most once per operation, no matter how many
/// triangles cover it.
#[derive(Clone, Debug)]
pub(crate) struct Stencil {
    mask: Mask,
}

impl Stencil {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Stencil { mask: Mask::new(width, height)? })
    }

    pub fn clear(&mut self) {
        self.mask.clear();
    }

    /// Marks a pixel as painted.
    ///
    /// Returns `false` when the pixel was already marked during this operation.
    #[inline]
    pub fn check_and_set(&mut self, x: u32, y: u32) -> bool {
        if self.mask.value(i64::from(x), i64::from(y)) == PAINTED {
            return false;
        }

        self.mask.set_value(x, y, PAINTED);
        true
    }

    pub fn as_mask(&self) -> &Mask {
        &self.mask
    }
}
