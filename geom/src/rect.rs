// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::convert::TryFrom;

use crate::{IntSize, LengthU32};

/// An integer rectangle.
///
/// # Guarantees
///
/// - Width and height are in 1..=i32::MAX range.
/// - x+width and y+height does not overflow.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IntRect {
    x: i32,
    y: i32,
    width: LengthU32,
    height: LengthU32,
}

impl IntRect {
    /// Creates a new `IntRect`.
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        x.checked_add(i32::try_from(width).ok()?)?;
        y.checked_add(i32::try_from(height).ok()?)?;

        Some(IntRect {
            x,
            y,
            width: LengthU32::new(width)?,
            height: LengthU32::new(height)?,
        })
    }

    /// Creates a new `IntRect`.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        let width = u32::try_from(right.checked_sub(left)?).ok()?;
        let height = u32::try_from(bottom.checked_sub(top)?).ok()?;
        IntRect::from_xywh(left, top, width, height)
    }

    /// Returns rect's X position.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns rect's Y position.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns rect's width.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Returns rect's height.
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Returns rect's left edge.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Returns rect's top edge.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Returns rect's right edge.
    pub fn right(&self) -> i32 {
        // No overflow is guaranteed by constructors.
        self.x + self.width.get() as i32
    }

    /// Returns rect's bottom edge.
    pub fn bottom(&self) -> i32 {
        // No overflow is guaranteed by constructors.
        self.y + self.height.get() as i32
    }

    /// Returns rect's size.
    pub fn size(&self) -> IntSize {
        IntSize::from_wh_safe(self.width, self.height)
    }

    /// Returns an intersection of two rectangles.
    ///
    /// Returns `None` otherwise.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);

        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        let w = u32::try_from(right.checked_sub(left)?).ok()?;
        let h = u32::try_from(bottom.checked_sub(top)?).ok()?;

        IntRect::from_xywh(left, top, w, h)
    }
}

/// A rectangle defined by its position and size.
///
/// # Guarantees
///
/// - All values are finite.
/// - Width and height are positive.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a new `Rect`.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        let is_valid = x.is_finite()
            && y.is_finite()
            && width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height > 0.0;

        if is_valid {
            Some(Rect { x, y, width, height })
        } else {
            None
        }
    }

    /// Returns rect's X position.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns rect's Y position.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns rect's width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns rect's height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns rect's right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns rect's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns a rect with all components multiplied by the provided factors.
    pub fn scale(&self, sx: f64, sy: f64) -> Option<Self> {
        Rect::from_xywh(self.x * sx, self.y * sy, self.width * sx, self.height * sy)
    }
}
