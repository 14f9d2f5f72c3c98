// Copyright 2020 Yevhenii Reizner
// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use softcanvas_geom::{Point, Transform};

use crate::{ColorU8, Image, Pixmap};

/// A pattern repeat mode.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Repeat {
    /// Repeat along both axes.
    Repeat,
    /// Repeat horizontally only.
    RepeatX,
    /// Repeat vertically only.
    RepeatY,
    /// Draw the image once.
    NoRepeat,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Repeat
    }
}

impl Repeat {
    fn axes(self) -> (bool, bool) {
        match self {
            Repeat::Repeat => (true, true),
            Repeat::RepeatX => (true, false),
            Repeat::RepeatY => (false, true),
            Repeat::NoRepeat => (false, false),
        }
    }
}

/// Image pattern parameters.
#[derive(Copy, Clone, Debug)]
pub struct ImagePatternData<'a> {
    /// A pattern image.
    pub image: &'a Image,
    /// Maps canvas space into image space.
    pub transform: Transform,
    /// A repeat mode.
    pub repeat: Repeat,
}

/// An image pattern handle.
#[derive(Clone, Debug)]
pub struct ImagePattern<'a> {
    data: ImagePatternData<'a>,
    deleted: bool,
}

impl<'a> ImagePattern<'a> {
    /// Creates a new pattern.
    pub fn new(data: ImagePatternData<'a>) -> Self {
        ImagePattern { data, deleted: false }
    }

    /// Replaces pattern parameters.
    pub fn replace(&mut self, data: ImagePatternData<'a>) {
        self.data = data;
        self.deleted = false;
    }

    /// Marks the pattern as deleted.
    ///
    /// A deleted pattern is transparent.
    pub fn delete(&mut self) {
        self.deleted = true;
    }

    /// Checks that the pattern was deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns pattern parameters.
    pub fn data(&self) -> &ImagePatternData<'a> {
        &self.data
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PatternContext<'a> {
    pixmap: Option<&'a Pixmap>,
    ts: Transform,
    repeat_x: bool,
    repeat_y: bool,
}

impl<'a> PatternContext<'a> {
    pub fn new(pattern: &'a ImagePattern<'a>) -> Self {
        // Patterns always sample the full resolution image.
        let pixmap = if pattern.deleted { None } else { pattern.data.image.mip(0) };
        let (repeat_x, repeat_y) = pattern.data.repeat.axes();

        PatternContext {
            pixmap,
            ts: pattern.data.transform,
            repeat_x,
            repeat_y,
        }
    }

    pub fn color_at(&self, p: Point) -> ColorU8 {
        let pixmap = match self.pixmap {
            Some(v) => v,
            None => return ColorU8::TRANSPARENT,
        };

        let p = self.ts.map_point(p);
        if !p.is_finite() {
            return ColorU8::TRANSPARENT;
        }

        let x = match tile(p.x, pixmap.width(), self.repeat_x) {
            Some(v) => v,
            None => return ColorU8::TRANSPARENT,
        };

        let y = match tile(p.y, pixmap.height(), self.repeat_y) {
            Some(v) => v,
            None => return ColorU8::TRANSPARENT,
        };

        pixmap.pixel_or_transparent(x, y)
    }
}

/// Converts an image-space coordinate into a pixel index.
fn tile(v: f64, len: u32, repeat: bool) -> Option<i64> {
    let len_f = f64::from(len);
    if !repeat && (v < 0.0 || v >= len_f) {
        return None;
    }

    Some((v.floor() as i64).rem_euclid(i64::from(len)))
}
