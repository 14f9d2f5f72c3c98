// Copyright 2026 The softcanvas Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! An approximate Gaussian blur made of three box blurs per axis.

use crate::{ColorU8, Pixmap};

/// Blurs a pixmap in place.
///
/// `scratch` must have the same size as `pixmap`. Its content is overwritten.
///
/// Runs three horizontal box passes followed by three vertical ones.
/// Radii are `floor(size)`, with `+1` added to the second and third pass
/// when the fractional part is bigger than 1/3 and 2/3 respectively.
pub fn box_blur(pixmap: &mut Pixmap, scratch: &mut Pixmap, size: f64) {
    debug_assert_eq!(pixmap.size(), scratch.size());

    let [a, b, c] = radii(size);

    // Each pair of passes ends up in `pixmap`.
    box_pass(pixmap, scratch, a, Axis::X);
    box_pass(scratch, pixmap, b, Axis::X);
    box_pass(pixmap, scratch, c, Axis::X);
    box_pass(scratch, pixmap, a, Axis::Y);
    box_pass(pixmap, scratch, b, Axis::Y);
    box_pass(scratch, pixmap, c, Axis::Y);
}

fn radii(size: f64) -> [usize; 3] {
    // Slightly shrinking the size makes the result closer to a real Gaussian.
    let size = size * (1.0 - 1.0 / (size + 1.0));

    let base = size.floor();
    let frac = size - base;
    let a = base as usize;
    let b = if frac > 0.333333333 { a + 1 } else { a };
    let c = if frac > 0.666666666 { a + 1 } else { a };
    [a, b, c]
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum Axis {
    X,
    Y,
}

/// A single sliding window pass.
///
/// The window shrinks near the edges, so edge pixels average fewer samples.
fn box_pass(src: &Pixmap, dst: &mut Pixmap, radius: usize, axis: Axis) {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let (lines, len) = match axis {
        Axis::X => (height, width),
        Axis::Y => (width, height),
    };

    let index = |line: usize, i: usize| match axis {
        Axis::X => line * width + i,
        Axis::Y => i * width + line,
    };

    let src = src.pixels();
    let dst = dst.pixels_mut();
    for line in 0..lines {
        if radius >= len {
            let mut sum = Sum::default();
            for i in 0..len {
                sum.add(src[index(line, i)]);
            }

            let c = sum.average(len);
            for i in 0..len {
                dst[index(line, i)] = c;
            }

            continue;
        }

        let mut sum = Sum::default();
        for i in 0..=radius {
            sum.add(src[index(line, i)]);
        }

        let mut samples = radius + 1;
        let mut i = 0;
        loop {
            dst[index(line, i)] = sum.average(samples);

            if i == len - 1 {
                break;
            }

            if i >= radius {
                sum.sub(src[index(line, i - radius)]);
                samples -= 1;
            }

            i += 1;

            if i + radius < len {
                sum.add(src[index(line, i + radius)]);
                samples += 1;
            }
        }
    }
}

#[derive(Copy, Clone, Default, Debug)]
struct Sum([f64; 4]);

impl Sum {
    #[inline]
    fn add(&mut self, c: ColorU8) {
        for (s, v) in self.0.iter_mut().zip(c.to_array().iter()) {
            *s += f64::from(*v);
        }
    }

    #[inline]
    fn sub(&mut self, c: ColorU8) {
        for (s, v) in self.0.iter_mut().zip(c.to_array().iter()) {
            *s -= f64::from(*v);
        }
    }

    #[inline]
    fn average(&self, count: usize) -> ColorU8 {
        let factor = 1.0 / count as f64;
        let c = |v: f64| (v * factor).round() as u8;
        ColorU8::from_rgba(c(self.0[0]), c(self.0[1]), c(self.0[2]), c(self.0[3]))
    }
}
