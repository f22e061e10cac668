// smaa-area/area/src/area_map.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The output texture: two 8-bit channels per texel, row-major.

use crate::kernel::Weight;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PixelFormat {
    /// Two unsigned normalized 8-bit channels (`R8G8_UNORM`).
    RG8,
}

impl PixelFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::RG8 => 2,
        }
    }
}

/// A quantized positive/negative weight pair, ready to be stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Texel(pub [u8; 2]);

impl Texel {
    /// Truncates each channel to a byte. Out-of-range values saturate.
    #[inline]
    pub fn quantize(weight: Weight) -> Texel {
        Texel([weight.pos as u8, weight.neg as u8])
    }
}

#[derive(Clone, Debug)]
pub struct AreaMap {
    width: usize,
    height: usize,
    format: PixelFormat,
    row_pitch: usize,
    pixels: Vec<u8>,
}

impl AreaMap {
    /// Allocates a zeroed map. The buffer is never resized afterward.
    pub fn new(width: usize, height: usize) -> AreaMap {
        let format = PixelFormat::RG8;
        let row_pitch = format.bytes_per_pixel() * width;
        AreaMap { width, height, format, row_pitch, pixels: vec![0; row_pitch * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn row_pitch(&self) -> usize {
        self.row_pitch
    }

    #[inline]
    pub fn slice_pitch(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn texel_at(&self, offset: usize) -> Texel {
        Texel([self.pixels[offset], self.pixels[offset + 1]])
    }

    #[inline]
    pub fn set_texel(&mut self, offset: usize, texel: Texel) {
        debug_assert_eq!(offset % self.format.bytes_per_pixel(), 0);
        self.pixels[offset..offset + 2].copy_from_slice(&texel.0);
    }

    /// Byte offset of the texel at column `x`, row `y`.
    #[inline]
    pub fn offset_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.row_pitch + x * self.format.bytes_per_pixel()
    }
}
