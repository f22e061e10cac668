// smaa-area/area/src/address.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Texture layout.
//!
//! The orthogonal region occupies the first `5 * SIZE_ORTHO` columns. Each
//! subsample offset gets a `5 * SIZE_ORTHO` square band, stacked vertically.
//! Within a band the 16 patterns form a 4x4 grid of `SIZE_ORTHO` blocks; the
//! upper two bits of the pattern pick a `3 * SIZE_ORTHO` super-cell and the
//! lower two bits a block inside it:
//!
//! ```text
//!     0  1 |  4  5
//!     2  3 |  6  7
//!     -----+------
//!     8  9 | 12 13
//!    10 11 | 14 15
//! ```
//!
//! The diagonal region starts at column `5 * SIZE_ORTHO`; each diagonal offset
//! gets a `4 * SIZE_DIAG` square band with patterns laid out row-major.

use crate::{PATTERN_COUNT, SIZE_DIAG, SIZE_ORTHO, SUBSAMPLE_OFFSETS_DIAG, SUBSAMPLE_OFFSETS_ORTHO};

pub const BYTES_PER_TEXEL: usize = 2;

pub const AREA_MAP_WIDTH: usize = SIZE_ORTHO * 5 + SIZE_DIAG * 4;
pub const AREA_MAP_HEIGHT: usize = SIZE_ORTHO * 5 * SUBSAMPLE_OFFSETS_ORTHO.len();
pub const ROW_PITCH: usize = AREA_MAP_WIDTH * BYTES_PER_TEXEL;

/// Returns `(width, height)` in texels.
#[inline]
pub fn area_map_size() -> (usize, usize) {
    (AREA_MAP_WIDTH, AREA_MAP_HEIGHT)
}

/// Texel `(column, row)` for an orthogonal tuple.
pub fn ortho_texel(pattern: usize, left: usize, right: usize, offset: usize) -> (usize, usize) {
    assert!(pattern < PATTERN_COUNT, "pattern out of range: {}", pattern);
    assert!(left < SIZE_ORTHO && right < SIZE_ORTHO);
    assert!(offset < SUBSAMPLE_OFFSETS_ORTHO.len());

    let (cluster, sub) = (pattern / 4, pattern % 4);
    let mut row = offset * SIZE_ORTHO * 5;
    let mut col = 0;
    if cluster > 1 {
        row += 3 * SIZE_ORTHO;
    }
    if cluster % 2 == 1 {
        col += 3 * SIZE_ORTHO;
    }
    if sub > 1 {
        row += SIZE_ORTHO;
    }
    if sub % 2 == 1 {
        col += SIZE_ORTHO;
    }
    (col + left, row + right)
}

/// Texel `(column, row)` for a diagonal tuple.
pub fn diag_texel(pattern: usize, left: usize, right: usize, offset: usize) -> (usize, usize) {
    assert!(pattern < PATTERN_COUNT, "pattern out of range: {}", pattern);
    assert!(left < SIZE_DIAG && right < SIZE_DIAG);
    assert!(offset < SUBSAMPLE_OFFSETS_DIAG.len());

    let row = offset * SIZE_DIAG * 4 + (pattern / 4) * SIZE_DIAG;
    let col = 5 * SIZE_ORTHO + (pattern % 4) * SIZE_DIAG;
    (col + left, row + right)
}

/// Byte offset of an orthogonal tuple inside the area map.
#[inline]
pub fn ortho_address(pattern: usize, left: usize, right: usize, offset: usize) -> usize {
    let (col, row) = ortho_texel(pattern, left, right, offset);
    row * ROW_PITCH + col * BYTES_PER_TEXEL
}

/// Byte offset of a diagonal tuple inside the area map.
#[inline]
pub fn diag_address(pattern: usize, left: usize, right: usize, offset: usize) -> usize {
    let (col, row) = diag_texel(pattern, left, right, offset);
    row * ROW_PITCH + col * BYTES_PER_TEXEL
}
