// smaa-area/area/src/diag.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weights for 45° edges.
//!
//! A diagonal edge follows the staircase `y = x`. The weights are computed in
//! the edge's own frame: x counts staircase steps from the left end (x = 0) to
//! the right end (x = d), and y is the offset across the staircase, so that
//! the unbent edge lies on y = 0 exactly as a horizontal edge does.
//!
//! The pattern bits match the orthogonal ones: bit 0 bends the left end down,
//! bit 1 the right end down, bit 2 the left end up and bit 3 the right end up.
//! An end bent both ways stays on the axis.

use crate::kernel::{self, Weight};
use crate::{PATTERN_COUNT, SIZE_DIAG, SUBSAMPLE_OFFSETS_DIAG};
use euclid::default::Vector2D;
use euclid::vec2;

/// Where one end of the edge sits across the staircase.
#[derive(Clone, Copy, Debug, PartialEq)]
enum End {
    Flat,
    Bent(f32),
}

impl End {
    #[inline]
    fn new(down: bool, up: bool, offset: f32) -> End {
        match (down, up) {
            (true, false) => End::Bent(offset - 0.5),
            (false, true) => End::Bent(offset + 0.5),
            _ => End::Flat,
        }
    }
}

/// Projects a subsample offset onto the normal of the staircase, in the same
/// units as the half-texel bend of an edge end.
#[inline]
pub fn perpendicular_offset(offset: Vector2D<f32>) -> f32 {
    offset.dot(vec2(-1.0, 1.0)) * 0.5
}

/// Computes the weight pair for one diagonal tuple.
pub fn diag_weight(pattern: usize, left: usize, right: usize, offset_index: usize) -> Weight {
    assert!(pattern < PATTERN_COUNT, "pattern out of range: {}", pattern);
    assert!(left < SIZE_DIAG && right < SIZE_DIAG);

    let (ox, oy) = SUBSAMPLE_OFFSETS_DIAG[offset_index];
    let offset = perpendicular_offset(vec2(ox, oy));
    let start = End::new(pattern & 1 != 0, pattern & 4 != 0, offset);
    let end = End::new(pattern & 2 != 0, pattern & 8 != 0, offset);
    diag_coverage(start, end, left, right)
}

fn diag_coverage(start: End, end: End, left: usize, right: usize) -> Weight {
    let d = (left + right + 1) as f32;
    let half = d * 0.5;
    let l = left as f32;

    match (start, end) {
        (End::Flat, End::Flat) => Weight::ZERO,

        // Only the nearer bent end produces a visible ramp.
        (End::Bent(y), End::Flat) => {
            if left > right {
                Weight::ZERO
            } else {
                kernel::coverage(0.0, y, half, 0.0, l)
            }
        }
        (End::Flat, End::Bent(y)) => {
            if left >= right {
                kernel::coverage(half, 0.0, d, y, l)
            } else {
                Weight::ZERO
            }
        }

        // Both ends bent to the same side: two ramps meeting in the middle.
        (End::Bent(y0), End::Bent(y1)) if (y0 < 0.0) == (y1 < 0.0) => {
            let a1 = kernel::coverage(0.0, y0, half, 0.0, l);
            let a2 = kernel::coverage(half, 0.0, d, y1, l);
            smoothed(d, a1) + smoothed(d, a2)
        }

        // Bent to opposite sides: one line across the whole edge.
        (End::Bent(y0), End::Bent(y1)) => kernel::coverage(0.0, y0, d, y1, l),
    }
}

#[inline]
fn smoothed(d: f32, weight: Weight) -> Weight {
    weight.map(|x| kernel::smooth_correction(d, x))
}
