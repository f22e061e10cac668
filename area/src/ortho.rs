// smaa-area/area/src/ortho.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weights for horizontal edges.
//!
//! Bit 0 of the pattern means the left end of the edge bends down, bit 1 that
//! the right end bends down, bit 2 that the left end bends up and bit 3 that
//! the right end bends up. The edge is modelled as a line from the left end
//! (x = 0) to the right end (x = d), each end sitting half a texel above or
//! below the edge, shifted by the subsample offset.

use crate::kernel::{self, Weight};
use crate::{PATTERN_COUNT, SIZE_ORTHO, SUBSAMPLE_OFFSETS_ORTHO};

/// Computes the weight pair for one orthogonal tuple.
pub fn ortho_weight(pattern: usize, left: usize, right: usize, offset_index: usize) -> Weight {
    assert!(pattern < PATTERN_COUNT, "pattern out of range: {}", pattern);
    assert!(left < SIZE_ORTHO && right < SIZE_ORTHO);

    let offset = SUBSAMPLE_OFFSETS_ORTHO[offset_index];
    let d = (left + right + 1) as f32;
    let half = d * 0.5;
    let up = 0.5 + offset;
    let down = 0.5 + offset - 1.0;
    let l = left as f32;

    match pattern {
        //  ------
        0 => Weight::ZERO,

        //  ------
        //  |
        1 => {
            if left > right {
                Weight::ZERO
            } else {
                kernel::coverage(0.0, down, half, 0.0, l)
            }
        }

        //  ------
        //       |
        2 => {
            if left >= right {
                kernel::coverage(half, 0.0, d, down, l)
            } else {
                Weight::ZERO
            }
        }

        //  ------
        //  |    |
        3 => {
            let a1 = kernel::coverage(0.0, down, half, 0.0, l);
            let a2 = kernel::coverage(half, 0.0, d, down, l);
            smoothed(d, a1) + smoothed(d, a2)
        }

        //  |
        //  ------
        4 => {
            if left <= right {
                kernel::coverage(0.0, up, half, 0.0, l)
            } else {
                Weight::ZERO
            }
        }

        //  |
        //  ------
        //  |
        5 => Weight::ZERO,

        //  |
        //  ------
        //       |
        6 => jittered_crossing(up, down, offset, d, l),

        //  |
        //  ------
        //  |    |
        7 => kernel::coverage(0.0, up, d, down, l),

        //       |
        //  ------
        8 => {
            if left >= right {
                kernel::coverage(half, 0.0, d, up, l)
            } else {
                Weight::ZERO
            }
        }

        //       |
        //  ------
        //  |
        9 => jittered_crossing(down, up, offset, d, l),

        //       |
        //  ------
        //       |
        10 => Weight::ZERO,

        //       |
        //  ------
        //  |    |
        11 => kernel::coverage(0.0, down, d, up, l),

        //  |    |
        //  ------
        12 => {
            let a1 = kernel::coverage(0.0, up, half, 0.0, l);
            let a2 = kernel::coverage(half, 0.0, d, up, l);
            smoothed(d, a1) + smoothed(d, a2)
        }

        //  |    |
        //  ------
        //  |
        13 => kernel::coverage(0.0, down, d, up, l),

        //  |    |
        //  ------
        //       |
        14 => kernel::coverage(0.0, up, d, down, l),

        //  |    |
        //  ------
        //  |    |
        15 => Weight::ZERO,

        _ => unreachable!(),
    }
}

#[inline]
fn smoothed(d: f32, weight: Weight) -> Weight {
    weight.map(|x| kernel::smooth_correction(d, x))
}

/// An edge crossing from `y_left` to `y_right`. With a nonzero offset the
/// crossing point is no longer centred, so the direct line is averaged with
/// the two half-edges that meet at `d / 2`.
fn jittered_crossing(y_left: f32, y_right: f32, offset: f32, d: f32, left: f32) -> Weight {
    let direct = kernel::coverage(0.0, y_left, d, y_right, left);
    if offset == 0.0 {
        return direct;
    }

    let half = d * 0.5;
    let split = kernel::coverage(0.0, y_left, half, 0.0, left) +
        kernel::coverage(half, 0.0, d, y_right, left);
    (direct + split) * 0.5
}

#[cfg(test)]
mod test {
    use super::ortho_weight;
    use crate::kernel::{self, Weight};
    use crate::{PATTERN_COUNT, SIZE_ORTHO, SUBSAMPLE_OFFSETS_ORTHO};

    fn for_each_tuple<F>(mut f: F) where F: FnMut(usize, usize, usize, usize) {
        for offset in 0..SUBSAMPLE_OFFSETS_ORTHO.len() {
            for left in 0..SIZE_ORTHO {
                for right in 0..SIZE_ORTHO {
                    for pattern in 0..PATTERN_COUNT {
                        f(pattern, left, right, offset);
                    }
                }
            }
        }
    }

    #[test]
    fn test_flat_patterns_are_zero() {
        for_each_tuple(|pattern, left, right, offset| {
            if [0, 5, 10, 15].contains(&pattern) {
                assert_eq!(ortho_weight(pattern, left, right, offset), Weight::ZERO);
            }
        });
    }

    #[test]
    fn test_weights_fit_in_a_byte() {
        for_each_tuple(|pattern, left, right, offset| {
            let weight = ortho_weight(pattern, left, right, offset);
            assert!(weight.pos >= 0.0 && weight.pos <= 255.0,
                    "pattern {} ({}, {}) offset {}: {:?}", pattern, left, right, offset, weight);
            assert!(weight.neg >= 0.0 && weight.neg <= 255.0,
                    "pattern {} ({}, {}) offset {}: {:?}", pattern, left, right, offset, weight);
        });
    }

    #[test]
    fn test_one_sided_patterns_respect_nearer_end() {
        for_each_tuple(|pattern, left, right, offset| {
            let weight = ortho_weight(pattern, left, right, offset);
            match pattern {
                1 if left > right => assert!(weight.is_zero()),
                4 if left > right => assert!(weight.is_zero()),
                2 if left < right => assert!(weight.is_zero()),
                8 if left < right => assert!(weight.is_zero()),
                _ => {}
            }
        });
    }

    #[test]
    fn test_golden_corner() {
        // Left end bends down, no jitter, single-texel edge.
        let weight = ortho_weight(1, 0, 0, 0);
        assert_eq!(weight, kernel::coverage(0.0, -0.5, 0.5, 0.0, 0.0));
        assert_eq!(weight, Weight::new(31.875, 0.0));
        assert_eq!(weight.swapped(), kernel::coverage(0.0, 0.5, 0.5, 0.0, 0.0));
    }

    #[test]
    fn test_up_and_down_patterns_mirror() {
        // Flipping the edge vertically swaps the channels when there is no jitter.
        for left in 0..SIZE_ORTHO {
            for right in 0..SIZE_ORTHO {
                for &(a, b) in &[(1, 4), (2, 8), (3, 12), (6, 9), (7, 13), (11, 14)] {
                    assert_eq!(ortho_weight(a, left, right, 0).swapped(),
                               ortho_weight(b, left, right, 0));
                }
            }
        }
    }

    #[test]
    fn test_jitter_changes_crossing() {
        let centred = ortho_weight(6, 3, 3, 0);
        let jittered = ortho_weight(6, 3, 3, 1);
        assert_ne!(centred, jittered);
    }
}
