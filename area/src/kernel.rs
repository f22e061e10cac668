// smaa-area/area/src/kernel.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration of an edge line over a unit-width strip of texels.
//!
//! The line lives in a space where x runs along the edge, from the left end
//! (x = 0) to the right end (x = d), and y is the signed distance from the
//! edge, in texels. Integrating the line over `[left, left + 1)` gives the
//! area of the current texel that the antialiased edge covers.

use crate::SMOOTH_MAX_DISTANCE;
use smaa_geometry::line_segment::LineSegment;
use smaa_geometry::util::{self, approx_zero};
use std::ops::{Add, Mul};

/// Coverage magnitudes attributed to each side of the edge, in `[0, 255]`.
///
/// Area below the axis goes to `pos`, area above it to `neg`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Weight {
    pub pos: f32,
    pub neg: f32,
}

impl Weight {
    pub const ZERO: Weight = Weight { pos: 0.0, neg: 0.0 };

    #[inline]
    pub fn new(pos: f32, neg: f32) -> Weight {
        Weight { pos, neg }
    }

    /// Routes a signed area to the channel for its side and scales it to a byte range.
    #[inline]
    pub fn from_signed_area(area: f32) -> Weight {
        let magnitude = area.abs() * 255.0;
        if area < 0.0 {
            Weight::new(magnitude, 0.0)
        } else {
            Weight::new(0.0, magnitude)
        }
    }

    #[inline]
    pub fn swapped(self) -> Weight {
        Weight::new(self.neg, self.pos)
    }

    #[inline]
    pub fn map<F>(self, mut f: F) -> Weight where F: FnMut(f32) -> f32 {
        Weight::new(f(self.pos), f(self.neg))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.pos == 0.0 && self.neg == 0.0
    }
}

impl Add<Weight> for Weight {
    type Output = Weight;
    #[inline]
    fn add(self, other: Weight) -> Weight {
        Weight::new(self.pos + other.pos, self.neg + other.neg)
    }
}

impl Mul<f32> for Weight {
    type Output = Weight;
    #[inline]
    fn mul(self, factor: f32) -> Weight {
        Weight::new(self.pos * factor, self.neg * factor)
    }
}

/// Integrates `segment`'s supporting line over the strip `[left, left + 1)`.
///
/// Returns zero unless the strip overlaps the segment's x range. Inside the
/// strip the line is extrapolated, so a strip that straddles an endpoint is
/// integrated as if the segment continued.
///
/// Panics if the segment has no positive horizontal extent.
pub fn compute_coverage(segment: &LineSegment, left: f32) -> Weight {
    assert!(segment.to_x() > segment.from_x(),
            "degenerate coverage segment: {:?}",
            segment);

    let (px1, px2) = (left, left + 1.0);
    if !segment.overlaps_x_range(px1, px2) {
        return Weight::ZERO;
    }

    let py1 = segment.solve_y_for_x(px1);
    let py2 = segment.solve_y_for_x(px2);

    // Trapezoid: the line stays on one side of the axis across the strip.
    if py1.is_sign_negative() == py2.is_sign_negative() || approx_zero(py1) || approx_zero(py2) {
        return Weight::from_signed_area((py1 + py2) * 0.5);
    }

    // Two triangles meeting where the line crosses the axis.
    let x = segment.solve_x_for_y(0.0);
    let t = x - px1;
    let a1 = if x > segment.from_x() { py1 * t * 0.5 } else { 0.0 };
    let a2 = if x < segment.to_x() { py2 * (1.0 - t) * 0.5 } else { 0.0 };
    Weight::from_signed_area(a1) + Weight::from_signed_area(a2)
}

/// Shorthand for [`compute_coverage`] on the segment `(x1, y1) → (x2, y2)`.
#[inline]
pub fn coverage(x1: f32, y1: f32, x2: f32, y2: f32, left: f32) -> Weight {
    compute_coverage(&LineSegment::from_coords(x1, y1, x2, y2), left)
}

/// Rounds off the corners of short edges.
///
/// Blends `sqrt(2·x·255) / 2` with `x` itself; the raw value takes over as the
/// total edge length `d` approaches `SMOOTH_MAX_DISTANCE`.
pub fn smooth_correction(d: f32, x: f32) -> f32 {
    let rounded = f32::sqrt(2.0 * x * 255.0) * 0.5;
    let t = util::clamp(d / SMOOTH_MAX_DISTANCE as f32, 0.0, 1.0);
    util::lerp(rounded, x, t)
}
