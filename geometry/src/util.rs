// smaa-area/geometry/src/util.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various utilities.

/// Values this close to zero are treated as lying on an axis.
pub const EPSILON: f32 = 1e-4;

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps `x` to `[min_val, max_val]`.
#[inline]
pub fn clamp(x: f32, min_val: f32, max_val: f32) -> f32 {
    f32::min(max_val, f32::max(min_val, x))
}

#[inline]
pub fn approx_zero(x: f32) -> bool {
    x.abs() <= EPSILON
}

#[cfg(test)]
mod test {
    use super::{clamp, lerp};

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }
}
