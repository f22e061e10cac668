// smaa-area/geometry/src/line_segment.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use euclid::default::Point2D;
use euclid::point2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Point2D<f32>,
    pub to: Point2D<f32>,
}

impl LineSegment {
    #[inline]
    pub fn new(from: Point2D<f32>, to: Point2D<f32>) -> LineSegment {
        LineSegment { from, to }
    }

    #[inline]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> LineSegment {
        LineSegment::new(point2(x1, y1), point2(x2, y2))
    }

    #[inline]
    pub fn from_x(&self) -> f32 {
        self.from.x
    }

    #[inline]
    pub fn from_y(&self) -> f32 {
        self.from.y
    }

    #[inline]
    pub fn to_x(&self) -> f32 {
        self.to.x
    }

    #[inline]
    pub fn to_y(&self) -> f32 {
        self.to.y
    }

    /// Evaluates the supporting line at `x`. `x` may lie outside the segment.
    #[inline]
    pub fn solve_y_for_x(&self, x: f32) -> f32 {
        let slope = (self.to_y() - self.from_y()) / (self.to_x() - self.from_x());
        self.from_y() + slope * (x - self.from_x())
    }

    /// Returns the x coordinate where the supporting line reaches `y`.
    #[inline]
    pub fn solve_x_for_y(&self, y: f32) -> f32 {
        let inv_slope = (self.to_x() - self.from_x()) / (self.to_y() - self.from_y());
        (y - self.from_y()) * inv_slope + self.from_x()
    }

    /// Returns true if the x extents of the segment and `[min_x, max_x)` overlap.
    #[inline]
    pub fn overlaps_x_range(&self, min_x: f32, max_x: f32) -> bool {
        min_x < self.to_x() && max_x > self.from_x()
    }
}

#[cfg(test)]
mod test {
    use super::LineSegment;

    #[test]
    fn test_solve_y_extrapolates() {
        let segment = LineSegment::from_coords(0.0, -0.5, 0.5, 0.0);
        assert_eq!(segment.solve_y_for_x(0.0), -0.5);
        assert_eq!(segment.solve_y_for_x(1.0), 0.5);
    }

    #[test]
    fn test_solve_x_for_y() {
        let segment = LineSegment::from_coords(0.0, -1.0, 4.0, 1.0);
        assert_eq!(segment.solve_x_for_y(0.0), 2.0);
    }

    #[test]
    fn test_overlaps_x_range() {
        let segment = LineSegment::from_coords(0.5, 0.0, 2.0, 1.0);
        assert!(segment.overlaps_x_range(0.0, 1.0));
        assert!(segment.overlaps_x_range(1.0, 2.0));
        assert!(!segment.overlaps_x_range(2.0, 3.0));
        assert!(!segment.overlaps_x_range(-0.5, 0.5));
    }
}
