// smaa-area/area/src/lib.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Precomputes the area texture used by SMAA-style morphological
//! antialiasing.
//!
//! For every edge pattern, distance to each end of the edge, and subsample
//! offset, the texture stores how much of the current texel the antialiased
//! edge covers, split into the two sides of the edge. Renderers look the
//! weights up instead of integrating the edge per pixel.

#[macro_use]
extern crate log;

pub mod address;
pub mod area_map;
pub mod diag;
pub mod export;
pub mod generator;
pub mod kernel;
pub mod ortho;

pub use crate::area_map::AreaMap;
pub use crate::generator::{generate_area_map, AreaMapGenerator, Traversal};

/// Maximum distance to an edge end for horizontal and vertical edges.
pub const SIZE_ORTHO: usize = 16;
/// Maximum distance to an edge end for diagonal edges.
pub const SIZE_DIAG: usize = 20;

/// Columns sampled when checking diagonal weights by brute force.
pub const SAMPLES_DIAG: usize = 30;
/// Edges at least this long are no longer rounded off.
pub const SMOOTH_MAX_DISTANCE: usize = 32;

/// Edge end configurations: two bits per end of the edge.
pub const PATTERN_COUNT: usize = 16;

/// Subsample jitter across horizontal edges, one texture band each.
pub const SUBSAMPLE_OFFSETS_ORTHO: [f32; 7] = [0.0, -0.25, 0.25, -0.125, 0.125, -0.375, 0.375];

/// Subsample jitter `(x, y)` for diagonal edges, one texture band each.
pub const SUBSAMPLE_OFFSETS_DIAG: [(f32, f32); 5] = [
    (0.0, 0.0),
    (0.25, -0.25),
    (-0.25, 0.25),
    (0.125, -0.125),
    (-0.125, 0.125),
];
