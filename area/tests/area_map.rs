// smaa-area/area/tests/area_map.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use smaa_area::address::{self, ortho_address};
use smaa_area::area_map::Texel;
use smaa_area::kernel;
use smaa_area::{generate_area_map, AreaMapGenerator, Traversal};
use smaa_area::{SIZE_ORTHO, SUBSAMPLE_OFFSETS_ORTHO};

#[test]
fn test_buffer_size() {
    let area_map = generate_area_map();
    let (width, height) = address::area_map_size();
    assert_eq!((area_map.width(), area_map.height()), (width, height));
    assert_eq!(area_map.slice_pitch(), area_map.row_pitch() * area_map.height());
    assert_eq!(area_map.slice_pitch(), 2 * width * height);
}

#[test]
fn test_pattern_zero_is_empty() {
    let area_map = generate_area_map();
    for offset in 0..SUBSAMPLE_OFFSETS_ORTHO.len() {
        for left in 0..SIZE_ORTHO {
            for right in 0..SIZE_ORTHO {
                let texel = area_map.texel_at(ortho_address(0, left, right, offset));
                assert_eq!(texel, Texel([0, 0]));
            }
        }
    }
}

#[test]
fn test_golden_corner_texel() {
    let area_map = generate_area_map();
    let expected = Texel::quantize(kernel::coverage(0.0, -0.5, 0.5, 0.0, 0.0));
    assert_eq!(expected, Texel([31, 0]));
    assert_eq!(area_map.texel_at(ortho_address(1, 0, 0, 0)), expected);
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = AreaMapGenerator::new(Traversal::Sequential).generate();
    let parallel = AreaMapGenerator::new(Traversal::Parallel).generate();
    assert_eq!(sequential.pixels(), parallel.pixels());
}
