// smaa-area/area/src/generator.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives the resolvers over every tuple and fills the area map.

use crate::address::{self, AREA_MAP_HEIGHT, AREA_MAP_WIDTH};
use crate::area_map::{AreaMap, Texel};
use crate::diag::diag_weight;
use crate::kernel::Weight;
use crate::ortho::ortho_weight;
use crate::{PATTERN_COUNT, SIZE_DIAG, SIZE_ORTHO, SUBSAMPLE_OFFSETS_DIAG, SUBSAMPLE_OFFSETS_ORTHO};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Traversal {
    Sequential,
    /// Computes weights on the global Rayon pool, then writes them on the
    /// calling thread.
    Parallel,
}

impl Default for Traversal {
    #[inline]
    fn default() -> Traversal {
        Traversal::Sequential
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AreaMapGenerator {
    pub traversal: Traversal,
    /// When false the diagonal region is left zeroed.
    pub diagonal: bool,
}

impl Default for AreaMapGenerator {
    #[inline]
    fn default() -> AreaMapGenerator {
        AreaMapGenerator { traversal: Traversal::default(), diagonal: true }
    }
}

/// One region of the texture: an edge category with its own block size,
/// offset table, resolver and address scheme.
#[derive(Clone, Copy)]
struct Region {
    name: &'static str,
    size: usize,
    offset_count: usize,
    weight: fn(usize, usize, usize, usize) -> Weight,
    address: fn(usize, usize, usize, usize) -> usize,
}

const ORTHO_REGION: Region = Region {
    name: "orthogonal",
    size: SIZE_ORTHO,
    offset_count: SUBSAMPLE_OFFSETS_ORTHO.len(),
    weight: ortho_weight,
    address: address::ortho_address,
};

const DIAG_REGION: Region = Region {
    name: "diagonal",
    size: SIZE_DIAG,
    offset_count: SUBSAMPLE_OFFSETS_DIAG.len(),
    weight: diag_weight,
    address: address::diag_address,
};

impl Region {
    #[inline]
    fn tuple_count(&self) -> usize {
        self.offset_count * self.size * self.size * PATTERN_COUNT
    }

    /// Inverse of the sequential loop nest: offset, left, right, pattern.
    #[inline]
    fn tuple(&self, index: usize) -> (usize, usize, usize, usize) {
        let pattern = index % PATTERN_COUNT;
        let index = index / PATTERN_COUNT;
        let right = index % self.size;
        let index = index / self.size;
        let left = index % self.size;
        let offset = index / self.size;
        (pattern, left, right, offset)
    }

    #[inline]
    fn texel(&self, pattern: usize, left: usize, right: usize, offset: usize) -> (usize, Texel) {
        let address = (self.address)(pattern, left, right, offset);
        let weight = (self.weight)(pattern, left, right, offset);
        (address, Texel::quantize(weight))
    }

    fn fill_sequentially(&self, area_map: &mut AreaMap) {
        for offset in 0..self.offset_count {
            debug!("{} offset {}", self.name, offset);
            for left in 0..self.size {
                for right in 0..self.size {
                    for pattern in 0..PATTERN_COUNT {
                        let (address, texel) = self.texel(pattern, left, right, offset);
                        area_map.set_texel(address, texel);
                    }
                }
            }
        }
    }

    fn fill_in_parallel(&self, area_map: &mut AreaMap) {
        let texels: Vec<(usize, Texel)> = (0..self.tuple_count())
            .into_par_iter()
            .map(|index| {
                let (pattern, left, right, offset) = self.tuple(index);
                self.texel(pattern, left, right, offset)
            })
            .collect();
        for (address, texel) in texels {
            area_map.set_texel(address, texel);
        }
    }
}

impl AreaMapGenerator {
    #[inline]
    pub fn new(traversal: Traversal) -> AreaMapGenerator {
        AreaMapGenerator { traversal, ..AreaMapGenerator::default() }
    }

    pub fn generate(&self) -> AreaMap {
        let mut area_map = AreaMap::new(AREA_MAP_WIDTH, AREA_MAP_HEIGHT);

        self.fill(&ORTHO_REGION, &mut area_map);
        if self.diagonal {
            self.fill(&DIAG_REGION, &mut area_map);
        } else {
            info!("skipping diagonal region");
        }

        area_map
    }

    fn fill(&self, region: &Region, area_map: &mut AreaMap) {
        info!("generating {} region: {} tuples ({:?})",
              region.name,
              region.tuple_count(),
              self.traversal);
        let start_time = Instant::now();
        match self.traversal {
            Traversal::Sequential => region.fill_sequentially(area_map),
            Traversal::Parallel => region.fill_in_parallel(area_map),
        }
        info!("{} region done in {:.3}ms",
              region.name,
              start_time.elapsed().as_secs_f64() * 1000.0);
    }
}

/// Builds the complete area map on the calling thread.
pub fn generate_area_map() -> AreaMap {
    AreaMapGenerator::default().generate()
}
