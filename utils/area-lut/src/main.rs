// smaa-area/utils/area-lut/src/main.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generates the SMAA area texture.

#[macro_use]
extern crate log;

use clap::{App, Arg};
use rayon::ThreadPoolBuilder;
use smaa_area::export::{self, ExportFormat};
use smaa_area::{AreaMapGenerator, Traversal};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "AreaTex.png";

fn main() {
    pretty_env_logger::init();

    let matches =
        App::new("area-lut").arg(Arg::with_name("format").short("f")
                                                         .long("format")
                                                         .value_name("FORMAT")
                                                         .takes_value(true)
                                                         .possible_values(&["png", "raw"])
                                                         .help("Output format (default: from \
                                                                the output extension)"))
                            .arg(Arg::with_name("jobs").short("j")
                                                       .long("jobs")
                                                       .value_name("THREADS")
                                                       .takes_value(true)
                                                       .help("Number of threads to use"))
                            .arg(Arg::with_name("no-diag").long("no-diag")
                                                          .help("Leave the diagonal region empty"))
                            .arg(Arg::with_name("OUTPUT").help("Path to the output texture")
                                                         .required(false)
                                                         .index(1))
                            .get_matches();

    let output_path = PathBuf::from(matches.value_of("OUTPUT").unwrap_or(DEFAULT_OUTPUT_PATH));
    let format = match matches.value_of("format") {
        Some(format) => format.parse().unwrap_or_else(|error: String| fail(&error)),
        None => ExportFormat::from_path(&output_path),
    };
    let jobs: Option<usize> = matches.value_of("jobs").map(|string| {
        match string.parse() {
            Ok(jobs) if jobs > 0 => jobs,
            _ => fail(&format!("invalid thread count `{}`", string)),
        }
    });

    // Set up Rayon.
    let mut thread_pool_builder = ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        thread_pool_builder = thread_pool_builder.num_threads(jobs);
    }
    if let Err(error) = thread_pool_builder.build_global() {
        warn!("couldn't configure the thread pool: {}", error);
    }

    let generator = AreaMapGenerator {
        traversal: match jobs {
            Some(1) => Traversal::Sequential,
            _ => Traversal::Parallel,
        },
        diagonal: !matches.is_present("no-diag"),
    };

    let start_time = Instant::now();
    let area_map = generator.generate();
    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if let Err(error) = export::write_area_map(&area_map, &output_path, format) {
        fail(&format!("couldn't write {}: {}", output_path.display(), error));
    }

    println!("{}x{} area texture generated in {:.3}ms",
             area_map.width(),
             area_map.height(),
             elapsed_ms);
    println!("wrote {} ({:?})", output_path.display(), format);
}

fn fail(message: &str) -> ! {
    eprintln!("area-lut: {}", message);
    process::exit(1)
}
