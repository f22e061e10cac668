// smaa-area/area/src/export.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writing the area map to disk.

use crate::area_map::{AreaMap, PixelFormat};
use image::{ColorType, ImageError, ImageFormat};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExportFormat {
    /// 8-bit luma + alpha PNG; the positive weight is stored as luma.
    Png,
    /// Headerless `R8G8` bytes, row-major.
    Raw,
}

impl ExportFormat {
    /// Guesses the format from a file extension, defaulting to PNG.
    pub fn from_path(path: &Path) -> ExportFormat {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("raw") ||
                               extension.eq_ignore_ascii_case("bin") => ExportFormat::Raw,
            _ => ExportFormat::Png,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(string: &str) -> Result<ExportFormat, String> {
        match &*string.to_ascii_lowercase() {
            "png" => Ok(ExportFormat::Png),
            "raw" | "bin" => Ok(ExportFormat::Raw),
            _ => Err(format!("unknown export format `{}`", string)),
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Image(ImageError),
}

impl Display for ExportError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ExportError::Io(ref error) => write!(formatter, "I/O error: {}", error),
            ExportError::Image(ref error) => write!(formatter, "image encoding error: {}", error),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ExportError::Io(ref error) => Some(error),
            ExportError::Image(ref error) => Some(error),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(error: io::Error) -> ExportError {
        ExportError::Io(error)
    }
}

impl From<ImageError> for ExportError {
    fn from(error: ImageError) -> ExportError {
        ExportError::Image(error)
    }
}

pub fn write_area_map<P>(area_map: &AreaMap, path: P, format: ExportFormat)
                         -> Result<(), ExportError> where P: AsRef<Path> {
    let path = path.as_ref();
    debug!("writing {}x{} area map to {} as {:?}",
           area_map.width(),
           area_map.height(),
           path.display(),
           format);

    match format {
        ExportFormat::Raw => fs::write(path, area_map.pixels())?,
        ExportFormat::Png => {
            image::save_buffer_with_format(path,
                                           area_map.pixels(),
                                           area_map.width() as u32,
                                           area_map.height() as u32,
                                           color_type(area_map.format()),
                                           ImageFormat::Png)?
        }
    }
    Ok(())
}

#[inline]
fn color_type(format: PixelFormat) -> ColorType {
    match format {
        PixelFormat::RG8 => ColorType::La8,
    }
}

#[cfg(test)]
mod test {
    use super::{write_area_map, ExportFormat};
    use crate::area_map::{AreaMap, Texel};
    use std::env;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("AreaTex.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("AreaTex.RAW")), ExportFormat::Raw);
        assert_eq!(ExportFormat::from_path(Path::new("AreaTex")), ExportFormat::Png);
        assert_eq!("raw".parse::<ExportFormat>(), Ok(ExportFormat::Raw));
        assert!("dds".parse::<ExportFormat>().is_err());
    }

    fn sample_map() -> AreaMap {
        let mut area_map = AreaMap::new(3, 2);
        let offset = area_map.offset_of(2, 1);
        area_map.set_texel(offset, Texel([31, 200]));
        area_map
    }

    #[test]
    fn test_png_round_trips_bytes() {
        let area_map = sample_map();
        let path = env::temp_dir().join(format!("smaa-area-test-{}.png", std::process::id()));
        write_area_map(&area_map, &path, ExportFormat::Png).unwrap();

        let image = image::open(&path).unwrap().to_luma_alpha();
        fs::remove_file(&path).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(&*image.into_raw(), area_map.pixels());
    }

    #[test]
    fn test_raw_is_headerless() {
        let area_map = sample_map();
        let path = env::temp_dir().join(format!("smaa-area-test-{}.raw", std::process::id()));
        write_area_map(&area_map, &path, ExportFormat::Raw).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(bytes.len(), area_map.slice_pitch());
        assert_eq!(&bytes[..], area_map.pixels());
    }
}
