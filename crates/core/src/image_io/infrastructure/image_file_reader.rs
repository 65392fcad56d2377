use std::path::Path;

use crate::image_io::domain::image_reader::ImageReader;
use crate::shared::raster::Raster;

/// Decodes any format the `image` crate supports into an ARGB raster.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Raster, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(Raster::from_rgba8(img.as_raw(), width, height)?)
    }
}
