use std::path::Path;

use crate::image_io::domain::image_writer::ImageWriter;
use crate::shared::raster::Raster;

/// Writes a raster to an image file using the `image` crate.
///
/// The format follows the output extension. Formats without an alpha
/// channel (e.g. JPEG) are written as RGB.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, raster: &Raster) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.to_rgba8())
            .ok_or("Failed to create image from raster data")?;

        if supports_alpha(path) {
            img.save(path)?;
        } else {
            image::DynamicImage::ImageRgba8(img).to_rgb8().save(path)?;
        }
        Ok(())
    }
}

fn supports_alpha(path: &Path) -> bool {
    !matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref(),
        Some("jpg") | Some("jpeg") | Some("bmp")
    )
}
