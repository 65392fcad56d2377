use crate::blurring::domain::blur_error::{validate_geometry, BlurError};

use super::pixel;

/// A rectangular grid of packed ARGB pixels in row-major order.
///
/// The pixel at `(x, y)` lives at index `y * width + x`. The buffer length
/// always equals `width * height`; construction rejects anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Raster {
    pub fn new(pixels: Vec<u32>, width: u32, height: u32) -> Result<Self, BlurError> {
        validate_geometry(pixels.len(), width as usize, height as usize)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A raster where every pixel has the same ARGB value.
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        Self {
            pixels: vec![argb; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a raster from RGBA8 bytes (the `image` crate's layout).
    pub fn from_rgba8(bytes: &[u8], width: u32, height: u32) -> Result<Self, BlurError> {
        if bytes.len() % 4 != 0 {
            return Err(BlurError::InvalidRaster {
                width: width as usize,
                height: height as usize,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| pixel::argb(px[3], px[0], px[1], px[2]))
            .collect();
        Self::new(pixels, width, height)
    }

    /// Convert back to RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            let [a, r, g, b] = pixel::unpack(p);
            bytes.extend_from_slice(&[r as u8, g as u8, b as u8, a as u8]);
        }
        bytes
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
