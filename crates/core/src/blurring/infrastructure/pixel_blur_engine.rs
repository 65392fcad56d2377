use crate::blurring::domain::blur_error::{validate_geometry, BlurError};
use crate::blurring::domain::blur_quality::BlurQuality;
use crate::blurring::domain::raster_blurrer::RasterBlurrer;
use crate::shared::constants::{DEPTH_RADIUS_SCALE, MAX_RADIUS};
use crate::shared::raster::Raster;

use super::box_blur::box_blur;
use super::glass_backdrop::apply_glass_tint;
use super::liquid_glass::liquid_glass;
use super::multi_pass_gaussian::{multi_pass_gaussian, plan_passes};
use super::stack_blur::stack_blur;

/// Stateless software blur engine.
///
/// Every call copies the input, blurs the copy in place and hands it back;
/// the caller's pixels are never touched. Calls share no state, so one
/// engine can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelBlurEngine;

impl PixelBlurEngine {
    pub fn new() -> Self {
        Self
    }

    /// Blur a raster. A radius of zero, below zero or NaN returns a copy.
    pub fn blur(
        &self,
        raster: &Raster,
        radius: f32,
        quality: BlurQuality,
    ) -> Result<Raster, BlurError> {
        let pixels = self.blur_pixels(
            raster.pixels(),
            raster.width(),
            raster.height(),
            radius,
            quality,
        )?;
        Raster::new(pixels, raster.width(), raster.height())
    }

    /// Blur a raw ARGB buffer, rejecting buffers that don't match
    /// `width * height`.
    pub fn blur_pixels(
        &self,
        pixels: &[u32],
        width: u32,
        height: u32,
        radius: f32,
        quality: BlurQuality,
    ) -> Result<Vec<u32>, BlurError> {
        let (w, h) = (width as usize, height as usize);
        validate_geometry(pixels.len(), w, h)?;

        let mut out = pixels.to_vec();
        if radius.is_nan() || radius <= 0.0 || out.is_empty() {
            return Ok(out);
        }

        let radius = clamp_radius(radius);
        log::debug!("Blurring {width}x{height} with {quality} (radius={radius})");

        match quality {
            BlurQuality::Fast => box_blur(&mut out, w, h, radius as usize),
            BlurQuality::Standard => stack_blur(&mut out, w, h, radius as usize),
            BlurQuality::Premium => multi_pass_gaussian(&mut out, w, h, plan_passes(radius)),
            BlurQuality::Liquid => liquid_glass(&mut out, w, h, radius as usize),
        }
        Ok(out)
    }

    /// Liquid blur followed by the glass tint at `intensity` (0-1).
    pub fn glass_backdrop(
        &self,
        raster: &Raster,
        radius: f32,
        intensity: f32,
    ) -> Result<Raster, BlurError> {
        let mut blurred = self.blur(raster, radius, BlurQuality::Liquid)?;
        apply_glass_tint(blurred.pixels_mut(), intensity);
        Ok(blurred)
    }

    /// Two-stage backdrop: a liquid blur at `radius`, then a glass backdrop
    /// at a fraction of that radius with `depth` as the tint intensity.
    pub fn depth_backdrop(
        &self,
        raster: &Raster,
        radius: f32,
        depth: f32,
    ) -> Result<Raster, BlurError> {
        let blurred = self.blur(raster, radius, BlurQuality::Liquid)?;
        self.glass_backdrop(&blurred, radius * DEPTH_RADIUS_SCALE, depth)
    }
}

impl RasterBlurrer for PixelBlurEngine {
    fn blur(
        &self,
        raster: &Raster,
        radius: f32,
        quality: BlurQuality,
    ) -> Result<Raster, BlurError> {
        PixelBlurEngine::blur(self, raster, radius, quality)
    }

    fn glass_backdrop(
        &self,
        raster: &Raster,
        radius: f32,
        intensity: f32,
    ) -> Result<Raster, BlurError> {
        PixelBlurEngine::glass_backdrop(self, raster, radius, intensity)
    }

    fn depth_backdrop(
        &self,
        raster: &Raster,
        radius: f32,
        depth: f32,
    ) -> Result<Raster, BlurError> {
        PixelBlurEngine::depth_backdrop(self, raster, radius, depth)
    }
}

fn clamp_radius(radius: f32) -> f32 {
    let max = MAX_RADIUS as f32;
    if radius > max {
        log::warn!("Blur radius {radius} exceeds {MAX_RADIUS}, clamping");
        max
    } else {
        radius
    }
}
