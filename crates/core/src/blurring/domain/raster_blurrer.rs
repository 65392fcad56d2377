use crate::blurring::domain::blur_error::BlurError;
use crate::blurring::domain::blur_quality::BlurQuality;
use crate::shared::raster::Raster;

/// Domain interface for blurring a whole raster.
///
/// Implementations never mutate `raster`; they return a newly allocated
/// raster of the same dimensions.
pub trait RasterBlurrer: Send {
    fn blur(&self, raster: &Raster, radius: f32, quality: BlurQuality)
        -> Result<Raster, BlurError>;

    /// Liquid blur followed by a glass tint at `intensity` (0-1).
    fn glass_backdrop(
        &self,
        raster: &Raster,
        radius: f32,
        intensity: f32,
    ) -> Result<Raster, BlurError>;

    /// Liquid blur, then a glass backdrop at a fraction of `radius`.
    fn depth_backdrop(&self, raster: &Raster, radius: f32, depth: f32)
        -> Result<Raster, BlurError>;
}
