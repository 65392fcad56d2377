use crate::blurring::domain::blur_error::BlurError;
use crate::blurring::domain::blur_quality::BlurQuality;
use crate::blurring::domain::raster_blurrer::RasterBlurrer;
use crate::shared::raster::Raster;
use crate::shared::settings::BlurSettings;

/// Glass finish applied on top of a liquid blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    Glass { intensity: f32 },
    Depth { depth: f32 },
}

/// Everything needed to blur one raster.
///
/// With a backdrop set, `quality` is ignored: backdrops are always built
/// on the liquid blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurRequest {
    pub radius: f32,
    pub quality: BlurQuality,
    pub backdrop: Option<Backdrop>,
}

impl BlurRequest {
    pub fn new(radius: f32, quality: BlurQuality) -> Self {
        Self {
            radius,
            quality,
            backdrop: None,
        }
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn from_settings(settings: &BlurSettings) -> Self {
        let backdrop = settings.backdrop_intensity.map(|intensity| {
            if settings.depth {
                Backdrop::Depth { depth: intensity }
            } else {
                Backdrop::Glass { intensity }
            }
        });
        Self {
            radius: settings.radius,
            quality: settings.quality,
            backdrop,
        }
    }

    pub fn apply(
        &self,
        blurrer: &dyn RasterBlurrer,
        raster: &Raster,
    ) -> Result<Raster, BlurError> {
        match self.backdrop {
            None => blurrer.blur(raster, self.radius, self.quality),
            Some(Backdrop::Glass { intensity }) => {
                blurrer.glass_backdrop(raster, self.radius, intensity)
            }
            Some(Backdrop::Depth { depth }) => blurrer.depth_backdrop(raster, self.radius, depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_without_backdrop() {
        let settings = BlurSettings {
            radius: 4.0,
            quality: BlurQuality::Fast,
            backdrop_intensity: None,
            depth: true,
        };
        assert_eq!(
            BlurRequest::from_settings(&settings),
            BlurRequest::new(4.0, BlurQuality::Fast)
        );
    }

    #[test]
    fn test_from_settings_picks_backdrop_kind() {
        let mut settings = BlurSettings {
            backdrop_intensity: Some(0.5),
            ..BlurSettings::default()
        };
        assert_eq!(
            BlurRequest::from_settings(&settings).backdrop,
            Some(Backdrop::Glass { intensity: 0.5 })
        );
        settings.depth = true;
        assert_eq!(
            BlurRequest::from_settings(&settings).backdrop,
            Some(Backdrop::Depth { depth: 0.5 })
        );
    }

    #[test]
    fn test_with_backdrop_keeps_radius() {
        let req = BlurRequest::new(9.0, BlurQuality::Premium)
            .with_backdrop(Backdrop::Glass { intensity: 1.0 });
        assert_eq!(req.radius, 9.0);
        assert_eq!(req.backdrop, Some(Backdrop::Glass { intensity: 1.0 }));
    }
}
