/// Largest integer radius any kernel will use. Larger requests are clamped.
pub const MAX_RADIUS: usize = 1024;

/// Premium pass planning: below this radius a single pass is used.
pub const TWO_PASS_RADIUS: f32 = 5.0;
/// Premium pass planning: at or above this radius three passes are used.
pub const THREE_PASS_RADIUS: f32 = 15.0;

/// Red gain of the chromatic shift, in percent.
pub const RED_SHIFT_PERCENT: u32 = 102;
/// Blue gain of the chromatic shift, in percent.
pub const BLUE_SHIFT_PERCENT: u32 = 99;

/// Offset of the shifted refraction layer relative to the base, in pixels.
pub const REFRACTION_OFFSET: (usize, usize) = (2, 1);
/// Layer alpha of the refraction overlay (~20%).
pub const REFRACTION_ALPHA: u32 = 51;

/// Scale applied to the radius of the second pass of a depth backdrop.
pub const DEPTH_RADIUS_SCALE: f32 = 0.3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
