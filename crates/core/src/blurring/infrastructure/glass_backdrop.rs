use crate::shared::pixel;

/// Rec. 709 luminance weights used by the saturation matrix.
const LUMA: [f32; 3] = [0.213, 0.715, 0.072];

/// Tint a blurred backdrop so it reads as glass.
///
/// Saturation is raised to `1 + 0.3 * intensity` and RGB is scaled by
/// `1 + 0.1 * intensity`. The tinted copy is then drawn source-over onto the
/// original at `0.7 + 0.3 * intensity` opacity. `intensity` is clamped to
/// `[0, 1]`.
pub fn apply_glass_tint(pixels: &mut [u32], intensity: f32) {
    let intensity = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    let layer_alpha = glass_layer_alpha(intensity);

    for p in pixels.iter_mut() {
        let [a, r, g, b] = pixel::unpack(*p);
        let tinted = tint_rgb([r as f32, g as f32, b as f32], intensity)
            .map(|c| c.round().clamp(0.0, 255.0) as u32);
        let src = pixel::pack([a, tinted[0], tinted[1], tinted[2]]);
        *p = source_over(src, *p, layer_alpha);
    }
}

/// Opacity of the tinted layer, truncated to an integer alpha.
fn glass_layer_alpha(intensity: f32) -> u32 {
    (255.0 * (0.7 + intensity * 0.3)) as u32
}

/// Saturation followed by uniform scale, on unclamped channel values.
pub fn tint_rgb(rgb: [f32; 3], intensity: f32) -> [f32; 3] {
    let saturation = 1.0 + intensity * 0.3;
    let scale = 1.0 + intensity * 0.1;
    let luma: f32 = rgb.iter().zip(LUMA).map(|(c, w)| c * w).sum();
    rgb.map(|c| (luma + (c - luma) * saturation) * scale)
}

/// Porter-Duff source-over of straight-alpha pixels with an extra layer alpha.
fn source_over(src: u32, dst: u32, layer_alpha: u32) -> u32 {
    let s = pixel::unpack(src);
    let d = pixel::unpack(dst);
    let sa = s[0] * layer_alpha / 255;
    let da = d[0];
    let out_a = sa + da - sa * da / 255;
    if out_a == 0 {
        return 0;
    }
    let mut out = [out_a, 0, 0, 0];
    for c in 1..4 {
        let numerator = s[c] * sa * 255 + d[c] * da * (255 - sa);
        out[c] = numerator / (out_a * 255);
    }
    pixel::pack(out)
}
