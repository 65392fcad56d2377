use crate::shared::constants::{
    BLUE_SHIFT_PERCENT, RED_SHIFT_PERCENT, REFRACTION_ALPHA, REFRACTION_OFFSET,
};
use crate::shared::pixel;

use super::stack_blur;

/// Liquid glass: stack blur, then a chromatically shifted copy of the blur
/// overlaid at a small offset to fake refraction.
pub fn liquid_glass(pixels: &mut [u32], width: usize, height: usize, radius: usize) {
    stack_blur::stack_blur(pixels, width, height, radius);

    let mut shifted = pixels.to_vec();
    color_shift(&mut shifted);
    overlay_composite(
        pixels,
        &shifted,
        width,
        height,
        REFRACTION_OFFSET,
        REFRACTION_ALPHA,
    );
}

/// Boost red by 2% and cut blue by 1%. Alpha and green are untouched.
pub fn color_shift(pixels: &mut [u32]) {
    for p in pixels.iter_mut() {
        let [a, r, g, b] = pixel::unpack(*p);
        *p = pixel::pack([
            a,
            r * RED_SHIFT_PERCENT / 100,
            g,
            b * BLUE_SHIFT_PERCENT / 100,
        ]);
    }
}

/// Draw `layer` over `base` shifted right/down by `offset`, blended with
/// the overlay mode at `layer_alpha` (0-255).
///
/// Base pixels with no layer pixel above them are left as they are.
pub fn overlay_composite(
    base: &mut [u32],
    layer: &[u32],
    width: usize,
    height: usize,
    offset: (usize, usize),
    layer_alpha: u32,
) {
    debug_assert_eq!(base.len(), width * height);
    debug_assert_eq!(layer.len(), width * height);
    let (dx, dy) = offset;
    for y in dy..height {
        for x in dx..width {
            let src = layer[(y - dy) * width + (x - dx)];
            let dst = &mut base[y * width + x];
            *dst = overlay_pixel(src, *dst, layer_alpha);
        }
    }
}

/// Overlay blend of one straight-alpha pixel onto another, evaluated on
/// premultiplied channels.
fn overlay_pixel(src: u32, dst: u32, layer_alpha: u32) -> u32 {
    let s = pixel::unpack(src).map(|c| c as i32);
    let d = pixel::unpack(dst).map(|c| c as i32);

    let sa = s[0] * layer_alpha as i32 / 255;
    let da = d[0];
    let out_a = sa + da - sa * da / 255;
    if out_a == 0 {
        return 0;
    }

    let mut out = [out_a, 0, 0, 0];
    for c in 1..4 {
        let sc = s[c] * sa / 255;
        let dc = d[c] * da / 255;
        let blended = if 2 * dc < da {
            2 * sc * dc / 255
        } else {
            sa * da / 255 - 2 * (da - dc) * (sa - sc) / 255
        };
        let premultiplied = blended + sc * (255 - da) / 255 + dc * (255 - sa) / 255;
        out[c] = premultiplied * 255 / out_a;
    }
    pixel::pack_clamped(out)
}
