use crate::shared::pixel::{self, CHANNELS};

use super::line_pass::{self, LineScratch};

/// Separable box blur: one horizontal pass, then one vertical pass.
///
/// Each output channel is the truncated mean of a `2 * radius + 1` window.
/// Samples outside the raster replicate the nearest edge pixel.
pub fn box_blur(pixels: &mut [u32], width: usize, height: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let mut scratch = LineScratch::with_capacity(width.max(height));
    box_blur_horizontal(pixels, width, height, radius, &mut scratch);
    box_blur_vertical(pixels, width, height, radius, &mut scratch);
}

pub fn box_blur_horizontal(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
    scratch: &mut LineScratch,
) {
    line_pass::apply_rows(pixels, width, height, scratch, |input, output| {
        box_blur_line(input, output, radius)
    });
}

pub fn box_blur_vertical(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
    scratch: &mut LineScratch,
) {
    line_pass::apply_columns(pixels, width, height, scratch, |input, output| {
        box_blur_line(input, output, radius)
    });
}

/// Running-sum mean filter over a single line.
fn box_blur_line(input: &[u32], output: &mut [u32], radius: usize) {
    let len = input.len();
    if len == 0 {
        return;
    }
    let r = radius as isize;
    let diameter = (2 * radius + 1) as u32;

    let mut sums = [0u32; CHANNELS];
    for i in -r..=r {
        add(&mut sums, input[pixel::clamp_index(i, len)]);
    }

    for (x, out) in output.iter_mut().enumerate().take(len) {
        *out = pixel::pack(sums.map(|s| s / diameter));

        let x = x as isize;
        add(&mut sums, input[pixel::clamp_index(x + r + 1, len)]);
        subtract(&mut sums, input[pixel::clamp_index(x - r, len)]);
    }
}

#[inline]
fn add(sums: &mut [u32; CHANNELS], p: u32) {
    for (s, c) in sums.iter_mut().zip(pixel::unpack(p)) {
        *s += c;
    }
}

#[inline]
fn subtract(sums: &mut [u32; CHANNELS], p: u32) {
    for (s, c) in sums.iter_mut().zip(pixel::unpack(p)) {
        *s -= c;
    }
}
