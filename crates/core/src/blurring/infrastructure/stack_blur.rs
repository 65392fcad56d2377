use crate::shared::pixel::{self, CHANNELS};

use super::line_pass::{self, LineScratch};

/// Stack blur along rows and then columns.
///
/// The kernel weights a sample at offset `i` from the centre by
/// `radius + 1 - |i|`, so the total weight is `(radius + 1)^2`. Each line
/// keeps a ring buffer of `2 * radius + 1` samples plus running sums, so
/// the cost per pixel does not grow with the radius.
pub fn stack_blur(pixels: &mut [u32], width: usize, height: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let mut scratch = LineScratch::with_capacity(width.max(height));
    let mut stack = Vec::with_capacity(2 * radius + 1);
    stack_blur_horizontal(pixels, width, height, radius, &mut scratch, &mut stack);
    stack_blur_vertical(pixels, width, height, radius, &mut scratch, &mut stack);
}

pub fn stack_blur_horizontal(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
    scratch: &mut LineScratch,
    stack: &mut Vec<u32>,
) {
    line_pass::apply_rows(pixels, width, height, scratch, |input, output| {
        stack_blur_line(input, output, radius, stack)
    });
}

pub fn stack_blur_vertical(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
    scratch: &mut LineScratch,
    stack: &mut Vec<u32>,
) {
    line_pass::apply_columns(pixels, width, height, scratch, |input, output| {
        stack_blur_line(input, output, radius, stack)
    });
}

/// One line of stack blur.
///
/// `sum` is the weighted window total, `sum_in` holds the samples right of
/// centre (weights about to grow) and `sum_out` holds the centre and the
/// samples left of it (weights about to shrink). Advancing one pixel
/// subtracts `sum_out`, swaps the oldest stack slot for the entering sample,
/// adds `sum_in`, then moves the new centre from `sum_in` to `sum_out`.
fn stack_blur_line(input: &[u32], output: &mut [u32], radius: usize, stack: &mut Vec<u32>) {
    let len = input.len();
    if len == 0 {
        return;
    }
    let r = radius as isize;
    let div = 2 * radius + 1;
    let weight_total = ((radius + 1) * (radius + 1)) as u32;

    stack.clear();
    stack.resize(div, 0);

    let mut sum = [0u32; CHANNELS];
    let mut sum_in = [0u32; CHANNELS];
    let mut sum_out = [0u32; CHANNELS];

    for i in -r..=r {
        let p = input[pixel::clamp_index(i, len)];
        stack[(i + r) as usize] = p;
        let weight = (radius + 1 - i.unsigned_abs()) as u32;
        let channels = pixel::unpack(p);
        for c in 0..CHANNELS {
            sum[c] += channels[c] * weight;
            if i > 0 {
                sum_in[c] += channels[c];
            } else {
                sum_out[c] += channels[c];
            }
        }
    }

    let mut stack_pointer = radius;

    for (x, out) in output.iter_mut().enumerate().take(len) {
        *out = pixel::pack(sum.map(|s| s / weight_total));

        for c in 0..CHANNELS {
            sum[c] -= sum_out[c];
        }

        let oldest = (stack_pointer + div - radius) % div;
        let leaving = pixel::unpack(stack[oldest]);
        let entering = input[pixel::clamp_index(x as isize + r + 1, len)];
        stack[oldest] = entering;
        let entering = pixel::unpack(entering);

        for c in 0..CHANNELS {
            sum_out[c] -= leaving[c];
            sum_in[c] += entering[c];
            sum[c] += sum_in[c];
        }

        stack_pointer = (stack_pointer + 1) % div;
        let centre = pixel::unpack(stack[stack_pointer]);
        for c in 0..CHANNELS {
            sum_out[c] += centre[c];
            sum_in[c] -= centre[c];
        }
    }
}
