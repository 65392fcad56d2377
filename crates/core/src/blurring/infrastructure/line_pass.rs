use ndarray::{ArrayView1, ArrayViewMut2};

/// Reusable buffers for one-dimensional passes over a raster.
///
/// Each line is copied into `input` before the kernel runs, so a kernel
/// writing its output never observes its own results.
#[derive(Default)]
pub struct LineScratch {
    input: Vec<u32>,
    output: Vec<u32>,
}

impl LineScratch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            input: Vec::with_capacity(capacity),
            output: Vec::with_capacity(capacity),
        }
    }
}

/// Run `kernel(line_in, line_out)` over every row.
pub fn apply_rows(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    scratch: &mut LineScratch,
    mut kernel: impl FnMut(&[u32], &mut [u32]),
) {
    debug_assert_eq!(pixels.len(), width * height);
    if width == 0 {
        return;
    }
    for row in pixels.chunks_exact_mut(width).take(height) {
        scratch.input.clear();
        scratch.input.extend_from_slice(row);
        kernel(&scratch.input, row);
    }
}

/// Run `kernel(line_in, line_out)` over every column.
///
/// Columns are walked through a `(height, width)` view of the buffer.
pub fn apply_columns(
    pixels: &mut [u32],
    width: usize,
    height: usize,
    scratch: &mut LineScratch,
    mut kernel: impl FnMut(&[u32], &mut [u32]),
) {
    if width == 0 || height == 0 {
        return;
    }
    let mut grid = ArrayViewMut2::from_shape((height, width), pixels)
        .expect("Pixel buffer length must match dimensions");
    scratch.output.resize(height, 0);
    for mut column in grid.columns_mut() {
        scratch.input.clear();
        scratch.input.extend(column.iter().copied());
        kernel(&scratch.input, &mut scratch.output);
        column.assign(&ArrayView1::from(scratch.output.as_slice()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_see_unmodified_input() {
        let mut pixels = vec![1, 2, 3, 4, 5, 6];
        let mut scratch = LineScratch::default();
        apply_rows(&mut pixels, 3, 2, &mut scratch, |input, output| {
            for (i, out) in output.iter_mut().enumerate() {
                // Reads the right neighbour, which a naive in-place pass would clobber.
                *out = input[(i + 1) % input.len()];
            }
        });
        assert_eq!(pixels, vec![2, 3, 1, 5, 6, 4]);
    }

    #[test]
    fn test_columns_visit_top_to_bottom() {
        let mut pixels = vec![1, 2, 3, 4, 5, 6];
        let mut scratch = LineScratch::with_capacity(3);
        apply_columns(&mut pixels, 3, 2, &mut scratch, |input, output| {
            output[0] = input[1];
            output[1] = input[0];
        });
        assert_eq!(pixels, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_columns_pass_whole_column_to_kernel() {
        // 2x3 raster: columns are [1, 3, 5] and [2, 4, 6].
        let mut pixels = vec![1, 2, 3, 4, 5, 6];
        let mut scratch = LineScratch::default();
        let mut seen = Vec::new();
        apply_columns(&mut pixels, 2, 3, &mut scratch, |input, output| {
            seen.push(input.to_vec());
            for (out, &p) in output.iter_mut().zip(input.iter().rev()) {
                *out = p;
            }
        });
        assert_eq!(seen, vec![vec![1, 3, 5], vec![2, 4, 6]]);
        assert_eq!(pixels, vec![5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_empty_raster_is_noop() {
        let mut pixels: Vec<u32> = Vec::new();
        let mut scratch = LineScratch::default();
        apply_rows(&mut pixels, 0, 5, &mut scratch, |_, _| panic!("no rows"));
        apply_columns(&mut pixels, 5, 0, &mut scratch, |_, _| panic!("no columns"));
    }
}
