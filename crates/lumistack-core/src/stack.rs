use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, StackError};
use crate::raster::{alloc_samples, RasterImage};

/// Combine aligned images by taking the per-sample median across the stack.
///
/// Each channel is treated independently. Uses `select_nth_unstable` for O(n)
/// median selection and parallelizes at the row level for large images.
pub fn median_stack(images: &[RasterImage]) -> Result<RasterImage> {
    if images.len() < 2 {
        return Err(StackError::InsufficientInput {
            required: 2,
            got: images.len(),
        });
    }
    check_shapes(images)?;

    let (h, w, c) = images[0].data.dim();
    let n = images.len();
    let row_len = w * c;

    let mut samples = alloc_samples(h * row_len)?;

    if h * w * c >= PARALLEL_PIXEL_THRESHOLD {
        // Row-parallel: each row allocates its own stack scratch buffer
        samples
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(row, out_row)| {
                let mut stack_values = vec![0u8; n];
                fill_row_medians(images, row, out_row, &mut stack_values);
            });
    } else {
        // Sequential for small images
        let mut stack_values = vec![0u8; n];
        for (row, out_row) in samples.chunks_exact_mut(row_len).enumerate() {
            fill_row_medians(images, row, out_row, &mut stack_values);
        }
    }

    Ok(RasterImage::from_samples(w as u32, h as u32, c, samples))
}

fn check_shapes(images: &[RasterImage]) -> Result<()> {
    let (h, w, c) = images[0].data.dim();
    for image in &images[1..] {
        let (ih, iw, ic) = image.data.dim();
        if (ih, iw, ic) != (h, w, c) {
            return Err(StackError::ShapeMismatch {
                expected_width: w as u32,
                expected_height: h as u32,
                expected_channels: c,
                width: iw as u32,
                height: ih as u32,
                channels: ic,
            });
        }
    }
    Ok(())
}

fn fill_row_medians(
    images: &[RasterImage],
    row: usize,
    out_row: &mut [u8],
    stack_values: &mut [u8],
) {
    let (_, w, c) = images[0].data.dim();
    for col in 0..w {
        for ch in 0..c {
            for (i, image) in images.iter().enumerate() {
                stack_values[i] = image.data[[row, col, ch]];
            }
            out_row[col * c + ch] = compute_median(stack_values);
        }
    }
}

/// Median of the sample values. An even count averages the two middle values,
/// truncating to the 8-bit range.
fn compute_median(values: &mut [u8]) -> u8 {
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        *values.select_nth_unstable(mid).1
    } else {
        values.select_nth_unstable(mid);
        values[..mid].select_nth_unstable(mid - 1);
        ((values[mid - 1] as u16 + values[mid] as u16) / 2) as u8
    }
}
