use crate::error::GnomonicError;
use crate::parallel::{self, ExecutionStrategy};

use super::interpolate::{interpolate_pixel, BorderMode, InterpolationMode};
use super::map::PixelMap;
use norama_image::Image;

/// Apply a generic geometric transformation to an image.
///
/// For each destination pixel the source coordinates are read from the map
/// and the source image is sampled there with the requested interpolation
/// kernel. Destination pixels whose map entry is non-finite receive the
/// `background` pixel instead.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map` - The per-pixel source coordinates.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border handling for kernel taps leaving the source.
/// * `strategy` - The execution strategy for the per-row processing.
/// * `background` - The pixel written where the map has no source.
///
/// # Errors
///
/// The destination image must have the same size as the coordinate map.
pub fn remap<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map: &PixelMap,
    interpolation: InterpolationMode,
    border: BorderMode,
    strategy: ExecutionStrategy,
    background: [f32; C],
) -> Result<(), GnomonicError> {
    if dst.size() != map.size() {
        return Err(GnomonicError::InvalidMapSize(
            map.size().width,
            map.size().height,
            dst.width(),
            dst.height(),
        ));
    }

    let cols = dst.cols();
    let (map_x, map_y) = (map.x(), map.y());

    parallel::for_each_row(dst.as_slice_mut(), C * cols, strategy, |r, row| {
        let row_base = r * cols;
        row.chunks_exact_mut(C)
            .enumerate()
            .for_each(|(c, dst_pixel)| {
                let (x, y) = (map_x[row_base + c], map_y[row_base + c]);
                if x.is_finite() && y.is_finite() {
                    dst_pixel.copy_from_slice(&interpolate_pixel(src, x, y, interpolation, border));
                } else {
                    dst_pixel.copy_from_slice(&background);
                }
            });
    })?;

    Ok(())
}
