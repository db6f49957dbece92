//! Equirectangular mapping rotation.
//!
//! Rotating an equirectangular mapping re-expresses the panorama in a
//! rotated spherical frame. Every output pixel is lifted to a direction,
//! rotated back into the source frame and resampled from the source
//! mapping.

use crate::coords::{
    direction, lonlat_from_direction, lonlat_to_pixel, pixel_to_lonlat, wrap_x, Rotation,
};
use crate::error::GnomonicError;
use crate::interpolation::{remap, BorderMode, InterpolationMode, PixelMap};
use crate::parallel::ExecutionStrategy;
use norama_image::Image;

/// Rotate an equirectangular mapping by azimuth, elevation and roll.
///
/// # Arguments
///
/// * `src` - The input equirectangular mapping with shape (height, width, C).
/// * `dst` - The output mapping; it must have the size of the input.
/// * `rotation` - The rotation to apply to the mapping.
/// * `interpolation` - The interpolation mode to use.
/// * `strategy` - The execution strategy for the per-row processing.
///
/// # Errors
///
/// The source and destination images must have the same size.
pub fn rotate_equirect<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    rotation: &Rotation,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<(), GnomonicError> {
    if dst.size() != src.size() {
        return Err(norama_image::ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    let size = src.size();
    let inverse = rotation.transpose();

    let map = PixelMap::from_fn(size, |x, y| {
        let (lon, lat) = pixel_to_lonlat(x as f64, y as f64, size);
        let dir = inverse.apply(direction(lon, lat));
        let (src_lon, src_lat) = lonlat_from_direction(dir);
        let (sx, sy) = lonlat_to_pixel(src_lon, src_lat, size);

        let sx = wrap_x(sx, size.width);
        let sy = sy.clamp(0.0, (size.height - 1) as f64);
        Some((sx as f32, sy as f32))
    });

    // the longitude axis of a full mapping is cyclic, so kernel taps wrap
    // across the seam
    remap(
        src,
        dst,
        &map,
        interpolation,
        BorderMode::WrapX,
        strategy,
        [0.0; C],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use norama_image::{ImageError, ImageSize};

    const SIZE: ImageSize = ImageSize {
        width: 16,
        height: 8,
    };

    fn lon_ramp(size: ImageSize) -> Result<Image<f32, 1>, ImageError> {
        let data = (0..size.width * size.height)
            .map(|i| (i % size.width) as f32)
            .collect();
        Image::new(size, data)
    }

    #[test]
    fn identity_rotation_is_identity() -> Result<(), GnomonicError> {
        let data = (0..SIZE.width * SIZE.height).map(|i| i as f32).collect();
        let src = Image::<f32, 1>::new(SIZE, data)?;
        let mut dst = Image::from_size_val(SIZE, 0.0)?;

        rotate_equirect(
            &src,
            &mut dst,
            &Rotation::identity(),
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        )?;

        for (a, b) in dst.as_slice().iter().zip(src.as_slice().iter()) {
            assert!((a - b).abs() < 1e-4);
        }

        Ok(())
    }

    #[test]
    fn azimuth_quarter_turn_shifts_columns() -> Result<(), GnomonicError> {
        let src = lon_ramp(SIZE)?;
        let mut dst = Image::from_size_val(SIZE, 0.0)?;

        rotate_equirect(
            &src,
            &mut dst,
            &Rotation::from_angles_deg(90.0, 0.0, 0.0),
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        )?;

        // the top row degenerates to the pole, skip it
        for y in 1..SIZE.height {
            for x in 0..SIZE.width {
                let expected = ((x + SIZE.width - 4) % SIZE.width) as f32;
                let got = *dst.get(x, y, 0)?;
                assert!(
                    (got - expected).abs() < 1e-3,
                    "pixel ({x}, {y}): got {got}, expected {expected}"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn rotation_round_trip() -> Result<(), GnomonicError> {
        let src = lon_ramp(SIZE)?;
        let rotation = Rotation::from_angles_deg(45.0, 0.0, 0.0);

        let mut rotated = Image::from_size_val(SIZE, 0.0)?;
        rotate_equirect(
            &src,
            &mut rotated,
            &rotation,
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        )?;

        let mut back = Image::from_size_val(SIZE, 0.0)?;
        rotate_equirect(
            &rotated,
            &mut back,
            &rotation.transpose(),
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        )?;

        // azimuth-only rotations shift integer columns, so the round trip
        // is exact away from the pole rows
        for y in 1..SIZE.height {
            for x in 0..SIZE.width {
                let a = *back.get(x, y, 0)?;
                let b = *src.get(x, y, 0)?;
                assert!((a - b).abs() < 1e-3, "pixel ({x}, {y}): {a} vs {b}");
            }
        }

        Ok(())
    }

    #[test]
    fn size_mismatch_is_rejected() -> Result<(), GnomonicError> {
        let src = Image::<f32, 3>::from_size_val(SIZE, 0.0)?;
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0,
        )?;

        let res = rotate_equirect(
            &src,
            &mut dst,
            &Rotation::identity(),
            InterpolationMode::Bilinear,
            ExecutionStrategy::Serial,
        );
        assert!(matches!(res, Err(GnomonicError::ImageError(_))));

        Ok(())
    }
}
