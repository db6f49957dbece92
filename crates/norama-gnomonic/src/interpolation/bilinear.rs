use super::interpolate::BorderMode;
use norama_image::Image;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - The border handling for taps leaving the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    let (rows, cols) = (image.rows() as i64, image.cols() as i64);

    let iu = u.floor() as i64;
    let iv = v.floor() as i64;

    let frac_u = u - iu as f32;
    let frac_v = v - iv as f32;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu0 = border.resolve_x(iu, cols);
    let iu1 = border.resolve_x(iu + 1, cols);
    let iv0 = border.resolve_y(iv, rows);
    let iv1 = border.resolve_y(iv + 1, rows);

    let cols = cols as usize;
    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    // indices are resolved to the image bounds above
    let p00 = unsafe { data.get_unchecked(base00..base00 + C) };
    let p01 = unsafe { data.get_unchecked(base01..base01 + C) };
    let p10 = unsafe { data.get_unchecked(base10..base10 + C) };
    let p11 = unsafe { data.get_unchecked(base11..base11 + C) };

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = p00[k] * w00 + p01[k] * w01 + p10[k] * w10 + p11[k] * w11;
    }

    pixel
}
