use super::interpolate::BorderMode;
use norama_image::Image;

/// Weights of the 1D Lagrange interpolant of degree `N - 1` over the nodes
/// `0..N`, evaluated at `t`.
///
/// At an integer `t` the weights collapse to a unit impulse, so the kernels
/// built on top are exact at integer sample coordinates.
fn lagrange_weights<const N: usize>(t: f32) -> [f32; N] {
    let mut weights = [0.0f32; N];
    for (i, w) in weights.iter_mut().enumerate() {
        let mut acc = 1.0f32;
        for j in 0..N {
            if j != i {
                acc *= (t - j as f32) / (i as f32 - j as f32);
            }
        }
        *w = acc;
    }
    weights
}

/// Kernel for separable Lagrange interpolation over an NxN neighborhood.
///
/// `N` is the number of taps per axis (4 for bicubic, 6 for bipentic, 8 for
/// biheptic). Taps falling outside the image are resolved by the border mode.
pub(crate) fn lagrange_interpolation<const C: usize, const N: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    let (rows, cols) = (image.rows() as i64, image.cols() as i64);

    // anchor so that the sample point falls between the two middle taps
    let iu0 = u.floor() as i64 - (N as i64 / 2 - 1);
    let iv0 = v.floor() as i64 - (N as i64 / 2 - 1);

    let wu = lagrange_weights::<N>(u - iu0 as f32);
    let wv = lagrange_weights::<N>(v - iv0 as f32);

    let data = image.as_slice();

    let mut pixel = [0.0f32; C];
    for (i, &row_weight) in wv.iter().enumerate() {
        let yy = border.resolve_y(iv0 + i as i64, rows);

        let mut row_acc = [0.0f32; C];
        for (j, &col_weight) in wu.iter().enumerate() {
            let xx = border.resolve_x(iu0 + j as i64, cols);
            let base = (yy * cols as usize + xx) * C;

            // indices are resolved to the image bounds above
            let p = unsafe { data.get_unchecked(base..base + C) };
            for k in 0..C {
                row_acc[k] += p[k] * col_weight;
            }
        }

        for k in 0..C {
            pixel[k] += row_acc[k] * row_weight;
        }
    }

    pixel
}
