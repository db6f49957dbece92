use super::interpolate::BorderMode;
use super::lagrange::lagrange_interpolation;
use norama_image::Image;

/// Kernel for bicubic interpolation over a 4x4 neighborhood.
pub(crate) fn bicubic_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    lagrange_interpolation::<C, 4>(image, u, v, border)
}
