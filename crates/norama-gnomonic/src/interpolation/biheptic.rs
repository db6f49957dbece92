use super::interpolate::BorderMode;
use super::lagrange::lagrange_interpolation;
use norama_image::Image;

/// Kernel for biheptic interpolation over an 8x8 neighborhood.
pub(crate) fn biheptic_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    lagrange_interpolation::<C, 8>(image, u, v, border)
}
