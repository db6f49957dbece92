use super::interpolate::BorderMode;
use super::lagrange::lagrange_interpolation;
use norama_image::Image;

/// Kernel for bipentic interpolation over a 6x6 neighborhood.
pub(crate) fn bipentic_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    lagrange_interpolation::<C, 6>(image, u, v, border)
}
