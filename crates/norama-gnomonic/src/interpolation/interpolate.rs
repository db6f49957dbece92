use super::bicubic::bicubic_interpolation;
use super::biheptic::biheptic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::bipentic::bipentic_interpolation;
use norama_image::Image;

/// Interpolation mode for resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic interpolation
    #[default]
    Bicubic,
    /// Bipentic interpolation
    Bipentic,
    /// Biheptic interpolation
    Biheptic,
}

impl InterpolationMode {
    /// Select the interpolation mode from its command line tag.
    ///
    /// The implemented tags are `bilinearf`, `bicubicf`, `bipenticf` and
    /// `bihepticf`. Any other tag selects the bicubic method.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bilinearf" => Self::Bilinear,
            "bicubicf" => Self::Bicubic,
            "bipenticf" => Self::Bipentic,
            "bihepticf" => Self::Biheptic,
            _ => Self::default(),
        }
    }
}

/// Border handling for kernel taps leaving the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Clamp taps to the image border.
    #[default]
    Clamp,
    /// Wrap taps across the vertical image edges, clamp at the horizontal
    /// ones.
    ///
    /// This matches the cyclic longitude axis of a full equirectangular
    /// mapping, where the column past the right edge is the first column.
    WrapX,
}

impl BorderMode {
    #[inline]
    pub(crate) fn resolve_x(&self, i: i64, cols: i64) -> usize {
        match self {
            BorderMode::Clamp => i.clamp(0, cols - 1) as usize,
            BorderMode::WrapX => i.rem_euclid(cols) as usize,
        }
    }

    #[inline]
    pub(crate) fn resolve_y(&self, i: i64, rows: i64) -> usize {
        i.clamp(0, rows - 1) as usize
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border handling for taps leaving the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, border),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v, border),
        InterpolationMode::Bipentic => bipentic_interpolation(image, u, v, border),
        InterpolationMode::Biheptic => biheptic_interpolation(image, u, v, border),
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, InterpolationMode};

    #[test]
    fn border_resolution() {
        assert_eq!(BorderMode::Clamp.resolve_x(-2, 16), 0);
        assert_eq!(BorderMode::Clamp.resolve_x(16, 16), 15);
        assert_eq!(BorderMode::WrapX.resolve_x(-2, 16), 14);
        assert_eq!(BorderMode::WrapX.resolve_x(16, 16), 0);
        assert_eq!(BorderMode::WrapX.resolve_y(16, 16), 15);
    }

    #[test]
    fn tag_table() {
        assert_eq!(
            InterpolationMode::from_tag("bilinearf"),
            InterpolationMode::Bilinear
        );
        assert_eq!(
            InterpolationMode::from_tag("bicubicf"),
            InterpolationMode::Bicubic
        );
        assert_eq!(
            InterpolationMode::from_tag("bipenticf"),
            InterpolationMode::Bipentic
        );
        assert_eq!(
            InterpolationMode::from_tag("bihepticf"),
            InterpolationMode::Biheptic
        );
    }

    #[test]
    fn unknown_tag_falls_back_to_bicubic() {
        assert_eq!(
            InterpolationMode::from_tag("lanczos"),
            InterpolationMode::Bicubic
        );
        assert_eq!(InterpolationMode::from_tag(""), InterpolationMode::Bicubic);
    }
}
