use crate::parallel::ParallelError;
use norama_image::ImageError;

/// An error type for the projection library.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GnomonicError {
    /// Error coming from the image container.
    #[error("Image error. {0}")]
    ImageError(#[from] ImageError),

    /// Error coming from the parallel execution engine.
    #[error("Parallel execution error. {0}")]
    ParallelError(#[from] ParallelError),

    /// The aperture angle does not define a valid tangent plane.
    #[error("Aperture angle must lie in (0, 180) degrees, got {0}")]
    InvalidAperture(f64),

    /// The focal or pixel length is not strictly positive.
    #[error("Focal and pixel lengths must be > 0, got focal {0} and pixel {1}")]
    InvalidFocal(f64, f64),

    /// The tile does not fit inside the full equirectangular mapping.
    #[error("Tile of size {0}x{1} at offset ({2}, {3}) exceeds the full mapping {4}x{5}")]
    InvalidTile(usize, usize, i64, i64, usize, usize),

    /// The coordinate map does not match the destination image.
    #[error("Coordinate map size ({0}x{1}) does not match the destination image ({2}x{3})")]
    InvalidMapSize(usize, usize, usize, usize),
}
