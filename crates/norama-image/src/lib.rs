#![deny(missing_docs)]
//! Image container and pixel types for the norama panorama tools

/// image representation for panorama processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
