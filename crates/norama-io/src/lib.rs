#![deny(missing_docs)]
//! Image file reading and writing for the norama panorama tools

/// error types of the io module.
pub mod error;

/// high-level image reading and writing functions.
pub mod functional;

/// JPEG image encoding and decoding.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any, read_image_any_rgb8, write_image_any, GenericImage};
