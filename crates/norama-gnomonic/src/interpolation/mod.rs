//! Pixel interpolation methods for panorama resampling.
//!
//! This module provides the four fixed interpolation kernels of the panorama
//! tools, selected by string tag at the command line:
//!
//! - **bilinearf**: bilinear over a 2x2 neighborhood
//! - **bicubicf**: bicubic over a 4x4 neighborhood (default)
//! - **bipenticf**: bipentic over a 6x6 neighborhood
//! - **bihepticf**: biheptic over an 8x8 neighborhood
//!
//! The cubic and higher order kernels are separable Lagrange interpolants,
//! so all kernels are exact at integer sample coordinates.

mod bicubic;
mod biheptic;
mod bilinear;
mod bipentic;

pub(crate) mod interpolate;
mod lagrange;

/// Coordinate map generation for remapping operations.
pub mod map;
mod remap;

pub use interpolate::{interpolate_pixel, BorderMode, InterpolationMode};
pub use map::PixelMap;
pub use remap::remap;
