#![deny(missing_docs)]
//! Gnomonic projection and equirectangular transforms for panorama images

/// spherical and equirectangular coordinate conversions.
pub mod coords;

/// error types of the projection library.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// rectilinear view extraction from equirectangular mappings.
pub mod projection;

/// equirectangular mapping rotation.
pub mod transform;

pub use crate::error::GnomonicError;
