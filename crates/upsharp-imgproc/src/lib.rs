#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image enhancement pipeline module.
pub mod enhance;

/// Error types for the enhancement operations.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for upscaling images.
pub mod resample;

/// image sharpening module.
pub mod sharpen;

pub use crate::error::EnhanceError;
pub use crate::resample::ScaleFactor;
