#![deny(missing_docs)]
//! Image types and traits for the upsharp enhancement pipeline

/// image representation for the enhancement pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
