#![deny(missing_docs)]
//! Image decoding and encoding for the upsharp pipeline

mod conv_utils;

/// Error types for the io module.
pub mod error;

/// Format detection and format-agnostic decoding.
pub mod functional;

/// JPEG image decoding.
pub mod jpeg;

/// PNG image decoding and encoding.
pub mod png;

/// WEBP image decoding.
pub mod webp;

pub use crate::error::IoError;
