//! Pixel interpolation methods for image resampling.
//!
//! The upscaler maps every destination pixel back to a continuous source
//! coordinate and synthesizes its value from the nearest source pixels.
//! Only bilinear interpolation is provided; it is the kernel the
//! enhancement pipeline is specified against.

mod bilinear;

pub use bilinear::bilinear_interpolation;
