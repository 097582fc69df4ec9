#![deny(missing_docs)]
//! Upsharp: an image-enhancement pipeline that upscales a raster image by
//! an integer factor with bilinear interpolation and sharpens its edges
//! with a fixed 3x3 kernel.

#[doc(inline)]
pub use upsharp_image as image;

#[doc(inline)]
pub use upsharp_imgproc as imgproc;

#[doc(inline)]
pub use upsharp_io as io;
