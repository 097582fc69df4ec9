use upsharp_image::ImageError;

/// An error type for the enhancement operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EnhanceError {
    /// Error when the requested scale factor is outside the supported range.
    #[error("Scale factor must be an integer between 2 and 4, got {0}")]
    InvalidScale(u32),

    /// Error when the image is too small for the 3x3 sharpening kernel.
    #[error("Image must be at least 3x3 to sharpen, got {0}x{1}")]
    ImageTooSmall(usize, usize),

    /// Error from the underlying image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
