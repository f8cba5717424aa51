#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Image too large: {0} bytes")]
    ImageTooLarge(usize),
}
