use thiserror::Error;

/// Errors that can occur when validating a product or its images.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Product name too long (max 200 characters)")]
    NameTooLong,
    #[error("Product description too long (max 2000 characters)")]
    DescriptionTooLong,
    #[error("Product price cannot be negative: {0}")]
    NegativePrice(String),
    #[error("Image URL cannot be empty")]
    EmptyImageUrl,
    #[error("Image URL too long (max 500 characters)")]
    ImageUrlTooLong,
    #[error("Only one image can be marked as primary (found {0})")]
    MultiplePrimaryImages(usize),
}

/// Errors that can occur when parsing enum text forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("Unknown product category: {0}")]
    UnknownCategory(String),
    #[error("Unknown product status: {0}")]
    UnknownStatus(String),
}
