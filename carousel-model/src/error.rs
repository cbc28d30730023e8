use thiserror::Error;

use crate::slide_key::SlideKey;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("slide set must contain at least one slide")]
    EmptySlideSet,

    #[error("slide key cannot be empty")]
    EmptyKey,

    #[error("duplicate slide key: {0}")]
    DuplicateKey(SlideKey),
}

pub type Result<T> = std::result::Result<T, ModelError>;
