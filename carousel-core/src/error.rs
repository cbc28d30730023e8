use carousel_model::ModelError;
use thiserror::Error;

/// Errors surfaced by the carousel controller and its runtime.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Rejected slide set.
    #[error("Invalid slides: {0}")]
    Model(#[from] ModelError),

    /// The actor shut down or every handle was dropped.
    #[error("Carousel actor is no longer running")]
    ActorClosed,
}

/// Result alias for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
