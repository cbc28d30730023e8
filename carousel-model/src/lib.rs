//! Core data model definitions shared across the carousel crates.
#![allow(missing_docs)]

pub mod direction;
pub mod error;
pub mod prelude;
pub mod slide;
pub mod slide_key;

// Intentionally curated re-exports for downstream consumers.
pub use direction::{Direction, Step};
pub use error::{ModelError, Result as ModelResult};
pub use slide::{Slide, SlideSet};
pub use slide_key::SlideKey;
