//! Convenience re-exports for crates that only consume the model.

pub use crate::direction::{Direction, Step};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::slide::{Slide, SlideSet};
pub use crate::slide_key::SlideKey;
