//! Shared configuration library for carousel controllers.
//!
//! Centralizes the defaults, file/env loading and guard rails so the CLI and
//! any embedding application resolve the same settings the same way.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{AnimationConfig, CarouselConfig, ConfigSource};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
