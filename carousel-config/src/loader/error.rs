use crate::validation::ConfigGuardRailError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load carousel configuration from {path}")]
    File {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to parse {var}")]
    InlineJson {
        var: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidEnvValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
