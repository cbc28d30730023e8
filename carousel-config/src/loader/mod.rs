//! Resolves a [`CarouselConfig`] from an explicit path, the environment,
//! default file locations, or built-in defaults, then applies env overrides
//! and guard rails.

pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, DEFAULT_CONFIG_CANDIDATES,
    GOTO_INTERVAL_VAR, OFFSET_RADIUS_VAR, SHOW_NAVIGATION_VAR,
};
use crate::models::{CarouselConfig, ConfigSource};
use crate::util::{parse_bool, parse_duration};
use crate::validation::{ConfigWarnings, apply_guard_rails};

use error::ConfigLoadError;

/// A resolved configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CarouselConfig,
    pub source: ConfigSource,
    /// Env variables that overrode file or default values.
    pub overrides: Vec<&'static str>,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from("."),
            config_path: None,
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the default file candidates are resolved against.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Explicit config file; takes precedence over every env source.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` as the variable lookup.
    ///
    /// Evaluation order:
    /// 1) the explicit config path, if any,
    /// 2) `$CAROUSEL_CONFIG_PATH` (TOML or JSON file),
    /// 3) `$CAROUSEL_CONFIG_JSON` (inline JSON),
    /// 4) the first default file found under the search root,
    /// 5) defaults.
    ///
    /// Field overrides from `$CAROUSEL_OFFSET_RADIUS`,
    /// `$CAROUSEL_GOTO_INTERVAL` and `$CAROUSEL_SHOW_NAVIGATION` are applied
    /// on top.
    pub fn load_with<F>(&self, env: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|raw| !raw.trim().is_empty());

        let (mut config, source) = if let Some(path) = &self.config_path {
            (load_file(path)?, ConfigSource::File(path.clone()))
        } else if let Some(raw) = lookup(CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw);
            (load_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = lookup(CONFIG_JSON_VAR) {
            let config = CarouselConfig::parse_json(&raw).map_err(|source| {
                ConfigLoadError::InlineJson {
                    var: CONFIG_JSON_VAR,
                    source,
                }
            })?;
            (config, ConfigSource::EnvInline)
        } else if let Some(path) = self.find_default_file() {
            (load_file(&path)?, ConfigSource::File(path))
        } else {
            (CarouselConfig::default(), ConfigSource::Default)
        };

        let overrides = apply_env_overrides(&mut config, &lookup)?;
        let warnings = apply_guard_rails(&config)?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }

        debug!(?source, ?overrides, "carousel configuration resolved");
        Ok(ConfigLoad {
            config,
            source,
            overrides,
            warnings,
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.is_file())
    }
}

fn load_file(path: &Path) -> Result<CarouselConfig, ConfigLoadError> {
    CarouselConfig::load_from_file(path).map_err(|source| {
        ConfigLoadError::File {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn apply_env_overrides<F>(
    config: &mut CarouselConfig,
    lookup: &F,
) -> Result<Vec<&'static str>, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();

    if let Some(raw) = lookup(OFFSET_RADIUS_VAR) {
        config.offset_radius = raw.trim().parse().map_err(
            |err: std::num::ParseIntError| ConfigLoadError::InvalidEnvValue {
                var: OFFSET_RADIUS_VAR,
                value: raw.clone(),
                reason: err.to_string(),
            },
        )?;
        applied.push(OFFSET_RADIUS_VAR);
    }

    if let Some(raw) = lookup(GOTO_INTERVAL_VAR) {
        let interval = parse_duration(&raw).map_err(|err| {
            ConfigLoadError::InvalidEnvValue {
                var: GOTO_INTERVAL_VAR,
                value: raw.clone(),
                reason: err.to_string(),
            }
        })?;
        config.goto_interval_ms =
            u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        applied.push(GOTO_INTERVAL_VAR);
    }

    if let Some(raw) = lookup(SHOW_NAVIGATION_VAR) {
        config.show_navigation = parse_bool(&raw).ok_or_else(|| {
            ConfigLoadError::InvalidEnvValue {
                var: SHOW_NAVIGATION_VAR,
                value: raw.clone(),
                reason: "expected one of 1/0, true/false, yes/no, on/off"
                    .to_string(),
            }
        })?;
        applied.push(SHOW_NAVIGATION_VAR);
    }

    Ok(applied)
}
