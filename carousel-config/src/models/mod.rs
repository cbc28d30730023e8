use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow};
use carousel_core::{CarouselOptions, DEFAULT_OFFSET_RADIUS, GOTO_INTERVAL};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANIMATION_FRICTION, DEFAULT_ANIMATION_TENSION};

fn default_goto_interval_ms() -> u64 {
    GOTO_INTERVAL.as_millis() as u64
}

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Spring parameters forwarded untouched to the renderer. The navigation core
/// never animates anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tension: f32,
    pub friction: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tension: DEFAULT_ANIMATION_TENSION,
            friction: DEFAULT_ANIMATION_FRICTION,
        }
    }
}

/// Top-level carousel settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Neighbours shown on each side of the current slide. Negative values
    /// and values above `(slides - 1) / 2` are clamped when the window is
    /// computed.
    pub offset_radius: i64,
    /// Delay (ms) between two hops of an animated go-to. Zero is raised to
    /// one millisecond.
    #[serde(default = "default_goto_interval_ms")]
    pub goto_interval_ms: u64,
    /// Whether the renderer should draw previous/next affordances.
    pub show_navigation: bool,
    pub animation: AnimationConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            offset_radius: DEFAULT_OFFSET_RADIUS,
            goto_interval_ms: default_goto_interval_ms(),
            show_navigation: true,
            animation: AnimationConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn goto_interval(&self) -> Duration {
        Duration::from_millis(self.goto_interval_ms.max(1))
    }

    /// Controller options derived from this config.
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            offset_radius: self.offset_radius,
            goto_interval: self.goto_interval(),
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid carousel config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel config json: {err}"))
    }
}
