use thiserror::Error;

use crate::models::CarouselConfig;

/// Hop delays above this make a go-to look stalled rather than animated.
const SLOW_GOTO_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("animation {field} must be a finite number, got {value}")]
    NonFiniteAnimation { field: &'static str, value: f32 },
    #[error("animation {field} must not be negative, got {value}")]
    NegativeAnimation { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn apply_guard_rails(
    config: &CarouselConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    check_animation_value("tension", config.animation.tension)?;
    check_animation_value("friction", config.animation.friction)?;

    if config.offset_radius < 0 {
        warnings.push_with_hint(
            format!(
                "offset_radius {} is negative; only the current slide will be presentable",
                config.offset_radius
            ),
            "Use 0 to show just the current slide, or a positive radius for neighbours",
        );
    }

    if config.goto_interval_ms == 0 {
        warnings.push("goto_interval_ms is 0; hops will run every 1ms");
    } else if config.goto_interval_ms > SLOW_GOTO_INTERVAL_MS {
        warnings.push_with_hint(
            format!(
                "goto_interval_ms {} is very slow for an animated go-to",
                config.goto_interval_ms
            ),
            "The default cadence is 200ms per hop",
        );
    }

    Ok(warnings)
}

fn check_animation_value(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigGuardRailError> {
    if !value.is_finite() {
        return Err(ConfigGuardRailError::NonFiniteAnimation { field, value });
    }
    if value < 0.0 {
        return Err(ConfigGuardRailError::NegativeAnimation { field, value });
    }
    Ok(())
}
