//! Environment variable names and default file locations.

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "CAROUSEL_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "CAROUSEL_CONFIG_JSON";

pub const OFFSET_RADIUS_VAR: &str = "CAROUSEL_OFFSET_RADIUS";
/// Human-readable duration, e.g. `250ms`.
pub const GOTO_INTERVAL_VAR: &str = "CAROUSEL_GOTO_INTERVAL";
pub const SHOW_NAVIGATION_VAR: &str = "CAROUSEL_SHOW_NAVIGATION";

/// Files probed (relative to the search root) when no env source is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];

pub const DEFAULT_ANIMATION_TENSION: f32 = 120.0;
pub const DEFAULT_ANIMATION_FRICTION: f32 = 14.0;
