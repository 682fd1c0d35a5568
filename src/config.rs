//! Editor configuration parsed from environment variables.
//!
//! Every setting has a default; a missing or unparsable variable falls back
//! to it rather than failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use tracing::Level;

pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;
pub const DEFAULT_NOTIFY_TTL_MS: u64 = 3000;
pub const DEFAULT_ASSEMBLY_NAME: &str = "My New Blind";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Initial drop zone width in CSS pixels, used until the host measures it.
    pub canvas_width: f64,
    /// Initial drop zone height in CSS pixels.
    pub canvas_height: f64,
    /// How long a notification stays visible.
    pub notify_ttl: Duration,
    /// Name given to a fresh assembly.
    pub default_name: String,
    /// Start with the starter component catalog.
    pub seed_catalog: bool,
    /// Maximum level for the `tracing` subscriber.
    pub log_level: Level,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            notify_ttl: Duration::from_millis(DEFAULT_NOTIFY_TTL_MS),
            default_name: DEFAULT_ASSEMBLY_NAME.to_string(),
            seed_catalog: true,
            log_level: Level::INFO,
        }
    }
}

impl EditorConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `BLIND_CANVAS_WIDTH` / `BLIND_CANVAS_HEIGHT`: default 600 x 400
    /// - `BLIND_NOTIFY_TTL_MS`: default 3000
    /// - `BLIND_DEFAULT_NAME`: default `My New Blind`
    /// - `BLIND_SEED_CATALOG`: `true` (default) or `false`
    /// - `BLIND_LOG_LEVEL`: `info` (default), `debug`, `warn`, ...
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let canvas_width = env_parse(&lookup, "BLIND_CANVAS_WIDTH", defaults.canvas_width);
        let canvas_height = env_parse(&lookup, "BLIND_CANVAS_HEIGHT", defaults.canvas_height);
        let default_name = lookup("BLIND_DEFAULT_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_name);

        Self {
            canvas_width: positive_or(canvas_width, DEFAULT_CANVAS_WIDTH),
            canvas_height: positive_or(canvas_height, DEFAULT_CANVAS_HEIGHT),
            notify_ttl: Duration::from_millis(env_parse(&lookup, "BLIND_NOTIFY_TTL_MS", DEFAULT_NOTIFY_TTL_MS)),
            default_name,
            seed_catalog: env_parse(&lookup, "BLIND_SEED_CATALOG", defaults.seed_catalog),
            log_level: env_parse(&lookup, "BLIND_LOG_LEVEL", defaults.log_level),
        }
    }
}

fn env_parse<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn positive_or(v: f64, default: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { default }
}
