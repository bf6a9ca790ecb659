//! Engine tuning read from the environment.
//!
//! | Variable | Field | Default | Floor |
//! |---|---|---|---|
//! | `SKETCH_HISTORY_LIMIT` | `history_limit` | 50 | 1 |
//! | `SKETCH_HIT_TOLERANCE` | `hit_tolerance` | 5 | 0 |
//! | `SKETCH_MIN_RESIZE_SIZE` | `min_resize_size` | 10 | 1 |
//! | `SKETCH_MOVEMENT_THRESHOLD` | `movement_threshold` | 1 | 0 |
//! | `SKETCH_HANDLE_RADIUS_PX` | `handle_radius_px` | 8 | 0 |
//!
//! Unset variables take the default. A set variable that does not parse, or
//! parses below its floor, is an error rather than a silent fallback.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::consts::{HANDLE_RADIUS_PX, HIT_TOLERANCE, MAX_HISTORY_LENGTH, MIN_RESIZE_SIZE, MOVEMENT_THRESHOLD};

pub const HISTORY_LIMIT_VAR: &str = "SKETCH_HISTORY_LIMIT";
pub const HIT_TOLERANCE_VAR: &str = "SKETCH_HIT_TOLERANCE";
pub const MIN_RESIZE_SIZE_VAR: &str = "SKETCH_MIN_RESIZE_SIZE";
pub const MOVEMENT_THRESHOLD_VAR: &str = "SKETCH_MOVEMENT_THRESHOLD";
pub const HANDLE_RADIUS_PX_VAR: &str = "SKETCH_HANDLE_RADIUS_PX";

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but is not a valid number.
    #[error("invalid number for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// A variable parsed but is below its allowed minimum.
    #[error("{var} is {value}, below the minimum of {min}")]
    OutOfRange { var: &'static str, value: String, min: String },
}

/// Tunable limits for [`crate::engine::EngineCore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Maximum number of history entries.
    pub history_limit: usize,
    /// Canvas-space slop for hit-testing.
    pub hit_tolerance: f64,
    /// Smallest extent a corner resize can produce.
    pub min_resize_size: f64,
    /// Per-axis movement below this counts as zero during a resize.
    pub movement_threshold: f64,
    /// Screen-space grab radius of resize handles.
    pub handle_radius_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_LENGTH,
            hit_tolerance: HIT_TOLERANCE,
            min_resize_size: MIN_RESIZE_SIZE,
            movement_threshold: MOVEMENT_THRESHOLD,
            handle_radius_px: HANDLE_RADIUS_PX,
        }
    }
}

impl EngineConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a set variable is malformed or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Some(v),
            Err(_) => None,
        })?;
        tracing::info!(
            history_limit = config.history_limit,
            hit_tolerance = config.hit_tolerance,
            min_resize_size = config.min_resize_size,
            movement_threshold = config.movement_threshold,
            handle_radius_px = config.handle_radius_px,
            "engine config loaded"
        );
        Ok(config)
    }

    /// Load from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a present value is malformed or out of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            history_limit: parse_var(&lookup, HISTORY_LIMIT_VAR, defaults.history_limit, 1)?,
            hit_tolerance: parse_var(&lookup, HIT_TOLERANCE_VAR, defaults.hit_tolerance, 0.0)?,
            min_resize_size: parse_var(&lookup, MIN_RESIZE_SIZE_VAR, defaults.min_resize_size, 1.0)?,
            movement_threshold: parse_var(&lookup, MOVEMENT_THRESHOLD_VAR, defaults.movement_threshold, 0.0)?,
            handle_radius_px: parse_var(&lookup, HANDLE_RADIUS_PX_VAR, defaults.handle_radius_px, 0.0)?,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T, min: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    let Ok(value) = trimmed.parse::<T>() else {
        return Err(ConfigError::InvalidNumber { var, value: raw });
    };
    match value.partial_cmp(&min) {
        Some(Ordering::Greater | Ordering::Equal) => Ok(value),
        Some(Ordering::Less) | None => {
            Err(ConfigError::OutOfRange { var, value: trimmed.to_owned(), min: min.to_string() })
        }
    }
}
