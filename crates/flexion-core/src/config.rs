use std::fmt;
use std::str::FromStr;

use flexion_bend_core::limiter::MAX_BENDING_ANGLE;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_bending_angle() -> f32 {
    5.0
}
const fn default_iteration_delay() -> u32 {
    5
}

/// Clamp a bending angle into `[0, 180]`. NaN becomes 0.
pub fn clamp_bending_angle(angle: f32) -> f32 {
    if angle.is_nan() {
        0.0
    } else {
        angle.clamp(0.0, MAX_BENDING_ANGLE)
    }
}

// ---------------------------------------------------------------------------
// TickSource
// ---------------------------------------------------------------------------

/// Host callback that drives bending.
///
/// Exactly one source is selected at a time; ticks from the other source are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSource {
    /// Variable-rate frame tick (`Update`).
    Visual,
    /// Fixed-rate physics tick (`FixedUpdate`).
    #[default]
    Physics,
}

impl TickSource {
    /// Lowercase name as used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Physics => "physics",
        }
    }
}

impl fmt::Display for TickSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(Self::Visual),
            "physics" => Ok(Self::Physics),
            other => Err(ConfigError::InvalidValue {
                field: "tick_source".into(),
                message: format!("expected `visual` or `physics`, got `{other}`"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// BendingSettings
// ---------------------------------------------------------------------------

/// Joint bending configuration for one body.
///
/// ```toml
/// bending_angle = 5.0      # degrees, [0, 180]
/// iteration_delay = 5      # ticks skipped between limiter passes
/// tick_source = "physics"  # or "visual"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingSettings {
    /// Maximum per-axis angle (degrees) the target may sit away from the
    /// current bend before it is pulled along.
    #[serde(default = "default_bending_angle")]
    bending_angle: f32,

    /// Ticks to skip between limiter passes. Low values are accurate, high
    /// values are cheap.
    #[serde(default = "default_iteration_delay")]
    pub iteration_delay: u32,

    /// Which host tick drives the limiter.
    #[serde(default)]
    pub tick_source: TickSource,
}

impl Default for BendingSettings {
    fn default() -> Self {
        Self {
            bending_angle: default_bending_angle(),
            iteration_delay: default_iteration_delay(),
            tick_source: TickSource::default(),
        }
    }
}

impl BendingSettings {
    /// Settings with the given angle (clamped), delay and source.
    pub fn new(bending_angle: f32, iteration_delay: u32, tick_source: TickSource) -> Self {
        Self {
            bending_angle: clamp_bending_angle(bending_angle),
            iteration_delay,
            tick_source,
        }
    }

    /// Builder: set the bending angle (clamped into `[0, 180]`).
    #[must_use]
    pub fn with_bending_angle(mut self, angle: f32) -> Self {
        self.set_bending_angle(angle);
        self
    }

    /// Builder: set the iteration delay.
    #[must_use]
    pub const fn with_iteration_delay(mut self, delay: u32) -> Self {
        self.iteration_delay = delay;
        self
    }

    /// Builder: set the tick source.
    #[must_use]
    pub const fn with_tick_source(mut self, source: TickSource) -> Self {
        self.tick_source = source;
        self
    }

    /// Bending angle in degrees, always within `[0, 180]` once set through
    /// this type's API.
    pub const fn bending_angle(&self) -> f32 {
        self.bending_angle
    }

    /// Set the bending angle, clamping it into `[0, 180]`.
    pub fn set_bending_angle(&mut self, angle: f32) {
        self.bending_angle = clamp_bending_angle(angle);
    }

    /// Set tick source and iteration delay together.
    pub const fn set_physics_settings(&mut self, tick_source: TickSource, iteration_delay: u32) {
        self.tick_source = tick_source;
        self.iteration_delay = iteration_delay;
    }

    /// Whether ticks from `source` drive the limiter.
    pub fn accepts(&self, source: TickSource) -> bool {
        self.tick_source == source
    }

    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_BENDING_ANGLE).contains(&self.bending_angle) {
            return Err(ConfigError::InvalidBendingAngle(self.bending_angle));
        }
        Ok(())
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
