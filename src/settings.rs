//! Game settings and tuning
//!
//! Loaded from JSON; every field is optional and falls back to the
//! constants in `consts`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Field, Tuning};

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be positive and finite, got {value}")]
    InvalidValue { name: &'static str, value: f32 },
    #[error("goal mouths ({goal_width} wide) do not fit a field {field_width} wide")]
    GoalTooWide { goal_width: f32, field_width: f32 },
    #[error("win_score must be at least 1")]
    ZeroWinScore,
    #[error("{name} must be in (0, 1], got {value}")]
    NotDamping { name: &'static str, value: f32 },
    #[error("tick_interval_ms must be at least 1")]
    ZeroTickInterval,
    #[error("max_substeps must be at least 1")]
    ZeroSubsteps,
}

/// Available display area reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// When set, the field is derived from this instead of `field_*`
    pub display: Option<DisplaySize>,
    pub field_width: f32,
    pub field_height: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub tuning: Tuning,

    // === Timing ===
    pub tick_interval_ms: u64,
    /// Catch-up cap per host frame
    pub max_substeps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: None,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
            tuning: Tuning::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    /// Settings for a host display of the given size
    pub fn for_display(width: f32, height: f32) -> Self {
        Self {
            display: Some(DisplaySize { width, height }),
            ..Self::default()
        }
    }

    /// Parse settings from JSON (missing keys use defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Field geometry these settings describe
    pub fn field(&self) -> Field {
        let field = match self.display {
            Some(d) => Field::from_display(d.width, d.height),
            None => Field::new(self.field_width, self.field_height),
        };
        field.with_goal(self.goal_width, self.goal_height)
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject geometry and tuning the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let field = self.field();
        let t = &self.tuning;
        let positive = [
            ("field_width", field.width),
            ("field_height", field.height),
            ("goal_width", field.goal_width),
            ("goal_height", field.goal_height),
            ("tuning.player_size", t.player_size),
            ("tuning.ball_size", t.ball_size),
            ("tuning.friction", t.friction),
            ("tuning.restitution", t.restitution),
            ("tuning.kick_force", t.kick_force),
            ("tuning.player_speed", t.player_speed),
        ];
        if let Some((name, value)) = positive
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(SettingsError::InvalidValue { name, value });
        }
        let damping = [
            ("tuning.friction", t.friction),
            ("tuning.restitution", t.restitution),
        ];
        if let Some((name, value)) = damping
            .into_iter()
            .find(|(_, v)| *v > 1.0)
        {
            return Err(SettingsError::NotDamping { name, value });
        }
        if field.goal_width * 2.0 >= field.width {
            return Err(SettingsError::GoalTooWide {
                goal_width: field.goal_width,
                field_width: field.width,
            });
        }
        if t.win_score == 0 {
            return Err(SettingsError::ZeroWinScore);
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::ZeroSubsteps);
        }
        Ok(())
    }
}
