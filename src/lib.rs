//! Disc Soccer - A two-player local soccer mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, goals, game state)
//! - `session`: Host-facing match driver (input buffering, tick timer)
//! - `settings`: Data-driven field and physics tuning

pub mod session;
pub mod settings;
pub mod sim;

pub use session::{IntentBuffer, Session, TickTimer};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Space reserved around the field on the host display
    pub const DISPLAY_MARGIN_X: f32 = 40.0;
    pub const DISPLAY_MARGIN_Y: f32 = 250.0;

    /// Default field (used when no display size is known)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Goal mouth, flush with each vertical edge
    pub const GOAL_WIDTH: f32 = 100.0;
    pub const GOAL_HEIGHT: f32 = 60.0;

    /// Body diameters
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const BALL_SIZE: f32 = 20.0;

    /// Per-tick multiplicative velocity decay
    pub const FRICTION: f32 = 0.98;
    /// Velocity kept (sign flipped) after a wall bounce
    pub const RESTITUTION: f32 = 0.8;
    /// Ball speed after a player contact
    pub const KICK_FORCE: f32 = 8.0;
    /// Player displacement per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Kickoff offset of each player from the center line
    pub const KICKOFF_OFFSET: f32 = 100.0;

    /// Goals needed to win a match
    pub const WIN_SCORE: u32 = 2;

    /// Display colors
    pub const PLAYER1_COLOR: &str = "#4CAF50";
    pub const PLAYER2_COLOR: &str = "#2196F3";
}

/// Clamp a body center so a body of the given diameter stays inside `size`
#[inline]
pub fn clamp_to_bounds(pos: Vec2, diameter: f32, size: Vec2) -> Vec2 {
    let half = diameter / 2.0;
    // max/min instead of clamp: a body larger than the field must not panic
    Vec2::new(
        pos.x.min(size.x - half).max(half),
        pos.y.min(size.y - half).max(half),
    )
}

/// Angle of the direction from `from` to `to`
#[inline]
pub fn contact_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Vector of the given magnitude pointing along `theta`
#[inline]
pub fn from_angle(theta: f32, magnitude: f32) -> Vec2 {
    Vec2::new(theta.cos() * magnitude, theta.sin() * magnitude)
}
