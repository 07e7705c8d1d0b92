//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - Stable evaluation order (player 1 before player 2)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod goal;
pub mod input;
pub mod lifecycle;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, player_contact, resolve_contacts};
pub use field::Field;
pub use goal::detect_goal;
pub use input::{Direction, HeldDirections, KeyBindings, PlayerIntent, reduce_intent};
pub use physics::{Integration, integrate_ball};
pub use state::{
    Axis, Ball, GameEvent, GameState, MatchPhase, Outcome, Player, PlayerId, Snapshot, Tuning,
};
pub use tick::{TickInput, tick};
