//! Input reduction: turns per-player intents into player positions
//!
//! Both input sources reach the simulation as an intent: either an absolute
//! drag target in field coordinates, or the set of held directions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::state::{PlayerId, Tuning};

/// A single movement direction (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Directions currently held down by one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Sum of held unit steps; opposite directions cancel
    pub fn step(&self) -> Vec2 {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
            .into_iter()
            .filter(|d| self.is_held(*d))
            .map(Direction::unit)
            .sum()
    }
}

/// Movement intent for one player for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerIntent {
    /// Absolute drag target (takes precedence over held keys)
    pub target: Option<Vec2>,
    pub held: HeldDirections,
}

impl PlayerIntent {
    pub fn drag_to(target: Vec2) -> Self {
        Self {
            target: Some(target),
            ..Default::default()
        }
    }

    pub fn holding(dirs: &[Direction]) -> Self {
        let mut held = HeldDirections::default();
        for dir in dirs {
            held.set(*dir, true);
        }
        Self { target: None, held }
    }
}

/// Apply one tick of intent to a player position.
///
/// Returns `None` when the intent produced no movement.
pub fn reduce_intent(
    pos: Vec2,
    intent: &PlayerIntent,
    field: &Field,
    tuning: &Tuning,
) -> Option<Vec2> {
    if let Some(target) = intent.target {
        return Some(field.clamp(target, tuning.player_size));
    }
    let step = intent.held.step();
    if step == Vec2::ZERO {
        return None;
    }
    Some(field.clamp(pos + step * tuning.player_speed, tuning.player_size))
}

/// Keyboard layout: player 1 on WASD, player 2 on the arrow keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyBindings;

impl KeyBindings {
    /// Map a key name to the player and direction it controls (case-insensitive)
    pub fn lookup(key: &str) -> Option<(PlayerId, Direction)> {
        let binding = match key.to_lowercase().as_str() {
            "w" => (PlayerId::One, Direction::Up),
            "a" => (PlayerId::One, Direction::Left),
            "s" => (PlayerId::One, Direction::Down),
            "d" => (PlayerId::One, Direction::Right),
            "arrowup" => (PlayerId::Two, Direction::Up),
            "arrowleft" => (PlayerId::Two, Direction::Left),
            "arrowdown" => (PlayerId::Two, Direction::Down),
            "arrowright" => (PlayerId::Two, Direction::Right),
            _ => return None,
        };
        Some(binding)
    }
}
