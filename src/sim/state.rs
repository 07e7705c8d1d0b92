//! Game state and core simulation types
//!
//! A `GameState` is a complete snapshot of one tick. Reducers take a state
//! and produce the next one; nothing outside `sim` mutates it mid-tick.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::consts::*;

/// Which side a player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Left side, scores in the right goal
    #[serde(rename = "player1")]
    One,
    /// Right side, scores in the left goal
    #[serde(rename = "player2")]
    Two,
}

impl PlayerId {
    /// Fixed evaluation order used for every tie-break
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::One => "player1",
            PlayerId::Two => "player2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Not started, simulation does not tick
    #[default]
    Idle,
    /// Active gameplay, ticks every interval
    Playing,
    /// A player reached the winning score
    Finished,
}

/// Physics and rules tuning (immutable for a match)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player body diameter
    pub player_size: f32,
    /// Ball body diameter
    pub ball_size: f32,
    pub friction: f32,
    pub restitution: f32,
    pub kick_force: f32,
    pub player_speed: f32,
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            ball_size: BALL_SIZE,
            friction: FRICTION,
            restitution: RESTITUTION,
            kick_force: KICK_FORCE,
            player_speed: PLAYER_SPEED,
            win_score: WIN_SCORE,
        }
    }
}

impl Tuning {
    /// Center distance below which a player touches the ball
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        (self.player_size + self.ball_size) / 2.0
    }
}

/// A player-controlled disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub pos: Vec2,
    /// Display color (presentation only)
    pub color: String,
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId, pos: Vec2) -> Self {
        let color = match id {
            PlayerId::One => PLAYER1_COLOR,
            PlayerId::Two => PLAYER2_COLOR,
        };
        Self {
            id,
            pos,
            color: color.to_string(),
            score: 0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at rest on the center spot
    pub fn at_center(field: &Field) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
        }
    }
}

/// Field axis, used to report wall bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Things that happened during a tick (for audio/visual feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a wall
    WallBounce { axis: Axis },
    /// Player pushed the ball
    Kick { player: PlayerId },
    /// Player scored
    Goal { scorer: PlayerId },
    /// Player reached the winning score
    MatchWon { winner: PlayerId },
}

/// Match result from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub tuning: Tuning,
    /// Current phase
    pub phase: MatchPhase,
    /// Set only while Finished
    pub winner: Option<PlayerId>,
    /// Indexed by `PlayerId::index`
    pub players: [Player; 2],
    pub ball: Ball,
    /// Ticks simulated in the current match
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Field::default(), Tuning::default())
    }
}

impl GameState {
    /// Fresh Idle state with players on their kickoff spots
    pub fn new(field: Field, tuning: Tuning) -> Self {
        let players = PlayerId::ALL
            .map(|id| Player::new(id, field.kickoff_position(id, tuning.player_size)));
        Self {
            field,
            tuning,
            phase: MatchPhase::Idle,
            winner: None,
            players,
            ball: Ball::at_center(&field),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Scores as (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }

    /// Put the ball back on the center spot at rest
    pub fn reset_ball(&mut self) {
        self.ball = Ball::at_center(&self.field);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player1: self.players[0].clone(),
            player2: self.players[1].clone(),
            ball: self.ball,
            phase: self.phase,
            winner: self.winner,
        }
    }
}

/// What the render collaborator consumes once per tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player1: Player,
    pub player2: Player,
    pub ball: Ball,
    pub phase: MatchPhase,
    pub winner: Option<PlayerId>,
}

impl Snapshot {
    /// Victory/defeat label for a player, `None` while undecided
    pub fn outcome_for(&self, id: PlayerId) -> Option<Outcome> {
        self.winner
            .map(|w| if w == id { Outcome::Won } else { Outcome::Lost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Field::new(400.0, 300.0), Tuning::default());
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.winner, None);
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.player(PlayerId::One).pos, Vec2::new(100.0, 150.0));
        assert_eq!(state.player(PlayerId::Two).pos, Vec2::new(300.0, 150.0));
        assert_eq!(state.player(PlayerId::One).color, PLAYER1_COLOR);
        assert_eq!(state.ball, Ball { pos: Vec2::new(200.0, 150.0), vel: Vec2::ZERO });
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::One.to_string(), "player1");
        assert_eq!(PlayerId::Two.to_string(), "player2");
    }

    #[test]
    fn test_snapshot_outcome() {
        let mut state = GameState::default();
        assert_eq!(state.snapshot().outcome_for(PlayerId::One), None);

        state.winner = Some(PlayerId::Two);
        let snap = state.snapshot();
        assert_eq!(snap.outcome_for(PlayerId::One), Some(Outcome::Lost));
        assert_eq!(snap.outcome_for(PlayerId::Two), Some(Outcome::Won));
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(GameState::default().snapshot()).unwrap();
        assert_eq!(json["phase"], "Idle");
        assert_eq!(json["player1"]["color"], PLAYER1_COLOR);
        assert!(json["winner"].is_null());

        let mut state = GameState::default();
        state.winner = Some(PlayerId::One);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["winner"], "player1");
        assert_eq!(json["player2"]["id"], "player2");
    }
}
