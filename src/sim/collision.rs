//! Player-ball contact resolution
//!
//! A touching player replaces the ball's velocity with a fixed-strength push
//! along the line from the player center to the ball center. Bodies are not
//! separated afterward, so they may overlap for a few ticks.

use glam::Vec2;

use super::state::{Ball, Player, PlayerId, Tuning};
use crate::{contact_angle, from_angle};

/// Result of resolving all player contacts for a tick
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    pub ball: Ball,
    /// Players that touched the ball, in evaluation order
    pub kickers: Vec<PlayerId>,
}

/// Post-contact ball velocity if the player overlaps the ball
pub fn player_contact(player_pos: Vec2, ball_pos: Vec2, tuning: &Tuning) -> Option<Vec2> {
    if player_pos.distance(ball_pos) < tuning.contact_distance() {
        Some(from_angle(contact_angle(player_pos, ball_pos), tuning.kick_force))
    } else {
        None
    }
}

/// Check every player against the ball.
///
/// Players are evaluated in slice order and each contact overwrites the
/// velocity, so with both touching the last one wins.
pub fn resolve_contacts(ball: Ball, players: &[Player], tuning: &Tuning) -> CollisionResult {
    let mut ball = ball;
    let mut kickers = Vec::new();
    for player in players {
        if let Some(vel) = player_contact(player.pos, ball.pos, tuning) {
            ball.vel = vel;
            kickers.push(player.id);
        }
    }
    CollisionResult { ball, kickers }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, x: f32, y: f32) -> Player {
        Player::new(id, Vec2::new(x, y))
    }

    #[test]
    fn test_no_contact_at_distance_40() {
        let tuning = Tuning::default();
        assert_eq!(tuning.contact_distance(), 25.0);
        assert_eq!(player_contact(Vec2::new(100.0, 100.0), Vec2::new(140.0, 100.0), &tuning), None);
        // Exactly touching is not overlapping
        assert_eq!(player_contact(Vec2::new(100.0, 100.0), Vec2::new(125.0, 100.0), &tuning), None);
    }

    #[test]
    fn test_contact_at_distance_20() {
        let tuning = Tuning::default();
        let vel =
            player_contact(Vec2::new(100.0, 100.0), Vec2::new(120.0, 100.0), &tuning).unwrap();
        assert!((vel - Vec2::new(8.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_contact_ignores_prior_velocity() {
        let tuning = Tuning::default();
        let players = [player(PlayerId::One, 100.0, 100.0)];
        let fast = Ball { pos: Vec2::new(112.0, 116.0), vel: Vec2::new(-30.0, 50.0) };
        let still = Ball { vel: Vec2::ZERO, ..fast };

        let a = resolve_contacts(fast, &players, &tuning);
        let b = resolve_contacts(still, &players, &tuning);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert!((a.ball.vel.length() - 8.0).abs() < 1e-5);
        // Direction follows atan2(dy, dx) = atan2(16, 12)
        assert!((a.ball.vel - Vec2::new(4.8, 6.4)).length() < 1e-4);
        assert_eq!(a.kickers, vec![PlayerId::One]);
    }

    #[test]
    fn test_second_player_overwrites_first() {
        // Ball squeezed between both players: player 2 pushes it left
        let players = [
            player(PlayerId::One, 90.0, 100.0),
            player(PlayerId::Two, 110.0, 100.0),
        ];
        let ball = Ball { pos: Vec2::new(100.0, 100.0), vel: Vec2::ZERO };
        let out = resolve_contacts(ball, &players, &Tuning::default());
        assert_eq!(out.kickers, vec![PlayerId::One, PlayerId::Two]);
        assert!((out.ball.vel - Vec2::new(-8.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_contact_does_not_move_ball() {
        let players = [player(PlayerId::One, 100.0, 100.0)];
        let ball = Ball { pos: Vec2::new(105.0, 100.0), vel: Vec2::ZERO };
        let out = resolve_contacts(ball, &players, &Tuning::default());
        assert_eq!(out.ball.pos, ball.pos);
    }
}
