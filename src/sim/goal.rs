//! Goal detection

use super::field::Field;
use super::state::{Ball, PlayerId};

/// Player credited for the ball's current position, if any.
///
/// Player 1 attacks the right goal, player 2 the left. Player 1's mouth is
/// tested first and at most one scorer is returned.
pub fn detect_goal(ball: &Ball, field: &Field) -> Option<PlayerId> {
    if !field.in_goal_band(ball.pos.y) {
        return None;
    }
    if ball.pos.x > field.width - field.goal_width {
        Some(PlayerId::One)
    } else if ball.pos.x < field.goal_width {
        Some(PlayerId::Two)
    } else {
        None
    }
}
