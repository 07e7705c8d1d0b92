//! Ball integrator: move, decay, bounce off walls

use super::field::Field;
use super::state::{Axis, Ball, Tuning};

/// Result of advancing the ball one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration {
    pub ball: Ball,
    /// Axes whose velocity was reflected this tick
    pub bounced_x: bool,
    pub bounced_y: bool,
}

impl Integration {
    pub fn bounces(&self) -> impl Iterator<Item = Axis> {
        [(self.bounced_x, Axis::X), (self.bounced_y, Axis::Y)]
            .into_iter()
            .filter_map(|(hit, axis)| hit.then_some(axis))
    }
}

/// Advance the ball by one tick.
///
/// Position moves by the old velocity, then velocity decays by friction.
/// Any axis that reaches a wall snaps to the wall and reflects with
/// restitution. Both axes are checked, so a corner reflects both.
pub fn integrate_ball(ball: Ball, field: &Field, tuning: &Tuning) -> Integration {
    let mut pos = ball.pos + ball.vel;
    let mut vel = ball.vel * tuning.friction;

    let half = tuning.ball_size / 2.0;
    let r = tuning.restitution;
    let (bounced_x, x, vx) = bounce_axis(pos.x, vel.x, half, field.width - half, r);
    let (bounced_y, y, vy) = bounce_axis(pos.y, vel.y, half, field.height - half, r);
    pos.x = x;
    pos.y = y;
    vel.x = vx;
    vel.y = vy;

    Integration {
        ball: Ball { pos, vel },
        bounced_x,
        bounced_y,
    }
}

/// Snap and reflect a single coordinate against [lo, hi]
fn bounce_axis(p: f32, v: f32, lo: f32, hi: f32, restitution: f32) -> (bool, f32, f32) {
    if p <= lo || p >= hi {
        let snapped = if p <= lo { lo } else { hi };
        // Resting against the wall is not a bounce
        (v != 0.0, snapped, -v * restitution)
    } else {
        (false, p, v)
    }
}
