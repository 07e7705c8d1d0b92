//! Fixed-interval simulation tick
//!
//! One tick runs, in order: integrate the ball, resolve player contacts,
//! detect a goal, check for a winner, then move the players.

use super::collision::resolve_contacts;
use super::goal::detect_goal;
use super::input::{PlayerIntent, reduce_intent};
use super::physics::integrate_ball;
use super::state::{GameEvent, GameState, MatchPhase, PlayerId};

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Indexed by `PlayerId::index`
    pub intents: [PlayerIntent; 2],
}

impl TickInput {
    pub fn with(mut self, id: PlayerId, intent: PlayerIntent) -> Self {
        self.intents[id.index()] = intent;
        self
    }

    #[inline]
    pub fn intent(&self, id: PlayerId) -> &PlayerIntent {
        &self.intents[id.index()]
    }
}

/// Produce the state one tick after `state`.
///
/// Outside Playing the state is returned unchanged. A tick that ends the
/// match skips player movement.
pub fn tick(state: &GameState, input: &TickInput) -> GameState {
    let mut next = state.clone();
    if next.phase != MatchPhase::Playing {
        return next;
    }
    next.events.clear();
    next.time_ticks += 1;

    let moved = integrate_ball(next.ball, &next.field, &next.tuning);
    next.events
        .extend(moved.bounces().map(|axis| GameEvent::WallBounce { axis }));

    let contact = resolve_contacts(moved.ball, &next.players, &next.tuning);
    for player in &contact.kickers {
        log::debug!("{} kicked the ball", player);
        next.events.push(GameEvent::Kick { player: *player });
    }
    next.ball = contact.ball;

    if let Some(scorer) = detect_goal(&next.ball, &next.field) {
        next.award_goal(scorer);
    }

    if next.check_winner().is_some() {
        return next;
    }

    for id in PlayerId::ALL {
        let player = next.player(id);
        if let Some(pos) = reduce_intent(player.pos, input.intent(id), &next.field, &next.tuning) {
            next.player_mut(id).pos = pos;
        }
    }

    log::trace!(
        "tick {} ball=({:.1}, {:.1})",
        next.time_ticks,
        next.ball.pos.x,
        next.ball.pos.y
    );
    next
}
