//! Match lifecycle: Idle -> Playing -> Finished
//!
//! `start` is only valid from Idle and `restart` only from Finished; both
//! return false and leave the state alone otherwise. `reset` works from any
//! phase.

use super::state::{GameEvent, GameState, MatchPhase, PlayerId};

impl GameState {
    /// Begin a match from Idle. Player positions are kept.
    pub fn start(&mut self) -> bool {
        if self.phase != MatchPhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.begin_match();
        log::info!("Match started");
        true
    }

    /// Play again after a win. Player positions are kept.
    pub fn restart(&mut self) -> bool {
        if self.phase != MatchPhase::Finished {
            log::debug!("restart ignored in {:?}", self.phase);
            return false;
        }
        self.begin_match();
        log::info!("Match restarted");
        true
    }

    /// Back to Idle with fresh scores, kickoff positions and a centered ball
    pub fn reset(&mut self) {
        for id in PlayerId::ALL {
            let pos = self.field.kickoff_position(id, self.tuning.player_size);
            let player = self.player_mut(id);
            player.pos = pos;
            player.score = 0;
        }
        self.reset_ball();
        self.winner = None;
        self.phase = MatchPhase::Idle;
        self.time_ticks = 0;
        self.events.clear();
        log::info!("Match reset");
    }

    fn begin_match(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.reset_ball();
        self.winner = None;
        self.phase = MatchPhase::Playing;
        self.time_ticks = 0;
        self.events.clear();
    }

    /// Credit one goal and put the ball back on the center spot
    pub fn award_goal(&mut self, scorer: PlayerId) {
        self.player_mut(scorer).score += 1;
        self.reset_ball();
        self.events.push(GameEvent::Goal { scorer });
        let (p1, p2) = self.scores();
        log::info!("Goal by {} ({} - {})", scorer, p1, p2);
    }

    /// Finish the match if a player reached the winning score.
    ///
    /// Players are checked in fixed order, player 1 first.
    pub fn check_winner(&mut self) -> Option<PlayerId> {
        if self.phase != MatchPhase::Playing {
            return self.winner;
        }
        let winner = PlayerId::ALL
            .into_iter()
            .find(|id| self.player(*id).score >= self.tuning.win_score)?;
        self.winner = Some(winner);
        self.phase = MatchPhase::Finished;
        self.events.push(GameEvent::MatchWon { winner });
        log::info!("{} wins", winner);
        Some(winner)
    }
}
