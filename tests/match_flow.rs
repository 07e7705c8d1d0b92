use std::time::Duration;

use disc_soccer::sim::{
    Ball, Field, GameEvent, GameState, MatchPhase, PlayerId, PlayerIntent, TickInput, Tuning,
    detect_goal, tick,
};
use disc_soccer::{Session, Settings};
use glam::Vec2;

fn playing_state() -> GameState {
    let mut state = GameState::new(Field::new(400.0, 300.0), Tuning::default());
    assert!(state.start());
    state
}

#[test]
fn test_goal_round_trip() {
    let mut state = playing_state();
    state.ball = Ball { pos: Vec2::new(399.0, 150.0), vel: Vec2::ZERO };

    let scorer = detect_goal(&state.ball, &state.field);
    assert_eq!(scorer, Some(PlayerId::One));
    state.award_goal(PlayerId::One);

    assert_eq!(state.scores(), (1, 0));
    assert_eq!(state.ball.pos, Vec2::new(200.0, 150.0));
    assert_eq!(state.ball.vel, Vec2::ZERO);
}

#[test]
fn test_second_goal_finishes_match() {
    let mut state = playing_state();
    state.player_mut(PlayerId::One).score = 1;
    state.ball = Ball { pos: Vec2::new(350.0, 150.0), vel: Vec2::new(4.0, 0.0) };

    let finished = tick(&state, &TickInput::default());
    assert_eq!(finished.phase, MatchPhase::Finished);
    assert_eq!(finished.winner.map(|w| w.to_string()), Some("player1".to_string()));
    assert!(finished.events.contains(&GameEvent::MatchWon { winner: PlayerId::One }));

    // Nothing moves once the match is over
    let nudge = TickInput::default()
        .with(PlayerId::Two, PlayerIntent::drag_to(Vec2::new(10.0, 10.0)));
    let mut after = finished.clone();
    for _ in 0..10 {
        after = tick(&after, &nudge);
    }
    assert_eq!(after, finished);
}

#[test]
fn test_contact_threshold_scenario() {
    let mut state = playing_state();
    state.player_mut(PlayerId::One).pos = Vec2::new(160.0, 150.0);
    state.ball = Ball { pos: Vec2::new(200.0, 150.0), vel: Vec2::ZERO };

    // 40 apart: no contact
    let next = tick(&state, &TickInput::default());
    assert_eq!(next.ball.vel, Vec2::ZERO);

    // 20 apart: pushed along the separation at full strength
    state.player_mut(PlayerId::One).pos = Vec2::new(180.0, 150.0);
    let next = tick(&state, &TickInput::default());
    assert!((next.ball.vel - Vec2::new(8.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_invariants_hold_over_long_match() {
    let mut session = Session::new(&Settings::default());
    session.start();
    session.key_down("d");
    session.key_down("ArrowLeft");

    let half_ball = Tuning::default().ball_size / 2.0;
    let half_player = Tuning::default().player_size / 2.0;
    let mut last_scores = (0, 0);
    for frame in 0..2000u32 {
        if frame % 97 == 0 {
            session.key_down("w");
            session.key_up("s");
        } else if frame % 97 == 48 {
            session.key_down("s");
            session.key_up("w");
        }
        session.advance(Duration::from_millis(16));

        let state = session.state();
        let (w, h) = (state.field.width, state.field.height);
        let ball = state.ball.pos;
        assert!(ball.x >= half_ball && ball.x <= w - half_ball);
        assert!(ball.y >= half_ball && ball.y <= h - half_ball);
        for player in &state.players {
            assert!(player.pos.x >= half_player && player.pos.x <= w - half_player);
            assert!(player.pos.y >= half_player && player.pos.y <= h - half_player);
        }

        let scores = state.scores();
        assert!(scores.0 >= last_scores.0 && scores.1 >= last_scores.1);
        last_scores = scores;

        if session.phase() == MatchPhase::Finished {
            assert!(!session.is_ticking());
            assert!(state.winner.is_some());
            break;
        }
    }
}

#[test]
fn test_full_lifecycle() {
    let mut session = Session::new(&Settings::default());
    assert_eq!(session.phase(), MatchPhase::Idle);
    assert!(!session.restart());

    assert!(session.start());
    assert!(session.is_ticking());
    session.key_down("ArrowDown");
    session.advance(Duration::from_millis(160));
    assert!(session.state().player(PlayerId::Two).pos.y > 150.0);

    session.reset();
    let once = session.state().clone();
    session.reset();
    assert_eq!(session.state(), &once);
    assert_eq!(session.phase(), MatchPhase::Idle);
    assert_eq!(session.state().player(PlayerId::Two).pos, Vec2::new(300.0, 150.0));
}
