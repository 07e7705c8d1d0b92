//! Host-facing match driver
//!
//! Buffers asynchronous input as "current intent", owns the fixed-rate tick
//! timer and exposes the start/restart/reset commands. The timer only exists
//! while the match is Playing: it is dropped the moment the phase changes,
//! so no tick can run after a win or reset.

use std::time::Duration;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{
    Direction, GameState, HeldDirections, KeyBindings, MatchPhase, PlayerId, PlayerIntent,
    Snapshot, TickInput, tick,
};

/// Fixed-interval tick clock fed with host frame time
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl TickTimer {
    pub fn new(interval: Duration, max_substeps: u32) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_substeps,
        }
    }

    /// Add elapsed host time and return how many ticks are due.
    ///
    /// At most `max_substeps` ticks are returned; time beyond that is dropped.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_substeps {
            self.accumulator -= self.interval;
            due += 1;
        }
        if self.accumulator >= self.interval {
            self.accumulator = Duration::ZERO;
        }
        due
    }
}

/// Latest input state per player, sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct IntentBuffer {
    held: [HeldDirections; 2],
    drag: [Option<Vec2>; 2],
}

impl IntentBuffer {
    pub fn set_held(&mut self, id: PlayerId, dir: Direction, held: bool) {
        self.held[id.index()].set(dir, held);
    }

    /// Record a key press; returns false for unbound keys
    pub fn key_down(&mut self, key: &str) -> bool {
        self.apply_key(key, true)
    }

    /// Record a key release; returns false for unbound keys
    pub fn key_up(&mut self, key: &str) -> bool {
        self.apply_key(key, false)
    }

    fn apply_key(&mut self, key: &str, held: bool) -> bool {
        match KeyBindings::lookup(key) {
            Some((id, dir)) => {
                self.set_held(id, dir, held);
                true
            }
            None => false,
        }
    }

    /// Replace the pending drag target (last event wins)
    pub fn drag(&mut self, id: PlayerId, target: Vec2) {
        self.drag[id.index()] = Some(target);
    }

    pub fn held(&self, id: PlayerId) -> HeldDirections {
        self.held[id.index()]
    }

    /// Build this tick's input; drag targets are consumed, held keys persist
    pub fn sample(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for id in PlayerId::ALL {
            let intent = PlayerIntent {
                target: self.drag[id.index()].take(),
                held: self.held[id.index()],
            };
            input = input.with(id, intent);
        }
        input
    }

    pub fn clear_drags(&mut self) {
        self.drag = [None; 2];
    }
}

/// A running game: state, buffered input and the tick timer
#[derive(Debug)]
pub struct Session {
    state: GameState,
    input: IntentBuffer,
    timer: Option<TickTimer>,
    interval: Duration,
    max_substeps: u32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.field(), settings.tuning),
            input: IntentBuffer::default(),
            timer: None,
            interval: settings.tick_interval(),
            max_substeps: settings.max_substeps,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[inline]
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// True while the tick timer is armed
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn input(&self) -> &IntentBuffer {
        &self.input
    }

    pub fn start(&mut self) -> bool {
        let started = self.state.start();
        if started {
            self.arm_timer();
        }
        started
    }

    pub fn restart(&mut self) -> bool {
        let restarted = self.state.restart();
        if restarted {
            self.arm_timer();
        }
        restarted
    }

    pub fn reset(&mut self) {
        self.disarm_timer();
        self.input.clear_drags();
        self.state.reset();
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    /// Drag a player toward a field position; ignored unless Playing
    pub fn drag(&mut self, id: PlayerId, target: Vec2) -> bool {
        if self.state.phase != MatchPhase::Playing {
            return false;
        }
        self.input.drag(id, target);
        true
    }

    /// Feed elapsed host time; returns the number of ticks run
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.accumulate(elapsed),
            None => return 0,
        };
        let mut ran = 0;
        for _ in 0..due {
            if !self.step() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Run exactly one tick if the timer is armed
    pub fn step(&mut self) -> bool {
        if self.timer.is_none() {
            return false;
        }
        let input = self.input.sample();
        self.state = tick(&self.state, &input);
        if self.state.phase != MatchPhase::Playing {
            self.disarm_timer();
        }
        true
    }

    fn arm_timer(&mut self) {
        self.input.clear_drags();
        self.timer = Some(TickTimer::new(self.interval, self.max_substeps));
        log::debug!("Tick timer armed ({:?})", self.interval);
    }

    fn disarm_timer(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("Tick timer stopped");
        }
    }
}
