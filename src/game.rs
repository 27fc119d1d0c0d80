//! Game loop
//!
//! Owns the session state, the tick clock and the persisted records, and
//! exposes the operations the front-end calls.

use crate::highscores::BestScore;
use crate::platform::{Command, KeyValueStore};
use crate::settings::{Settings, SpeedLevel};
use crate::sim::{Board, Direction, FixedTicker, GameState, TickOutcome, tick};

/// A running Snake session plus everything that outlives it
pub struct GameLoop<S: KeyValueStore> {
    state: GameState,
    ticker: FixedTicker,
    best: BestScore,
    settings: Settings,
    store: S,
}

impl<S: KeyValueStore> GameLoop<S> {
    /// Load records from `store` and start a session on the default board
    pub fn new(store: S, seed: u64) -> Self {
        Self::with_board(store, Board::default(), seed)
    }

    pub fn with_board(store: S, board: Board, seed: u64) -> Self {
        let best = BestScore::load(&store);
        let settings = Settings::load(&store);
        let mut game = Self {
            state: GameState::with_board(board, seed, best.get()),
            ticker: FixedTicker::new(settings.tick_ms),
            best,
            settings,
            store,
        };
        game.start();
        game
    }

    /// Begin a new session: fresh snake heading right, zero score, new food
    pub fn start(&mut self) {
        self.state.best_score = self.best.get();
        self.state.restart();
        self.ticker.reset();
        log::info!(
            "Game started ({} ms per tick, best {})",
            self.ticker.period_ms(),
            self.best.get()
        );
    }

    /// Restart after a game over (or mid-game)
    pub fn reset(&mut self) {
        self.start();
    }

    /// Run one tick now and persist a new best score if one was set
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.state);

        if let Some(best) = outcome.new_best() {
            if self.best.record(best) {
                log::info!("New best score: {}", best);
                if let Err(e) = self.best.save(&mut self.store) {
                    log::warn!("Failed to save best score: {}", e);
                }
            }
        }

        outcome
    }

    /// Feed elapsed wall time and run every tick that has come due.
    ///
    /// Ticking stops at the first game over; remaining time is discarded.
    pub fn update(&mut self, elapsed_ms: f64) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.state.is_running() {
            return outcome;
        }

        for _ in 0..self.ticker.advance(elapsed_ms) {
            outcome.events.extend(self.tick().events);
            if !self.state.is_running() {
                self.ticker.reset();
                break;
            }
        }

        outcome
    }

    /// Turn the snake; reversals are ignored. Returns whether the turn took.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let accepted = self.state.steer(direction);
        if !accepted {
            log::trace!("Ignored turn {:?}", direction);
        }
        accepted
    }

    /// Change the tick period for future ticks without touching the session
    pub fn set_speed(&mut self, tick_ms: u32) {
        self.settings.set_tick_ms(tick_ms);
        self.ticker.set_period(self.settings.tick_ms);
        match self.settings.level() {
            Some(level) => log::info!(
                "Speed set to {} ({} ms per tick)",
                level.as_str(),
                self.settings.tick_ms
            ),
            None => log::info!("Speed set to {} ms per tick", self.settings.tick_ms),
        }
        if let Err(e) = self.settings.save(&mut self.store) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn set_level(&mut self, level: SpeedLevel) {
        self.set_speed(level.tick_ms());
    }

    /// Dispatch a player command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => {
                self.set_direction(direction);
            }
            Command::Restart => self.reset(),
            Command::SetSpeed(level) => self.set_level(level),
            Command::SetTickMs(tick_ms) => self.set_speed(tick_ms),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the session state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn tick_ms(&self) -> u32 {
        self.ticker.period_ms()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
