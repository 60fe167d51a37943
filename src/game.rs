//! Session owner and state machine entry points
//!
//! `Game` is what the frame scheduler and input source talk to. It owns the
//! current [`GameSession`], the best score, the best-score store and the
//! random source for gap placement.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::ConfigError;
use crate::persistence::BestScoreStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameSession, TickInput, autopilot_should_flap, tick};

/// A playable game: Playing <-> GameOver with a persisted best score
#[derive(Debug)]
pub struct Game<S: BestScoreStore, R: Rng = Pcg32> {
    settings: Settings,
    session: GameSession,
    best_score: u32,
    store: S,
    rng: R,
    /// Impulse received since the last tick
    pending_impulse: bool,
}

impl<S: BestScoreStore> Game<S, Pcg32> {
    /// Build a game whose gap sequence is reproducible from `seed`
    pub fn with_seed(settings: Settings, store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::new(settings, store, Pcg32::seed_from_u64(seed))
    }
}

impl<S: BestScoreStore, R: Rng> Game<S, R> {
    /// Validate settings, load the best score and start the first session
    pub fn new(settings: Settings, store: S, rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;

        let best_score = store.load_best_score().unwrap_or_else(|e| {
            log::warn!("Could not load best score, using 0: {}", e);
            0
        });

        let session = GameSession::new(&settings);
        log::info!(
            "New game ({} preset, best score {})",
            settings.preset.as_str(),
            best_score
        );

        Ok(Self {
            settings,
            session,
            best_score,
            store,
            rng,
            pending_impulse: false,
        })
    }

    /// Advance one tick. Does nothing while the game is over.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let input = TickInput {
            impulse: std::mem::take(&mut self.pending_impulse),
        };
        let mut events = tick(&mut self.session, &self.settings, &input, &mut self.rng);

        let crashed = events
            .iter()
            .any(|e| matches!(e, GameEvent::Crashed { .. }));
        if crashed && self.session.score > self.best_score {
            self.best_score = self.session.score;
            log::info!("New best score: {}", self.best_score);
            if let Err(e) = self.store.save_best_score(self.best_score) {
                log::warn!("Could not save best score: {}", e);
            }
            events.push(GameEvent::NewBest {
                score: self.best_score,
            });
        }

        events
    }

    /// Player input. Buffers a flap while playing; restarts after a crash.
    pub fn impulse(&mut self) -> Option<GameEvent> {
        match self.session.phase {
            GamePhase::Playing => {
                self.pending_impulse = true;
                None
            }
            GamePhase::GameOver => self.restart(),
        }
    }

    /// Replace a finished session with a fresh one. Ignored while playing.
    pub fn restart(&mut self) -> Option<GameEvent> {
        if self.session.phase != GamePhase::GameOver {
            return None;
        }
        self.session = GameSession::new(&self.settings);
        self.pending_impulse = false;
        log::info!("Restarted (best score {})", self.best_score);
        Some(GameEvent::Restarted)
    }

    /// Let the built-in demo policy decide whether to flap this tick
    pub fn autopilot(&mut self) {
        if autopilot_should_flap(&self.session, &self.settings) {
            self.pending_impulse = true;
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn has_pending_impulse(&self) -> bool {
        self.pending_impulse
    }
}
