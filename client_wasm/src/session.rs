//! Host session
//!
//! Page events are queued as they arrive and drained at the start of the
//! next animation frame, so the match has a single writer and a single
//! update path. No match exists until the first difficulty is chosen.

use game_core::{Body, Config, Court, Difficulty, GameError, GameRng, Match, Snapshot};
use proto::{FrameSnapshot, HostEvent, Level, Rect, TrailSample};
use tracing::debug;

pub struct Session {
    court: Court,
    config: Config,
    game: Option<Match>,
    pending: Vec<HostEvent>,
    seed: Option<u64>,
}

impl Session {
    /// Validate the surface size up front; the match itself starts on the
    /// first difficulty choice
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        let config = Config::new();
        let court = Court::new(width as f32, height as f32, &config)?;
        Ok(Self {
            court,
            config,
            game: None,
            pending: Vec::new(),
            seed: None,
        })
    }

    /// Use a fixed seed instead of entropy for the match's randomness
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn game(&self) -> Option<&Match> {
        self.game.as_ref()
    }

    pub fn push_event(&mut self, event: HostEvent) {
        self.pending.push(event);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued events in arrival order, tick once and describe the result.
    /// Returns `None` until a difficulty has been chosen.
    pub fn frame(&mut self) -> Option<FrameSnapshot> {
        for event in std::mem::take(&mut self.pending) {
            self.apply(event);
        }

        let game = self.game.as_mut()?;
        game.tick();
        Some(frame_snapshot(&game.snapshot()))
    }

    fn apply(&mut self, event: HostEvent) {
        debug!(?event, "host event");
        match event {
            HostEvent::KeyDown { code } => {
                if let Some(game) = self.game.as_mut() {
                    game.key_down(code);
                }
            }
            HostEvent::KeyUp { code } => {
                if let Some(game) = self.game.as_mut() {
                    game.key_up(code);
                }
            }
            HostEvent::OpenDifficultyMenu => {
                if let Some(game) = self.game.as_mut() {
                    game.set_paused(true);
                }
            }
            HostEvent::SelectDifficulty { level } => {
                let difficulty = difficulty(level);
                match self.game.as_mut() {
                    Some(game) => game.apply_difficulty(difficulty),
                    None => {
                        let rng = match self.seed {
                            Some(seed) => GameRng::new(seed),
                            None => GameRng::from_entropy(),
                        };
                        self.game = Some(Match::new(
                            self.court,
                            self.config.clone(),
                            difficulty,
                            rng,
                        ));
                    }
                }
                if let Some(game) = self.game.as_mut() {
                    game.set_paused(false);
                }
            }
        }
    }
}

pub fn difficulty(level: Level) -> Difficulty {
    match level {
        Level::Easy => Difficulty::Easy,
        Level::Normal => Difficulty::Normal,
        Level::Hard => Difficulty::Hard,
    }
}

pub fn level(difficulty: Difficulty) -> Level {
    match difficulty {
        Difficulty::Easy => Level::Easy,
        Difficulty::Normal => Level::Normal,
        Difficulty::Hard => Level::Hard,
    }
}

fn rect(body: &Body) -> Rect {
    Rect {
        x: body.pos.x,
        y: body.pos.y,
        width: body.size.x,
        height: body.size.y,
    }
}

/// Convert a match snapshot into the renderer's wire form
pub fn frame_snapshot(snapshot: &Snapshot) -> FrameSnapshot {
    FrameSnapshot {
        player: rect(&snapshot.player),
        computer: rect(&snapshot.computer),
        ball: rect(&snapshot.ball),
        trail: snapshot
            .trail
            .iter()
            .map(|point| TrailSample {
                x: point.pos.x,
                y: point.pos.y,
                alpha: point.alpha,
            })
            .collect(),
        player_score: snapshot.score.player,
        computer_score: snapshot.score.computer,
        paused: snapshot.paused,
    }
}
