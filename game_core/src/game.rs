//! Match controller
//!
//! Owns the entities, score and key state of one match and drives the
//! per-frame update. Pause, reset and difficulty changes mutate the match in
//! place; entities are never recreated.

use hecs::World;
use tracing::{debug, info};

use crate::error::Result;
use crate::{
    step, AiTracker, Ball, Binding, Body, Config, Court, Difficulty, Events, GameRng, Heading,
    InputState, Paddle, Score, Side, Sign, TrailPoint,
};

/// Simulation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Running,
    Paused,
}

/// Read-only view of a match for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub player: Body,
    pub computer: Body,
    pub ball: Body,
    pub heading: Heading,
    pub speed: f32,
    pub trail: Vec<TrailPoint>,
    pub score: Score,
    pub paused: bool,
}

pub struct Match {
    pub world: World,
    pub court: Court,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub rng: GameRng,
    state: MatchState,
    difficulty: Difficulty,
}

impl Match {
    pub fn new(court: Court, config: Config, difficulty: Difficulty, mut rng: GameRng) -> Self {
        let mut world = World::new();
        let profile = difficulty.profile();
        crate::create_player_paddle(&mut world, &court, &config);
        crate::create_computer_paddle(&mut world, &court, &config, &profile);
        crate::create_ball(&mut world, &court, &config, &profile, &mut rng);

        info!(
            width = court.width,
            height = court.height,
            %difficulty,
            "match created"
        );

        Self {
            world,
            court,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            rng,
            state: MatchState::Running,
            difficulty,
        }
    }

    /// Build a match for a surface of the given pixel size with default tuning
    /// and unseeded randomness
    pub fn for_surface(width: f32, height: f32, difficulty: Difficulty) -> Result<Self> {
        let config = Config::new();
        let court = Court::new(width, height, &config)?;
        Ok(Self::new(court, config, difficulty, GameRng::from_entropy()))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == MatchState::Paused
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_paused(&mut self, paused: bool) {
        let next = if paused {
            MatchState::Paused
        } else {
            MatchState::Running
        };
        if next != self.state {
            debug!(state = ?next, "pause state changed");
        }
        self.state = next;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.is_paused());
    }

    /// Key press from the input source; pause and reset act immediately
    pub fn key_down(&mut self, code: u32) {
        match self.input.press(code) {
            Some(Binding::TogglePause) => self.toggle_pause(),
            Some(Binding::Reset) => self.reset(),
            _ => {}
        }
    }

    pub fn key_up(&mut self, code: u32) {
        self.input.release(code);
    }

    /// Zero the score, recenter both paddles and serve again.
    /// Leaves the pause state alone.
    pub fn reset(&mut self) {
        self.score.reset();

        let y = self.court.height / 2.0 - self.config.paddle_height / 2.0;
        for (_entity, (body, _paddle)) in self.world.query_mut::<(&mut Body, &Paddle)>() {
            body.pos.y = y;
        }
        for (_entity, (body, ball)) in self.world.query_mut::<(&mut Body, &mut Ball)>() {
            ball.reset(body, &self.court, &mut self.rng);
        }

        info!("match reset");
    }

    /// Swap the active difficulty mid-match; scores and positions are kept,
    /// the ball drops to the new base speed immediately
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        let profile = difficulty.profile();
        for (_entity, tracker) in self.world.query_mut::<&mut AiTracker>() {
            tracker.apply_profile(&profile);
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.apply_profile(&profile);
        }
        self.difficulty = difficulty;

        info!(%difficulty, "difficulty applied");
    }

    /// Advance one frame. A paused match does not change.
    pub fn tick(&mut self) -> &Events {
        if self.is_paused() {
            self.events.clear();
            return &self.events;
        }

        step(
            &mut self.world,
            &self.court,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            player: Body::default(),
            computer: Body::default(),
            ball: Body::default(),
            heading: Heading::new(Sign::Positive, Sign::Positive),
            speed: 0.0,
            trail: Vec::new(),
            score: self.score,
            paused: self.is_paused(),
        };

        for (_e, (body, paddle)) in self.world.query::<(&Body, &Paddle)>().iter() {
            match paddle.side {
                Side::Player => snapshot.player = *body,
                Side::Computer => snapshot.computer = *body,
            }
        }
        if let Some((_e, (body, ball))) = self.world.query::<(&Body, &Ball)>().iter().next() {
            snapshot.ball = *body;
            snapshot.heading = ball.heading;
            snapshot.speed = ball.speed;
            snapshot.trail = ball.trail.iter().copied().collect();
        }

        snapshot
    }
}
