use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::config::DifficultyProfile;
use crate::court::Court;
use crate::geometry::Body;
use crate::resources::GameRng;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left
    Computer, // right
}

/// Paddle component; the position lives in the entity's `Body`
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Keyboard-driven paddle movement
#[derive(Debug, Clone, Copy)]
pub struct PlayerControl {
    pub speed: f32, // px per frame
}

impl PlayerControl {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Autonomous targeting state of the computer paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTracker {
    pub tracking_speed: f32,
    pub jitter: f32,
}

impl AiTracker {
    pub fn new(profile: &DifficultyProfile) -> Self {
        Self {
            tracking_speed: profile.ai_speed,
            jitter: profile.ai_jitter,
        }
    }

    pub fn apply_profile(&mut self, profile: &DifficultyProfile) {
        *self = Self::new(profile);
    }
}

/// One axis of the ball's direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.0.gen_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Ball direction: x is rightward-positive, y is downward-positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub x: Sign,
    pub y: Sign,
}

impl Heading {
    pub fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    /// Both components drawn independently, so all four diagonals are equally likely
    pub fn random(rng: &mut GameRng) -> Self {
        let x = Sign::random(rng);
        let y = Sign::random(rng);
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x.as_f32(), self.y.as_f32())
    }

    /// True when the ball travels toward the computer's side
    pub fn toward_computer(self) -> bool {
        self.x == Sign::Positive
    }
}

/// A remembered ball center, drawn as the glow trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Ball component - the pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub heading: Heading,
    pub speed: f32,
    pub base_speed: f32,
    pub accel_per_hit: f32,
    pub max_speed: f32,
    pub trail: VecDeque<TrailPoint>,
}

impl Ball {
    pub fn new(profile: &DifficultyProfile, rng: &mut GameRng) -> Self {
        Self {
            heading: Heading::random(rng),
            speed: profile.ball_base_speed,
            base_speed: profile.ball_base_speed,
            accel_per_hit: profile.accel_per_hit,
            max_speed: profile.max_ball_speed,
            trail: VecDeque::new(),
        }
    }

    /// Swap in new speed limits; the current speed drops to the new base at once
    pub fn apply_profile(&mut self, profile: &DifficultyProfile) {
        self.base_speed = profile.ball_base_speed;
        self.accel_per_hit = profile.accel_per_hit;
        self.max_speed = profile.max_ball_speed;
        self.speed = self.base_speed;
    }

    /// Speed up after a paddle hit, saturating at `max_speed`
    pub fn accelerate(&mut self) {
        self.speed = self.max_speed.min(self.speed + self.accel_per_hit);
    }

    /// Serve again from the center with a fresh random diagonal
    pub fn reset(&mut self, body: &mut Body, court: &Court, rng: &mut GameRng) {
        body.pos = court.centered(body.size);
        self.trail.clear();
        self.speed = self.base_speed;
        self.heading = Heading::random(rng);
    }

    /// Remember a trail sample, dropping the oldest beyond `capacity`
    pub fn record_trail(&mut self, point: TrailPoint, capacity: usize) {
        self.trail.push_back(point);
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }
}
