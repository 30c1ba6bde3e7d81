use std::collections::HashMap;

use crate::params::Params;

/// Match score; only an explicit reset brings it back to zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator for serves and AI aiming error
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Unseeded generator used outside of tests
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Logical keys the match reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    MoveUp,
    MoveDown,
    TogglePause,
    Reset,
}

impl Binding {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            Params::KEY_UP => Some(Binding::MoveUp),
            Params::KEY_DOWN => Some(Binding::MoveDown),
            Params::KEY_PAUSE => Some(Binding::TogglePause),
            Params::KEY_RESET => Some(Binding::Reset),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Binding::MoveUp => Params::KEY_UP,
            Binding::MoveDown => Params::KEY_DOWN,
            Binding::TogglePause => Params::KEY_PAUSE,
            Binding::Reset => Params::KEY_RESET,
        }
    }
}

/// Sparse key-code -> pressed table.
/// Written by input handlers, read at the start of each tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<u32, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; unbound codes are ignored
    pub fn press(&mut self, code: u32) -> Option<Binding> {
        let binding = Binding::from_code(code)?;
        self.keys.insert(code, true);
        Some(binding)
    }

    /// Record a key release; unbound codes are ignored
    pub fn release(&mut self, code: u32) -> Option<Binding> {
        let binding = Binding::from_code(code)?;
        self.keys.insert(code, false);
        Some(binding)
    }

    pub fn is_down(&self, binding: Binding) -> bool {
        self.keys.get(&binding.code()).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
