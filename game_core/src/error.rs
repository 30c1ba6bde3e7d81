use thiserror::Error;

/// Errors surfaced while setting up a match
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    /// The rendering surface the court is sized from does not exist
    #[error("rendering surface not found: {id}")]
    MissingSurface { id: String },

    /// Court dimensions cannot hold the paddles and ball
    #[error("invalid court size {width}x{height}")]
    InvalidCourt { width: f32, height: f32 },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
