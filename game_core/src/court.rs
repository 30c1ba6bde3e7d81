use glam::Vec2;

use crate::components::Side;
use crate::config::Config;
use crate::error::{GameError, Result};

/// Playing field in device pixels, fixed for the lifetime of a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    /// Validate dimensions against the paddle and ball sizes in `config`
    pub fn new(width: f32, height: f32, config: &Config) -> Result<Self> {
        let fits_paddles = height >= 2.0 * config.paddle_margin + config.paddle_height;
        let fits_ball =
            width > 2.0 * (config.paddle_inset + config.paddle_width) + config.ball_size
                && height > 2.0 * config.bounce_margin + config.ball_size;

        if !width.is_finite() || !height.is_finite() || !fits_paddles || !fits_ball {
            return Err(GameError::InvalidCourt { width, height });
        }
        Ok(Self { width, height })
    }

    /// Top-left corner that centers a box of `size` in the court
    pub fn centered(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.width / 2.0 - size.x / 2.0, self.height / 2.0 - size.y / 2.0)
    }

    /// Left edge of the paddle on `side`
    pub fn paddle_x(&self, side: Side, config: &Config) -> f32 {
        match side {
            Side::Player => config.paddle_inset,
            Side::Computer => self.width - (config.paddle_inset + config.paddle_width),
        }
    }

    /// Spawn position for a paddle, vertically centered
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(
            self.paddle_x(side, config),
            self.height / 2.0 - config.paddle_height / 2.0,
        )
    }
}
