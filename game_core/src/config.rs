use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_margin: f32,
    pub player_speed: f32,
    pub ai_deadband: f32,
    pub ball_size: f32,
    pub bounce_margin: f32,
    pub trail_len: usize,
    pub trail_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            ai_deadband: Params::AI_DEADBAND,
            ball_size: Params::BALL_SIZE,
            bounce_margin: Params::BOUNCE_MARGIN,
            trail_len: Params::TRAIL_LEN,
            trail_alpha: Params::TRAIL_ALPHA,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest allowed paddle top edge
    pub fn paddle_min_y(&self) -> f32 {
        self.paddle_margin
    }

    /// Highest allowed paddle top edge for a court of the given height
    pub fn paddle_max_y(&self, court_height: f32) -> f32 {
        court_height - self.paddle_margin - self.paddle_height
    }

    /// Clamp a paddle's top edge into the court
    pub fn clamp_paddle_y(&self, y: f32, court_height: f32) -> f32 {
        y.max(self.paddle_min_y()).min(self.paddle_max_y(court_height))
    }
}

/// Immutable bundle of tuning values for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub ai_speed: f32,
    pub ball_base_speed: f32,
    pub accel_per_hit: f32,
    pub max_ball_speed: f32,
    pub ai_jitter: f32,
}

/// Named difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ai_speed: 5.0,
                ball_base_speed: 4.0,
                accel_per_hit: 0.25,
                max_ball_speed: 8.0,
                ai_jitter: 14.0,
            },
            Difficulty::Normal => DifficultyProfile {
                ai_speed: 8.0,
                ball_base_speed: 6.0,
                accel_per_hit: 0.30,
                max_ball_speed: 10.0,
                ai_jitter: 9.0,
            },
            Difficulty::Hard => DifficultyProfile {
                ai_speed: 11.0,
                ball_base_speed: 8.0,
                accel_per_hit: 0.35,
                max_ball_speed: 12.0,
                ai_jitter: 4.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0, 600.0), 20.0);
        assert_eq!(config.clamp_paddle_y(1000.0, 600.0), 490.0);
        assert_eq!(config.clamp_paddle_y(255.0, 600.0), 255.0);
    }

    #[test]
    fn test_presets_get_harder() {
        let [easy, normal, hard] = Difficulty::ALL.map(Difficulty::profile);
        assert!(easy.ai_speed < normal.ai_speed && normal.ai_speed < hard.ai_speed);
        assert!(easy.ball_base_speed < normal.ball_base_speed);
        assert!(normal.ball_base_speed < hard.ball_base_speed);
        assert!(easy.ai_jitter > normal.ai_jitter && normal.ai_jitter > hard.ai_jitter);
        for profile in [easy, normal, hard] {
            assert!(profile.max_ball_speed >= profile.ball_base_speed);
        }
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("insane".into()))
        );
    }

    #[test]
    fn test_difficulty_name_round_trips() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>(), Ok(level));
        }
    }
}
