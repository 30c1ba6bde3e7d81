/// Game tuning parameters for Neon Pong (device pixels, per frame)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 22.0; // Gap between side wall and paddle
    pub const PADDLE_MARGIN: f32 = 20.0; // Paddle may not get closer to top/bottom
    pub const PLAYER_SPEED: f32 = 10.0;

    // Computer paddle
    pub const AI_DEADBAND: f32 = 8.0;

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const BOUNCE_MARGIN: f32 = 10.0;

    // Trail
    pub const TRAIL_LEN: usize = 10;
    pub const TRAIL_ALPHA: f32 = 0.8;

    // Key codes
    pub const KEY_UP: u32 = 38;
    pub const KEY_DOWN: u32 = 40;
    pub const KEY_PAUSE: u32 = 80;
    pub const KEY_RESET: u32 = 82;
}
