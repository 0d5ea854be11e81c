use glam::DVec2;

use crate::components::PlayerId;

/// Game tuning parameters. Distances are pixels, speeds pixels per
/// millisecond.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_SPEED: f64 = 0.6;
    pub const PADDLE_INSET: f64 = 40.0;

    // Ball
    pub const BALL_SIZE: f64 = 20.0;
    pub const BALL_SPEED: f64 = 0.45;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Loop
    pub const MAX_DT_MS: f64 = 100.0;
}

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f64,
    pub arena_height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_inset: f64,
    pub ball_size: f64,
    pub ball_speed: f64,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The X coordinate a paddle guards, by identity.
    pub fn paddle_x(&self, id: PlayerId) -> f64 {
        match id {
            PlayerId::One => self.paddle_inset,
            PlayerId::Two => self.arena_width - self.paddle_inset,
        }
    }

    pub fn paddle_size(&self) -> DVec2 {
        DVec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_size(&self) -> DVec2 {
        DVec2::new(self.ball_size, self.ball_size)
    }
}
