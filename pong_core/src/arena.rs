use glam::DVec2;

use crate::components::PlayerId;
use crate::config::{Config, Params};

/// Identity of one of the four playfield boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallId {
    Left,
    Right,
    Top,
    Bottom,
}

/// A static axis boundary. `at` is the boundary coordinate on the wall's
/// axis: x for Left/Right, y for Top/Bottom. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub id: WallId,
    pub at: f64,
}

impl Wall {
    pub fn new(id: WallId, at: f64) -> Self {
        Self { id, at }
    }
}

/// Playfield definition: dimensions and the four boundary walls.
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    walls: [Wall; 4],
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            walls: [
                Wall::new(WallId::Left, 0.0),
                Wall::new(WallId::Right, width),
                Wall::new(WallId::Top, 0.0),
                Wall::new(WallId::Bottom, height),
            ],
        }
    }

    pub fn walls(&self) -> &[Wall; 4] {
        &self.walls
    }

    pub fn wall(&self, id: WallId) -> &Wall {
        match id {
            WallId::Left => &self.walls[0],
            WallId::Right => &self.walls[1],
            WallId::Top => &self.walls[2],
            WallId::Bottom => &self.walls[3],
        }
    }

    pub fn ball_spawn(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn paddle_spawn(&self, id: PlayerId, config: &Config) -> DVec2 {
        DVec2::new(config.paddle_x(id), self.height / 2.0)
    }

    /// Clamp a paddle center so the whole paddle stays inside the field.
    pub fn clamp_y(&self, y: f64, half_extent: f64) -> f64 {
        y.clamp(half_extent, self.height - half_extent)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}
