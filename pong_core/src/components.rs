use glam::DVec2;

use crate::arena::{Wall, WallId};
use crate::render::{Canvas, Color};
use crate::resources::GameRng;

/// Travel direction along a single axis. Always exactly -1 or +1, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Neg,
    Pos,
}

impl Sign {
    /// Unbiased coin draw over the two possible directions.
    pub fn random(rng: &mut GameRng) -> Self {
        use rand::Rng;
        if rng.0.gen_bool(0.5) {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Neg => -1.0,
            Sign::Pos => 1.0,
        }
    }
}

/// Ball travel direction, one sign per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub x: Sign,
    pub y: Sign,
}

impl Heading {
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            x: Sign::random(rng),
            y: Sign::random(rng),
        }
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x.as_f64(), self.y.as_f64())
    }
}

/// Paddle identity. One guards the left edge, Two the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayerId {
    One,
    Two,
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player One"),
            PlayerId::Two => write!(f, "Player Two"),
        }
    }
}

/// Ball component - position, extent, and travel state.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub center: DVec2,
    pub size: DVec2,
    pub color: Color,
    pub speed: f64, // px per ms
    pub heading: Heading,
}

impl Ball {
    /// The serve direction is drawn at construction, one coin per axis.
    pub fn new(center: DVec2, size: DVec2, color: Color, speed: f64, rng: &mut GameRng) -> Self {
        Self {
            center,
            size,
            color,
            speed,
            heading: Heading::random(rng),
        }
    }

    /// Advance the ball by `delta_ms` milliseconds of straight-line travel.
    /// No bounds handling here: collision response is a separate step,
    /// sequenced by the loop.
    pub fn update(&mut self, delta_ms: f64) {
        self.center += self.heading.as_dvec2() * delta_ms * self.speed;
    }

    /// Reverse horizontal travel. Both paddles produce the same reflection;
    /// the identity is accepted for symmetry with the wall response.
    pub fn on_player_collision(&mut self, _player: PlayerId) {
        self.heading.x = self.heading.x.flip();
    }

    /// Reverse travel on the wall's axis.
    pub fn on_wall_collision(&mut self, wall: WallId) {
        match wall {
            WallId::Left | WallId::Right => self.heading.x = self.heading.x.flip(),
            WallId::Top | WallId::Bottom => self.heading.y = self.heading.y.flip(),
        }
    }

    /// Half-plane test of the ball center against the wall's boundary
    /// coordinate, oriented by which side the wall closes off.
    pub fn hits_wall(&self, wall: &Wall) -> bool {
        match wall.id {
            WallId::Left => self.center.x <= wall.at,
            WallId::Right => self.center.x >= wall.at,
            WallId::Top => self.center.y <= wall.at,
            WallId::Bottom => self.center.y >= wall.at,
        }
    }

    /// Point test of the ball center against the paddle's guarded side and
    /// vertical span. The ball's own extent is deliberately ignored.
    pub fn hits_paddle(&self, paddle: &Paddle) -> bool {
        let half_height = paddle.size.y / 2.0;
        let in_span = self.center.y >= paddle.center.y - half_height
            && self.center.y <= paddle.center.y + half_height;
        match paddle.id {
            PlayerId::One => in_span && self.center.x <= paddle.center.x,
            PlayerId::Two => in_span && self.center.x >= paddle.center.x,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(self.color);
        canvas.fill_rect(self.center.x, self.center.y, self.size.x, self.size.y);
    }
}

/// Paddle component. Moved by the input systems; read-only from the ball's
/// perspective.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub id: PlayerId,
    pub center: DVec2,
    pub size: DVec2,
}

impl Paddle {
    pub fn new(id: PlayerId, center: DVec2, size: DVec2) -> Self {
        Self { id, center, size }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(Color::WHITE);
        canvas.fill_rect(self.center.x, self.center.y, self.size.x, self.size.y);
    }
}

/// Movement intent for paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
