use hecs::World;

use crate::components::{Ball, Paddle};

/// RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 240, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Drawing surface contract. The simulation emits filled rectangles through
/// this seam and never learns how they reach the screen; shells supply the
/// implementation.
pub trait Canvas {
    fn set_color(&mut self, color: Color);
    /// Fill an axis-aligned rectangle centered at (cx, cy).
    fn fill_rect(&mut self, cx: f64, cy: f64, w: f64, h: f64);
}

/// One recorded facade call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    SetColor(Color),
    FillRect { cx: f64, cy: f64, w: f64, h: f64 },
}

/// Canvas that records the call stream instead of rasterizing. Used by
/// headless shells and tests to observe exactly what the core asked for.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn set_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetColor(color));
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect { cx, cy, w, h });
    }
}

/// Draw the paddles and then the ball. Entities are ordered by identity so
/// the emitted call stream is stable for a given world state.
pub fn draw_frame(world: &World, canvas: &mut dyn Canvas) {
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.id);
    for paddle in &paddles {
        paddle.draw(canvas);
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        ball.draw(canvas);
    }
}
