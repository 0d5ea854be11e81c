use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Time;

/// Apply paddle movement based on intents, clamped to the arena.
pub fn move_paddles(world: &mut World, time: &Time, arena: &Arena, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.center.y += intent.dir as f64 * config.paddle_speed * time.dt_ms;
            paddle.center.y = arena.clamp_y(paddle.center.y, paddle.size.y / 2.0);
        }
    }
}

/// Advance the ball along its heading.
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt_ms);
    }
}
