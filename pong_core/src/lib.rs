pub mod arena;
pub mod components;
pub mod config;
pub mod render;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use render::*;
pub use resources::*;

use glam::DVec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
) {
    // Clamp dt to prevent large jumps
    let dt_ms = time.dt_ms.min(Params::MAX_DT_MS);
    let tick = Time::new(dt_ms, time.now_ms);

    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, inputs);

    // 2. Move paddles based on intents
    move_paddles(world, &tick, arena, config);

    // 3. Move ball
    move_ball(world, &tick);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, arena, events);

    // 5. Attribute points for side-wall touches
    check_scoring(world, arena, score, events);

    // Update time
    time.now_ms += dt_ms;
}

/// Helper to create a paddle entity.
pub fn create_paddle(world: &mut World, id: PlayerId, center: DVec2, size: DVec2) -> hecs::Entity {
    world.spawn((Paddle::new(id, center, size), PaddleIntent::new()))
}

/// Helper to create the ball entity.
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
