use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Apply queued paddle directions to the matching paddle's intent. Later
/// entries win when a player queued more than one direction this tick.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(player, dir) in &queue.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.id == player {
                intent.dir = dir;
            }
        }
    }

    queue.inputs.clear();
}
