use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle};
use crate::resources::Events;

/// Run the ball's collision predicates against every wall and paddle and
/// apply the matching direction response. Walls are tested first, then
/// paddles; the first paddle hit ends the paddle pass. Positions are never
/// adjusted here - the predicates work on the ball center as it stands.
pub fn check_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for wall in arena.walls() {
            if ball.hits_wall(wall) {
                ball.on_wall_collision(wall.id);
                events.ball_hit_wall = true;
            }
        }

        for paddle in &paddles {
            if ball.hits_paddle(paddle) {
                ball.on_player_collision(paddle.id);
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}
