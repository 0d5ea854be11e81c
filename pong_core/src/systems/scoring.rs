use hecs::World;

use crate::arena::{Arena, WallId};
use crate::components::Ball;
use crate::resources::{Events, Score};

/// Attribute a point when the ball touched a side wall this tick: a Left
/// touch scores for Player Two, a Right touch for Player One. The direction
/// reversal already happened in the collision pass, so the ball stays in
/// play. Runs after `check_collisions` while the touch position is intact.
pub fn check_scoring(world: &mut World, arena: &Arena, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.hits_wall(arena.wall(WallId::Left)) {
            score.increment_two();
            events.player_two_scored = true;
        } else if ball.hits_wall(arena.wall(WallId::Right)) {
            score.increment_one();
            events.player_one_scored = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Heading, Sign};
    use crate::create_ball;
    use crate::render::Color;
    use glam::DVec2;

    fn ball_at(x: f64) -> Ball {
        Ball {
            center: DVec2::new(x, 300.0),
            size: DVec2::new(20.0, 20.0),
            color: Color::YELLOW,
            speed: 0.45,
            heading: Heading {
                x: Sign::Neg,
                y: Sign::Pos,
            },
        }
    }

    #[test]
    fn test_left_touch_scores_for_player_two() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut score = Score::new();
        let mut events = Events::new();
        create_ball(&mut world, ball_at(0.0));

        check_scoring(&mut world, &arena, &mut score, &mut events);

        assert_eq!(score.player_two, 1);
        assert_eq!(score.player_one, 0);
        assert!(events.player_two_scored);
        assert!(!events.player_one_scored);
    }

    #[test]
    fn test_right_touch_scores_for_player_one() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut score = Score::new();
        let mut events = Events::new();
        create_ball(&mut world, ball_at(arena.width + 0.5));

        check_scoring(&mut world, &arena, &mut score, &mut events);

        assert_eq!(score.player_one, 1);
        assert_eq!(score.player_two, 0);
        assert!(events.player_one_scored);
    }

    #[test]
    fn test_no_score_while_ball_in_bounds() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut score = Score::new();
        let mut events = Events::new();
        create_ball(&mut world, ball_at(400.0));

        check_scoring(&mut world, &arena, &mut score, &mut events);

        assert_eq!(score.player_one, 0);
        assert_eq!(score.player_two, 0);
        assert!(!events.player_one_scored && !events.player_two_scored);
    }

    #[test]
    fn test_scores_accumulate_across_touches() {
        let mut world = World::new();
        let arena = Arena::default();
        let mut score = Score::new();
        let mut events = Events::new();

        let entity = create_ball(&mut world, ball_at(0.0));
        check_scoring(&mut world, &arena, &mut score, &mut events);

        // Move the ball to the other side and touch again.
        world.get::<&mut Ball>(entity).unwrap().center.x = arena.width;
        events.clear();
        check_scoring(&mut world, &arena, &mut score, &mut events);

        assert_eq!(score.player_one, 1);
        assert_eq!(score.player_two, 1);
    }
}
