use hecs::World;

use pong_core::{
    create_ball, create_paddle, step, Arena, Ball, Color, Config, Events, GameRng, InputQueue,
    PlayerId, Score, Time,
};

/// A complete local match: the world, its entities, and the loop-owned
/// resources.
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub arena: Arena,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
}

impl LocalGame {
    pub fn new(seed: u64) -> Self {
        let arena = Arena::default();
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        for id in [PlayerId::One, PlayerId::Two] {
            create_paddle(
                &mut world,
                id,
                arena.paddle_spawn(id, &config),
                config.paddle_size(),
            );
        }

        let ball = Ball::new(
            arena.ball_spawn(),
            config.ball_size(),
            Color::YELLOW,
            config.ball_speed,
            &mut rng,
        );
        create_ball(&mut world, ball);

        Self {
            world,
            time: Time::new(16.0, 0.0),
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
        }
    }

    pub fn step(&mut self, dt_ms: f64) {
        self.time.dt_ms = dt_ms;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
        );
    }
}
