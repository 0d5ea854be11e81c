use crate::components::PlayerId;

/// Time resource for tracking simulation time, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt_ms: f64,  // Delta for this tick
    pub now_ms: f64, // Total elapsed time
}

impl Time {
    pub fn new(dt_ms: f64, now_ms: f64) -> Self {
        Self { dt_ms, now_ms }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt_ms: 16.0,
            now_ms: 0.0,
        }
    }
}

/// Game score tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player_one: u8,
    pub player_two: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_one(&mut self) {
        self.player_one += 1;
    }

    pub fn increment_two(&mut self) {
        self.player_two += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<PlayerId> {
        if self.player_one >= win_score {
            Some(PlayerId::One)
        } else if self.player_two >= win_score {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}

/// Random number generator, seeded for reproducible serves.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_one_scored: bool,
    pub player_two_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_one_scored = false;
        self.player_two_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Pending paddle directions, fed by the shell and drained once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(PlayerId, i8)>, // (player, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player: PlayerId, dir: i8) {
        self.inputs.push((player, dir));
    }
}
