use pong_core::{InputQueue, PlayerId};

/// A canned input tape: (frame, player, direction) commands applied in
/// order, standing in for a real input device.
pub struct InputScript {
    tape: Vec<(u32, PlayerId, i8)>,
    next: usize,
}

impl InputScript {
    /// Both players sweep their court in opposite phases, crossing the ball's
    /// path often enough to trade saves and misses.
    pub fn demo() -> Self {
        let mut tape = Vec::new();
        for cycle in 0..200u32 {
            let base = cycle * 240;
            tape.push((base, PlayerId::One, 1));
            tape.push((base, PlayerId::Two, -1));
            tape.push((base + 120, PlayerId::One, -1));
            tape.push((base + 120, PlayerId::Two, 1));
        }
        Self { tape, next: 0 }
    }

    /// Queue every command scheduled at or before `frame`.
    pub fn feed(&mut self, frame: u32, queue: &mut InputQueue) {
        while let Some(&(at, player, dir)) = self.tape.get(self.next) {
            if at > frame {
                break;
            }
            queue.push_input(player, dir);
            self.next += 1;
        }
    }
}
