mod canvas;
mod script;
mod simulation;

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use pong_core::Params;

use canvas::TermCanvas;
use script::InputScript;
use simulation::LocalGame;

const FRAME_MS: u64 = 16;
const RENDER_EVERY: u32 = 4;
// Bail out if the scripted players somehow never settle the match.
const MAX_FRAMES: u32 = 60_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12345);

    let mut game = LocalGame::new(seed);
    let mut script = InputScript::demo();
    let mut canvas = TermCanvas::new(80, 24, Params::ARENA_WIDTH, Params::ARENA_HEIGHT);
    let mut stdout = std::io::stdout();

    log::info!(
        "starting match, seed {}, first to {}",
        seed,
        game.config.win_score
    );

    let mut last = Instant::now();
    let mut frame: u32 = 0;
    loop {
        let now = Instant::now();
        let dt_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        script.feed(frame, &mut game.inputs);
        game.step(dt_ms);

        if game.events.player_one_scored || game.events.player_two_scored {
            log::info!(
                "score {}-{}",
                game.score.player_one,
                game.score.player_two
            );
        }

        if let Some(winner) = game.score.has_winner(game.config.win_score) {
            log::info!(
                "{} wins {}-{}",
                winner,
                game.score.player_one,
                game.score.player_two
            );
            break;
        }

        if frame % RENDER_EVERY == 0 {
            canvas.begin_frame();
            pong_core::draw_frame(&game.world, &mut canvas);
            let _ = stdout.write_all(canvas.present(&game.score).as_bytes());
            let _ = stdout.flush();
        }

        frame += 1;
        if frame >= MAX_FRAMES {
            log::warn!(
                "stopping after {} frames without a winner, score {}-{}",
                frame,
                game.score.player_one,
                game.score.player_two
            );
            break;
        }

        thread::sleep(Duration::from_millis(FRAME_MS));
    }
}
