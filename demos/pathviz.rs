//! Terminal pathfinding visualizer using crossterm.
//!
//! Run: cargo run --bin pathviz [-- path/to/pathviz.toml]

use std::path::PathBuf;
use std::time::Duration;

use gridtrace_core::{Msg, Point, Screen, compute_frame};
use gridtrace_crossterm::CrosstermDriver;
use gridtrace_demos::{Board, Config, Effect};

/// Poll timeout while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    if let Err(e) = run(path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(path.as_deref())?;
    let mut board = Board::new(&config)?;
    let mut driver = CrosstermDriver::new();
    driver.init()?;
    let result = event_loop(&mut board, &mut driver, &config);
    driver.close();
    result
}

fn event_loop(
    board: &mut Board,
    driver: &mut CrosstermDriver,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame_delay = Duration::from_millis(config.animation.frame_delay_ms);
    let (w, h) = board.screen_size();
    let mut prev = Screen::new(w, h);
    let mut curr = Screen::new(w, h);
    board.draw(&mut curr);
    driver.flush(&compute_frame(&prev, &curr))?;
    std::mem::swap(&mut prev, &mut curr);

    loop {
        let timeout = if board.is_animating() { frame_delay } else { IDLE_POLL };
        let mut dirty = false;
        let mut full = false;
        for msg in driver.poll_msgs(timeout)? {
            let resized = matches!(msg, Msg::Screen { .. });
            match board.update(msg)? {
                Some(Effect::End) => return Ok(()),
                Some(Effect::Redraw) => {
                    dirty = true;
                    full |= resized;
                }
                None => {}
            }
        }
        if board.is_animating() {
            dirty |= board.tick();
        }
        if !dirty {
            continue;
        }

        let (w, h) = board.screen_size();
        let size = Point::new(w, h);
        if full || prev.size() != size {
            driver.clear()?;
            prev = Screen::new(0, 0);
        }
        if curr.size() != size {
            curr.resize(w, h);
        }
        board.draw(&mut curr);
        driver.flush(&compute_frame(&prev, &curr))?;
        std::mem::swap(&mut prev, &mut curr);
    }
}
