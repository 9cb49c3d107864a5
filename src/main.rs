//! Fruit Slash headless demo
//!
//! Runs the simulation for a fixed stretch of game time with a scripted
//! pointer standing in for a player, logging events as they happen and
//! printing a JSON snapshot of the final state. Useful for smoke-testing
//! balance changes without a rendering host.
//!
//! Usage: `fruit-slash [seed] [tuning.json]`

use std::error::Error;

use glam::Vec2;

use fruit_slash::consts::SIM_DT;
use fruit_slash::sim::{GameEvent, GameState, TickInput, WorldBounds, tick};
use fruit_slash::tuning::Tuning;

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const RUN_SECONDS: f32 = 30.0;

/// Scripted player: every ~1.5 s, drag a slash across the middle of the
/// screen for a third of a second, then lift the pointer.
fn scripted_pointer(tick_no: u32) -> TickInput {
    let period = 90; // 1.5 s at 60 Hz
    let phase = tick_no % period;
    if phase >= 20 {
        return TickInput::inactive();
    }
    let t = phase as f32 / 20.0;
    // Diagonal sweep through the launch corridor
    let x = 150.0 + t * 500.0;
    let y = 450.0 - t * 300.0;
    TickInput::new(Vec2::new(x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 0xF0_0D,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::from_json_file(&path)?,
        None => Tuning::default(),
    };

    log::info!("fruit-slash demo: seed={seed}, {RUN_SECONDS}s of game time");

    let world = WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT);
    let mut state = GameState::with_tuning(seed, world, tuning);

    let ticks = (RUN_SECONDS / SIM_DT) as u32;
    for i in 0..ticks {
        tick(&mut state, &scripted_pointer(i), SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Launched { kind } => log::debug!("launched: {}", kind.as_str()),
                GameEvent::Sliced { kind, pos } => {
                    log::info!("sliced {} at ({:.0}, {:.0})", kind.as_str(), pos.x, pos.y)
                }
                GameEvent::Missed { kind } => log::debug!("missed: {}", kind.as_str()),
            }
        }
    }

    log::info!(
        "done: score={} won={} fruits_in_flight={}",
        state.score,
        state.has_won(),
        state.pool.alive_count()
    );

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
