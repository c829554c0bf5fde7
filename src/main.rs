//! Strip Runner headless demo driver
//!
//! Exercises the simulation without a renderer: loads the host config, seeds a
//! world, and runs a scripted session at the logical tick rate, logging
//! progress. A real host would swap the script for key events and draw the
//! exposed rects each frame.

use std::time::{SystemTime, UNIX_EPOCH};

use strip_runner::GameConfig;
use strip_runner::consts::TICK_HZ;
use strip_runner::sim::{TickInput, WorldState, tick};

fn load_config() -> GameConfig {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".into());
    match std::fs::read_to_string(&path) {
        Ok(json) => match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("bad config in {path}: {err}; using defaults");
                GameConfig::default()
            }
        },
        Err(_) => {
            log::info!("no config at {path}; using defaults");
            GameConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Strip Runner demo starting (seed {seed})");
    let mut world = WorldState::new(config, seed);

    // Scripted session: hold right, jump whenever grounded.
    let ticks = TICK_HZ as u64 * 30;
    for _ in 0..ticks {
        let input = TickInput {
            move_right: true,
            jump: world.player.on_ground,
            ..Default::default()
        };
        tick(&mut world, &input);

        if world.time_ticks % (TICK_HZ as u64 * 5) == 0 {
            let rect = world.player.rect();
            log::info!(
                "t={} player at ({}, {}) grounded={} platforms={}",
                world.time_ticks,
                rect.x,
                rect.y,
                world.player.on_ground,
                world.platforms.len(),
            );
        }
    }

    let rect = world.player.rect();
    println!(
        "ran {} ticks; player rect ({}, {}, {}, {}), {} live platforms",
        world.time_ticks,
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        world.platforms.len(),
    );
}
