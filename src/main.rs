//! Headless demo entry point
//!
//! Stands in for the view/controller plumbing around the simulation: starts a
//! run, samples it at a renderer-like cadence, exercises pause, and shuts
//! down cleanly. Pass a JSON config path as the first argument to override
//! the defaults.

use std::process;
use std::thread;
use std::time::Duration;

use log::info;

use asteroid_field::{SimConfig, Simulation};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load config '{path}': {err}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("failed to start simulation: {err}");
            process::exit(1);
        }
    };

    // Play the renderer's role: read a consistent snapshot at ~30 Hz while
    // the tick thread runs at its own rate.
    for frame in 0u32..90 {
        let mut colliding = 0;
        sim.for_each_asteroid(|_, hit| {
            if hit {
                colliding += 1;
            }
        });
        if frame % 30 == 0 {
            info!(
                "frame {frame}: {colliding}/{} asteroids colliding",
                sim.asteroid_count()
            );
        }
        thread::sleep(Duration::from_millis(33));
    }

    sim.toggle_pause();
    info!("paused for 200ms; readers still see a frozen, consistent world");
    thread::sleep(Duration::from_millis(200));
    sim.toggle_pause();
    thread::sleep(Duration::from_millis(200));

    sim.stop();
    info!("simulation stopped");
}
