//! Driftway - Headless Demo
//!
//! Drives the arena simulation through a scripted input sequence at 60 Hz
//! and logs vehicle telemetry once per simulated second. Rendering and input
//! polling live elsewhere; this binary exists to exercise the full scene
//! lifecycle end to end.

use driftway_game::{BodyTag, ContactSink, DriveInput, Simulation};
use log::info;

/// Logs contact pairs at info level so impacts show up in the telemetry.
struct LoggingSink;

impl ContactSink for LoggingSink {
    fn contact(&mut self, a: BodyTag, b: BodyTag, started: bool) {
        if started {
            info!("impact: {:?} <-> {:?}", a, b);
        }
    }
}

/// Scripted input for a given frame: accelerate away from spawn, carve a
/// long left turn, then coast to a stop.
fn scripted_input(frame: u32) -> DriveInput {
    match frame {
        0..=179 => DriveInput {
            forward: true,
            ..Default::default()
        },
        180..=419 => DriveInput {
            forward: true,
            left: true,
            ..Default::default()
        },
        _ => DriveInput::default(),
    }
}

fn main() {
    env_logger::init();

    let mut simulation = Simulation::with_default_config();
    simulation.initialize();

    let mut sink = LoggingSink;
    let delta_time = 1.0 / 60.0;
    let total_frames = 600;

    info!("driving {} frames", total_frames);

    for frame in 0..total_frames {
        let input = scripted_input(frame);
        let out = simulation.update(delta_time, &input, &mut sink);

        if frame % 60 == 59 {
            info!(
                "t={:>2}s pos=({:>7.2}, {:>5.2}, {:>7.2}) speed={:>5.2}",
                (frame + 1) / 60,
                out.position.x,
                out.position.y,
                out.position.z,
                out.display_speed,
            );
        }
    }

    let out = simulation.update(delta_time, &DriveInput::default(), &mut sink);
    info!(
        "final: pos=({:.2}, {:.2}, {:.2}) speed={:.2} ({} walls, {} ramps)",
        out.position.x,
        out.position.y,
        out.position.z,
        out.display_speed,
        out.walls.len(),
        out.ramps.len(),
    );
}
