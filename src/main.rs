//! Gap Runner headless host
//!
//! Drives the simulation at a fixed cadence with the demo autopilot and logs
//! what happens. Usage:
//!
//! ```text
//! gap-runner [seed] [compact|standard|auto] [params.json]
//! ```

use std::error::Error;
use std::fs;

use gap_runner::consts::TICK_RATE_HZ;
use gap_runner::sim::{GameEvent, PcgSource, Simulation, autopilot_signal};
use gap_runner::{Field, GameParams, LayoutClass};

/// Give up after this much simulated time
const MAX_SECONDS: u32 = 120;

/// Default viewport (16:9 desktop)
const VIEWPORT_WIDTH: f32 = 960.0;
const VIEWPORT_HEIGHT: f32 = 540.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => PcgSource::from_entropy().seed(),
    };

    let field = Field::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)?;
    let layout = match args.next() {
        Some(name) if name != "auto" => LayoutClass::from_str(&name)
            .ok_or_else(|| format!("unknown layout '{}'", name))?,
        _ => LayoutClass::from_viewport_width(field.width),
    };
    let mut sim = Simulation::new(field, layout, seed);

    if let Some(path) = args.next() {
        let json = fs::read_to_string(&path)?;
        sim.set_params(GameParams::from_json_with_base(&json, layout)?)?;
        log::info!("Loaded parameter overrides from {}", path);
    }

    log::info!(
        "Gap Runner (headless) starting, seed {}, {} layout",
        seed,
        layout.as_str()
    );

    for _ in 0..MAX_SECONDS * TICK_RATE_HZ {
        if let Some(signal) = autopilot_signal(&sim.snapshot()) {
            sim.push_signal(signal);
        }

        for event in sim.tick() {
            match event {
                GameEvent::Collected { kind } => log::info!("Collected {:?}", kind),
                GameEvent::Scored { total, .. } => log::info!("Score: {}", total),
                GameEvent::Collision => log::warn!("Crashed"),
                GameEvent::Won { score } => log::info!("WINNER with {} points", score),
                GameEvent::Started | GameEvent::Flap | GameEvent::Reset => {}
            }
        }

        if sim.game().status.is_terminal() {
            break;
        }
    }

    let snapshot = sim.snapshot();
    log::info!(
        "Finished: {:?} with score {}/{} after {} frames",
        snapshot.status,
        snapshot.score,
        snapshot.win_score,
        snapshot.frame
    );
    println!("{}", snapshot.to_json()?);
    Ok(())
}
