//! Run command — headless simulation loop with periodic stats

use crate::clock::FrameClock;
use anyhow::{Context, Result};
use ember_sim::{Engine, SimulationConfig, TickStats};
use std::fs;

pub struct RunArgs {
    pub config: Option<String>,
    pub duration: f32,
    pub fixed_dt: Option<f32>,
    pub seed: Option<u32>,
    pub report_every: f32,
}

pub fn run(args: RunArgs) -> Result<()> {
    if let Some(dt) = args.fixed_dt {
        if dt <= 0.0 {
            anyhow::bail!("--fixed-dt must be positive, got {}", dt);
        }
    }

    let config = match &args.config {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
            SimulationConfig::from_toml_str(&text)
                .with_context(|| format!("Failed to parse {}", path))?
        }
        None => SimulationConfig::default(),
    };

    let mut engine = match args.seed {
        Some(seed) => Engine::with_seed(config, seed),
        None => Engine::new(config),
    };

    println!(
        "[sim] rate={} particles/s  lifetime={}±{}s  gravity={}  ground={}",
        engine.config().creation_rate,
        engine.config().lifetime,
        engine.config().lifetime_var,
        engine.config().gravity,
        engine.config().ground,
    );

    let duration = args.duration.max(0.0) as f64;
    let report_every = args.report_every.max(0.01) as f64;

    let mut sim_time = 0.0f64;
    let mut next_report = report_every;
    let mut window = Totals::default();
    let mut totals = Totals::default();
    let mut peak_live = 0usize;

    let mut clock = FrameClock::new();
    let mut last_stats = TickStats::default();

    while sim_time < duration {
        let dt = match args.fixed_dt {
            Some(dt) => dt as f64,
            None => {
                // Pace the headless loop at roughly 250Hz
                std::thread::sleep(std::time::Duration::from_millis(4));
                clock.tick();
                clock.delta_time
            }
        };
        if dt == 0.0 {
            // First wall-clock frame has no elapsed time yet
            continue;
        }

        last_stats = engine.tick(dt as f32);
        sim_time += dt;
        window.add(last_stats);
        totals.add(last_stats);
        peak_live = peak_live.max(last_stats.live);

        if sim_time >= next_report {
            println!(
                "[sim] t={:.2}s live={} spawned={} killed={}",
                sim_time, last_stats.live, window.spawned, window.killed
            );
            window = Totals::default();
            next_report += report_every;
        }
    }

    println!(
        "[sim] done: {:.2}s simulated, {} spawned, {} killed, {} live (peak {})",
        sim_time, totals.spawned, totals.killed, last_stats.live, peak_live
    );
    Ok(())
}

#[derive(Default)]
struct Totals {
    spawned: u64,
    killed: u64,
}

impl Totals {
    fn add(&mut self, stats: TickStats) {
        self.spawned += stats.spawned as u64;
        self.killed += stats.killed as u64;
    }
}
