//! arena — headless run of the patrol agent in the reference arena.
//!
//! Drives the controller for a fixed number of frames, scripts random
//! intruder sightings, and writes `agent_trail.csv` and `events.csv`.
//! An optional JSON file overrides the tuning values and the layout:
//!
//! ```json
//! { "config": { "speed": 3.0 }, "environment": { "waypoints": [...], ... } }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use serde::Deserialize;

use pb_agent::Behavior;
use pb_core::{BatteryClock, PatrolConfig, SimRng, SteppedClock, Tick, WallClock};
use pb_mobility::MotionEvent;
use pb_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pb_sim::{AgentSnapshot, Command, SimBuilder, SimObserver};
use pb_world::EnvironmentLayout;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(version, about = "Headless patrol agent run with CSV output", long_about = None)]
struct Cli {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 6_000)]
    ticks: u64,

    /// Frame delta in milliseconds.
    #[arg(long, default_value_t = 16)]
    dt_ms: u64,

    /// Seed for the intruder script.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frames between intruder sighting rolls.
    #[arg(long, default_value_t = 600)]
    sighting_every: u64,

    /// Probability that a roll produces a sighting.
    #[arg(long, default_value_t = 0.5)]
    sighting_chance: f64,

    /// JSON file with `config` and/or `environment` overrides.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory for the CSV files.
    #[arg(long, value_name = "DIR", default_value = "output/arena")]
    out: PathBuf,

    /// Write every Nth trail row.
    #[arg(long, default_value_t = 1)]
    trail_every: u64,

    /// Pace frames in real time and drain the battery off the wall clock.
    #[arg(long)]
    realtime: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunFile {
    config:      PatrolConfig,
    environment: EnvironmentLayout,
}

fn load_run_file(path: Option<&Path>) -> Result<RunFile> {
    let Some(path) = path else {
        return Ok(RunFile::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to tally behaviors ───────────────────────────────────────

struct TallyObserver<W: OutputWriter> {
    inner:      SimOutputObserver<W>,
    per_state:  [u64; 5],
    captures:   u32,
    charges:    u32,
    last:       Option<AgentSnapshot>,
}

impl<W: OutputWriter> TallyObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, per_state: [0; 5], captures: 0, charges: 0, last: None }
    }
}

impl<W: OutputWriter> SimObserver for TallyObserver<W> {
    fn on_command(&mut self, tick: Tick, command: &Command) {
        self.inner.on_command(tick, command);
    }

    fn on_behavior_change(&mut self, tick: Tick, from: Behavior, to: Behavior) {
        self.inner.on_behavior_change(tick, from, to);
    }

    fn on_motion_event(&mut self, tick: Tick, event: &MotionEvent) {
        match event {
            MotionEvent::IntruderCaptured { .. } => self.captures += 1,
            MotionEvent::ChargeCompleted         => self.charges += 1,
            _ => {}
        }
        self.inner.on_motion_event(tick, event);
    }

    fn on_tick_end(&mut self, snapshot: &AgentSnapshot) {
        if let Some(i) = Behavior::ALL.iter().position(|&b| b == snapshot.behavior) {
            self.per_state[i] += 1;
        }
        self.inner.on_tick_end(snapshot);
        self.last = Some(snapshot.clone());
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let run = load_run_file(cli.config.as_deref())?;
    let env = run.environment.build().context("building environment")?;
    let (min, max) = env.bounds();
    log::info!(
        "arena {min}..{max}: {} waypoints, {} obstacles, charger at {}",
        env.waypoint_count(),
        env.obstacles().len(),
        env.charging_station(),
    );

    let clock: Box<dyn BatteryClock> = if cli.realtime {
        Box::new(WallClock::new())
    } else {
        Box::new(SteppedClock::new())
    };
    let mut sim = SimBuilder::new(env)
        .config(run.config)
        .clock(clock)
        .build()?;

    let writer = CsvWriter::new(&cli.out)
        .with_context(|| format!("opening output in {}", cli.out.display()))?;
    let mut obs = TallyObserver::new(SimOutputObserver::new(writer, cli.trail_every));

    let dt = Duration::from_millis(cli.dt_ms);
    let mut rolls = SimRng::new(cli.seed);
    let mut places = rolls.child(1);
    let t0 = Instant::now();

    for frame in 0..cli.ticks {
        if cli.sighting_every > 0
            && frame > 0
            && frame % cli.sighting_every == 0
            && rolls.gen_bool(cli.sighting_chance)
        {
            sim.queue(Command::SetIntruder(places.point_in(min, max)));
        }
        sim.update_observed(dt, &mut obs);
        if cli.realtime {
            std::thread::sleep(dt);
        }
    }
    obs.on_sim_end(sim.tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // ── Summary ───────────────────────────────────────────────────────────
    let (trail_rows, event_rows) = obs.inner.rows_written();
    println!("Run complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), sim.tick.0);
    println!("  agent_trail.csv : {trail_rows} rows");
    println!("  events.csv      : {event_rows} rows");
    println!("  intruders captured: {}  charges completed: {}", obs.captures, obs.charges);
    println!();

    println!("{:<16} {:>8}", "Behavior", "Ticks");
    println!("{}", "-".repeat(25));
    for (behavior, n) in Behavior::ALL.iter().zip(obs.per_state) {
        println!("{:<16} {:>8}", behavior.as_str(), n);
    }

    if let Some(last) = &obs.last {
        println!();
        println!(
            "Final: {} at {} battery {:.1}% cycles {}",
            last.behavior, last.position, last.battery_level, last.patrol_cycle_count,
        );
    }
    Ok(())
}
