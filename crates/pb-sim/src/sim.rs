//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;
use std::time::Duration;

use pb_agent::{Agent, Behavior, FlagChange};
use pb_behavior::{Arbiter, ArbitrationContext, PriorityArbiter};
use pb_core::{BatteryClock, PatrolConfig, SteppedClock, Tick, Vec2};
use pb_mobility::{MotionEngine, MotionEvent};
use pb_world::Environment;

use crate::{AgentSnapshot, Command, NoopObserver, SimObserver};

/// The simulation context: one agent, its environment and configuration.
///
/// All mutable state lives here and is reached only through `&mut Sim`;
/// there is no ambient global state.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: Arbiter = PriorityArbiter, C: BatteryClock = SteppedClock> {
    /// Thresholds, rates and speeds.  Validated at build time.
    pub config: PatrolConfig,

    /// Read-only arena: waypoints, obstacles, charger.
    pub env: Environment,

    /// The controlled agent.
    pub agent: Agent,

    /// Behavior selection strategy.
    pub arbiter: A,

    /// Monotonic time source for battery drain.
    pub clock: C,

    /// Completed unpaused updates.
    pub tick: Tick,

    motion: MotionEngine,

    /// Commands waiting for the next update.
    pending: VecDeque<Command>,
}

impl<A: Arbiter, C: BatteryClock> Sim<A, C> {
    pub(crate) fn from_parts(config: PatrolConfig, env: Environment, arbiter: A, clock: C) -> Self {
        let agent = Agent::new(env.start(), config.speed, config.trail_capacity, clock.now());
        Self {
            config,
            env,
            agent,
            arbiter,
            clock,
            tick: Tick::ZERO,
            motion: MotionEngine,
            pending: VecDeque::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by one frame and return the resulting state.
    ///
    /// `dt` is the frame delta; it drives the battery clock only.
    pub fn update(&mut self, dt: Duration) -> AgentSnapshot {
        self.process_tick(dt, &mut NoopObserver);
        self.snapshot()
    }

    /// Like [`update`](Self::update) but reports to `observer`.
    pub fn update_observed<O: SimObserver>(&mut self, dt: Duration, observer: &mut O) -> AgentSnapshot {
        if self.process_tick(dt, observer) {
            let snapshot = self.snapshot();
            observer.on_tick_end(&snapshot);
            snapshot
        } else {
            self.snapshot()
        }
    }

    /// Call [`update_observed`](Self::update_observed) `n` times.
    ///
    /// Useful for tests and headless stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, dt: Duration, observer: &mut O) {
        for _ in 0..n {
            self.update_observed(dt, observer);
        }
    }

    /// Run `n` frames and then signal the end of the run to `observer`.
    pub fn run<O: SimObserver>(&mut self, n: u64, dt: Duration, observer: &mut O) {
        self.run_ticks(n, dt, observer);
        observer.on_sim_end(self.tick);
    }

    /// Read-only view of the agent for display.
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot::capture(self.tick, &self.agent)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Queue a command for the start of the next update.
    pub fn queue(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Apply a command immediately.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetIntruder(pos) => self.set_intruder(pos),
            Command::ClearIntruder    => {
                if let Some(pos) = self.agent.clear_intruder() {
                    log::info!("intruder sighting at {pos} withdrawn");
                }
            }
            Command::Pause            => self.pause(),
            Command::Resume           => self.resume(),
            Command::TogglePause      => self.toggle_pause(),
            Command::Reset            => self.reset(),
        }
    }

    /// Record an intruder sighting.
    ///
    /// Positions outside the arena are clamped onto its boundary; non-finite
    /// positions are rejected.
    pub fn set_intruder(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            log::warn!("ignoring non-finite intruder position {pos}");
            return;
        }
        let (min, max) = self.env.bounds();
        let clamped = Vec2::new(pos.x.clamp(min.x, max.x), pos.y.clamp(min.y, max.y));
        if clamped != pos {
            log::warn!("intruder position {pos} outside arena, clamped to {clamped}");
        }
        log::info!("intruder sighted at {clamped}");
        self.agent.set_intruder(clamped);
    }

    pub fn pause(&mut self) {
        if !self.agent.is_paused() {
            log::info!("simulation paused at {}", self.tick);
            self.agent.set_paused(true);
        }
    }

    pub fn resume(&mut self) {
        if self.agent.is_paused() {
            log::info!("simulation resumed at {}", self.tick);
            self.agent.set_paused(false);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.agent.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.agent.is_paused()
    }

    /// Restore the agent's initial state at the first waypoint.
    pub fn reset(&mut self) {
        self.agent.reset(self.env.start(), self.clock.now());
        log::info!("simulation reset");
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One frame.  Returns `false` if the agent was paused and nothing but
    /// command handling happened.
    fn process_tick<O: SimObserver>(&mut self, dt: Duration, observer: &mut O) -> bool {
        self.clock.advance(dt);

        // ── Phase 0: queued commands ──────────────────────────────────────
        while let Some(command) = self.pending.pop_front() {
            observer.on_command(self.tick, &command);
            self.apply(command);
        }

        if self.agent.is_paused() {
            return false;
        }

        let now = self.tick;
        let previous = self.agent.behavior();

        // ── Phase 1: battery drain + hysteresis ───────────────────────────
        self.agent.battery.drain(
            self.clock.now(),
            self.config.drain_interval(),
            self.config.drain_amount,
            previous.drains_battery(),
        );
        match self.agent.battery.update_flag(
            self.config.low_battery_threshold,
            self.config.recovered_threshold,
        ) {
            FlagChange::BecameLow => log::debug!(
                "{now}: battery low at {:.1}%", self.agent.battery.level()
            ),
            FlagChange::Recovered => log::debug!(
                "{now}: battery recovered at {:.1}%", self.agent.battery.level()
            ),
            FlagChange::Unchanged => {}
        }

        // ── Phase 2: charging ─────────────────────────────────────────────
        if previous == Behavior::GoCharge
            && self.agent.position.distance(self.env.charging_station()) <= self.config.arrival_radius
        {
            self.agent.battery.charge(self.config.charge_rate);
        }

        // ── Phase 3: arbitration ──────────────────────────────────────────
        let behavior = {
            let ctx = ArbitrationContext::new(&self.agent, &self.env, &self.config);
            self.arbiter.select(&ctx)
        };
        self.agent.set_behavior(behavior);
        if behavior != previous {
            log::debug!("{now}: {previous} -> {behavior}");
            observer.on_behavior_change(now, previous, behavior);
        }

        // ── Phase 4: motion ───────────────────────────────────────────────
        let events = self.motion.execute(behavior, previous, &mut self.agent, &self.env, &self.config);
        for event in &events {
            self.log_event(now, event);
            observer.on_motion_event(now, event);
        }

        // ── Phase 5: trail ────────────────────────────────────────────────
        self.agent.trail.push(self.agent.position);

        // ── Phase 6: avoidance latch countdown ────────────────────────────
        self.agent.avoidance.tick_down();

        self.tick = now.next();
        true
    }

    fn log_event(&self, now: Tick, event: &MotionEvent) {
        match *event {
            MotionEvent::PatrolCycleCompleted { count } => log::info!(
                "patrol cycle completed: count {count}, battery {:.1}%",
                self.agent.battery.level()
            ),
            MotionEvent::ChargeCompleted => log::info!(
                "charging completed at {:.1}%, resuming patrol", self.agent.battery.level()
            ),
            MotionEvent::IntruderCaptured { at } => log::info!("{now}: intruder at {at} captured"),
            MotionEvent::ChargeWithoutLowBattery => log::debug!(
                "{now}: GO_CHARGE without low battery, deferring to arbitration"
            ),
            MotionEvent::WaypointReached { reached, next } => log::debug!(
                "{now}: waypoint {reached} reached, next {next}"
            ),
            MotionEvent::AvoidanceLatched { .. } => {}
        }
    }
}
