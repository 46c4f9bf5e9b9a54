//! `pb-mobility` — how the agent moves under each behavior.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`motion`]   | `patrol`, `avoid_obstacle`, `chase_intruder`, `go_charge`, `idle` |
//! | [`engine`]   | `MotionEngine::execute` — dispatch on `Behavior`                 |
//! | [`event`]    | `MotionEvent` — notable state changes made during motion        |
//!
//! # Movement model (per-tick fixed step)
//!
//! Every motion function displaces the agent by a fixed distance per call:
//! `speed` for patrol, pursuit and charging, `speed × avoid_speed_factor`
//! plus a radial repulsion term for avoidance.  The frame delta is not used
//! here; battery decay is the only wall-clock-driven quantity.
//!
//! Motion functions never write `Agent::behavior`.  They report what
//! happened through [`MotionEvent`]s and leave the next decision to
//! arbitration.

pub mod engine;
pub mod event;
pub mod motion;


pub use engine::MotionEngine;
pub use event::MotionEvent;
