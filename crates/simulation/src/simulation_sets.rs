//! Simulation ordering via `SystemSet` phases.
//!
//! These sets establish a **contract** for system execution order within the
//! `FixedUpdate` and `Update` schedules. Plugins place their systems into the
//! appropriate set so that inter-plugin ordering is explicit and testable
//! rather than relying on implicit timing assumptions.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counters and the sim clock. These set up per-tick
//!   state the disaster systems read.
//! * **Simulation** – Disaster triggers, projectile advancement, impact
//!   handling, seismic destruction. Everything that mutates the world grid.
//! * **PostSim** – Aggregation that only *reads* simulation state, so
//!   downstream consumers can safely pick up its output next frame.
//!
//! # Update phases (`SimulationUpdateSet`)
//!
//! ```text
//! Input  →  Visual
//! ```
//!
//! * **Input** – Per-frame input handling (reserved for downstream crates).
//! * **Visual** – Read-only presentation of tracked events. Systems in this
//!   set MUST NOT mutate engine state; the grid and the active-event
//!   collection are written exclusively inside `FixedUpdate`.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// FixedUpdate phases
// ---------------------------------------------------------------------------

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pre-simulation setup: tick counters, sim clock.
    PreSim,
    /// Core simulation: disaster scheduling, projectile state machines,
    /// terrain mutation.
    Simulation,
    /// Post-simulation aggregation and reporting.
    PostSim,
}

// ---------------------------------------------------------------------------
// Update phases
// ---------------------------------------------------------------------------

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Visual`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    /// Per-frame input processing.
    Input,
    /// Visual-only updates (event markers, fallback primitives).
    Visual,
}
