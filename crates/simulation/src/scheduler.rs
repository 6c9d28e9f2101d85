use bevy::prelude::*;

use crate::clock::SimClock;
use crate::sim_rng::SimRng;

/// Mean interval between occurrences of each disaster type, in simulated
/// seconds of continuous play (~6 hours). Each type rolls independently.
pub const MEAN_EVENT_INTERVAL_SECS: f64 = 6.0 * 3600.0;

/// Per-second trigger rate derived from the mean interval.
pub const MEAN_EVENT_RATE: f64 = 1.0 / MEAN_EVENT_INTERVAL_SECS;

/// Session toggle for the whole disaster engine.
#[derive(Resource, Debug, Clone)]
pub struct DisasterSettings {
    pub enabled: bool,
}

impl Default for DisasterSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Per-tick trigger decision for one disaster type. Returns `true` at the
/// mean rate scaled by the tick's elapsed time, and never while the
/// simulation is inactive, paused, or disasters are disabled.
pub fn should_trigger(rng: &mut SimRng, clock: &SimClock, settings: &DisasterSettings) -> bool {
    if !settings.enabled || !clock.is_running() {
        return false;
    }
    rng.chance_delta(MEAN_EVENT_RATE, clock.delta_secs())
}
