use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SIM_DT;

/// Fixed-step simulation clock. Disaster systems only advance while the
/// clock reports running: a session must be active and not paused.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    /// A session is in progress (as opposed to e.g. a menu).
    pub active: bool,
    pub paused: bool,
    /// Simulated seconds elapsed while running.
    pub elapsed_secs: f64,
    pub ticks: u64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            active: true,
            paused: false,
            elapsed_secs: 0.0,
            ticks: 0,
        }
    }
}

impl SimClock {
    pub fn is_running(&self) -> bool {
        self.active && !self.paused
    }

    /// Simulated seconds per tick. Fixed-step, see [`SIM_DT`].
    pub fn delta_secs(&self) -> f32 {
        SIM_DT
    }

    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.ticks += 1;
        self.elapsed_secs += SIM_DT as f64;
    }
}
