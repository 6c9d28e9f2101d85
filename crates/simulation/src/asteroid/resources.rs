use bevy::prelude::*;

use super::constants::{
    IMPACT_DISTANCE_THRESHOLD, IMPACT_PROGRESS_THRESHOLD, WARNING_DURATION_SECS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidPhase {
    /// Only the ground marker is visible; position stays pinned at `start`.
    Warning,
    Flying,
    /// Terminal. The event is compacted out on the next update pass.
    Impacted,
}

/// One tracked ballistic event, created at spawn and mutated every tick.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub phase: AsteroidPhase,
    pub start: Vec2,
    pub target: Vec2,
    pub position: Vec2,
    /// Entry heading in degrees, one of the fixed diagonal set.
    pub angle: f32,
    /// Impact radius in tiles.
    pub impact_radius: i32,
    /// Visual scale derived from the impact radius.
    pub scale: f32,
    /// Travel progress in [0, 1], non-decreasing.
    pub progress: f32,
    pub warning_elapsed: f32,
    pub total_distance: f32,
    /// World units per second.
    pub speed: f32,
}

impl Asteroid {
    /// Advance the state machine by one tick. Returns `true` when the
    /// impact condition is reached; the caller runs the impact handler and
    /// marks the event [`AsteroidPhase::Impacted`].
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.phase {
            AsteroidPhase::Warning => {
                self.warning_elapsed += dt;
                if self.warning_elapsed >= WARNING_DURATION_SECS {
                    self.phase = AsteroidPhase::Flying;
                }
                false
            }
            AsteroidPhase::Flying => {
                self.progress =
                    (self.progress + self.speed * dt / self.total_distance).clamp(0.0, 1.0);
                self.position = self.start.lerp(self.target, self.progress);
                self.progress >= IMPACT_PROGRESS_THRESHOLD
                    || self.position.distance(self.target) < IMPACT_DISTANCE_THRESHOLD
            }
            AsteroidPhase::Impacted => false,
        }
    }
}

/// All in-flight asteroid events. Unordered, unbounded; events never
/// interact with each other.
#[derive(Resource, Default)]
pub struct ActiveAsteroids(pub Vec<Asteroid>);
