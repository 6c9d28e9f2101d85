//! Integration tests driving the full plugin stack through `TestWorld`.

mod asteroid_lifecycle;
mod determinism;
mod engine_state;

use bevy::prelude::*;

use crate::asteroid::{ActiveAsteroids, Asteroid, AsteroidPhase};
use crate::grid::WorldGrid;
use crate::test_harness::TestWorld;

/// Push a mid-flight asteroid straight into the tracked collection,
/// skipping the probabilistic trigger and the warning phase.
pub(crate) fn inject_flying_asteroid(
    world: &mut TestWorld,
    target_tile: (usize, usize),
    radius: i32,
) {
    let (wx, wy) = WorldGrid::grid_to_world(target_tile.0, target_tile.1);
    let target = Vec2::new(wx, wy);
    // 200 world units out along the 45-degree diagonal.
    let start = target + Vec2::splat(200.0 * std::f32::consts::FRAC_1_SQRT_2);
    world
        .world_mut()
        .resource_mut::<ActiveAsteroids>()
        .0
        .push(Asteroid {
            phase: AsteroidPhase::Flying,
            start,
            target,
            position: start,
            angle: 225.0,
            impact_radius: radius,
            scale: 1.0,
            progress: 0.0,
            warning_elapsed: 10.0,
            total_distance: start.distance(target),
            speed: 240.0,
        });
}
