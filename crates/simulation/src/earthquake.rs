//! Seismic events.
//!
//! Unlike asteroids, an earthquake has no tracked entity: the trigger roll,
//! epicenter search, and destruction all complete synchronously within one
//! tick. Destroyed tiles settle to a neighboring floor rather than being
//! foreign-resurfaced: debris, not terraforming.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::SimClock;
use crate::config::CELL_SIZE;
use crate::effects::{
    CameraShakeEvent, DisasterSoundEvent, ImpactEffectEvent, ImpactStyle, SoundClip,
};
use crate::grid::WorldGrid;
use crate::observer::Observer;
use crate::scheduler::{should_trigger, DisasterSettings};
use crate::sim_rng::SimRng;
use crate::target_locator::find_target;
use crate::terraform::in_disc;
use crate::DisasterStats;

// =============================================================================
// Constants
// =============================================================================

/// How far from the observer the epicenter may land, in tiles.
const EPICENTER_SEARCH_RANGE: i32 = 80;

/// Destruction quota bounds.
const BLOCKS_MIN: u32 = 5;
const BLOCKS_MAX: u32 = 25;

/// Quotas at or above this use the large radius range.
const LARGE_QUAKE_THRESHOLD: u32 = 15;

/// Quotas at or above this use the strong shake range.
const STRONG_EFFECTS_THRESHOLD: u32 = 12;

const RUMBLE_VOLUME: f32 = 1.0;

// =============================================================================
// Seismic pass
// =============================================================================

/// Everything one seismic event did, for the trigger system and tests.
#[derive(Debug, Default)]
pub struct QuakeReport {
    pub epicenter: Option<(usize, usize)>,
    pub blocks_target: u32,
    pub max_radius: i32,
    pub tiles_destroyed: u32,
    pub despawned: Vec<Entity>,
    /// (intensity, duration secs) for the camera-shake delegate.
    pub shake: (f32, f32),
}

/// Run one full seismic event against the grid. A failed epicenter search
/// leaves the report empty (no-op event).
pub fn run_earthquake(grid: &mut WorldGrid, rng: &mut SimRng, observer_pos: Vec2) -> QuakeReport {
    let mut report = QuakeReport::default();

    let blocks_to_destroy = rng.0.gen_range(BLOCKS_MIN..=BLOCKS_MAX);
    let max_radius = if blocks_to_destroy >= LARGE_QUAKE_THRESHOLD {
        rng.0.gen_range(14..=20)
    } else {
        rng.0.gen_range(6..=12)
    };
    report.blocks_target = blocks_to_destroy;
    report.max_radius = max_radius;

    let center = WorldGrid::world_to_grid(observer_pos.x, observer_pos.y);
    let Some(epicenter) = find_target(grid, rng, center, max_radius, EPICENTER_SEARCH_RANGE)
    else {
        warn!("no valid epicenter found, seismic event skipped");
        return report;
    };
    report.epicenter = Some(epicenter);

    report.shake = if blocks_to_destroy >= STRONG_EFFECTS_THRESHOLD {
        (rng.0.gen_range(10.0..=20.0), rng.0.gen_range(1.7..=2.3))
    } else {
        (rng.0.gen_range(7.5..=10.0), rng.0.gen_range(0.8..=1.5))
    };

    let mut candidates = survey_breakable(
        grid,
        (epicenter.0 as i32, epicenter.1 as i32),
        max_radius,
    );
    candidates.shuffle(&mut rng.0);

    let limit = (blocks_to_destroy as usize).min(candidates.len());
    report.tiles_destroyed =
        destroy_candidates(grid, &candidates[..limit], &mut report.despawned);

    report
}

/// Collect every breakable tile within the disc, deduplicating multi-tile
/// structures by anchor so each contributes a single candidate that stands
/// for its whole footprint.
pub fn survey_breakable(grid: &WorldGrid, epicenter: (i32, i32), radius: i32) -> Vec<(usize, usize)> {
    let mut candidates = Vec::new();
    let mut seen_anchors: HashSet<(usize, usize)> = HashSet::new();

    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if !in_disc(dx, dy, radius) {
                continue;
            }
            let (x, y) = (epicenter.0 + dx, epicenter.1 + dy);
            let Some(&tile) = grid.tile(x, y) else {
                continue;
            };
            if !tile.is_breakable() {
                continue;
            }
            // is_breakable implies a structure slot.
            let Some(slot) = tile.structure else {
                continue;
            };
            if slot.kind.footprint() > 1 {
                if seen_anchors.insert(slot.anchor) {
                    candidates.push(slot.anchor);
                }
            } else {
                candidates.push((x as usize, y as usize));
            }
        }
    }

    candidates
}

/// Destroy the given candidates, expanding each multi-tile structure to all
/// of its linked tiles. Returns the number of tiles destroyed; despawned
/// structure entities are appended for the caller.
pub fn destroy_candidates(
    grid: &mut WorldGrid,
    candidates: &[(usize, usize)],
    despawned: &mut Vec<Entity>,
) -> u32 {
    let mut destroyed = 0;
    for &(cx, cy) in candidates {
        let Some(slot) = grid.get(cx, cy).structure else {
            continue;
        };
        let linked = grid.linked_tiles(slot);
        for &(lx, ly) in &linked {
            settle_floor(grid, lx, ly);
        }
        grid.clear_structure(slot);
        despawned.push(slot.entity);
        destroyed += linked.len() as u32;
    }
    destroyed
}

/// Replace the tile's floor with the first axis-neighbor floor that is
/// surface-capable. With no such neighbor the tile keeps its own floor;
/// debris settles, it doesn't vanish.
fn settle_floor(grid: &mut WorldGrid, x: usize, y: usize) {
    let (neighbors, count) = grid.neighbors4(x, y);
    for &(nx, ny) in &neighbors[..count] {
        let floor = grid.get(nx, ny).floor;
        if floor.has_surface() {
            grid.set_floor(x, y, floor);
            return;
        }
    }
}

// =============================================================================
// System + plugin
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn trigger_earthquake(
    clock: Res<SimClock>,
    settings: Res<DisasterSettings>,
    mut rng: ResMut<SimRng>,
    mut grid: ResMut<WorldGrid>,
    observer: Res<Observer>,
    mut commands: Commands,
    mut stats: ResMut<DisasterStats>,
    mut shake_events: EventWriter<CameraShakeEvent>,
    mut sound_events: EventWriter<DisasterSoundEvent>,
    mut impact_events: EventWriter<ImpactEffectEvent>,
) {
    if !should_trigger(&mut rng, &clock, &settings) {
        return;
    }
    info!("*** seismic event triggered ***");

    let report = run_earthquake(&mut grid, &mut rng, observer.position);
    let Some((ex, ey)) = report.epicenter else {
        return;
    };

    let (wx, wy) = WorldGrid::grid_to_world(ex, ey);
    let position = Vec2::new(wx, wy);
    shake_events.send(CameraShakeEvent {
        intensity: report.shake.0,
        duration: report.shake.1,
    });
    sound_events.send(DisasterSoundEvent {
        clip: SoundClip::SeismicRumble,
        position,
        volume: RUMBLE_VOLUME,
    });
    impact_events.send(ImpactEffectEvent {
        position,
        radius: report.max_radius as f32 * CELL_SIZE,
        style: ImpactStyle::QuakeRings,
    });

    for entity in report.despawned {
        commands.entity(entity).despawn();
    }
    stats.quakes_run += 1;
    stats.quake_tiles_destroyed += report.tiles_destroyed;

    info!(
        "seismic event at ({}, {}): target {} blocks, radius {}, destroyed {} tiles",
        ex, ey, report.blocks_target, report.max_radius, report.tiles_destroyed
    );
}

pub struct EarthquakePlugin;

impl Plugin for EarthquakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            trigger_earthquake.in_set(crate::SimulationSet::Simulation),
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
