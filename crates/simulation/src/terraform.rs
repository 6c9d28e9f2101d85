//! Radius-based terrain mutation: block destruction, crater generation and
//! ore scatter.
//!
//! All scans share one disc predicate and mutate tiles exclusively through
//! [`WorldGrid`]. Multi-tile structures are handled as single units: the
//! first covered tile a scan reaches processes the whole footprint, and a
//! visited-anchor set prevents double-processing within one pass.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::Rng;

use crate::foreign_worlds::{ore_palette, ForeignFloorGenerator, ForeignWorlds, WorldId};
use crate::grid::{FloorType, WorldGrid};
use crate::sim_rng::SimRng;

/// Fraction of the crater radius covered by the inner (mostly burned) zone.
pub const INNER_ZONE_FRACTION: f32 = 0.8;

/// Chance of burned floor (vs foreign synthesis) in the inner zone.
pub const BURNED_FLOOR_CHANCE: f32 = 0.8;

/// Chance a pre-existing ore deposit survives foreign resurfacing.
pub const OVERLAY_KEEP_CHANCE: f32 = 0.15;

/// Chance that a crater scatters ore deposits at all.
pub const ORE_SPAWN_CHANCE: f32 = 0.25;

/// Chance the scatter quota is the small cluster (1-3) rather than 4-7.
pub const ORE_SMALL_CLUSTER_CHANCE: f32 = 0.75;

/// Placement attempts budgeted per requested ore. Exhausting the budget
/// means the crater simply gets fewer deposits than rolled.
pub const SCATTER_ATTEMPTS_PER_ORE: u32 = 30;

/// Disc membership: integer offsets within Euclidean distance `radius`.
#[inline]
pub fn in_disc(dx: i32, dy: i32, radius: i32) -> bool {
    dx * dx + dy * dy <= radius * radius
}

/// Project a grid coordinate onto the unit sphere used by the foreign
/// floor generators.
pub fn unit_sphere_coord(x: usize, y: usize, width: usize, height: usize) -> Vec3 {
    let fx = x as f32 / width as f32;
    let fy = y as f32 / height as f32;
    Vec3::new(fx * 2.0 - 1.0, 0.0, fy * 2.0 - 1.0).normalize_or_zero()
}

/// Result of a destruction pass. The caller owns despawning the listed
/// structure entities; the grid has already been updated.
#[derive(Debug, Default)]
pub struct DestructionOutcome {
    pub tiles_destroyed: u32,
    pub despawned: Vec<Entity>,
}

/// Destroy and foreign-resurface every unprotected tile within `radius` of
/// `center`. One foreign generator is drawn for the whole pass. Multi-tile
/// structures are expanded through their linked tiles exactly once, via the
/// visited-anchor set; protected structures are skipped whole.
pub fn destroy_in_radius(
    grid: &mut WorldGrid,
    worlds: &ForeignWorlds,
    rng: &mut SimRng,
    center: (i32, i32),
    radius: i32,
) -> DestructionOutcome {
    let mut out = DestructionOutcome::default();
    let Some(generator) = worlds.choose(rng) else {
        return out;
    };

    let mut visited: HashSet<(usize, usize)> = HashSet::new();

    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if !in_disc(dx, dy, radius) {
                continue;
            }
            let (x, y) = (center.0 + dx, center.1 + dy);
            let Some(&tile) = grid.tile(x, y) else {
                continue;
            };

            match tile.structure {
                Some(slot) if slot.kind.footprint() > 1 => {
                    if !visited.insert(slot.anchor) {
                        continue;
                    }
                    if slot.kind.is_protected() {
                        continue;
                    }
                    for (lx, ly) in grid.linked_tiles(slot) {
                        if synthesize_foreign_tile(grid, generator, rng, lx, ly, &mut out.despawned)
                        {
                            out.tiles_destroyed += 1;
                        }
                    }
                }
                _ => {
                    if synthesize_foreign_tile(
                        grid,
                        generator,
                        rng,
                        x as usize,
                        y as usize,
                        &mut out.despawned,
                    ) {
                        out.tiles_destroyed += 1;
                    }
                }
            }
        }
    }

    info!(
        "destruction pass at ({}, {}) r={}: {} tiles destroyed",
        center.0, center.1, radius, out.tiles_destroyed
    );
    out
}

/// Report of a crater pass, for diagnostics and tests.
#[derive(Debug, Default)]
pub struct CraterReport {
    pub burned: u32,
    pub foreign: u32,
    pub ores_requested: u32,
    pub ores_placed: u32,
    pub despawned: Vec<Entity>,
}

/// Reshape the disc around an impact point into a crater.
///
/// Inner zone (distance ≤ 80% of the radius): burned floor with probability
/// 0.8, foreign synthesis otherwise. Border zone: always foreign synthesis.
/// The burned floor is a direct write -- it does not consult the terraform
/// marker and leaves any structure standing. One generator is drawn for the
/// whole pass, then ore scatter may run.
pub fn place_crater(
    grid: &mut WorldGrid,
    worlds: &ForeignWorlds,
    active: WorldId,
    rng: &mut SimRng,
    center: (i32, i32),
    radius: i32,
) -> CraterReport {
    let mut report = CraterReport::default();
    let Some(generator) = worlds.choose(rng) else {
        return report;
    };

    let inner_limit = radius as f32 * INNER_ZONE_FRACTION;

    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if !in_disc(dx, dy, radius) {
                continue;
            }
            let (x, y) = (center.0 + dx, center.1 + dy);
            if grid.tile(x, y).is_none() {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist <= inner_limit && rng.chance(BURNED_FLOOR_CHANCE) {
                grid.set_floor(x as usize, y as usize, FloorType::Charred);
                report.burned += 1;
            } else if synthesize_foreign_tile(
                grid,
                generator,
                rng,
                x as usize,
                y as usize,
                &mut report.despawned,
            ) {
                report.foreign += 1;
            }
        }
    }

    info!(
        "crater at ({}, {}) r={}: {} burned, {} foreign tiles",
        center.0, center.1, radius, report.burned, report.foreign
    );

    if rng.chance(ORE_SPAWN_CHANCE) {
        let requested = if rng.chance(ORE_SMALL_CLUSTER_CHANCE) {
            rng.0.gen_range(1..=3)
        } else {
            rng.0.gen_range(4..=7)
        };
        report.ores_requested = requested;
        report.ores_placed = scatter_ores(grid, active, rng, center, radius, requested);
        info!(
            "scattered {}/{} ore deposits in crater",
            report.ores_placed, requested
        );
    } else {
        info!("no ore deposits this impact (25% spawn roll failed)");
    }

    report
}

/// Resurface one tile as if it belonged to the generator's world.
///
/// No-op when the tile carries the terraform marker or hosts a protected
/// structure. Otherwise: any structure on the tile is removed whole (its
/// entity queued for despawn), the generated floor is applied, the marker
/// set, and the pre-existing ore overlay cleared with probability 0.85.
/// The generator's ore suggestion is deliberately not applied. Returns
/// whether the tile was mutated.
pub fn synthesize_foreign_tile(
    grid: &mut WorldGrid,
    generator: &dyn ForeignFloorGenerator,
    rng: &mut SimRng,
    x: usize,
    y: usize,
    despawned: &mut Vec<Entity>,
) -> bool {
    let tile = *grid.get(x, y);
    if tile.terraformed {
        return false;
    }
    if tile.structure.is_some_and(|s| s.kind.is_protected()) {
        return false;
    }

    let coord = unit_sphere_coord(x, y, grid.width, grid.height);
    let synthesis = generator.synthesize(coord);

    if let Some(slot) = tile.structure {
        grid.clear_structure(slot);
        despawned.push(slot.entity);
    }

    let keep_overlay = tile.overlay.is_some() && rng.chance(OVERLAY_KEEP_CHANCE);
    let out = grid.get_mut(x, y);
    out.floor = synthesis.floor;
    out.terraformed = true;
    if !keep_overlay {
        out.overlay = None;
    }
    true
}

/// Scatter up to `requested` ore deposits at random offsets within the
/// crater radius. A deposit lands only on a surface-capable floor with no
/// existing overlay and no protected structure. The attempt budget bounds
/// the search: pool exhaustion yields fewer deposits, never a stall.
pub fn scatter_ores(
    grid: &mut WorldGrid,
    active: WorldId,
    rng: &mut SimRng,
    center: (i32, i32),
    radius: i32,
    requested: u32,
) -> u32 {
    let palette = ore_palette(active);
    if palette.is_empty() {
        warn!("no ore palette for world {:?}, skipping scatter", active);
        return 0;
    }

    let mut placed = 0;
    let max_attempts = requested * SCATTER_ATTEMPTS_PER_ORE;
    let mut attempts = 0;

    while placed < requested && attempts < max_attempts {
        attempts += 1;

        let ox = center.0 + rng.range_i32(radius);
        let oy = center.1 + rng.range_i32(radius);
        let Some(&tile) = grid.tile(ox, oy) else {
            continue;
        };
        if !tile.floor.has_surface() || tile.overlay.is_some() {
            continue;
        }
        if tile.structure.is_some_and(|s| s.kind.is_protected()) {
            continue;
        }

        if let Some(&ore) = rng.pick(palette) {
            grid.set_overlay(ox as usize, oy as usize, Some(ore));
            placed += 1;
        }
    }

    if placed < requested {
        debug!(
            "ore scatter exhausted after {} attempts: {}/{} placed",
            attempts, placed, requested
        );
    }
    placed
}
