// =============================================================================
// World generation: home-world terrain, ore fields, and the starting
// settlement the disasters get aimed at.
// =============================================================================

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::config::{
    GRID_HEIGHT, GRID_WIDTH, TERRAIN_BASE_FREQUENCY, TERRAIN_LACUNARITY, TERRAIN_OCTAVES,
    TERRAIN_PERSISTENCE, WATER_THRESHOLD,
};
use crate::grid::{FloorType, OreType, WorldGrid};
use crate::structures::{spawn_structure, StructureKind};

/// Marker resource that, when present, causes `init_world` to skip map
/// generation. Used by the test harness to start with a blank grid.
#[derive(Resource)]
pub struct SkipWorldInit;

const WORLD_SEED: u64 = 42;

pub fn init_world(mut commands: Commands, skip: Option<Res<SkipWorldInit>>) {
    if skip.is_some() {
        return;
    }
    let mut grid = WorldGrid::new(GRID_WIDTH, GRID_HEIGHT);

    generate_terrain(&mut grid, WORLD_SEED);
    seed_ore_fields(&mut grid, WORLD_SEED);
    spawn_settlement(&mut commands, &mut grid);

    commands.insert_resource(grid);
}

// =============================================================================
// Terrain
// =============================================================================

fn fbm_noise(seed: i32, frequency: f32, octaves: i32) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(frequency));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(octaves));
    noise.set_fractal_gain(Some(TERRAIN_PERSISTENCE));
    noise.set_fractal_lacunarity(Some(TERRAIN_LACUNARITY));
    noise
}

/// Elevation-banded floor classification for the home world.
fn classify_floor(elevation: f32) -> FloorType {
    if elevation < WATER_THRESHOLD {
        FloorType::Water
    } else if elevation < 0.38 {
        FloorType::Sand
    } else if elevation < 0.58 {
        FloorType::Grass
    } else if elevation < 0.72 {
        FloorType::Dirt
    } else if elevation < 0.85 {
        FloorType::Stone
    } else {
        FloorType::Snow
    }
}

fn generate_terrain(grid: &mut WorldGrid, seed: u64) {
    let noise = fbm_noise(seed as i32, TERRAIN_BASE_FREQUENCY, TERRAIN_OCTAVES);
    for y in 0..grid.height {
        for x in 0..grid.width {
            let raw = noise.get_noise_2d(x as f32, y as f32);
            // fBm with OpenSimplex2 outputs in [-1, 1]; normalize to [0, 1]
            let elevation = ((raw + 1.0) * 0.5).clamp(0.0, 1.0);
            grid.set_floor(x, y, classify_floor(elevation));
        }
    }
}

// =============================================================================
// Ore fields
// =============================================================================

/// Scatter home-palette ore deposits where a second noise pass peaks.
fn seed_ore_fields(grid: &mut WorldGrid, seed: u64) {
    let noise = fbm_noise(seed.wrapping_add(9999) as i32, 0.05, 3);
    for y in 0..grid.height {
        for x in 0..grid.width {
            if !grid.get(x, y).floor.has_surface() {
                continue;
            }
            let n = noise.get_noise_2d(x as f32, y as f32);
            let ore = if n > 0.84 {
                Some(OreType::Scrap)
            } else if n > 0.80 {
                Some(OreType::Coal)
            } else if n > 0.76 {
                Some(OreType::Iron)
            } else if n > 0.72 {
                Some(OreType::Copper)
            } else {
                None
            };
            if ore.is_some() {
                grid.set_overlay(x, y, ore);
            }
        }
    }
}

// =============================================================================
// Starting settlement
// =============================================================================

/// The core plus a modest spread of outbuildings around the map center.
/// The pad under the settlement is carved clear of water first so the core
/// always lands; outbuilding placements that still collide are skipped.
fn spawn_settlement(commands: &mut Commands, grid: &mut WorldGrid) {
    for y in 115..=136 {
        for x in 115..=138 {
            if !grid.get(x, y).floor.has_surface() {
                grid.set_floor(x, y, FloorType::Grass);
            }
        }
    }

    let _ = spawn_structure(commands, grid, StructureKind::CommandCore, 126, 126);

    let placements = [
        (StructureKind::Habitat, 120, 124),
        (StructureKind::Habitat, 131, 127),
        (StructureKind::Habitat, 124, 132),
        (StructureKind::Drill, 122, 119),
        (StructureKind::Drill, 133, 121),
        (StructureKind::Depot, 130, 132),
        (StructureKind::SolarArray, 124, 122),
        (StructureKind::SolarArray, 130, 124),
        (StructureKind::Turret, 118, 128),
        (StructureKind::Turret, 135, 125),
        (StructureKind::Conveyor, 125, 123),
        (StructureKind::Conveyor, 125, 124),
    ];
    for (kind, x, y) in placements {
        let _ = spawn_structure(commands, grid, kind, x, y);
    }
}
