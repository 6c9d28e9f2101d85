//! Floor generators for the other simulated worlds.
//!
//! When an impact reshapes terrain it blends in floors "imported" from one
//! of these worlds: the tile's grid coordinate is projected onto a unit
//! sphere and each generator answers what floor (and ore, advisory only)
//! that coordinate would carry on its world. Generators are selected by
//! explicit [`WorldId`], never by runtime type inspection.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{FloorType, OreType};
use crate::sim_rng::SimRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorldId {
    /// The home world.
    #[default]
    Verdant,
    /// Volcanic ash world.
    Cinder,
    /// Deep-ocean world.
    Abyssal,
}

impl WorldId {
    pub fn name(self) -> &'static str {
        match self {
            WorldId::Verdant => "Verdant",
            WorldId::Cinder => "Cinder",
            WorldId::Abyssal => "Abyssal",
        }
    }
}

/// What a generator would place at a given coordinate. The ore is a
/// suggestion only: crater synthesis deliberately ignores it and applies
/// its own overlay-clearing rule instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSynthesis {
    pub floor: FloorType,
    pub ore: Option<OreType>,
}

pub trait ForeignFloorGenerator: Send + Sync {
    fn world_id(&self) -> WorldId;
    /// `unit_sphere` is a normalized projection of the tile's grid
    /// coordinate; equal inputs must yield equal outputs.
    fn synthesize(&self, unit_sphere: Vec3) -> TileSynthesis;
}

// ---------------------------------------------------------------------------
// Noise-backed generators
// ---------------------------------------------------------------------------

/// Sampling scale applied to unit-sphere coordinates before querying noise.
/// Sphere coordinates live in [-1, 1]; this stretches them into a range
/// where the configured frequency produces tile-sized features.
const SPHERE_SAMPLE_SCALE: f32 = 90.0;

fn make_noise(seed: i32, frequency: f32, octaves: i32) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(frequency));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(octaves));
    noise.set_fractal_gain(Some(0.5));
    noise.set_fractal_lacunarity(Some(2.0));
    noise
}

fn sample(noise: &FastNoiseLite, coord: Vec3) -> f32 {
    let p = coord * SPHERE_SAMPLE_SCALE;
    noise.get_noise_3d(p.x, p.y, p.z)
}

/// Temperate home-world terrain: meadows broken by sand and rock.
pub struct VerdantGenerator {
    floor_noise: FastNoiseLite,
    ore_noise: FastNoiseLite,
}

impl VerdantGenerator {
    pub fn new(seed: i32) -> Self {
        Self {
            floor_noise: make_noise(seed, 0.02, 5),
            ore_noise: make_noise(seed.wrapping_add(7919), 0.06, 3),
        }
    }
}

impl ForeignFloorGenerator for VerdantGenerator {
    fn world_id(&self) -> WorldId {
        WorldId::Verdant
    }

    fn synthesize(&self, unit_sphere: Vec3) -> TileSynthesis {
        let n = sample(&self.floor_noise, unit_sphere);
        let floor = if n < -0.35 {
            FloorType::Water
        } else if n < -0.1 {
            FloorType::Sand
        } else if n < 0.25 {
            FloorType::Grass
        } else if n < 0.55 {
            FloorType::Dirt
        } else {
            FloorType::Stone
        };
        let o = sample(&self.ore_noise, unit_sphere);
        let ore = if !floor.has_surface() {
            None
        } else if o > 0.6 {
            Some(OreType::Copper)
        } else if o > 0.45 {
            Some(OreType::Coal)
        } else {
            None
        };
        TileSynthesis { floor, ore }
    }
}

/// Volcanic world: basalt flows under drifts of ash.
pub struct CinderGenerator {
    floor_noise: FastNoiseLite,
    ore_noise: FastNoiseLite,
}

impl CinderGenerator {
    pub fn new(seed: i32) -> Self {
        Self {
            floor_noise: make_noise(seed, 0.03, 4),
            ore_noise: make_noise(seed.wrapping_add(7919), 0.05, 3),
        }
    }
}

impl ForeignFloorGenerator for CinderGenerator {
    fn world_id(&self) -> WorldId {
        WorldId::Cinder
    }

    fn synthesize(&self, unit_sphere: Vec3) -> TileSynthesis {
        let n = sample(&self.floor_noise, unit_sphere);
        let floor = if n < -0.2 {
            FloorType::Basalt
        } else if n < 0.35 {
            FloorType::AshenRock
        } else {
            FloorType::Charred
        };
        let o = sample(&self.ore_noise, unit_sphere);
        let ore = if o > 0.55 {
            Some(OreType::Tungsten)
        } else if o > 0.42 {
            Some(OreType::Beryllium)
        } else {
            None
        };
        TileSynthesis { floor, ore }
    }
}

/// Ocean world: silt beds and crimson growth above the waterline.
pub struct AbyssalGenerator {
    floor_noise: FastNoiseLite,
    ore_noise: FastNoiseLite,
}

impl AbyssalGenerator {
    pub fn new(seed: i32) -> Self {
        Self {
            floor_noise: make_noise(seed, 0.025, 5),
            ore_noise: make_noise(seed.wrapping_add(7919), 0.07, 3),
        }
    }
}

impl ForeignFloorGenerator for AbyssalGenerator {
    fn world_id(&self) -> WorldId {
        WorldId::Abyssal
    }

    fn synthesize(&self, unit_sphere: Vec3) -> TileSynthesis {
        let n = sample(&self.floor_noise, unit_sphere);
        let floor = if n < -0.25 {
            FloorType::Water
        } else if n < 0.3 {
            FloorType::AbyssalSilt
        } else {
            FloorType::CrimsonMoss
        };
        let o = sample(&self.ore_noise, unit_sphere);
        let ore = if floor.has_surface() && o > 0.55 {
            Some(OreType::Thorium)
        } else {
            None
        };
        TileSynthesis { floor, ore }
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The registry of foreign-floor generators, one per simulated world.
#[derive(Resource)]
pub struct ForeignWorlds {
    generators: Vec<Box<dyn ForeignFloorGenerator>>,
}

impl Default for ForeignWorlds {
    fn default() -> Self {
        Self {
            generators: vec![
                Box::new(VerdantGenerator::new(1001)),
                Box::new(CinderGenerator::new(2002)),
                Box::new(AbyssalGenerator::new(3003)),
            ],
        }
    }
}

impl ForeignWorlds {
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn by_id(&self, id: WorldId) -> Option<&dyn ForeignFloorGenerator> {
        self.generators
            .iter()
            .find(|g| g.world_id() == id)
            .map(|g| g.as_ref())
    }

    /// Uniform choice among the registered generators. `None` only if the
    /// registry is empty, which callers absorb by skipping synthesis.
    pub fn choose(&self, rng: &mut SimRng) -> Option<&dyn ForeignFloorGenerator> {
        if self.generators.is_empty() {
            return None;
        }
        let idx = rng.0.gen_range(0..self.generators.len());
        Some(self.generators[idx].as_ref())
    }
}

/// Which simulated world the session takes place on. Selects the ore
/// palette used by crater resource scatter.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActiveWorld(pub WorldId);

/// Ore palette for scatter on the given world. Two palettes exist: the
/// volcanic world has its own, every other world shares the home set.
pub fn ore_palette(world: WorldId) -> &'static [OreType] {
    match world {
        WorldId::Cinder => &[OreType::Tungsten, OreType::Thorium, OreType::Beryllium],
        _ => &[OreType::Copper, OreType::Iron, OreType::Scrap, OreType::Coal],
    }
}
