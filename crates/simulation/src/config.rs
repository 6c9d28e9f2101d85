pub const GRID_WIDTH: usize = 256;
pub const GRID_HEIGHT: usize = 256;
pub const CELL_SIZE: f32 = 8.0;
pub const WORLD_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;
pub const WORLD_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;

/// Simulated seconds advanced per `FixedUpdate` tick. The engine is
/// fixed-step: every system that integrates over time multiplies by this
/// instead of reading wall-clock deltas, so test runs that drive the
/// schedule directly stay deterministic.
pub const SIM_DT: f32 = 1.0 / 60.0;

pub const TERRAIN_BASE_FREQUENCY: f32 = 0.008;
pub const TERRAIN_OCTAVES: i32 = 5;
pub const TERRAIN_PERSISTENCE: f32 = 0.5;
pub const TERRAIN_LACUNARITY: f32 = 2.0;
pub const WATER_THRESHOLD: f32 = 0.32;
