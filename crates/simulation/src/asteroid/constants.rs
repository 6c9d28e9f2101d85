// =============================================================================
// Constants
// =============================================================================

/// Impact radius range, in tiles. Drawn uniformly per spawn.
pub(crate) const IMPACT_RADIUS_MIN: i32 = 4;
pub(crate) const IMPACT_RADIUS_MAX: i32 = 12;

/// Visual scale range, interpolated linearly over the radius range.
pub(crate) const SCALE_MIN: f32 = 0.7;
pub(crate) const SCALE_MAX: f32 = 1.5;

/// The fixed diagonal entry headings, in degrees.
pub(crate) const ENTRY_ANGLES_DEG: [f32; 4] = [45.0, 135.0, 225.0, 315.0];

/// World-unit distance from target to spawn point.
pub(crate) const STANDOFF_DISTANCE: f32 = 200.0;

/// Flight speed in world units per second.
pub(crate) const FLIGHT_SPEED: f32 = 240.0;

/// Ground-marker warning interval before the asteroid starts moving.
pub(crate) const WARNING_DURATION_SECS: f32 = 8.0;

/// Impact triggers at this travel progress...
pub(crate) const IMPACT_PROGRESS_THRESHOLD: f32 = 0.99;

/// ...or when closer than this to the target, in world units.
pub(crate) const IMPACT_DISTANCE_THRESHOLD: f32 = 16.0;

/// How far from the observer the locator may place the impact, in tiles.
pub(crate) const TARGET_SEARCH_RANGE: i32 = 80;

/// Blast damage at the impact point; falls off linearly to zero at the
/// damage radius.
pub(crate) const BASE_DAMAGE: f32 = 200.0;

/// Damage radius as a multiple of the impact radius in world units.
pub(crate) const DAMAGE_RADIUS_FACTOR: f32 = 1.2;

/// Camera-shake intensity range, interpolated over the radius range.
pub(crate) const SHAKE_INTENSITY_MIN: f32 = 15.0;
pub(crate) const SHAKE_INTENSITY_MAX: f32 = 30.0;

pub(crate) const SHAKE_DURATION_SECS: f32 = 1.3;

pub(crate) const IMPACT_VOLUME: f32 = 1.5;
