//! Spatial target selection for disasters.
//!
//! Samples candidate tiles around a center point and keeps the one with the
//! densest breakable surroundings, so events gravitate toward built-up
//! areas instead of empty terrain. Finding nothing is a valid outcome: the
//! caller skips the disaster for this trigger.

use crate::grid::WorldGrid;
use crate::sim_rng::SimRng;
use crate::terraform::in_disc;

/// Sampling budget per search. Bounds worst-case per-tick cost.
pub const MAX_ATTEMPTS: u32 = 150;

/// Extra margin added to the radius when clamping candidates in-bounds, so
/// the full prospective disaster disc stays on the map.
const BOUNDS_BUFFER: i32 = 5;

/// Find the best impact/epicenter tile near `center`.
///
/// Up to [`MAX_ATTEMPTS`] candidates are sampled uniformly within
/// `search_range` of `center` per axis, clamped so a disc of `radius` fits
/// on the map. Invalid candidates (off-grid, terraform-marked, floor not
/// surface-capable) are rejected. Each valid candidate is scored by the
/// number of breakable tiles within `radius`; the best score wins, with a
/// strict greater-than comparison so the first tile reaching a score beats
/// later ties. Returns `None` when no sampled candidate scored.
pub fn find_target(
    grid: &WorldGrid,
    rng: &mut SimRng,
    center: (i32, i32),
    radius: i32,
    search_range: i32,
) -> Option<(usize, usize)> {
    let buffer = radius + BOUNDS_BUFFER;
    let max_x = grid.width as i32 - buffer;
    let max_y = grid.height as i32 - buffer;
    if buffer > max_x || buffer > max_y {
        // The disc cannot fit on the map at all.
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    let mut best_score = 0u32;

    for _ in 0..MAX_ATTEMPTS {
        let tx = (center.0 + rng.range_i32(search_range)).clamp(buffer, max_x);
        let ty = (center.1 + rng.range_i32(search_range)).clamp(buffer, max_y);

        let Some(tile) = grid.tile(tx, ty) else {
            continue;
        };
        if tile.terraformed || !tile.floor.has_surface() {
            continue;
        }

        let score = count_breakable_around(grid, tx, ty, radius);
        if score > best_score {
            best_score = score;
            best = Some((tx as usize, ty as usize));
        }
    }

    best
}

/// Count breakable structure-bearing tiles within `radius` of `(x, y)`.
/// Same disc predicate as the destruction scans.
pub fn count_breakable_around(grid: &WorldGrid, x: i32, y: i32, radius: i32) -> u32 {
    let mut count = 0;
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if !in_disc(dx, dy, radius) {
                continue;
            }
            if let Some(tile) = grid.tile(x + dx, y + dy) {
                if tile.is_breakable() {
                    count += 1;
                }
            }
        }
    }
    count
}
