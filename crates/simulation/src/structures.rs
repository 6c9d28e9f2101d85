use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::WorldGrid;

/// Kinds of structures that can occupy the grid. Footprints are square;
/// a footprint of `n` covers `n x n` tiles anchored at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// The settlement's core. Always immune to disasters.
    CommandCore,
    Habitat,
    Drill,
    Depot,
    SolarArray,
    Turret,
    Conveyor,
}

impl StructureKind {
    /// Side length of the square footprint, in tiles.
    pub fn footprint(self) -> usize {
        match self {
            StructureKind::CommandCore => 3,
            StructureKind::Habitat => 2,
            StructureKind::Drill => 2,
            StructureKind::Depot => 2,
            StructureKind::SolarArray => 1,
            StructureKind::Turret => 1,
            StructureKind::Conveyor => 1,
        }
    }

    /// Protected structures survive every disaster untouched.
    pub fn is_protected(self) -> bool {
        matches!(self, StructureKind::CommandCore)
    }

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::CommandCore => "Command Core",
            StructureKind::Habitat => "Habitat",
            StructureKind::Drill => "Drill",
            StructureKind::Depot => "Depot",
            StructureKind::SolarArray => "Solar Array",
            StructureKind::Turret => "Turret",
            StructureKind::Conveyor => "Conveyor",
        }
    }
}

/// ECS component for a placed structure. The grid's per-tile
/// [`StructureSlot`](crate::grid::StructureSlot)s mirror this and carry the
/// data radius scans need without an ECS query.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub anchor_x: usize,
    pub anchor_y: usize,
}

/// Spawn a structure entity and write its slot into the grid footprint.
/// Returns `None` (spawning nothing) if the footprint is blocked.
pub fn spawn_structure(
    commands: &mut Commands,
    grid: &mut WorldGrid,
    kind: StructureKind,
    anchor_x: usize,
    anchor_y: usize,
) -> Option<Entity> {
    let entity = commands
        .spawn(Structure {
            kind,
            anchor_x,
            anchor_y,
        })
        .id();
    if grid.place_structure(entity, kind, anchor_x, anchor_y) {
        Some(entity)
    } else {
        commands.entity(entity).despawn();
        None
    }
}
