use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CELL_SIZE;
use crate::structures::StructureKind;

/// Base terrain of a tile. Some floors are "surface-capable": they can host
/// ore overlays and structures. `Charred` is the burned floor placed in the
/// inner crater zone; the last four are floors synthesized from foreign
/// worlds and never generated at world init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FloorType {
    #[default]
    Grass,
    Sand,
    Dirt,
    Stone,
    Snow,
    Water,
    Charred,
    AshenRock,
    Basalt,
    CrimsonMoss,
    AbyssalSilt,
}

impl FloorType {
    pub fn has_surface(self) -> bool {
        !matches!(self, FloorType::Water)
    }

    pub fn is_foreign(self) -> bool {
        matches!(
            self,
            FloorType::AshenRock
                | FloorType::Basalt
                | FloorType::CrimsonMoss
                | FloorType::AbyssalSilt
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            FloorType::Grass => "Grass",
            FloorType::Sand => "Sand",
            FloorType::Dirt => "Dirt",
            FloorType::Stone => "Stone",
            FloorType::Snow => "Snow",
            FloorType::Water => "Water",
            FloorType::Charred => "Charred Rock",
            FloorType::AshenRock => "Ashen Rock",
            FloorType::Basalt => "Basalt",
            FloorType::CrimsonMoss => "Crimson Moss",
            FloorType::AbyssalSilt => "Abyssal Silt",
        }
    }
}

/// An ore deposit layered on a floor. The first four belong to the home
/// world's palette, the rest to the foreign palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OreType {
    Copper,
    Iron,
    Scrap,
    Coal,
    Tungsten,
    Thorium,
    Beryllium,
}

impl OreType {
    pub fn name(self) -> &'static str {
        match self {
            OreType::Copper => "Copper",
            OreType::Iron => "Iron",
            OreType::Scrap => "Scrap",
            OreType::Coal => "Coal",
            OreType::Tungsten => "Tungsten",
            OreType::Thorium => "Thorium",
            OreType::Beryllium => "Beryllium",
        }
    }
}

/// Per-tile record of the structure occupying it. Every tile covered by a
/// multi-tile structure carries the same slot; `anchor` identifies the unit
/// so radius scans can deduplicate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureSlot {
    pub entity: Entity,
    pub kind: StructureKind,
    pub anchor: (usize, usize),
}

/// One grid cell. Owned by [`WorldGrid`]; the disaster engine never
/// allocates tiles, only mutates them through the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    pub floor: FloorType,
    pub overlay: Option<OreType>,
    pub structure: Option<StructureSlot>,
    /// Unexplored (fogged) tiles are never counted as breakable.
    pub darkened: bool,
    /// Persistent terraform marker. Once set, later overlapping events skip
    /// foreign-floor synthesis on this tile.
    pub terraformed: bool,
}

impl Tile {
    /// A tile is breakable when it hosts a structure that is visible and
    /// not of a protected kind.
    pub fn is_breakable(&self) -> bool {
        if self.darkened {
            return false;
        }
        match self.structure {
            Some(slot) => !slot.kind.is_protected(),
            None => false,
        }
    }
}

#[derive(Resource)]
pub struct WorldGrid {
    pub tiles: Vec<Tile>,
    pub width: usize,
    pub height: usize,
}

impl WorldGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let idx = self.index(x, y);
        &mut self.tiles[idx]
    }

    /// Signed bounds-checked lookup for radius scans that may step off the
    /// map. `None` means "skip this tile, continue the scan".
    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if self.in_bounds(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    #[inline]
    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if self.in_bounds(x, y) {
            Some(self.get_mut(x, y))
        } else {
            None
        }
    }

    pub fn set_floor(&mut self, x: usize, y: usize, floor: FloorType) {
        self.get_mut(x, y).floor = floor;
    }

    pub fn set_overlay(&mut self, x: usize, y: usize, overlay: Option<OreType>) {
        self.get_mut(x, y).overlay = overlay;
    }

    pub fn world_to_grid(world_x: f32, world_y: f32) -> (i32, i32) {
        let gx = (world_x / CELL_SIZE).floor() as i32;
        let gy = (world_y / CELL_SIZE).floor() as i32;
        (gx, gy)
    }

    pub fn grid_to_world(gx: usize, gy: usize) -> (f32, f32) {
        let wx = gx as f32 * CELL_SIZE + CELL_SIZE * 0.5;
        let wy = gy as f32 * CELL_SIZE + CELL_SIZE * 0.5;
        (wx, wy)
    }

    /// Returns up to 4 cardinal neighbors and the count of valid entries.
    /// Use `&result[..count]` to iterate over valid neighbors.
    pub fn neighbors4(&self, x: usize, y: usize) -> ([(usize, usize); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        if x > 0 {
            result[count] = (x - 1, y);
            count += 1;
        }
        if x + 1 < self.width {
            result[count] = (x + 1, y);
            count += 1;
        }
        if y > 0 {
            result[count] = (x, y - 1);
            count += 1;
        }
        if y + 1 < self.height {
            result[count] = (x, y + 1);
            count += 1;
        }
        (result, count)
    }

    // -----------------------------------------------------------------------
    // Structure occupancy
    // -----------------------------------------------------------------------

    /// All tiles covered by the structure a slot belongs to, derived from
    /// its anchor and footprint.
    pub fn linked_tiles(&self, slot: StructureSlot) -> Vec<(usize, usize)> {
        let size = slot.kind.footprint();
        let (ax, ay) = slot.anchor;
        let mut tiles = Vec::with_capacity(size * size);
        for fy in ay..ay + size {
            for fx in ax..ax + size {
                if self.in_bounds(fx, fy) {
                    tiles.push((fx, fy));
                }
            }
        }
        tiles
    }

    /// Write a structure slot into every tile of its footprint. Fails (and
    /// writes nothing) if any covered tile is out of bounds, non-surface,
    /// or already occupied.
    pub fn place_structure(
        &mut self,
        entity: Entity,
        kind: StructureKind,
        anchor_x: usize,
        anchor_y: usize,
    ) -> bool {
        let size = kind.footprint();
        for fy in anchor_y..anchor_y + size {
            for fx in anchor_x..anchor_x + size {
                if !self.in_bounds(fx, fy) {
                    return false;
                }
                let tile = self.get(fx, fy);
                if !tile.floor.has_surface() || tile.structure.is_some() {
                    return false;
                }
            }
        }
        let slot = StructureSlot {
            entity,
            kind,
            anchor: (anchor_x, anchor_y),
        };
        for fy in anchor_y..anchor_y + size {
            for fx in anchor_x..anchor_x + size {
                self.get_mut(fx, fy).structure = Some(slot);
            }
        }
        true
    }

    /// Remove a structure from every tile it covers, reverting each to an
    /// empty passable state. Returns the number of tiles cleared. The
    /// caller owns despawning the entity.
    pub fn clear_structure(&mut self, slot: StructureSlot) -> usize {
        let linked = self.linked_tiles(slot);
        let mut cleared = 0;
        for (x, y) in linked {
            let tile = self.get_mut(x, y);
            if tile.structure.map(|s| s.entity) == Some(slot.entity) {
                tile.structure = None;
                cleared += 1;
            }
        }
        cleared
    }
}
