//! # TestWorld — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for running integration
//! tests without a window or renderer. Builder methods set up grid state,
//! then `tick()` drives the `FixedUpdate` schedule directly and assertions
//! read the resulting ECS state.

use bevy::app::App;
use bevy::prelude::*;

use crate::clock::SimClock;
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::grid::{FloorType, OreType, Tile, WorldGrid};
use crate::observer::Observer;
use crate::scheduler::DisasterSettings;
use crate::sim_rng::SimRng;
use crate::structures::{Structure, StructureKind};
use crate::world_init::SkipWorldInit;
use crate::DisasterStats;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestWorld {
    app: App,
}

impl TestWorld {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create an **empty** world: an all-grass grid with every resource at
    /// its default. Map generation is skipped.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE SimulationPlugin so init_world skips.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);

        // Blank grid BEFORE the first update so systems taking
        // Res<WorldGrid> don't panic.
        app.insert_resource(WorldGrid::new(GRID_WIDTH, GRID_HEIGHT));

        // Run one update so Startup systems execute (init_world no-ops).
        app.update();

        Self { app }
    }

    /// Create a world with the full generated map: terrain, ore fields and
    /// the starting settlement.
    pub fn generated() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    /// Re-seed the simulation RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app
            .world_mut()
            .insert_resource(SimRng::from_seed_u64(seed));
        self
    }

    /// Spawn a structure anchored at the given tile. Placements on blocked
    /// footprints are dropped, like in the engine proper.
    pub fn with_structure(mut self, x: usize, y: usize, kind: StructureKind) -> Self {
        let entity = self
            .app
            .world_mut()
            .spawn(Structure {
                kind,
                anchor_x: x,
                anchor_y: y,
            })
            .id();
        let placed = {
            let mut grid = self.app.world_mut().resource_mut::<WorldGrid>();
            grid.place_structure(entity, kind, x, y)
        };
        if !placed {
            self.app.world_mut().despawn(entity);
        }
        self
    }

    /// Set a single tile's floor.
    pub fn with_floor(mut self, x: usize, y: usize, floor: FloorType) -> Self {
        self.app
            .world_mut()
            .resource_mut::<WorldGrid>()
            .set_floor(x, y, floor);
        self
    }

    /// Set the floor for a rectangular area (inclusive).
    pub fn with_floor_rect(
        mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        floor: FloorType,
    ) -> Self {
        let mut grid = self.app.world_mut().resource_mut::<WorldGrid>();
        for y in y0..=y1 {
            for x in x0..=x1 {
                if grid.in_bounds(x, y) {
                    grid.set_floor(x, y, floor);
                }
            }
        }
        drop(grid);
        self
    }

    /// Put an ore overlay on a tile.
    pub fn with_ore(mut self, x: usize, y: usize, ore: OreType) -> Self {
        self.app
            .world_mut()
            .resource_mut::<WorldGrid>()
            .set_overlay(x, y, Some(ore));
        self
    }

    /// Move the observer to a world-space position.
    pub fn with_observer_at(mut self, x: f32, y: f32) -> Self {
        self.app.world_mut().resource_mut::<Observer>().position = Vec2::new(x, y);
        self
    }

    /// Turn the whole disaster engine off.
    pub fn with_disasters_disabled(mut self) -> Self {
        self.app
            .world_mut()
            .resource_mut::<DisasterSettings>()
            .enabled = false;
        self
    }

    /// Pause the sim clock.
    pub fn paused(mut self) -> Self {
        self.app.world_mut().resource_mut::<SimClock>().paused = true;
        self
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule. This bypasses Bevy's time system entirely; the engine is
    /// fixed-step, so nothing else is needed.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
            std::thread::yield_now();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably (needed for queries in Bevy).
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn grid(&self) -> &WorldGrid {
        self.app.world().resource::<WorldGrid>()
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        *self.grid().get(x, y)
    }

    pub fn stats(&self) -> &DisasterStats {
        self.resource::<DisasterStats>()
    }

    pub fn observer(&self) -> &Observer {
        self.resource::<Observer>()
    }

    /// Count all live structure entities.
    pub fn structure_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Structure>>()
            .iter(world)
            .count()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_resource_exists<T: Resource>(&self) {
        assert!(
            self.app.world().contains_resource::<T>(),
            "resource {} missing",
            std::any::type_name::<T>()
        );
    }
}
