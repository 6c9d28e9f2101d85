//! Engine wiring: resource registration, clock gating, the kill switch,
//! and generated-world bootstrap.

use crate::asteroid::ActiveAsteroids;
use crate::clock::SimClock;
use crate::foreign_worlds::{ActiveWorld, ForeignWorlds};
use crate::grid::WorldGrid;
use crate::observer::Observer;
use crate::scheduler::DisasterSettings;
use crate::sim_rng::SimRng;
use crate::structures::StructureKind;
use crate::test_harness::TestWorld;
use crate::{DisasterStats, TickCounter};

#[test]
fn test_engine_resources_registered() {
    let world = TestWorld::new();
    world.assert_resource_exists::<WorldGrid>();
    world.assert_resource_exists::<ActiveAsteroids>();
    world.assert_resource_exists::<DisasterStats>();
    world.assert_resource_exists::<SimClock>();
    world.assert_resource_exists::<SimRng>();
    world.assert_resource_exists::<DisasterSettings>();
    world.assert_resource_exists::<Observer>();
    world.assert_resource_exists::<ForeignWorlds>();
    world.assert_resource_exists::<ActiveWorld>();
}

#[test]
fn test_clock_gating_stops_sim_time() {
    let mut world = TestWorld::new();
    world.tick(10);
    assert_eq!(world.resource::<SimClock>().ticks, 10);
    assert_eq!(world.resource::<TickCounter>().0, 10);

    world.world_mut().resource_mut::<SimClock>().paused = true;
    world.tick(5);
    assert_eq!(world.resource::<SimClock>().ticks, 10, "sim time frozen");
    assert_eq!(world.resource::<TickCounter>().0, 15, "raw ticks continue");
}

#[test]
fn test_disabled_engine_spawns_nothing() {
    let mut world = TestWorld::new()
        .with_disasters_disabled()
        .with_structure(128, 128, StructureKind::Turret);
    world.tick(2000);

    assert!(world.resource::<ActiveAsteroids>().0.is_empty());
    let stats = world.stats();
    assert_eq!(stats.asteroids_spawned, 0);
    assert_eq!(stats.quakes_run, 0);
}

#[test]
fn test_generated_world_bootstraps_settlement() {
    let mut world = TestWorld::generated();
    assert!(world.structure_count() > 0, "settlement spawned");

    let grid = world.grid();
    let core = grid.get(127, 127).structure;
    assert!(
        core.is_some_and(|s| s.kind.is_protected()),
        "protected core at the map center"
    );
    let ores = grid.tiles.iter().filter(|t| t.overlay.is_some()).count();
    assert!(ores > 0, "ore fields seeded");
    assert!(
        grid.tiles.iter().all(|t| !t.terraformed),
        "fresh worlds carry no terraform markers"
    );
}
