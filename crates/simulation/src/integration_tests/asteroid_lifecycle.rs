//! Full asteroid lifecycle against the running plugin stack: flight,
//! impact, terrain mutation, deferred removal.

use super::inject_flying_asteroid;
use crate::asteroid::{ActiveAsteroids, AsteroidPhase};
use crate::grid::{FloorType, WorldGrid};
use crate::structures::StructureKind;
use crate::test_harness::TestWorld;

#[test]
fn test_injected_asteroid_completes_lifecycle() {
    let mut world = TestWorld::new()
        .with_seed(404)
        .with_structure(126, 128, StructureKind::Habitat)
        .with_structure(130, 126, StructureKind::Turret);
    assert_eq!(world.structure_count(), 2);

    inject_flying_asteroid(&mut world, (128, 128), 6);
    world.tick(120);

    let stats = world.stats();
    assert_eq!(stats.asteroids_impacted, 1);
    assert!(stats.impact_tiles_destroyed > 0);
    assert!(
        world.resource::<ActiveAsteroids>().0.is_empty(),
        "event removed after impact"
    );
    assert_eq!(
        world.structure_count(),
        0,
        "unprotected structures despawned"
    );

    let tile = world.tile(128, 128);
    assert!(
        tile.terraformed || tile.floor == FloorType::Charred,
        "impact center reshaped"
    );
}

#[test]
fn test_impact_fires_once_and_removal_is_deferred() {
    let mut world = TestWorld::new()
        .with_seed(7)
        .with_structure(128, 128, StructureKind::Turret);
    inject_flying_asteroid(&mut world, (128, 128), 4);

    let mut impacted = false;
    for _ in 0..200 {
        world.tick(1);
        if world.stats().asteroids_impacted == 1 {
            impacted = true;
            break;
        }
    }
    assert!(impacted, "asteroid never impacted");

    // The event survives the impact tick in its terminal phase and is
    // compacted out on the following pass.
    {
        let asteroids = world.resource::<ActiveAsteroids>();
        assert_eq!(asteroids.0.len(), 1);
        assert_eq!(asteroids.0[0].phase, AsteroidPhase::Impacted);
    }
    world.tick(1);
    assert!(world.resource::<ActiveAsteroids>().0.is_empty());

    world.tick(50);
    assert_eq!(
        world.stats().asteroids_impacted,
        1,
        "impact handler ran exactly once"
    );
}

#[test]
fn test_protected_core_survives_direct_hit() {
    let mut world = TestWorld::new()
        .with_seed(11)
        .with_structure(127, 127, StructureKind::CommandCore);
    assert_eq!(world.structure_count(), 1);

    inject_flying_asteroid(&mut world, (128, 128), 12);
    world.tick(120);

    assert_eq!(world.stats().asteroids_impacted, 1);
    assert_eq!(world.structure_count(), 1, "the core is immune");
    assert!(world.tile(128, 128).structure.is_some());
}

#[test]
fn test_observer_blast_damage_with_falloff() {
    let (wx, wy) = WorldGrid::grid_to_world(128, 128);
    let mut world = TestWorld::new()
        .with_seed(13)
        .with_structure(126, 126, StructureKind::Turret)
        .with_observer_at(wx, wy);

    inject_flying_asteroid(&mut world, (128, 128), 8);
    world.tick(120);

    let observer = world.observer();
    assert!(observer.damage_taken > 0.0, "observer at ground zero is hit");
    assert!(observer.damage_taken <= 200.0);
    assert_eq!(observer.health, (100.0 - observer.damage_taken).max(0.0));
}

#[test]
fn test_observer_outside_damage_radius_unhurt() {
    let (wx, wy) = WorldGrid::grid_to_world(20, 20);
    let mut world = TestWorld::new()
        .with_seed(17)
        .with_structure(126, 126, StructureKind::Turret)
        .with_observer_at(wx, wy);

    inject_flying_asteroid(&mut world, (128, 128), 4);
    world.tick(120);

    assert_eq!(world.stats().asteroids_impacted, 1);
    assert_eq!(world.observer().damage_taken, 0.0);
}

#[test]
fn test_paused_clock_freezes_flight() {
    let mut world = TestWorld::new().paused();
    inject_flying_asteroid(&mut world, (128, 128), 5);
    world.tick(100);

    let asteroids = world.resource::<ActiveAsteroids>();
    assert_eq!(asteroids.0.len(), 1);
    assert_eq!(asteroids.0[0].progress, 0.0, "no advancement while paused");
    assert_eq!(world.stats().asteroids_impacted, 0);
}
