use bevy::prelude::*;
use rand::Rng;

use crate::clock::SimClock;
use crate::config::CELL_SIZE;
use crate::effects::{
    CameraShakeEvent, DisasterSoundEvent, ImpactEffectEvent, ImpactStyle, SoundClip,
};
use crate::foreign_worlds::{ActiveWorld, ForeignWorlds, WorldId};
use crate::grid::WorldGrid;
use crate::observer::Observer;
use crate::scheduler::{should_trigger, DisasterSettings};
use crate::sim_rng::SimRng;
use crate::target_locator::find_target;
use crate::terraform;
use crate::DisasterStats;

use super::constants::*;
use super::resources::{ActiveAsteroids, Asteroid, AsteroidPhase};

fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

// =============================================================================
// Systems
// =============================================================================

/// Roll the per-tick spawn chance and launch a new asteroid on success.
pub fn trigger_asteroid(
    clock: Res<SimClock>,
    settings: Res<DisasterSettings>,
    mut rng: ResMut<SimRng>,
    grid: Res<WorldGrid>,
    observer: Res<Observer>,
    mut asteroids: ResMut<ActiveAsteroids>,
    mut stats: ResMut<DisasterStats>,
) {
    if !should_trigger(&mut rng, &clock, &settings) {
        return;
    }
    info!("*** asteroid spawn triggered ***");

    match spawn_asteroid(&grid, &mut rng, observer.position) {
        Some(asteroid) => {
            info!(
                "asteroid inbound: target ({:.0}, {:.0}), radius {}, {} now active",
                asteroid.target.x,
                asteroid.target.y,
                asteroid.impact_radius,
                asteroids.0.len() + 1
            );
            asteroids.0.push(asteroid);
            stats.asteroids_spawned += 1;
        }
        None => warn!("no valid impact location found, spawn attempt discarded"),
    }
}

/// Build a new asteroid aimed at the best target near the observer.
///
/// Draws the impact radius and derives the visual scale, locates a target,
/// and places the spawn point at the standoff distance along a random
/// diagonal entry heading. `None` when the locator finds nothing; the
/// attempt is dropped without retry until the next trigger.
pub fn spawn_asteroid(grid: &WorldGrid, rng: &mut SimRng, observer_pos: Vec2) -> Option<Asteroid> {
    let impact_radius = rng.0.gen_range(IMPACT_RADIUS_MIN..=IMPACT_RADIUS_MAX);
    let scale = map_range(
        impact_radius as f32,
        IMPACT_RADIUS_MIN as f32,
        IMPACT_RADIUS_MAX as f32,
        SCALE_MIN,
        SCALE_MAX,
    );

    let center = WorldGrid::world_to_grid(observer_pos.x, observer_pos.y);
    let (tx, ty) = find_target(grid, rng, center, impact_radius, TARGET_SEARCH_RANGE)?;
    let (wx, wy) = WorldGrid::grid_to_world(tx, ty);
    let target = Vec2::new(wx, wy);

    let angle = *rng.pick(&ENTRY_ANGLES_DEG)?;
    let entry = Vec2::from_angle((angle + 180.0).to_radians());
    let start = target + entry * STANDOFF_DISTANCE;

    Some(Asteroid {
        phase: AsteroidPhase::Warning,
        start,
        target,
        position: start,
        angle,
        impact_radius,
        scale,
        progress: 0.0,
        warning_elapsed: 0.0,
        total_distance: start.distance(target),
        speed: FLIGHT_SPEED,
    })
}

/// Advance all tracked events and run impact handlers.
///
/// Impacted events are compacted out at the top of the *following* pass, so
/// removal never touches the collection mid-iteration.
#[allow(clippy::too_many_arguments)]
pub fn update_asteroids(
    clock: Res<SimClock>,
    mut asteroids: ResMut<ActiveAsteroids>,
    mut grid: ResMut<WorldGrid>,
    worlds: Res<ForeignWorlds>,
    active_world: Res<ActiveWorld>,
    mut rng: ResMut<SimRng>,
    mut observer: ResMut<Observer>,
    mut commands: Commands,
    mut stats: ResMut<DisasterStats>,
    mut shake_events: EventWriter<CameraShakeEvent>,
    mut sound_events: EventWriter<DisasterSoundEvent>,
    mut impact_events: EventWriter<ImpactEffectEvent>,
) {
    if !clock.is_running() {
        return;
    }

    asteroids.0.retain(|a| a.phase != AsteroidPhase::Impacted);
    if asteroids.0.is_empty() {
        return;
    }
    let dt = clock.delta_secs();

    for asteroid in asteroids.0.iter_mut() {
        if asteroid.advance(dt) {
            info!(
                "*** asteroid impact at ({:.0}, {:.0}) ***",
                asteroid.target.x, asteroid.target.y
            );
            handle_impact(
                asteroid,
                &mut grid,
                &worlds,
                active_world.0,
                &mut rng,
                &mut observer,
                &mut commands,
                &mut stats,
                &mut shake_events,
                &mut sound_events,
                &mut impact_events,
            );
            // Terminal phase doubles as the exactly-once guard: advance()
            // never reports impact again for an Impacted event.
            asteroid.phase = AsteroidPhase::Impacted;
        }
    }
}

/// Apply everything an impact does: blast damage to the observer,
/// presentation events, then the terrain mutation passes.
#[allow(clippy::too_many_arguments)]
fn handle_impact(
    asteroid: &Asteroid,
    grid: &mut WorldGrid,
    worlds: &ForeignWorlds,
    active_world: WorldId,
    rng: &mut SimRng,
    observer: &mut Observer,
    commands: &mut Commands,
    stats: &mut DisasterStats,
    shake_events: &mut EventWriter<CameraShakeEvent>,
    sound_events: &mut EventWriter<DisasterSoundEvent>,
    impact_events: &mut EventWriter<ImpactEffectEvent>,
) {
    let radius_world = asteroid.impact_radius as f32 * CELL_SIZE;

    impact_events.send(ImpactEffectEvent {
        position: asteroid.target,
        radius: radius_world * 2.0,
        style: ImpactStyle::AsteroidBlast,
    });
    let intensity = map_range(
        asteroid.impact_radius as f32,
        IMPACT_RADIUS_MIN as f32,
        IMPACT_RADIUS_MAX as f32,
        SHAKE_INTENSITY_MIN,
        SHAKE_INTENSITY_MAX,
    );
    shake_events.send(CameraShakeEvent {
        intensity,
        duration: SHAKE_DURATION_SECS,
    });
    sound_events.send(DisasterSoundEvent {
        clip: SoundClip::ImpactBlast,
        position: asteroid.target,
        volume: IMPACT_VOLUME,
    });

    let damage_radius = radius_world * DAMAGE_RADIUS_FACTOR;
    let observer_dist = observer.position.distance(asteroid.target);
    if observer_dist < damage_radius {
        let damage = BASE_DAMAGE * (1.0 - observer_dist / damage_radius);
        observer.apply_damage(damage);
        info!("observer hit for {:.0} blast damage", damage);
    }

    let impact_tile = WorldGrid::world_to_grid(asteroid.target.x, asteroid.target.y);
    let destruction =
        terraform::destroy_in_radius(grid, worlds, rng, impact_tile, asteroid.impact_radius);
    let crater = terraform::place_crater(
        grid,
        worlds,
        active_world,
        rng,
        impact_tile,
        asteroid.impact_radius,
    );

    for entity in destruction.despawned.into_iter().chain(crater.despawned) {
        commands.entity(entity).despawn();
    }

    stats.asteroids_impacted += 1;
    stats.impact_tiles_destroyed += destruction.tiles_destroyed;
    stats.ores_scattered += crater.ores_placed;
}

// =============================================================================
// Plugin
// =============================================================================

pub struct AsteroidPlugin;

impl Plugin for AsteroidPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveAsteroids>().add_systems(
            FixedUpdate,
            (trigger_asteroid, update_asteroids)
                .chain()
                .in_set(crate::SimulationSet::Simulation),
        );
    }
}
