use bevy::prelude::*;

pub mod asteroid;
pub mod clock;
pub mod config;
pub mod disaster_viz;
pub mod earthquake;
pub mod effects;
pub mod foreign_worlds;
pub mod grid;
pub mod observer;
pub mod scheduler;
pub mod sim_rng;
pub mod simulation_sets;
pub mod structures;
pub mod target_locator;
pub mod terraform;
pub mod world_init;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::{SimulationSet, SimulationUpdateSet};

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

/// Running totals of what the disaster engine has done. Diagnostics only;
/// nothing reads these to make decisions.
#[derive(Resource, Default, Debug, Clone)]
pub struct DisasterStats {
    pub asteroids_spawned: u32,
    pub asteroids_impacted: u32,
    pub impact_tiles_destroyed: u32,
    pub ores_scattered: u32,
    pub quakes_run: u32,
    pub quake_tiles_destroyed: u32,
}

pub fn tick_counters(mut tick: ResMut<TickCounter>, mut clock: ResMut<clock::SimClock>) {
    tick.0 = tick.0.wrapping_add(1);
    clock.tick();
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickCounter>()
            .init_resource::<DisasterStats>()
            .init_resource::<clock::SimClock>()
            .init_resource::<sim_rng::SimRng>()
            .init_resource::<scheduler::DisasterSettings>()
            .init_resource::<observer::Observer>()
            .init_resource::<foreign_worlds::ForeignWorlds>()
            .init_resource::<foreign_worlds::ActiveWorld>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );
        app.configure_sets(
            Update,
            (SimulationUpdateSet::Input, SimulationUpdateSet::Visual).chain(),
        );

        app.add_systems(Startup, world_init::init_world);
        app.add_systems(FixedUpdate, tick_counters.in_set(SimulationSet::PreSim));

        app.add_plugins((
            effects::EffectsPlugin,
            asteroid::AsteroidPlugin,
            earthquake::EarthquakePlugin,
            disaster_viz::DisasterVizPlugin,
        ));
    }
}
