//! Read-only fallback visuals for tracked disaster events.
//!
//! Runs in the `Update` schedule's Visual phase and draws gizmo primitives:
//! the warning ground marker, the flying body with its tail, and expiring
//! impact rings. Sprite-based presentation belongs to downstream crates;
//! this pass is the documented degradation path and never mutates engine
//! state (the flash list below is presentation-local).

use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;

use crate::asteroid::{ActiveAsteroids, AsteroidPhase};
use crate::config::CELL_SIZE;
use crate::effects::{ImpactEffectEvent, ImpactStyle};
use crate::simulation_sets::SimulationUpdateSet;

/// Ground-marker radius as a multiple of the impact radius.
const MARKER_RADIUS_FACTOR: f32 = 1.25;

/// Base gizmo radius of the asteroid body, scaled by the event's size.
const BODY_RADIUS: f32 = 10.0;

const BLAST_FLASH_SECS: f32 = 2.0;
const RING_FLASH_SECS: f32 = 2.5;

/// One transient impact visual, aged out over its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct ImpactFlash {
    pub position: Vec2,
    pub radius: f32,
    pub style: ImpactStyle,
    pub age: f32,
    pub lifetime: f32,
}

/// Presentation-local state: pending impact visuals. Not engine state.
#[derive(Resource, Default)]
pub struct ImpactFlashes(pub Vec<ImpactFlash>);

/// Turn impact events emitted by the `FixedUpdate` systems into aged
/// flashes for the draw pass.
pub fn collect_impact_flashes(
    mut events: EventReader<ImpactEffectEvent>,
    mut flashes: ResMut<ImpactFlashes>,
) {
    for event in events.read() {
        let lifetime = match event.style {
            ImpactStyle::AsteroidBlast => BLAST_FLASH_SECS,
            ImpactStyle::QuakeRings => RING_FLASH_SECS,
        };
        flashes.0.push(ImpactFlash {
            position: event.position,
            radius: event.radius,
            style: event.style,
            age: 0.0,
            lifetime,
        });
    }
}

/// Draw all tracked events. Reads the active-event collection, never
/// writes it.
pub fn draw_disasters(
    mut gizmos: Gizmos,
    time: Res<Time>,
    asteroids: Res<ActiveAsteroids>,
    mut flashes: ResMut<ImpactFlashes>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for asteroid in &asteroids.0 {
        if asteroid.phase == AsteroidPhase::Impacted {
            continue;
        }

        // Ground marker at the target: pulsing through the warning phase,
        // then solidifying with travel progress.
        let alpha = match asteroid.phase {
            AsteroidPhase::Warning => 0.3 + 0.3 * (now * 6.0).sin().abs(),
            _ => 0.5 + asteroid.progress * 0.5,
        };
        let marker_radius = asteroid.impact_radius as f32 * CELL_SIZE * MARKER_RADIUS_FACTOR;
        gizmos.circle_2d(
            asteroid.target,
            marker_radius,
            Color::srgba(1.0, 0.15, 0.1, alpha),
        );

        if asteroid.phase != AsteroidPhase::Flying {
            continue;
        }

        let body_radius = BODY_RADIUS * asteroid.scale;
        gizmos.circle_2d(
            asteroid.position,
            body_radius,
            Color::srgba(0.95, 0.85, 0.7, 1.0),
        );

        // Tail segments trailing back along the entry heading.
        let back = Vec2::from_angle((asteroid.angle + 180.0).to_radians());
        for i in 1..=3 {
            let seg_start = asteroid.position + back * body_radius * i as f32;
            let seg_end = asteroid.position + back * body_radius * (i + 1) as f32;
            let fade = 1.0 - i as f32 / 4.0;
            gizmos.line_2d(seg_start, seg_end, Color::srgba(1.0, 0.6, 0.2, fade));
        }
    }

    flashes.0.retain_mut(|flash| {
        flash.age += dt;
        if flash.age >= flash.lifetime {
            return false;
        }
        let fin = flash.age / flash.lifetime;
        let fout = 1.0 - fin;
        match flash.style {
            ImpactStyle::AsteroidBlast => {
                gizmos.circle_2d(
                    flash.position,
                    fin * flash.radius,
                    Color::srgba(1.0, 0.5, 0.1, fout),
                );
                gizmos.circle_2d(
                    flash.position,
                    fin * flash.radius * 0.5,
                    Color::srgba(1.0, 0.9, 0.3, fout),
                );
            }
            ImpactStyle::QuakeRings => {
                for mult in [0.25, 0.5, 1.0] {
                    gizmos.circle_2d(
                        flash.position,
                        fin * flash.radius * mult,
                        Color::srgba(0.9, 0.9, 0.9, fout * 0.8),
                    );
                }
            }
        }
        true
    });
}

pub struct DisasterVizPlugin;

impl Plugin for DisasterVizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactFlashes>().add_systems(
            Update,
            (
                collect_impact_flashes,
                // Headless runs (tests, servers) carry no gizmo store.
                draw_disasters.run_if(resource_exists::<GizmoConfigStore>),
            )
                .chain()
                .in_set(SimulationUpdateSet::Visual),
        );
    }
}
