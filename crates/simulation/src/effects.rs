//! Presentation-boundary events.
//!
//! The engine never renders or plays anything itself: it emits these events
//! and downstream crates (camera, audio, particles) consume them. Missing
//! consumers are harmless: terrain mutation has already happened by the
//! time any of these fire.

use bevy::prelude::*;

/// Request a camera shake of the given strength.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraShakeEvent {
    pub intensity: f32,
    /// Seconds.
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundClip {
    ImpactBlast,
    SeismicRumble,
}

/// Request a positioned sound.
#[derive(Event, Debug, Clone, Copy)]
pub struct DisasterSoundEvent {
    pub clip: SoundClip,
    pub position: Vec2,
    pub volume: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    /// Single expanding blast ring pair.
    AsteroidBlast,
    /// Triple concentric shock rings.
    QuakeRings,
}

/// Request a transient ground visual at the event site. The built-in
/// fallback pass in `disaster_viz` renders these as gizmo rings.
#[derive(Event, Debug, Clone, Copy)]
pub struct ImpactEffectEvent {
    pub position: Vec2,
    /// World-unit radius the effect expands to.
    pub radius: f32,
    pub style: ImpactStyle,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CameraShakeEvent>()
            .add_event::<DisasterSoundEvent>()
            .add_event::<ImpactEffectEvent>();
    }
}
