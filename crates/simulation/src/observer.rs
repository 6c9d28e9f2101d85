use bevy::prelude::*;

use crate::config::{WORLD_HEIGHT, WORLD_WIDTH};

/// The entity disasters aim around and can hurt: target searches are
/// centered on its position and impact blast damage falls off with
/// distance from it.
#[derive(Resource, Debug, Clone)]
pub struct Observer {
    /// World-space position.
    pub position: Vec2,
    pub health: f32,
    /// Lifetime damage taken, for diagnostics.
    pub damage_taken: f32,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            position: Vec2::new(WORLD_WIDTH * 0.5, WORLD_HEIGHT * 0.5),
            health: 100.0,
            damage_taken: 0.0,
        }
    }
}

impl Observer {
    pub fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        self.damage_taken += amount;
    }
}
