mod constants;
mod resources;
mod systems;
mod tests;

pub use resources::{ActiveAsteroids, Asteroid, AsteroidPhase};
pub use systems::{spawn_asteroid, trigger_asteroid, update_asteroids, AsteroidPlugin};
