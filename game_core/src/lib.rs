pub mod components;
pub mod config;
pub mod driver;
pub mod field;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use field::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed step.
///
/// Never called while paused; the driver gates it.
pub fn step(world: &mut World, field: &Field, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Opponent tracks the moved ball
    track_ball(world);

    // 3. Check collisions (walls, then the paddle on the ball's half)
    check_collisions(world, field, events);

    // 4. Check scoring (ball exited the field)
    check_scoring(world, field, events);
}

/// Helper to create a paddle entity on its side of the field
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    controller: Controller,
    y: f32,
) -> hecs::Entity {
    world.spawn((Paddle::new(
        controller,
        config.paddle_x(controller),
        y,
        config.paddle_width,
        config.paddle_height,
    ),))
}

/// Helper to create the ball entity at base speed
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        vel,
        config.ball_radius,
        Params::BALL_SPEED_BASE,
    ),))
}
