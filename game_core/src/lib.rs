pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one rendered frame
///
/// `time.dt` is used as-is (negative values count as zero), so one call is
/// exactly one frame for the collision cool-down.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    inputs: &[PaddleInput; 2],
    score: &mut Score,
    events: &mut Events,
    cooldown: &mut CollisionCooldown,
) {
    let dt = time.dt.max(0.0);
    let frame_time = Time { dt, ..*time };

    // Clear events at start of frame
    events.clear();

    // 1. Paddle velocities from key state
    apply_paddle_inputs(world, inputs, config);

    // 2. Integrate paddles and ball
    move_paddles(world, &frame_time);
    move_ball(world, &frame_time);

    // 3. Top/bottom walls
    bounce_off_walls(world, config, events);

    // 4. Ball exited the court
    check_scoring(world, config, score, events);

    // 5. Ball vs the paddle on its half
    check_paddle_collision(world, config, cooldown, events);

    // Update time
    time.now += dt;
    time.frame += 1;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
