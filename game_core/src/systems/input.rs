use crate::{Config, Paddle, PaddleInput};
use hecs::World;

/// Velocity for a paddle at height `y` given its key state.
///
/// Up wins over down when both are held. A paddle already at its boundary
/// gets no velocity toward that boundary.
pub fn paddle_velocity(input: PaddleInput, y: f32, config: &Config) -> f32 {
    let boundary = config.paddle_boundary();
    if input.up && y < config.court_height - boundary {
        config.paddle_speed
    } else if input.down && y > boundary {
        -config.paddle_speed
    } else {
        0.0
    }
}

/// Set paddle velocities from the current key state, indexed by side
pub fn apply_paddle_inputs(world: &mut World, inputs: &[PaddleInput; 2], config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let input = inputs[paddle.side.index()];
        paddle.vel = paddle_velocity(input, paddle.pos.y, config);
    }
}
