use crate::{Ball, Paddle, Time};
use hecs::World;

/// Apply paddle velocities
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y += paddle.vel * time.dt;
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity_times_dt() {
        let mut world = World::new();
        let pos = Vec2::new(123.25, 456.5);
        let vel = Vec2::new(-150.0, 87.3);
        let ball = create_ball(&mut world, pos, vel);

        for dt in [0.0, 0.001, 0.016, 1.0 / 60.0, 0.1, 0.75] {
            let before = world.get::<&Ball>(ball).unwrap().pos;
            move_ball(&mut world, &Time::new(dt, 0.0));
            let after = world.get::<&Ball>(ball).unwrap().pos;
            assert_eq!(after, before + vel * dt, "dt = {dt}");
        }
    }

    #[test]
    fn test_zero_dt_leaves_ball_in_place() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(10.0, 20.0), Vec2::new(150.0, 150.0));
        move_ball(&mut world, &Time::new(0.0, 0.0));
        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_paddle_moves_only_on_y() {
        let mut world = World::new();
        let paddle = create_paddle(&mut world, Side::Left, Vec2::new(35.0, 300.0));
        world.get::<&mut Paddle>(paddle).unwrap().vel = 250.0;

        move_paddles(&mut world, &Time::new(0.1, 0.0));

        let moved = *world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(moved.pos.x, 35.0);
        assert_eq!(moved.pos.y, 300.0 + 250.0 * 0.1);
    }
}
