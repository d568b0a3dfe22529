use crate::{Ball, CollisionCooldown, Config, Events, Paddle};
use glam::{BVec2, Vec2};
use hecs::World;

/// Reverse the ball's y velocity when its top or bottom edge is outside the court.
///
/// Position is left untouched, so a ball far past the wall can bounce on
/// consecutive frames.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius <= 0.0 || ball.pos.y + radius >= config.court_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::debug!("ball hit wall at {:?}", ball.pos);
        }
    }
}

/// Narrow-phase tests between a ball and a paddle.
///
/// `dist` is the absolute center-to-center offset, `half` the paddle's half
/// extents. Each of the three bands can flag an axis on its own:
/// the band along the paddle's vertical faces flags x, the band along its
/// top and bottom flags y, and a corner within `radius` flags both.
pub fn narrow_phase(dist: Vec2, half: Vec2, radius: f32) -> BVec2 {
    let mut reverse = BVec2::FALSE;

    if dist.x >= half.x - radius && dist.y <= half.y {
        reverse.x = true;
    }

    if dist.y >= half.y - radius && dist.x <= half.x {
        reverse.y = true;
    }

    if dist.x > half.x && dist.y > half.y {
        let corner = dist - half;
        if corner.length_squared() <= radius * radius {
            reverse.x = true;
            reverse.y = true;
        }
    }

    reverse
}

/// Check the ball against the paddle on its half of the court.
///
/// Skipped entirely while the cool-down is running. Returns true when a hit
/// was registered.
pub fn check_paddle_collision(
    world: &mut World,
    config: &Config,
    cooldown: &mut CollisionCooldown,
    events: &mut Events,
) -> bool {
    // First, collect ball and paddle data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return false, // No ball in world
    };

    let hit = cooldown.is_ready() && {
        let side = config.side_of(ball_pos.x);
        let paddle = world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p);

        match paddle {
            Some(paddle) => {
                let half = config.paddle_half_extents();
                let radius = config.ball_radius();
                let dist = (ball_pos - paddle.pos).abs();

                // Broad phase: inside the paddle grown by the ball radius
                if dist.x <= half.x + radius && dist.y <= half.y + radius {
                    let reverse = narrow_phase(dist, half, radius);
                    if reverse.any() {
                        ball_vel.x = -ball_vel.x;
                        ball_vel.x += config.ball_speed_nudge * ball_vel.x.signum();
                        ball_vel.y += config.paddle_velocity_transfer * paddle.vel;
                        log::debug!(
                            "ball hit {:?} paddle (reverse x: {}, y: {}), new velocity {:?}",
                            side,
                            reverse.x,
                            reverse.y,
                            ball_vel
                        );
                        true
                    } else {
                        false
                    }
                } else {
                    false
                }
            }
            None => false,
        }
    };

    if hit {
        cooldown.register_hit();
        events.ball_hit_paddle = true;
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.vel = ball_vel;
        }
    } else {
        cooldown.tick();
    }

    hit
}
