use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the court (scoring)
///
/// A ball whose left edge reaches x = 0 is a point for the right side, one
/// whose right edge reaches the court width a point for the left side. The
/// ball is then served again from the court center.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let radius = config.ball_radius();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let conceded = if ball.pos.x - radius <= 0.0 {
            Side::Left
        } else if ball.pos.x + radius >= config.court_width {
            Side::Right
        } else {
            continue;
        };

        let scorer = conceded.opponent();
        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::info!(
            "{:?} scores, {} - {}",
            scorer,
            score.left,
            score.right
        );

        ball.reset(config.court_center(), config.ball_velocity_initial, conceded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events) {
        (hecs::World::new(), Config::new(), Score::new(), Events::new())
    }

    fn ball_of(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        *ball
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 300.0), Vec2::new(-150.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.court_width - 2.0, 300.0),
            Vec2::new(150.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_to_exact_center() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(4.0, 120.0), Vec2::new(-173.0, -12.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(150.0, 150.0));
        assert_eq!(ball.vel.length(), config.ball_velocity_initial.length());
    }

    #[test]
    fn test_serve_after_right_exit_heads_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(805.0, 300.0), Vec2::new(210.0, 40.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, config.court_center());
        assert_eq!(ball.vel, Vec2::new(-150.0, 150.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        let pos = Vec2::new(config.ball_radius() + 0.5, 300.0);
        create_ball(&mut world, pos, Vec2::new(-150.0, 150.0));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert_eq!(events.scored(), None, "No scoring events");
        assert_eq!(ball_of(&world).pos, pos);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(801.0, 300.0), Vec2::new(150.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();

        world.get::<&mut Ball>(ball).unwrap().pos.x = 810.0;
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
