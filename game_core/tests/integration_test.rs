use game_core::*;
use glam::Vec2;

const FRAME_DT: f32 = 1.0 / 60.0;

fn place_ball(game: &mut GameState, pos: Vec2, vel: Vec2) {
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

#[test]
fn test_ball_leaving_left_is_served_from_center() {
    let mut game = GameState::new(Config::new());
    place_ball(&mut game, Vec2::new(4.0, 300.0), Vec2::new(-150.0, 150.0));

    game.update(FRAME_DT);

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(150.0, 150.0));
    assert!(game.events.right_scored);
    assert_eq!(game.score.right, 1);
    assert_eq!(game.score.left, 0);
}

#[test]
fn test_free_flight_is_exact_integration() {
    let mut game = GameState::new(Config::new());
    let vel = Vec2::new(-150.0, 150.0);
    place_ball(&mut game, Vec2::new(300.0, 200.0), vel);

    for _ in 0..20 {
        let before = game.ball_offset();
        game.update(FRAME_DT);
        assert_eq!(game.ball_offset(), before + vel * FRAME_DT);
        assert!(!game.events.ball_hit_wall);
        assert!(!game.events.ball_hit_paddle);
    }
}

#[test]
fn test_wall_bounce_flips_once() {
    let mut game = GameState::new(Config::new());
    let radius = game.config.ball_radius();
    place_ball(&mut game, Vec2::new(400.0, 589.0), Vec2::new(150.0, 150.0));

    let mut flips = 0;
    let mut last_vy = 150.0;
    for _ in 0..30 {
        game.update(FRAME_DT);
        let ball = game.ball().unwrap();
        let outside = ball.pos.y + radius >= game.config.court_height || ball.pos.y - radius <= 0.0;
        assert_eq!(game.events.ball_hit_wall, outside);
        if ball.vel.y != last_vy {
            assert!(outside, "velocity flipped while inside the court");
            flips += 1;
        }
        last_vy = ball.vel.y;
    }

    assert_eq!(flips, 1);
    assert_eq!(last_vy, -150.0);
}

#[test]
fn test_ball_returns_off_left_paddle() {
    let mut game = GameState::new(Config::new());
    // Heading straight at the left paddle's face
    place_ball(&mut game, Vec2::new(100.0, 300.0), Vec2::new(-150.0, 0.0));

    let mut hit_frame = None;
    for frame in 0..60 {
        game.update(FRAME_DT);
        if game.events.ball_hit_paddle {
            hit_frame = Some(frame);
            break;
        }
    }

    assert!(hit_frame.is_some(), "ball never reached the paddle");
    let ball = game.ball().unwrap();
    assert_eq!(ball.vel.x, 150.0 + game.config.ball_speed_nudge);
    assert_eq!(ball.vel.y, 0.0);
    assert_eq!(game.score, Score::new());

    // Flies away without flipping back
    for _ in 0..30 {
        game.update(FRAME_DT);
        assert!(game.ball().unwrap().vel.x > 0.0);
    }
}

#[test]
fn test_moving_paddle_adds_spin() {
    let mut game = GameState::new(Config::new());
    place_ball(&mut game, Vec2::new(60.0, 300.0), Vec2::new(-150.0, 0.0));
    game.set_input(Side::Left, PaddleInput::new(true, false));

    let mut hit = false;
    for _ in 0..60 {
        game.update(FRAME_DT);
        if game.events.ball_hit_paddle {
            hit = true;
            break;
        }
    }

    assert!(hit);
    let expected = game.config.paddle_velocity_transfer * game.config.paddle_speed;
    assert_eq!(game.ball().unwrap().vel.y, expected);
}

#[test]
fn test_sustained_overlap_waits_for_cooldown() {
    let mut game = GameState::new(Config::new());
    let paddle_x = game.config.paddle_x(Side::Left);
    // Slow ball sitting on the paddle face so it stays in contact
    place_ball(&mut game, Vec2::new(paddle_x + 8.0, 300.0), Vec2::new(-0.01, 0.0));

    game.update(FRAME_DT);
    assert!(game.events.ball_hit_paddle);

    let mut quiet_frames = 0;
    loop {
        game.update(FRAME_DT);
        if game.events.ball_hit_paddle {
            break;
        }
        quiet_frames += 1;
        assert!(quiet_frames <= 100, "second hit never registered");
    }

    assert_eq!(quiet_frames, game.config.collision_cooldown_frames);
}

#[test]
fn test_held_input_stops_at_boundary() {
    let mut game = GameState::new(Config::new());
    let limit = game.config.court_height - game.config.paddle_boundary();
    let step = game.config.paddle_speed * FRAME_DT;
    game.set_input(Side::Right, PaddleInput::new(true, false));
    // Keep the ball out of the way
    place_ball(&mut game, Vec2::new(400.0, 300.0), Vec2::ZERO);

    for _ in 0..600 {
        game.update(FRAME_DT);
        let [_, right] = game.paddle_offsets();
        assert!(right.y < limit + step + 1e-3, "paddle at {}", right.y);
    }

    let [left, right] = game.paddle_offsets();
    assert_eq!(left.y, 300.0, "left paddle had no input");
    assert_eq!(game.paddle(Side::Right).unwrap().vel, 0.0);
    assert!(right.y >= limit);
}

#[test]
fn test_long_idle_match_stays_in_court() {
    let mut game = GameState::new(Config::new());
    let center = game.config.court_center();
    let margin = 50.0;

    for _ in 0..5000 {
        game.update(FRAME_DT);
        let pos = game.ball_offset();
        if game.events.scored().is_some() {
            assert_eq!(pos, center, "serve must start at the center");
            assert_eq!(
                game.ball().unwrap().vel.length(),
                game.config.ball_velocity_initial.length()
            );
        }
        assert!(pos.x > -margin && pos.x < game.config.court_width + margin);
        assert!(pos.y > -margin && pos.y < game.config.court_height + margin);
    }

    assert!(game.score.left + game.score.right > 0, "idle paddles should concede");
}
