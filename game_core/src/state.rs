use crate::{
    create_ball, create_paddle, step, Ball, CollisionCooldown, Config, Events, Paddle,
    PaddleInput, Score, Side, Time,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Everything one Pong match needs between frames
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub time: Time,
    pub score: Score,
    pub events: Events,
    pub cooldown: CollisionCooldown,
    pub inputs: [PaddleInput; 2],
    paddles: [Entity; 2],
    ball: Entity,
}

impl GameState {
    /// Both paddles centered vertically, ball at court center with the initial velocity
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let paddles = Side::BOTH.map(|side| create_paddle(&mut world, side, spawn_pos(&config, side)));
        let ball = create_ball(&mut world, config.court_center(), config.ball_velocity_initial);
        let cooldown = CollisionCooldown::new(config.collision_cooldown_frames);

        Self {
            world,
            config,
            time: Time::new(0.0, 0.0),
            score: Score::new(),
            events: Events::new(),
            cooldown,
            inputs: [PaddleInput::default(); 2],
            paddles,
            ball,
        }
    }

    pub fn set_input(&mut self, side: Side, input: PaddleInput) {
        self.inputs[side.index()] = input;
    }

    /// Run one frame. Does nothing once a winner is decided.
    pub fn update(&mut self, dt: f32) {
        if self.winner().is_some() {
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &self.inputs,
            &mut self.score,
            &mut self.events,
            &mut self.cooldown,
        );

        if let Some(winner) = self.winner() {
            log::info!(
                "{:?} wins {} - {}",
                winner,
                self.score.left,
                self.score.right
            );
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    /// Back to the opening position with a fresh score
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddles[side.index()])
            .ok()
            .map(|paddle| *paddle)
    }

    /// Paddle centers, left then right, for the per-instance offset buffer
    pub fn paddle_offsets(&self) -> [Vec2; 2] {
        Side::BOTH.map(|side| {
            self.paddle(side)
                .map(|p| p.pos)
                .unwrap_or_else(|| spawn_pos(&self.config, side))
        })
    }

    /// Ball center for the per-instance offset buffer
    pub fn ball_offset(&self) -> Vec2 {
        self.ball()
            .map(|b| b.pos)
            .unwrap_or_else(|| self.config.court_center())
    }
}

fn spawn_pos(config: &Config, side: Side) -> Vec2 {
    Vec2::new(config.paddle_x(side), config.court_height / 2.0)
}
