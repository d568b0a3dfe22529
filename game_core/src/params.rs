/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (origin bottom-left)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 250.0; // units per second
    pub const PADDLE_INSET: f32 = 35.0; // center x distance from the side wall

    // Ball
    pub const BALL_DIAMETER: f32 = 10.0;
    pub const BALL_VELOCITY_INITIAL: [f32; 2] = [150.0, 150.0];

    // Paddle hit response
    pub const COLLISION_COOLDOWN_FRAMES: u32 = 10;
    pub const BALL_SPEED_NUDGE: f32 = 10.0; // added to |vx| on every paddle hit
    pub const PADDLE_VELOCITY_TRANSFER: f32 = 0.5; // share of paddle vy given to the ball

    // Score (0 = endless)
    pub const WIN_SCORE: u8 = 0;

    // Host frame timing
    pub const MAX_FRAME_DT: f32 = 0.1; // Clamp to prevent large jumps
}
