use glam::Vec2;

/// One of the two court sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// 0 = left, 1 = right
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // center
    pub vel: f32,  // y axis only, set from input every frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self { side, pos, vel: 0.0 }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from `center` away from the side that conceded.
    ///
    /// `conceded` is the side whose wall the ball crossed. A ball lost on the
    /// left is served with +x, one lost on the right with -x.
    pub fn reset(&mut self, center: Vec2, initial_vel: Vec2, conceded: Side) {
        self.pos = center;
        let vx = initial_vel.x.abs();
        self.vel = match conceded {
            Side::Left => Vec2::new(vx, initial_vel.y),
            Side::Right => Vec2::new(-vx, initial_vel.y),
        };
    }
}

/// Key state for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }
}
