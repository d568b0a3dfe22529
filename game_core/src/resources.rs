use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
    pub frame: u64,
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now, frame: 0 }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
            frame: 0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// `win_score` of 0 means the match never ends
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if win_score == 0 {
            None
        } else if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Frames elapsed since the ball last registered a paddle hit.
///
/// Paddle collision is only tested once `frames >= threshold`, so a ball
/// that stays in contact with a paddle cannot flip its velocity every frame.
#[derive(Debug, Clone, Copy)]
pub struct CollisionCooldown {
    pub frames: u32,
    pub threshold: u32,
}

impl CollisionCooldown {
    /// Starts ready to register a hit
    pub fn new(threshold: u32) -> Self {
        Self {
            frames: threshold,
            threshold,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.frames >= self.threshold
    }

    pub fn register_hit(&mut self) {
        self.frames = 0;
    }

    pub fn tick(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score.right, 2);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Right);
        }
        assert_eq!(
            score.has_winner(5),
            Some(Side::Right),
            "Right player should win at 5"
        );
        assert_eq!(score.has_winner(6), None, "No winner below threshold");
    }

    #[test]
    fn test_score_endless_has_no_winner() {
        let mut score = Score::new();
        for _ in 0..200 {
            score.increment(Side::Left);
        }
        assert_eq!(score.has_winner(0), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_cooldown_starts_ready() {
        let cooldown = CollisionCooldown::new(10);
        assert!(cooldown.is_ready());
    }

    #[test]
    fn test_cooldown_blocks_for_threshold_ticks() {
        let mut cooldown = CollisionCooldown::new(10);
        cooldown.register_hit();
        for _ in 0..10 {
            assert!(!cooldown.is_ready());
            cooldown.tick();
        }
        assert!(cooldown.is_ready());
    }
}
