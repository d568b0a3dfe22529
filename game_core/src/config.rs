use crate::{Params, Side};
use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

/// Game configuration
///
/// Every field is optional when loaded from TOML; missing fields fall back
/// to the [`Params`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_diameter: f32,
    pub ball_velocity_initial: Vec2,
    pub collision_cooldown_frames: u32,
    pub ball_speed_nudge: f32,
    pub paddle_velocity_transfer: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_diameter: Params::BALL_DIAMETER,
            ball_velocity_initial: Vec2::from_array(Params::BALL_VELOCITY_INITIAL),
            collision_cooldown_frames: Params::COLLISION_COOLDOWN_FRAMES,
            ball_speed_nudge: Params::BALL_SPEED_NUDGE,
            paddle_velocity_transfer: Params::PADDLE_VELOCITY_TRANSFER,
            win_score: Params::WIN_SCORE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with a different court size
    pub fn with_court_size(mut self, width: f32, height: f32) -> Self {
        self.court_width = width;
        self.court_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_inset", self.paddle_inset),
            ("ball_diameter", self.ball_diameter),
            ("ball_velocity_initial.x", self.ball_velocity_initial.x),
            ("ball_velocity_initial.y", self.ball_velocity_initial.y),
            ("ball_speed_nudge", self.ball_speed_nudge),
            ("paddle_velocity_transfer", self.paddle_velocity_transfer),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }

        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_diameter", self.ball_diameter),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_speed < 0.0 || self.ball_speed_nudge < 0.0 {
            return Err(ConfigError::Invalid(
                "speeds must not be negative".to_string(),
            ));
        }

        if self.ball_diameter >= self.court_width.min(self.court_height) {
            return Err(ConfigError::Invalid(format!(
                "ball diameter {} does not fit a {}x{} court",
                self.ball_diameter, self.court_width, self.court_height
            )));
        }

        if self.paddle_height + self.ball_diameter > self.court_height {
            return Err(ConfigError::Invalid(format!(
                "paddle height {} leaves no room to move in a court {} high",
                self.paddle_height, self.court_height
            )));
        }

        if self.paddle_inset <= 0.0 || self.paddle_inset >= self.court_width / 2.0 {
            return Err(ConfigError::Invalid(format!(
                "paddle inset {} must lie inside one half of the court",
                self.paddle_inset
            )));
        }

        Ok(())
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    pub fn paddle_half_extents(&self) -> Vec2 {
        Vec2::new(self.paddle_width / 2.0, self.paddle_height / 2.0)
    }

    /// Distance from the court's top or bottom that a paddle center may not cross
    pub fn paddle_boundary(&self) -> f32 {
        self.paddle_height / 2.0 + self.ball_radius()
    }

    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.court_width - self.paddle_inset,
        }
    }

    /// Side of the court the given x position falls in
    pub fn side_of(&self, x: f32) -> Side {
        if x < self.court_width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}
