use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Params, Side};

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration
///
/// Every field falls back to its `Params` value, so a host may override
/// only the playfield size and leave the rest alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub trailing_paddle_scale: f32,
    pub ball_radius: f32,
    pub opening_vx: f32,
    pub opening_vy: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub deflection_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub win_score: u32,
    pub imbalance_gap: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::PLAYFIELD_WIDTH,
            height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            trailing_paddle_scale: Params::TRAILING_PADDLE_SCALE,
            ball_radius: Params::BALL_RADIUS,
            opening_vx: Params::OPENING_VX,
            opening_vy: Params::OPENING_VY,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            deflection_speed: Params::DEFLECTION_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
            imbalance_gap: Params::IMBALANCE_GAP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with the given playfield size and default tuning
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// X of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.width - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge so a paddle of `height` stays on the playfield
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        y.max(0.0).min(self.height - height)
    }

    /// Top edge that vertically centers a base-height paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
