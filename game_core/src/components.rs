use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,      // Top edge
    pub height: f32, // Base height, or enlarged while trailing
}

impl Paddle {
    pub fn new(side: Side, y: f32, height: f32) -> Self {
        Self { side, y, height }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict point-in-span test on the ball center
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// Ball identity. Only the primary ball is tracked by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallSlot {
    Primary,
    Secondary,
}

/// Ball component
///
/// An inactive ball is skipped by every system but keeps its position and
/// velocity, so it picks up where it left off when reactivated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub slot: BallSlot,
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Ball {
    pub fn new(slot: BallSlot, pos: Vec2, vel: Vec2, active: bool) -> Self {
        Self {
            slot,
            pos,
            vel,
            active,
        }
    }

    /// Ball as it stands when a game opens
    pub fn opening(slot: BallSlot, config: &Config) -> Self {
        let vel = Vec2::new(config.opening_vx, config.opening_vy);
        match slot {
            BallSlot::Primary => Self::new(slot, config.center(), vel, true),
            // Mirrored so the extra ball heads for the player first
            BallSlot::Secondary => Self::new(slot, config.center(), -vel, false),
        }
    }

    /// Re-center with a random serve.
    ///
    /// The serve is not aimed at either side; the horizontal sign is a coin flip.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();
        let dir = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir * config.serve_speed_x, rng.unit() * config.serve_speed_y);
    }

    pub fn left_edge(&self, radius: f32) -> f32 {
        self.pos.x - radius
    }

    pub fn right_edge(&self, radius: f32) -> f32 {
        self.pos.x + radius
    }
}
