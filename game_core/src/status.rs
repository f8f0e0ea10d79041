//! Game status machine
//!
//! `Playing` until a side reaches the winning score, then `Over` until a
//! restart is processed.

use serde::{Deserialize, Serialize};

use crate::Side;

/// Game status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Over(Side),
}

/// Actions that trigger status transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Win(Side),
    Restart,
}

/// Result of a status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameStatus,
    pub to_state: GameStatus,
    pub action: StatusAction,
}

impl GameStatus {
    /// Attempt a transition; invalid ones leave the status unchanged
    pub fn transition(&mut self, action: StatusAction) -> TransitionResult {
        let from_state = *self;
        match self.next_state(action) {
            Some(next_state) => {
                *self = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: StatusAction) -> Option<GameStatus> {
        match (*self, action) {
            (GameStatus::Playing, StatusAction::Win(side)) => Some(GameStatus::Over(side)),
            (GameStatus::Over(_), StatusAction::Restart) => Some(GameStatus::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::Over(side) => Some(*side),
            GameStatus::Playing => None,
        }
    }
}
