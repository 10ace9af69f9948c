//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Standard four-player board edge.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Largest accepted board edge.
pub const MAX_BOARD_SIZE: usize = 256;

/// Parameters fixed for the lifetime of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub board_size: usize,
}

impl GameConfig {
    pub fn new(board_size: usize) -> GameConfig {
        GameConfig { board_size }
    }

    /// Reject board sizes the engine cannot address.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}
