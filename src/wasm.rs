//! WASM bindings for blokus-core
//!
//! Provides a JavaScript-friendly API for the rules engine.

use wasm_bindgen::prelude::*;

use crate::{list_moves, GameState, Move, Player};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a game. Sizes outside the accepted range throw.
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: usize) -> Result<WasmGame, JsError> {
        let inner = GameState::with_board_size(board_size)?;
        Ok(WasmGame { inner })
    }

    /// Board edge length
    #[wasm_bindgen(js_name = boardSize)]
    pub fn board_size(&self) -> usize {
        self.inner.board().size()
    }

    /// Player to move (1-4)
    pub fn turn(&self) -> u8 {
        self.inner.turn() as u8
    }

    #[wasm_bindgen(js_name = passCount)]
    pub fn pass_count(&self) -> u8 {
        self.inner.pass_count()
    }

    #[wasm_bindgen(js_name = isTerminal)]
    pub fn is_terminal(&self) -> bool {
        self.inner.is_terminal()
    }

    /// Row-major cells: 0 empty, 1-4 owner
    pub fn cells(&self) -> Vec<u8> {
        self.inner.board().cells().to_vec()
    }

    /// Piece names left in a player's hand, largest first
    pub fn hand(&self, player: u8) -> Result<Vec<String>, JsError> {
        let player = seat(player)?;
        Ok(self
            .inner
            .hand(player)
            .iter()
            .map(|kind| kind.name().to_string())
            .collect())
    }

    #[wasm_bindgen(js_name = openCornerCount)]
    pub fn open_corner_count(&self, player: u8) -> Result<usize, JsError> {
        Ok(self.inner.open_corner_count(seat(player)?))
    }

    /// Scores for players 1-4
    pub fn scores(&self) -> Vec<i32> {
        self.inner.scores().to_vec()
    }

    /// Get legal placements as an array of move objects
    /// Each move is { type: "place", pieceName, orientation, anchorX, anchorY }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves = list_moves(&self.inner);
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    #[wasm_bindgen(js_name = canMove)]
    pub fn can_move(&self) -> bool {
        self.inner.can_move()
    }

    /// Apply a move object. Returns true if it was legal and applied.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, mov: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<Move>(mov) {
            Ok(mov) => self.inner.apply_move(mov).is_ok(),
            Err(_) => false,
        }
    }

    /// Pass the turn. Returns false once the game is over.
    pub fn pass(&mut self) -> bool {
        self.inner.pass().is_ok()
    }

    /// Board as text, one row per line
    pub fn render(&self) -> String {
        self.inner.board().to_string()
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame {
            inner: self.inner.clone(),
        }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        WasmGame {
            inner: GameState::default(),
        }
    }
}

fn seat(player: u8) -> Result<Player, JsError> {
    Player::from_bits(player).ok_or_else(|| JsError::new(&format!("no player {player}")))
}
