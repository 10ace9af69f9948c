//! Game state, placement legality and move application.

use log::debug;

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::corners::CornerSet;
use crate::error::{GameError, IllegalMove};
use crate::hand::Hand;
use crate::kind::PieceKind;
use crate::movegen::Move;
use crate::piece::Piece;

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u8 = 4;

/// Penalty for a player who never placed a piece.
pub const NO_PLACEMENT_PENALTY: i32 = 5;

/// Everything one seat owns besides its cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlayerState {
    hand: Hand,
    open_corners: CornerSet,
    last_played: Option<PieceKind>,
}

impl PlayerState {
    fn new(player: Player, board_size: usize) -> PlayerState {
        PlayerState {
            hand: Hand::full(),
            open_corners: CornerSet::seeded(player.start_corner(board_size)),
            last_played: None,
        }
    }

    #[inline]
    pub fn hand(&self) -> Hand {
        self.hand
    }

    #[inline]
    pub fn open_corners(&self) -> &CornerSet {
        &self.open_corners
    }

    #[inline]
    pub fn last_played(&self) -> Option<PieceKind> {
        self.last_played
    }

    /// `-(cells left in hand)`, minus the no-placement penalty.
    pub fn score(&self) -> i32 {
        let remaining = self.hand.total_size() as i32;
        let penalty = if self.last_played.is_none() {
            NO_PLACEMENT_PENALTY
        } else {
            0
        };
        -remaining - penalty
    }
}

/// Full game: the board, four seats, whose turn it is and the pass streak.
///
/// Only [`apply_move`](Self::apply_move) and [`pass`](Self::pass) mutate it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    players: [PlayerState; 4],
    turn: Player,
    pass_count: u8,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<GameState, GameError> {
        config.validate()?;
        Ok(GameState::fresh(config.board_size))
    }

    pub fn with_board_size(board_size: usize) -> Result<GameState, GameError> {
        GameState::new(&GameConfig::new(board_size))
    }

    fn fresh(size: usize) -> GameState {
        GameState {
            board: Board::new(size),
            players: Player::ALL.map(|player| PlayerState::new(player, size)),
            turn: Player::One,
            pass_count: 0,
        }
    }

    // ========== Accessors ==========

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    #[inline]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    #[inline]
    pub fn hand(&self, player: Player) -> Hand {
        self.player(player).hand
    }

    #[inline]
    pub fn open_corners(&self, player: Player) -> &CornerSet {
        &self.player(player).open_corners
    }

    #[inline]
    pub fn open_corner_count(&self, player: Player) -> usize {
        self.player(player).open_corners.len()
    }

    #[inline]
    pub fn last_played(&self, player: Player) -> Option<PieceKind> {
        self.player(player).last_played
    }

    /// Four passes in a row end the game.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.pass_count >= PASSES_TO_END
    }

    /// Per-seat scores, indexed by `Player::index`.
    pub fn scores(&self) -> [i32; 4] {
        Player::ALL.map(|player| self.player(player).score())
    }

    // ========== Legality ==========

    /// Geometric legality of `piece` for the player to move: every cell on
    /// the board and empty, and no cell edge-adjacent to the mover's color.
    ///
    /// Diagonal contact is checked separately, see
    /// [`has_corner_contact`](Self::has_corner_contact).
    pub fn check_placement(&self, piece: &Piece) -> Result<(), IllegalMove> {
        self.check_cells(piece.shape().iter().copied(), self.turn)
    }

    #[inline]
    pub fn is_legal_placement(&self, piece: &Piece) -> bool {
        self.check_placement(piece).is_ok()
    }

    /// True when some corner of `piece` meets one of the mover's open corners.
    #[inline]
    pub fn has_corner_contact(&self, piece: &Piece) -> bool {
        self.open_corners(self.turn).touches(piece.corners())
    }

    pub(crate) fn check_cells<I>(&self, cells: I, mover: Player) -> Result<(), IllegalMove>
    where
        I: Iterator<Item = Coord> + Clone,
    {
        for cell in cells.clone() {
            if !self.board.contains(cell) {
                return Err(IllegalMove::OffBoard(cell));
            }
            if !self.board.is_empty(cell) {
                return Err(IllegalMove::Occupied(cell));
            }
        }
        // Every cell is empty now, so a neighbour owned by the mover can
        // never be part of the piece itself.
        for cell in cells {
            if cell.neighbors().into_iter().any(|n| self.board.get(n) == Some(mover)) {
                return Err(IllegalMove::EdgeContact(cell));
            }
        }
        Ok(())
    }

    // ========== Moves ==========

    /// Validate the move completely, then apply it.
    ///
    /// A rejected move leaves the state untouched.
    pub fn apply_move(&mut self, mov: Move) -> Result<(), GameError> {
        if self.is_terminal() {
            debug!("rejected {mov:?}: game is over");
            return Err(GameError::GameOver);
        }
        let (kind, orientation, anchor) = match mov {
            Move::Pass => return self.pass(),
            Move::Place {
                kind,
                orientation,
                x,
                y,
            } => (kind, orientation, Coord::new(x, y)),
        };

        // Any on-board placement has its bounding-box minimum on the board.
        if !self.board.contains(anchor) {
            debug!("rejected {mov:?} for player {:?}: anchor off board", self.turn);
            return Err(IllegalMove::OffBoard(anchor).into());
        }
        let piece = Piece::placed(kind, orientation, anchor);
        if let Err(err) = self.validate_placement(&piece) {
            debug!("rejected {mov:?} for player {:?}: {err}", self.turn);
            return Err(err.into());
        }
        self.place(piece);
        Ok(())
    }

    /// Give up the turn.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.pass_count += 1;
        self.turn = self.turn.next();
        if self.is_terminal() {
            debug!("game over, scores {:?}", self.scores());
        }
        Ok(())
    }

    fn validate_placement(&self, piece: &Piece) -> Result<(), IllegalMove> {
        if !self.hand(self.turn).contains(piece.kind()) {
            return Err(IllegalMove::NotInHand(piece.kind()));
        }
        if !self.has_corner_contact(piece) {
            return Err(IllegalMove::NoCornerContact);
        }
        self.check_placement(piece)
    }

    fn place(&mut self, piece: Piece) {
        let mover = self.turn;
        for &cell in piece.shape() {
            self.board.set(cell, mover);
        }

        let state = &mut self.players[mover.index()];
        state.open_corners.absorb(piece.corners(), &self.board);
        state.hand.remove(piece.kind());
        state.last_played = Some(piece.kind());

        self.pass_count = 0;
        self.turn = mover.next();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::fresh(GameConfig::default().board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    fn place(kind: PieceKind, orientation: Orientation, x: i32, y: i32) -> Move {
        Move::place(kind, orientation, Coord::new(x, y))
    }

    #[test]
    fn test_new_game() {
        let game = GameState::default();
        assert_eq!(game.board().size(), 20);
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.pass_count(), 0);
        assert!(!game.is_terminal());
        for player in Player::ALL {
            assert_eq!(game.hand(player).len(), 21);
            assert_eq!(game.open_corner_count(player), 1);
            assert_eq!(game.last_played(player), None);
            assert!(game.open_corners(player).contains(&player.start_corner(20)));
        }
    }

    #[test]
    fn test_new_rejects_bad_size() {
        assert_eq!(
            GameState::with_board_size(0),
            Err(GameError::InvalidBoardSize(0))
        );
        assert_eq!(GameState::with_board_size(14).unwrap().board().size(), 14);
    }

    #[test]
    fn test_place_monomino_in_corner() {
        let mut game = GameState::default();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();

        assert_eq!(game.board().get(Coord::new(0, 0)), Some(Player::One));
        assert!(!game.hand(Player::One).contains(PieceKind::One));
        assert_eq!(game.hand(Player::One).len(), 20);
        assert_eq!(game.pass_count(), 0);
        assert_eq!(game.turn(), Player::Two);
        assert_eq!(game.last_played(Player::One), Some(PieceKind::One));
        assert_eq!(game.open_corner_count(Player::One), 1);
    }

    #[test]
    fn test_overlap_rejected_without_mutation() {
        let mut game = GameState::with_board_size(20).unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        let before = game.clone();

        let result = game.apply_move(place(PieceKind::One, Orientation::North, 0, 0));
        assert!(matches!(result, Err(GameError::IllegalMove(_))));
        assert_eq!(game, before);
    }

    #[test]
    fn test_overlap_reported_as_occupied() {
        // A 1x1 board: player one fills it, player two shares the same corner cell.
        let mut game = GameState::with_board_size(1).unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        assert_eq!(
            game.apply_move(place(PieceKind::One, Orientation::North, 0, 0)),
            Err(GameError::IllegalMove(IllegalMove::Occupied(Coord::new(0, 0))))
        );
    }

    #[test]
    fn test_first_move_must_cover_start_corner() {
        let mut game = GameState::default();
        // Orthogonally adjacent to (0,0) but not covering it.
        let result = game.apply_move(place(PieceKind::One, Orientation::North, 1, 0));
        assert_eq!(
            result,
            Err(GameError::IllegalMove(IllegalMove::NoCornerContact))
        );
        let result = game.apply_move(place(PieceKind::Two, Orientation::North, 0, 1));
        assert_eq!(
            result,
            Err(GameError::IllegalMove(IllegalMove::NoCornerContact))
        );
        assert_eq!(game, GameState::default());
    }

    #[test]
    fn test_not_in_hand() {
        let mut game = GameState::default();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        for _ in 0..3 {
            game.pass().unwrap();
        }
        assert_eq!(game.turn(), Player::One);
        assert_eq!(
            game.apply_move(place(PieceKind::One, Orientation::North, 1, 1)),
            Err(GameError::IllegalMove(IllegalMove::NotInHand(PieceKind::One)))
        );
    }

    #[test]
    fn test_edge_contact_rejected() {
        let mut game = GameState::default();
        game.apply_move(place(PieceKind::I4, Orientation::North, 0, 0))
            .unwrap();
        for _ in 0..3 {
            game.pass().unwrap();
        }
        // The only open corner is (0,3) -> (1,4). This U reaches it
        // diagonally but its top arm sits right beside (0,2).
        let result = game.apply_move(place(PieceKind::U, Orientation::West, 1, 2));
        assert_eq!(
            result,
            Err(GameError::IllegalMove(IllegalMove::EdgeContact(Coord::new(1, 2))))
        );
        // Diagonal only is fine.
        game.apply_move(place(PieceKind::One, Orientation::North, 1, 4))
            .unwrap();
        assert_eq!(game.board().count(Player::One), 5);
        assert_eq!(game.pass_count(), 0);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_placement_after_three_passes_resets() {
        let mut game = GameState::default();
        for _ in 0..3 {
            game.pass().unwrap();
        }
        assert_eq!(game.pass_count(), 3);
        assert_eq!(game.turn(), Player::Four);
        game.apply_move(place(PieceKind::One, Orientation::North, 19, 0))
            .unwrap();
        assert_eq!(game.pass_count(), 0);
        assert!(!game.is_terminal());
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn test_extreme_anchor_rejected() {
        let mut game = GameState::default();
        let before = game.clone();
        for (x, y) in [(0, i32::MAX), (i32::MIN, 0), (i32::MAX, i32::MAX), (-1, 0)] {
            let result = game.apply_move(place(PieceKind::I, Orientation::North, x, y));
            assert_eq!(
                result,
                Err(GameError::IllegalMove(IllegalMove::OffBoard(Coord::new(x, y))))
            );
            assert_eq!(game, before);
        }
    }

    #[test]
    fn test_off_board_rejected() {
        let mut game = GameState::with_board_size(3).unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        for _ in 0..3 {
            game.pass().unwrap();
        }
        let before = game.clone();
        let result = game.apply_move(place(PieceKind::I3, Orientation::West, 1, 1));
        assert_eq!(
            result,
            Err(GameError::IllegalMove(IllegalMove::OffBoard(Coord::new(3, 1))))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_pass_count_resets_on_placement() {
        let mut game = GameState::default();
        game.apply_move(Move::Pass).unwrap();
        game.apply_move(Move::Pass).unwrap();
        assert_eq!(game.pass_count(), 2);
        assert_eq!(game.turn(), Player::Three);

        game.apply_move(place(PieceKind::One, Orientation::North, 19, 19))
            .unwrap();
        assert_eq!(game.pass_count(), 0);
        assert_eq!(game.turn(), Player::Four);
    }

    #[test]
    fn test_terminal_after_four_passes() {
        let mut game = GameState::default();
        for i in 0..4 {
            assert!(!game.is_terminal(), "terminal after {i} passes");
            game.pass().unwrap();
        }
        assert!(game.is_terminal());
        assert_eq!(game.pass(), Err(GameError::GameOver));
        assert_eq!(
            game.apply_move(place(PieceKind::One, Orientation::North, 0, 0)),
            Err(GameError::GameOver)
        );
        assert_eq!(game.pass_count(), 4);
    }

    #[test]
    fn test_players_use_their_own_corner() {
        let mut game = GameState::default();
        // Player one may not start in player two's corner.
        assert!(game
            .apply_move(place(PieceKind::One, Orientation::North, 0, 19))
            .is_err());
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 19))
            .unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 19, 19))
            .unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 19, 0))
            .unwrap();
        assert_eq!(game.board().occupied(), 4);
        for player in Player::ALL {
            assert_eq!(game.board().count(player), 1);
            assert_eq!(game.open_corner_count(player), 1);
        }
    }

    #[test]
    fn test_other_colors_may_share_edges() {
        let mut game = GameState::with_board_size(2).unwrap();
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        // Player two's corner (0,1) sits right below player one's cell.
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 1))
            .unwrap();
        assert_eq!(game.board().get(Coord::new(0, 1)), Some(Player::Two));
    }

    #[test]
    fn test_noncanonical_orientation_is_accepted() {
        let mut game = GameState::default();
        // South is a half turn of I4, congruent to North.
        game.apply_move(place(PieceKind::I4, Orientation::South, 0, 0))
            .unwrap();
        for y in 0..4 {
            assert_eq!(game.board().get(Coord::new(0, y)), Some(Player::One));
        }
    }

    #[test]
    fn test_scores() {
        let mut game = GameState::default();
        assert_eq!(game.scores(), [-94; 4]);
        game.apply_move(place(PieceKind::One, Orientation::North, 0, 0))
            .unwrap();
        assert_eq!(game.scores(), [-88, -94, -94, -94]);
        assert_eq!(game.player(Player::One).score(), -88);
    }
}
