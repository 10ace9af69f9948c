//! Players and the ownership grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Corner};

/// Player identifier, doubling as the color of the cells they own.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Player {
    /// Seating order.
    pub const ALL: [Player; 4] = [Player::One, Player::Two, Player::Three, Player::Four];

    /// The player who moves after this one.
    #[inline]
    pub fn next(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::Three,
            Player::Three => Player::Four,
            Player::Four => Player::One,
        }
    }

    /// Convert from u8 (1-4) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            3 => Some(Player::Three),
            4 => Some(Player::Four),
            _ => None,
        }
    }

    /// Zero-based seat index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The synthetic open corner a fresh game seeds for this player: an
    /// off-board interior pointing at the player's board corner.
    pub fn start_corner(self, board_size: usize) -> Corner {
        let n = board_size as i32;
        let (interior, exterior) = match self {
            Player::One => (Coord::new(-1, -1), Coord::new(0, 0)),
            Player::Two => (Coord::new(-1, n), Coord::new(0, n - 1)),
            Player::Three => (Coord::new(n, n), Coord::new(n - 1, n - 1)),
            Player::Four => (Coord::new(n, -1), Coord::new(n - 1, 0)),
        };
        Corner::new(interior, exterior)
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(bits: u8) -> Result<Player, String> {
        Player::from_bits(bits).ok_or_else(|| format!("player {bits} outside 1..=4"))
    }
}

/// Square ownership grid, row-major. Each cell holds 0 (empty) or the owning
/// player's number (1-4).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    pub fn new(size: usize) -> Board {
        Board {
            size,
            cells: vec![0; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.size + c.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.size && (c.y as usize) < self.size
    }

    /// Owner of `c`; `None` when empty or off the board.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Player> {
        self.index(c).and_then(|i| Player::from_bits(self.cells[i]))
    }

    /// On the board and unowned.
    #[inline]
    pub fn is_empty(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.cells[i] == 0)
    }

    /// Claim an empty cell. Owned cells are never overwritten.
    pub(crate) fn set(&mut self, c: Coord, player: Player) {
        if let Some(i) = self.index(c) {
            debug_assert_eq!(self.cells[i], 0, "cell {c} already owned");
            if self.cells[i] == 0 {
                self.cells[i] = player as u8;
            }
        }
    }

    /// Raw row-major cell values (0 empty, 1-4 owner).
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&v| v == player as u8).count()
    }

    /// Number of owned cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Iterate over every on-board coordinate, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row
                .iter()
                .map(|&v| match v {
                    0 => '.',
                    v => char::from(b'0' + v),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_next_cycles() {
        assert_eq!(Player::One.next(), Player::Two);
        assert_eq!(Player::Two.next(), Player::Three);
        assert_eq!(Player::Three.next(), Player::Four);
        assert_eq!(Player::Four.next(), Player::One);
    }

    #[test]
    fn test_player_bits_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_bits(player as u8), Some(player));
            assert_eq!(Player::ALL[player.index()], player);
        }
        assert_eq!(Player::from_bits(0), None);
        assert_eq!(Player::from_bits(5), None);
    }

    #[test]
    fn test_start_corners_point_inward() {
        let n = 20;
        let board = Board::new(n);
        for player in Player::ALL {
            let corner = player.start_corner(n);
            assert!(!board.contains(corner.interior), "{player:?}");
            assert!(board.contains(corner.exterior), "{player:?}");
        }
        assert_eq!(Player::Two.start_corner(n).exterior, Coord::new(0, 19));
        assert_eq!(Player::Three.start_corner(n).exterior, Coord::new(19, 19));
        assert_eq!(Player::Four.start_corner(n).exterior, Coord::new(19, 0));
    }

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.cells().len(), 25);
        assert_eq!(board.occupied(), 0);
        assert!(board.coords().all(|c| board.is_empty(c)));
        assert_eq!(board.coords().count(), 25);
    }

    #[test]
    fn test_contains() {
        let board = Board::new(4);
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(3, 3)));
        assert!(!board.contains(Coord::new(4, 0)));
        assert!(!board.contains(Coord::new(0, -1)));
        assert!(!board.is_empty(Coord::new(-1, 2)));
        assert_eq!(board.get(Coord::new(9, 9)), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(4);
        board.set(Coord::new(1, 2), Player::Three);
        assert_eq!(board.get(Coord::new(1, 2)), Some(Player::Three));
        assert!(!board.is_empty(Coord::new(1, 2)));
        assert_eq!(board.cells()[2 * 4 + 1], 3);
        assert_eq!(board.count(Player::Three), 1);
        assert_eq!(board.count(Player::One), 0);
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.set(Coord::new(0, 0), Player::One);
        board.set(Coord::new(2, 1), Player::Four);
        assert_eq!(board.to_string(), "1..\n..4\n...\n");
    }

    #[test]
    fn test_player_serde() {
        assert_eq!(serde_json::to_string(&Player::Three).unwrap(), "3");
        let p: Player = serde_json::from_str("2").unwrap();
        assert_eq!(p, Player::Two);
        assert!(serde_json::from_str::<Player>("7").is_err());
    }
}
