//! Board state and the press rule.
//!
//! A [`Board`] stores the on/off state of all 25 tiles as a bit set, where bit
//! `row * 5 + col` is set when the tile is on. The text form produced by
//! [`Display`](std::fmt::Display) and accepted by [`FromStr`] is the board-file
//! layout: five rows of five `0`/`1` tiles.

use std::{fmt, str::FromStr};

use crate::position::{BOARD_SIZE, Position, TILE_COUNT};

const FULL_MASK: u32 = (1 << TILE_COUNT) - 1;

const PRESS_MASKS: [u32; TILE_COUNT] = {
    let mut masks = [0; TILE_COUNT];
    let mut i = 0;
    while i < TILE_COUNT {
        let pos = Position::from_index(i);
        let mut mask = 1 << i;
        if let Some(p) = pos.up() {
            mask |= 1 << p.index();
        }
        if let Some(p) = pos.down() {
            mask |= 1 << p.index();
        }
        if let Some(p) = pos.left() {
            mask |= 1 << p.index();
        }
        if let Some(p) = pos.right() {
            mask |= 1 << p.index();
        }
        masks[i] = mask;
        i += 1;
    }
    masks
};

/// The on/off state of every tile on a 5×5 board.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Board, Position};
///
/// let board: Board = "
///     0 0 0 0 0
///     0 0 1 0 0
///     0 1 1 1 0
///     0 0 1 0 0
///     0 0 0 0 0
/// "
/// .parse()?;
///
/// // Pressing the centre clears the cross.
/// assert!(board.pressed(Position::new(2, 2)).is_all_off());
/// # Ok::<(), lightsout_core::BoardParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    bits: u32,
}

impl Board {
    /// A board with every tile off (the solved state).
    pub const ALL_OFF: Self = Self { bits: 0 };

    /// A board with every tile on.
    pub const ALL_ON: Self = Self { bits: FULL_MASK };

    /// Creates a board from its bit representation.
    ///
    /// Returns `None` if any bit above bit 24 is set.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !FULL_MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Creates a board from its bit representation, dropping bits above bit 24.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    /// Returns the bit representation of the board.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns the bit mask of tiles flipped by pressing `pos`.
    #[must_use]
    pub const fn press_mask(pos: Position) -> u32 {
        PRESS_MASKS[pos.index()]
    }

    /// Returns the board obtained by pressing every position in `presses`,
    /// starting from the all-off board.
    ///
    /// Pressing the same tile twice cancels out.
    #[must_use]
    pub fn from_presses<I>(presses: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut board = Self::ALL_OFF;
        for pos in presses {
            board.press(pos);
        }
        board
    }

    /// Returns `true` if the tile at `pos` is on.
    #[must_use]
    pub const fn is_on(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Turns the tile at `pos` on or off.
    pub const fn set(&mut self, pos: Position, on: bool) {
        if on {
            self.bits |= 1 << pos.index();
        } else {
            self.bits &= !(1 << pos.index());
        }
    }

    /// Flips the single tile at `pos`, leaving its neighbours alone.
    pub const fn flip(&mut self, pos: Position) {
        self.bits ^= 1 << pos.index();
    }

    /// Presses the tile at `pos`, flipping it and its orthogonal neighbours.
    pub const fn press(&mut self, pos: Position) {
        self.bits ^= Self::press_mask(pos);
    }

    /// Returns a copy of the board with `pos` pressed.
    #[must_use]
    pub const fn pressed(mut self, pos: Position) -> Self {
        self.press(pos);
        self
    }

    /// Returns the number of tiles that are on.
    #[must_use]
    pub const fn lit_count(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if every tile is off.
    #[must_use]
    pub const fn is_all_off(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the positions of tiles that are on, in row-major order.
    pub fn lit_positions(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |&pos| self.is_on(pos))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let tile = if self.is_on(Position::new(row, col)) {
                    "1"
                } else {
                    "0"
                };
                f.write_str(tile)?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Board`] from text.
///
/// Line numbers are 1-based and count every line of the input, including
/// skipped blank and comment lines.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A tile was neither `0` nor `1`.
    #[display("invalid tile {ch:?} on line {line}")]
    InvalidTile {
        /// Line containing the character.
        line: usize,
        /// The offending character.
        ch: char,
    },
    /// A row did not contain exactly five tiles.
    #[display("line {line} has {count} tiles, expected 5")]
    WrongRowLength {
        /// Line containing the row.
        line: usize,
        /// Number of tiles found.
        count: usize,
    },
    /// The input did not contain exactly five rows.
    #[display("board has {count} rows, expected 5")]
    WrongRowCount {
        /// Number of rows found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::ALL_OFF;
        let mut row_count = 0;

        for (line_index, line) in s.lines().enumerate() {
            let line_no = line_index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut count = 0;
            for ch in trimmed.chars().filter(|ch| !matches!(ch, ' ' | '\t')) {
                let on = match ch {
                    '0' => false,
                    '1' => true,
                    _ => return Err(BoardParseError::InvalidTile { line: line_no, ch }),
                };
                // Out-of-range tiles are reported after the row is counted.
                if let Some(pos) = Position::try_new(row_count, count) {
                    board.set(pos, on);
                }
                count += 1;
            }
            if count != usize::from(BOARD_SIZE) {
                return Err(BoardParseError::WrongRowLength {
                    line: line_no,
                    count,
                });
            }
            row_count += 1;
        }

        if row_count != usize::from(BOARD_SIZE) {
            return Err(BoardParseError::WrongRowCount { count: row_count });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CROSS: &str = "\
0 0 0 0 0
0 0 1 0 0
0 1 1 1 0
0 0 1 0 0
0 0 0 0 0";

    #[test]
    fn test_press_center_flips_cross() {
        let board = Board::ALL_OFF.pressed(Position::new(2, 2));
        let lit: Vec<_> = board.lit_positions().collect();
        assert_eq!(
            lit,
            vec![
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_press_corner_flips_three() {
        let board = Board::ALL_OFF.pressed(Position::new(0, 0));
        assert_eq!(board.lit_count(), 3);
        assert!(board.is_on(Position::new(0, 0)));
        assert!(board.is_on(Position::new(0, 1)));
        assert!(board.is_on(Position::new(1, 0)));
    }

    #[test]
    fn test_flip_only_touches_one_tile() {
        let mut board = Board::ALL_OFF;
        board.flip(Position::new(3, 3));
        assert_eq!(board.lit_count(), 1);
        assert!(board.is_on(Position::new(3, 3)));
    }

    #[test]
    fn test_set_and_is_on() {
        let mut board = Board::ALL_OFF;
        board.set(Position::new(4, 4), true);
        assert!(board.is_on(Position::new(4, 4)));
        board.set(Position::new(4, 4), false);
        assert!(board.is_all_off());
    }

    #[test]
    fn test_from_bits_rejects_high_bits() {
        assert!(Board::from_bits(1 << 25).is_none());
        assert_eq!(Board::from_bits(FULL_MASK), Some(Board::ALL_ON));
        assert_eq!(Board::from_bits_truncate(u32::MAX), Board::ALL_ON);
    }

    #[test]
    fn test_display_matches_file_layout() {
        let board = Board::ALL_OFF.pressed(Position::new(2, 2));
        assert_eq!(board.to_string(), CROSS);
    }

    #[test]
    fn test_parse_cross() {
        let board: Board = CROSS.parse().unwrap();
        assert_eq!(board, Board::ALL_OFF.pressed(Position::new(2, 2)));
    }

    #[test]
    fn test_parse_compact_rows_and_comments() {
        let text = "# corners\n\n10001\n00000\n00000\n00000\n10001\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.lit_count(), 4);
        assert!(board.is_on(Position::new(0, 0)));
        assert!(board.is_on(Position::new(4, 4)));
    }

    #[test]
    fn test_parse_invalid_tile() {
        let text = "00000\n00x00\n00000\n00000\n00000";
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::InvalidTile { line: 2, ch: 'x' })
        );
    }

    #[test]
    fn test_parse_wrong_row_length() {
        let text = "00000\n0000\n00000\n00000\n00000";
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::WrongRowLength { line: 2, count: 4 })
        );
        let text = "000000\n00000\n00000\n00000\n00000";
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::WrongRowLength { line: 1, count: 6 })
        );
    }

    #[test]
    fn test_parse_wrong_row_count() {
        let text = "00000\n00000\n00000\n00000";
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::WrongRowCount { count: 4 })
        );
        let text = "00000\n00000\n00000\n00000\n00000\n00000";
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::WrongRowCount { count: 6 })
        );
        assert_eq!(
            "".parse::<Board>(),
            Err(BoardParseError::WrongRowCount { count: 0 })
        );
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (0..=FULL_MASK).prop_map(Board::from_bits_truncate)
    }

    fn arb_position() -> impl Strategy<Value = Position> {
        (0..TILE_COUNT).prop_map(Position::from_index)
    }

    proptest! {
        #[test]
        fn prop_press_is_involution(board in arb_board(), pos in arb_position()) {
            prop_assert_eq!(board.pressed(pos).pressed(pos), board);
        }

        #[test]
        fn prop_presses_commute(board in arb_board(), a in arb_position(), b in arb_position()) {
            prop_assert_eq!(board.pressed(a).pressed(b), board.pressed(b).pressed(a));
        }

        #[test]
        fn prop_text_form_parses_back(board in arb_board()) {
            prop_assert_eq!(board.to_string().parse::<Board>(), Ok(board));
        }

        #[test]
        fn prop_press_changes_press_area_only(board in arb_board(), pos in arb_position()) {
            let pressed = board.pressed(pos);
            let area: Vec<_> = pos.press_area().collect();
            for other in Position::ALL {
                let changed = pressed.is_on(other) != board.is_on(other);
                prop_assert_eq!(changed, area.contains(&other));
            }
        }
    }
}
