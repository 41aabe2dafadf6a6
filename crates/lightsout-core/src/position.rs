//! Tile coordinates on the Lights Out board.

use std::iter::FusedIterator;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 5;

/// Number of tiles on the board.
pub const TILE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A tile position on the 5×5 board.
///
/// Both coordinates are always in the range 0-4. Positions are ordered
/// row-major, which is also the order of [`Position::ALL`].
///
/// # Examples
///
/// ```
/// use lightsout_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.index(), 8);
/// assert_eq!(pos.to_string(), "(1, 3)");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 25 positions in row-major order.
    pub const ALL: [Self; TILE_COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; TILE_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < TILE_COUNT {
            all[i] = Self {
                row: (i / BOARD_SIZE as usize) as u8,
                col: (i % BOARD_SIZE as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Creates a position if both coordinates are on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::Position;
    ///
    /// assert_eq!(Position::try_new(4, 0), Some(Position::new(4, 0)));
    /// assert_eq!(Position::try_new(5, 0), None);
    /// ```
    #[must_use]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Creates a position from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-24.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < TILE_COUNT);
        Self::ALL[index]
    }

    /// Returns the row (0-4).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-4).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-24).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Returns the position one row up, if any.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self::new(self.row - 1, self.col))
        }
    }

    /// Returns the position one row down, if any.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row + 1 >= BOARD_SIZE {
            None
        } else {
            Some(Self::new(self.row + 1, self.col))
        }
    }

    /// Returns the position one column to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self::new(self.row, self.col - 1))
        }
    }

    /// Returns the position one column to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col + 1 >= BOARD_SIZE {
            None
        } else {
            Some(Self::new(self.row, self.col + 1))
        }
    }

    /// Returns the orthogonal neighbours that lie on the board.
    ///
    /// Corners have two neighbours, edges three, and inner tiles four.
    pub fn neighbors(self) -> impl FusedIterator<Item = Self> {
        [self.up(), self.down(), self.left(), self.right()]
            .into_iter()
            .flatten()
    }

    /// Returns the tiles flipped when this tile is pressed: itself followed by its
    /// neighbours.
    pub fn press_area(self) -> impl FusedIterator<Item = Self> {
        std::iter::once(self).chain(self.neighbors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), pos);
        }
        assert_eq!(Position::ALL[7], Position::new(1, 2));
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Position::try_new(0, 5).is_none());
        assert!(Position::try_new(5, 0).is_none());
        assert!(Position::try_new(300, 0).is_none());
        assert_eq!(Position::try_new(2, 3), Some(Position::new(2, 3)));
    }

    #[test]
    #[should_panic]
    fn test_new_panics_out_of_range() {
        let _ = Position::new(5, 0);
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(Position::new(0, 0).neighbors().count(), 2);
        assert_eq!(Position::new(0, 2).neighbors().count(), 3);
        assert_eq!(Position::new(4, 4).neighbors().count(), 2);
        assert_eq!(Position::new(2, 2).neighbors().count(), 4);
    }

    #[test]
    fn test_press_area_of_center() {
        let area: Vec<_> = Position::new(2, 2).press_area().collect();
        assert_eq!(
            area,
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 0).to_string(), "(4, 0)");
    }
}
