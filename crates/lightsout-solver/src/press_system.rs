//! Reduced form of the press matrix.

use lightsout_core::{Board, Position, TILE_COUNT};

/// The press matrix `A` in reduced row echelon form, together with the row
/// operations that produced it.
///
/// Every row and vector is a 25-bit mask over tile indices. Row `i` of `A` is the
/// set of presses that flip tile `i`; since the press rule is symmetric this equals
/// the press mask of tile `i`.
#[derive(Debug, Clone)]
pub(crate) struct PressSystem {
    /// `transform[r]` is the set of original rows summed into reduced row `r`.
    transform: [u32; TILE_COUNT],
    /// Pivot column of each of the first `rank` reduced rows.
    pivot_cols: Vec<usize>,
    /// One null-space vector per free column.
    null_basis: Vec<u32>,
}

impl PressSystem {
    pub(crate) fn new() -> Self {
        let mut rows: [u32; TILE_COUNT] =
            std::array::from_fn(|i| Board::press_mask(Position::from_index(i)));
        let mut transform: [u32; TILE_COUNT] = std::array::from_fn(|i| 1 << i);
        let mut pivot_cols = Vec::with_capacity(TILE_COUNT);

        for col in 0..TILE_COUNT {
            let rank = pivot_cols.len();
            let bit = 1 << col;
            let Some(pivot) = (rank..TILE_COUNT).find(|&r| rows[r] & bit != 0) else {
                continue;
            };
            rows.swap(rank, pivot);
            transform.swap(rank, pivot);
            for r in 0..TILE_COUNT {
                if r != rank && rows[r] & bit != 0 {
                    rows[r] ^= rows[rank];
                    transform[r] ^= transform[rank];
                }
            }
            pivot_cols.push(col);
        }

        let null_basis = (0..TILE_COUNT)
            .filter(|col| !pivot_cols.contains(col))
            .map(|free| {
                let mut vector = 1 << free;
                for (r, &pivot) in pivot_cols.iter().enumerate() {
                    if rows[r] & (1 << free) != 0 {
                        vector |= 1 << pivot;
                    }
                }
                vector
            })
            .collect();

        Self {
            transform,
            pivot_cols,
            null_basis,
        }
    }

    pub(crate) fn rank(&self) -> usize {
        self.pivot_cols.len()
    }

    pub(crate) fn null_basis(&self) -> &[u32] {
        &self.null_basis
    }

    fn reduced_rhs(&self, row: usize, target: u32) -> bool {
        (self.transform[row] & target).count_ones() % 2 == 1
    }

    /// Returns `true` if `A·x = target` has a solution.
    pub(crate) fn is_consistent(&self, target: u32) -> bool {
        (self.rank()..TILE_COUNT).all(|row| !self.reduced_rhs(row, target))
    }

    /// Returns the solution with every free variable set to zero, or `None` if the
    /// system is inconsistent.
    pub(crate) fn particular_solution(&self, target: u32) -> Option<u32> {
        if !self.is_consistent(target) {
            return None;
        }
        let mut solution = 0;
        for (row, &pivot) in self.pivot_cols.iter().enumerate() {
            if self.reduced_rhs(row, target) {
                solution |= 1 << pivot;
            }
        }
        Some(solution)
    }
}
