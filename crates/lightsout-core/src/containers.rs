//! Containers indexed by board position.

use std::ops::{Index, IndexMut};

use crate::position::{Position, TILE_COUNT};

/// A fixed array holding one value per tile, indexed by [`Position`].
///
/// This is the two-dimensional view used wherever per-tile data is kept alongside
/// a board, so callers never compute row-major offsets themselves.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Array25, Position};
///
/// let mut labels = Array25::from_fn(|pos| pos.to_string());
/// assert_eq!(labels[Position::new(3, 1)], "(3, 1)");
///
/// labels[Position::new(0, 0)] = "origin".to_owned();
/// assert_eq!(labels[Position::new(0, 0)], "origin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array25<T> {
    array: [T; TILE_COUNT],
}

impl<T> Array25<T> {
    /// Creates a container from an array in row-major order.
    #[must_use]
    pub const fn from_array(array: [T; TILE_COUNT]) -> Self {
        Self { array }
    }

    /// Creates a container by calling `f` for each position in row-major order.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        Self {
            array: std::array::from_fn(|i| f(Position::from_index(i))),
        }
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().zip(&self.array)
    }

    /// Returns an iterator over `(position, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut T)> {
        Position::ALL.into_iter().zip(&mut self.array)
    }

    /// Returns an iterator over the values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.array.iter()
    }
}

impl<T> Default for Array25<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Position> for Array25<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.array[pos.index()]
    }
}

impl<T> IndexMut<Position> for Array25<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.array[pos.index()]
    }
}
