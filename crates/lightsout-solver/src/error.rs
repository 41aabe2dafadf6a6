/// Errors returned by [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// No set of presses turns every tile off.
    #[display("board has no solution")]
    Unsolvable,
}
