/// Errors returned by [`LightsOutModel`](crate::LightsOutModel) commands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum ModelError {
    /// No game has been started or loaded.
    #[display("no active game")]
    NoActiveGame,
    /// The current board has every tile off.
    #[display("puzzle is already solved")]
    AlreadySolved,
    /// The current board cannot be turned off by any set of presses.
    #[display("board has no solution")]
    Unsolvable,
}
