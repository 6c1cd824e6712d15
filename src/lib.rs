pub mod board;
pub mod catalog;
pub mod config;
pub mod game_logic;
pub mod record;
pub mod resolver;
pub mod terminal;

/// Destination for the description of every completed move.
///
/// `TurnController` hands over one line per move. Implementations are the
/// record file used by the binary and an in-memory list for scripted games.
pub trait MoveLog {
    /// Error type for append failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Append one move description as a single line.
    fn append(&mut self, line: &str) -> Result<(), Self::Error>;
}
