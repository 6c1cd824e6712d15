mod controller;
mod notation;

pub use controller::{Phase, Reply, TurnController, TurnError};
pub use notation::{MoveRecord, PieceName, color_name};
