#![warn(clippy::all, clippy::cargo)]

mod board;
mod engine;
mod error;
pub mod snapshot;

pub use board::Board;
pub use engine::{advance, count_neighbors, next_state, ChangeList, Coord};
pub use error::{BoardError, SnapshotError};
