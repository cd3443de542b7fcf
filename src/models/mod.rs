//! Data structures for a division: teams, games, and the standings table.

mod game;
mod standings;
mod team;

pub use game::Game;
pub use standings::{DivisionError, Standings};
pub use team::{Team, TeamIndex};
