//! Unplayed game between two teams of the division.

use crate::models::team::TeamIndex;
use serde::Serialize;

/// Remaining games between two distinct teams. `first` always precedes `second` in table order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Game {
    pub first: TeamIndex,
    pub second: TeamIndex,
    /// Number of games still to be played between the two; always > 0.
    pub remaining: u32,
}

impl Game {
    pub fn teams(&self) -> [TeamIndex; 2] {
        [self.first, self.second]
    }

    pub fn involves(&self, team: TeamIndex) -> bool {
        self.first == team || self.second == team
    }
}
