//! Team record: current standing plus the remaining head-to-head schedule.

use serde::Serialize;

/// Position of a team in its standings table (row order of the season file).
pub type TeamIndex = usize;

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Games left to play, against any opponent.
    pub remaining: u32,
    /// Remaining games against each team, indexed by `TeamIndex`.
    /// The entry for the team itself is 0; the matrix is symmetric.
    pub against: Vec<u32>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        remaining: u32,
        against: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }

    /// Best final win total: every remaining game won.
    pub fn max_wins(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.remaining)
    }
}
