//! Game enumeration: unplayed games among every team except one.

use crate::models::{Game, Standings, TeamIndex};

/// Every pair of teams other than `target` that still has games left, with
/// `first < second`, ordered by `first` then `second`.
///
/// Flow-network vertex ids follow this order, so it must stay deterministic.
pub fn games_excluding(
    standings: &Standings,
    target: TeamIndex,
) -> impl Iterator<Item = Game> + '_ {
    let n = standings.team_count();
    (0..n).filter(move |&first| first != target).flat_map(move |first| {
        (first + 1..n)
            .filter(move |&second| second != target)
            .filter_map(move |second| {
                let remaining = standings.against_at(first, second);
                (remaining > 0).then_some(Game {
                    first,
                    second,
                    remaining,
                })
            })
    })
}

/// Total number of games left among every team except `target`.
pub fn remaining_games_excluding(standings: &Standings, target: TeamIndex) -> u64 {
    games_excluding(standings, target)
        .map(|g| u64::from(g.remaining))
        .sum()
}
