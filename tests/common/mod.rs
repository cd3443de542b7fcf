//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use baseball_elimination::{Standings, Team, TeamIndex};
use rand::rngs::StdRng;
use rand::Rng;

/// Four-team division: Montreal is passed outright by Atlanta, Philadelphia is
/// eliminated by Atlanta and New_York together.
pub const TEAMS4: &str = "\
4
Atlanta       83 71  8  0 1 6 1
Philadelphia  80 79  3  1 0 0 2
New_York      78 78  6  6 0 0 0
Montreal      77 82  3  1 2 0 0
";

/// Five-team division: only Detroit is eliminated, and only by all four rivals together.
pub const TEAMS5: &str = "\
5
New_York    75 59 28   0 3 8 7 3
Baltimore   71 63 28   3 0 2 7 7
Boston      69 66 27   8 2 0 0 3
Toronto     63 72 27   7 7 0 0 3
Detroit     49 86 27   3 7 3 3 0
";

pub fn teams4() -> Standings {
    Standings::parse(TEAMS4).unwrap()
}

pub fn teams5() -> Standings {
    Standings::parse(TEAMS5).unwrap()
}

/// Random symmetric division of 2..=6 teams with small win totals, so eliminations are common.
pub fn random_division(rng: &mut StdRng) -> Standings {
    let n = rng.gen_range(2..=6);
    let mut against = vec![vec![0u32; n]; n];
    for a in 0..n {
        for b in a + 1..n {
            let games = if rng.gen_bool(0.6) { rng.gen_range(1..=4) } else { 0 };
            against[a][b] = games;
            against[b][a] = games;
        }
    }
    let teams = (0..n)
        .map(|i| {
            let scheduled: u32 = against[i].iter().sum();
            Team::new(
                format!("T{i}"),
                rng.gen_range(0..=15),
                rng.gen_range(0..=15),
                scheduled + rng.gen_range(0..=2),
                against[i].clone(),
            )
        })
        .collect();
    Standings::new(teams).unwrap()
}

/// Whether `members` must average more wins than `best`: wins(R) + games(R) > best * |R|.
pub fn subset_eliminates(standings: &Standings, members: &[TeamIndex], best: u64) -> bool {
    let wins: u64 = members
        .iter()
        .map(|&t| u64::from(standings.team_at(t).wins))
        .sum();
    let mut games = 0u64;
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            games += u64::from(standings.team_at(a).against[b]);
        }
    }
    !members.is_empty() && wins + games > best * members.len() as u64
}

/// Exhaustive check over every subset of rivals.
pub fn brute_force_eliminated(standings: &Standings, target: TeamIndex) -> bool {
    let best = standings.team_at(target).max_wins();
    let rivals: Vec<TeamIndex> = (0..standings.team_count()).filter(|&t| t != target).collect();
    (1u32..(1 << rivals.len())).any(|mask| {
        let members: Vec<TeamIndex> = rivals
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &t)| t)
            .collect();
        subset_eliminates(standings, &members, best)
    })
}

/// The same division restricted to `keep` (in table order), head-to-head counts trimmed to match.
pub fn restrict(standings: &Standings, keep: &[TeamIndex]) -> Standings {
    let teams = keep
        .iter()
        .map(|&t| {
            let team = standings.team_at(t);
            Team::new(
                team.name.clone(),
                team.wins,
                team.losses,
                team.remaining,
                keep.iter().map(|&o| team.against[o]).collect(),
            )
        })
        .collect();
    Standings::new(teams).unwrap()
}
