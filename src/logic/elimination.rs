//! Elimination analysis: can a team still finish at least tied for first?
//!
//! A team is eliminated when some subset R of its rivals must, between their
//! current wins and the games left among them, average more wins than the
//! team's best possible total. Three checks, cheapest first:
//!
//! 1. a rival already has more wins than the team can reach;
//! 2. the whole division, on average, must pass the team's best total;
//! 3. max flow on the elimination network cannot place every remaining game.
//!
//! Certificates only ever come from checks 1 and 3.

use crate::logic::games::remaining_games_excluding;
use crate::logic::max_flow::MaxFlow;
use crate::logic::network::EliminationNetwork;
use crate::models::{DivisionError, Standings, TeamIndex};
use serde::Serialize;

/// Elimination status of one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TeamStatus {
    pub team: String,
    pub eliminated: bool,
    /// Rivals that eliminate the team, in table order. `None` when not eliminated.
    pub certificate: Option<Vec<String>>,
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.certificate {
            Some(teams) => write!(
                f,
                "{} is eliminated by the subset R = {{ {} }}",
                self.team,
                teams.join(" ")
            ),
            None => write!(f, "{} is not eliminated", self.team),
        }
    }
}

/// Whether `team` can no longer finish with at least as many wins as every rival.
pub fn is_eliminated(standings: &Standings, team: &str) -> Result<bool, DivisionError> {
    let target = standings.index_of(team)?;
    if rivals_ahead(standings, target).next().is_some() {
        log::debug!("`{}` is passed outright by a rival", team);
        return Ok(true);
    }
    if trivially_eliminated(standings, target) {
        log::debug!("`{}` is eliminated by the division average", team);
        return Ok(true);
    }
    Ok(flow_cut(standings, target)?.is_some())
}

/// Rivals proving that `team` is eliminated, or `None` if it is not.
pub fn certificate_of_elimination(
    standings: &Standings,
    team: &str,
) -> Result<Option<Vec<String>>, DivisionError> {
    let target = standings.index_of(team)?;
    Ok(certificate_for(standings, target)?.map(|teams| names(standings, &teams)))
}

/// Status of a single team.
pub fn analyze(standings: &Standings, team: &str) -> Result<TeamStatus, DivisionError> {
    let target = standings.index_of(team)?;
    let certificate = certificate_for(standings, target)?.map(|teams| names(standings, &teams));
    Ok(TeamStatus {
        team: team.to_string(),
        eliminated: certificate.is_some(),
        certificate,
    })
}

/// Status of every team, in table order.
pub fn division_report(standings: &Standings) -> Result<Vec<TeamStatus>, DivisionError> {
    standings.team_names().map(|name| analyze(standings, name)).collect()
}

/// Rivals whose current wins already exceed the target's best possible total.
fn rivals_ahead(
    standings: &Standings,
    target: TeamIndex,
) -> impl Iterator<Item = TeamIndex> + '_ {
    let best = standings.team_at(target).max_wins();
    (0..standings.team_count())
        .filter(move |&t| t != target && u64::from(standings.team_at(t).wins) > best)
}

/// Average bound over all rivals: `(R + G) / (n - 1) > best`, compared without division.
fn trivially_eliminated(standings: &Standings, target: TeamIndex) -> bool {
    let best = standings.team_at(target).max_wins();
    let rival_wins: u64 = (0..standings.team_count())
        .filter(|&t| t != target)
        .map(|t| u64::from(standings.team_at(t).wins))
        .sum();
    let games_left = remaining_games_excluding(standings, target);
    let rivals = (standings.team_count() - 1) as u64;
    rival_wins + games_left > best * rivals
}

/// Leaders from check 1 merged with the min-cut teams from check 3.
fn certificate_for(
    standings: &Standings,
    target: TeamIndex,
) -> Result<Option<Vec<TeamIndex>>, DivisionError> {
    let mut members = vec![false; standings.team_count()];
    for team in rivals_ahead(standings, target) {
        members[team] = true;
    }
    for team in flow_cut(standings, target)?.unwrap_or_default() {
        members[team] = true;
    }
    let certificate: Vec<TeamIndex> = (0..members.len()).filter(|&t| members[t]).collect();
    Ok((!certificate.is_empty()).then_some(certificate))
}

/// Team vertices on the source side of the min cut when the network cannot place every
/// remaining game; `None` when it can.
fn flow_cut(
    standings: &Standings,
    target: TeamIndex,
) -> Result<Option<Vec<TeamIndex>>, DivisionError> {
    let (layout, network) = EliminationNetwork::build(standings, target).into_parts();
    let total = layout.total_games();
    if total == 0 {
        return Ok(None);
    }

    let flow = MaxFlow::compute(network, layout.source(), layout.sink())?;
    if flow.value() >= total {
        return Ok(None);
    }
    log::debug!(
        "`{}` eliminated: only {} of {} remaining games can be placed",
        standings.team_at(target).name,
        flow.value(),
        total
    );
    let cut = layout
        .team_vertices()
        .filter(|&(_, vertex)| flow.is_source_side(vertex))
        .map(|(team, _)| team)
        .collect();
    Ok(Some(cut))
}

fn names(standings: &Standings, teams: &[TeamIndex]) -> Vec<String> {
    teams.iter().map(|&t| standings.team_at(t).name.clone()).collect()
}
