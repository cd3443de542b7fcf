//! Builds the elimination flow network for one target team.
//!
//! Vertex layout: source `0`, one vertex per remaining game (`1..=games`, in
//! enumeration order), one vertex per team that appears in some game (table
//! order), then the sink.

use crate::logic::flow_network::{Capacity, FlowNetwork};
use crate::logic::games::games_excluding;
use crate::models::{Game, Standings, TeamIndex};

/// Maps vertex ids of one elimination network back to games and teams.
#[derive(Clone, Debug)]
pub struct VertexLayout {
    target: TeamIndex,
    games: Vec<Game>,
    /// Team behind each team vertex; vertex id = `first_team_vertex() + position`.
    teams: Vec<TeamIndex>,
    /// Team vertex per table position; `None` for the target and for teams with no games left.
    vertex_of_team: Vec<Option<usize>>,
}

impl VertexLayout {
    pub fn target(&self) -> TeamIndex {
        self.target
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn sink(&self) -> usize {
        self.vertex_count() - 1
    }

    pub fn vertex_count(&self) -> usize {
        2 + self.games.len() + self.teams.len()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game_vertex(&self, game: usize) -> usize {
        1 + game
    }

    fn first_team_vertex(&self) -> usize {
        1 + self.games.len()
    }

    pub fn team_vertex(&self, team: TeamIndex) -> Option<usize> {
        self.vertex_of_team.get(team).copied().flatten()
    }

    pub fn team_at_vertex(&self, vertex: usize) -> Option<TeamIndex> {
        vertex
            .checked_sub(self.first_team_vertex())
            .and_then(|i| self.teams.get(i).copied())
    }

    /// `(team, vertex)` for every team vertex, in vertex order.
    pub fn team_vertices(&self) -> impl Iterator<Item = (TeamIndex, usize)> + '_ {
        let first = self.first_team_vertex();
        self.teams.iter().enumerate().map(move |(i, &team)| (team, first + i))
    }

    /// Sum of the source edge capacities: every game left among the other teams.
    pub fn total_games(&self) -> u64 {
        self.games.iter().map(|g| u64::from(g.remaining)).sum()
    }
}

/// The network for "can `target` still finish first?", plus its vertex layout.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    layout: VertexLayout,
    network: FlowNetwork,
}

impl EliminationNetwork {
    /// Source -> game edges carry the games left between the pair, game -> team edges are
    /// unbounded, and team -> sink edges allow the wins a team may still add without
    /// passing the target's best possible total.
    ///
    /// Panics if `target >= standings.team_count()`.
    pub fn build(standings: &Standings, target: TeamIndex) -> Self {
        let games: Vec<Game> = games_excluding(standings, target).collect();

        let mut in_game = vec![false; standings.team_count()];
        for game in &games {
            in_game[game.first] = true;
            in_game[game.second] = true;
        }
        let teams: Vec<TeamIndex> = (0..standings.team_count()).filter(|&t| in_game[t]).collect();

        let mut vertex_of_team = vec![None; standings.team_count()];
        let first_team_vertex = 1 + games.len();
        for (i, &team) in teams.iter().enumerate() {
            vertex_of_team[team] = Some(first_team_vertex + i);
        }

        let layout = VertexLayout {
            target,
            games,
            teams,
            vertex_of_team,
        };
        let mut network = FlowNetwork::new(layout.vertex_count());
        let (source, sink) = (layout.source(), layout.sink());

        for (i, game) in layout.games.iter().enumerate() {
            let vertex = layout.game_vertex(i);
            network.add_edge(source, vertex, Capacity::Finite(u64::from(game.remaining)));
            for team in game.teams() {
                if let Some(team_vertex) = layout.team_vertex(team) {
                    network.add_edge(vertex, team_vertex, Capacity::Unbounded);
                }
            }
        }

        let best = standings.team_at(target).max_wins();
        for (team, vertex) in layout.team_vertices() {
            let room = best.saturating_sub(u64::from(standings.team_at(team).wins));
            network.add_edge(vertex, sink, Capacity::Finite(room));
        }

        log::debug!(
            "elimination network for `{}`: {} games, {} teams, {} edges",
            standings.team_at(target).name,
            layout.games.len(),
            layout.teams.len(),
            network.edge_count()
        );

        Self { layout, network }
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn into_parts(self) -> (VertexLayout, FlowNetwork) {
        (self.layout, self.network)
    }
}
