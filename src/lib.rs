//! Baseball division elimination: library with the standings model and the max-flow analysis.

pub mod logic;
pub mod models;

pub use logic::{
    analyze, certificate_of_elimination, division_report, games_excluding, is_eliminated,
    remaining_games_excluding, Capacity, EliminationNetwork, FlowEdge, FlowNetwork, MaxFlow,
    TeamStatus, VertexLayout,
};
pub use models::{DivisionError, Game, Standings, Team, TeamIndex};
