//! Elimination logic: game enumeration, flow network, max flow, and the analyzer.

mod elimination;
mod flow_network;
mod games;
mod max_flow;
mod network;

pub use elimination::{
    analyze, certificate_of_elimination, division_report, is_eliminated, TeamStatus,
};
pub use flow_network::{Capacity, FlowEdge, FlowNetwork};
pub use games::{games_excluding, remaining_games_excluding};
pub use max_flow::MaxFlow;
pub use network::{EliminationNetwork, VertexLayout};
