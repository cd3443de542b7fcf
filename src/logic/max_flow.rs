//! Maximum flow / minimum cut by shortest augmenting paths (Edmonds-Karp).
//!
//! Runs in O(V * E^2). Each round does a BFS over the residual graph from the
//! source; the last (failed) search doubles as the min-cut classification.

use crate::logic::flow_network::{Capacity, FlowEdge, FlowNetwork};
use crate::models::DivisionError;
use std::collections::VecDeque;

/// A solved network: final flows, flow value, and the source side of the minimum cut.
#[derive(Clone, Debug)]
pub struct MaxFlow {
    network: FlowNetwork,
    source: usize,
    sink: usize,
    value: u64,
    /// `source_side[v]`: v is reachable from the source in the final residual graph.
    source_side: Vec<bool>,
}

/// Result of one BFS over the residual graph.
struct ResidualSearch {
    /// Edge used to first reach each vertex.
    edge_to: Vec<Option<usize>>,
    marked: Vec<bool>,
}

impl MaxFlow {
    /// Push as much flow as possible from `source` to `sink`.
    ///
    /// Panics if `source` or `sink` is not a vertex, or if they coincide.
    /// Fails with `UnboundedFlow` if an augmenting path has no finite edge.
    pub fn compute(
        mut network: FlowNetwork,
        source: usize,
        sink: usize,
    ) -> Result<Self, DivisionError> {
        let v = network.vertex_count();
        assert!(source < v && sink < v, "source/sink outside network of {} vertices", v);
        assert_ne!(source, sink, "source and sink must differ");

        let mut value = 0u64;
        let mut rounds = 0usize;
        loop {
            let search = residual_search(&network, source);
            if !search.marked[sink] {
                log::debug!(
                    "max flow {} after {} augmenting path(s) over {} vertices / {} edges",
                    value,
                    rounds,
                    v,
                    network.edge_count()
                );
                return Ok(Self {
                    network,
                    source,
                    sink,
                    value,
                    source_side: search.marked,
                });
            }

            let mut bottleneck = Capacity::Unbounded;
            let mut vertex = sink;
            while let Some(id) = search.edge_to[vertex] {
                let edge = network.edge(id);
                bottleneck = bottleneck.min(edge.residual_capacity_to(vertex));
                vertex = edge.other(vertex);
            }
            let delta = match bottleneck {
                Capacity::Finite(delta) => delta,
                Capacity::Unbounded => return Err(DivisionError::UnboundedFlow),
            };

            let mut vertex = sink;
            while let Some(id) = search.edge_to[vertex] {
                let edge = network.edge_mut(id);
                edge.add_residual_flow_to(vertex, delta);
                vertex = edge.other(vertex);
            }
            value += delta;
            rounds += 1;
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Whether `vertex` lies on the source side of the minimum cut. False for unknown vertices.
    pub fn is_source_side(&self, vertex: usize) -> bool {
        self.source_side.get(vertex).copied().unwrap_or(false)
    }

    /// The network with its final flows.
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    /// Edges crossing from the source side to the sink side. Their capacities sum to `value()`.
    pub fn cut_edges(&self) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.network
            .edges()
            .iter()
            .filter(move |e| self.is_source_side(e.from) && !self.is_source_side(e.to))
    }
}

fn residual_search(network: &FlowNetwork, source: usize) -> ResidualSearch {
    let n = network.vertex_count();
    let mut search = ResidualSearch {
        edge_to: vec![None; n],
        marked: vec![false; n],
    };
    let mut queue = VecDeque::from([source]);
    search.marked[source] = true;

    while let Some(v) = queue.pop_front() {
        for &id in network.incident(v) {
            let edge = network.edge(id);
            let w = edge.other(v);
            if search.marked[w] || edge.residual_capacity_to(w).is_zero() {
                continue;
            }
            search.edge_to[w] = Some(id);
            search.marked[w] = true;
            queue.push_back(w);
        }
    }
    search
}
