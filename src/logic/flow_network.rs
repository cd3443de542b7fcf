//! Directed flow network with integer capacities and an explicit "unbounded" capacity.

use serde::Serialize;

/// Capacity of a flow edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    Finite(u64),
    /// Never saturates and never limits an augmenting path.
    Unbounded,
}

impl Capacity {
    /// The smaller of two capacities; `Unbounded` only when both are.
    pub fn min(self, other: Capacity) -> Capacity {
        match (self, other) {
            (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a.min(b)),
            (Capacity::Finite(a), Capacity::Unbounded)
            | (Capacity::Unbounded, Capacity::Finite(a)) => Capacity::Finite(a),
            (Capacity::Unbounded, Capacity::Unbounded) => Capacity::Unbounded,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Capacity::Finite(0)
    }
}

/// Edge `from -> to` carrying `flow` units out of `capacity`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub capacity: Capacity,
    pub flow: u64,
}

impl FlowEdge {
    /// The endpoint opposite `vertex`.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else {
            self.from
        }
    }

    /// Residual capacity in the direction of `vertex`:
    /// spare capacity forwards, current flow backwards.
    pub fn residual_capacity_to(&self, vertex: usize) -> Capacity {
        if vertex == self.to {
            match self.capacity {
                Capacity::Finite(c) => Capacity::Finite(c - self.flow),
                Capacity::Unbounded => Capacity::Unbounded,
            }
        } else {
            Capacity::Finite(self.flow)
        }
    }

    /// Push `delta` units towards `vertex` (cancelling flow when `vertex == from`).
    pub fn add_residual_flow_to(&mut self, vertex: usize, delta: u64) {
        if vertex == self.to {
            self.flow += delta;
        } else {
            self.flow -= delta;
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.capacity == Capacity::Finite(self.flow)
    }
}

/// Adjacency-list flow network over vertices `0..vertex_count`.
/// Each edge is listed under both of its endpoints so residual searches can walk it backwards.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge with zero flow and return its id. Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Capacity) -> usize {
        assert!(
            from < self.vertex_count() && to < self.vertex_count(),
            "edge {} -> {} outside network of {} vertices",
            from,
            to,
            self.vertex_count()
        );
        let id = self.edges.len();
        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
        });
        self.adjacency[from].push(id);
        if to != from {
            self.adjacency[to].push(id);
        }
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn edge(&self, id: usize) -> &FlowEdge {
        &self.edges[id]
    }

    pub(crate) fn edge_mut(&mut self, id: usize) -> &mut FlowEdge {
        &mut self.edges[id]
    }

    /// Ids of edges incident to `vertex`, in insertion order.
    pub fn incident(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Edges leaving `vertex`.
    pub fn outgoing(&self, vertex: usize) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&id| &self.edges[id])
            .filter(move |e| e.from == vertex)
    }

    /// Edges entering `vertex`.
    pub fn incoming(&self, vertex: usize) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&id| &self.edges[id])
            .filter(move |e| e.to == vertex)
    }

    pub fn outflow(&self, vertex: usize) -> u64 {
        self.outgoing(vertex).map(|e| e.flow).sum()
    }

    pub fn inflow(&self, vertex: usize) -> u64 {
        self.incoming(vertex).map(|e| e.flow).sum()
    }
}
