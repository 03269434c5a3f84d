//! TransmissionGraph: the directed citation graph of one scenario.
//!
//! Vertices are every identifier that appears anywhere in a scenario: the
//! event, each declared source node, and any id that only shows up as an edge
//! endpoint. Each vertex records whether the document it stands for is
//! extant. Edges are unweighted; distance is the number of hops.
//!
//! The graph is built once per request and never mutated afterwards.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::ops::Add;

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::id::SourceId;
use crate::scenario::{Edge, Scenario};

/// Hop-count distance between two vertices.
///
/// `Unreachable` orders after every finite distance, so it can be compared
/// directly against real path lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Hops(u32),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Hops(_))
    }

    /// The finite hop count, if any.
    pub fn hops(&self) -> Option<u32> {
        match self {
            Distance::Hops(n) => Some(*n),
            Distance::Unreachable => None,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            (Distance::Hops(a), Distance::Hops(b)) => Distance::Hops(a + b),
            _ => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Hops(n) => write!(f, "{}", n),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Vertex weight: the identifier plus its extant flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVertex {
    pub id: SourceId,
    pub extant: bool,
}

/// Directed transmission graph with an id -> index lookup.
#[derive(Debug, Clone, Default)]
pub struct TransmissionGraph {
    graph: DiGraph<SourceVertex, String>,
    index: HashMap<SourceId, NodeIndex>,
}

impl TransmissionGraph {
    /// Builds the graph from declared `(id, extant)` pairs and edges.
    ///
    /// Never fails. Edge endpoints that were not declared become non-extant
    /// vertices with whatever edges reference them. If an id is declared more
    /// than once the first declaration wins.
    pub fn build<I>(declared: I, edges: &[Edge]) -> Self
    where
        I: IntoIterator<Item = (SourceId, bool)>,
    {
        let mut tg = TransmissionGraph::default();
        for (id, extant) in declared {
            tg.ensure_vertex(&id, extant);
        }
        for edge in edges {
            let from = tg.ensure_vertex(&edge.from, false);
            let to = tg.ensure_vertex(&edge.to, false);
            tg.graph.add_edge(from, to, edge.kind.clone());
        }
        tg
    }

    /// Builds the graph for a scenario. The event is a non-extant vertex.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let declared = std::iter::once((scenario.event.id.clone(), false)).chain(
            scenario
                .nodes
                .iter()
                .map(|node| (node.id.clone(), node.extant)),
        );
        TransmissionGraph::build(declared, &scenario.edges)
    }

    fn ensure_vertex(&mut self, id: &SourceId, extant: bool) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(SourceVertex {
            id: id.clone(),
            extant,
        });
        self.index.insert(id.clone(), idx);
        idx
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Whether `id` is a vertex flagged as extant.
    pub fn is_extant(&self, id: &str) -> bool {
        self.index
            .get(id)
            .map(|&idx| self.graph[idx].extant)
            .unwrap_or(false)
    }

    /// Extant vertex ids in insertion order.
    pub fn extant_ids(&self) -> impl Iterator<Item = &SourceId> {
        self.graph
            .node_indices()
            .map(move |idx| &self.graph[idx])
            .filter(|v| v.extant)
            .map(|v| &v.id)
    }

    /// Targets of `id`'s outgoing edges, in edge insertion order.
    pub fn successors(&self, id: &str) -> Vec<&SourceId> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id().index(), e.target()))
            .collect();
        out.sort_by_key(|(edge_idx, _)| *edge_idx);
        out.into_iter()
            .map(|(_, target)| &self.graph[target].id)
            .collect()
    }

    /// The adjacency mapping: every vertex to its ordered successor list.
    pub fn adjacency(&self) -> IndexMap<SourceId, Vec<SourceId>> {
        self.graph
            .node_indices()
            .map(|idx| {
                let id = &self.graph[idx].id;
                let targets = self.successors(id.as_str()).into_iter().cloned().collect();
                (id.clone(), targets)
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Shortest paths
    // -----------------------------------------------------------------------

    /// Minimum number of edges on any directed path from `start` to `end`.
    ///
    /// Breadth-first, so the first time `end` is discovered the hop count is
    /// minimal. A vertex is enqueued at most once, which keeps cycles safe.
    pub fn hops(&self, start: &str, end: &str) -> Distance {
        if start == end {
            return Distance::Hops(0);
        }
        let (Some(&from), Some(&to)) = (self.index.get(start), self.index.get(end)) else {
            return Distance::Unreachable;
        };

        let mut visited = HashSet::from([from]);
        let mut queue = VecDeque::from([(from, 0u32)]);

        while let Some((current, depth)) = queue.pop_front() {
            for neighbor in self.graph.neighbors_directed(current, Direction::Outgoing) {
                if neighbor == to {
                    return Distance::Hops(depth + 1);
                }
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        Distance::Unreachable
    }

    /// Single-source BFS: the hop count from `start` to every vertex it reaches.
    pub fn depths_from(&self, start: &str) -> DepthMap<'_> {
        let mut depths = HashMap::new();
        if let Some(&from) = self.index.get(start) {
            depths.insert(from, 0u32);
            let mut queue = VecDeque::from([from]);
            while let Some(current) = queue.pop_front() {
                let depth = depths[&current];
                for neighbor in self.graph.neighbors_directed(current, Direction::Outgoing) {
                    depths.entry(neighbor).or_insert_with(|| {
                        queue.push_back(neighbor);
                        depth + 1
                    });
                }
            }
        }
        DepthMap {
            graph: self,
            start: start.to_string(),
            depths,
        }
    }
}

/// Cached single-source distances produced by [`TransmissionGraph::depths_from`].
#[derive(Debug, Clone)]
pub struct DepthMap<'g> {
    graph: &'g TransmissionGraph,
    start: String,
    depths: HashMap<NodeIndex, u32>,
}

impl DepthMap<'_> {
    /// Distance from the map's start to `id`; agrees with [`TransmissionGraph::hops`].
    pub fn to(&self, id: &str) -> Distance {
        if id == self.start {
            return Distance::Hops(0);
        }
        self.graph
            .index
            .get(id)
            .and_then(|idx| self.depths.get(idx))
            .map(|&d| Distance::Hops(d))
            .unwrap_or(Distance::Unreachable)
    }
}
