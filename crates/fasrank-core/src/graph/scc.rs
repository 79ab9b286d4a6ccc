//! Strongly connected components via Tarjan's algorithm.
//!
//! # Algorithm
//!
//! Tarjan's single-pass DFS assigns each vertex a discovery time and a
//! low-link (the smallest discovery time reachable through tree edges plus
//! at most one back edge to a vertex still on the stack). A vertex whose
//! low-link equals its discovery time is the root of a component; popping the
//! vertex stack down to it yields the component.
//!
//! The DFS runs on an explicit work stack of `(vertex, neighbours, cursor)`
//! frames instead of the call stack, so long chains cannot overflow it.
//!
//! # Output
//!
//! Only components that contain a cycle are returned: components with two or
//! more vertices, and single vertices carrying a self-loop. Each comes back as
//! an induced subgraph over local indices `0..k` plus the local → original
//! vertex map. Local index order is stack pop order.

#![allow(clippy::module_name_repetitions)]

use fixedbitset::FixedBitSet;
use tracing::{instrument, trace};

use crate::graph::adjacency::{AdjacencyGraph, Edge};

const UNVISITED: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A cyclic strongly connected component of some parent graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Induced subgraph over local indices `0..vertices.len()`.
    pub graph: AdjacencyGraph,
    /// `vertices[local]` is the parent-graph index of local vertex `local`.
    pub vertices: Vec<usize>,
}

impl Component {
    /// Number of vertices in the component.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if the component has no vertices. Decomposition never yields
    /// one.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Map a local edge back to the parent graph.
    ///
    /// # Panics
    ///
    /// Panics if the edge is not an edge of this component's subgraph.
    #[must_use]
    pub fn original_edge(&self, (from, to): Edge) -> Edge {
        assert!(
            self.graph.has_edge(from, to),
            "local edge ({from}, {to}) is not part of this component"
        );
        (self.vertices[from], self.vertices[to])
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split `graph` into its cyclic strongly connected components.
///
/// Components appear in Tarjan completion order (sink components of the
/// condensation first).
#[must_use]
#[instrument(level = "trace", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn strongly_connected_components(graph: &AdjacencyGraph) -> Vec<Component> {
    let partition = tarjan_partition(graph);

    // Each vertex belongs to exactly one partition block.
    let mut block_of = vec![0_usize; graph.vertex_count()];
    let mut local_of = vec![0_usize; graph.vertex_count()];
    for (block, members) in partition.iter().enumerate() {
        for (local, &vertex) in members.iter().enumerate() {
            block_of[vertex] = block;
            local_of[vertex] = local;
        }
    }

    let components: Vec<Component> = partition
        .into_iter()
        .enumerate()
        .filter(|(_, members)| is_cyclic_block(graph, members))
        .map(|(block, members)| {
            let mut sub = AdjacencyGraph::new(members.len());
            for (local, &vertex) in members.iter().enumerate() {
                for next in graph.neighbors(vertex) {
                    if block_of[next] == block {
                        sub.add_edge(local, local_of[next]);
                    }
                }
            }
            Component {
                graph: sub,
                vertices: members,
            }
        })
        .collect();

    trace!(components = components.len(), "scc decomposition done");
    components
}

/// `true` when `graph` contains no directed cycle (self-loops included).
#[must_use]
pub fn is_acyclic(graph: &AdjacencyGraph) -> bool {
    tarjan_partition(graph)
        .iter()
        .all(|members| !is_cyclic_block(graph, members))
}

fn is_cyclic_block(graph: &AdjacencyGraph, members: &[usize]) -> bool {
    match members {
        [] => false,
        [only] => graph.has_edge(*only, *only),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Tarjan
// ---------------------------------------------------------------------------

/// One suspended DFS call: the vertex, its out-neighbours, and how many of
/// them have been examined.
struct Frame {
    vertex: usize,
    neighbors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &AdjacencyGraph, vertex: usize) -> Self {
        Self {
            vertex,
            neighbors: graph.neighbors(vertex).collect(),
            cursor: 0,
        }
    }
}

/// Scratch state for one decomposition. Dropped when the call returns.
struct Tarjan {
    disc: Vec<usize>,
    low: Vec<usize>,
    on_stack: FixedBitSet,
    stack: Vec<usize>,
    time: usize,
    blocks: Vec<Vec<usize>>,
}

impl Tarjan {
    fn new(vertex_count: usize) -> Self {
        Self {
            disc: vec![UNVISITED; vertex_count],
            low: vec![UNVISITED; vertex_count],
            on_stack: FixedBitSet::with_capacity(vertex_count),
            stack: Vec::new(),
            time: 0,
            blocks: Vec::new(),
        }
    }

    fn discover(&mut self, vertex: usize) {
        self.disc[vertex] = self.time;
        self.low[vertex] = self.time;
        self.time += 1;
        self.stack.push(vertex);
        self.on_stack.insert(vertex);
    }

    fn visit(&mut self, graph: &AdjacencyGraph, root: usize) {
        self.discover(root);
        let mut work = vec![Frame::new(graph, root)];

        while let Some(frame) = work.last_mut() {
            let u = frame.vertex;
            let next = frame.neighbors.get(frame.cursor).copied();
            if next.is_some() {
                frame.cursor += 1;
            }

            match next {
                Some(v) if self.disc[v] == UNVISITED => {
                    self.discover(v);
                    work.push(Frame::new(graph, v));
                }
                Some(v) => {
                    if self.on_stack.contains(v) {
                        self.low[u] = self.low[u].min(self.disc[v]);
                    }
                }
                None => {
                    work.pop();
                    if let Some(parent) = work.last() {
                        let p = parent.vertex;
                        self.low[p] = self.low[p].min(self.low[u]);
                    }
                    if self.low[u] == self.disc[u] {
                        self.pop_block(u);
                    }
                }
            }
        }
    }

    fn pop_block(&mut self, root: usize) {
        let mut members = Vec::new();
        while let Some(vertex) = self.stack.pop() {
            self.on_stack.set(vertex, false);
            members.push(vertex);
            if vertex == root {
                break;
            }
        }
        self.blocks.push(members);
    }
}

/// Partition every vertex into its SCC, in completion order.
fn tarjan_partition(graph: &AdjacencyGraph) -> Vec<Vec<usize>> {
    let mut tarjan = Tarjan::new(graph.vertex_count());
    for root in 0..graph.vertex_count() {
        if tarjan.disc[root] == UNVISITED {
            tarjan.visit(graph, root);
        }
    }
    debug_assert!(tarjan.stack.is_empty());
    tarjan.blocks
}
