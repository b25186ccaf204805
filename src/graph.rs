use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::color::{Color, UNCOLORED};

/// Reasons an edge may be rejected by a [`Graph`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge names a node index the graph does not have.
    #[error("edge {edge} references node {index}, but the graph has {node_count} nodes")]
    NodeOutOfRange {
        edge: usize,
        index: usize,
        node_count: usize,
    },
}

/// A vertex, identified by its position in the owning graph's node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub(crate) index: usize,
    pub(crate) color: Color,
}

impl Node {
    /// Position of this node in its graph.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node's color, [`UNCOLORED`] if unknown.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this node has a concrete color.
    #[inline]
    pub fn is_colored(&self) -> bool {
        self.color != UNCOLORED
    }
}

/// An undirected edge between two nodes.
///
/// The stored order still matters: a token placed on the edge is read with its first end at `index1` and its second at `index2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub(crate) index1: usize,
    pub(crate) index2: usize,
}

impl Edge {
    /// An edge from node `index1` to node `index2`.
    pub fn new(index1: usize, index2: usize) -> Self {
        Self { index1, index2 }
    }

    /// The endpoint indices in stored order.
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.index1, self.index2)
    }

    /// The endpoint indices, disregarding order.
    #[inline]
    pub fn ends(&self) -> UnorderedPair<usize> {
        UnorderedPair(self.index1, self.index2)
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.index1 == self.index2
    }
}

/// Nodes, the edges between them, and the adjacency derived from those edges.
///
/// Edges refer to nodes by index only and are resolved against this graph's own node list,
/// so a clone is a fully independent copy.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    // edge weights list every edge index joining the pair, so parallel edges are kept
    adjacency: UnGraphMap<usize, Vec<usize>>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            adjacency: UnGraphMap::with_capacity(nodes, edges),
        }
    }

    /// Append a node with the next free index and return it.
    pub fn add_node(&mut self, color: Color) -> Node {
        let node = Node {
            index: self.nodes.len(),
            color,
        };
        self.nodes.push(node);
        self.adjacency.add_node(node.index);
        node
    }

    /// Replace every edge of this graph and rebuild the adjacency from scratch.
    ///
    /// If any edge references a missing node, the graph is left untouched.
    pub fn set_edges(&mut self, edges: Vec<Edge>) -> Result<(), GraphError> {
        for (position, edge) in edges.iter().enumerate() {
            self.check_edge(position, edge)?;
        }

        self.edges = edges;
        self.adjacency = UnGraphMap::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            self.adjacency.add_node(node.index);
        }
        for position in 0..self.edges.len() {
            self.link(position);
        }

        Ok(())
    }

    /// Append a single edge, extending the adjacency in place. Returns the new edge's index.
    pub fn add_edge(&mut self, index1: usize, index2: usize) -> Result<usize, GraphError> {
        let edge = Edge::new(index1, index2);
        let position = self.edges.len();
        self.check_edge(position, &edge)?;

        self.edges.push(edge);
        self.link(position);
        Ok(position)
    }

    fn check_edge(&self, position: usize, edge: &Edge) -> Result<(), GraphError> {
        match [edge.index1, edge.index2].into_iter().find(|index| *index >= self.nodes.len()) {
            Some(index) => Err(GraphError::NodeOutOfRange {
                edge: position,
                index,
                node_count: self.nodes.len(),
            }),
            None => Ok(()),
        }
    }

    fn link(&mut self, position: usize) {
        let Edge { index1, index2 } = self.edges[position];
        match self.adjacency.edge_weight_mut(index1, index2) {
            Some(parallel) => parallel.push(position),
            None => {
                self.adjacency.add_edge(index1, index2, vec![position]);
            }
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The node at `index`, if there is one.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The edge at `index`, if there is one.
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Resolve the endpoints of `edge` against this graph's nodes, in stored order.
    ///
    /// # Panics
    /// If `edge` references nodes this graph does not have, i.e. it was not taken from this graph.
    pub fn endpoints(&self, edge: &Edge) -> (&Node, &Node) {
        (&self.nodes[edge.index1], &self.nodes[edge.index2])
    }

    /// Colors of the endpoints of `edge`, in stored order. Panics under the same conditions as [`Self::endpoints`].
    pub fn endpoint_colors(&self, edge: &Edge) -> (Color, Color) {
        let (n1, n2) = self.endpoints(edge);
        (n1.color, n2.color)
    }

    /// Neighbors of the node at `index`, one entry per incident edge.
    ///
    /// A neighbor joined by parallel edges is repeated; a self-loop lists the node itself twice.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        if !self.adjacency.contains_node(index) {
            return Vec::new();
        }

        self.adjacency
            .edges(index)
            .flat_map(|(a, b, via)| {
                let other = if a == index { b } else { a };
                let times = if a == b { 2 * via.len() } else { via.len() };
                itertools::repeat_n(other, times)
            })
            .collect_vec()
    }

    /// Number of edge ends at the node at `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Whether every pair of distinct nodes is joined by exactly one edge, with no self-loops.
    pub fn is_complete(&self) -> bool {
        let n = self.nodes.len();
        self.edges.len() == n * n.saturating_sub(1) / 2
            // one adjacency entry per edge means no pair is joined twice
            && self.adjacency.edge_count() == self.edges.len()
            && !self.edges.iter().any(Edge::is_loop)
    }

    pub(crate) fn set_color(&mut self, index: usize, color: Color) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.color = color;
        }
    }
}

// adjacency is derived from the edges, so it takes no part in equality
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}
