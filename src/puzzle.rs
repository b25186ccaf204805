use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::color::Color;
use crate::graph::{Edge, Graph, Node};
use crate::solution::PuzzleSolution;
use crate::solver::{CompleteGraphSolver, SolverFailure};
use crate::token::Token;

/// A graph whose nodes are (partially) colored, the palette of colors nodes may take, and the match sticks to place.
///
/// A solvable puzzle has exactly as many tokens as its graph has edges; this is not enforced here but checked by the solver.
///
/// [`Puzzle`]s are usually made by [`generate_complete`](crate::generate_complete) or assembled by hand with a [`PuzzleBuilder`](crate::PuzzleBuilder).
/// Cloning a puzzle deep-copies its palette, graph and tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub(crate) colors: Vec<Color>,
    pub(crate) graph: Graph,
    pub(crate) tokens: Vec<Token>,
}

impl Puzzle {
    /// Couple a palette, a graph and a token list.
    pub fn new(colors: Vec<Color>, graph: Graph, tokens: Vec<Token>) -> Self {
        Self { colors, graph, tokens }
    }

    /// The colors nodes may legally carry.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    /// The match sticks, in the order that gives each its identity.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Indices of nodes whose color is unknown.
    pub fn masked_nodes(&self) -> Vec<usize> {
        self.nodes()
            .iter()
            .filter(|node| !node.is_colored())
            .map(Node::index)
            .collect_vec()
    }

    /// Solve this puzzle, deferring to a [`CompleteGraphSolver`]. `self` is never modified; the solution carries its own copy.
    ///
    /// Only complete graphs are supported; anything else fails with [`SolverFailure::NotComplete`].
    pub fn solve(&self) -> Result<PuzzleSolution, SolverFailure> {
        CompleteGraphSolver::from(self).solve()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "colors: {}", self.colors.iter().join(" "))?;
        writeln!(f, "nodes: {}", self.nodes().iter().map(Node::color).join(" "))?;
        writeln!(
            f,
            "edges: {}",
            self.edges().iter().map(|e| format!("{}-{}", e.index1, e.index2)).join(" ")
        )?;
        writeln!(f, "tokens: {}", self.tokens.iter().join(" "))
    }
}
