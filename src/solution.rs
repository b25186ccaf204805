use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use crate::color::Color;
use crate::graph::Node;
use crate::puzzle::Puzzle;

/// The first problem [`PuzzleSolution::check`] finds with an assignment.
///
/// These are findings about a solution, not failures of the check itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("edge {edge} has no match stick assigned to it")]
    MissingEdge { edge: usize },
    #[error("a match stick is assigned to edge {edge}, which does not exist")]
    UnknownEdge { edge: usize },
    #[error("edge {edge} is assigned match stick {token}, which does not exist")]
    UnknownToken { edge: usize, token: usize },
    #[error("match stick {token} is used more than once")]
    TokenReused { token: usize },
    /// A token's ends disagree with the colors of the nodes it joins, as given or as deduced from earlier edges.
    #[error("edge {edge} joins colors {nodes:?} but match stick {token} reads {token_colors:?}")]
    ColorMismatch {
        edge: usize,
        token: usize,
        nodes: (Color, Color),
        token_colors: (Color, Color),
    },
}

/// An assignment of one match stick to every edge of a puzzle.
///
/// The solution owns its puzzle. Tokens in it are oriented as placed: the first end of the token on an edge
/// sits at the edge's first node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSolution {
    puzzle: Puzzle,
    // edge index -> token index
    assignment: BTreeMap<usize, usize>,
}

impl PuzzleSolution {
    /// Couple a puzzle with an edge-to-token assignment. Nothing is checked until [`Self::check`] or [`Self::confirm`].
    pub fn new(puzzle: Puzzle, assignment: BTreeMap<usize, usize>) -> Self {
        Self { puzzle, assignment }
    }

    #[inline]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The token index placed on each edge index.
    #[inline]
    pub fn assignment(&self) -> &BTreeMap<usize, usize> {
        &self.assignment
    }

    /// The token placed on the edge at `edge`, if any.
    pub fn token_for(&self, edge: usize) -> Option<usize> {
        self.assignment.get(&edge).copied()
    }

    /// Check the assignment against the puzzle, returning the first [`Inconsistency`] found.
    ///
    /// In order:
    /// 1. every edge has a token, and no token is placed on an edge which does not exist;
    /// 2. every token exists and is used at most once;
    /// 3. walking the edges in index order, every token reads the colors of its edge's nodes.
    ///
    /// During the last step an uncolored node takes the color of the first token end placed against it,
    /// and every later edge at that node must agree. Deduced colors are kept to this check; the puzzle is not modified.
    pub fn check(&self) -> Result<(), Inconsistency> {
        let edges = self.puzzle.edges();
        let tokens = self.puzzle.tokens();

        if let Some(edge) = (0..edges.len()).find(|edge| !self.assignment.contains_key(edge)) {
            return Err(Inconsistency::MissingEdge { edge });
        }
        if let Some(edge) = self.assignment.keys().find(|edge| **edge >= edges.len()) {
            return Err(Inconsistency::UnknownEdge { edge: *edge });
        }

        let mut used = HashSet::with_capacity(self.assignment.len());
        for (edge, token) in &self.assignment {
            if *token >= tokens.len() {
                return Err(Inconsistency::UnknownToken { edge: *edge, token: *token });
            }
            if !used.insert(*token) {
                return Err(Inconsistency::TokenReused { token: *token });
            }
        }

        let mut deduced: HashMap<usize, Color> = HashMap::new();
        let mut resolve = |node: &Node, offered: Color| -> Color {
            if node.is_colored() {
                node.color()
            } else {
                *deduced.entry(node.index()).or_insert(offered)
            }
        };

        for (edge, token) in &self.assignment {
            let (n1, n2) = self.puzzle.graph().endpoints(&edges[*edge]);
            let token_colors = tokens[*token].colors();

            let nodes = (resolve(n1, token_colors.0), resolve(n2, token_colors.1));
            if nodes != token_colors {
                return Err(Inconsistency::ColorMismatch {
                    edge: *edge,
                    token: *token,
                    nodes,
                    token_colors,
                });
            }
        }

        Ok(())
    }

    /// Whether the assignment is a valid solution, per [`Self::check`]. The first problem found, if any, is logged.
    pub fn confirm(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(finding) => {
                warn!(%finding, "solution rejected");
                false
            }
        }
    }
}
