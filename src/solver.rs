use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;
use unordered_pair::UnorderedPair;

use crate::color::Color;
use crate::puzzle::Puzzle;
use crate::solution::PuzzleSolution;

/// Reasons a [`CompleteGraphSolver`] may fail. No partial solution is produced in any of these cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverFailure {
    /// The puzzle graph is not a complete graph.
    #[error("the puzzle graph is not complete")]
    NotComplete,
    /// There is not exactly one token per edge.
    #[error("the puzzle has {tokens} tokens for {edges} edges")]
    TokenCountMismatch { tokens: usize, edges: usize },
    /// The ends of this color cannot be shared out evenly over nodes of this degree, so no coloring fits the tokens.
    #[error("color {color} has {ends} token ends, which does not divide over nodes of degree {degree}")]
    UnevenColorCount { color: Color, ends: usize, degree: usize },
    /// Masked nodes remained after every color with spare capacity was handed out.
    #[error("ran out of colors with {unassigned} masked nodes left uncolored")]
    ColorPoolExhausted { unassigned: usize },
    /// No unused token matches the colors of an edge's endpoints, i.e. the puzzle as stated is unsolvable.
    #[error("no token left for edge {edge} between colors {colors:?}")]
    NoTokenForEdge { edge: usize, colors: (Color, Color) },
}

/// Solves puzzles on complete graphs by counting token ends.
///
/// On a complete graph of `n` nodes every node has degree `n - 1`, so a color whose token ends number `e`
/// must sit on exactly `e / (n - 1)` nodes. Masked nodes are handed whatever colors are short of that capacity,
/// then each edge takes any unused token matching its endpoint colors, flipped if need be.
///
/// The result is deterministic for a given node, edge and token order, but it is only one of possibly many valid solutions.
pub struct CompleteGraphSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> From<&'a Puzzle> for CompleteGraphSolver<'a> {
    fn from(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }
}

impl CompleteGraphSolver<'_> {
    #[inline]
    fn degree(&self) -> usize {
        self.puzzle.nodes().len().saturating_sub(1)
    }

    /// Number of token ends of each color.
    fn end_counts(&self) -> BTreeMap<Color, usize> {
        let mut counts = BTreeMap::new();
        for token in self.puzzle.tokens() {
            let (a, b) = token.colors();
            *counts.entry(a).or_insert(0) += 1;
            *counts.entry(b).or_insert(0) += 1;
        }

        counts
    }

    /// Token indices grouped by their pair of end colors, in token order.
    fn buckets(&self) -> HashMap<UnorderedPair<Color>, Vec<usize>> {
        let mut buckets: HashMap<UnorderedPair<Color>, Vec<usize>> = HashMap::new();
        for (index, token) in self.puzzle.tokens().iter().enumerate() {
            buckets.entry(token.ends()).or_default().push(index);
        }

        buckets
    }

    /// How many nodes may carry each color.
    fn capacities(&self, end_counts: &BTreeMap<Color, usize>) -> Result<BTreeMap<Color, usize>, SolverFailure> {
        let degree = self.degree();
        end_counts
            .iter()
            .map(|(color, ends)| {
                if ends % degree != 0 {
                    return Err(SolverFailure::UnevenColorCount { color: *color, ends: *ends, degree });
                }

                Ok((*color, ends / degree))
            })
            .collect()
    }

    /// Colors still owed to the graph, each repeated once per node it is missing from.
    fn color_pool(&self) -> Result<Vec<Color>, SolverFailure> {
        if self.degree() == 0 {
            // an isolated node is unconstrained; any palette color will do
            return Ok(self
                .puzzle
                .colors()
                .first()
                .map(|color| vec![*color; self.puzzle.masked_nodes().len()])
                .unwrap_or_default());
        }

        let end_counts = self.end_counts();
        let capacities = self.capacities(&end_counts)?;
        let used = self
            .puzzle
            .nodes()
            .iter()
            .filter(|node| node.is_colored())
            .counts_by(|node| node.color());
        debug!(?end_counts, ?capacities, ?used, "tallied colors");

        Ok(self
            .puzzle
            .colors()
            .iter()
            .flat_map(|color| {
                let available = capacities
                    .get(color)
                    .copied()
                    .unwrap_or(0)
                    .saturating_sub(used.get(color).copied().unwrap_or(0));
                itertools::repeat_n(*color, available)
            })
            .collect_vec())
    }

    /// Solve the puzzle, returning a [`PuzzleSolution`] over a colored copy of it or a [`SolverFailure`] reason.
    ///
    /// Masked nodes are colored in index order, each taking the color at the back of the pool.
    /// Edges are then filled in index order, each taking the most recently listed unused token with the right pair of colors.
    pub fn solve(&self) -> Result<PuzzleSolution, SolverFailure> {
        let graph = self.puzzle.graph();
        if !graph.is_complete() {
            return Err(SolverFailure::NotComplete);
        }
        if self.puzzle.tokens().len() != graph.edges().len() {
            return Err(SolverFailure::TokenCountMismatch {
                tokens: self.puzzle.tokens().len(),
                edges: graph.edges().len(),
            });
        }

        let mut solved = self.puzzle.clone();

        let mut pool = self.color_pool()?;
        debug!(?pool, "colors to distribute");
        let masked = solved.masked_nodes();
        for (position, index) in masked.iter().enumerate() {
            match pool.pop() {
                Some(color) => solved.graph.set_color(*index, color),
                None => {
                    return Err(SolverFailure::ColorPoolExhausted {
                        unassigned: masked.len() - position,
                    })
                }
            }
        }

        let mut buckets = self.buckets();
        let mut assignment = BTreeMap::new();
        for (edge_index, edge) in solved.graph.edges().iter().enumerate() {
            let (first, second) = solved.graph.endpoint_colors(edge);
            // one bucket serves both orientations, so a popped token cannot be reached again from the other end
            let token_index = buckets
                .get_mut(&UnorderedPair(first, second))
                .and_then(Vec::pop)
                .ok_or(SolverFailure::NoTokenForEdge {
                    edge: edge_index,
                    colors: (first, second),
                })?;

            let token = &mut solved.tokens[token_index];
            if !token.is_oriented(first, second) {
                token.flip();
            }
            assignment.insert(edge_index, token_index);
        }

        debug!(edges = assignment.len(), colored = masked.len(), "solved complete graph puzzle");
        Ok(PuzzleSolution::new(solved, assignment))
    }
}
