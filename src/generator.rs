use std::collections::HashMap;

use itertools::Itertools;
use rand::seq::index;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::color::{Color, UNCOLORED};
use crate::graph::{Edge, Graph, GraphError};
use crate::puzzle::Puzzle;
use crate::token::{Token, TokenError};

/// Reasons [`generate_complete`] may refuse its arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("a puzzle needs at least one node")]
    NoNodes,
    #[error("cannot mask {masked} nodes out of {nodes}")]
    TooManyMasked { masked: usize, nodes: usize },
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generate a puzzle on the complete graph of `node_count` nodes, with `masked` of them left uncolored.
///
/// Node colors are drawn uniformly from `1..=node_count` and then renumbered densely, so the palette is exactly `1..=K`
/// for the `K` distinct colors drawn. Every pair `i < j` gets an edge and a token reading `(color(i), color(j))`,
/// so the token list always matches the edge list and the ground-truth coloring always solves the puzzle.
pub fn generate_complete<R>(node_count: usize, masked: usize, rng: &mut R) -> Result<Puzzle, GenerateError>
where
    R: Rng + ?Sized,
{
    if node_count == 0 {
        return Err(GenerateError::NoNodes);
    }
    if masked > node_count {
        return Err(GenerateError::TooManyMasked { masked, nodes: node_count });
    }

    let drawn = (0..node_count)
        .map(|_| rng.random_range(1..=node_count))
        .collect_vec();

    // smallest drawn value becomes 1, the next 2, and so on
    let rank: HashMap<Color, Color> = drawn
        .iter()
        .copied()
        .sorted()
        .dedup()
        .enumerate()
        .map(|(rank, color)| (color, rank + 1))
        .collect();
    let colors = drawn.iter().map(|color| rank[color]).collect_vec();

    let edge_count = node_count * (node_count - 1) / 2;
    let mut graph = Graph::with_capacity(node_count, edge_count);
    for color in &colors {
        graph.add_node(*color);
    }

    let mut edges = Vec::with_capacity(edge_count);
    let mut tokens = Vec::with_capacity(edge_count);
    for (i, j) in (0..node_count).tuple_combinations() {
        edges.push(Edge::new(i, j));
        tokens.push(Token::new(colors[i], colors[j])?);
    }
    graph.set_edges(edges)?;

    let hidden = index::sample(rng, node_count, masked).into_vec();
    for i in &hidden {
        graph.set_color(*i, UNCOLORED);
    }

    debug!(node_count, palette = rank.len(), ?hidden, "generated complete graph puzzle");

    Ok(Puzzle::new((1..=rank.len()).collect_vec(), graph, tokens))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_complete, GenerateError};
    use crate::color::UNCOLORED;

    #[test]
    fn rejects_bad_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_complete(0, 0, &mut rng), Err(GenerateError::NoNodes));
        assert_eq!(
            generate_complete(3, 4, &mut rng),
            Err(GenerateError::TooManyMasked { masked: 4, nodes: 3 })
        );
    }

    #[test]
    fn shape_of_complete_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let puzzle = generate_complete(6, 2, &mut rng).unwrap();

        assert_eq!(puzzle.nodes().len(), 6);
        assert_eq!(puzzle.edges().len(), 15);
        assert_eq!(puzzle.tokens().len(), 15);
        assert!(puzzle.graph().is_complete());
        assert_eq!(puzzle.masked_nodes().len(), 2);

        // edges and tokens are enumerated together, in (i, j) order with i < j
        assert_eq!(
            puzzle.edges().iter().map(|e| e.indices()).collect_vec(),
            (0..6).tuple_combinations().collect_vec()
        );
    }

    #[test]
    fn tokens_carry_ground_truth() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = generate_complete(7, 0, &mut rng).unwrap();

        for (edge, token) in puzzle.edges().iter().zip(puzzle.tokens()) {
            assert!(token.colors().0 != UNCOLORED && token.colors().1 != UNCOLORED);
            assert_eq!(puzzle.graph().endpoint_colors(edge), token.colors());
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = generate_complete(8, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_complete(8, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_node() {
        let puzzle = generate_complete(1, 1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(puzzle.colors(), &[1]);
        assert!(puzzle.edges().is_empty());
        assert_eq!(puzzle.masked_nodes(), vec![0]);
    }
}
