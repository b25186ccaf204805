use itertools::Itertools;
use strum::Display;

use crate::color::{Color, UNCOLORED};
use crate::graph::Graph;
use crate::puzzle::Puzzle;
use crate::token::Token;

/// Reasons a [`PuzzleBuilder`] may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum BuilderInvalidReason {
    /// An edge was added naming a node which has not been added (yet).
    NodeOutOfRange,
    /// A token was added with both ends uncolored.
    UncoloredToken,
}

/// Assembles a [`Puzzle`] by hand, one node, edge and token at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once invalid, every further call does nothing and [`build`](Self::build) reports why.
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    node_colors: Vec<Color>,
    edges: Vec<(usize, usize)>,
    tokens: Vec<Token>,
    palette: Option<Vec<Color>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl PuzzleBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with `color` ([`UNCOLORED`] to leave it masked). Nodes are indexed in the order they are added.
    pub fn add_node(&mut self, color: Color) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.node_colors.push(color);
        self
    }

    /// Shorthand for multiple calls to [`Self::add_node`].
    pub fn add_nodes(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        for color in colors {
            self.add_node(color);
        }

        self
    }

    /// Join two previously added nodes. The order of `index1` and `index2` decides how a token on this edge is read.
    ///
    /// May cause the builder to enter a [`NodeOutOfRange`](BuilderInvalidReason::NodeOutOfRange) invalid state.
    pub fn add_edge(&mut self, index1: usize, index2: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if index1 >= self.node_colors.len() || index2 >= self.node_colors.len() {
            self.invalid_reasons.push(BuilderInvalidReason::NodeOutOfRange);
            return self;
        }

        self.edges.push((index1, index2));
        self
    }

    /// Add a match stick with ends `(color_a, color_b)`.
    ///
    /// May cause the builder to enter an [`UncoloredToken`](BuilderInvalidReason::UncoloredToken) invalid state.
    pub fn add_token(&mut self, color_a: Color, color_b: Color) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match Token::new(color_a, color_b) {
            Ok(token) => self.tokens.push(token),
            Err(_) => self.invalid_reasons.push(BuilderInvalidReason::UncoloredToken),
        }

        self
    }

    /// Set the palette explicitly. Otherwise it is every concrete color found on the nodes and tokens.
    pub fn with_palette(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.palette = Some(colors.into_iter().sorted().dedup().collect_vec());
        self
    }

    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn derived_palette(&self) -> Vec<Color> {
        self.node_colors
            .iter()
            .copied()
            .chain(self.tokens.iter().flat_map(|token| {
                let (a, b) = token.colors();
                [a, b]
            }))
            .filter(|color| *color != UNCOLORED)
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// Convert the state of this builder into a [`Puzzle`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut graph = Graph::with_capacity(self.node_colors.len(), self.edges.len());
        for color in &self.node_colors {
            graph.add_node(*color);
        }
        for (index1, index2) in &self.edges {
            graph
                .add_edge(*index1, *index2)
                .expect("edge endpoints are bounds-checked by add_edge");
        }

        Ok(Puzzle::new(
            self.palette.clone().unwrap_or_else(|| self.derived_palette()),
            graph,
            self.tokens.clone(),
        ))
    }
}
