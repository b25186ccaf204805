#![warn(missing_docs)]

//! # `matchmatch`
//!
//! A model, generator and solver for the match-stick puzzle: given a graph whose nodes carry colors, some of them unknown,
//! and a bag of match sticks with two colored ends, place exactly one stick on every edge so that each stick's ends
//! match the colors of the nodes it joins, using every stick once. Unknown node colors must be chosen along the way.
//!
//! Make a puzzle with [`generate_complete`] or by hand with a [`PuzzleBuilder`], call [`solve()`](Puzzle::solve)
//! to get a [`PuzzleSolution`], and [`confirm()`](PuzzleSolution::confirm) it independently:
//!
//! ```
//! use matchmatch::generate_complete;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(5);
//! let puzzle = generate_complete(5, 1, &mut rng).unwrap();
//! let solution = puzzle.solve().unwrap();
//! assert!(solution.confirm());
//! ```
//!
//! # Internals
//! Only complete graphs are solved. There every node has degree `n - 1`, so counting the ends of each color over all
//! sticks says exactly how many nodes carry that color. Masked nodes get the colors that are still short,
//! and sticks are then handed out edge by edge from buckets keyed by their unordered pair of end colors.
//!
//! Nothing here modifies a caller's puzzle: the solver works on its own copy, and verification keeps deduced colors to itself.

pub use builder::{BuilderInvalidReason, PuzzleBuilder};
pub use color::{Color, UNCOLORED};
pub use generator::{generate_complete, GenerateError};
pub use graph::{Edge, Graph, GraphError, Node};
pub use puzzle::Puzzle;
pub use solution::{Inconsistency, PuzzleSolution};
pub use solver::{CompleteGraphSolver, SolverFailure};
pub use token::{Token, TokenError};

pub mod builder;
pub(crate) mod color;
pub(crate) mod generator;
pub(crate) mod graph;
pub(crate) mod puzzle;
pub(crate) mod solution;
pub mod solver;
mod tests;
pub(crate) mod token;
#[cfg(feature = "wasm")]
pub mod wasm;
