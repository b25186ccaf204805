#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::builder::PuzzleBuilder;
    use crate::color::UNCOLORED;
    use crate::generator::generate_complete;
    use crate::solution::PuzzleSolution;
    use crate::token::Token;

    #[test]
    fn five_nodes_one_masked() {
        let mut rng = StdRng::seed_from_u64(2024);
        let puzzle = generate_complete(5, 1, &mut rng).unwrap();
        let masked = puzzle.masked_nodes();
        assert_eq!(masked.len(), 1);

        let solution = puzzle.solve().unwrap();
        assert!(solution.confirm());

        // the masked node now agrees with all four tokens placed against it
        let node = masked[0];
        let color = solution.puzzle().nodes()[node].color();
        assert_ne!(color, UNCOLORED);

        let incident = solution
            .puzzle()
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.indices().0 == node || edge.indices().1 == node)
            .collect_vec();
        assert_eq!(incident.len(), 4);
        for (index, edge) in incident {
            let token = &solution.puzzle().tokens()[solution.token_for(index).unwrap()];
            let end = if edge.indices().0 == node { token.colors().0 } else { token.colors().1 };
            assert_eq!(end, color);
        }
    }

    #[test]
    fn two_nodes_single_token() {
        let mut rng = StdRng::seed_from_u64(99);
        let puzzle = generate_complete(2, 0, &mut rng).unwrap();
        assert_eq!(puzzle.edges().len(), 1);
        assert_eq!(puzzle.tokens().len(), 1);

        let solution = puzzle.solve().unwrap();
        assert_eq!(solution.token_for(0), Some(0));
        let expected = (puzzle.nodes()[0].color(), puzzle.nodes()[1].color());
        assert_eq!(solution.puzzle().tokens()[0].colors(), expected);
        assert!(solution.confirm());
    }

    #[test]
    fn two_nodes_with_reversed_token() {
        let puzzle = PuzzleBuilder::new()
            .add_nodes([1, 2])
            .add_edge(0, 1)
            .add_token(2, 1)
            .build()
            .unwrap();

        let solution = puzzle.solve().unwrap();
        assert_eq!(solution.puzzle().tokens()[0].colors(), (1, 2));
        assert!(solution.confirm());
    }

    #[test]
    fn hand_built_triangle_order_sensitivity() {
        // node 2 is unknown; edges 0-2 and 1-2 both touch it
        let puzzle = PuzzleBuilder::new()
            .add_nodes([1, 1, 0])
            .add_edge(0, 1)
            .add_edge(0, 2)
            .add_edge(1, 2)
            .add_token(1, 1)
            .add_token(1, 2)
            .add_token(1, 3)
            .build()
            .unwrap();

        let disagreeing = PuzzleSolution::new(puzzle.clone(), [(0, 0), (1, 1), (2, 2)].into_iter().collect());
        assert!(!disagreeing.confirm());

        let mut agreeing = puzzle.clone();
        agreeing.tokens[2] = Token::new(1, 2).unwrap();
        let agreeing = PuzzleSolution::new(agreeing, [(0, 0), (1, 1), (2, 2)].into_iter().collect());
        assert!(agreeing.confirm());
    }

    #[test]
    fn every_node_masked() {
        let mut rng = StdRng::seed_from_u64(31337);
        for n in 1..=8 {
            let puzzle = generate_complete(n, n, &mut rng).unwrap();
            let solution = puzzle.solve().unwrap();
            assert!(solution.confirm(), "n = {n}");
            assert!(solution.puzzle().nodes().iter().all(|node| node.is_colored()));
        }
    }

    proptest! {
        #[test]
        fn generated_puzzles_always_solve(nodes in 1usize..12, mask_ratio in 0.0f64..=1.0, seed in any::<u64>()) {
            let masked = ((nodes as f64) * mask_ratio).floor() as usize;
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_complete(nodes, masked, &mut rng).unwrap();
            let snapshot = puzzle.clone();

            // conservation
            prop_assert_eq!(puzzle.tokens().len(), nodes * (nodes - 1) / 2);
            prop_assert_eq!(puzzle.edges().len(), puzzle.tokens().len());

            // palette is 1..=K, and with any edges at all the tokens use every color in it
            let k = puzzle.colors().len();
            prop_assert_eq!(puzzle.colors().to_vec(), (1..=k).collect_vec());
            let used: HashSet<_> = puzzle.tokens().iter().flat_map(|t| [t.colors().0, t.colors().1]).collect();
            if nodes > 1 {
                prop_assert_eq!(used, (1..=k).collect::<HashSet<_>>());
            }

            let solution = puzzle.solve().unwrap();
            prop_assert!(solution.confirm());

            // the input is left alone
            prop_assert_eq!(&puzzle, &snapshot);

            // total and injective
            prop_assert_eq!(
                solution.assignment().keys().copied().collect_vec(),
                (0..puzzle.edges().len()).collect_vec()
            );
            prop_assert_eq!(
                solution.assignment().values().unique().count(),
                solution.assignment().len()
            );
        }
    }
}
