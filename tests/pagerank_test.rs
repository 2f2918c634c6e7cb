use linkrank::{compute_rank, generate_edge_list, Algorithm, Graph, Personalization, RankConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn iterative() -> RankConfig {
    RankConfig::default()
}

fn exact() -> RankConfig {
    RankConfig::default().with_algorithm(Algorithm::Exact)
}

/// Seeded random graphs of varying size and density, sinks and self-loops included
fn random_graphs() -> Vec<Graph> {
    let mut rng = StdRng::seed_from_u64(2024);
    (0..25)
        .map(|_| {
            let nodes = rng.gen_range(1..30u64);
            let edges = rng.gen_range(1..=(nodes as usize * 3));
            Graph::from_edges(generate_edge_list(nodes, edges, &mut rng).unwrap())
        })
        .collect()
}

#[test]
fn test_scores_sum_to_one() {
    for graph in random_graphs() {
        for config in [iterative(), exact()] {
            let outcome = compute_rank(&graph, &config).unwrap();
            assert_eq!(outcome.len(), graph.len());
            assert!(
                (outcome.total_mass() - 1.0).abs() <= 1e-9,
                "{} solver: mass {}",
                config.algorithm,
                outcome.total_mass()
            );
            assert!(outcome.scores.iter().all(|s| s.is_finite() && *s >= 0.0));
        }
    }
}

#[test]
fn test_solvers_agree() {
    for graph in random_graphs() {
        for alpha in [0.1, 0.5, 0.85, 0.9] {
            let a = compute_rank(&graph, &iterative().with_alpha(alpha)).unwrap();
            let b = compute_rank(&graph, &exact().with_alpha(alpha)).unwrap();

            for (x, y) in a.scores.iter().zip(b.scores.iter()) {
                assert!(((x - y) / y).abs() < 1e-3, "alpha {}: {} vs {}", alpha, x, y);
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for graph in random_graphs() {
        let first = compute_rank(&graph, &exact()).unwrap();
        let second = compute_rank(&graph, &exact()).unwrap();
        assert_eq!(first.scores, second.scores);

        let first = compute_rank(&graph, &iterative()).unwrap();
        let second = compute_rank(&graph, &iterative()).unwrap();
        for (x, y) in first.scores.iter().zip(second.scores.iter()) {
            assert!((x - y).abs() < 1e-15);
        }
    }
}

#[test]
fn test_reordered_edges_give_same_scores_per_node() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let edges = generate_edge_list(15, 40, &mut rng).unwrap();
        let mut shuffled = edges.clone();
        shuffled.reverse();
        shuffled.rotate_left(7);

        let g1 = Graph::from_edges(edges);
        let g2 = Graph::from_edges(shuffled);

        for config in [iterative(), exact()] {
            let r1 = compute_rank(&g1, &config).unwrap();
            let r2 = compute_rank(&g2, &config).unwrap();
            for name in g1.names() {
                let s1 = r1.score_of(&g1, name.as_str()).unwrap();
                let s2 = r2.score_of(&g2, name.as_str()).unwrap();
                assert!((s1 - s2).abs() < 1e-9, "{}: {} vs {}", name, s1, s2);
            }
        }
    }
}

#[test]
fn test_three_cycle() {
    let graph = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);

    for config in [iterative(), exact()] {
        let outcome = compute_rank(&graph, &config.with_rounding(true)).unwrap();
        assert_eq!(outcome.scores, vec![0.333, 0.333, 0.333]);
    }
}

#[test]
fn test_single_edge_into_sink() {
    let graph = Graph::from_edges([("A", "B")]);

    for config in [iterative(), exact()] {
        let outcome = compute_rank(&graph, &config).unwrap();
        let a = outcome.score_of(&graph, "A").unwrap();
        let b = outcome.score_of(&graph, "B").unwrap();

        assert!(a.is_finite() && b.is_finite());
        assert!((a + b - 1.0).abs() < 1e-9);
        assert!(b > a);
    }
}

#[test]
fn test_single_isolated_node() {
    let mut graph = Graph::new();
    graph.find_or_create("only");

    for config in [iterative(), exact()] {
        let outcome = compute_rank(&graph, &config.with_rounding(true)).unwrap();
        assert_eq!(outcome.scores, vec![1.0]);
    }
}

#[test]
fn test_empty_graph() {
    for config in [iterative(), exact()] {
        let outcome = compute_rank(&Graph::new(), &config).unwrap();
        assert!(outcome.is_empty());
    }
}

#[test]
fn test_iteration_cap_is_reported() {
    let graph = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A"), ("C", "B")]);
    let outcome = compute_rank(&graph, &iterative().with_max_iterations(2)).unwrap();

    assert_eq!(outcome.iterations, 2);
    assert!(!outcome.converged);
    assert!((outcome.total_mass() - 1.0).abs() < 1e-12);
}

#[test]
fn test_numeric_names_are_unified() {
    let mut graph = Graph::new();
    graph.add_edge(1u64, 2u64);
    graph.add_edge("2", "1");

    let outcome = compute_rank(&graph, &exact()).unwrap();
    assert_eq!(outcome.len(), 2);
    assert!((outcome.score_of(&graph, "1").unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_dangling_policy_by_name() {
    // Sink mass all goes back to "hub"
    let graph = Graph::from_edges([("hub", "a"), ("hub", "b"), ("a", "hub")]);
    let policy = Personalization::by_name([("hub", 1.0)]);

    let a = compute_rank(&graph, &iterative().with_dangling(policy.clone())).unwrap();
    let b = compute_rank(&graph, &exact().with_dangling(policy)).unwrap();
    let uniform = compute_rank(&graph, &exact()).unwrap();

    for (x, y) in a.scores.iter().zip(b.scores.iter()) {
        assert!((x - y).abs() < 1e-9);
    }
    assert!(b.score_of(&graph, "hub").unwrap() > uniform.score_of(&graph, "hub").unwrap());
}
