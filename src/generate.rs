use rand::Rng;
use thiserror::Error;

use crate::Graph;

/// Requested more edges than a simple directed graph on `vertices` vertices
/// can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot place {edges} edges in a simple directed graph on {vertices} vertices (max {max})")]
pub struct TooManyEdges {
    pub vertices: usize,
    pub edges: usize,
    pub max: usize,
}

/// Build a random simple directed graph with `n` vertices and exactly `m`
/// edges.
///
/// Source/target pairs are drawn uniformly and redrawn on collision with an
/// existing edge or a self-loop, so the result always carries exactly `m`
/// distinct edges. Requires `m <= n * (n - 1)`.
pub fn random_graph<R: Rng>(n: usize, m: usize, rng: &mut R) -> Result<Graph, TooManyEdges> {
    let max = n.saturating_mul(n.saturating_sub(1));
    if m > max {
        return Err(TooManyEdges {
            vertices: n,
            edges: m,
            max,
        });
    }

    let mut graph = Graph::new(n);
    let mut edge_count = 0;

    while edge_count < m {
        let src = rng.gen_range(0..n);
        let tar = rng.gen_range(0..n);

        if src != tar && graph.adj[src][tar] == 0 {
            graph.adj[src][tar] = 1;
            edge_count += 1;
        }
    }

    Ok(graph)
}
