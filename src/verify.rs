use itertools::Itertools;

use crate::Graph;

/// Column committed for a row of a fully assigned candidate matrix
fn image_of(m: &[Vec<u8>], row: usize) -> Option<usize> {
    m[row].iter().position(|&cell| cell == 1)
}

/// Check that every pattern edge lands on a host edge under the row-to-column
/// assignment in `m`.
///
/// Only edges present in the pattern are checked; pattern non-edges impose no
/// constraint on the host, so extra host edges between mapped vertices are
/// fine.
pub fn verify(m: &[Vec<u8>], host: &Graph, pattern: &Graph) -> bool {
    let rows = pattern.num_vertices();

    (0..rows)
        .cartesian_product(0..rows)
        .filter(|&(r1, r2)| pattern.has_edge(r1, r2))
        .all(|(r1, r2)| match (image_of(m, r1), image_of(m, r2)) {
            (Some(c1), Some(c2)) => host.has_edge(c1, c2),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_host() -> Graph {
        // 0 -> 1 -> 2
        Graph::from_adjacency_matrix(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]])
    }

    #[test]
    fn test_accepts_edge_preserving_assignment() {
        let host = path_host();
        let pattern = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0, 0]]);

        // p0 -> 1, p1 -> 2 covers the pattern edge via host edge 1 -> 2
        let m = vec![vec![0, 1, 0], vec![0, 0, 1]];
        assert!(verify(&m, &host, &pattern));
    }

    #[test]
    fn test_rejects_missing_host_edge() {
        let host = path_host();
        let pattern = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0, 0]]);

        // p0 -> 0, p1 -> 2 but the host has no edge 0 -> 2
        let m = vec![vec![1, 0, 0], vec![0, 0, 1]];
        assert!(!verify(&m, &host, &pattern));
    }

    #[test]
    fn test_pattern_non_edges_are_unconstrained() {
        // Host has both directions between its two vertices
        let host = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![1, 0]]);
        // Pattern only requires one direction
        let pattern = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0, 0]]);

        let m = vec![vec![1, 0], vec![0, 1]];
        assert!(verify(&m, &host, &pattern));
    }

    #[test]
    fn test_edgeless_pattern_always_verifies() {
        let host = path_host();
        let pattern = Graph::new(2);
        let m = vec![vec![0, 0, 1], vec![1, 0, 0]];
        assert!(verify(&m, &host, &pattern));
    }

    #[test]
    fn test_uncommitted_row_fails() {
        let host = path_host();
        let pattern = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0, 0]]);

        // Row for p1 was never collapsed to a single column
        let m = vec![vec![0, 1, 0], vec![0, 0, 0]];
        assert!(!verify(&m, &host, &pattern));
    }
}
