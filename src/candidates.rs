use crate::compat::Compatibility;
use crate::{Graph, Matrix};

/// Build the initial pattern-by-host possibility matrix.
///
/// Cell (i, j) is 1 iff the predicate accepts pattern vertex i as a possible
/// image of host vertex j. This is the search engine's starting state, before
/// any row has been committed.
pub fn init_candidates<C: Compatibility>(host: &Graph, pattern: &Graph, compat: &C) -> Matrix {
    (0..pattern.num_vertices())
        .map(|p| {
            (0..host.num_vertices())
                .map(|g| u8::from(compat.compatible(pattern, host, p, g)))
                .collect()
        })
        .collect()
}
