use crate::candidates::init_candidates;
use crate::compat::{Compatibility, DegreeCompatibility};
use crate::error::ShapeError;
use crate::verify::verify;
use crate::{Graph, Matrix, Morphism};

/// Find all embeddings of `pattern` in `host` using the degree-based
/// compatibility rule, stopping after `cap` results if one is given.
///
/// Returns the morphism matrices in a deterministic order; an empty list
/// means no embedding exists (or the cap was zero), never malformed input.
pub fn find_embeddings(
    host: &Graph,
    pattern: &Graph,
    cap: Option<usize>,
) -> Result<Vec<Morphism>, ShapeError> {
    find_embeddings_with(host, pattern, cap, &DegreeCompatibility)
}

/// Variant of [`find_embeddings`] with an injected compatibility predicate.
pub fn find_embeddings_with<C: Compatibility>(
    host: &Graph,
    pattern: &Graph,
    cap: Option<usize>,
    compat: &C,
) -> Result<Vec<Morphism>, ShapeError> {
    // No embedding possible if the pattern outgrows the host, not an error
    if pattern.num_vertices() > host.num_vertices() {
        return Ok(Vec::new());
    }

    // A zero cap asks for nothing, not an error
    if cap == Some(0) {
        return Ok(Vec::new());
    }

    if !host.is_square() {
        return Err(ShapeError::NonSquareHost);
    }
    if !pattern.is_square() {
        return Err(ShapeError::NonSquarePattern);
    }

    let m = init_candidates(host, pattern, compat);
    let mut used_columns = vec![false; host.num_vertices()];
    let mut results = Vec::new();

    backtrack(0, host, pattern, &m, &mut used_columns, &mut results, cap);

    Ok(results)
}

/// Recursive backtracking over pattern rows, committing one host column per
/// row.
///
/// Each committed branch gets its own clone of the candidate matrix, so
/// sibling branches never observe each other's rows. `used_columns` is shared
/// along the current path only: it is marked before the descent and unmarked
/// after it on every loop iteration, including iterations where the cap
/// suppressed the descent.
fn backtrack(
    row: usize,
    host: &Graph,
    pattern: &Graph,
    m: &Matrix,
    used_columns: &mut [bool],
    results: &mut Vec<Morphism>,
    cap: Option<usize>,
) {
    if row == pattern.num_vertices() {
        // Full assignment reached
        if verify(m, host, pattern) {
            results.push(m.clone());
        }
        return;
    }

    // Try columns in ascending order; this fixes the result order
    for c in 0..host.num_vertices() {
        if m[row][c] != 1 || used_columns[c] {
            continue;
        }

        // Commit this row to column c in a branch-local copy
        let mut committed = m.clone();
        for (i, cell) in committed[row].iter_mut().enumerate() {
            *cell = u8::from(i == c);
        }

        used_columns[c] = true;

        // Descend only while the cap still has room
        if cap.map_or(true, |limit| results.len() < limit) {
            backtrack(row + 1, host, pattern, &committed, used_columns, results, cap);
        }

        used_columns[c] = false;
    }
}
