//! Benchmarks for the embedding search entry point.
//!
//! Uses the large-host experiment shape: hosts of growing size at a quarter
//! of the possible arc count, searched for a fixed 5-node, 6-edge pattern.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use subgraph_isomorphism::{find_embeddings, generate::random_graph, Graph};

const PATTERN_NODES: usize = 5;
const PATTERN_EDGES: usize = 6;

fn instance(host_nodes: usize, seed: u64) -> (Graph, Graph) {
    let mut rng = StdRng::seed_from_u64(seed);
    let host_edges = host_nodes * (host_nodes - 1) / 4;
    let host = random_graph(host_nodes, host_edges, &mut rng).unwrap();
    let pattern = random_graph(PATTERN_NODES, PATTERN_EDGES, &mut rng).unwrap();
    (host, pattern)
}

fn bench_embedding_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedding_search");

    for host_nodes in [8usize, 12, 16, 20] {
        let (host, pattern) = instance(host_nodes, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(host_nodes),
            &host_nodes,
            |b, _| b.iter(|| find_embeddings(black_box(&host), black_box(&pattern), None)),
        );
    }

    group.finish();
}

fn bench_capped_search(c: &mut Criterion) {
    let (host, pattern) = instance(20, 42);

    c.bench_function("embedding_search_first_match", |b| {
        b.iter(|| find_embeddings(black_box(&host), black_box(&pattern), Some(1)))
    });
}

criterion_group!(benches, bench_embedding_search, bench_capped_search);
criterion_main!(benches);
