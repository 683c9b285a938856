use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use leafy::{Bfs, Dfs, DigraphDfs, Dijkstra, SparseGraph};
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 7;

/// Node count of a full `WIDTH`-ary tree of the given depth.
fn tree_size(depth: u32) -> usize {
    (0..=depth).map(|d| WIDTH.pow(d)).sum()
}

/// Breadth-first numbered `WIDTH`-ary tree, edges pointing away from 0.
fn large_dag(depth: u32) -> SparseGraph {
    let n = tree_size(depth);
    let mut graph = SparseGraph::new(n, true);
    for child in 1..n {
        graph.add_edge((child - 1) / WIDTH, child).unwrap();
    }
    graph
}

/// The same tree with random weights, plus a random extra edge from about
/// half of the parents to an earlier node, which closes cycles.
fn large_weighted_graph(depth: u32) -> SparseGraph {
    let n = tree_size(depth);
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
    let mut graph = SparseGraph::new(n, true);
    for child in 1..n {
        let parent = (child - 1) / WIDTH;
        graph.add_weighted_edge(parent, child, rng.gen::<f64>()).unwrap();
        if rng.gen_bool(0.5) {
            let target = rng.gen_range(0..child);
            graph.add_weighted_edge(parent, target, rng.gen::<f64>()).unwrap();
        }
    }
    graph
}

fn bench_dag(c: &mut Criterion) {
    let mut group = c.benchmark_group("dag");
    for depth in [4, 6] {
        let graph = large_dag(depth);
        group.bench_with_input(BenchmarkId::new("topological_order", depth), &graph, |b, g| {
            b.iter(|| {
                let mut dfs = DigraphDfs::new(g, 0).unwrap();
                dfs.run();
                black_box(dfs.topological_order().count())
            });
        });
    }
    group.finish();
}

fn bench_cyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic");
    group.sample_size(20);
    for depth in [4, 6] {
        let graph = large_weighted_graph(depth);

        group.bench_with_input(BenchmarkId::new("dfs", depth), &graph, |b, g| {
            b.iter(|| {
                let mut dfs = Dfs::new(g, 0).unwrap();
                dfs.run();
                black_box(dfs.articulation_points().len())
            });
        });

        group.bench_with_input(BenchmarkId::new("bfs", depth), &graph, |b, g| {
            b.iter(|| {
                let mut bfs = Bfs::new(g, 0).unwrap();
                bfs.run();
                black_box(bfs.shortest_path(g.node_count() - 1).ok())
            });
        });

        group.bench_with_input(BenchmarkId::new("dijkstra", depth), &graph, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g, 0).unwrap();
                dijkstra.run();
                black_box(dijkstra.weight(g.node_count() - 1).ok())
            });
        });

        let mut reference = petgraph::graph::DiGraph::<(), f64>::new();
        let nodes: Vec<_> = (0..graph.node_count()).map(|_| reference.add_node(())).collect();
        for (u, v) in graph.list().pairs() {
            reference.add_edge(nodes[u], nodes[v], graph.edge_weight(u, v));
        }
        group.bench_with_input(BenchmarkId::new("petgraph_dijkstra", depth), &reference, |b, g| {
            b.iter(|| black_box(petgraph::algo::dijkstra(g, nodes[0], None, |e| *e.weight()).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dag, bench_cyclic);
criterion_main!(benches);
