#![allow(dead_code)]

use constrained_mst::Edge;
use rand::seq::index;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate a random connected graph: a random spanning tree over vertices
/// `1..=n` plus `extra_edges` additional random edges. Weights are in
/// `1..=100`; nothing is flagged required.
pub fn random_connected_graph(n: u32, extra_edges: usize, seed: u64) -> Vec<Edge> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_connected_graph_with_rng(n, extra_edges, &mut rng)
}

pub fn random_connected_graph_with_rng<R: Rng + ?Sized>(
    n: u32,
    extra_edges: usize,
    rng: &mut R,
) -> Vec<Edge> {
    let mut edges = Vec::with_capacity((n as usize).saturating_sub(1) + extra_edges);

    // Random spanning tree: each vertex beyond 1 attaches to an earlier one.
    for v in 2..=n {
        let u = rng.gen_range(1..v);
        edges.push(Edge::new(u, v, rng.gen_range(1..=100), false));
    }

    // Extra edges may duplicate tree edges; that is fine for MST input.
    for _ in 0..extra_edges {
        let u = rng.gen_range(1..=n);
        let mut v = rng.gen_range(1..=n);
        while v == u {
            v = rng.gen_range(1..=n);
        }
        edges.push(Edge::new(u, v, rng.gen_range(1..=100), false));
    }

    edges
}

/// Like `random_connected_graph`, but flags `num_required` of the spanning
/// tree edges as required. Tree edges are acyclic by construction, so the
/// required set is always satisfiable.
pub fn with_random_required(
    n: u32,
    extra_edges: usize,
    num_required: usize,
    seed: u64,
) -> Vec<Edge> {
    let mut edges = random_connected_graph(n, extra_edges, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);

    let tree_count = (n as usize).saturating_sub(1);
    for i in index::sample(&mut rng, tree_count, num_required.min(tree_count)).iter() {
        edges[i].required = true;
    }
    edges
}

/// Two random connected components over `1..=na` and `na+1..=na+nb` with no
/// bridging edge. Returns `(num_vertices, edges)`.
pub fn disconnected_graph(na: u32, nb: u32, seed: u64) -> (u32, Vec<Edge>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for v in 2..=na {
        edges.push(Edge::new(rng.gen_range(1..v), v, rng.gen_range(1..=100), false));
    }
    for v in na + 2..=na + nb {
        edges.push(Edge::new(
            rng.gen_range(na + 1..v),
            v,
            rng.gen_range(1..=100),
            false,
        ));
    }

    (na + nb, edges)
}

/// Exhaustive ground truth: the minimum total weight over all spanning
/// trees containing every required edge, or `None` when no such tree
/// exists. Only usable for small edge counts.
pub fn brute_force_min_weight(num_vertices: u32, edges: &[Edge]) -> Option<i64> {
    let n = num_vertices as usize;
    let m = edges.len();
    assert!(m < 24, "edge count too large for exhaustive enumeration");

    let need = n - 1;
    let required_mask: u64 = edges
        .iter()
        .enumerate()
        .filter(|(_, e)| e.required)
        .fold(0, |acc, (i, _)| acc | 1 << i);

    let mut best: Option<i64> = None;
    for mask in 0u64..(1u64 << m) {
        if mask.count_ones() as usize != need || mask & required_mask != required_mask {
            continue;
        }

        let mut parent: Vec<u32> = (0..=num_vertices).collect();
        let mut merges = 0usize;
        let mut weight = 0i64;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let ru = root(&parent, e.u);
            let rv = root(&parent, e.v);
            if ru != rv {
                parent[ru as usize] = rv;
                merges += 1;
            }
            weight += e.weight;
        }

        // Exactly V-1 edges that all merge means a spanning tree.
        if merges == need && best.map_or(true, |b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

fn root(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}
