//! Single pair shortest path search over non-negative edge weights

mod state;

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use state::State;

/// Edges of a best path in travel order, with their total weight
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    pub edges: Vec<EdgeIndex>,
    pub weight: f64,
}

/// Dijkstra's algorithm from `source` to `target`.
///
/// Returns `None` if the target cannot be reached. When several paths share
/// the minimal weight, every node keeps the incoming edge with the lowest
/// id, so the result only depends on the graph and its edge order.
/// The graph is only read, so one graph can serve any number of searches.
pub fn shortest_path<N, E, F>(
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    target: NodeIndex,
    edge_cost: F,
) -> Option<RoutePath>
where
    F: Fn(&E) -> f64,
{
    let node_count = graph.node_count();
    if source.index() >= node_count || target.index() >= node_count {
        return None;
    }

    let mut costs = vec![f64::INFINITY; node_count];
    let mut predecessors: Vec<Option<EdgeIndex>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    // Start node has cost 0
    costs[source.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry
        if settled.contains(node.index()) {
            continue;
        }
        settled.insert(node.index());

        if node == target {
            break;
        }

        for edge in graph.edges(node) {
            let next = edge.target().index();
            if settled.contains(next) {
                continue;
            }

            let weight = edge_cost(edge.weight());
            debug_assert!(weight >= 0.0, "negative edge weight {weight}");
            let next_cost = cost + weight;

            if next_cost < costs[next] {
                costs[next] = next_cost;
                predecessors[next] = Some(edge.id());
                heap.push(State {
                    cost: next_cost,
                    node: edge.target(),
                });
            } else if next_cost == costs[next]
                && predecessors[next].is_some_and(|prev| edge.id() < prev)
            {
                predecessors[next] = Some(edge.id());
            }
        }
    }

    if !settled.contains(target.index()) {
        return None;
    }

    // Follow predecessors backward from target to source
    let mut edges = Vec::new();
    let mut current = target;
    while current != source {
        let edge = predecessors[current.index()]?;
        edges.push(edge);
        current = graph.edge_endpoints(edge)?.0;
    }
    edges.reverse();

    Some(RoutePath {
        edges,
        weight: costs[target.index()],
    })
}
