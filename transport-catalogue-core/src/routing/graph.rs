//! Weighted directed graph of the network.
//!
//! Every stop owns two nodes. Arriving at a stop lands on its [`NodeRole::Arrival`]
//! node, and a wait edge leads to the [`NodeRole::Boardable`] node from which
//! rides depart. Each ride edge covers one uninterrupted trip on a line, so
//! a path alternates wait and ride edges.

use log::info;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use crate::{LineId, Minutes, RoutingSettings, StopId, TransportCatalogue};

/// Role of a graph node within its stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Rider has just arrived and still has to wait for a bus
    Arrival,
    /// Rider is ready to board
    Boardable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteNode {
    pub stop: StopId,
    pub role: NodeRole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteEdge {
    /// Mandatory wait before boarding at a stop
    Wait { stop: StopId, time: Minutes },
    /// Ride on one line over `span_count` hops of one traversal
    Ride {
        line: LineId,
        span_count: usize,
        time: Minutes,
    },
}

impl RouteEdge {
    pub fn time(&self) -> Minutes {
        match *self {
            RouteEdge::Wait { time, .. } | RouteEdge::Ride { time, .. } => time,
        }
    }

    pub fn line(&self) -> Option<LineId> {
        match *self {
            RouteEdge::Wait { .. } => None,
            RouteEdge::Ride { line, .. } => Some(line),
        }
    }
}

/// Immutable route graph built once from a finished catalogue.
///
/// Stop `k` owns node `2k` (arrival) and node `2k + 1` (boardable). Edge ids
/// follow construction order: all wait edges first, in stop order, then the
/// ride edges line by line.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DiGraph<RouteNode, RouteEdge>,
}

impl RouteGraph {
    pub fn build(catalogue: &TransportCatalogue, settings: &RoutingSettings) -> Self {
        let stop_count = catalogue.stop_count();
        let mut graph = DiGraph::with_capacity(stop_count * 2, stop_count);

        for stop in 0..stop_count {
            let arrival = graph.add_node(RouteNode {
                stop,
                role: NodeRole::Arrival,
            });
            let boardable = graph.add_node(RouteNode {
                stop,
                role: NodeRole::Boardable,
            });
            graph.add_edge(
                arrival,
                boardable,
                RouteEdge::Wait {
                    stop,
                    time: settings.bus_wait_time,
                },
            );
        }

        let mut route_graph = Self { graph };
        for (line_id, line) in catalogue.lines().iter().enumerate() {
            for traversal in line.traversals() {
                route_graph.add_traversal(catalogue, settings, line_id, &traversal);
            }
        }

        info!(
            "Built route graph with {} nodes and {} edges",
            route_graph.node_count(),
            route_graph.edge_count()
        );
        route_graph
    }

    /// Adds a ride edge from every stop of the traversal to every later one
    fn add_traversal(
        &mut self,
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
        line: LineId,
        stops: &[StopId],
    ) {
        for (from_idx, &from) in stops.iter().enumerate() {
            let mut distance = 0.0;
            for to_idx in from_idx + 1..stops.len() {
                distance += catalogue.stop_distance(stops[to_idx - 1], stops[to_idx]);
                self.graph.add_edge(
                    Self::boardable_node(from),
                    Self::arrival_node(stops[to_idx]),
                    RouteEdge::Ride {
                        line,
                        span_count: to_idx - from_idx,
                        time: settings.travel_time(distance),
                    },
                );
            }
        }
    }

    pub fn arrival_node(stop: StopId) -> NodeIndex {
        NodeIndex::new(stop * 2)
    }

    pub fn boardable_node(stop: StopId) -> NodeIndex {
        NodeIndex::new(stop * 2 + 1)
    }

    pub fn node(&self, node: NodeIndex) -> Option<&RouteNode> {
        self.graph.node_weight(node)
    }

    pub fn edge(&self, edge: EdgeIndex) -> Option<&RouteEdge> {
        self.graph.edge_weight(edge)
    }

    /// Line that produced a ride edge; wait edges have none
    pub fn edge_line(&self, edge: EdgeIndex) -> Option<LineId> {
        self.edge(edge).and_then(RouteEdge::line)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn graph(&self) -> &DiGraph<RouteNode, RouteEdge> {
        &self.graph
    }
}
