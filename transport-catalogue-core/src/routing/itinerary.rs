use serde::Serialize;

use super::{RouteEdge, RouteGraph, RoutePath};
use crate::{Minutes, TransportCatalogue};

/// One step of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItinerarySegment<'a> {
    /// Waiting for a bus at a stop
    Wait {
        #[serde(rename = "stop_name")]
        stop: &'a str,
        time: Minutes,
    },
    /// Riding one line without leaving the bus
    Bus {
        #[serde(rename = "bus")]
        line: &'a str,
        span_count: usize,
        time: Minutes,
    },
}

impl ItinerarySegment<'_> {
    pub fn time(&self) -> Minutes {
        match *self {
            ItinerarySegment::Wait { time, .. } | ItinerarySegment::Bus { time, .. } => time,
        }
    }
}

/// Fastest trip between two stops
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Itinerary<'a> {
    pub items: Vec<ItinerarySegment<'a>>,
    /// Sum of all segment times
    pub total_time: Minutes,
}

impl<'a> Itinerary<'a> {
    /// Trip from a stop to itself: no segments, no time
    pub fn empty() -> Self {
        Self::default()
    }

    /// Translates a path found in the route graph into rider steps.
    ///
    /// The path must start at the arrival node of the source stop, so its first
    /// edge is the wait at that stop. Returns `None` if the path refers to
    /// edges, stops or lines the graph and catalogue do not know.
    pub(crate) fn from_path(
        catalogue: &'a TransportCatalogue,
        graph: &RouteGraph,
        path: &RoutePath,
    ) -> Option<Self> {
        let items = path
            .edges
            .iter()
            .map(|&edge| match *graph.edge(edge)? {
                RouteEdge::Wait { stop, time } => Some(ItinerarySegment::Wait {
                    stop: catalogue.stop(stop)?.name.as_str(),
                    time,
                }),
                RouteEdge::Ride {
                    line,
                    span_count,
                    time,
                } => Some(ItinerarySegment::Bus {
                    line: catalogue.line(line)?.name.as_str(),
                    span_count,
                    time,
                }),
            })
            .collect::<Option<Vec<_>>>()?;

        let total_time = items.iter().map(ItinerarySegment::time).sum();
        Some(Self { items, total_time })
    }
}
