//! Routing over the transport network: graph construction,
//! shortest path search and itinerary reconstruction.

pub mod dijkstra;
pub mod graph;
pub mod itinerary;
pub mod router;

pub use dijkstra::{RoutePath, shortest_path};
pub use graph::{NodeRole, RouteEdge, RouteGraph, RouteNode};
pub use itinerary::{Itinerary, ItinerarySegment};
pub use router::TransportRouter;
