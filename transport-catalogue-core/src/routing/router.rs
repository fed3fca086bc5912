use log::debug;

use super::{Itinerary, RouteGraph, RoutePath, shortest_path};
use crate::{RoutingSettings, StopId, TransportCatalogue};

/// Route graph prepared for fastest trip queries.
///
/// Holds no state between queries; every search allocates its own buffers.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    graph: RouteGraph,
    settings: RoutingSettings,
}

impl TransportRouter {
    pub fn new(catalogue: &TransportCatalogue, settings: RoutingSettings) -> Self {
        Self {
            graph: RouteGraph::build(catalogue, &settings),
            settings,
        }
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Best path from arriving at `from` to arriving at `to`
    pub fn build_route(&self, from: StopId, to: StopId) -> Option<RoutePath> {
        shortest_path(
            self.graph.graph(),
            RouteGraph::arrival_node(from),
            RouteGraph::arrival_node(to),
            |edge| edge.time(),
        )
    }

    /// Fastest itinerary between two registered stops.
    ///
    /// A trip from a stop to itself is empty and skips the search.
    /// `None` means `to` cannot be reached from `from`.
    pub fn build_itinerary<'a>(
        &self,
        catalogue: &'a TransportCatalogue,
        from: StopId,
        to: StopId,
    ) -> Option<Itinerary<'a>> {
        if from == to {
            return Some(Itinerary::empty());
        }

        let Some(path) = self.build_route(from, to) else {
            debug!("No route from stop {from} to stop {to}");
            return None;
        };
        Itinerary::from_path(catalogue, &self.graph, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItinerarySegment;

    // A - B - C on line 1, C - D on line 2, E is on no line
    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        for (name, lng) in [("A", 0.0), ("B", 1.0), ("C", 2.0), ("D", 3.0), ("E", 4.0)] {
            catalogue.add_stop(name, 0.0, lng).unwrap();
        }
        catalogue.add_distance("A", "B", 1000.0).unwrap();
        catalogue.add_distance("B", "C", 1000.0).unwrap();
        catalogue.add_distance("C", "D", 4000.0).unwrap();
        catalogue.add_line("1", &["A", "B", "C"], false).unwrap();
        catalogue.add_line("2", &["C", "D"], false).unwrap();
        catalogue
    }

    #[test]
    fn transfer_between_lines() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0));

        let itinerary = router.build_itinerary(&catalogue, 0, 3).unwrap();
        assert_eq!(
            itinerary.items,
            vec![
                ItinerarySegment::Wait {
                    stop: "A",
                    time: 5.0
                },
                ItinerarySegment::Bus {
                    line: "1",
                    span_count: 2,
                    time: 2.0
                },
                ItinerarySegment::Wait {
                    stop: "C",
                    time: 5.0
                },
                ItinerarySegment::Bus {
                    line: "2",
                    span_count: 1,
                    time: 4.0
                },
            ]
        );
        assert_eq!(itinerary.total_time, 16.0);
    }

    #[test]
    fn path_weight_matches_itinerary() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0));

        let path = router.build_route(3, 0).unwrap();
        let itinerary = router.build_itinerary(&catalogue, 3, 0).unwrap();
        assert_eq!(path.weight, itinerary.total_time);
        assert_eq!(path.edges.len(), itinerary.items.len());
    }

    #[test]
    fn same_stop_is_empty() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0));

        assert_eq!(
            router.build_itinerary(&catalogue, 4, 4),
            Some(Itinerary::empty())
        );
    }

    #[test]
    fn stop_without_lines_is_unreachable() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0));

        for from in 0..4 {
            assert!(router.build_itinerary(&catalogue, from, 4).is_none());
            assert!(router.build_itinerary(&catalogue, 4, from).is_none());
        }
    }
}
