use hashbrown::HashSet;
use itertools::Itertools;
use serde::Serialize;

use super::catalogue::TransportCatalogue;
use crate::Meters;

/// Aggregate statistics of one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStats {
    /// Stops on the full ridden route, counting the way back of a back-and-forth line
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length of the full ridden route
    pub route_length: Meters,
    /// Road length over geodesic length, `None` when the geodesic length is zero
    pub curvature: Option<f64>,
}

impl TransportCatalogue {
    /// Statistics of a line, `None` if the line is unknown
    pub fn line_stats(&self, name: &str) -> Option<LineStats> {
        let line = self.get_line(name)?;

        let unique_stop_count = line.stops.iter().collect::<HashSet<_>>().len();

        let (route_length, geodesic_length) = line.route_stops().tuple_windows().fold(
            (0.0, 0.0),
            |(road, geodesic), (from, to)| {
                (
                    road + self.stop_distance(from, to),
                    geodesic + self.geodesic_distance(from, to),
                )
            },
        );

        let curvature = (geodesic_length > 0.0).then(|| route_length / geodesic_length);

        Some(LineStats {
            stop_count: line.route_stop_count(),
            unique_stop_count,
            route_length,
            curvature,
        })
    }
}
