use geo::Point;

use crate::StopId;

/// Named geographic point of the network
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    /// Stop coordinates, x is longitude and y is latitude
    pub geometry: Point<f64>,
}

impl Stop {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Named sequence of stops served by one bus.
///
/// Only the forward order is stored. A back-and-forth line is ridden
/// forward and then back along the same stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Line {
    /// Full ridden sequence: `A,B,C` becomes `A,B,C,B,A` unless the line is a loop
    pub fn route_stops(&self) -> impl Iterator<Item = StopId> + '_ {
        let backward = if self.is_roundtrip {
            None
        } else {
            Some(self.stops.iter().rev().skip(1))
        };
        self.stops
            .iter()
            .chain(backward.into_iter().flatten())
            .copied()
    }

    /// Number of stops in the full ridden sequence
    pub fn route_stop_count(&self) -> usize {
        if self.is_roundtrip || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }

    /// Stop sequences that can be ridden without leaving the bus.
    ///
    /// A loop has a single traversal. A back-and-forth line has the forward
    /// one and the reversed one, each starting from its own terminal.
    pub fn traversals(&self) -> Vec<Vec<StopId>> {
        let forward = self.stops.clone();
        if self.is_roundtrip {
            vec![forward]
        } else {
            let backward = self.stops.iter().rev().copied().collect();
            vec![forward, backward]
        }
    }
}
