//! Indexed catalogue of stops, lines and road distances

use std::collections::BTreeSet;

use hashbrown::HashMap;
use log::warn;

use super::types::{Line, Stop};
use crate::{Error, LineId, Meters, StopId, distance::geodesic_distance};

/// Owns every stop and line of the network.
///
/// Stops and lines live in insertion ordered arenas and are referenced by
/// their index everywhere else. Entries are never removed or mutated once
/// added, so indices stay valid for the catalogue lifetime.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    lines: Vec<Line>,
    stop_index: HashMap<String, StopId>,
    line_index: HashMap<String, LineId>,
    /// Directed road distances, (from, to) -> meters
    road_distances: HashMap<(StopId, StopId), Meters>,
    /// Lines through each stop, without duplicates
    stop_lines: Vec<Vec<LineId>>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new stop
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateStop`] if a stop with the same name exists
    /// and [`Error::InvalidData`] if a coordinate is not a finite number
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<StopId, Error> {
        let stop = Stop::new(name, latitude, longitude);
        if self.stop_index.contains_key(&stop.name) {
            return Err(Error::DuplicateStop(stop.name));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Error::InvalidData(format!(
                "coordinates of stop {} must be finite numbers, got ({latitude}, {longitude})",
                stop.name
            )));
        }

        let id = self.stops.len();
        self.stop_index.insert(stop.name.clone(), id);
        self.stops.push(stop);
        self.stop_lines.push(Vec::new());
        Ok(id)
    }

    /// Sets the road distance from one stop to another.
    ///
    /// The entry is directed; an earlier entry for the same ordered pair is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStop`] if either stop is not registered
    pub fn add_distance(&mut self, from: &str, to: &str, meters: Meters) -> Result<(), Error> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;

        if !meters.is_finite() || meters < 0.0 {
            return Err(Error::InvalidData(format!(
                "road distance from {from} to {to} must be a non-negative number, got {meters}"
            )));
        }

        if let Some(previous) = self.road_distances.insert((from_id, to_id), meters) {
            warn!("Road distance from {from} to {to} replaced: {previous} -> {meters}");
        }
        Ok(())
    }

    /// Registers a line over already registered stops
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStop`] naming the first missing stop,
    /// [`Error::DuplicateLine`] if the name is taken and
    /// [`Error::EmptyLine`] if no stops are given.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<LineId, Error> {
        let name = name.into();
        if self.line_index.contains_key(&name) {
            return Err(Error::DuplicateLine(name));
        }
        if stop_names.is_empty() {
            return Err(Error::EmptyLine(name));
        }

        // Resolve everything first so a failed call leaves the catalogue untouched
        let stops = stop_names
            .iter()
            .map(|stop_name| self.require_stop(stop_name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = self.lines.len();
        for &stop in &stops {
            let lines = &mut self.stop_lines[stop];
            if lines.last() != Some(&id) {
                lines.push(id);
            }
        }

        self.line_index.insert(name.clone(), id);
        self.lines.push(Line {
            name,
            stops,
            is_roundtrip,
        });
        Ok(id)
    }

    fn require_stop(&self, name: &str) -> Result<StopId, Error> {
        self.stop_id(name)
            .ok_or_else(|| Error::UnknownStop(name.to_string()))
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.line_index.get(name).copied()
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id])
    }

    pub fn get_line(&self, name: &str) -> Option<&Line> {
        self.line_id(name).map(|id| &self.lines[id])
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Stop names in registration order
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }

    /// Line names in registration order
    pub fn line_names(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.name.as_str()).collect()
    }

    /// Forward stop names of a line
    pub fn line_stops(&self, name: &str) -> Option<Vec<&str>> {
        self.get_line(name).map(|line| {
            line.stops
                .iter()
                .map(|&stop| self.stops[stop].name.as_str())
                .collect()
        })
    }

    /// Names of the lines serving a stop.
    ///
    /// `None` means the stop is unknown; a known stop without lines
    /// yields an empty set.
    pub fn lines_through_stop(&self, name: &str) -> Option<BTreeSet<&str>> {
        let stop = self.stop_id(name)?;
        Some(
            self.stop_lines[stop]
                .iter()
                .map(|&line| self.lines[line].name.as_str())
                .collect(),
        )
    }

    /// Road distance between two stops by name, `None` if either is unknown
    pub fn distance(&self, from: &str, to: &str) -> Option<Meters> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        Some(self.stop_distance(from, to))
    }

    /// Road distance between two registered stops.
    ///
    /// Looks up the directed entry, then the opposite one, and falls back to
    /// the geodesic distance between the stops.
    ///
    /// # Panics
    ///
    /// If either id is out of range
    pub fn stop_distance(&self, from: StopId, to: StopId) -> Meters {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
            .unwrap_or_else(|| self.geodesic_distance(from, to))
    }

    /// Great-circle distance between two registered stops
    pub fn geodesic_distance(&self, from: StopId, to: StopId) -> Meters {
        geodesic_distance(self.stops[from].geometry, self.stops[to].geometry)
    }

    pub(crate) fn road_distance_count(&self) -> usize {
        self.road_distances.len()
    }
}
