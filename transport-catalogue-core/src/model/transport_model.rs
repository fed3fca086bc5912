use std::{collections::BTreeSet, fmt};

use log::info;

use super::{LineStats, TransportCatalogue};
use crate::{
    Error, Itinerary, RoutingSettings,
    routing::TransportRouter,
};

/// Finalized network: the catalogue together with its route graph.
///
/// Nothing can be added after finalization and every query takes `&self`,
/// so one model can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct TransportModel {
    catalogue: TransportCatalogue,
    router: TransportRouter,
}

/// Size of the route graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

impl TransportCatalogue {
    /// Builds the route graph and freezes the catalogue
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if the settings would produce
    /// negative or undefined edge weights
    pub fn finalize(self, settings: RoutingSettings) -> Result<TransportModel, Error> {
        TransportModel::new(self, settings)
    }
}

impl TransportModel {
    /// See [`TransportCatalogue::finalize`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] for unusable routing settings
    pub fn new(catalogue: TransportCatalogue, settings: RoutingSettings) -> Result<Self, Error> {
        settings.validate()?;

        info!(
            "Building route graph for {} stops and {} lines",
            catalogue.stop_count(),
            catalogue.line_count()
        );
        let router = TransportRouter::new(&catalogue, settings);

        Ok(Self { catalogue, router })
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    pub fn settings(&self) -> &RoutingSettings {
        self.router.settings()
    }

    pub fn stop_count(&self) -> usize {
        self.catalogue.stop_count()
    }

    pub fn line_count(&self) -> usize {
        self.catalogue.line_count()
    }

    pub fn graph_stats(&self) -> GraphStats {
        let graph = self.router.graph();
        GraphStats {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }

    /// Statistics of a line, `None` if the line is unknown
    pub fn line_stats(&self, name: &str) -> Option<LineStats> {
        self.catalogue.line_stats(name)
    }

    /// Lines serving a stop, `None` if the stop is unknown
    pub fn lines_through_stop(&self, name: &str) -> Option<BTreeSet<&str>> {
        self.catalogue.lines_through_stop(name)
    }

    /// Fastest itinerary between two stops by name.
    ///
    /// `None` if either stop is unknown or `to` cannot be reached from `from`.
    /// A trip from a stop to itself is an empty itinerary.
    pub fn build_itinerary(&self, from: &str, to: &str) -> Option<Itinerary<'_>> {
        let from = self.catalogue.stop_id(from)?;
        let to = self.catalogue.stop_id(to)?;
        self.router.build_itinerary(&self.catalogue, from, to)
    }
}

impl fmt::Display for TransportModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph_stats();
        write!(
            f,
            "TransportModel with {} stops, {} lines and a route graph of {} nodes and {} edges",
            self.stop_count(),
            self.line_count(),
            graph.node_count,
            graph.edge_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sync<T: Send + Sync>() {}

    #[test]
    fn model_is_shareable() {
        assert_sync::<TransportModel>();
    }

    #[test]
    fn finalize_validates_settings() {
        let catalogue = TransportCatalogue::new();
        assert!(matches!(
            catalogue.finalize(RoutingSettings::new(6.0, -40.0)),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn unknown_names_are_not_found() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", 55.0, 37.0).unwrap();
        let model = catalogue.finalize(RoutingSettings::new(6.0, 40.0)).unwrap();

        assert!(model.build_itinerary("A", "Z").is_none());
        assert!(model.build_itinerary("Z", "A").is_none());
        assert!(model.build_itinerary("Z", "Z").is_none());
        assert_eq!(model.build_itinerary("A", "A"), Some(Itinerary::empty()));
        assert!(model.line_stats("1").is_none());
        assert!(model.lines_through_stop("Z").is_none());
        assert_eq!(model.lines_through_stop("A"), Some(BTreeSet::new()));
    }

    #[test]
    fn summary() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", 55.0, 37.0).unwrap();
        catalogue.add_stop("B", 55.1, 37.0).unwrap();
        catalogue.add_line("1", &["A", "B"], false).unwrap();
        let model = catalogue.finalize(RoutingSettings::new(6.0, 40.0)).unwrap();

        assert_eq!(
            model.graph_stats(),
            GraphStats {
                node_count: 4,
                edge_count: 4
            }
        );
        assert_eq!(
            model.to_string(),
            "TransportModel with 2 stops, 1 lines and a route graph of 4 nodes and 4 edges"
        );
    }
}
