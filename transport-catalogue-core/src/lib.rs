//! Public transport catalogue and routing engine.
//!
//! The catalogue stores stops, lines and road distances. Once it is complete
//! it is finalized into a [`TransportModel`], which owns a weighted route graph
//! and answers line statistics, stop lookups and fastest itinerary queries.

pub mod distance;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod requests;
pub mod routing;

pub use error::Error;
pub use loading::{NetworkDocument, RoutingSettings, create_transport_model};
pub use model::{LineStats, TransportCatalogue, TransportModel};
pub use routing::{Itinerary, ItinerarySegment};

/// Index of a stop in the catalogue, stable for the catalogue lifetime
pub type StopId = usize;
/// Index of a line in the catalogue, stable for the catalogue lifetime
pub type LineId = usize;
/// Duration in minutes
pub type Minutes = f64;
/// Distance in meters
pub type Meters = f64;
