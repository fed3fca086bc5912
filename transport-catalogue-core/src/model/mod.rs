//! Data model of the transport network
//!
//! Contains the catalogue of stops, lines and road distances, and the
//! finalized model that pairs it with the routing graph.

pub mod catalogue;
pub mod stats;
pub mod transport_model;
pub mod types;

pub use catalogue::TransportCatalogue;
pub use stats::LineStats;
pub use transport_model::{GraphStats, TransportModel};
pub use types::{Line, Stop};
