// Re-export key components
pub use crate::loading::{NetworkDocument, RoutingSettings, create_transport_model};
pub use crate::model::{LineStats, TransportCatalogue, TransportModel};
pub use crate::requests::{StatRequest, handle_stat_requests};
pub use crate::routing::{Itinerary, ItinerarySegment};

pub use crate::Error;

// Core types for the catalogue
pub use crate::LineId;
pub use crate::StopId;

// Units
pub use crate::Meters;
pub use crate::Minutes;
