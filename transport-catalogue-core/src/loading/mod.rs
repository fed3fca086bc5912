//! This module is responsible for reading the JSON network document
//! and building a finalized transport model from it.

mod builder;
mod config;
mod raw_types;

pub use builder::{create_transport_model, fill_catalogue};
pub use config::RoutingSettings;
pub use raw_types::{BaseRequest, NetworkDocument};
