use std::{collections::BTreeMap, io::Read};

use serde::Deserialize;

use super::config::RoutingSettings;
use crate::{Error, Meters, requests::StatRequest};

/// Input document: network description, routing settings and queries.
///
/// Other top level keys, such as map render settings, are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDocument {
    pub base_requests: Vec<BaseRequest>,
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Network element description
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances from this stop to others, meters
        #[serde(default)]
        road_distances: BTreeMap<String, Meters>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

impl NetworkDocument {
    /// Reads a document from JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonError`] if the input is not a valid document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses a document from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonError`] if the input is not a valid document
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
