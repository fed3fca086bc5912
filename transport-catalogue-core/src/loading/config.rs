use serde::{Deserialize, Serialize};

use crate::{Error, Meters, Minutes};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters of the route graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting for a bus at every boarding, minutes
    pub bus_wait_time: Minutes,
    /// Average bus velocity, km/h
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: Minutes, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Checks that the settings give non-negative finite edge weights
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] describing the offending value
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_wait_time must be a non-negative number of minutes, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Minutes needed to ride the given road distance
    pub fn travel_time(&self, distance: Meters) -> Minutes {
        distance / (self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR)
    }
}
