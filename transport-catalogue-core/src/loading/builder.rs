use log::info;

use super::raw_types::{BaseRequest, NetworkDocument};
use crate::{Error, TransportCatalogue, TransportModel};

/// Creates a finalized transport model from a network document
///
/// # Errors
///
/// Returns an error if the document references unknown stops, repeats a
/// stop or line name, or carries invalid routing settings
pub fn create_transport_model(document: &NetworkDocument) -> Result<TransportModel, Error> {
    let mut catalogue = TransportCatalogue::new();
    fill_catalogue(&mut catalogue, &document.base_requests)?;

    let model = catalogue.finalize(document.routing_settings)?;
    info!("Transport model created successfully: {model}");
    Ok(model)
}

/// Adds the described stops, then road distances, then lines.
///
/// Lines and distances may appear before the stops they reference in the input.
///
/// # Errors
///
/// Stops at the first construction error
pub fn fill_catalogue(
    catalogue: &mut TransportCatalogue,
    requests: &[BaseRequest],
) -> Result<(), Error> {
    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name.as_str(), *latitude, *longitude)?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, &meters) in road_distances {
                catalogue.add_distance(name, to, meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_line(name.as_str(), stops.as_slice(), *is_roundtrip)?;
        }
    }

    info!(
        "Loaded {} stops, {} road distances and {} lines",
        catalogue.stop_count(),
        catalogue.road_distance_count(),
        catalogue.line_count()
    );
    Ok(())
}
