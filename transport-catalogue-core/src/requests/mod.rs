//! Answers to the stat requests of a network document.
//!
//! Requests only read the finalized model, so a batch is answered in
//! parallel and collected back in request order.

use rayon::prelude::*;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use crate::TransportModel;

const NOT_FOUND: &str = "not found";
const UNSUPPORTED: &str = "unsupported request";

/// Query with the id its answer is reported under
#[derive(Debug, Clone, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub kind: RequestKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RequestKind {
    /// Lines through a stop
    Stop { name: String },
    /// Statistics of a line
    Bus { name: String },
    /// Fastest itinerary between two stops
    Route { from: String, to: String },
    /// Any request this crate does not answer, such as map rendering
    #[serde(other)]
    Unsupported,
}

/// Answers every request, keeping the input order
pub fn handle_stat_requests(model: &TransportModel, requests: &[StatRequest]) -> Vec<JsonValue> {
    requests
        .par_iter()
        .map(|request| handle_stat_request(model, request))
        .collect()
}

pub fn handle_stat_request(model: &TransportModel, request: &StatRequest) -> JsonValue {
    let id = request.id;
    match &request.kind {
        RequestKind::Stop { name } => match model.lines_through_stop(name) {
            Some(lines) => json!({
                "buses": lines,
                "request_id": id,
            }),
            None => error_response(id, NOT_FOUND),
        },
        RequestKind::Bus { name } => match model.line_stats(name) {
            Some(stats) => json!({
                "curvature": stats.curvature,
                "route_length": stats.route_length,
                "stop_count": stats.stop_count,
                "unique_stop_count": stats.unique_stop_count,
                "request_id": id,
            }),
            None => error_response(id, NOT_FOUND),
        },
        RequestKind::Route { from, to } => match model.build_itinerary(from, to) {
            Some(itinerary) => json!({
                "items": itinerary.items,
                "total_time": itinerary.total_time,
                "request_id": id,
            }),
            None => error_response(id, NOT_FOUND),
        },
        RequestKind::Unsupported => {
            log::debug!("Request {id} has an unsupported type");
            error_response(id, UNSUPPORTED)
        }
    }
}

fn error_response(id: i64, message: &str) -> JsonValue {
    json!({
        "error_message": message,
        "request_id": id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoutingSettings, TransportCatalogue};

    fn model() -> TransportModel {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", 0.0, 0.0).unwrap();
        catalogue.add_stop("B", 0.0, 1.0).unwrap();
        catalogue.add_stop("C", 0.0, 2.0).unwrap();
        catalogue.add_stop("Lonely", 1.0, 1.0).unwrap();
        catalogue.add_distance("A", "B", 1000.0).unwrap();
        catalogue.add_distance("B", "C", 1000.0).unwrap();
        catalogue.add_line("1", &["A", "B", "C"], false).unwrap();
        catalogue.add_line("0", &["B"], true).unwrap();
        catalogue
            .finalize(RoutingSettings::new(5.0, 60.0))
            .unwrap()
    }

    fn request(id: i64, kind: RequestKind) -> StatRequest {
        StatRequest { id, kind }
    }

    #[test]
    fn stop_requests() {
        let model = model();
        let stop = |name: &str| RequestKind::Stop {
            name: name.to_string(),
        };

        assert_eq!(
            handle_stat_request(&model, &request(1, stop("B"))),
            json!({"buses": ["0", "1"], "request_id": 1})
        );
        assert_eq!(
            handle_stat_request(&model, &request(2, stop("Lonely"))),
            json!({"buses": [], "request_id": 2})
        );
        assert_eq!(
            handle_stat_request(&model, &request(3, stop("Z"))),
            json!({"error_message": "not found", "request_id": 3})
        );
    }

    #[test]
    fn bus_requests() {
        let model = model();
        let response = handle_stat_request(
            &model,
            &request(
                4,
                RequestKind::Bus {
                    name: "1".to_string(),
                },
            ),
        );
        assert_eq!(response["stop_count"], json!(5));
        assert_eq!(response["unique_stop_count"], json!(3));
        assert_eq!(response["route_length"], json!(4000.0));
        assert!(response["curvature"].as_f64().unwrap() > 0.0);
        assert_eq!(response["request_id"], json!(4));

        let response = handle_stat_request(
            &model,
            &request(
                5,
                RequestKind::Bus {
                    name: "0".to_string(),
                },
            ),
        );
        assert_eq!(response["curvature"], JsonValue::Null);
    }

    #[test]
    fn route_requests() {
        let model = model();
        let route = |from: &str, to: &str| RequestKind::Route {
            from: from.to_string(),
            to: to.to_string(),
        };

        assert_eq!(
            handle_stat_request(&model, &request(6, route("A", "C"))),
            json!({
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 5.0},
                    {"type": "Bus", "bus": "1", "span_count": 2, "time": 2.0},
                ],
                "total_time": 7.0,
                "request_id": 6,
            })
        );
        assert_eq!(
            handle_stat_request(&model, &request(7, route("C", "C"))),
            json!({"items": [], "total_time": 0.0, "request_id": 7})
        );
        assert_eq!(
            handle_stat_request(&model, &request(8, route("A", "Lonely"))),
            json!({"error_message": "not found", "request_id": 8})
        );
    }

    #[test]
    fn batch_keeps_order() {
        let model = model();
        let requests: Vec<_> = (0..64)
            .map(|id| {
                let kind = match id % 3 {
                    0 => RequestKind::Stop {
                        name: "A".to_string(),
                    },
                    1 => RequestKind::Bus {
                        name: "1".to_string(),
                    },
                    _ => RequestKind::Unsupported,
                };
                request(id, kind)
            })
            .collect();

        let responses = handle_stat_requests(&model, &requests);
        assert_eq!(responses.len(), requests.len());
        for (id, response) in responses.iter().enumerate() {
            assert_eq!(response["request_id"], json!(id));
        }
        assert_eq!(responses[2]["error_message"], json!("unsupported request"));
    }
}
