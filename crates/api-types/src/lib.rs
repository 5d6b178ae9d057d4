//! Request/response types shared between the server and its clients.
//!
//! Wire names are camelCase; ids are plain `i64` so this crate stays free of
//! domain dependencies.

use serde::{Deserialize, Serialize};

/// Body of `POST /lines` and `PUT /lines/{id}`.
///
/// The optional station fields select the section-bearing creation path:
/// when both are present, the line is created together with its first
/// section.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_station_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_station_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
}

/// Body of `POST /stations`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_request_wire_names_are_camel_case() {
        let request: LineRequest = serde_json::from_str(
            r#"{"name":"2호선","color":"bg-green-600","upStationId":1,"downStationId":2,"distance":10}"#,
        )
        .unwrap();

        assert_eq!(request.name, "2호선");
        assert_eq!(request.up_station_id, Some(1));
        assert_eq!(request.down_station_id, Some(2));
        assert_eq!(request.distance, Some(10));
    }

    #[test]
    fn test_line_request_station_fields_are_optional() {
        let request: LineRequest =
            serde_json::from_str(r#"{"name":"2호선","color":"bg-green-600"}"#).unwrap();

        assert!(request.up_station_id.is_none());
        assert!(request.down_station_id.is_none());
    }
}
