use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use api_types::{StationRequest, StationResponse};
use subway_transit::{StationId, SubwayError};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<Response, ApiError> {
    let station = state.stations.create(&req.name).await?;

    tracing::info!("created station {} ({})", station.id, station.name);
    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse {
            id: station.id.as_i64(),
            name: station.name,
        }),
    )
        .into_response())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state.stations.find_all().await?;
    Ok(Json(
        stations
            .into_iter()
            .map(|station| StationResponse {
                id: station.id.as_i64(),
                name: station.name,
            })
            .collect(),
    ))
}

/// Missing ids answer `204`; a station still referenced by a line answers
/// `400`.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.stations.delete(StationId::new(id)).await {
        Ok(()) => {
            tracing::info!("deleted station {id}");
            StatusCode::OK.into_response()
        }
        Err(SubwayError::StationNotFound(_)) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}
