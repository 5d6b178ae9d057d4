use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use api_types::{LineRequest, LineResponse, StationResponse};
use subway_transit::{Line, LineId, StationId, SubwayError};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<Response, ApiError> {
    let line = match (req.up_station_id, req.down_station_id) {
        (Some(up), Some(down)) => {
            state
                .lines
                .create_with_section(
                    &req.name,
                    &req.color,
                    StationId::new(up),
                    StationId::new(down),
                    req.distance.unwrap_or(0),
                )
                .await?
        }
        _ => state.lines.create(&req.name, &req.color).await?,
    };

    tracing::info!("created line {} ({})", line.id, line.name);
    let location = format!("/lines/{}", line.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(to_response(&line)),
    )
        .into_response())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, ApiError> {
    let lines = state.lines.find_all().await?;
    Ok(Json(lines.iter().map(to_response).collect()))
}

/// Missing ids answer `400` here, not `404`.
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LineResponse>, ApiError> {
    let line = state.lines.find_one(LineId::new(id)).await?;
    Ok(Json(to_response(&line)))
}

/// Missing ids answer `204` here, asymmetric with [`find`].
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<LineRequest>,
) -> Response {
    match state.lines.update(LineId::new(id), &req.name, &req.color).await {
        Ok(()) => {
            tracing::info!("updated line {id}");
            StatusCode::OK.into_response()
        }
        Err(SubwayError::LineNotFound(_)) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// Missing ids answer `204` here, asymmetric with [`find`].
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.lines.delete(LineId::new(id)).await {
        Ok(()) => {
            tracing::info!("deleted line {id}");
            StatusCode::OK.into_response()
        }
        Err(SubwayError::LineNotFound(_)) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

fn to_response(line: &Line) -> LineResponse {
    LineResponse {
        id: line.id.as_i64(),
        name: line.name.clone(),
        color: line.color.clone(),
        stations: line
            .stations()
            .into_iter()
            .map(|station| StationResponse {
                id: station.id.as_i64(),
                name: station.name,
            })
            .collect(),
    }
}
