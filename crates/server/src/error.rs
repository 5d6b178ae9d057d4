//! Translation of domain errors into HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use api_types::ErrorResponse;
use subway_transit::SubwayError;

/// Renders a [`SubwayError`] as an HTTP response.
///
/// This is the mapping for reads and creates. Update/delete handlers
/// intercept `LineNotFound`/`StationNotFound` first, because missing ids
/// answer `204 No Content` on those verbs instead of `400`.
pub struct ApiError(pub SubwayError);

impl From<SubwayError> for ApiError {
    fn from(err: SubwayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SubwayError::DuplicateLineName(_)
            | SubwayError::LineNotFound(_)
            | SubwayError::StationNotFound(_)
            | SubwayError::StationInUse(_) => StatusCode::BAD_REQUEST,
            SubwayError::Store(err) => {
                tracing::error!("store failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
