//! HTTP routes.
//!
//! Status codes keep the service's historical contract: reading a missing
//! line answers `400 Bad Request`, while updating or deleting a missing id
//! answers `204 No Content`. The asymmetry is deliberate and pinned by the
//! acceptance tests.

mod lines;
mod stations;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/lines", post(lines::create).get(lines::list))
        .route(
            "/lines/{id}",
            get(lines::find).put(lines::update).delete(lines::remove),
        )
        .route("/stations", post(stations::create).get(stations::list))
        .route("/stations/{id}", delete(stations::remove))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
