//! Axum front end for the subway-line management service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
