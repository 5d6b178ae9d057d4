//! Error type shared by the store and service layers.

use crate::identifiers::{LineId, StationId};

pub type Result<T> = std::result::Result<T, SubwayError>;

#[derive(Debug, thiserror::Error)]
pub enum SubwayError {
    #[error("line name already in use: {0}")]
    DuplicateLineName(String),

    #[error("line not found: {0}")]
    LineNotFound(LineId),

    #[error("station not found: {0}")]
    StationNotFound(StationId),

    #[error("station {0} is still referenced by a line")]
    StationInUse(StationId),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
