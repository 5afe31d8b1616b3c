use thiserror::Error;

use crate::host::{PrimitiveId, SeriesId};

pub type OverlayResult<T> = Result<T, OverlayError>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown series handle: {0:?}")]
    UnknownSeries(SeriesId),

    #[error("unknown primitive handle: {0:?}")]
    UnknownPrimitive(PrimitiveId),

    #[error("host rejected operation: {0}")]
    HostRejected(String),
}
