mod contract;
mod recording;

pub use contract::{
    ChartHost, ChartMarker, LinePoint, LineSeriesOptions, MarkerSetId, MarkerShape, MarkerSide,
    OverlayPrimitive, PrimitiveId, SeriesId,
};
pub use recording::RecordingHost;
