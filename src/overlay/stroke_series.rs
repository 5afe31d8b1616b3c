use std::collections::BTreeSet;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::annotations::TrendSegment;
use crate::error::OverlayResult;
use crate::host::{ChartHost, LinePoint, LineSeriesOptions, SeriesId};
use crate::render::Color;

/// Manages one auxiliary 2-point line series per valid trend segment.
///
/// Same full-rebuild policy as the zone lifecycle: every sync removes the
/// whole previous generation before creating the next one, so stale strokes
/// can never linger next to fresh ones. Segments carry no external id;
/// within a batch the `(start_time, end_time, direction)` identity dedups
/// re-deliveries of the same stroke.
pub struct StrokeSeriesManager {
    options: LineSeriesOptions,
    handles: SmallVec<[SeriesId; 16]>,
}

impl Default for StrokeSeriesManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeSeriesManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LineSeriesOptions {
                color: Color::rgb(0.85, 0.75, 0.25),
                line_width: 1.5,
            },
            handles: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: LineSeriesOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of stroke series currently alive on the host.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.handles.len()
    }

    /// Rebuilds the stroke series set from the incoming segments.
    ///
    /// A failed removal (the host series may already be gone after a
    /// chart-wide reset) is logged per item and never aborts removal of the
    /// remaining tracked series.
    pub fn sync(
        &mut self,
        host: &mut dyn ChartHost,
        segments: &[TrendSegment],
        enabled: bool,
    ) -> OverlayResult<()> {
        for handle in self.handles.drain(..) {
            if let Err(err) = host.remove_series(handle) {
                warn!(error = %err, "stroke series already removed on host; continuing teardown");
            }
        }

        if !enabled || segments.is_empty() {
            debug!("stroke overlay left empty");
            return Ok(());
        }

        let mut seen = BTreeSet::new();
        for segment in segments {
            if !segment.is_drawable() || !seen.insert(segment.identity()) {
                continue;
            }
            let points = [
                LinePoint {
                    time: segment.start_time,
                    price: segment.start_price,
                },
                LinePoint {
                    time: segment.end_time,
                    price: segment.end_price,
                },
            ];
            let handle = host.add_line_series(self.options, &points)?;
            self.handles.push(handle);
        }
        debug!(created = self.handles.len(), "stroke overlay rebuilt");
        Ok(())
    }

    /// Full teardown on view unmount.
    pub fn remove_all(&mut self, host: &mut dyn ChartHost) {
        for handle in self.handles.drain(..) {
            if let Err(err) = host.remove_series(handle) {
                warn!(error = %err, "stroke series already removed on host");
            }
        }
    }
}
