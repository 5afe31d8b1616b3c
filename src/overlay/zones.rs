use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::annotations::{ZoneAnnotation, ZoneKind};
use crate::core::CandleWindow;
use crate::error::OverlayResult;
use crate::host::{ChartHost, PrimitiveId, SeriesId};
use crate::overlay::zone_primitive::{ZonePrimitive, ZoneStyle};

/// Attach/detach lifecycle for one zone kind.
///
/// Each kind moves `Empty -> Attached(handles) -> Empty`. Every sync runs
/// the detach leg unconditionally, visibility toggle included, so a kind
/// transitioning to hidden or empty always clears its prior generation
/// before anything else is consulted. Rebuilding from scratch instead of
/// diffing individual zones keeps partial-update states impossible; zone
/// counts stay in the tens, so the rebuild cost is noise.
pub struct ZoneOverlayManager {
    kind: ZoneKind,
    series: SeriesId,
    style: ZoneStyle,
    handles: SmallVec<[PrimitiveId; 8]>,
}

impl ZoneOverlayManager {
    #[must_use]
    pub fn new(kind: ZoneKind, series: SeriesId) -> Self {
        Self {
            kind,
            series,
            style: ZoneStyle::for_kind(kind),
            handles: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ZoneStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Number of primitives currently attached for this kind.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.handles.len()
    }

    /// Reconciles the attached primitives with the incoming zone collection.
    ///
    /// Detach failures are logged and treated as already-detached: a chart
    /// reset may have torn the host-side object down first, and a failed
    /// detach must never block reattachment or leak the remaining handles.
    pub fn sync(
        &mut self,
        host: &mut dyn ChartHost,
        zones: &[ZoneAnnotation],
        window: &CandleWindow,
        enabled: bool,
    ) -> OverlayResult<()> {
        for handle in self.handles.drain(..) {
            if let Err(err) = host.detach_primitive(handle) {
                warn!(
                    error = %err,
                    kind = ?self.kind,
                    "zone primitive already detached on host; continuing teardown"
                );
            }
        }

        if !enabled || zones.is_empty() || window.is_empty() {
            debug!(kind = ?self.kind, "zone overlay left empty");
            return Ok(());
        }

        let style = self.style.validate()?;
        let clip_time = window.last_time();
        for zone in zones {
            let primitive = ZonePrimitive::new(*zone, style, clip_time);
            let handle = host.attach_primitive(self.series, Box::new(primitive))?;
            self.handles.push(handle);
        }
        debug!(kind = ?self.kind, attached = self.handles.len(), "zone overlay rebuilt");
        Ok(())
    }

    /// Full teardown on view unmount.
    pub fn detach_all(&mut self, host: &mut dyn ChartHost) {
        for handle in self.handles.drain(..) {
            if let Err(err) = host.detach_primitive(handle) {
                warn!(error = %err, kind = ?self.kind, "zone primitive already detached on host");
            }
        }
    }
}
