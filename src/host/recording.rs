use indexmap::IndexMap;

use crate::core::{CoordinateBridge, TimeRange};
use crate::error::{OverlayError, OverlayResult};
use crate::host::contract::{
    ChartHost, ChartMarker, LinePoint, LineSeriesOptions, MarkerSetId, OverlayPrimitive,
    PrimitiveId, SeriesId,
};
use crate::render::DrawSurface;

struct AttachedPrimitive {
    series: SeriesId,
    primitive: Box<dyn OverlayPrimitive>,
}

struct LineSeries {
    options: LineSeriesOptions,
    points: Vec<LinePoint>,
}

/// In-memory chart host with linear scales.
///
/// Stands in for a live chart in tests and headless embedders: it records
/// every series, primitive, and marker replacement, and exposes a
/// [`RecordingHost::render_pass`] that re-invokes attached primitives the
/// way a real host's render loop would. Insertion order is preserved so
/// assertions and replayed draw commands are deterministic.
pub struct RecordingHost {
    width: f64,
    height: f64,
    time_domain: TimeRange,
    price_domain: (f64, f64),
    laid_out: bool,
    main_series: SeriesId,
    line_series: IndexMap<SeriesId, LineSeries>,
    primitives: IndexMap<PrimitiveId, AttachedPrimitive>,
    marker_slots: IndexMap<SeriesId, (MarkerSetId, Vec<ChartMarker>)>,
    marker_replace_count: usize,
    next_handle: u64,
}

impl RecordingHost {
    /// Builds a host with a laid-out viewport and fixed linear scales.
    pub fn new(
        width: f64,
        height: f64,
        time_domain: TimeRange,
        price_domain: (f64, f64),
    ) -> OverlayResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(OverlayError::InvalidData(format!(
                "viewport must be finite and > 0, got {width}x{height}"
            )));
        }
        if time_domain.from >= time_domain.to {
            return Err(OverlayError::InvalidData(
                "time domain must be a non-empty interval".to_owned(),
            ));
        }
        if !price_domain.0.is_finite()
            || !price_domain.1.is_finite()
            || price_domain.0 >= price_domain.1
        {
            return Err(OverlayError::InvalidData(
                "price domain must be a finite non-empty interval".to_owned(),
            ));
        }

        Ok(Self {
            width,
            height,
            time_domain,
            price_domain,
            laid_out: true,
            main_series: SeriesId::new(0),
            line_series: IndexMap::new(),
            primitives: IndexMap::new(),
            marker_slots: IndexMap::new(),
            marker_replace_count: 0,
            next_handle: 1,
        })
    }

    /// The pre-existing candlestick series overlays attach to.
    #[must_use]
    pub fn main_series(&self) -> SeriesId {
        self.main_series
    }

    /// Simulates a chart that has not completed its initial layout:
    /// all coordinate queries resolve to `None`.
    pub fn set_laid_out(&mut self, laid_out: bool) {
        self.laid_out = laid_out;
    }

    /// Simulates a pan/zoom moving the visible time window.
    pub fn set_time_domain(&mut self, time_domain: TimeRange) {
        self.time_domain = time_domain;
    }

    /// Simulates a price-axis rescale.
    pub fn set_price_domain(&mut self, min: f64, max: f64) {
        self.price_domain = (min, max);
    }

    /// Handles of every currently attached primitive, in attach order.
    #[must_use]
    pub fn primitive_ids(&self) -> Vec<PrimitiveId> {
        self.primitives.keys().copied().collect()
    }

    /// Simulates an external chart reset tearing down one primitive.
    ///
    /// The owning manager still holds the handle; its next detach fails
    /// with `UnknownPrimitive`, which is the failure mode managers must
    /// swallow.
    pub fn forget_primitive(&mut self, primitive: PrimitiveId) {
        self.primitives.shift_remove(&primitive);
    }

    /// Simulates an external chart reset tearing down one line series.
    pub fn forget_series(&mut self, series: SeriesId) {
        self.line_series.shift_remove(&series);
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn line_series_count(&self) -> usize {
        self.line_series.len()
    }

    #[must_use]
    pub fn line_series_ids(&self) -> Vec<SeriesId> {
        self.line_series.keys().copied().collect()
    }

    #[must_use]
    pub fn line_series_points(&self, series: SeriesId) -> Option<&[LinePoint]> {
        self.line_series
            .get(&series)
            .map(|entry| entry.points.as_slice())
    }

    #[must_use]
    pub fn line_series_options(&self, series: SeriesId) -> Option<LineSeriesOptions> {
        self.line_series.get(&series).map(|entry| entry.options)
    }

    /// Markers currently occupying the series' marker slot.
    #[must_use]
    pub fn markers(&self, series: SeriesId) -> Option<&[ChartMarker]> {
        self.marker_slots
            .get(&series)
            .map(|(_, markers)| markers.as_slice())
    }

    /// How many times the marker slot has been replaced, including empty
    /// replacements.
    #[must_use]
    pub fn marker_replace_count(&self) -> usize {
        self.marker_replace_count
    }

    /// Runs one host render frame: every attached primitive draws into a
    /// fresh surface through a live coordinate bridge.
    pub fn render_pass(&self) -> OverlayResult<DrawSurface> {
        let mut surface = DrawSurface::new(self.width, self.height)?;
        for attached in self.primitives.values() {
            let bridge = CoordinateBridge::new(self, attached.series);
            attached.primitive.draw(&mut surface, &bridge);
        }
        surface.validate()?;
        Ok(surface)
    }

    fn next_handle(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn series_exists(&self, series: SeriesId) -> bool {
        series == self.main_series || self.line_series.contains_key(&series)
    }
}

impl ChartHost for RecordingHost {
    fn add_line_series(
        &mut self,
        options: LineSeriesOptions,
        points: &[LinePoint],
    ) -> OverlayResult<SeriesId> {
        let id = SeriesId::new(self.next_handle());
        self.line_series.insert(
            id,
            LineSeries {
                options,
                points: points.to_vec(),
            },
        );
        Ok(id)
    }

    fn remove_series(&mut self, series: SeriesId) -> OverlayResult<()> {
        self.line_series
            .shift_remove(&series)
            .map(|_| ())
            .ok_or(OverlayError::UnknownSeries(series))
    }

    fn attach_primitive(
        &mut self,
        series: SeriesId,
        primitive: Box<dyn OverlayPrimitive>,
    ) -> OverlayResult<PrimitiveId> {
        if !self.series_exists(series) {
            return Err(OverlayError::UnknownSeries(series));
        }
        let id = PrimitiveId::new(self.next_handle());
        self.primitives
            .insert(id, AttachedPrimitive { series, primitive });
        Ok(id)
    }

    fn detach_primitive(&mut self, primitive: PrimitiveId) -> OverlayResult<()> {
        self.primitives
            .shift_remove(&primitive)
            .map(|_| ())
            .ok_or(OverlayError::UnknownPrimitive(primitive))
    }

    fn replace_markers(
        &mut self,
        series: SeriesId,
        markers: Vec<ChartMarker>,
    ) -> OverlayResult<MarkerSetId> {
        if !self.series_exists(series) {
            return Err(OverlayError::UnknownSeries(series));
        }
        let id = MarkerSetId::new(self.next_handle());
        self.marker_slots.insert(series, (id, markers));
        self.marker_replace_count += 1;
        Ok(id)
    }

    fn price_to_coordinate(&self, series: SeriesId, price: f64) -> Option<f64> {
        if !self.laid_out || !self.series_exists(series) || !price.is_finite() {
            return None;
        }
        let (min, max) = self.price_domain;
        if price < min || price > max {
            return None;
        }
        // Pixel y grows downward while price grows upward.
        Some((1.0 - (price - min) / (max - min)) * self.height)
    }

    fn time_to_coordinate(&self, time: f64) -> Option<f64> {
        if !self.laid_out || !time.is_finite() || !self.time_domain.contains(time) {
            return None;
        }
        let span = self.time_domain.to - self.time_domain.from;
        Some((time - self.time_domain.from) / span * self.width)
    }

    fn visible_time_range(&self) -> Option<TimeRange> {
        self.laid_out.then_some(self.time_domain)
    }
}
