use chart_overlays::annotations::{
    BreakoutDirection, BreakoutEvent, FractalKind, FractalPoint, SignalSide, TradeSignal,
};
use chart_overlays::core::{CandleWindow, OhlcBar};
use chart_overlays::overlay::{MarkerAggregator, SourceToggles};
use chart_overlays::SeriesId;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_marker_merge_3k(c: &mut Criterion) {
    let window = CandleWindow::new(vec![
        OhlcBar::new(28_800.0, 50.0, 55.0, 45.0, 52.0).expect("bar"),
    ])
    .expect("window");

    let signals: Vec<TradeSignal> = (0..1_000)
        .map(|i| TradeSignal {
            time_ms: i * 60_000,
            side: if i % 2 == 0 {
                SignalSide::Buy
            } else {
                SignalSide::Sell
            },
            kind: "MACD".to_owned(),
            strength: (i % 10) as f64,
        })
        .collect();
    let breakouts: Vec<BreakoutEvent> = (0..1_000)
        .map(|i| BreakoutEvent {
            time_ms: i * 60_000 + 30_000,
            direction: if i % 3 == 0 {
                BreakoutDirection::Up
            } else {
                BreakoutDirection::Down
            },
            confidence: (i % 100) as f64,
        })
        .collect();
    let fractals: Vec<FractalPoint> = (0..1_000)
        .map(|i| FractalPoint {
            time_ms: i * 60_000 + 45_000,
            kind: if i % 2 == 0 {
                FractalKind::Top
            } else {
                FractalKind::Bottom
            },
            confirmed: i % 4 != 0,
        })
        .collect();

    let aggregator = MarkerAggregator::new(SeriesId::new(0));

    c.bench_function("marker_merge_3k", |b| {
        b.iter(|| {
            let merged = aggregator.merge(
                black_box(&signals),
                black_box(&breakouts),
                black_box(&fractals),
                black_box(&window),
                SourceToggles::default(),
            );
            black_box(merged)
        })
    });
}

criterion_group!(benches, bench_marker_merge_3k);
criterion_main!(benches);
