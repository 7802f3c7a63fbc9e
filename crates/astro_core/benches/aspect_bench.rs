use astro_core::aspects::{angular_separation, AspectKind, AspectMatcher, INTRA_SET_ORB};
use astro_core::chart::{ChartSnapshot, PositionRecord};
use astro_core::ephemeris::GeoLocation;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn snapshot(offset: f64) -> ChartSnapshot {
    let bodies = (0..14)
        .map(|i| {
            PositionRecord::new(
                format!("body_{}", i),
                None,
                offset + (i as f64) * 27.5,
                0.0,
                Some(1.0),
                1,
            )
        })
        .collect();
    ChartSnapshot::new(2451545.0, GeoLocation { lat: 0.0, lon: 0.0 }, offset, bodies)
}

fn bench_separation(c: &mut Criterion) {
    c.bench_function("angular_separation_match", |b| {
        b.iter(|| {
            let sep = angular_separation(black_box(100.0), black_box(278.0));
            AspectKind::matching(sep, black_box(INTRA_SET_ORB)).count()
        })
    });
}

fn bench_intra_set(c: &mut Criterion) {
    let matcher = AspectMatcher::new();
    let natal = snapshot(3.0);
    c.bench_function("match_aspects_intra_set", |b| {
        b.iter(|| matcher.match_aspects(black_box(&natal), None, false))
    });
}

fn bench_cross_set(c: &mut Criterion) {
    let matcher = AspectMatcher::new();
    let natal = snapshot(3.0);
    let transit = snapshot(91.5);
    c.bench_function("match_aspects_cross_set", |b| {
        b.iter(|| matcher.match_aspects(black_box(&transit), Some(black_box(&natal)), true))
    });
}

criterion_group!(benches, bench_separation, bench_intra_set, bench_cross_set);
criterion_main!(benches);
