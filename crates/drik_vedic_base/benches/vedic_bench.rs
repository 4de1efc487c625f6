use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drik_vedic_base::{
    AyanamshaSystem, GeoPosition, LunarNode, NodeMode, TropicalLongitude, ayanamsha_deg,
    lagna_longitude_deg, lunar_node_deg, navamsa_from_longitude, placement_from_degrees,
    tithi_from_elongation, to_sidereal, yoga_from_sum, zodiac_placement,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri_mean", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd), false))
    });
    group.bench_function("true_chitra", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::TrueChitra, black_box(jd), true))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let tropical_lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("to_sidereal_placement", |b| {
        b.iter(|| {
            zodiac_placement(to_sidereal(
                TropicalLongitude::new(black_box(tropical_lon)),
                23.86,
            ))
        })
    });
    group.bench_function("placement_from_degrees", |b| {
        b.iter(|| placement_from_degrees(black_box(99.5)))
    });
    group.bench_function("navamsa", |b| {
        b.iter(|| navamsa_from_longitude(black_box(99.5)))
    });
    group.finish();
}

fn lagna_bench(c: &mut Criterion) {
    let loc = GeoPosition {
        latitude_deg: 28.6139,
        longitude_deg: 77.209,
    };

    let mut group = c.benchmark_group("lagna");
    group.bench_function("lagna_apparent", |b| {
        b.iter(|| lagna_longitude_deg(black_box(2_460_000.5), &loc, true))
    });
    group.finish();
}

fn panchanga_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let t = 0.24;

    let mut group = c.benchmark_group("panchanga_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("lunar_node_true_rahu", |b| {
        b.iter(|| lunar_node_deg(LunarNode::Rahu, black_box(t), NodeMode::True))
    });
    group.finish();
}

criterion_group!(
    benches,
    ayanamsha_bench,
    zodiac_bench,
    lagna_bench,
    panchanga_primitives_bench
);
criterion_main!(benches);
