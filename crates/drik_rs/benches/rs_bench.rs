use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drik_rs::{
    BirthMoment, ChartConfig, ChartRequest, EngineConfig, GeoPosition, compute_positions,
    compute_request, init,
};

fn facade_bench(c: &mut Criterion) {
    init(EngineConfig::default()).expect("engine init");
    let moment = BirthMoment::new(1990, 7, 4, 9, 30, -4.0);
    let place = GeoPosition::new(40.7128, -74.006).expect("valid place");

    let mut group = c.benchmark_group("facade");
    group.bench_function("compute_positions", |b| {
        b.iter(|| compute_positions(black_box(&moment), black_box(&place)))
    });

    let request = ChartRequest {
        year: 1990.0,
        month: 7.0,
        day: 4.0,
        hour: 9.0,
        minute: 30.0,
        latitude: 40.7128,
        longitude: -74.006,
        utc_offset_hours: -4.0,
    };
    let config = ChartConfig {
        include_navamsa: false,
        include_panchanga: false,
        ..ChartConfig::default()
    };
    group.bench_function("compute_request_minimal", |b| {
        b.iter(|| compute_request(black_box(&request), &config))
    });
    group.bench_function("response_to_json", |b| {
        let resp = compute_positions(&moment, &place).expect("chart");
        b.iter(|| resp.to_json(black_box(false)))
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
