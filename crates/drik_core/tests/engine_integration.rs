//! Integration tests for the query engine.

use std::sync::Arc;

use drik_core::*;

const J2000: f64 = 2_451_545.0;

fn engine(compute_speed: bool) -> Engine {
    Engine::new(EngineConfig {
        compute_speed,
        ..EngineConfig::default()
    })
    .expect("should build engine")
}

fn chart_batch(jd: f64) -> Vec<Query> {
    ALL_BODIES.iter().map(|&body| Query { body, jd }).collect()
}

#[test]
fn batch_matches_single_queries() {
    let engine = engine(true);
    let queries = chart_batch(J2000);
    let batch = engine.query_batch(&queries);
    assert_eq!(batch.len(), queries.len());
    for (q, r) in queries.iter().zip(&batch) {
        let single = engine.query(*q).unwrap();
        assert_eq!(r.as_ref().unwrap(), &single, "{}", q.body);
    }
}

#[test]
fn batch_evaluates_earth_once_per_epoch() {
    let engine = engine(false);
    let (results, stats) = engine.query_batch_with_stats(&chart_batch(J2000));
    assert!(results.iter().all(Result::is_ok));
    // Earth + five planets + Moon; Earth reused by every planet.
    assert_eq!(stats.evaluations, 7);
    assert_eq!(stats.cache_hits, 5);
}

#[test]
fn batch_with_speed_reuses_neighbour_epochs() {
    let engine = engine(true);
    let (_, stats) = engine.query_batch_with_stats(&chart_batch(J2000));
    assert_eq!(stats.evaluations, 21);
    assert_eq!(stats.cache_hits, 15);
}

#[test]
fn batch_groups_distinct_epochs() {
    let engine = engine(false);
    let queries = [
        Query { body: Body::Mars, jd: J2000 },
        Query { body: Body::Mars, jd: J2000 + 1.0 },
        Query { body: Body::Venus, jd: J2000 },
    ];
    let (results, stats) = engine.query_batch_with_stats(&queries);
    assert_eq!(results.len(), 3);
    // Epoch 1: Mars, Earth, Venus. Epoch 2: Mars, Earth.
    assert_eq!(stats.evaluations, 5);
    assert_eq!(stats.cache_hits, 1);
    let a = results[0].as_ref().unwrap().lon_deg;
    let b = results[1].as_ref().unwrap().lon_deg;
    assert!(b > a, "Mars moves prograde in Jan 2000");
}

#[test]
fn batch_keeps_per_query_errors() {
    let engine = engine(false);
    let queries = [
        Query { body: Body::Sun, jd: f64::INFINITY },
        Query { body: Body::Sun, jd: J2000 },
    ];
    let results = engine.query_batch(&queries);
    assert!(matches!(results[0], Err(EngineError::InvalidQuery(_))));
    assert!(results[1].is_ok());
}

#[test]
fn every_longitude_normalized() {
    let engine = engine(false);
    for k in 0..40 {
        let jd = J2000 - 20_000.0 + 997.3 * k as f64;
        for r in engine.query_batch(&chart_batch(jd)) {
            let lon = r.unwrap().lon_deg;
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }
}

#[test]
fn shared_across_threads() {
    let engine = Arc::new(engine(true));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .query(Query {
                        body: Body::Moon,
                        jd: J2000 + i as f64,
                    })
                    .unwrap()
                    .lon_deg
            })
        })
        .collect();
    let lons: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(lons[0], engine.query(Query { body: Body::Moon, jd: J2000 }).unwrap().lon_deg);
}
