use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trailmark::db::{keys, MemoryStorage};
use trailmark::models::{Coordinates, Workout};
use trailmark::services::WorkoutStore;

const NUM_WORKOUTS: usize = 1000;

fn filled_store() -> WorkoutStore {
    let mut store = WorkoutStore::new(Box::new(MemoryStorage::new()), keys::WORKOUTS);
    let now = Utc::now();
    for i in 0..NUM_WORKOUTS {
        let at = Coordinates::new(37.0 + i as f64 * 1e-3, -122.0);
        let workout = if i % 2 == 0 {
            Workout::running(at, 5.0 + i as f64 * 0.01, 25.0, 170.0, now)
        } else {
            Workout::cycling(at, 30.0, 75.0 + i as f64 * 0.1, 250.0, now)
        };
        store.append(workout).expect("memory append");
    }
    store
}

fn benchmark_store_persistence(c: &mut Criterion) {
    let store = filled_store();
    let serialized = store.serialize().expect("serialize");

    let mut group = c.benchmark_group("store_persistence");

    group.bench_function("serialize_1000", |b| {
        b.iter(|| black_box(&store).serialize())
    });

    group.bench_function("restore_1000", |b| {
        let mut target = WorkoutStore::new(Box::new(MemoryStorage::new()), keys::WORKOUTS);
        b.iter(|| target.restore_from(Some(black_box(serialized.as_str()))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_store_persistence);
criterion_main!(benches);
