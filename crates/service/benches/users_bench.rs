use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use configs::UpdatePolicy;
use service::users::{repo::MemoryUserStore, UserService};

fn bench_memory_service(c: &mut Criterion) {
    let svc = UserService::new(Arc::new(MemoryUserStore::new()), UpdatePolicy::Merge);

    // pre-populate outside of the benchmark
    let rt = tokio::runtime::Runtime::new().unwrap();
    for i in 0..1_000 {
        let body = format!(r#"{{"name":"Bench {i}","email":"bench{i}@example.com"}}"#);
        rt.block_on(svc.create(body.as_bytes())).unwrap();
    }

    c.bench_function("users_get_by_id", |b| {
        b.to_async(&rt).iter(|| async { svc.get(500).await.unwrap() });
    });

    c.bench_function("users_merge_update", |b| {
        b.to_async(&rt).iter(|| async { svc.update(500, br#"{"name":"Renamed"}"#).await.unwrap() });
    });

    c.bench_function("users_list_all", |b| {
        b.to_async(&rt).iter(|| async { svc.list().await.unwrap() });
    });
}

criterion_group!(benches, bench_memory_service);
criterion_main!(benches);
