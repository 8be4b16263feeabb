use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::sync::Arc;

use bedrock_core::AppResult;
use bedrock_infra::dispatch::{LazyRunnerRegistry, MigrationRunner, RunnerRegistry};

struct NoopRunner(&'static str);

impl MigrationRunner for NoopRunner {
    fn backend(&self) -> &str {
        self.0
    }

    fn apply(&self) -> AppResult<()> {
        Ok(())
    }

    fn rollback(&self) -> AppResult<()> {
        Ok(())
    }
}

const BACKENDS: [&str; 6] = ["postgres", "cassandra", "neo4j", "qdrant", "s3", "redis"];

fn eager_registry() -> RunnerRegistry<dyn MigrationRunner> {
    RunnerRegistry::from_runners(
        BACKENDS
            .iter()
            .map(|&b| Arc::new(NoopRunner(b)) as Arc<dyn MigrationRunner>),
    )
    .unwrap()
}

fn lazy_registry() -> LazyRunnerRegistry<dyn MigrationRunner> {
    BACKENDS
        .iter()
        .fold(LazyRunnerRegistry::new(), |registry, &backend| {
            registry
                .register(backend, move || {
                    Ok(Arc::new(NoopRunner(backend)) as Arc<dyn MigrationRunner>)
                })
                .unwrap()
        })
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let eager = eager_registry();
    group.bench_function("eager_lowercase_hit", |b| {
        b.iter(|| eager.resolve(black_box("postgres")).is_ok());
    });
    group.bench_function("eager_mixed_case_hit", |b| {
        b.iter(|| eager.resolve(black_box("PostGreS")).is_ok());
    });
    group.bench_function("eager_miss", |b| {
        b.iter(|| eager.resolve(black_box("mongodb")).is_err());
    });

    let lazy = lazy_registry();
    lazy.resolve("postgres").unwrap();
    group.bench_function("lazy_warm_hit", |b| {
        b.iter(|| lazy.resolve(black_box("Postgres")).is_ok());
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
