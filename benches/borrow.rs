//! Benchmarks for the borrow/release hot path

use criterion::{Criterion, criterion_group, criterion_main};
use endpoint_pool::{
    Connection, ConnectionFactory, ConnectionPool, Endpoint, PoolConfiguration, PoolResult,
};
use std::time::Duration;

struct NullConnection {
    live: bool,
}

impl Connection for NullConnection {
    fn is_established(&self) -> bool {
        self.live
    }

    fn establish(&mut self) -> PoolResult<()> {
        self.live = true;
        Ok(())
    }

    fn teardown(&mut self) -> PoolResult<()> {
        self.live = false;
        Ok(())
    }
}

struct NullFactory;

impl ConnectionFactory for NullFactory {
    type Conn = NullConnection;

    fn create(&self, _endpoint: &Endpoint) -> PoolResult<NullConnection> {
        Ok(NullConnection { live: false })
    }
}

fn bench_reuse(c: &mut Criterion) {
    let pool = ConnectionPool::new(PoolConfiguration::default());
    let endpoint = Endpoint::https("api.example.com", 443);

    // Seed one idle connection so every iteration hits the reuse path.
    let conn = pool.borrow(&endpoint, &NullFactory).unwrap();
    pool.release(&endpoint, conn);

    c.bench_function("borrow_release_reuse", |b| {
        b.iter(|| {
            let conn = pool.borrow(&endpoint, &NullFactory).unwrap();
            pool.release(&endpoint, conn);
        })
    });
}

fn bench_eviction_scan(c: &mut Criterion) {
    let endpoint = Endpoint::https("api.example.com", 443);

    c.bench_function("borrow_evicting_stale_entries", |b| {
        b.iter_batched(
            || {
                let pool = ConnectionPool::new(
                    PoolConfiguration::new().with_keepalive_timeout(Duration::ZERO),
                );
                for _ in 0..16 {
                    let conn = NullConnection { live: true };
                    pool.release(&endpoint, conn);
                }
                pool
            },
            |pool| {
                let conn = pool.borrow(&endpoint, &NullFactory).unwrap();
                pool.release(&endpoint, conn);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_reuse, bench_eviction_scan);
criterion_main!(benches);
