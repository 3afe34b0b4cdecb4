//! Basic usage walkthrough for the endpoint pool

use endpoint_pool::{
    Connection, ConnectionFactory, ConnectionPool, Endpoint, PoolConfiguration, PoolResult,
};
use std::time::Duration;

/// Stand-in for a real socket or TLS session.
struct DemoConnection {
    endpoint: Endpoint,
    live: bool,
}

impl Connection for DemoConnection {
    fn is_established(&self) -> bool {
        self.live
    }

    fn establish(&mut self) -> PoolResult<()> {
        println!("   [handshake with {}]", self.endpoint);
        self.live = true;
        Ok(())
    }

    fn teardown(&mut self) -> PoolResult<()> {
        println!("   [closing connection to {}]", self.endpoint);
        self.live = false;
        Ok(())
    }
}

struct DemoFactory;

impl ConnectionFactory for DemoFactory {
    type Conn = DemoConnection;

    fn create(&self, endpoint: &Endpoint) -> PoolResult<DemoConnection> {
        println!("   [factory creating handle for {endpoint}]");
        Ok(DemoConnection {
            endpoint: endpoint.clone(),
            live: false,
        })
    }
}

fn main() {
    println!("=== endpoint_pool - Basic Examples ===\n");

    reuse();
    expiry();
    scoped_use();
    shutdown();
}

fn reuse() {
    println!("1. Reuse:");
    let pool = ConnectionPool::new(PoolConfiguration::default());
    let endpoint = Endpoint::https("api.example.com", 443);

    let conn = pool.borrow(&endpoint, &DemoFactory).unwrap();
    pool.release(&endpoint, conn);

    // Second borrow reuses the idle connection, no handshake this time.
    let conn = pool.borrow(&endpoint, &DemoFactory).unwrap();
    println!("   Reused, still established: {}\n", conn.is_established());
    pool.release(&endpoint, conn);
}

fn expiry() {
    println!("2. Keepalive expiry:");

    let config = PoolConfiguration::new().with_keepalive_timeout(Duration::ZERO);
    let pool = ConnectionPool::new(config);
    let endpoint = Endpoint::https("api.example.com", 443);

    let conn = pool.borrow(&endpoint, &DemoFactory).unwrap();
    pool.release(&endpoint, conn);

    // Zero keepalive: the idle entry is already stale, so the next
    // borrow evicts it and builds a fresh connection.
    let _fresh = pool.borrow(&endpoint, &DemoFactory).unwrap();
    println!();
}

fn scoped_use() {
    println!("3. Scoped use:");
    let pool = ConnectionPool::new(PoolConfiguration::default());
    let endpoint = Endpoint::http("localhost", 8080);

    let reply: Result<&str, endpoint_pool::ConnectionError> =
        pool.with_connection(&endpoint, &DemoFactory, |_conn| Ok("200 OK"));
    println!("   Body result: {}", reply.unwrap());
    println!("   Idle after success: {}", pool.idle_count(&endpoint));

    let failed: Result<&str, endpoint_pool::ConnectionError> =
        pool.with_connection(&endpoint, &DemoFactory, |_conn| {
            Err(endpoint_pool::ConnectionError::TeardownFailed(
                "mid-request failure".into(),
            ))
        });
    println!("   Body error: {}", failed.unwrap_err());
    println!("   Idle after failure: {}\n", pool.idle_count(&endpoint));
}

fn shutdown() {
    println!("4. Shutdown:");
    let pool = ConnectionPool::new(PoolConfiguration::default());
    let a = Endpoint::https("a.example.com", 443);
    let b = Endpoint::https("b.example.com", 443);

    let conn_a = pool.borrow(&a, &DemoFactory).unwrap();
    let conn_b = pool.borrow(&b, &DemoFactory).unwrap();
    pool.release(&a, conn_a);
    pool.release(&b, conn_b);

    pool.close();
    println!("   Idle after close: {:?}", pool.idle_counts());
}
