//! Benchmark tests for critical operations
//!
//! Run with: cargo test --release -- --nocapture bench

use std::time::Instant;
use tempfile::NamedTempFile;

use urlalias::database::UrlStore;
use urlalias::model::{CreateRequest, ListParams};
use urlalias::resolver::AliasResolver;

/// Benchmark helper to measure execution time
fn benchmark<F>(name: &str, iterations: usize, mut f: F)
where
    F: FnMut(usize),
{
    let start = Instant::now();

    for i in 0..iterations {
        f(i);
    }

    let duration = start.elapsed();
    let avg_ms = duration.as_millis() as f64 / iterations as f64;
    let ops_per_sec = (iterations as f64 / duration.as_secs_f64()) as u64;

    println!("  {} ({} iterations)", name, iterations);
    println!("    Total time: {:?}", duration);
    println!("    Avg time: {:.3}ms", avg_ms);
    println!("    Throughput: {} ops/sec\n", ops_per_sec);
}

fn temp_resolver() -> (AliasResolver, NamedTempFile) {
    let temp_db = NamedTempFile::new().unwrap();
    let store = UrlStore::open(temp_db.path().to_str().unwrap()).unwrap();
    (AliasResolver::new(store), temp_db)
}

/// Six-character alias unique per index
fn alias_for(i: usize) -> String {
    format!("{:06x}", i)
}

fn fill(resolver: &AliasResolver, count: usize) {
    for i in 0..count {
        let req = CreateRequest {
            url: format!("https://example.com/fill{}", i),
            shorten_url: Some(alias_for(i)),
        };
        resolver.submit(&req).unwrap();
    }
}

#[test]
#[ignore] // Run explicitly with: cargo test bench --release -- --ignored --nocapture
fn bench_submit() {
    println!("\n=== Benchmark: Submit URLs ===\n");

    let (resolver, _temp_db) = temp_resolver();

    benchmark("Submit with supplied alias", 1000, |i| {
        let req = CreateRequest {
            url: format!("https://example.com/bench{}", i),
            shorten_url: Some(alias_for(i)),
        };
        resolver.submit(&req).unwrap();
    });

    // every call after the first collides on the derived alias "bench"
    benchmark("Submit rejected by alias conflict", 1000, |i| {
        let req = CreateRequest {
            url: format!("https://bench.example.org/{}", i),
            shorten_url: None,
        };
        let _ = resolver.submit(&req);
    });
}

#[test]
#[ignore]
fn bench_resolve() {
    println!("\n=== Benchmark: Resolve aliases ===\n");

    let (resolver, _temp_db) = temp_resolver();
    println!("  Preparing: Creating 1000 URLs...");
    fill(&resolver, 1000);
    println!("  Done!\n");

    benchmark("Resolve existing alias", 10000, |i| {
        resolver.resolve(&alias_for(i % 1000)).unwrap();
    });

    benchmark("Resolve missing alias", 10000, |_| {
        let _ = resolver.resolve("nope");
    });
}

#[test]
#[ignore]
fn bench_database_scaling() {
    println!("\n=== Benchmark: Database Scaling ===\n");

    let sizes = [100, 1000, 10000];

    for &size in &sizes {
        println!("  Testing with {} URLs in database...", size);
        let (resolver, _temp_db) = temp_resolver();

        let start = Instant::now();
        fill(&resolver, size);
        println!("    Fill time: {:?}", start.elapsed());

        let start = Instant::now();
        resolver
            .list(&ListParams {
                page: Some(1),
                limit: Some(10),
            })
            .unwrap();
        println!("    First page time: {:?}", start.elapsed());

        let start = Instant::now();
        resolver.list(&ListParams::default()).unwrap();
        println!("    Full list time: {:?}", start.elapsed());
        println!();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn bench_concurrent_operations() {
    println!("\n=== Benchmark: Concurrent Operations ===\n");

    let (resolver, _temp_db) = temp_resolver();

    let num_tasks = 100;
    let ops_per_task = 10;

    println!("  Running {} concurrent tasks with {} ops each...", num_tasks, ops_per_task);

    let start = Instant::now();

    let mut handles = vec![];

    for task_id in 0..num_tasks {
        let resolver = resolver.clone();

        let handle = tokio::task::spawn_blocking(move || {
            for op_id in 0..ops_per_task {
                let req = CreateRequest {
                    url: format!("https://example.com/concurrent-{}-{}", task_id, op_id),
                    shorten_url: Some(alias_for(task_id * ops_per_task + op_id)),
                };
                resolver.submit(&req).unwrap();
            }
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let duration = start.elapsed();
    let total_ops = num_tasks * ops_per_task;
    let ops_per_sec = total_ops as f64 / duration.as_secs_f64();

    println!("  Total operations: {}", total_ops);
    println!("  Total time: {:?}", duration);
    println!("  Throughput: {:.0} ops/sec\n", ops_per_sec);
}

#[test]
fn bench_summary() {
    println!("\n{}", "=".repeat(60));
    println!("Benchmark Test Suite");
    println!("{}", "=".repeat(60));
    println!("\nTo run benchmarks, use:");
    println!("  cargo test --release bench -- --ignored --nocapture");
    println!("\nAvailable benchmarks:");
    println!("  • bench_submit                - Submission and conflict rejection");
    println!("  • bench_resolve               - Alias lookups, hit and miss");
    println!("  • bench_database_scaling      - Listing at different DB sizes");
    println!("  • bench_concurrent_operations - Concurrent submissions");
    println!("\n{}\n", "=".repeat(60));
}
