//! Criterion benchmarks for the A* router.
//!
//! Measures corner-to-corner routing across square street grids of several
//! sizes so regressions in the search loop or the node index show up.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package courier-router
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use courier_core::Router;
use courier_router::AStarRouter;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};


use bench_support::{GRID_SIZES, full_grid, grid_coordinate};

/// Benchmark corner-to-corner routes for each grid size.
fn bench_route_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_time");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for &size in GRID_SIZES {
        let router = AStarRouter::new(full_grid(size));
        let start = grid_coordinate(0, 0);
        let goal = grid_coordinate(size - 1, size - 1);

        #[expect(
            clippy::as_conversions,
            reason = "Grid sizes are small constants"
        )]
        let intersections = (size * size) as u64;
        group.throughput(Throughput::Elements(intersections));
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking route performance, result is intentionally discarded"
                )]
                let _ = router.route(&start, &goal);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route_times);
criterion_main!(benches);
