//! Street grids and planners shared by the planner integration tests.

use courier_core::Coordinate;
use courier_core::test_support::{MemoryGraph, coord};
use courier_optimizer::{AnnealingConfig, AnnealingOptimizer};
use courier_planner::DeliveryPlanner;
use courier_router::AStarRouter;

/// Planner over an in-memory grid with production router and optimiser.
pub type GridPlanner = DeliveryPlanner<AStarRouter<MemoryGraph>, AnnealingOptimizer>;

/// Intersection at `row`, `col`, spaced 0.001 degrees apart.
pub fn intersection(row: usize, col: usize) -> Coordinate {
    coord(&format!("34.{:03}", 100 + row), &format!("-118.{:03}", 300 + col))
}

/// A `size × size` grid of two-way streets.
pub fn street_grid(size: usize) -> MemoryGraph {
    let mut graph = MemoryGraph::default();
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                graph = graph.with_road(
                    &format!("{row} Street"),
                    intersection(row, col),
                    intersection(row, col + 1),
                );
            }
            if row + 1 < size {
                graph = graph.with_road(
                    &format!("{col} Avenue"),
                    intersection(row, col),
                    intersection(row + 1, col),
                );
            }
        }
    }
    graph
}

/// Planner over a `size × size` grid with a short, seeded schedule.
pub fn grid_planner(size: usize, seed: u64) -> GridPlanner {
    let optimizer = AnnealingOptimizer::with_config(AnnealingConfig {
        seed,
        max_iterations: Some(200),
        ..AnnealingConfig::default()
    })
    .unwrap_or_else(|err| panic!("test schedule should be valid: {err}"));
    DeliveryPlanner::new(AStarRouter::new(street_grid(size)), optimizer)
}
