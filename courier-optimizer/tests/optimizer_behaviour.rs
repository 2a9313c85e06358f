//! Behavioural tests for `AnnealingOptimizer` using rstest-bdd.

use std::cell::RefCell;

use courier_core::test_support::{PlanarMetric, coord, delivery};
use courier_core::{Coordinate, DeliveryRequest, OptimizationReport, OrderOptimizer};
use courier_optimizer::{AnnealingConfig, AnnealingOptimizer};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct OptimizerWorld {
    depot: RefCell<Option<Coordinate>>,
    tour: RefCell<Vec<DeliveryRequest>>,
    report: RefCell<Option<OptimizationReport>>,
}

impl OptimizerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_report(&self) -> OptimizationReport {
        self.report
            .borrow()
            .expect("report should be recorded before assertions")
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld {
        depot: RefCell::new(None),
        tour: RefCell::new(Vec::new()),
        report: RefCell::new(None),
    }
}

#[given("a depot at the west end of a street")]
fn given_depot(world: &OptimizerWorld) {
    world.depot.replace(Some(coord("0", "0")));
}

#[given("deliveries visited far, near, then middle")]
fn given_zig_zag(world: &OptimizerWorld) {
    world.tour.replace(vec![
        delivery("0", "3", "far"),
        delivery("0", "1", "near"),
        delivery("0", "2", "middle"),
    ]);
}

#[when("the tour is optimised")]
fn when_optimised(world: &OptimizerWorld) {
    let Some(depot) = world.depot.borrow().clone() else {
        panic!("depot should be given before optimising");
    };
    let config = AnnealingConfig {
        seed: 3,
        ..AnnealingConfig::default()
    };
    let Ok(mut optimizer) = AnnealingOptimizer::with_metric(PlanarMetric, config) else {
        panic!("default schedule should be valid");
    };
    let report = optimizer.optimize(&depot, &mut world.tour.borrow_mut());
    world.report.replace(Some(report));
}

#[then("the tour costs no more than before")]
fn then_no_dearer(world: &OptimizerWorld) {
    let report = world.expect_report();
    assert!(report.optimized_cost <= report.original_cost);
    assert!((report.optimized_cost - 6.0).abs() < 1e-12);
}

#[then("every delivery is still on the tour")]
fn then_all_present(world: &OptimizerWorld) {
    let mut items: Vec<String> = world
        .tour
        .borrow()
        .iter()
        .map(|request| request.item.clone())
        .collect();
    items.sort();
    assert_eq!(items, vec!["far", "middle", "near"]);
}

#[then("the report shows no iterations")]
fn then_no_iterations(world: &OptimizerWorld) {
    assert_eq!(world.expect_report().iterations, 0);
}

#[scenario(path = "tests/features/optimizer.feature", index = 0)]
fn straightening_zig_zag(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/optimizer.feature", index = 1)]
fn optimising_empty_tour(world: OptimizerWorld) {
    let _ = world;
}
