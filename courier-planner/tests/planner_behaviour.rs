//! Behavioural tests for `DeliveryPlanner` using rstest-bdd.

mod support;

use std::cell::RefCell;

use courier_core::DeliveryRequest;
use courier_core::test_support::delivery;
use courier_planner::{DeliveryCommand, DeliveryPlan, PlanError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use support::{grid_planner, intersection};

const GRID: usize = 4;

struct PlannerWorld {
    deliveries: RefCell<Vec<DeliveryRequest>>,
    outcome: RefCell<Option<Result<DeliveryPlan, PlanError>>>,
}

impl PlannerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<DeliveryPlan, PlanError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    fn expect_plan(&self) -> DeliveryPlan {
        match self.expect_outcome() {
            Ok(plan) => plan,
            Err(err) => panic!("expected a plan, got {err}"),
        }
    }

    fn expect_error(&self) -> PlanError {
        match self.expect_outcome() {
            Ok(plan) => panic!("expected an error, got {plan:?}"),
            Err(err) => err,
        }
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld {
        deliveries: RefCell::new(Vec::new()),
        outcome: RefCell::new(None),
    }
}

#[given("a four by four street grid with the depot in the corner")]
fn given_grid(world: &PlannerWorld) {
    world.deliveries.borrow_mut().clear();
}

#[given("deliveries at the far corner and the grid centre")]
fn given_two_deliveries(world: &PlannerWorld) {
    world.deliveries.replace(vec![
        DeliveryRequest::new(intersection(3, 3), "flowers"),
        DeliveryRequest::new(intersection(1, 2), "groceries"),
    ]);
}

#[given("a delivery at an unmapped address")]
fn given_unmapped(world: &PlannerWorld) {
    world
        .deliveries
        .replace(vec![delivery("40.7128", "-74.0060", "bagels")]);
}

#[when("the run is planned")]
fn when_planned(world: &PlannerWorld) {
    let deliveries = world.deliveries.borrow().clone();
    let outcome = grid_planner(GRID, 11).plan(&intersection(0, 0), &deliveries);
    world.outcome.replace(Some(outcome));
}

#[then("each item is delivered exactly once")]
fn then_each_delivered(world: &PlannerWorld) {
    let plan = world.expect_plan();
    let mut items: Vec<&str> = plan
        .commands
        .iter()
        .filter_map(|command| match command {
            DeliveryCommand::Deliver { item } => Some(item.as_str()),
            _ => None,
        })
        .collect();
    items.sort_unstable();
    assert_eq!(items, vec!["flowers", "groceries"]);
}

#[then("the run ends by driving back to the depot")]
fn then_ends_driving(world: &PlannerWorld) {
    let plan = world.expect_plan();
    assert!(matches!(
        plan.commands.last(),
        Some(DeliveryCommand::Proceed { .. })
    ));
}

#[then("the plan distance matches its proceed commands")]
fn then_distance_matches(world: &PlannerWorld) {
    let plan = world.expect_plan();
    let proceeded: f64 = plan
        .commands
        .iter()
        .filter_map(|command| match command {
            DeliveryCommand::Proceed { distance, .. } => Some(*distance),
            _ => None,
        })
        .sum();
    assert!(plan.total_distance > 0.0);
    assert!((plan.total_distance - proceeded).abs() < 1e-9);
}

#[then("planning fails with a bad coordinate")]
fn then_bad_coordinate(world: &PlannerWorld) {
    assert_eq!(world.expect_error().code(), "BAD_COORD");
}

#[then("planning fails because there is nothing to deliver")]
fn then_nothing_to_deliver(world: &PlannerWorld) {
    assert_eq!(world.expect_error(), PlanError::NoDeliveries);
}

#[scenario(path = "tests/features/planner.feature", index = 0)]
fn planning_grid_run(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/planner.feature", index = 1)]
fn planning_off_map(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/planner.feature", index = 2)]
fn planning_empty_run(world: PlannerWorld) {
    let _ = world;
}
