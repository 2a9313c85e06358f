//! `DeliveryPlanner` implementation.

use courier_core::{
    Coordinate, DeliveryRequest, DistanceMetric, GreatCircle, OptimizationReport, OrderOptimizer,
    RouteLeg, Router,
};
use log::{debug, info};

use crate::commands::push_leg_commands;
use crate::{DeliveryCommand, PlanError};

/// A complete delivery run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    /// Turn-by-turn instructions from the depot and back.
    pub commands: Vec<DeliveryCommand>,
    /// Sum of every routed leg, including the return to the depot.
    pub total_distance: f64,
    /// Deliveries in the order they are visited.
    pub order: Vec<DeliveryRequest>,
    /// Straight-line costs before and after reordering.
    pub optimization: OptimizationReport,
}

impl DeliveryPlan {
    /// Number of deliver commands in the plan.
    #[must_use]
    pub fn delivery_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DeliveryCommand::Deliver { .. }))
            .count()
    }
}

/// Plans a delivery run: optimise the order once, route every leg and render
/// commands.
///
/// The planner is generic over the engine boundaries: a router for legs, an
/// optimiser for the visiting order, and the metric used to measure each
/// proceed command.
#[derive(Debug)]
pub struct DeliveryPlanner<R, O, M = GreatCircle>
where
    R: Router,
    O: OrderOptimizer,
    M: DistanceMetric,
{
    router: R,
    optimizer: O,
    metric: M,
}

impl<R, O> DeliveryPlanner<R, O>
where
    R: Router,
    O: OrderOptimizer,
{
    /// Construct a planner measuring commands with great-circle distances.
    #[must_use]
    pub const fn new(router: R, optimizer: O) -> Self {
        Self::with_metric(router, optimizer, GreatCircle)
    }
}

impl<R, O, M> DeliveryPlanner<R, O, M>
where
    R: Router,
    O: OrderOptimizer,
    M: DistanceMetric,
{
    /// Construct a planner with an explicit command metric. It should match
    /// the router's metric so command distances add up to leg distances.
    #[must_use]
    pub const fn with_metric(router: R, optimizer: O, metric: M) -> Self {
        Self {
            router,
            optimizer,
            metric,
        }
    }

    /// Plan a run from `depot` through every delivery and back.
    ///
    /// The input slice is left untouched; the visiting order is returned in
    /// [`DeliveryPlan::order`].
    ///
    /// # Errors
    /// [`PlanError::NoDeliveries`] for an empty request, and
    /// [`PlanError::Route`] for the first leg the router cannot serve.
    #[expect(
        clippy::float_arithmetic,
        reason = "the plan distance is the sum of leg distances"
    )]
    pub fn plan(
        &mut self,
        depot: &Coordinate,
        deliveries: &[DeliveryRequest],
    ) -> Result<DeliveryPlan, PlanError> {
        if deliveries.is_empty() {
            return Err(PlanError::NoDeliveries);
        }

        let mut order = deliveries.to_vec();
        let optimization = self.optimizer.optimize(depot, &mut order);
        debug!(
            "visiting order cost {:.4} -> {:.4}",
            optimization.original_cost, optimization.optimized_cost
        );

        let mut commands = Vec::new();
        let mut total_distance = 0.0;
        let mut from = depot;
        for (index, delivery) in order.iter().enumerate() {
            let leg = self.route_leg(index, from, &delivery.location)?;
            total_distance += leg.distance;
            push_leg_commands(&self.metric, &leg.segments, &mut commands);
            commands.push(DeliveryCommand::Deliver {
                item: delivery.item.clone(),
            });
            from = &delivery.location;
        }
        let home = self.route_leg(order.len(), from, depot)?;
        total_distance += home.distance;
        push_leg_commands(&self.metric, &home.segments, &mut commands);

        info!(
            "planned {} deliveries: {} commands over {total_distance:.4}",
            order.len(),
            commands.len()
        );
        Ok(DeliveryPlan {
            commands,
            total_distance,
            order,
            optimization,
        })
    }

    fn route_leg(
        &self,
        leg: usize,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<RouteLeg, PlanError> {
        self.router
            .route(from, to)
            .map_err(|source| PlanError::Route { leg, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::test_support::{PlanarMetric, coord, delivery};
    use courier_core::{RouteError, Segment};
    use rstest::rstest;

    /// Routes every leg as a single straight segment named after its goal.
    struct StraightLineRouter;

    impl Router for StraightLineRouter {
        fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<RouteLeg, RouteError> {
            if start == end {
                return Ok(RouteLeg::empty());
            }
            let distance = PlanarMetric.distance(start, end);
            let segment = Segment::new(start.clone(), end.clone(), format!("To {end}"));
            Ok(RouteLeg::new(vec![segment], distance))
        }
    }

    /// Refuses any leg ending at `blocked`.
    struct BlockingRouter {
        blocked: Coordinate,
    }

    impl Router for BlockingRouter {
        fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<RouteLeg, RouteError> {
            if *end == self.blocked {
                Err(RouteError::NoRoute {
                    from: start.clone(),
                    to: end.clone(),
                })
            } else {
                StraightLineRouter.route(start, end)
            }
        }
    }

    /// Leaves the order as given.
    struct KeepOrder;

    impl OrderOptimizer for KeepOrder {
        fn optimize(
            &mut self,
            _depot: &Coordinate,
            _deliveries: &mut [DeliveryRequest],
        ) -> OptimizationReport {
            OptimizationReport::default()
        }
    }

    /// Reverses the order.
    struct Reverse;

    impl OrderOptimizer for Reverse {
        fn optimize(
            &mut self,
            _depot: &Coordinate,
            deliveries: &mut [DeliveryRequest],
        ) -> OptimizationReport {
            deliveries.reverse();
            OptimizationReport::default()
        }
    }

    fn two_stops() -> Vec<DeliveryRequest> {
        vec![delivery("0", "1", "bread"), delivery("0", "2", "milk")]
    }

    #[rstest]
    fn empty_request_is_rejected() {
        let mut planner = DeliveryPlanner::new(StraightLineRouter, KeepOrder);
        let err = planner.plan(&coord("0", "0"), &[]).expect_err("nothing to do");
        assert_eq!(err, PlanError::NoDeliveries);
        assert_eq!(err.code(), "NO_DELIVERIES");
    }

    #[rstest]
    fn plan_visits_in_optimised_order_and_returns() {
        let mut planner = DeliveryPlanner::with_metric(StraightLineRouter, Reverse, PlanarMetric);
        let plan = planner.plan(&coord("0", "0"), &two_stops()).expect("plan");

        let rendered: Vec<String> = plan.commands.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Proceed 2.00 miles east on To 0 2",
                "Deliver milk",
                "Proceed 1.00 miles west on To 0 1",
                "Deliver bread",
                "Proceed 1.00 miles west on To 0 0",
            ]
        );
        assert!((plan.total_distance - 4.0).abs() < 1e-12);
        assert_eq!(plan.delivery_count(), 2);
        let items: Vec<&str> = plan.order.iter().map(|d| d.item.as_str()).collect();
        assert_eq!(items, vec!["milk", "bread"]);
    }

    #[rstest]
    fn delivery_at_depot_needs_no_movement() {
        let mut planner = DeliveryPlanner::new(StraightLineRouter, KeepOrder);
        let plan = planner
            .plan(&coord("0", "0"), &[delivery("0", "0", "keys")])
            .expect("plan");
        assert_eq!(
            plan.commands,
            vec![DeliveryCommand::Deliver {
                item: "keys".to_owned()
            }]
        );
        assert!(plan.total_distance.abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("0", "2", 1)]
    #[case("0", "0", 2)]
    fn failing_leg_is_named(#[case] lat: &str, #[case] lon: &str, #[case] expected_leg: usize) {
        let router = BlockingRouter {
            blocked: coord(lat, lon),
        };
        let mut planner = DeliveryPlanner::new(router, KeepOrder);
        let err = planner
            .plan(&coord("0", "0"), &two_stops())
            .expect_err("blocked leg");
        match err {
            PlanError::Route { leg, source } => {
                assert_eq!(leg, expected_leg);
                assert_eq!(source.code(), "NO_ROUTE");
            }
            other => panic!("expected route error, got {other:?}"),
        }
    }

    #[rstest]
    fn input_slice_is_not_reordered() {
        let stops = two_stops();
        let mut planner = DeliveryPlanner::new(StraightLineRouter, Reverse);
        let plan = planner.plan(&coord("0", "0"), &stops).expect("plan");
        assert_eq!(stops, two_stops());
        assert_ne!(plan.order, stops);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn plan_survives_a_json_round_trip() {
        let mut planner = DeliveryPlanner::with_metric(StraightLineRouter, KeepOrder, PlanarMetric);
        let plan = planner.plan(&coord("0", "0"), &two_stops()).expect("plan");

        let json = serde_json::to_value(&plan).expect("serialise plan");
        assert_eq!(
            json.pointer("/order/0/location/longitude"),
            Some(&serde_json::Value::from("1"))
        );
        assert_eq!(
            json.pointer("/commands/1"),
            Some(&serde_json::json!({ "command": "deliver", "item": "bread" }))
        );
        let back: DeliveryPlan = serde_json::from_value(json).expect("deserialise plan");
        assert_eq!(back, plan);
    }
}
