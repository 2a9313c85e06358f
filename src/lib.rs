//! Facade crate for the Courier delivery-routing engine.
//!
//! This crate re-exports the core domain types and exposes the router,
//! order optimiser, planner and input loaders behind feature flags.

#![forbid(unsafe_code)]

pub use courier_core::{
    Coordinate, CoordinateError, DeliveryRequest, DistanceMetric, ExpandableMap, GreatCircle,
    OptimizationReport, OrderOptimizer, RouteError, RouteLeg, Router, Segment, StreetGraph,
    tour_cost,
};

#[cfg(feature = "router")]
pub use courier_router::AStarRouter;

#[cfg(feature = "optimizer")]
pub use courier_optimizer::{AnnealingConfig, AnnealingConfigError, AnnealingOptimizer};

#[cfg(feature = "planner")]
pub use courier_planner::{
    CompassDirection, DeliveryCommand, DeliveryPlan, DeliveryPlanner, PlanError, TurnDirection,
};

#[cfg(feature = "data")]
pub use courier_data::{DeliveryManifest, ManifestError, StreetMap, StreetMapError};
