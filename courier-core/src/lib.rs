//! Core domain types for the Courier delivery-routing engine.
//!
//! The crate holds what every other crate in the workspace shares:
//! coordinates keyed by their source text, street segments and delivery
//! requests, the [`ExpandableMap`] index, great-circle helpers, and the
//! seams ([`StreetGraph`], [`Router`], [`OrderOptimizer`],
//! [`DistanceMetric`]) that routing and optimisation crates implement.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coordinate;
mod delivery;
pub mod geodesic;
pub mod map;
mod optimizer;
mod route;
mod segment;
mod street_graph;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinate::{Coordinate, CoordinateError};
pub use delivery::DeliveryRequest;
pub use geodesic::{DistanceMetric, GreatCircle, tour_cost};
pub use map::ExpandableMap;
pub use optimizer::{OptimizationReport, OrderOptimizer};
pub use route::{RouteError, RouteLeg, Router};
pub use segment::Segment;
pub use street_graph::StreetGraph;
