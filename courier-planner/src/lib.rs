//! Delivery plan assembly for Courier.
//!
//! [`DeliveryPlanner`] ties the engine together: it asks an
//! [`OrderOptimizer`](courier_core::OrderOptimizer) for a visiting order once,
//! routes every leg of the tour (depot to the first stop, stop to stop, and
//! the final stop back to the depot) through a
//! [`Router`](courier_core::Router), and renders the legs as turn-by-turn
//! [`DeliveryCommand`]s.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod commands;
mod error;
mod planner;

pub use commands::{CompassDirection, DeliveryCommand, TurnDirection};
pub use error::PlanError;
pub use planner::{DeliveryPlan, DeliveryPlanner};
