//! Error types for plan assembly.

use courier_core::RouteError;
use thiserror::Error;

/// Reasons a delivery plan cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request contained no deliveries.
    #[error("no deliveries to plan")]
    NoDeliveries,
    /// A leg of the tour could not be routed. Leg `0` starts at the depot;
    /// the last leg returns to it.
    #[error("leg {leg} could not be routed: {source}")]
    Route {
        /// Index of the failing leg.
        leg: usize,
        /// The router's error.
        #[source]
        source: RouteError,
    },
}

impl PlanError {
    /// Stable result code: `NO_DELIVERIES`, or the router's code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoDeliveries => "NO_DELIVERIES",
            Self::Route { source, .. } => source.code(),
        }
    }
}
