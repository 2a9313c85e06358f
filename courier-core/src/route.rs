//! Point-to-point routes and the router seam.

use thiserror::Error;

use crate::{Coordinate, Segment};

/// A path between two stops, in travel order, with its length.
///
/// # Examples
/// ```
/// use courier_core::RouteLeg;
///
/// let leg = RouteLeg::empty();
/// assert!(leg.is_empty());
/// assert!(leg.distance.abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Segments from the start coordinate to the goal.
    pub segments: Vec<Segment>,
    /// Total length of the segments.
    pub distance: f64,
}

impl RouteLeg {
    /// Construct a leg from its segments and total distance.
    #[must_use]
    pub const fn new(segments: Vec<Segment>, distance: f64) -> Self {
        Self { segments, distance }
    }

    /// A leg that goes nowhere: start and goal coincide.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Whether the leg has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Reasons a route cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// An endpoint is not a node of the street graph.
    #[error("coordinate {coordinate} is not on the street map")]
    BadCoordinate {
        /// The unknown endpoint.
        coordinate: Coordinate,
    },
    /// Both endpoints exist but no path connects them.
    #[error("no route from {from} to {to}")]
    NoRoute {
        /// Start of the requested route.
        from: Coordinate,
        /// Goal of the requested route.
        to: Coordinate,
    },
}

impl RouteError {
    /// Stable result code for reports: `BAD_COORD` or `NO_ROUTE`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadCoordinate { .. } => "BAD_COORD",
            Self::NoRoute { .. } => "NO_ROUTE",
        }
    }
}

/// Find a shortest path between two coordinates.
///
/// Implementations return [`RouteError::BadCoordinate`] before searching when
/// an endpoint is unknown, and an empty leg when `start == end`.
pub trait Router {
    /// Route from `start` to `end`.
    ///
    /// # Errors
    /// [`RouteError::BadCoordinate`] for unknown endpoints and
    /// [`RouteError::NoRoute`] when the graph does not connect them.
    fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<RouteLeg, RouteError>;
}

impl<R: Router + ?Sized> Router for &R {
    fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<RouteLeg, RouteError> {
        (**self).route(start, end)
    }
}
